//! Tutorial 1: a window and a message loop, nothing drawn.

#[cfg(windows)]
mod sample;

use tracing::info;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    dx_common::init_logging();
    info!("starting the blank window tutorial");
    run()?;
    info!("window closed");
    Ok(())
}

#[cfg(windows)]
fn run() -> eyre::Result<()> {
    dx_common::init_sample::<sample::Sample>()?;
    Ok(())
}

#[cfg(not(windows))]
fn run() -> eyre::Result<()> {
    eyre::bail!("the Direct3D 11 tutorials need Windows")
}
