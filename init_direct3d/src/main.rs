//! Tutorial 2: create the device and swap chain, then clear the back buffer to
//! blue and present it every frame.

#[cfg(windows)]
mod sample;

use tracing::info;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    dx_common::init_logging();
    info!("starting the Direct3D initialization tutorial");
    run()?;
    info!("window closed, Direct3D released");
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
