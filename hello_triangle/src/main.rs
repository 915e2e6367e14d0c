//! Tutorial 3: draw one colored triangle with a compiled vertex/pixel shader
//! pair on top of the Direct3D setup from tutorial 2.

#![cfg_attr(not(windows), allow(dead_code))]

#[cfg(windows)]
mod app;
mod vertex;

use tracing::info;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    dx_common::init_logging();
    info!("starting the hello triangle tutorial");
    run()?;
    info!("window closed, Direct3D released");
    Ok(())
}

#[cfg(windows)]
fn run() -> eyre::Result<()> {
    dx_common::init_sample::<app::hello_triangle::Sample>()?;
    Ok(())
}

#[cfg(not(windows))]
fn run() -> eyre::Result<()> {
    eyre::bail!("the Direct3D 11 tutorials need Windows")
}
