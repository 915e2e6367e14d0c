pub mod adapter;
#[cfg(windows)]
pub mod devices;
#[cfg(windows)]
pub mod shaders;
