//! Shared plumbing for the Direct3D 11 tutorial programs: the Win32 window and
//! message loop, device and swap chain creation, shader compilation, command
//! line parsing and logging setup.

mod bindings;
mod command_line;
mod helpers;
mod logging;

#[cfg(windows)]
mod dx_sample;
#[cfg(windows)]
mod graphics;

pub use bindings::*;
pub use command_line::*;
pub use helpers::*;
pub use logging::*;

#[cfg(windows)]
pub use dx_sample::*;
#[cfg(windows)]
pub use graphics::*;

/// Client area width every tutorial window is created with.
pub const SCREEN_WIDTH: i32 = 800;
/// Client area height every tutorial window is created with.
pub const SCREEN_HEIGHT: i32 = 600;

/// Deep blue the back buffer is cleared to each frame.
pub const CLEAR_COLOR: [f32; 4] = [0.0, 0.2, 0.4, 1.0];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_800_by_600() {
        assert_eq!((SCREEN_WIDTH, SCREEN_HEIGHT), (800, 600));
    }

    #[test]
    fn clear_color_is_opaque_deep_blue() {
        let [r, g, b, a] = CLEAR_COLOR;
        assert_eq!(r, 0.0);
        assert!(b > g && g > r);
        assert_eq!(a, 1.0);
    }
}
