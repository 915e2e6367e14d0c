use dx_common::{DXSample, SampleCommandLine};
use tracing::debug;
use windows::{core::*, Win32::Foundation::*, Win32::Graphics::Gdi::*};

/// Opens the window and leaves its client area to the system.
pub struct Sample;

impl DXSample for Sample {
    fn new(_command_line: &SampleCommandLine) -> Result<Self> {
        Ok(Sample)
    }

    fn bind_to_window(&mut self, hwnd: &HWND) -> Result<()> {
        debug!("window {:?} has nothing to bind", hwnd);
        Ok(())
    }

    fn title(&self) -> String {
        "Our First Windowed Program".into()
    }

    /// Nothing renders into this window, so the class brush erases it.
    /// System color brushes are the color index plus one.
    fn background_brush(&self) -> HBRUSH {
        HBRUSH((COLOR_WINDOW.0 + 1) as isize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Direct3DSample;

    impl DXSample for Direct3DSample {
        fn new(_command_line: &SampleCommandLine) -> Result<Self> {
            Ok(Direct3DSample)
        }

        fn bind_to_window(&mut self, _hwnd: &HWND) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn blank_window_is_erased_with_the_window_color() {
        let brush = Sample.background_brush();
        assert!(!brush.is_invalid());
        assert_eq!(brush.0, COLOR_WINDOW.0 as isize + 1);
    }

    #[test]
    fn samples_that_render_keep_a_null_brush() {
        assert_eq!(Direct3DSample.background_brush(), HBRUSH::default());
    }
}
