use dx_common::{DXSample, Direct3D, SampleCommandLine, CLEAR_COLOR};
use windows::{core::*, Win32::Foundation::*};

pub struct Sample {
    command_line: SampleCommandLine,
    direct3d: Option<Direct3D>,
}

impl DXSample for Sample {
    fn new(command_line: &SampleCommandLine) -> Result<Self> {
        Ok(Sample {
            command_line: command_line.clone(),
            direct3d: None,
        })
    }

    fn bind_to_window(&mut self, hwnd: &HWND) -> Result<()> {
        let direct3d = Direct3D::new(hwnd, &self.command_line, self.window_size())?;
        self.direct3d = Some(direct3d);
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let Some(direct3d) = &self.direct3d else {
            return Ok(());
        };

        direct3d.clear(&CLEAR_COLOR);
        // 在这里向后台缓冲区绘制 3D 内容
        direct3d.present()
    }

    fn title(&self) -> String {
        "Our First Direct3D Program".into()
    }
}
