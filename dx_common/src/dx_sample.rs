use crate::{SampleCommandLine, SCREEN_HEIGHT, SCREEN_WIDTH};
use tracing::{debug, info};
use windows::Win32::Graphics::Gdi::{UpdateWindow, HBRUSH};
use windows::Win32::UI::Input::KeyboardAndMouse::VK_ESCAPE;
use windows::{
    core::*, Win32::Foundation::*, Win32::System::LibraryLoader::*,
    Win32::UI::WindowsAndMessaging::*,
};

/// Screen position of the window's top-left corner.
const WINDOW_POSITION: (i32, i32) = (300, 300);

pub trait DXSample {
    fn new(command_line: &SampleCommandLine) -> Result<Self>
    where
        Self: Sized;
    fn bind_to_window(&mut self, hwnd: &HWND) -> Result<()>;
    fn update(&mut self) {}
    fn render(&mut self) -> Result<()> {
        Ok(())
    }

    fn title(&self) -> String {
        "DXSample".into()
    }

    /// Brush the window class erases the client area with. Samples that
    /// repaint the whole client area every frame keep the null brush.
    fn background_brush(&self) -> HBRUSH {
        HBRUSH::default()
    }

    /// Client area size; the back buffer matches it.
    fn window_size(&self) -> (i32, i32) {
        (SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

/// Creates the window, binds the sample to it and runs the message loop until
/// the window is destroyed. The sample renders once per loop iteration.
pub fn init_sample<S: DXSample>() -> Result<()> {
    let command_line = SampleCommandLine::default();
    let mut sample = S::new(&command_line)?;

    let instance = unsafe { GetModuleHandleW(None)? };
    // 填写 WNDCLASSEX 结构体，描述窗口类的特征
    let wc = WNDCLASSEXW {
        cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
        // 宽度或高度改变时重绘整个窗口
        style: CS_HREDRAW | CS_VREDRAW,
        lpfnWndProc: Some(wndproc),
        hInstance: instance.into(),
        hCursor: unsafe { LoadCursorW(None, IDC_ARROW)? },
        hbrBackground: sample.background_brush(),
        lpszClassName: w!("WindowClass1"),
        ..Default::default()
    };

    let atom = unsafe { RegisterClassExW(&wc) };
    if atom == 0 {
        return Err(Error::from_win32());
    }

    // 窗口的外框尺寸要比客户区大，按客户区反推出整个窗口的大小
    let (width, height) = sample.window_size();
    let mut window_rect = RECT {
        left: 0,
        top: 0,
        right: width,
        bottom: height,
    };
    unsafe { AdjustWindowRect(&mut window_rect, WS_OVERLAPPEDWINDOW, false)? };

    let mut title = sample.title();
    if command_line.use_warp_device {
        title.push_str(" (WARP)");
    }

    let hwnd = unsafe {
        CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            w!("WindowClass1"), // 使用前面注册的窗口类
            &HSTRING::from(title.as_str()),
            WS_OVERLAPPEDWINDOW,
            WINDOW_POSITION.0,
            WINDOW_POSITION.1,
            window_rect.right - window_rect.left,
            window_rect.bottom - window_rect.top,
            None, // no parent window
            None, // no menus
            instance,
            None,
        )
    };
    if hwnd.0 == 0 {
        return Err(Error::from_win32());
    }
    info!("created window \"{}\" with a {}x{} client area", title, width, height);

    sample.bind_to_window(&hwnd)?;

    unsafe {
        let _ = ShowWindow(hwnd, SW_SHOW);
        let _ = UpdateWindow(hwnd);
    }

    let exit_code = run_message_loop(&mut sample)?;
    debug!("message loop finished with exit code {}", exit_code);
    Ok(())
}

/// Drains every pending message, then renders a frame. Returns the `WM_QUIT`
/// exit code.
fn run_message_loop<S: DXSample>(sample: &mut S) -> Result<usize> {
    let mut message = MSG::default();
    loop {
        while unsafe { PeekMessageW(&mut message, None, 0, 0, PM_REMOVE) }.as_bool() {
            if message.message == WM_QUIT {
                return Ok(message.wParam.0);
            }
            unsafe {
                let _ = TranslateMessage(&message);
                DispatchMessageW(&message);
            }
        }

        sample.update();
        sample.render()?;
    }
}

/// 窗口过程会处理窗口所接收到的消息
extern "system" fn wndproc(window: HWND, message: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    match message {
        WM_DESTROY => {
            unsafe { PostQuitMessage(0) };
            LRESULT::default()
        }
        WM_KEYDOWN if wparam.0 == VK_ESCAPE.0 as usize => {
            // WM_DESTROY follows and posts the quit message.
            let _ = unsafe { DestroyWindow(window) };
            LRESULT::default()
        }
        _ => unsafe { DefWindowProcW(window, message, wparam, lparam) },
    }
}
