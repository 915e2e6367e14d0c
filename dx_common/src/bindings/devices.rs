use crate::SampleCommandLine;
use tracing::{debug, info, warn};

use windows::{
    core::*, Win32::Foundation::*, Win32::Graphics::Direct3D::*, Win32::Graphics::Direct3D11::*,
    Win32::Graphics::Dxgi::Common::*, Win32::Graphics::Dxgi::*,
};

/// 要初始化 Direct3D，先要一次性创建设备、立即上下文和交换链。
/// 设备负责创建资源，立即上下文负责向 GPU 发出渲染命令，交换链负责前后台缓冲区的翻转。
pub fn create_device_and_swap_chain(
    hwnd: &HWND,
    command_line: &SampleCommandLine,
    (width, height): (i32, i32),
) -> Result<(IDXGISwapChain, ID3D11Device, ID3D11DeviceContext)> {
    let swap_chain_desc = DXGI_SWAP_CHAIN_DESC {
        BufferDesc: DXGI_MODE_DESC {
            Width: width as u32,
            Height: height as u32,
            // 32 位颜色，每个通道 8 位
            Format: DXGI_FORMAT_R8G8B8A8_UNORM,
            ..Default::default()
        },
        SampleDesc: DXGI_SAMPLE_DESC {
            Count: command_line.sample_count,
            Quality: 0,
        },
        BufferUsage: DXGI_USAGE_RENDER_TARGET_OUTPUT,
        // 一个后台缓冲区
        BufferCount: 1,
        OutputWindow: *hwnd,
        Windowed: TRUE,
        SwapEffect: DXGI_SWAP_EFFECT_DISCARD,
        // Alt+Enter switches between windowed and full-screen.
        Flags: DXGI_SWAP_CHAIN_FLAG_ALLOW_MODE_SWITCH.0 as u32,
    };

    let driver_type = if command_line.use_warp_device {
        D3D_DRIVER_TYPE_WARP
    } else {
        D3D_DRIVER_TYPE_HARDWARE
    };

    let created = if cfg!(debug_assertions) {
        // The debug layer needs the Graphics Tools optional feature installed.
        create_with_flags(driver_type, D3D11_CREATE_DEVICE_DEBUG, &swap_chain_desc).or_else(
            |error| {
                if !is_debug_layer_missing(error.code()) {
                    return Err(error);
                }
                warn!("debug layer unavailable ({}), continuing without it", error);
                create_with_flags(
                    driver_type,
                    D3D11_CREATE_DEVICE_FLAG::default(),
                    &swap_chain_desc,
                )
            },
        )
    } else {
        create_with_flags(
            driver_type,
            D3D11_CREATE_DEVICE_FLAG::default(),
            &swap_chain_desc,
        )
    };

    let (swap_chain, device, context, feature_level) = created?;
    info!(
        "created {} device at feature level {}, {}x{} back buffer, {}x MSAA",
        if command_line.use_warp_device { "WARP" } else { "hardware" },
        feature_level_name(feature_level),
        width,
        height,
        command_line.sample_count,
    );

    Ok((swap_chain, device, context))
}

/// `D3D11_CREATE_DEVICE_DEBUG` fails with this code when the SDK layers are
/// not installed. Any other failure is not about the debug layer.
fn is_debug_layer_missing(code: HRESULT) -> bool {
    code == DXGI_ERROR_SDK_COMPONENT_MISSING
}

fn create_with_flags(
    driver_type: D3D_DRIVER_TYPE,
    flags: D3D11_CREATE_DEVICE_FLAG,
    swap_chain_desc: &DXGI_SWAP_CHAIN_DESC,
) -> Result<(
    IDXGISwapChain,
    ID3D11Device,
    ID3D11DeviceContext,
    D3D_FEATURE_LEVEL,
)> {
    let mut swap_chain = None;
    let mut device = None;
    let mut context = None;
    let mut feature_level = D3D_FEATURE_LEVEL::default();

    unsafe {
        D3D11CreateDeviceAndSwapChain(
            None, // 默认适配器
            driver_type,
            None, // 不使用软件光栅化模块
            flags,
            None, // 默认的功能级别列表
            D3D11_SDK_VERSION,
            Some(swap_chain_desc),
            Some(&mut swap_chain),
            Some(&mut device),
            Some(&mut feature_level),
            Some(&mut context),
        )?;
    }

    match (swap_chain, device, context) {
        (Some(swap_chain), Some(device), Some(context)) => {
            Ok((swap_chain, device, context, feature_level))
        }
        _ => Err(E_POINTER.into()),
    }
}

/// 获取交换链中的后台缓冲区，并为它创建渲染目标视图。
/// The texture reference is dropped on return; the view keeps the buffer alive.
pub fn create_render_target(
    device: &ID3D11Device,
    swap_chain: &IDXGISwapChain,
) -> Result<ID3D11RenderTargetView> {
    let back_buffer: ID3D11Texture2D = unsafe { swap_chain.GetBuffer(0)? };

    let mut render_target = None;
    unsafe { device.CreateRenderTargetView(&back_buffer, None, Some(&mut render_target))? };
    debug!("created render target view over back buffer 0");

    render_target.ok_or_else(|| E_POINTER.into())
}

/// 视口覆盖整个后台缓冲区
pub fn full_viewport((width, height): (i32, i32)) -> D3D11_VIEWPORT {
    D3D11_VIEWPORT {
        TopLeftX: 0.0,
        TopLeftY: 0.0,
        Width: width as f32,
        Height: height as f32,
        MinDepth: D3D11_MIN_DEPTH,
        MaxDepth: D3D11_MAX_DEPTH,
    }
}

pub fn feature_level_name(level: D3D_FEATURE_LEVEL) -> &'static str {
    match level {
        D3D_FEATURE_LEVEL_9_1 => "9_1",
        D3D_FEATURE_LEVEL_9_2 => "9_2",
        D3D_FEATURE_LEVEL_9_3 => "9_3",
        D3D_FEATURE_LEVEL_10_0 => "10_0",
        D3D_FEATURE_LEVEL_10_1 => "10_1",
        D3D_FEATURE_LEVEL_11_0 => "11_0",
        D3D_FEATURE_LEVEL_11_1 => "11_1",
        _ => "unknown",
    }
}

#[cfg(all(test, windows))]
mod tests {
    use super::*;

    #[test]
    fn viewport_covers_the_whole_back_buffer() {
        let viewport = full_viewport((800, 600));
        assert_eq!((viewport.TopLeftX, viewport.TopLeftY), (0.0, 0.0));
        assert_eq!((viewport.Width, viewport.Height), (800.0, 600.0));
        assert_eq!((viewport.MinDepth, viewport.MaxDepth), (0.0, 1.0));
    }

    #[test]
    fn feature_levels_have_short_names() {
        assert_eq!(feature_level_name(D3D_FEATURE_LEVEL_9_3), "9_3");
        assert_eq!(feature_level_name(D3D_FEATURE_LEVEL_10_0), "10_0");
        assert_eq!(feature_level_name(D3D_FEATURE_LEVEL_10_1), "10_1");
        assert_eq!(feature_level_name(D3D_FEATURE_LEVEL_11_0), "11_0");
        assert_eq!(feature_level_name(D3D_FEATURE_LEVEL_11_1), "11_1");
        assert_eq!(feature_level_name(D3D_FEATURE_LEVEL_12_0), "unknown");
    }

    #[test]
    fn only_a_missing_sdk_layer_triggers_the_retry() {
        assert!(is_debug_layer_missing(DXGI_ERROR_SDK_COMPONENT_MISSING));
        assert!(!is_debug_layer_missing(E_INVALIDARG));
        assert!(!is_debug_layer_missing(DXGI_ERROR_UNSUPPORTED));
        assert!(!is_debug_layer_missing(E_FAIL));
    }
}
