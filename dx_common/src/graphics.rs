use crate::adapter::print_adapter_info;
use crate::devices::{create_device_and_swap_chain, create_render_target, full_viewport};
use crate::SampleCommandLine;
use tracing::{debug, warn};
use windows::{
    core::*, Win32::Foundation::*, Win32::Graphics::Direct3D11::*, Win32::Graphics::Dxgi::*,
};

/// Everything tutorials two and three need to clear and present a frame: the
/// device, its immediate context, the swap chain and a view of its back buffer
/// bound as the render target.
pub struct Direct3D {
    pub swap_chain: IDXGISwapChain,
    pub device: ID3D11Device,
    pub context: ID3D11DeviceContext,
    pub back_buffer: ID3D11RenderTargetView,
    pub viewport: D3D11_VIEWPORT,
}

impl Direct3D {
    pub fn new(hwnd: &HWND, command_line: &SampleCommandLine, size: (i32, i32)) -> Result<Self> {
        let (swap_chain, device, context) = create_device_and_swap_chain(hwnd, command_line, size)?;

        if let Err(error) = print_adapter_info(&device) {
            warn!("could not query the adapter: {}", error);
        }

        let back_buffer = create_render_target(&device, &swap_chain)?;
        let viewport = full_viewport(size);

        unsafe {
            // 将后台缓冲区设为渲染目标，本教程不使用深度/模板缓冲区
            context.OMSetRenderTargets(Some(&[Some(back_buffer.clone())]), None);
            context.RSSetViewports(Some(&[viewport]));
        }

        Ok(Direct3D {
            swap_chain,
            device,
            context,
            back_buffer,
            viewport,
        })
    }

    /// 用纯色清空后台缓冲区
    pub fn clear(&self, color: &[f32; 4]) {
        unsafe { self.context.ClearRenderTargetView(&self.back_buffer, color) };
    }

    /// 交换前台缓冲区与后台缓冲区
    pub fn present(&self) -> Result<()> {
        unsafe { self.swap_chain.Present(0, 0) }.ok()
    }
}

impl Drop for Direct3D {
    fn drop(&mut self) {
        // A swap chain has to be back in windowed mode before it is released.
        if let Err(error) = unsafe { self.swap_chain.SetFullscreenState(false, None) } {
            warn!("could not leave full-screen mode: {}", error);
        }
        debug!("releasing Direct3D objects");
    }
}
