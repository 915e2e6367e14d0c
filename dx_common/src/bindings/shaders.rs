use tracing::{debug, error};

use std::ffi::CString;
use windows::{
    core::*, Win32::Foundation::*, Win32::Graphics::Direct3D::Fxc::*, Win32::Graphics::Direct3D::*,
};

/// Compiles one entry point of an HLSL source held in memory.
///
/// `source_name` only shows up in compiler diagnostics. When compilation fails
/// the compiler's messages are logged and the HRESULT is returned.
pub fn compile_shader(
    source: &str,
    source_name: &str,
    entry_point: &str,
    target: &str,
) -> Result<ID3DBlob> {
    let source_name_c = c_string(source_name)?;
    let entry_point_c = c_string(entry_point)?;
    let target_c = c_string(target)?;

    let compile_flags = if cfg!(debug_assertions) {
        D3DCOMPILE_DEBUG | D3DCOMPILE_SKIP_OPTIMIZATION
    } else {
        0
    };

    let mut code = None;
    let mut errors = None;
    let result = unsafe {
        D3DCompile(
            source.as_ptr() as *const _,
            source.len(),
            PCSTR(source_name_c.as_ptr() as *const u8),
            None,
            None,
            PCSTR(entry_point_c.as_ptr() as *const u8),
            PCSTR(target_c.as_ptr() as *const u8),
            compile_flags,
            0,
            &mut code,
            Some(&mut errors),
        )
    };

    if let Err(compile_error) = result {
        if let Some(errors) = errors {
            error!(
                "{} ({}): {}",
                entry_point,
                target,
                String::from_utf8_lossy(blob_bytes(&errors)).trim_end()
            );
        }
        return Err(compile_error);
    }

    let code = code.ok_or_else(|| Error::from(E_POINTER))?;
    debug!(
        "compiled {} from {} as {} ({} bytes)",
        entry_point,
        source_name,
        target,
        unsafe { code.GetBufferSize() }
    );
    Ok(code)
}

fn c_string(text: &str) -> Result<CString> {
    CString::new(text).map_err(|_| Error::from(E_INVALIDARG))
}

/// Borrows the contents of a blob. The slice lives as long as the blob.
pub fn blob_bytes(blob: &ID3DBlob) -> &[u8] {
    unsafe { std::slice::from_raw_parts(blob.GetBufferPointer() as *const u8, blob.GetBufferSize()) }
}
