use crate::MemoryDbgHelper;

#[cfg(windows)]
use crate::wide_to_string;
#[cfg(windows)]
use tracing::info;
#[cfg(windows)]
use windows::{core::*, Win32::Graphics::Direct3D11::*, Win32::Graphics::Dxgi::*};

/// Owned copy of the interesting parts of `DXGI_ADAPTER_DESC`.
#[derive(Clone, PartialEq, Eq)]
pub struct AdapterDesc {
    pub description: String,
    pub vendor_id: u32,
    pub device_id: u32,
    pub subsys_id: u32,
    pub revision: u32,
    pub dedicated_video_memory: u64,
    pub dedicated_system_memory: u64,
    pub shared_system_memory: u64,
}

#[cfg(windows)]
impl From<DXGI_ADAPTER_DESC> for AdapterDesc {
    fn from(desc: DXGI_ADAPTER_DESC) -> AdapterDesc {
        AdapterDesc {
            description: wide_to_string(&desc.Description),
            vendor_id: desc.VendorId,
            device_id: desc.DeviceId,
            subsys_id: desc.SubSysId,
            revision: desc.Revision,
            dedicated_video_memory: desc.DedicatedVideoMemory as u64,
            dedicated_system_memory: desc.DedicatedSystemMemory as u64,
            shared_system_memory: desc.SharedSystemMemory as u64,
        }
    }
}

impl std::fmt::Debug for AdapterDesc {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        fmt.debug_struct("AdapterDesc")
            .field("description", &self.description)
            .field("vendor_id", &format_args!("{:#06x}", self.vendor_id))
            .field("device_id", &format_args!("{:#06x}", self.device_id))
            .field("subsys_id", &format_args!("{:#010x}", self.subsys_id))
            .field("revision", &self.revision)
            .field(
                "dedicated_video_memory",
                &MemoryDbgHelper(self.dedicated_video_memory),
            )
            .field(
                "dedicated_system_memory",
                &MemoryDbgHelper(self.dedicated_system_memory),
            )
            .field(
                "shared_system_memory",
                &MemoryDbgHelper(self.shared_system_memory),
            )
            .finish()
    }
}

/// Looks up the adapter a device was created on. `D3D11CreateDeviceAndSwapChain`
/// picks the adapter itself, so the device is asked through `IDXGIDevice`.
#[cfg(windows)]
pub fn device_adapter_desc(device: &ID3D11Device) -> Result<AdapterDesc> {
    let dxgi_device: IDXGIDevice = device.cast()?;
    let adapter = unsafe { dxgi_device.GetAdapter()? };
    let desc = unsafe { adapter.GetDesc()? };
    Ok(desc.into())
}

/// 打印显卡调试信息
#[cfg(windows)]
pub fn print_adapter_info(device: &ID3D11Device) -> Result<()> {
    let adapter_desc = device_adapter_desc(device)?;
    info!("adapter: {:?}", adapter_desc);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_uses_readable_sizes() {
        let desc = AdapterDesc {
            description: "Microsoft Basic Render Driver".into(),
            vendor_id: 0x1414,
            device_id: 0x8c,
            subsys_id: 0,
            revision: 0,
            dedicated_video_memory: 0,
            dedicated_system_memory: 0,
            shared_system_memory: 8 * 1024 * 1024 * 1024,
        };

        let text = format!("{:?}", desc);
        assert!(text.contains("description: \"Microsoft Basic Render Driver\""));
        assert!(text.contains("vendor_id: 0x1414"));
        assert!(text.contains("device_id: 0x008c"));
        assert!(text.contains("shared_system_memory: 8.00GB"));
        assert!(text.contains("dedicated_video_memory: 0B"));
    }

    #[cfg(windows)]
    #[test]
    fn converts_from_dxgi_desc() {
        let mut raw = DXGI_ADAPTER_DESC {
            VendorId: 0x10de,
            DeviceId: 0x2684,
            DedicatedVideoMemory: 2 * 1024 * 1024 * 1024,
            ..Default::default()
        };
        for (slot, c) in raw.Description.iter_mut().zip("NVIDIA GeForce".encode_utf16()) {
            *slot = c;
        }

        let desc = AdapterDesc::from(raw);
        assert_eq!(desc.description, "NVIDIA GeForce");
        assert_eq!((desc.vendor_id, desc.device_id), (0x10de, 0x2684));
        assert_eq!(desc.dedicated_video_memory, 2 * 1024 * 1024 * 1024);
        assert_eq!(desc.shared_system_memory, 0);
    }
}
