use crate::vertex::{byte_width, Vertex, TRIANGLE};
use dx_common::shaders::{blob_bytes, compile_shader};
use dx_common::{DXSample, Direct3D, SampleCommandLine, CLEAR_COLOR};
use tracing::debug;
use windows::{
    core::*, Win32::Foundation::*, Win32::Graphics::Direct3D::*, Win32::Graphics::Direct3D11::*,
    Win32::Graphics::Dxgi::Common::*,
};

const SHADERS_HLSL: &str = include_str!("../shaders.hlsl");

pub struct Sample {
    command_line: SampleCommandLine,
    resources: Option<Resources>,
}

struct Resources {
    direct3d: Direct3D,
    pipeline: Pipeline,
}

/// The shader pair, the input layout describing [`Vertex`] and the vertex
/// buffer holding the triangle.
struct Pipeline {
    // bound once at creation; held so they outlive the draw calls
    #[allow(dead_code)]
    vertex_shader: ID3D11VertexShader,
    #[allow(dead_code)]
    pixel_shader: ID3D11PixelShader,

    input_layout: ID3D11InputLayout,
    vertex_buffer: ID3D11Buffer,
    vertex_count: u32,
}

/// 1. 创建设备、立即上下文与交换链。
/// 2. 为后台缓冲区创建渲染目标视图并绑定到输出合并阶段。
/// 3. 设置视口。
/// 4. 编译着色器，创建着色器对象和输入布局。
/// 5. 创建顶点缓冲区并把三角形的顶点复制进去。
impl DXSample for Sample {
    fn new(command_line: &SampleCommandLine) -> Result<Self> {
        Ok(Sample {
            command_line: command_line.clone(),
            resources: None,
        })
    }

    fn bind_to_window(&mut self, hwnd: &HWND) -> Result<()> {
        let direct3d = Direct3D::new(hwnd, &self.command_line, self.window_size())?;
        let pipeline = Pipeline::new(&direct3d.device, &direct3d.context)?;

        self.resources = Some(Resources { direct3d, pipeline });
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let Some(resources) = &self.resources else {
            return Ok(());
        };

        let direct3d = &resources.direct3d;
        direct3d.clear(&CLEAR_COLOR);
        resources.pipeline.draw(&direct3d.context);
        direct3d.present()
    }

    fn title(&self) -> String {
        "Our First Triangle".into()
    }
}

impl Pipeline {
    fn new(device: &ID3D11Device, context: &ID3D11DeviceContext) -> Result<Self> {
        let vs_blob = compile_shader(SHADERS_HLSL, "shaders.hlsl", "VShader", "vs_4_0")?;
        let ps_blob = compile_shader(SHADERS_HLSL, "shaders.hlsl", "PShader", "ps_4_0")?;
        let vs_bytecode = blob_bytes(&vs_blob);
        let ps_bytecode = blob_bytes(&ps_blob);

        let mut vertex_shader = None;
        let mut pixel_shader = None;
        unsafe {
            device.CreateVertexShader(vs_bytecode, None, Some(&mut vertex_shader))?;
            device.CreatePixelShader(ps_bytecode, None, Some(&mut pixel_shader))?;
        }
        let vertex_shader = vertex_shader.ok_or_else(|| Error::from(E_POINTER))?;
        let pixel_shader = pixel_shader.ok_or_else(|| Error::from(E_POINTER))?;

        // 着色器在整个程序运行期间都不会更换，设置一次即可
        unsafe {
            context.VSSetShader(&vertex_shader, None);
            context.PSSetShader(&pixel_shader, None);
        }

        let input_layout = create_input_layout(device, vs_bytecode)?;
        let vertex_buffer = create_vertex_buffer(device, context, &TRIANGLE)?;

        Ok(Pipeline {
            vertex_shader,
            pixel_shader,
            input_layout,
            vertex_buffer,
            vertex_count: TRIANGLE.len() as u32,
        })
    }

    fn draw(&self, context: &ID3D11DeviceContext) {
        let stride = Vertex::STRIDE;
        let offset = 0;
        unsafe {
            context.IASetInputLayout(&self.input_layout);
            // 将顶点缓冲区绑定到输入装配器阶段的 0 号输入槽
            context.IASetVertexBuffers(
                0,
                1,
                Some(&Some(self.vertex_buffer.clone())),
                Some(&stride),
                Some(&offset),
            );
            context.IASetPrimitiveTopology(D3D_PRIMITIVE_TOPOLOGY_TRIANGLELIST);
            context.Draw(self.vertex_count, 0);
        }
    }
}

/// 输入布局告诉输入装配器如何把顶点缓冲区中的字节映射到顶点着色器的输入参数。
fn create_input_layout(device: &ID3D11Device, vs_bytecode: &[u8]) -> Result<ID3D11InputLayout> {
    let input_element_descs = [
        D3D11_INPUT_ELEMENT_DESC {
            SemanticName: s!("POSITION"),
            SemanticIndex: 0,
            Format: DXGI_FORMAT_R32G32B32_FLOAT,
            InputSlot: 0,
            AlignedByteOffset: 0,
            InputSlotClass: D3D11_INPUT_PER_VERTEX_DATA,
            InstanceDataStepRate: 0,
        },
        D3D11_INPUT_ELEMENT_DESC {
            SemanticName: s!("COLOR"),
            SemanticIndex: 0,
            Format: DXGI_FORMAT_R32G32B32A32_FLOAT,
            InputSlot: 0,
            AlignedByteOffset: Vertex::COLOR_OFFSET,
            InputSlotClass: D3D11_INPUT_PER_VERTEX_DATA,
            InstanceDataStepRate: 0,
        },
    ];

    let mut input_layout = None;
    unsafe {
        device.CreateInputLayout(&input_element_descs, vs_bytecode, Some(&mut input_layout))?
    };
    input_layout.ok_or_else(|| Error::from(E_POINTER))
}

/// Creates a dynamic vertex buffer sized for `vertices` and copies them in
/// through a write-discard mapping.
fn create_vertex_buffer(
    device: &ID3D11Device,
    context: &ID3D11DeviceContext,
    vertices: &[Vertex],
) -> Result<ID3D11Buffer> {
    let desc = D3D11_BUFFER_DESC {
        // CPU 可写、GPU 可读
        Usage: D3D11_USAGE_DYNAMIC,
        ByteWidth: byte_width(vertices),
        BindFlags: D3D11_BIND_VERTEX_BUFFER.0 as u32,
        CPUAccessFlags: D3D11_CPU_ACCESS_WRITE.0 as u32,
        MiscFlags: 0,
        StructureByteStride: 0,
    };

    let mut vertex_buffer = None;
    unsafe { device.CreateBuffer(&desc, None, Some(&mut vertex_buffer))? };
    let vertex_buffer = vertex_buffer.ok_or_else(|| Error::from(E_POINTER))?;

    // 映射缓冲区，复制顶点数据，再取消映射
    unsafe {
        let mut mapped = D3D11_MAPPED_SUBRESOURCE::default();
        context.Map(&vertex_buffer, 0, D3D11_MAP_WRITE_DISCARD, 0, Some(&mut mapped))?;
        std::ptr::copy_nonoverlapping(vertices.as_ptr(), mapped.pData as *mut Vertex, vertices.len());
        context.Unmap(&vertex_buffer, 0);
    }
    debug!("uploaded {} vertices ({} bytes)", vertices.len(), desc.ByteWidth);

    Ok(vertex_buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_shaders_declare_both_entry_points() {
        assert!(SHADERS_HLSL.contains("VOut VShader("));
        assert!(SHADERS_HLSL.contains("float4 PShader("));
    }

    #[test]
    fn vertex_shader_inputs_match_the_input_layout() {
        assert!(SHADERS_HLSL.contains("float4 position : POSITION"));
        assert!(SHADERS_HLSL.contains("float4 color : COLOR"));
    }

    #[test]
    fn pixel_shader_reads_what_the_vertex_shader_writes() {
        assert!(SHADERS_HLSL.contains("float4 position : SV_POSITION;"));
        let pixel_shader = &SHADERS_HLSL[SHADERS_HLSL.find("PShader(").unwrap()..];
        assert!(pixel_shader.contains("float4 position : SV_POSITION"));
        assert!(pixel_shader.contains("float4 color : COLOR) : SV_TARGET"));
    }
}
