use std::mem::{offset_of, size_of, size_of_val};

/// Vertex layout shared with `VShader`: a position followed by an RGBA color.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    /// Bytes from one vertex to the next in the vertex buffer.
    pub const STRIDE: u32 = size_of::<Vertex>() as u32;
    /// Byte offset of `color`, fed to the input layout's `COLOR` element.
    pub const COLOR_OFFSET: u32 = offset_of!(Vertex, color) as u32;
}

/// 三个顶点按顺时针排列，默认的背面剔除不会把它剔除
pub const TRIANGLE: [Vertex; 3] = [
    Vertex {
        position: [0.0, 0.5, 0.0],
        color: [1.0, 0.0, 0.0, 1.0],
    },
    Vertex {
        position: [0.45, -0.5, 0.0],
        color: [0.0, 1.0, 0.0, 1.0],
    },
    Vertex {
        position: [-0.45, -0.5, 0.0],
        color: [0.0, 0.0, 1.0, 1.0],
    },
];

pub fn byte_width(vertices: &[Vertex]) -> u32 {
    size_of_val(vertices) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_the_input_elements() {
        // POSITION is R32G32B32_FLOAT, COLOR is R32G32B32A32_FLOAT.
        assert_eq!(offset_of!(Vertex, position), 0);
        assert_eq!(Vertex::COLOR_OFFSET, 12);
        assert_eq!(Vertex::STRIDE, 28);
    }

    #[test]
    fn triangle_fills_84_bytes() {
        assert_eq!(byte_width(&TRIANGLE), 3 * 28);
    }

    #[test]
    fn triangle_winds_clockwise() {
        let [a, b, c] = TRIANGLE.map(|v| (v.position[0], v.position[1]));
        // Negative signed area means clockwise with y pointing up.
        let doubled_area = (b.0 - a.0) * (c.1 - a.1) - (c.0 - a.0) * (b.1 - a.1);
        assert!(doubled_area < 0.0);
    }

    #[test]
    fn triangle_stays_inside_clip_space() {
        for vertex in TRIANGLE {
            assert!(vertex.position.iter().all(|p| (-1.0..=1.0).contains(p)));
            assert_eq!(vertex.color[3], 1.0);
        }
    }
}
