use orrery_scene::{TexturedVertex, textured_cube};
use wgpu::util::DeviceExt;

/// GPU-resident vertex buffer plus the attribute layout it is drawn with.
///
/// The buffer is destroyed when the object is dropped.
pub struct VertexObject {
    buffer: wgpu::Buffer,
    vertex_count: u32,
}

impl VertexObject {
    /// position: Float32x3 at offset 0, texcoord: Float32x2 at offset 12.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<TexturedVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2],
    };

    pub fn new(device: &wgpu::Device, label: &str, vertices: &[TexturedVertex]) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self {
            buffer,
            vertex_count: vertices.len() as u32,
        }
    }

    pub fn cube(device: &wgpu::Device, label: &str, half_extent: f32) -> Self {
        Self::new(device, label, &textured_cube(half_extent))
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn bind(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.buffer.slice(..));
    }

    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.draw(0..self.vertex_count, 0..1);
    }
}

impl Drop for VertexObject {
    fn drop(&mut self) {
        self.buffer.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_interleaved_vertex() {
        let layout = VertexObject::LAYOUT;
        assert_eq!(layout.array_stride, 20);
        assert_eq!(layout.attributes.len(), 2);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(layout.attributes[1].format, wgpu::VertexFormat::Float32x2);
    }
}
