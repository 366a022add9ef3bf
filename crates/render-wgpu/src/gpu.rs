use crate::RenderError;
use crate::context::GpuContext;
use crate::shaders::{FRAGMENT_ENTRY, VERTEX_ENTRY};
use crate::texture::GpuTexture;
use crate::vertex::VertexObject;
use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use orrery_assets::{ShaderSources, TextureData};
use orrery_render::RenderFrame;
use wgpu::util::DeviceExt;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Uniform block matching `Transforms` in the vertex shader.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Transforms {
    projection: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
}

impl Transforms {
    fn new(projection: Mat4, view: Mat4, model: Mat4) -> Self {
        Self {
            projection: projection.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
        }
    }
}

/// What the renderer needs to set up one body.
#[derive(Debug, Clone, Copy)]
pub struct BodyAssets<'a> {
    pub name: &'a str,
    pub half_extent: f32,
    pub texture: &'a TextureData,
}

struct BodyResources {
    vertices: VertexObject,
    texture: GpuTexture,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
}

/// Draws textured body cubes with one shared shader program.
pub struct SceneRenderer {
    fill_pipeline: wgpu::RenderPipeline,
    wireframe_pipeline: Option<wgpu::RenderPipeline>,
    bodies: Vec<BodyResources>,
    depth_texture: wgpu::TextureView,
}

impl SceneRenderer {
    pub fn new(
        ctx: &GpuContext,
        shaders: &ShaderSources,
        bodies: &[BodyAssets<'_>],
    ) -> Result<Self, RenderError> {
        let device = &ctx.device;

        let vertex_module = create_shader(device, "body_vertex_shader", &shaders.vertex)?;
        let fragment_module = create_shader(device, "body_fragment_shader", &shaders.fragment)?;

        let transforms_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("transforms_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let texture_layout = GpuTexture::bind_group_layout(device);

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("body_pipeline_layout"),
            bind_group_layouts: &[&transforms_layout, &texture_layout],
            push_constant_ranges: &[],
        });

        let stages = PipelineStages {
            layout: &pipeline_layout,
            vertex: &vertex_module,
            fragment: &fragment_module,
            format: ctx.surface_format(),
        };
        let fill_pipeline =
            stages.build(device, "body_fill_pipeline", wgpu::PolygonMode::Fill)?;
        let line_mode = device.features().contains(wgpu::Features::POLYGON_MODE_LINE);
        let wireframe_pipeline = if line_mode {
            let line = wgpu::PolygonMode::Line;
            Some(stages.build(device, "body_wireframe_pipeline", line)?)
        } else {
            tracing::info!("adapter lacks line polygon mode; wireframe toggle disabled");
            None
        };

        let sampler = GpuTexture::sampler(device);
        let bodies = bodies
            .iter()
            .map(|body| {
                let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(body.name),
                    contents: bytemuck::bytes_of(&Transforms::new(
                        Mat4::IDENTITY,
                        Mat4::IDENTITY,
                        Mat4::IDENTITY,
                    )),
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                });
                let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some(body.name),
                    layout: &transforms_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform_buffer.as_entire_binding(),
                    }],
                });
                BodyResources {
                    vertices: VertexObject::cube(device, body.name, body.half_extent),
                    texture: GpuTexture::upload(
                        device,
                        &ctx.queue,
                        &texture_layout,
                        &sampler,
                        body.name,
                        body.texture,
                    ),
                    uniform_buffer,
                    uniform_bind_group,
                }
            })
            .collect::<Vec<_>>();
        tracing::info!("uploaded {} bodies", bodies.len());

        let (width, height) = ctx.size();
        Ok(Self {
            fill_pipeline,
            wireframe_pipeline,
            bodies,
            depth_texture: Self::create_depth_texture(device, width, height),
        })
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_texture = Self::create_depth_texture(device, width, height);
    }

    pub fn supports_wireframe(&self) -> bool {
        self.wireframe_pipeline.is_some()
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Clear colour and depth, then draw every body listed in `frame`.
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        target: &wgpu::TextureView,
        frame: &RenderFrame,
        wireframe: bool,
    ) {
        let draws: Vec<_> = frame
            .draws
            .iter()
            .filter_map(|draw| match self.bodies.get(draw.index) {
                Some(body) => Some((draw, body)),
                None => {
                    tracing::debug!("no GPU resources for body {} ({})", draw.index, draw.name);
                    None
                }
            })
            .collect();

        for (draw, body) in &draws {
            queue.write_buffer(
                &body.uniform_buffer,
                0,
                bytemuck::bytes_of(&Transforms::new(frame.projection, frame.view, draw.model)),
            );
        }

        let pipeline = match (&self.wireframe_pipeline, wireframe) {
            (Some(line), true) => line,
            _ => &self.fill_pipeline,
        };

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("scene_encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            pass.set_pipeline(pipeline);
            for (_, body) in &draws {
                pass.set_bind_group(0, &body.uniform_bind_group, &[]);
                body.texture.bind(&mut pass, 1);
                body.vertices.bind(&mut pass);
                body.vertices.draw(&mut pass);
            }
        }

        queue.submit(std::iter::once(encoder.finish()));
    }

    fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&Default::default())
    }
}

/// Shared inputs for the fill and wireframe pipelines.
struct PipelineStages<'a> {
    layout: &'a wgpu::PipelineLayout,
    vertex: &'a wgpu::ShaderModule,
    fragment: &'a wgpu::ShaderModule,
    format: wgpu::TextureFormat,
}

impl PipelineStages<'_> {
    fn build(
        &self,
        device: &wgpu::Device,
        label: &str,
        polygon_mode: wgpu::PolygonMode,
    ) -> Result<wgpu::RenderPipeline, RenderError> {
        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(self.layout),
            vertex: wgpu::VertexState {
                module: self.vertex,
                entry_point: Some(VERTEX_ENTRY),
                compilation_options: Default::default(),
                buffers: &[VertexObject::LAYOUT],
            },
            fragment: Some(wgpu::FragmentState {
                module: self.fragment,
                entry_point: Some(FRAGMENT_ENTRY),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: self.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                polygon_mode,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });
        match pollster::block_on(device.pop_error_scope()) {
            Some(err) => Err(RenderError::Pipeline {
                label: label.to_string(),
                message: err.to_string(),
            }),
            None => Ok(pipeline),
        }
    }
}

fn create_shader(
    device: &wgpu::Device,
    label: &str,
    source: &str,
) -> Result<wgpu::ShaderModule, RenderError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });
    match pollster::block_on(device.pop_error_scope()) {
        Some(err) => Err(RenderError::Shader {
            label: label.to_string(),
            message: err.to_string(),
        }),
        None => Ok(module),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transforms_block_is_three_mat4() {
        assert_eq!(std::mem::size_of::<Transforms>(), 3 * 64);
    }

    #[test]
    fn transforms_are_column_major() {
        let model = Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0));
        let t = Transforms::new(Mat4::IDENTITY, Mat4::IDENTITY, model);
        assert_eq!(t.model[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(t.projection, Mat4::IDENTITY.to_cols_array_2d());
    }
}
