use orrery_assets::ShaderSources;

/// Vertex stage: transforms each body vertex by `projection * view * model`.
pub const BODY_VERTEX_SHADER: &str = r#"
struct Transforms {
    projection: mat4x4<f32>,
    view: mat4x4<f32>,
    model: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> transforms: Transforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) uv: vec2<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = transforms.projection * transforms.view * transforms.model
        * vec4<f32>(vertex.position, 1.0);
    out.uv = vertex.uv;
    return out;
}
"#;

/// Fragment stage: samples the body's texture.
pub const BODY_FRAGMENT_SHADER: &str = r#"
@group(1) @binding(0)
var body_texture: texture_2d<f32>;
@group(1) @binding(1)
var body_sampler: sampler;

struct FragmentInput {
    @location(0) uv: vec2<f32>,
};

@fragment
fn fs_main(in: FragmentInput) -> @location(0) vec4<f32> {
    return textureSample(body_texture, body_sampler, in.uv);
}
"#;

pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// The embedded shader pair used when no override is configured.
pub fn builtin_sources() -> ShaderSources {
    ShaderSources::new(BODY_VERTEX_SHADER, BODY_FRAGMENT_SHADER)
}
