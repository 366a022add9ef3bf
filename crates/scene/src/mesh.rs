use bytemuck::{Pod, Zeroable};

/// Vertices per body draw: six faces, two triangles each, no index buffer.
pub const CUBE_VERTEX_COUNT: u32 = 36;

/// Interleaved vertex: position (3 × f32) followed by texcoord (2 × f32).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct TexturedVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

// Corners of each face listed bottom-left, bottom-right, top-right, top-left
// as seen from outside the cube, so both triangles wind counter-clockwise.
#[rustfmt::skip]
const FACES: [[[f32; 3]; 4]; 6] = [
    // +Z
    [[-1.0, -1.0,  1.0], [ 1.0, -1.0,  1.0], [ 1.0,  1.0,  1.0], [-1.0,  1.0,  1.0]],
    // -Z
    [[ 1.0, -1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0,  1.0, -1.0], [ 1.0,  1.0, -1.0]],
    // +X
    [[ 1.0, -1.0,  1.0], [ 1.0, -1.0, -1.0], [ 1.0,  1.0, -1.0], [ 1.0,  1.0,  1.0]],
    // -X
    [[-1.0, -1.0, -1.0], [-1.0, -1.0,  1.0], [-1.0,  1.0,  1.0], [-1.0,  1.0, -1.0]],
    // +Y
    [[-1.0,  1.0,  1.0], [ 1.0,  1.0,  1.0], [ 1.0,  1.0, -1.0], [-1.0,  1.0, -1.0]],
    // -Y
    [[-1.0, -1.0, -1.0], [ 1.0, -1.0, -1.0], [ 1.0, -1.0,  1.0], [-1.0, -1.0,  1.0]],
];

// Texture rows start at the top of the image.
const CORNER_UVS: [[f32; 2]; 4] = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

const TRIANGLES: [usize; 6] = [0, 1, 2, 2, 3, 0];

/// Axis-aligned cube centred on the origin with the whole texture on every face.
pub fn textured_cube(half_extent: f32) -> [TexturedVertex; CUBE_VERTEX_COUNT as usize] {
    let mut vertices = [TexturedVertex::zeroed(); CUBE_VERTEX_COUNT as usize];
    for (face_index, face) in FACES.iter().enumerate() {
        for (i, &corner) in TRIANGLES.iter().enumerate() {
            let [x, y, z] = face[corner];
            vertices[face_index * TRIANGLES.len() + i] = TexturedVertex {
                position: [x * half_extent, y * half_extent, z * half_extent],
                uv: CORNER_UVS[corner],
            };
        }
    }
    vertices
}
