//! The interleaved vertex formats meshes come in, one per attribute set.
//!
//! Each format's buffer binds at `BufferIndex::MeshPositions`, and each
//! attribute's shader location comes from the matching enum in [`crate::slots`].

use bytemuck::{Pod, Zeroable};
use wgpu::{VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

use crate::slots::{VertexAttributeVn, VertexAttributeVnt, VertexAttributeVt};

/// A vertex with position, normal and texture coordinates.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct VertexVnt {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub texcoord: [f32; 2],
}

impl VertexVnt {
    /// Get the vertex buffer description of this format.
    pub fn desc() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: size_of::<VertexVnt>() as wgpu::BufferAddress,
            step_mode: VertexStepMode::Vertex,
            attributes: &[
                VertexAttribute {
                    offset: 0,
                    shader_location: VertexAttributeVnt::Position as u32,
                    format: VertexFormat::Float32x3,
                },
                VertexAttribute {
                    offset: size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: VertexAttributeVnt::Normal as u32,
                    format: VertexFormat::Float32x3,
                },
                VertexAttribute {
                    offset: size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: VertexAttributeVnt::Texcoord as u32,
                    format: VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// A vertex with position and texture coordinates.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct VertexVt {
    pub position: [f32; 3],
    pub texcoord: [f32; 2],
}

impl VertexVt {
    /// Get the vertex buffer description of this format.
    pub fn desc() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: size_of::<VertexVt>() as wgpu::BufferAddress,
            step_mode: VertexStepMode::Vertex,
            attributes: &[
                VertexAttribute {
                    offset: 0,
                    shader_location: VertexAttributeVt::Position as u32,
                    format: VertexFormat::Float32x3,
                },
                VertexAttribute {
                    offset: size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: VertexAttributeVt::Texcoord as u32,
                    format: VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// A vertex with position and normal.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct VertexVn {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl VertexVn {
    /// Get the vertex buffer description of this format.
    pub fn desc() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: size_of::<VertexVn>() as wgpu::BufferAddress,
            step_mode: VertexStepMode::Vertex,
            attributes: &[
                VertexAttribute {
                    offset: 0,
                    shader_location: VertexAttributeVn::Position as u32,
                    format: VertexFormat::Float32x3,
                },
                VertexAttribute {
                    offset: size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: VertexAttributeVn::Normal as u32,
                    format: VertexFormat::Float32x3,
                },
            ],
        }
    }
}

const _: () = assert!(size_of::<VertexVnt>() == 32);
const _: () = assert!(size_of::<VertexVt>() == 20);
const _: () = assert!(size_of::<VertexVn>() == 24);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vnt_layout_matches_shader() {
        let desc = VertexVnt::desc();
        assert_eq!(desc.array_stride, 32);
        let offsets: Vec<u64> = desc.attributes.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, [0, 12, 24]);
        let locations: Vec<u32> = desc.attributes.iter().map(|a| a.shader_location).collect();
        assert_eq!(locations, [0, 1, 2]);
    }

    #[test]
    fn vt_layout_matches_shader() {
        let desc = VertexVt::desc();
        assert_eq!(desc.array_stride, 20);
        let offsets: Vec<u64> = desc.attributes.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, [0, 12]);
        let locations: Vec<u32> = desc.attributes.iter().map(|a| a.shader_location).collect();
        assert_eq!(locations, [0, 1]);
    }

    #[test]
    fn vn_layout_matches_shader() {
        let desc = VertexVn::desc();
        assert_eq!(desc.array_stride, 24);
        let offsets: Vec<u64> = desc.attributes.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, [0, 12]);
        let locations: Vec<u32> = desc.attributes.iter().map(|a| a.shader_location).collect();
        assert_eq!(locations, [0, 1]);
    }
}
