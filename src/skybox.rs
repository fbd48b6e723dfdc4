use wgpu::{
    BindGroupEntry, BindGroupLayoutEntry, BindingResource, BindingType, BufferBindingType,
    SamplerBindingType, ShaderStages, TextureSampleType, TextureViewDimension, VertexAttribute,
    VertexBufferLayout, VertexFormat, VertexStepMode,
};

use crate::camera::Camera;
use crate::gpu::{GpuContext, bind_group::GpuBindGroup, buffer::GpuBuffer};
use crate::slots::{BufferIndex, TextureIndex, VertexAttributeVnt};
use crate::transforms::SkyboxTransforms;

/// The skybox's uniform data and the buffer it is uploaded through.
pub struct SkyboxConstants {
    transforms: SkyboxTransforms,
    buffer: GpuBuffer,
}

impl SkyboxConstants {
    /// Create the skybox constants, including initializing the uniform
    /// buffer for them.
    pub fn new(gpu: &GpuContext, label: &str, camera: &Camera) -> Self {
        let transforms = camera.skybox_transforms();
        let buffer = GpuBuffer::create_uniform(label, gpu, bytemuck::cast_slice(&[transforms]));
        Self { transforms, buffer }
    }

    /// Recompute the transforms from the camera and write them to the GPU.
    pub fn update_and_write(&mut self, camera: &Camera, gpu: &GpuContext) {
        self.transforms = camera.skybox_transforms();
        gpu.queue().write_buffer(
            self.buffer.handle(),
            0,
            bytemuck::cast_slice(&[self.transforms]),
        );
    }

    /// Get the buffer.
    pub fn buffer(&self) -> &GpuBuffer {
        &self.buffer
    }

    /// Create the bind group exposing the transforms to the vertex stage,
    /// at the local-uniforms binding.
    pub fn create_bind_group(&self, gpu: &GpuContext) -> GpuBindGroup {
        GpuBindGroup::create_default(
            "skybox_constants_bind_group",
            gpu,
            &[BindGroupLayoutEntry {
                binding: BufferIndex::LocalUniforms.binding(),
                visibility: ShaderStages::VERTEX,
                ty: BindingType::Buffer {
                    ty: BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(size_of::<SkyboxTransforms>() as u64),
                },
                count: None,
            }],
            &[BindGroupEntry {
                binding: BufferIndex::LocalUniforms.binding(),
                resource: self.buffer.handle().as_entire_binding(),
            }],
        )
    }
}

/// Create a bind group for the skybox's cube map and its sampler.
pub fn create_skybox_texture_bind_group(
    label: &str,
    gpu: &GpuContext,
    cubemap_view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
) -> GpuBindGroup {
    let texture_binding = TextureIndex::Color.binding();
    GpuBindGroup::create_default(
        label,
        gpu,
        &[
            BindGroupLayoutEntry {
                binding: texture_binding,
                visibility: ShaderStages::FRAGMENT,
                ty: BindingType::Texture {
                    sample_type: TextureSampleType::Float { filterable: true },
                    view_dimension: TextureViewDimension::Cube,
                    multisampled: false,
                },
                count: None,
            },
            BindGroupLayoutEntry {
                binding: texture_binding + 1,
                visibility: ShaderStages::FRAGMENT,
                ty: BindingType::Sampler(SamplerBindingType::Filtering),
                count: None,
            },
        ],
        &[
            BindGroupEntry {
                binding: texture_binding,
                resource: BindingResource::TextureView(cubemap_view),
            },
            BindGroupEntry {
                binding: texture_binding + 1,
                resource: BindingResource::Sampler(sampler),
            },
        ],
    )
}

/// The skybox mesh's vertex buffer description: positions only.
///
/// Position occupies location 0 in every vertex format, and the skybox
/// carries nothing else per vertex.
pub fn position_only_vertex_layout() -> VertexBufferLayout<'static> {
    VertexBufferLayout {
        array_stride: size_of::<[f32; 3]>() as wgpu::BufferAddress,
        step_mode: VertexStepMode::Vertex,
        attributes: &[VertexAttribute {
            offset: 0,
            shader_location: VertexAttributeVnt::Position as u32,
            format: VertexFormat::Float32x3,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skybox_vertices_are_bare_positions() {
        let desc = position_only_vertex_layout();
        assert_eq!(desc.array_stride, 12);
        assert_eq!(desc.attributes.len(), 1);
        assert_eq!(desc.attributes[0].offset, 0);
        assert_eq!(desc.attributes[0].shader_location, 0);
    }
}
