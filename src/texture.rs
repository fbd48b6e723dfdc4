use wgpu::{
    BindGroupEntry, BindGroupLayoutEntry, BindingResource, BindingType, SamplerBindingType,
    ShaderStages, TextureSampleType, TextureViewDimension,
};

use crate::gpu::{GpuContext, bind_group::GpuBindGroup};
use crate::slots::TextureIndex;

/// Create a bind group exposing an object's color texture and its sampler
/// to the fragment stage.
pub fn create_color_texture_bind_group(
    label: &str,
    gpu: &GpuContext,
    view: &wgpu::TextureView,
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
                    view_dimension: TextureViewDimension::D2,
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
                resource: BindingResource::TextureView(view),
            },
            BindGroupEntry {
                binding: texture_binding + 1,
                resource: BindingResource::Sampler(sampler),
            },
        ],
    )
}

/// Create the default texture sampler: linear filtering, repeat addressing.
pub fn create_default_sampler(gpu: &GpuContext) -> wgpu::Sampler {
    gpu.device().create_sampler(&wgpu::SamplerDescriptor {
        label: Some("texture_sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    })
}
