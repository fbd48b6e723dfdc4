//! The shared constant buffer: per-frame constants plus every object's
//! transforms, packed into one GPU buffer and cycled across frames in flight.
//!
//! Each frame slot is laid out as `[PerFrameConstants][ObjectTransforms; N]`,
//! with every region starting on a 256-byte boundary so it can be bound with
//! a dynamic uniform offset.

use bytemuck::bytes_of;
use thiserror::Error;
use wgpu::{
    BindGroupEntry, BindGroupLayoutEntry, BindingResource, BindingType, BufferBinding,
    BufferBindingType, ShaderStages,
};

use crate::gpu::{GpuContext, bind_group::GpuBindGroup, buffer::GpuBuffer};
use crate::slots::BufferIndex;
use crate::transforms::{ObjectTransforms, PerFrameConstants};

/// Offset alignment required for dynamically-offset uniform bindings.
pub const MIN_UNIFORM_OFFSET_ALIGNMENT: u64 = 256;

/// How many constant buffer slots are cycled through, so the CPU can fill
/// one while the GPU still reads another.
pub const FRAMES_IN_FLIGHT: usize = 3;

/// An error from staging data into the constant buffer.
#[derive(Debug, Error)]
pub enum ConstantBufferError {
    #[error("Staged more than {capacity} objects into the constant buffer")]
    ObjectCapacityExceeded { capacity: u64 },
}

/// Computes where everything lives inside the shared constant buffer.
#[derive(Debug, Clone, Copy)]
pub struct ConstantBufferLayout {
    max_objects: u64,
    frames_in_flight: u64,
}

impl ConstantBufferLayout {
    /// Create a layout for the given capacity.
    pub fn new(max_objects: u64, frames_in_flight: u64) -> Self {
        Self {
            max_objects,
            frames_in_flight,
        }
    }

    /// Byte stride of the per-frame constants region.
    pub const fn per_frame_stride() -> u64 {
        align_up(size_of::<PerFrameConstants>() as u64)
    }

    /// Byte stride of one object's transforms region.
    pub const fn object_stride() -> u64 {
        align_up(size_of::<ObjectTransforms>() as u64)
    }

    /// Byte size of one frame slot.
    pub fn slot_size(&self) -> u64 {
        Self::per_frame_stride() + self.max_objects * Self::object_stride()
    }

    /// Byte size of the whole buffer, all frame slots included.
    pub fn total_size(&self) -> u64 {
        self.slot_size() * self.frames_in_flight
    }

    /// Byte offset of a frame slot's per-frame constants.
    pub fn per_frame_offset(&self, frame: usize) -> u64 {
        frame as u64 * self.slot_size()
    }

    /// Byte offset of an object's transforms within a frame slot.
    pub fn object_offset(&self, frame: usize, index: u64) -> u64 {
        self.per_frame_offset(frame) + Self::per_frame_stride() + index * Self::object_stride()
    }

    /// The number of objects a frame slot can hold.
    pub fn max_objects(&self) -> u64 {
        self.max_objects
    }

    /// The number of frame slots.
    pub fn frames_in_flight(&self) -> u64 {
        self.frames_in_flight
    }
}

const fn align_up(size: u64) -> u64 {
    size.div_ceil(MIN_UNIFORM_OFFSET_ALIGNMENT) * MIN_UNIFORM_OFFSET_ALIGNMENT
}

/// CPU-side staging for one frame slot of the constant buffer.
///
/// Regions the structs don't cover stay zeroed, so a staged slot can be
/// uploaded with a single write.
pub struct FrameStage {
    layout: ConstantBufferLayout,
    bytes: Vec<u8>,
    object_count: u64,
}

impl FrameStage {
    /// Create a zeroed staging area for one frame slot.
    pub fn new(layout: ConstantBufferLayout) -> Self {
        Self {
            layout,
            bytes: vec![0; layout.slot_size() as usize],
            object_count: 0,
        }
    }

    /// Clear for a new frame.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
        self.object_count = 0;
    }

    /// Stage the frame's shared constants at the start of the slot.
    pub fn set_frame_constants(&mut self, constants: &PerFrameConstants) {
        let src = bytes_of(constants);
        self.bytes[..src.len()].copy_from_slice(src);
    }

    /// Stage the next object's transforms. Returns the object's index,
    /// which maps to its dynamic offset at bind time.
    pub fn push_object(&mut self, transforms: &ObjectTransforms) -> Result<u64, ConstantBufferError> {
        if self.object_count == self.layout.max_objects() {
            return Err(ConstantBufferError::ObjectCapacityExceeded {
                capacity: self.layout.max_objects(),
            });
        }

        let offset = self.layout.object_offset(0, self.object_count) as usize;
        let src = bytes_of(transforms);
        self.bytes[offset..offset + src.len()].copy_from_slice(src);

        let index = self.object_count;
        self.object_count += 1;
        Ok(index)
    }

    /// The number of objects staged so far.
    pub fn object_count(&self) -> u64 {
        self.object_count
    }

    /// The staged slot, ready for upload.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// The shared constant buffer itself: a GPU buffer sized for every frame
/// slot, plus the staging area for the slot currently being filled.
pub struct ConstantBuffer {
    gpu: GpuContext,
    buffer: GpuBuffer,
    layout: ConstantBufferLayout,
    stage: FrameStage,
    frame_index: usize,
}

impl ConstantBuffer {
    /// Create the constant buffer with capacity for `max_objects` objects
    /// per frame.
    pub fn new(gpu: &GpuContext, label: &str, max_objects: u64) -> Self {
        let layout = ConstantBufferLayout::new(max_objects, FRAMES_IN_FLIGHT as u64);
        let buffer = GpuBuffer::create_uniform_uninit(label, gpu, layout.total_size());

        let device_alignment = gpu.uniform_offset_alignment();
        if device_alignment > MIN_UNIFORM_OFFSET_ALIGNMENT {
            log::warn!(
                "device requires {device_alignment}-byte uniform offsets, more than the {MIN_UNIFORM_OFFSET_ALIGNMENT} the packed layout uses"
            );
        }
        log::debug!(
            "created constant buffer {label}: {} bytes ({max_objects} objects x {FRAMES_IN_FLIGHT} frames)",
            layout.total_size(),
        );

        Self {
            gpu: gpu.clone(),
            buffer,
            layout,
            stage: FrameStage::new(layout),
            frame_index: 0,
        }
    }

    /// Advance to the next frame slot and clear the staging area.
    pub fn begin_frame(&mut self) {
        self.frame_index = (self.frame_index + 1) % self.layout.frames_in_flight() as usize;
        self.stage.clear();
    }

    /// Stage the frame's shared constants.
    pub fn set_frame_constants(&mut self, constants: &PerFrameConstants) {
        self.stage.set_frame_constants(constants);
    }

    /// Stage the next object's transforms for this frame.
    pub fn push_object(&mut self, transforms: &ObjectTransforms) -> Result<u64, ConstantBufferError> {
        self.stage.push_object(transforms)
    }

    /// Upload the staged slot to the GPU in one write.
    pub fn write(&self) {
        self.gpu.queue().write_buffer(
            self.buffer.handle(),
            self.layout.per_frame_offset(self.frame_index),
            self.stage.bytes(),
        );
    }

    /// The dynamic offsets for drawing one object, ordered by binding
    /// number (local uniforms first, then per-frame constants).
    pub fn object_dynamic_offsets(&self, index: u64) -> [u32; 2] {
        [
            self.layout.object_offset(self.frame_index, index) as u32,
            self.layout.per_frame_offset(self.frame_index) as u32,
        ]
    }

    /// Get the layout.
    pub fn layout(&self) -> ConstantBufferLayout {
        self.layout
    }

    /// Get the actual buffer.
    pub fn buffer(&self) -> &GpuBuffer {
        &self.buffer
    }

    /// Create the uniforms bind group: both regions of this buffer exposed
    /// as dynamically-offset uniform bindings, numbered by `BufferIndex`.
    pub fn create_bind_group(&self, gpu: &GpuContext) -> GpuBindGroup {
        let object_size = wgpu::BufferSize::new(size_of::<ObjectTransforms>() as u64);
        let per_frame_size = wgpu::BufferSize::new(size_of::<PerFrameConstants>() as u64);

        GpuBindGroup::create_default(
            "constant_buffer_bind_group",
            gpu,
            &[
                BindGroupLayoutEntry {
                    binding: BufferIndex::LocalUniforms.binding(),
                    visibility: ShaderStages::VERTEX,
                    ty: BindingType::Buffer {
                        ty: BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        min_binding_size: object_size,
                    },
                    count: None,
                },
                BindGroupLayoutEntry {
                    binding: BufferIndex::PerFrameConstants.binding(),
                    visibility: ShaderStages::VERTEX,
                    ty: BindingType::Buffer {
                        ty: BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        min_binding_size: per_frame_size,
                    },
                    count: None,
                },
            ],
            &[
                BindGroupEntry {
                    binding: BufferIndex::LocalUniforms.binding(),
                    resource: BindingResource::Buffer(BufferBinding {
                        buffer: self.buffer.handle(),
                        offset: 0,
                        size: object_size,
                    }),
                },
                BindGroupEntry {
                    binding: BufferIndex::PerFrameConstants.binding(),
                    resource: BindingResource::Buffer(BufferBinding {
                        buffer: self.buffer.handle(),
                        offset: 0,
                        size: per_frame_size,
                    }),
                },
            ],
        )
    }
}
