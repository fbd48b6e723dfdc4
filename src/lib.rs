//! The layout contract shared between the renderer and its shaders, plus
//! the CPU-side plumbing that fills it and uploads it.
//!
//! Slot numbers ([`slots`]), uniform struct layouts ([`transforms`]) and
//! vertex formats ([`vertex`]) are read by both sides; the shaders hard-code
//! the same numbers and offsets, so these definitions are the single source
//! of truth for them. [`constant_buffer`] packs the uniform structs into one
//! shared GPU buffer at the aligned offsets the contract requires.

pub mod camera;
pub mod constant_buffer;
pub mod gpu;
pub mod skybox;
pub mod slots;
pub mod spatial_transform;
pub mod texture;
pub mod transforms;
pub mod vertex;
