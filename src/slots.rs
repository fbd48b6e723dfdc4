//! Slot assignments shared between the renderer and its shaders.
//!
//! The numeric values here are the contract: the shaders hard-code the same
//! numbers in their `@group`/`@binding`/`@location` attributes, and nothing
//! checks agreement at runtime. Renumbering one side without the other is a
//! silent binding mismatch at draw time.

/// Buffer slots for a draw call.
///
/// `MeshPositions` is the vertex buffer slot; the other two are bind group
/// binding numbers for the shared constant buffer.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferIndex {
    MeshPositions = 0,
    LocalUniforms = 1,
    PerFrameConstants = 2,
}

impl BufferIndex {
    /// Get the raw slot/binding number.
    pub const fn binding(self) -> u32 {
        self as u32
    }
}

/// Vertex attribute locations for position + normal + texcoord meshes.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexAttributeVnt {
    Position = 0,
    Normal = 1,
    Texcoord = 2,
}

impl VertexAttributeVnt {
    /// Get the raw shader location.
    pub const fn location(self) -> u32 {
        self as u32
    }
}

/// Vertex attribute locations for position + texcoord meshes.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexAttributeVt {
    Position = 0,
    Texcoord = 1,
}

impl VertexAttributeVt {
    /// Get the raw shader location.
    pub const fn location(self) -> u32 {
        self as u32
    }
}

/// Vertex attribute locations for position + normal meshes.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexAttributeVn {
    Position = 0,
    Normal = 1,
}

impl VertexAttributeVn {
    /// Get the raw shader location.
    pub const fn location(self) -> u32 {
        self as u32
    }
}

/// Texture binding slots for the fragment stage.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureIndex {
    Color = 0,
}

impl TextureIndex {
    /// Get the raw binding number.
    pub const fn binding(self) -> u32 {
        self as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_indices_are_contiguous_from_zero() {
        let values = [
            BufferIndex::MeshPositions.binding(),
            BufferIndex::LocalUniforms.binding(),
            BufferIndex::PerFrameConstants.binding(),
        ];
        assert_eq!(values, [0, 1, 2]);
    }

    #[test]
    fn vertex_attributes_are_contiguous_from_zero() {
        let vnt = [
            VertexAttributeVnt::Position.location(),
            VertexAttributeVnt::Normal.location(),
            VertexAttributeVnt::Texcoord.location(),
        ];
        assert_eq!(vnt, [0, 1, 2]);

        let vt = [
            VertexAttributeVt::Position.location(),
            VertexAttributeVt::Texcoord.location(),
        ];
        assert_eq!(vt, [0, 1]);

        let vn = [
            VertexAttributeVn::Position.location(),
            VertexAttributeVn::Normal.location(),
        ];
        assert_eq!(vn, [0, 1]);
    }

    #[test]
    fn texture_indices_are_contiguous_from_zero() {
        assert_eq!(TextureIndex::Color.binding(), 0);
    }
}
