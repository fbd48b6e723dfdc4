use cgmath::{Matrix4, Quaternion, Vector3};

use crate::transforms::ObjectTransforms;

/// The spatial data for a rendered object.
#[derive(Debug, Clone, Copy)]
pub struct SpatialTransform {
    pub scale: Vector3<f32>,
    pub position: Vector3<f32>,
    pub rotation: Quaternion<f32>,
}

impl SpatialTransform {
    /// Get the identity transform (ie doesn't do anything).
    pub fn identity() -> Self {
        Self {
            scale: Vector3::new(1.0, 1.0, 1.0),
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Quaternion::from_sv(1.0, Vector3::new(0.0, 0.0, 0.0)),
        }
    }

    /// Get the object-to-world matrix.
    pub fn model_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from(self.rotation)
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }

    /// Get the uniform data for this transform under the given view matrix.
    pub fn to_raw(&self, view: &Matrix4<f32>) -> ObjectTransforms {
        ObjectTransforms::new(view * self.model_matrix())
    }
}
