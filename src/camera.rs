use cgmath::{Deg, Matrix4, Rad, Vector3, perspective};

use crate::transforms::{PerFrameConstants, SkyboxTransforms};

/// Converts OpenGL to wgpu matrix conventions.
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::from_cols(
    cgmath::Vector4::new(1.0, 0.0, 0.0, 0.0),
    cgmath::Vector4::new(0.0, 1.0, 0.0, 0.0),
    cgmath::Vector4::new(0.0, 0.0, 0.5, 0.0),
    cgmath::Vector4::new(0.0, 0.0, 0.5, 1.0),
);

/// A free-look camera: a position plus azimuth/elevation angles.
///
/// The camera owns the projection matrix, so it is the single source for
/// both the per-frame constants and the skybox transforms.
pub struct Camera {
    /// Where the camera sits, in world space.
    pub position: Vector3<f32>,
    /// Rotation about the y axis, away from -z.
    pub azimuth: Rad<f32>,
    /// Rotation about the x axis, away from the horizon.
    pub elevation: Rad<f32>,
    projection: Matrix4<f32>,
    fovy: Deg<f32>,
    znear: f32,
    zfar: f32,
}

impl Camera {
    /// Create a camera at the given position, looking down -z.
    pub fn new(fovy: Deg<f32>, aspect: f32, znear: f32, zfar: f32, position: Vector3<f32>) -> Self {
        Self {
            position,
            azimuth: Rad(0.0),
            elevation: Rad(0.0),
            projection: build_projection(fovy, aspect, znear, zfar),
            fovy,
            znear,
            zfar,
        }
    }

    /// Rebuild the projection for a new surface aspect ratio.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.projection = build_projection(self.fovy, aspect, self.znear, self.zfar);
    }

    /// Get the projection matrix.
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        self.projection
    }

    /// The camera's rotation alone: elevation about x, then azimuth about y.
    pub fn rotation_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_angle_x(self.elevation) * Matrix4::from_angle_y(self.azimuth)
    }

    /// The world-to-camera matrix.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        self.rotation_matrix() * Matrix4::from_translation(-self.position)
    }

    /// The uniform data shared by every object this frame.
    pub fn per_frame_constants(&self) -> PerFrameConstants {
        PerFrameConstants::new(self.projection)
    }

    /// The skybox's uniform data. Uses the rotation only, so the skybox
    /// stays centered on the camera wherever it moves.
    pub fn skybox_transforms(&self) -> SkyboxTransforms {
        SkyboxTransforms::new(self.projection * self.rotation_matrix())
    }
}

fn build_projection(fovy: Deg<f32>, aspect: f32, znear: f32, zfar: f32) -> Matrix4<f32> {
    OPENGL_TO_WGPU_MATRIX * perspective(fovy, aspect, znear, zfar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector4;

    fn test_camera() -> Camera {
        Camera::new(Deg(65.0), 16.0 / 9.0, 0.1, 100.0, Vector3::new(0.0, 0.0, 0.0))
    }

    #[test]
    fn view_with_zero_angles_is_a_translation() {
        let mut camera = test_camera();
        camera.position = Vector3::new(1.0, 2.0, 3.0);

        let view: [[f32; 4]; 4] = camera.view_matrix().into();
        let expected: [[f32; 4]; 4] =
            Matrix4::from_translation(Vector3::new(-1.0, -2.0, -3.0)).into();
        assert_eq!(view, expected);
    }

    #[test]
    fn projection_maps_depth_to_zero_one() {
        let camera = test_camera();
        let projection = camera.projection_matrix();

        let near = projection * Vector4::new(0.0, 0.0, -0.1, 1.0);
        assert!((near.z / near.w).abs() < 1e-5);

        let far = projection * Vector4::new(0.0, 0.0, -100.0, 1.0);
        assert!((far.z / far.w - 1.0).abs() < 1e-5);
    }

    #[test]
    fn skybox_transforms_ignore_camera_position() {
        let mut near_origin = test_camera();
        near_origin.azimuth = Rad(0.7);
        near_origin.elevation = Rad(-0.2);

        let mut far_away = test_camera();
        far_away.azimuth = Rad(0.7);
        far_away.elevation = Rad(-0.2);
        far_away.position = Vector3::new(500.0, -20.0, 13.0);

        assert_eq!(
            near_origin.skybox_transforms().model_view_projection_matrix,
            far_away.skybox_transforms().model_view_projection_matrix
        );
    }
}
