use bytemuck::{Pod, Zeroable};
use cgmath::{Matrix, Matrix3, Matrix4, SquareMatrix};
use std::mem::offset_of;

const ZERO_MAT4: [[f32; 4]; 4] = [[0.0; 4]; 4];

/// Per-object uniform data: the model-view matrix and the normal matrix
/// derived from it.
///
/// The normal matrix is stored as three 16-byte columns to match the shader's
/// `mat3x3<f32>` layout. The pad matrices carry no data; they exist so the
/// struct fills out its region of the shared constant buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct ObjectTransforms {
    pub model_view_matrix: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 3],
    pad1: [[f32; 4]; 4],
    pad2: [[f32; 4]; 4],
    pad3: [[f32; 4]; 4],
}

impl ObjectTransforms {
    /// Build the uniform data for an object under the given model-view matrix.
    ///
    /// The normal matrix is the inverse transpose of the model-view's
    /// upper-left 3x3, falling back to identity if it isn't invertible.
    pub fn new(model_view: Matrix4<f32>) -> Self {
        let normal = normal_matrix(&model_view);
        Self {
            model_view_matrix: model_view.into(),
            normal_matrix: pad_mat3(normal),
            pad1: ZERO_MAT4,
            pad2: ZERO_MAT4,
            pad3: ZERO_MAT4,
        }
    }
}

/// Uniform data for the skybox: a single combined matrix, as the skybox
/// needs no model/view split.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct SkyboxTransforms {
    pub model_view_projection_matrix: [[f32; 4]; 4],
}

impl SkyboxTransforms {
    /// Build the skybox uniform data.
    pub fn new(model_view_projection: Matrix4<f32>) -> Self {
        Self {
            model_view_projection_matrix: model_view_projection.into(),
        }
    }
}

/// Uniform data shared by every object in a frame.
///
/// Padded out to 256 bytes, one full uniform-offset alignment unit.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct PerFrameConstants {
    pub projection_matrix: [[f32; 4]; 4],
    pad1: [[f32; 4]; 4],
    pad2: [[f32; 4]; 4],
    pad3: [[f32; 4]; 4],
}

impl PerFrameConstants {
    /// Build the per-frame uniform data.
    pub fn new(projection: Matrix4<f32>) -> Self {
        Self {
            projection_matrix: projection.into(),
            pad1: ZERO_MAT4,
            pad2: ZERO_MAT4,
            pad3: ZERO_MAT4,
        }
    }
}

// The shaders read these structs at fixed byte offsets. Any layout drift
// here is silent data corruption at draw time, so pin every size and offset.
const _: () = assert!(size_of::<ObjectTransforms>() == 304);
const _: () = assert!(offset_of!(ObjectTransforms, model_view_matrix) == 0);
const _: () = assert!(offset_of!(ObjectTransforms, normal_matrix) == 64);
const _: () = assert!(offset_of!(ObjectTransforms, pad1) == 112);
const _: () = assert!(offset_of!(ObjectTransforms, pad2) == 176);
const _: () = assert!(offset_of!(ObjectTransforms, pad3) == 240);

const _: () = assert!(size_of::<SkyboxTransforms>() == 64);

const _: () = assert!(size_of::<PerFrameConstants>() == 256);
const _: () = assert!(offset_of!(PerFrameConstants, projection_matrix) == 0);
const _: () = assert!(offset_of!(PerFrameConstants, pad1) == 64);
const _: () = assert!(offset_of!(PerFrameConstants, pad2) == 128);
const _: () = assert!(offset_of!(PerFrameConstants, pad3) == 192);

/// The normal matrix for a model-view matrix: inverse transpose of its
/// upper-left 3x3.
fn normal_matrix(model_view: &Matrix4<f32>) -> Matrix3<f32> {
    let upper_left = Matrix3::from_cols(
        model_view.x.truncate(),
        model_view.y.truncate(),
        model_view.z.truncate(),
    );
    upper_left
        .invert()
        .unwrap_or(Matrix3::identity())
        .transpose()
}

/// Widen a 3x3 matrix to the shader's column layout (each column padded to
/// 16 bytes).
fn pad_mat3(m: Matrix3<f32>) -> [[f32; 4]; 3] {
    [
        [m.x.x, m.x.y, m.x.z, 0.0],
        [m.y.x, m.y.y, m.y.z, 0.0],
        [m.z.x, m.z.y, m.z.z, 0.0],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Deg, Vector3};

    #[test]
    fn struct_sizes_match_shader_layout() {
        assert_eq!(size_of::<ObjectTransforms>(), 304);
        assert_eq!(size_of::<SkyboxTransforms>(), 64);
        assert_eq!(size_of::<PerFrameConstants>(), 256);
    }

    #[test]
    fn field_offsets_match_shader_layout() {
        assert_eq!(offset_of!(ObjectTransforms, model_view_matrix), 0);
        assert_eq!(offset_of!(ObjectTransforms, normal_matrix), 64);
        assert_eq!(offset_of!(ObjectTransforms, pad1), 112);
        assert_eq!(offset_of!(PerFrameConstants, projection_matrix), 0);
        assert_eq!(offset_of!(PerFrameConstants, pad1), 64);
    }

    #[test]
    fn padding_is_zeroed() {
        let transforms = ObjectTransforms::new(Matrix4::identity());
        assert_eq!(transforms.pad1, ZERO_MAT4);
        assert_eq!(transforms.pad2, ZERO_MAT4);
        assert_eq!(transforms.pad3, ZERO_MAT4);

        let constants = PerFrameConstants::new(Matrix4::identity());
        assert_eq!(constants.pad1, ZERO_MAT4);
    }

    #[test]
    fn normal_matrix_of_rotation_is_the_rotation() {
        // A pure rotation is orthonormal, so its inverse transpose is itself.
        let rotation = Matrix4::from_angle_y(Deg(30.0));
        let transforms = ObjectTransforms::new(rotation);

        let expected: [[f32; 4]; 4] = rotation.into();
        for col in 0..3 {
            for row in 0..3 {
                let got = transforms.normal_matrix[col][row];
                assert!(
                    (got - expected[col][row]).abs() < 1e-6,
                    "normal[{col}][{row}] = {got}, expected {}",
                    expected[col][row]
                );
            }
            assert_eq!(transforms.normal_matrix[col][3], 0.0);
        }
    }

    #[test]
    fn normal_matrix_undoes_nonuniform_scale() {
        let model_view = Matrix4::from_nonuniform_scale(2.0, 1.0, 1.0);
        let transforms = ObjectTransforms::new(model_view);
        // Inverse transpose of diag(2, 1, 1) is diag(0.5, 1, 1).
        assert!((transforms.normal_matrix[0][0] - 0.5).abs() < 1e-6);
        assert!((transforms.normal_matrix[1][1] - 1.0).abs() < 1e-6);
        assert!((transforms.normal_matrix[2][2] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn written_matrix_reads_back_bit_identical() {
        let projection = Matrix4::from_translation(Vector3::new(0.25, -3.5, 100.0));
        let constants = PerFrameConstants::new(projection);

        let bytes = bytemuck::bytes_of(&constants);
        let read_back: &PerFrameConstants = bytemuck::from_bytes(&bytes[..]);

        let expected: [[f32; 4]; 4] = projection.into();
        for col in 0..4 {
            for row in 0..4 {
                assert_eq!(
                    read_back.projection_matrix[col][row].to_bits(),
                    expected[col][row].to_bits()
                );
            }
        }
    }
}
