/// Single-operation transformation matrices
use nalgebra::{Matrix4, UnitQuaternion, Vector3};

use crate::util::Direction;

/// Constructors for the matrix of each individual operation
pub struct Transform;

impl Transform {
    /// Intrinsic Euler rotation: about X, then Y, then Z (`Rx * Ry * Rz`)
    pub fn rotation_xyz(angles: &Vector3<f32>) -> Matrix4<f32> {
        let rx = Matrix4::new_rotation(Vector3::new(angles.x, 0.0, 0.0));
        let ry = Matrix4::new_rotation(Vector3::new(0.0, angles.y, 0.0));
        let rz = Matrix4::new_rotation(Vector3::new(0.0, 0.0, angles.z));

        rx * ry * rz
    }

    /// Exact inverse of [`Transform::rotation_xyz`]: negated angles applied
    /// in reverse axis order (`Rz(-z) * Ry(-y) * Rx(-x)`)
    pub fn rotation_xyz_inverse(angles: &Vector3<f32>) -> Matrix4<f32> {
        let rx = Matrix4::new_rotation(Vector3::new(-angles.x, 0.0, 0.0));
        let ry = Matrix4::new_rotation(Vector3::new(0.0, -angles.y, 0.0));
        let rz = Matrix4::new_rotation(Vector3::new(0.0, 0.0, -angles.z));

        rz * ry * rx
    }

    pub fn quaternion_matrix(rotation: &UnitQuaternion<f32>) -> Matrix4<f32> {
        rotation.to_homogeneous()
    }

    pub fn translation_matrix(translation: &Vector3<f32>) -> Matrix4<f32> {
        Matrix4::new_translation(translation)
    }

    pub fn scale_matrix(scale: &Vector3<f32>) -> Matrix4<f32> {
        Matrix4::new_nonuniform_scaling(scale)
    }

    /// Rotation turning local `+Z` to face along `direction`
    pub fn look_along_matrix(direction: &Direction) -> Matrix4<f32> {
        direction.basis().to_homogeneous()
    }
}
