/// Recorded transformation operations
use nalgebra::{Matrix4, Quaternion, UnitQuaternion, Vector3};

use crate::transform::Transform;
use crate::util::{drop_precision, drop_quaternion_precision, Direction};

/// A rotation given either as Euler angles in radians or as a quaternion
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "finite_angles"))]
    Euler(Vector3<f64>),
    #[cfg_attr(feature = "serde", serde(deserialize_with = "normalized_quaternion"))]
    Quaternion(UnitQuaternion<f64>),
}

#[cfg(feature = "serde")]
fn finite_angles<'de, D>(deserializer: D) -> Result<Vector3<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::{de::Error, Deserialize};

    let angles = Vector3::<f64>::deserialize(deserializer)?;
    if angles.iter().all(|a| a.is_finite()) {
        Ok(angles)
    } else {
        Err(D::Error::custom(format!("non-finite euler angles {:?}", angles)))
    }
}

/// Stored quaternions need not be unit length, but must be finite and non-zero
#[cfg(feature = "serde")]
fn normalized_quaternion<'de, D>(deserializer: D) -> Result<UnitQuaternion<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::{de::Error, Deserialize};

    let quaternion = Quaternion::<f64>::deserialize(deserializer)?;
    let norm = quaternion.norm();
    if !norm.is_finite() || norm <= f64::EPSILON {
        return Err(D::Error::custom(format!(
            "quaternion {:?} has no rotation",
            quaternion.coords
        )));
    }
    Ok(UnitQuaternion::new_normalize(quaternion))
}

impl Rotation {
    pub fn matrix(&self) -> Matrix4<f32> {
        match self {
            Rotation::Euler(angles) => Transform::rotation_xyz(&drop_precision(angles)),
            Rotation::Quaternion(q) => Transform::quaternion_matrix(&drop_quaternion_precision(q)),
        }
    }

    /// The matrix undoing [`Rotation::matrix`]
    pub fn inverse_matrix(&self) -> Matrix4<f32> {
        match self {
            Rotation::Euler(angles) => Transform::rotation_xyz_inverse(&drop_precision(angles)),
            Rotation::Quaternion(q) => {
                Transform::quaternion_matrix(&drop_quaternion_precision(&q.inverse()))
            }
        }
    }
}

impl From<Vector3<f64>> for Rotation {
    fn from(angles: Vector3<f64>) -> Self {
        Rotation::Euler(angles)
    }
}

impl From<Vector3<f32>> for Rotation {
    fn from(angles: Vector3<f32>) -> Self {
        Rotation::Euler(angles.map(f64::from))
    }
}

impl From<[f64; 3]> for Rotation {
    fn from(angles: [f64; 3]) -> Self {
        Rotation::Euler(Vector3::from(angles))
    }
}

impl From<[f32; 3]> for Rotation {
    fn from(angles: [f32; 3]) -> Self {
        Rotation::Euler(Vector3::from(angles).map(f64::from))
    }
}

impl From<UnitQuaternion<f64>> for Rotation {
    fn from(quaternion: UnitQuaternion<f64>) -> Self {
        Rotation::Quaternion(quaternion)
    }
}

impl From<UnitQuaternion<f32>> for Rotation {
    fn from(quaternion: UnitQuaternion<f32>) -> Self {
        let widened = Quaternion::from(quaternion.coords.map(f64::from));
        Rotation::Quaternion(UnitQuaternion::new_normalize(widened))
    }
}

/// One step of a transformation pipeline
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    Translate(Vector3<f32>),
    Scale(Vector3<f32>),
    Rotate(Rotation),
    /// Undoes a `Rotate` with the same payload
    RotateBackwards(Rotation),
    LookAlong(Direction),
}

impl Operation {
    /// The transform this operation multiplies in
    pub fn matrix(&self) -> Matrix4<f32> {
        match self {
            Operation::Translate(v) => Transform::translation_matrix(v),
            Operation::Scale(v) => Transform::scale_matrix(v),
            Operation::Rotate(rotation) => rotation.matrix(),
            Operation::RotateBackwards(rotation) => rotation.inverse_matrix(),
            Operation::LookAlong(direction) => Transform::look_along_matrix(direction),
        }
    }

    /// Right-multiply `matrix` by this operation
    pub fn apply(&self, matrix: &mut Matrix4<f32>) {
        *matrix *= self.matrix();
    }
}
