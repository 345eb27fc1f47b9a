/// Pure numeric helpers: narrowing, midpoints and direction bases
use log::{debug, warn};
use nalgebra::{Quaternion, RealField, Rotation3, UnitQuaternion, Vector3};

use crate::error::{Result, TransformError};
use crate::face::Face;

/// Reference up axis used when building a basis from a direction.
pub const WORLD_UP: Vector3<f32> = Vector3::new(0.0, 1.0, 0.0);

/// Reference used instead of [`WORLD_UP`] when the direction is parallel to it.
pub const FALLBACK_UP: Vector3<f32> = Vector3::new(0.0, 0.0, -1.0);

const PARALLEL_EPSILON: f32 = 1e-6;

/// Narrow a double precision vector to the precision of render matrices.
pub fn drop_precision(vector: &Vector3<f64>) -> Vector3<f32> {
    vector.map(|c| c as f32)
}

/// Narrow a double precision quaternion, renormalizing after the cast.
pub fn drop_quaternion_precision(quaternion: &UnitQuaternion<f64>) -> UnitQuaternion<f32> {
    UnitQuaternion::new_normalize(Quaternion::from(quaternion.coords.map(|c| c as f32)))
}

/// Per-axis arithmetic mean of two points
pub fn midpoint<T: RealField + Copy>(a: &Vector3<T>, b: &Vector3<T>) -> Vector3<T> {
    (a + b) / (T::one() + T::one())
}

/// Conversion of the accepted vector inputs into render precision.
///
/// Lets every builder method take `Vector3<f32>`, `Vector3<f64>`, plain
/// arrays or a [`Face`] without a separate overload for each.
pub trait IntoVector3f {
    fn into_vector3f(self) -> Vector3<f32>;
}

impl IntoVector3f for Vector3<f32> {
    fn into_vector3f(self) -> Vector3<f32> {
        self
    }
}

impl IntoVector3f for Vector3<f64> {
    fn into_vector3f(self) -> Vector3<f32> {
        drop_precision(&self)
    }
}

impl IntoVector3f for [f32; 3] {
    fn into_vector3f(self) -> Vector3<f32> {
        Vector3::from(self)
    }
}

impl IntoVector3f for [f64; 3] {
    fn into_vector3f(self) -> Vector3<f32> {
        drop_precision(&Vector3::from(self))
    }
}

impl IntoVector3f for Face {
    fn into_vector3f(self) -> Vector3<f32> {
        self.direction()
    }
}

/// A finite, non-zero direction, stored normalized
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vector3<f32>", into = "Vector3<f32>")
)]
pub struct Direction(Vector3<f32>);

impl Direction {
    pub fn new(vector: impl IntoVector3f) -> Result<Self> {
        let vector = vector.into_vector3f();
        let length = vector.norm();
        if !length.is_finite() || length <= f32::EPSILON {
            warn!("rejecting direction {:?}", vector);
            return Err(TransformError::InvalidDirection {
                x: vector.x,
                y: vector.y,
                z: vector.z,
            });
        }
        Ok(Self(vector / length))
    }

    /// Direction pointing from `from` towards `to`
    pub fn between(from: impl IntoVector3f, to: impl IntoVector3f) -> Result<Self> {
        Self::new(to.into_vector3f() - from.into_vector3f())
    }

    pub fn vector(&self) -> Vector3<f32> {
        self.0
    }

    /// Orthonormal basis mapping local `+Z` onto this direction
    pub fn basis(&self) -> Rotation3<f32> {
        let reference = if self.0.dot(&WORLD_UP).abs() > 1.0 - PARALLEL_EPSILON {
            debug!("direction {:?} is parallel to world up, using fallback", self.0);
            FALLBACK_UP
        } else {
            WORLD_UP
        };
        Rotation3::face_towards(&self.0, &reference)
    }
}

impl TryFrom<Vector3<f32>> for Direction {
    type Error = TransformError;

    fn try_from(vector: Vector3<f32>) -> Result<Self> {
        Self::new(vector)
    }
}

impl From<Direction> for Vector3<f32> {
    fn from(direction: Direction) -> Self {
        direction.0
    }
}

impl From<Face> for Direction {
    fn from(face: Face) -> Self {
        Self(face.direction())
    }
}

pub fn basis_from_direction(direction: impl IntoVector3f) -> Result<Rotation3<f32>> {
    Ok(Direction::new(direction)?.basis())
}

pub fn basis_from_points(from: impl IntoVector3f, to: impl IntoVector3f) -> Result<Rotation3<f32>> {
    Ok(Direction::between(from, to)?.basis())
}
