/// DML Core Library - Transformation matrix composition for display entities
///
/// This library provides the stateless core: recorded transformation
/// operations, the builder that folds them into a single affine matrix, the
/// per-entity-kind pivot corrections, and the numeric helpers the shape
/// assemblers rely on.

pub mod builder;
pub mod error;
pub mod face;
pub mod kind;
pub mod operation;
pub mod transform;
pub mod util;

// Re-export commonly used types
pub use builder::MatrixBuilder;
pub use error::{Result, TransformError};
pub use face::Face;
pub use kind::EntityKind;
pub use operation::{Operation, Rotation};
pub use transform::Transform;
pub use util::{
    basis_from_direction, basis_from_points, drop_precision, midpoint, Direction, IntoVector3f,
};
