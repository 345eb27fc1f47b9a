/// Error type shared by the core and the model crate
use thiserror::Error;

use crate::kind::EntityKind;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// A look-along direction was zero-length or contained NaN/infinity.
    #[error("invalid direction ({x}, {y}, {z}): must be finite and non-zero")]
    InvalidDirection { x: f32, y: f32, z: f32 },

    #[error("must provide a {expected} entity, got {found}")]
    KindMismatch {
        expected: EntityKind,
        found: EntityKind,
    },

    #[error("model has no component named '{0}'")]
    UnknownComponent(String),

    #[error("no display provided for component '{0}'")]
    MissingDisplay(String),
}

pub type Result<T> = std::result::Result<T, TransformError>;
