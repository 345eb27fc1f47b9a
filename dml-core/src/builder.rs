/// Ordered recording of operations folded into a single matrix
use log::trace;
use nalgebra::{Matrix4, Vector3};

use crate::error::Result;
use crate::face::Face;
use crate::kind::EntityKind;
use crate::operation::{Operation, Rotation};
use crate::util::{Direction, IntoVector3f};

/// Records transformation operations and folds them into a matrix.
///
/// Operations are applied in the order they are recorded, each one
/// right-multiplying the matrix built so far. This means later operations
/// act in the frame produced by earlier ones: rotating by 90 degrees and then
/// translating moves along the rotated axis.
///
/// Cloning a builder copies its operations, so a base configuration can be
/// forked into several shapes without the forks affecting each other.
///
/// # Example
/// ```
/// use dml_core::{EntityKind, MatrixBuilder};
/// use nalgebra::Vector3;
///
/// let mut builder = MatrixBuilder::new();
/// builder
///     .translate(Vector3::new(0.0f32, 1.0, 0.0))
///     .rotate(Vector3::new(0.0f64, std::f64::consts::FRAC_PI_4, 0.0))
///     .scale_uniform(0.5);
/// let matrix = builder.build(EntityKind::BlockDisplay);
/// assert!(matrix.iter().all(|c| c.is_finite()));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixBuilder {
    operations: Vec<Operation>,
}

impl MatrixBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, operation: Operation) -> &mut Self {
        self.operations.push(operation);
        self
    }

    pub fn translate(&mut self, translation: impl IntoVector3f) -> &mut Self {
        self.push(Operation::Translate(translation.into_vector3f()))
    }

    pub fn scale(&mut self, scale: impl IntoVector3f) -> &mut Self {
        self.push(Operation::Scale(scale.into_vector3f()))
    }

    /// Same factor on every axis, in either precision
    pub fn scale_uniform(&mut self, scale: impl Into<f64>) -> &mut Self {
        let scale: f64 = scale.into();
        self.scale(Vector3::repeat(scale))
    }

    pub fn rotate(&mut self, rotation: impl Into<Rotation>) -> &mut Self {
        self.push(Operation::Rotate(rotation.into()))
    }

    /// Undo a previous [`MatrixBuilder::rotate`] with the same argument
    pub fn rotate_backwards(&mut self, rotation: impl Into<Rotation>) -> &mut Self {
        self.push(Operation::RotateBackwards(rotation.into()))
    }

    /// Orient local `+Z` along `direction`.
    ///
    /// Fails with `InvalidDirection` for zero-length or non-finite input; the
    /// builder is left unchanged in that case.
    pub fn look_along(&mut self, direction: impl IntoVector3f) -> Result<&mut Self> {
        let direction = Direction::new(direction)?;
        Ok(self.push(Operation::LookAlong(direction)))
    }

    /// Orient local `+Z` along `to - from`
    pub fn look_along_points(
        &mut self,
        from: impl IntoVector3f,
        to: impl IntoVector3f,
    ) -> Result<&mut Self> {
        let direction = Direction::between(from, to)?;
        Ok(self.push(Operation::LookAlong(direction)))
    }

    pub fn look_along_face(&mut self, face: Face) -> &mut Self {
        self.push(Operation::LookAlong(Direction::from(face)))
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Fold the recorded operations without any entity adjustment
    pub fn fold(&self) -> Matrix4<f32> {
        let mut matrix = Matrix4::identity();
        for operation in &self.operations {
            operation.apply(&mut matrix);
        }
        matrix
    }

    /// Fold the recorded operations and apply the pivot correction for `kind`
    pub fn build(&self, kind: EntityKind) -> Matrix4<f32> {
        trace!("folding {} operations for {}", self.operations.len(), kind);
        let mut matrix = self.fold();
        matrix *= kind.adjustment();
        matrix
    }
}
