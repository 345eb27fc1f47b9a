/// Shape assemblers producing one display each
use dml_core::{EntityKind, Result};
use nalgebra::Matrix4;

use crate::entity::{expect_kind, DisplayEntity};

pub mod cuboid;
pub mod diamond;
pub mod item;
pub mod line;
pub mod text;

pub use cuboid::ModelCuboid;
pub use diamond::ModelDiamond;
pub use item::ModelItem;
pub use line::ModelLine;
pub use text::ModelText;

/// A single component of a model, backed by one display entity
pub trait ModelComponent {
    /// The display kind this component renders as
    fn kind(&self) -> EntityKind;

    /// The transformation matrix for the component's display
    fn matrix(&self) -> Result<Matrix4<f32>>;

    /// Push only the transformation matrix into `entity`
    fn update_matrix(&self, entity: &mut dyn DisplayEntity) -> Result<()> {
        expect_kind(entity, self.kind())?;
        entity.set_transformation_matrix(self.matrix()?);
        Ok(())
    }

    /// Push the matrix and every configured property into `entity`
    fn update(&self, entity: &mut dyn DisplayEntity) -> Result<()>;
}

/// Transform surface shared by the components that expose their builder.
///
/// Every method records one operation; translations and scales act in the
/// frame left by earlier rotations.
macro_rules! transform_methods {
    () => {
        pub fn translate(&mut self, translation: impl dml_core::IntoVector3f) -> &mut Self {
            self.matrix_builder.translate(translation);
            self
        }

        /// Scale on each axis
        pub fn scale(&mut self, size: impl dml_core::IntoVector3f) -> &mut Self {
            self.matrix_builder.scale(size);
            self
        }

        /// Scale on all axes
        pub fn scale_uniform(&mut self, size: impl Into<f64>) -> &mut Self {
            self.matrix_builder.scale_uniform(size);
            self
        }

        /// Rotate by Euler angles in radians or by a quaternion
        pub fn rotate(&mut self, rotation: impl Into<dml_core::Rotation>) -> &mut Self {
            self.matrix_builder.rotate(rotation);
            self
        }

        pub fn rotate_x(&mut self, angle: f64) -> &mut Self {
            self.rotate(nalgebra::Vector3::new(angle, 0.0, 0.0))
        }

        pub fn rotate_y(&mut self, angle: f64) -> &mut Self {
            self.rotate(nalgebra::Vector3::new(0.0, angle, 0.0))
        }

        pub fn rotate_z(&mut self, angle: f64) -> &mut Self {
            self.rotate(nalgebra::Vector3::new(0.0, 0.0, angle))
        }

        /// Undo a previous rotation, e.g. to get back to the starting
        /// orientation after rotating and then translating
        pub fn undo_rotate(&mut self, rotation: impl Into<dml_core::Rotation>) -> &mut Self {
            self.matrix_builder.rotate_backwards(rotation);
            self
        }

        pub fn undo_rotate_x(&mut self, angle: f64) -> &mut Self {
            self.undo_rotate(nalgebra::Vector3::new(angle, 0.0, 0.0))
        }

        pub fn undo_rotate_y(&mut self, angle: f64) -> &mut Self {
            self.undo_rotate(nalgebra::Vector3::new(0.0, angle, 0.0))
        }

        pub fn undo_rotate_z(&mut self, angle: f64) -> &mut Self {
            self.undo_rotate(nalgebra::Vector3::new(0.0, 0.0, angle))
        }

        /// Look along `facing`, e.g. to align with where a player is looking
        pub fn look_along(
            &mut self,
            facing: impl dml_core::IntoVector3f,
        ) -> dml_core::Result<&mut Self> {
            self.matrix_builder.look_along(facing)?;
            Ok(self)
        }

        pub fn look_along_face(&mut self, face: dml_core::Face) -> &mut Self {
            self.matrix_builder.look_along_face(face);
            self
        }

        pub fn matrix_builder(&self) -> &dml_core::MatrixBuilder {
            &self.matrix_builder
        }
    };
}

pub(crate) use transform_methods;
