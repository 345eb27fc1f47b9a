use dml_core::{Direction, EntityKind, Face, IntoVector3f, MatrixBuilder, Operation, Result};
use nalgebra::{Matrix4, Vector3};

use super::ModelComponent;
use crate::display::BlockDisplayBuilder;
use crate::entity::{expect_kind, Color, DisplayEntity};

/// Tilts a cube so it stands on one corner
pub const ROTATION: Vector3<f64> = Vector3::new(-0.955, 0.785, 0.0);

/// A diamond (a rotated cube, not the gem).
///
/// Far less flexible than [`super::ModelCuboid`]: only the centre, the
/// starting orientation and the corner-to-corner size can be set.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDiamond {
    main: BlockDisplayBuilder,
    location: Vector3<f32>,
    facing: Direction,
    size: Vector3<f32>,
}

impl Default for ModelDiamond {
    fn default() -> Self {
        Self {
            main: BlockDisplayBuilder::new(),
            location: Vector3::zeros(),
            facing: Direction::from(Face::South),
            size: Vector3::zeros(),
        }
    }
}

impl ModelDiamond {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the centre of the diamond
    pub fn location(&mut self, location: impl IntoVector3f) -> &mut Self {
        self.location = location.into_vector3f();
        self
    }

    /// Sets the starting orientation (default is south, `+Z`)
    pub fn facing(&mut self, facing: impl IntoVector3f) -> Result<&mut Self> {
        self.facing = Direction::new(facing)?;
        Ok(self)
    }

    pub fn facing_face(&mut self, face: Face) -> &mut Self {
        self.facing = Direction::from(face);
        self
    }

    /// Sets the distance from one corner to the opposite corner
    pub fn size(&mut self, size: f32) -> &mut Self {
        // Scaling sets the edge length; the face diagonal of a cube with edge
        // `e` is `e * sqrt(2)`
        self.size = Vector3::repeat((2.0 * (size / 2.0).powi(2)).sqrt());
        self
    }

    /// Overrides material
    pub fn block(&mut self, block_data: impl Into<String>) -> &mut Self {
        self.main.block_data(block_data);
        self
    }

    pub fn material(&mut self, material: impl Into<String>) -> &mut Self {
        self.main.material(material);
        self
    }

    pub fn brightness(&mut self, level: u8) -> &mut Self {
        self.main.brightness(level);
        self
    }

    pub fn glow(&mut self, color: Color) -> &mut Self {
        self.main.glow(color);
        self
    }

    pub fn matrix_builder(&self) -> MatrixBuilder {
        let mut builder = MatrixBuilder::new();
        builder
            .push(Operation::LookAlong(self.facing))
            .translate(self.location)
            .rotate(ROTATION)
            .scale(self.size);
        builder
    }
}

impl ModelComponent for ModelDiamond {
    fn kind(&self) -> EntityKind {
        EntityKind::BlockDisplay
    }

    fn matrix(&self) -> Result<Matrix4<f32>> {
        Ok(self.matrix_builder().build(EntityKind::BlockDisplay))
    }

    fn update(&self, entity: &mut dyn DisplayEntity) -> Result<()> {
        expect_kind(entity, EntityKind::BlockDisplay)?;
        let mut main = self.main.clone();
        main.transformation(self.matrix()?);
        main.update(entity)
    }
}
