use dml_core::{midpoint, EntityKind, IntoVector3f, MatrixBuilder, Result};
use nalgebra::{Matrix4, Vector3};

use super::ModelComponent;
use crate::display::BlockDisplayBuilder;
use crate::entity::{expect_kind, Color, DisplayEntity};

/// A thin block stretched between two points
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelLine {
    main: BlockDisplayBuilder,
    translation: Vector3<f32>,
    from: Vector3<f32>,
    to: Vector3<f32>,
    thickness: f32,
    extra_length: f32,
    roll: f64,
}

impl ModelLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset applied to both endpoints
    pub fn translation(&mut self, translation: impl IntoVector3f) -> &mut Self {
        self.translation = translation.into_vector3f();
        self
    }

    pub fn from(&mut self, from: impl IntoVector3f) -> &mut Self {
        self.from = from.into_vector3f();
        self
    }

    pub fn to(&mut self, to: impl IntoVector3f) -> &mut Self {
        self.to = to.into_vector3f();
        self
    }

    pub fn thickness(&mut self, thickness: f32) -> &mut Self {
        self.thickness = thickness;
        self
    }

    /// Added to the endpoint distance, split evenly between both ends
    pub fn extra_length(&mut self, extra_length: f32) -> &mut Self {
        self.extra_length = extra_length;
        self
    }

    /// Rotation in radians about the line's own axis
    pub fn roll(&mut self, roll: f64) -> &mut Self {
        self.roll = roll;
        self
    }

    pub fn length(&self) -> f32 {
        (self.to - self.from).norm()
    }

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

    pub fn interpolation_delay(&mut self, ticks: i32) -> &mut Self {
        self.main.interpolation_delay(ticks);
        self
    }

    pub fn interpolation_duration(&mut self, ticks: i32) -> &mut Self {
        self.main.interpolation_duration(ticks);
        self
    }

    /// Fails with `InvalidDirection` when both endpoints coincide
    pub fn matrix_builder(&self) -> Result<MatrixBuilder> {
        let centre = midpoint(&self.from, &self.to) + self.translation;
        let mut builder = MatrixBuilder::new();
        builder
            .translate(centre)
            .look_along_points(self.from, self.to)?
            .rotate(Vector3::new(0.0, 0.0, self.roll))
            .scale(Vector3::new(
                self.thickness,
                self.thickness,
                self.length() + self.extra_length,
            ));
        Ok(builder)
    }
}

impl ModelComponent for ModelLine {
    fn kind(&self) -> EntityKind {
        EntityKind::BlockDisplay
    }

    fn matrix(&self) -> Result<Matrix4<f32>> {
        Ok(self.matrix_builder()?.build(EntityKind::BlockDisplay))
    }

    fn update(&self, entity: &mut dyn DisplayEntity) -> Result<()> {
        expect_kind(entity, EntityKind::BlockDisplay)?;
        let mut main = self.main.clone();
        main.transformation(self.matrix()?);
        main.update(entity)
    }
}
