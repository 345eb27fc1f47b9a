use dml_core::{EntityKind, MatrixBuilder, Result};
use nalgebra::Matrix4;

use super::{transform_methods, ModelComponent};
use crate::display::BlockDisplayBuilder;
use crate::entity::{expect_kind, Color, DisplayEntity};

/// A block display shaped by an arbitrary operation sequence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelCuboid {
    main: BlockDisplayBuilder,
    matrix_builder: MatrixBuilder,
}

impl ModelCuboid {
    pub fn new() -> Self {
        Self::default()
    }

    transform_methods!();

    pub fn material(&mut self, material: impl Into<String>) -> &mut Self {
        self.main.material(material);
        self
    }

    /// Overrides material
    pub fn block(&mut self, block_data: impl Into<String>) -> &mut Self {
        self.main.block_data(block_data);
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

    pub fn view_range(&mut self, view_range: f32) -> &mut Self {
        self.main.view_range(view_range);
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
}

impl ModelComponent for ModelCuboid {
    fn kind(&self) -> EntityKind {
        EntityKind::BlockDisplay
    }

    fn matrix(&self) -> Result<Matrix4<f32>> {
        Ok(self.matrix_builder.build(EntityKind::BlockDisplay))
    }

    fn update(&self, entity: &mut dyn DisplayEntity) -> Result<()> {
        expect_kind(entity, EntityKind::BlockDisplay)?;
        let mut main = self.main.clone();
        main.transformation(self.matrix()?);
        main.update(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::testing::RecordingEntity;
    use crate::entity::DisplayContent;
    use dml_core::{Face, TransformError};
    use nalgebra::{Point3, Vector3};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_scaled_cuboid_is_centred() {
        let mut cuboid = ModelCuboid::new();
        cuboid.scale([2.0f32, 1.0, 4.0]);
        let matrix = cuboid.matrix().unwrap();
        let min = matrix.transform_point(&Point3::origin());
        let max = matrix.transform_point(&Point3::new(1.0, 1.0, 1.0));
        assert!((min - Point3::new(-1.0, -0.5, -2.0)).norm() < 1e-6);
        assert!((max - Point3::new(1.0, 0.5, 2.0)).norm() < 1e-6);
    }

    #[test]
    fn test_translation_follows_rotation() {
        let mut cuboid = ModelCuboid::new();
        cuboid.rotate_y(FRAC_PI_2).translate([1.0f32, 0.0, 0.0]);
        let centre = cuboid
            .matrix()
            .unwrap()
            .transform_point(&Point3::new(0.5, 0.5, 0.5));
        assert!((centre - Point3::new(0.0, 0.0, -1.0)).norm() < 1e-5);
    }

    #[test]
    fn test_undo_rotate_restores_axes() {
        let mut cuboid = ModelCuboid::new();
        cuboid
            .rotate_x(0.7)
            .translate(Vector3::new(0.0f64, 2.0, 0.0))
            .undo_rotate_x(0.7);
        let matrix = cuboid.matrix().unwrap();
        let axis = matrix.transform_vector(&Vector3::x());
        assert!((axis - Vector3::x()).norm() < 1e-5);
    }

    #[test]
    fn test_copy_is_independent() {
        let mut base = ModelCuboid::new();
        base.material("minecraft:glass").scale_uniform(0.5);

        let mut sibling = base.clone();
        sibling.translate([0.0f32, 1.0, 0.0]).look_along_face(Face::East);

        assert_eq!(base.matrix_builder().len(), 1);
        assert_ne!(base.matrix().unwrap(), sibling.matrix().unwrap());
    }

    #[test]
    fn test_update_pushes_matrix_and_properties() {
        let mut cuboid = ModelCuboid::new();
        cuboid
            .material("minecraft:stone")
            .brightness(12)
            .interpolation_duration(5)
            .scale_uniform(3.0);
        let mut entity = RecordingEntity::new(EntityKind::BlockDisplay);
        cuboid.update(&mut entity).unwrap();

        assert_eq!(entity.matrix, Some(cuboid.matrix().unwrap()));
        assert_eq!(
            entity.content,
            Some(DisplayContent::Block("minecraft:stone".into()))
        );
        assert_eq!(entity.interpolation_duration, Some(5));
    }

    #[test]
    fn test_update_matrix_rejects_wrong_kind() {
        let cuboid = ModelCuboid::new();
        let mut entity = RecordingEntity::new(EntityKind::ItemDisplay);
        let err = cuboid.update_matrix(&mut entity).unwrap_err();
        assert!(matches!(err, TransformError::KindMismatch { .. }));
        assert_eq!(entity.matrix, None);
    }

    #[test]
    fn test_look_along_rejects_zero() {
        let mut cuboid = ModelCuboid::new();
        assert!(cuboid.look_along([0.0f32; 3]).is_err());
        assert!(cuboid.matrix_builder().is_empty());
    }
}
