use dml_core::{EntityKind, MatrixBuilder, Result};
use nalgebra::Matrix4;

use super::{transform_methods, ModelComponent};
use crate::display::ItemDisplayBuilder;
use crate::entity::{expect_kind, Billboard, Color, DisplayEntity};

/// An item display, pivoting on the item's centre
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelItem {
    main: ItemDisplayBuilder,
    matrix_builder: MatrixBuilder,
}

impl ModelItem {
    pub fn new() -> Self {
        Self::default()
    }

    transform_methods!();

    pub fn item(&mut self, item: impl Into<String>) -> &mut Self {
        self.main.item(item);
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

    pub fn billboard(&mut self, billboard: Billboard) -> &mut Self {
        self.main.billboard(billboard);
        self
    }

    pub fn view_range(&mut self, view_range: f32) -> &mut Self {
        self.main.view_range(view_range);
        self
    }
}

impl ModelComponent for ModelItem {
    fn kind(&self) -> EntityKind {
        EntityKind::ItemDisplay
    }

    fn matrix(&self) -> Result<Matrix4<f32>> {
        Ok(self.matrix_builder.build(EntityKind::ItemDisplay))
    }

    fn update(&self, entity: &mut dyn DisplayEntity) -> Result<()> {
        expect_kind(entity, EntityKind::ItemDisplay)?;
        let mut main = self.main.clone();
        main.transformation(self.matrix()?);
        main.update(entity)
    }
}
