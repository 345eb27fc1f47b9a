use dml_core::{EntityKind, MatrixBuilder, Result};
use nalgebra::Matrix4;

use super::{transform_methods, ModelComponent};
use crate::display::TextDisplayBuilder;
use crate::entity::{expect_kind, Billboard, Color, DisplayEntity, TextAlignment};

/// A text display; one default-size line is centred on the origin
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelText {
    main: TextDisplayBuilder,
    matrix_builder: MatrixBuilder,
}

impl ModelText {
    pub fn new() -> Self {
        Self::default()
    }

    transform_methods!();

    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.main.text(text);
        self
    }

    pub fn alignment(&mut self, alignment: TextAlignment) -> &mut Self {
        self.main.alignment(alignment);
        self
    }

    /// The background of the text (default is transparent)
    pub fn background(&mut self, color: Color) -> &mut Self {
        self.main.background_color(color);
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

impl ModelComponent for ModelText {
    fn kind(&self) -> EntityKind {
        EntityKind::TextDisplay
    }

    fn matrix(&self) -> Result<Matrix4<f32>> {
        Ok(self.matrix_builder.build(EntityKind::TextDisplay))
    }

    fn update(&self, entity: &mut dyn DisplayEntity) -> Result<()> {
        expect_kind(entity, EntityKind::TextDisplay)?;
        let mut main = self.main.clone();
        main.transformation(self.matrix()?);
        main.update(entity)
    }
}
