/// Per-kind display property builders
///
/// Each builder records the properties a caller wants set and pushes only
/// those into an entity on `update`, leaving everything else as the host
/// configured it.
use dml_core::{EntityKind, Result};
use nalgebra::Matrix4;

use crate::entity::{
    expect_kind, Billboard, Brightness, Color, DisplayContent, DisplayEntity, TextAlignment,
};

/// Properties every display kind supports
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayProperties {
    pub transformation: Option<Matrix4<f32>>,
    pub glow: Option<Color>,
    pub brightness: Option<Brightness>,
    pub view_range: Option<f32>,
    pub interpolation_delay: Option<i32>,
    pub interpolation_duration: Option<i32>,
}

impl DisplayProperties {
    fn apply(&self, entity: &mut dyn DisplayEntity) {
        if let Some(matrix) = self.transformation {
            entity.set_transformation_matrix(matrix);
        }
        if let Some(color) = self.glow {
            entity.set_glow_color(color);
        }
        if let Some(brightness) = self.brightness {
            entity.set_brightness(brightness);
        }
        if let Some(view_range) = self.view_range {
            entity.set_view_range(view_range);
        }
        if let Some(ticks) = self.interpolation_delay {
            entity.set_interpolation_delay(ticks);
        }
        if let Some(ticks) = self.interpolation_duration {
            entity.set_interpolation_duration(ticks);
        }
    }
}

macro_rules! common_setters {
    () => {
        pub fn transformation(&mut self, matrix: Matrix4<f32>) -> &mut Self {
            self.common.transformation = Some(matrix);
            self
        }

        pub fn glow(&mut self, color: Color) -> &mut Self {
            self.common.glow = Some(color);
            self
        }

        /// Block light level, clamped to `0..=15`
        pub fn brightness(&mut self, level: u8) -> &mut Self {
            self.common.brightness = Some(Brightness::block(level));
            self
        }

        pub fn view_range(&mut self, view_range: f32) -> &mut Self {
            self.common.view_range = Some(view_range);
            self
        }

        pub fn interpolation_delay(&mut self, ticks: i32) -> &mut Self {
            self.common.interpolation_delay = Some(ticks);
            self
        }

        pub fn interpolation_duration(&mut self, ticks: i32) -> &mut Self {
            self.common.interpolation_duration = Some(ticks);
            self
        }

        pub fn properties(&self) -> &DisplayProperties {
            &self.common
        }
    };
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockDisplayBuilder {
    material: Option<String>,
    block_data: Option<String>,
    common: DisplayProperties,
}

impl BlockDisplayBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn material(&mut self, material: impl Into<String>) -> &mut Self {
        self.material = Some(material.into());
        self
    }

    /// Full block state; overrides [`BlockDisplayBuilder::material`]
    pub fn block_data(&mut self, block_data: impl Into<String>) -> &mut Self {
        self.block_data = Some(block_data.into());
        self
    }

    common_setters!();

    pub fn update(&self, entity: &mut dyn DisplayEntity) -> Result<()> {
        expect_kind(entity, EntityKind::BlockDisplay)?;
        if let Some(block) = self.block_data.as_ref().or(self.material.as_ref()) {
            entity.set_content(DisplayContent::Block(block.clone()));
        }
        self.common.apply(entity);
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDisplayBuilder {
    item: Option<String>,
    billboard: Option<Billboard>,
    common: DisplayProperties,
}

impl ItemDisplayBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain item of the given material
    pub fn material(&mut self, material: impl Into<String>) -> &mut Self {
        self.item(material)
    }

    pub fn item(&mut self, item: impl Into<String>) -> &mut Self {
        self.item = Some(item.into());
        self
    }

    pub fn billboard(&mut self, billboard: Billboard) -> &mut Self {
        self.billboard = Some(billboard);
        self
    }

    common_setters!();

    pub fn update(&self, entity: &mut dyn DisplayEntity) -> Result<()> {
        expect_kind(entity, EntityKind::ItemDisplay)?;
        if let Some(item) = &self.item {
            entity.set_content(DisplayContent::Item(item.clone()));
        }
        if let Some(billboard) = self.billboard {
            entity.set_billboard(billboard);
        }
        self.common.apply(entity);
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextDisplayBuilder {
    text: Option<String>,
    alignment: Option<TextAlignment>,
    background: Option<Color>,
    billboard: Option<Billboard>,
    common: DisplayProperties,
}

impl TextDisplayBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    pub fn alignment(&mut self, alignment: TextAlignment) -> &mut Self {
        self.alignment = Some(alignment);
        self
    }

    /// Background behind the text (transparent when unset)
    pub fn background_color(&mut self, color: Color) -> &mut Self {
        self.background = Some(color);
        self
    }

    pub fn billboard(&mut self, billboard: Billboard) -> &mut Self {
        self.billboard = Some(billboard);
        self
    }

    common_setters!();

    pub fn update(&self, entity: &mut dyn DisplayEntity) -> Result<()> {
        expect_kind(entity, EntityKind::TextDisplay)?;
        if let Some(text) = &self.text {
            entity.set_content(DisplayContent::Text(text.clone()));
        }
        if let Some(alignment) = self.alignment {
            entity.set_text_alignment(alignment);
        }
        if let Some(color) = self.background {
            entity.set_background_color(color);
        }
        if let Some(billboard) = self.billboard {
            entity.set_billboard(billboard);
        }
        self.common.apply(entity);
        Ok(())
    }
}
