/// Contract for the external display entities matrices are handed to
use dml_core::EntityKind;
use nalgebra::Matrix4;

/// RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Light levels a display is rendered with, each in `0..=15`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Brightness {
    pub block_light: u8,
    pub sky_light: u8,
}

impl Brightness {
    pub const MAX_LEVEL: u8 = 15;

    /// Levels above [`Brightness::MAX_LEVEL`] are clamped
    pub fn new(block_light: u8, sky_light: u8) -> Self {
        Self {
            block_light: block_light.min(Self::MAX_LEVEL),
            sky_light: sky_light.min(Self::MAX_LEVEL),
        }
    }

    /// Block light only, no sky light
    pub fn block(level: u8) -> Self {
        Self::new(level, 0)
    }
}

/// How a display turns to face the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Billboard {
    #[default]
    Fixed,
    Vertical,
    Horizontal,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextAlignment {
    #[default]
    Center,
    Left,
    Right,
}

/// What a display shows
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayContent {
    /// Block state, e.g. `minecraft:oak_stairs[facing=east]`
    Block(String),
    /// Item identifier, e.g. `minecraft:diamond_sword`
    Item(String),
    Text(String),
}

/// A live render entity owned by the host.
///
/// Implementations forward each call to whatever entity API the host
/// exposes. Nothing in this workspace creates or removes entities; it only
/// pushes matrices and properties into ones the host already has.
pub trait DisplayEntity {
    fn kind(&self) -> EntityKind;

    fn set_transformation_matrix(&mut self, matrix: Matrix4<f32>);

    fn set_content(&mut self, content: DisplayContent);

    /// Enables glowing with the given outline colour
    fn set_glow_color(&mut self, color: Color);

    fn set_brightness(&mut self, brightness: Brightness);

    fn set_view_range(&mut self, view_range: f32);

    fn set_billboard(&mut self, billboard: Billboard);

    fn set_interpolation_delay(&mut self, ticks: i32);

    fn set_interpolation_duration(&mut self, ticks: i32);

    /// Only meaningful for text displays; ignored elsewhere by default
    fn set_text_alignment(&mut self, _alignment: TextAlignment) {}

    /// Only meaningful for text displays; ignored elsewhere by default
    fn set_background_color(&mut self, _color: Color) {}
}

/// Explicit kind check replacing a downcast
pub(crate) fn expect_kind(entity: &dyn DisplayEntity, expected: EntityKind) -> dml_core::Result<()> {
    let found = entity.kind();
    if found != expected {
        log::debug!("refusing to update a {} as a {}", found, expected);
        return Err(dml_core::TransformError::KindMismatch { expected, found });
    }
    Ok(())
}
