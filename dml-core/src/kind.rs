/// Render entity kinds and their pivot corrections
use std::fmt;

use nalgebra::{Matrix4, Vector3};

/// Block models span `(0, 0, 0)..(1, 1, 1)` instead of being centred.
pub const BLOCK_DISPLAY_OFFSET: [f32; 3] = [-0.5, -0.5, -0.5];

/// Text is anchored at the bottom-left of its first line; 0.0125 is the
/// background padding around a default-size line.
pub const TEXT_DISPLAY_OFFSET: [f32; 3] = [-0.1 + 0.0125, -0.25 + 0.0125, 0.0];

/// The kind of display entity a matrix is being built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    BlockDisplay,
    ItemDisplay,
    TextDisplay,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [
        EntityKind::BlockDisplay,
        EntityKind::ItemDisplay,
        EntityKind::TextDisplay,
    ];

    /// Transform appended after every recorded operation so a shape with no
    /// operations renders centred on its origin for this kind.
    pub fn adjustment(self) -> Matrix4<f32> {
        match self {
            EntityKind::BlockDisplay => {
                Matrix4::new_translation(&Vector3::from(BLOCK_DISPLAY_OFFSET))
            }
            EntityKind::ItemDisplay => Matrix4::identity(),
            EntityKind::TextDisplay => {
                Matrix4::new_translation(&Vector3::from(TEXT_DISPLAY_OFFSET))
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EntityKind::BlockDisplay => "BlockDisplay",
            EntityKind::ItemDisplay => "ItemDisplay",
            EntityKind::TextDisplay => "TextDisplay",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
