/// DML Model - Shape assemblers on top of the matrix builder
///
/// Components (cuboids, diamonds, lines, items, text) describe one display
/// each; a `Model` groups them by name. The displays themselves belong to
/// the host and are reached only through the `DisplayEntity` trait.

pub mod component;
pub mod display;
pub mod entity;
pub mod model;

pub use component::{ModelComponent, ModelCuboid, ModelDiamond, ModelItem, ModelLine, ModelText};
pub use display::{BlockDisplayBuilder, DisplayProperties, ItemDisplayBuilder, TextDisplayBuilder};
pub use entity::{Billboard, Brightness, Color, DisplayContent, DisplayEntity, TextAlignment};
pub use model::Model;

// Core types callers need alongside the components
pub use dml_core::{EntityKind, Face, MatrixBuilder, Result, Rotation, TransformError};
