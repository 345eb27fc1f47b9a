use std::collections::BTreeMap;

use dml_model::{
    Billboard, Brightness, Color, DisplayContent, DisplayEntity, EntityKind, Face, Model,
    ModelComponent, ModelCuboid, ModelDiamond, ModelItem, ModelLine, TextAlignment,
    TransformError,
};
use nalgebra::{Matrix4, Point3};

/// Stand-in for a host display: only keeps what a renderer would read back
struct HostDisplay {
    kind: EntityKind,
    matrix: Matrix4<f32>,
    content: Option<DisplayContent>,
    glowing: bool,
    updates: usize,
}

impl HostDisplay {
    fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            matrix: Matrix4::identity(),
            content: None,
            glowing: false,
            updates: 0,
        }
    }
}

impl DisplayEntity for HostDisplay {
    fn kind(&self) -> EntityKind {
        self.kind
    }
    fn set_transformation_matrix(&mut self, matrix: Matrix4<f32>) {
        self.matrix = matrix;
        self.updates += 1;
    }
    fn set_content(&mut self, content: DisplayContent) {
        self.content = Some(content);
    }
    fn set_glow_color(&mut self, _color: Color) {
        self.glowing = true;
    }
    fn set_brightness(&mut self, _brightness: Brightness) {}
    fn set_view_range(&mut self, _view_range: f32) {}
    fn set_billboard(&mut self, _billboard: Billboard) {}
    fn set_interpolation_delay(&mut self, _ticks: i32) {}
    fn set_interpolation_duration(&mut self, _ticks: i32) {}
}

fn centre_of(display: &HostDisplay) -> Point3<f32> {
    display.matrix.transform_point(&Point3::new(0.5, 0.5, 0.5))
}

#[test]
fn forked_cuboids_share_a_base() {
    let mut base = ModelCuboid::new();
    base.material("minecraft:gray_concrete").scale([0.2f32, 0.2, 0.2]);

    let mut left = base.clone();
    left.translate([-2.5f32, 0.0, 0.0]);
    let mut right = base.clone();
    right.translate([2.5f32, 0.0, 0.0]).glow(Color::rgb(0, 255, 0));

    let mut left_display = HostDisplay::new(EntityKind::BlockDisplay);
    let mut right_display = HostDisplay::new(EntityKind::BlockDisplay);
    left.update(&mut left_display).unwrap();
    right.update(&mut right_display).unwrap();

    // Translations happen in the scaled frame
    assert!((centre_of(&left_display) - Point3::new(-0.5, 0.0, 0.0)).norm() < 1e-5);
    assert!((centre_of(&right_display) - Point3::new(0.5, 0.0, 0.0)).norm() < 1e-5);
    assert!(!left_display.glowing);
    assert!(right_display.glowing);
    assert_eq!(base.matrix_builder().len(), 1);
}

#[test]
fn update_matrix_only_touches_the_transform() {
    let mut item = ModelItem::new();
    item.item("minecraft:compass").look_along_face(Face::West);

    let mut display = HostDisplay::new(EntityKind::ItemDisplay);
    item.update_matrix(&mut display).unwrap();
    assert_eq!(display.updates, 1);
    assert_eq!(display.content, None);
    assert_eq!(display.matrix, item.matrix().unwrap());
}

#[test]
fn model_updates_every_display() {
    let mut gem = ModelDiamond::new();
    gem.location([0.0f32, 1.0, 0.0])
        .size(0.5)
        .material("minecraft:emerald_block");
    let mut pole = ModelLine::new();
    pole.from([0.0f32, 0.0, 0.0])
        .to([0.0f32, 0.75, 0.0])
        .thickness(0.1);

    let model = Model::new().add("gem", gem).add("pole", pole);

    let mut displays: BTreeMap<String, HostDisplay> = model
        .names()
        .map(|name| (name.to_string(), HostDisplay::new(EntityKind::BlockDisplay)))
        .collect();
    model.update_all(&mut displays).unwrap();

    assert!((centre_of(&displays["gem"]) - Point3::new(0.0, 1.0, 0.0)).norm() < 1e-5);
    assert!((centre_of(&displays["pole"]) - Point3::new(0.0, 0.375, 0.0)).norm() < 1e-5);
    assert_eq!(
        displays["gem"].content,
        Some(DisplayContent::Block("minecraft:emerald_block".into()))
    );
}

#[test]
fn text_specific_setters_default_to_no_ops() {
    // HostDisplay does not override the text-only setters
    let mut text = dml_model::ModelText::new();
    text.text("hi").alignment(TextAlignment::Left);
    let mut display = HostDisplay::new(EntityKind::TextDisplay);
    text.update(&mut display).unwrap();
    assert_eq!(display.content, Some(DisplayContent::Text("hi".into())));

    let mut wrong = HostDisplay::new(EntityKind::BlockDisplay);
    assert_eq!(
        text.update(&mut wrong).unwrap_err(),
        TransformError::KindMismatch {
            expected: EntityKind::TextDisplay,
            found: EntityKind::BlockDisplay,
        }
    );
}
