/// Named groups of components updated together
use std::collections::BTreeMap;

use dml_core::{Result, TransformError};
use log::debug;
use nalgebra::Matrix4;

use crate::component::ModelComponent;
use crate::entity::{expect_kind, DisplayEntity};

/// A model made of named components, one display per component.
///
/// Components are kept in name order so iterating a model, and therefore
/// updating its displays, is deterministic.
#[derive(Default)]
pub struct Model {
    components: BTreeMap<String, Box<dyn ModelComponent>>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a component, replacing any existing one with the same name
    pub fn add(mut self, name: impl Into<String>, component: impl ModelComponent + 'static) -> Self {
        self.insert(name, component);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, component: impl ModelComponent + 'static) {
        let name = name.into();
        if self.components.insert(name.clone(), Box::new(component)).is_some() {
            debug!("replaced model component '{}'", name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&dyn ModelComponent> {
        self.components.get(name).map(|c| c.as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Matrix of every component, keyed by name
    pub fn matrices(&self) -> Result<BTreeMap<String, Matrix4<f32>>> {
        self.components
            .iter()
            .map(|(name, component)| Ok((name.clone(), component.matrix()?)))
            .collect()
    }

    /// Update the display backing the component called `name`
    pub fn update(&self, name: &str, entity: &mut dyn DisplayEntity) -> Result<()> {
        let component = self
            .components
            .get(name)
            .ok_or_else(|| TransformError::UnknownComponent(name.to_string()))?;
        component.update(entity)
    }

    /// Update every component's display; `displays` must hold one entity per
    /// component name. Entities without a matching component are left alone.
    ///
    /// Every display is resolved and kind-checked, and every matrix computed,
    /// before any entity is touched, so a failure leaves all displays as
    /// they were.
    pub fn update_all<E: DisplayEntity>(&self, displays: &mut BTreeMap<String, E>) -> Result<()> {
        for (name, component) in &self.components {
            let entity = displays
                .get(name)
                .ok_or_else(|| TransformError::MissingDisplay(name.clone()))?;
            expect_kind(entity, component.kind())?;
            component.matrix()?;
        }
        for (name, component) in &self.components {
            if let Some(entity) = displays.get_mut(name) {
                component.update(entity)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{ModelCuboid, ModelLine, ModelText};
    use crate::entity::testing::RecordingEntity;
    use dml_core::EntityKind;

    fn sample() -> Model {
        let mut frame = ModelCuboid::new();
        frame.material("minecraft:iron_block").scale([1.0f32, 0.1, 1.0]);
        let mut label = ModelText::new();
        label.text("Furnace").translate([0.0f32, 0.6, 0.0]);
        let mut beam = ModelLine::new();
        beam.from([0.0f32, 0.0, 0.0]).to([0.0f32, 1.0, 0.0]).thickness(0.05);

        Model::new()
            .add("frame", frame)
            .add("label", label)
            .add("beam", beam)
    }

    #[test]
    fn test_names_are_sorted() {
        let model = sample();
        assert_eq!(model.len(), 3);
        assert_eq!(model.names().collect::<Vec<_>>(), ["beam", "frame", "label"]);
        assert_eq!(model.get("label").unwrap().kind(), EntityKind::TextDisplay);
        assert!(model.get("missing").is_none());
    }

    #[test]
    fn test_matrices() {
        let model = sample();
        let matrices = model.matrices().unwrap();
        assert_eq!(matrices.len(), 3);
        assert_eq!(
            matrices["frame"],
            model.get("frame").unwrap().matrix().unwrap()
        );
    }

    #[test]
    fn test_add_replaces() {
        let model = sample().add("frame", ModelText::new());
        assert_eq!(model.len(), 3);
        assert_eq!(model.get("frame").unwrap().kind(), EntityKind::TextDisplay);
    }

    #[test]
    fn test_update_by_name() {
        let model = sample();
        let mut entity = RecordingEntity::new(EntityKind::TextDisplay);
        model.update("label", &mut entity).unwrap();
        assert!(entity.matrix.is_some());

        let err = model.update("nothing", &mut entity).unwrap_err();
        assert_eq!(err, TransformError::UnknownComponent("nothing".into()));
    }

    #[test]
    fn test_update_all() {
        let model = sample();
        let mut displays = BTreeMap::new();
        displays.insert("beam".to_string(), RecordingEntity::new(EntityKind::BlockDisplay));
        displays.insert("frame".to_string(), RecordingEntity::new(EntityKind::BlockDisplay));
        displays.insert("label".to_string(), RecordingEntity::new(EntityKind::TextDisplay));
        model.update_all(&mut displays).unwrap();
        assert!(displays.values().all(|d| d.matrix.is_some()));

        displays.remove("label");
        assert_eq!(
            model.update_all(&mut displays).unwrap_err(),
            TransformError::MissingDisplay("label".into())
        );
    }

    #[test]
    fn test_update_all_reports_kind_mismatch() {
        let model = sample();
        let mut displays = BTreeMap::new();
        for name in model.names() {
            displays.insert(name.to_string(), RecordingEntity::new(EntityKind::ItemDisplay));
        }
        assert!(matches!(
            model.update_all(&mut displays),
            Err(TransformError::KindMismatch { .. })
        ));
    }

    #[test]
    fn test_failed_update_all_touches_nothing() {
        let model = sample();
        let mut displays = BTreeMap::new();
        for name in model.names() {
            // "label" is text, so only it mismatches, and it sorts last
            displays.insert(name.to_string(), RecordingEntity::new(EntityKind::BlockDisplay));
        }
        assert_eq!(
            model.update_all(&mut displays).unwrap_err(),
            TransformError::KindMismatch {
                expected: EntityKind::TextDisplay,
                found: EntityKind::BlockDisplay,
            }
        );
        assert!(displays.values().all(|d| d.matrix.is_none() && d.content.is_none()));
    }

    #[test]
    fn test_missing_display_touches_nothing() {
        let model = sample();
        let mut displays = BTreeMap::new();
        displays.insert("beam".to_string(), RecordingEntity::new(EntityKind::BlockDisplay));
        displays.insert("frame".to_string(), RecordingEntity::new(EntityKind::BlockDisplay));
        assert!(model.update_all(&mut displays).is_err());
        assert!(displays.values().all(|d| d.matrix.is_none()));
    }
}
