//! View model for the dynamic section test page
//!
//! Handed to the askama page template and to the JSON endpoint as-is.

use serde::Serialize;
use std::sync::Arc;

use crate::entity::EntityRef;
use crate::section::SectionDescriptor;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub parent_entity_ref: EntityRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_ref: Option<EntityRef>,
    /// Absent when the requested section id is not registered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<Arc<SectionDescriptor>>,
}

impl ViewModel {
    /// State before activation: only the constant parent reference is set
    pub fn initial() -> Self {
        Self {
            parent_entity_ref: EntityRef::default_parent(),
            entity_ref: None,
            section: None,
        }
    }

    pub fn has_section(&self) -> bool {
        self.section.is_some()
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let vm = ViewModel::initial();
        assert_eq!(vm.parent_entity_ref, EntityRef::new("MEASURABLE", 645));
        assert!(vm.entity_ref.is_none());
        assert!(!vm.has_section());
    }

    #[test]
    fn test_serialized_shape() {
        let vm = ViewModel {
            entity_ref: Some(EntityRef::new("MEASURABLE", 645)),
            section: Some(Arc::new(SectionDescriptor::new(9, "Detail"))),
            ..ViewModel::initial()
        };
        let json = serde_json::to_value(&vm).unwrap();
        assert_eq!(json["parentEntityRef"]["id"], 645);
        assert_eq!(json["entityRef"]["kind"], "MEASURABLE");
        assert_eq!(json["section"]["name"], "Detail");
    }

    #[test]
    fn test_missing_section_is_omitted() {
        let vm = ViewModel {
            entity_ref: Some(EntityRef::new("MEASURABLE", 645)),
            ..ViewModel::initial()
        };
        let json = serde_json::to_value(&vm).unwrap();
        assert!(json.get("section").is_none());
    }
}
