//! Raw route parameters for the dynamic section view

use serde::{Deserialize, Serialize};

use crate::entity::{EntityId, EntityRef};

/// Snapshot of the route parameters at activation time.
///
/// Values are kept exactly as received. Nothing is validated here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteParams {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "sectionId", alias = "section_id")]
    pub section_id: Option<String>,
}

impl RouteParams {
    pub fn new(
        kind: impl Into<String>,
        id: impl Into<String>,
        section_id: impl Into<String>,
    ) -> Self {
        Self {
            kind: Some(kind.into()),
            id: Some(id.into()),
            section_id: Some(section_id.into()),
        }
    }

    pub fn entity_ref(&self) -> EntityRef {
        EntityRef {
            kind: self.kind.clone(),
            id: self.id.as_deref().map(EntityId::parse),
        }
    }

    /// Key used for the rendered page cache. Debug output quotes each value,
    /// so a `/` inside a decoded segment cannot collide with another route.
    pub fn cache_key(&self) -> String {
        format!("{:?}|{:?}|{:?}", self.kind, self.id, self.section_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_ref_from_params() {
        let params = RouteParams::new("MEASURABLE", "645", "9");
        assert_eq!(params.entity_ref(), EntityRef::new("MEASURABLE", 645));
    }

    #[test]
    fn test_entity_ref_with_missing_fields() {
        let params = RouteParams {
            section_id: Some("9".to_string()),
            ..Default::default()
        };
        let entity_ref = params.entity_ref();
        assert!(entity_ref.kind.is_none());
        assert!(entity_ref.id.is_none());
    }

    #[test]
    fn test_deserialize_accepts_both_section_id_spellings() {
        let camel: RouteParams =
            serde_json::from_str(r#"{"kind":"APPLICATION","id":"12","sectionId":"3"}"#).unwrap();
        let snake: RouteParams =
            serde_json::from_str(r#"{"kind":"APPLICATION","id":"12","section_id":"3"}"#).unwrap();
        assert_eq!(camel, snake);
        assert_eq!(camel.section_id.as_deref(), Some("3"));
    }

    #[test]
    fn test_cache_key_distinguishes_missing_values() {
        let full = RouteParams::new("A", "1", "2");
        let partial = RouteParams { kind: Some("A".into()), ..Default::default() };
        assert_ne!(full.cache_key(), partial.cache_key());

        let slashed = RouteParams::new("A/1", "2", "");
        let split = RouteParams::new("A", "1/2", "");
        assert_ne!(slashed.cache_key(), split.cache_key());
    }
}
