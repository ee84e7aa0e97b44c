//! Section Registry - immutable lookup table of dynamic sections
//!
//! Entries keep their declaration order. Lookups go through an FxHashMap
//! from id to position, which holds the first position seen for each id so
//! results match a front-to-back scan.

use rustc_hash::FxHashMap;
use std::path::Path;
use std::sync::Arc;

use crate::error::RegistryError;
use crate::section::{SectionDescriptor, SectionId};

#[derive(Debug, Default)]
pub struct SectionRegistry {
    entries: Vec<Arc<SectionDescriptor>>,
    index: FxHashMap<SectionId, usize>,
}

impl SectionRegistry {
    pub fn new(sections: Vec<SectionDescriptor>) -> Self {
        let entries: Vec<Arc<SectionDescriptor>> = sections.into_iter().map(Arc::new).collect();

        let mut index = FxHashMap::default();
        for (pos, section) in entries.iter().enumerate() {
            if index.contains_key(&section.id) {
                tracing::warn!(
                    "Duplicate section id {} ({}), keeping the earlier entry",
                    section.id,
                    section.name
                );
                continue;
            }
            index.insert(section.id, pos);
        }

        Self { entries, index }
    }

    /// Parse a JSON array of section descriptors
    pub fn from_json_str(json: &str) -> Result<Self, RegistryError> {
        let sections: Vec<SectionDescriptor> = serde_json::from_str(json)?;
        Ok(Self::new(sections))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_json_str(&contents)?;
        tracing::info!("Loaded {} sections from {}", registry.len(), path.display());
        Ok(registry)
    }

    /// The application's built-in section catalog
    pub fn builtin() -> Self {
        Self::new(builtin_sections())
    }

    pub fn find(&self, id: &SectionId) -> Option<&Arc<SectionDescriptor>> {
        self.index.get(id).map(|&pos| &self.entries[pos])
    }

    /// Look up a section by its raw route value. Non-numeric values never match.
    pub fn get(&self, raw_id: &str) -> Option<&Arc<SectionDescriptor>> {
        raw_id.parse::<SectionId>().ok().and_then(|id| self.find(&id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<SectionDescriptor>> {
        self.entries.iter()
    }

    pub fn applicable_to<'a>(
        &'a self,
        kind: &'a str,
    ) -> impl Iterator<Item = &'a Arc<SectionDescriptor>> + 'a {
        self.entries.iter().filter(move |s| s.applies_to(kind))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Built-in catalog
// ============================================================================

const ALL_KINDS: &[&str] = &[];
const APP_ONLY: &[&str] = &["APPLICATION"];
const PORTFOLIO_KINDS: &[&str] = &[
    "APPLICATION",
    "MEASURABLE",
    "ORG_UNIT",
    "PERSON",
    "APP_GROUP",
    "DATA_TYPE",
];

// (id, component id, name, icon, description, applicable kinds)
const BUILTIN: &[(i64, &str, &str, &str, &str, &[&str])] = &[
    (1, "bookmarks-section", "Bookmarks", "rocket", "Links to external documentation and tools", ALL_KINDS),
    (2, "apps-section", "Applications", "desktop", "Applications associated with this entity", PORTFOLIO_KINDS),
    (3, "entity-involvement-section", "People", "users", "People involved with this entity", ALL_KINDS),
    (4, "change-initiative-section", "Change Initiatives", "paper-plane-o", "Change initiatives affecting this entity", PORTFOLIO_KINDS),
    (5, "data-flow-section", "Data Flows", "random", "Logical flows into and out of this entity", PORTFOLIO_KINDS),
    (6, "entity-named-notes-section", "Notes", "sticky-note-o", "Named notes attached to this entity", ALL_KINDS),
    (7, "measurable-rating-app-section", "Viewpoint Ratings", "puzzle-piece", "Ratings against viewpoint measurables", APP_ONLY),
    (8, "entity-costs-section", "Costs", "money", "Cost figures by kind and year", APP_ONLY),
    (9, "assessment-rating-section", "Assessment Ratings", "puzzle-piece", "Assessment ratings recorded for this entity", ALL_KINDS),
    (10, "entity-survey-section", "Surveys", "wpforms", "Survey instances issued against this entity", ALL_KINDS),
    (11, "flow-diagrams-section", "Flow Diagrams", "picture-o", "Diagrams that include this entity", ALL_KINDS),
    (12, "scenario-section", "Roadmaps and Scenarios", "road", "Scenarios referencing this entity", &["MEASURABLE"]),
    (13, "planned-decommission-section", "Planned Decommissions", "power-off", "Planned retirement of ratings", &["MEASURABLE", "APPLICATION"]),
    (14, "entity-changelog-section", "Changes", "history", "Recent change log entries", ALL_KINDS),
];

fn builtin_sections() -> Vec<SectionDescriptor> {
    BUILTIN
        .iter()
        .map(|&(id, component_id, name, icon, description, kinds)| {
            SectionDescriptor::new(id, name)
                .with_component(component_id, icon)
                .with_description(description)
                .for_kinds(kinds)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overview_detail() -> SectionRegistry {
        SectionRegistry::new(vec![
            SectionDescriptor::new(7, "Overview"),
            SectionDescriptor::new(9, "Detail"),
        ])
    }

    #[test]
    fn test_find_existing() {
        let registry = overview_detail();
        let found = registry.find(&SectionId(9)).unwrap();
        assert_eq!(found.name, "Detail");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_find_missing() {
        let registry = overview_detail();
        assert!(registry.find(&SectionId(42)).is_none());
        assert!(registry.get("42").is_none());
        assert!(registry.get("detail").is_none());
    }

    #[test]
    fn test_first_duplicate_wins() {
        let registry = SectionRegistry::new(vec![
            SectionDescriptor::new(5, "First"),
            SectionDescriptor::new(6, "Other"),
            SectionDescriptor::new(5, "Second"),
        ]);
        assert_eq!(registry.get("5").unwrap().name, "First");
        // Duplicates stay in the ordered list
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_from_json_str() {
        let registry = SectionRegistry::from_json_str(
            r#"[{"id": 7, "name": "Overview"}, {"id": 9, "name": "Detail", "icon": "list"}]"#,
        )
        .unwrap();
        assert_eq!(registry.get("9").unwrap().icon, "list");
    }

    #[test]
    fn test_from_json_str_rejects_bad_input() {
        let err = SectionRegistry::from_json_str(r#"{"id": 7}"#).unwrap_err();
        assert!(matches!(err, RegistryError::Parse(_)));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sections.json");
        std::fs::write(&path, r#"[{"id": 1, "name": "Only"}]"#).unwrap();

        let registry = SectionRegistry::from_path(&path).unwrap();
        assert_eq!(registry.len(), 1);

        let missing = SectionRegistry::from_path(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(missing, RegistryError::Io { .. }));
    }

    #[test]
    fn test_builtin_catalog_has_unique_ids() {
        let registry = SectionRegistry::builtin();
        assert_eq!(registry.len(), BUILTIN.len());
        for section in registry.iter() {
            assert!(Arc::ptr_eq(registry.find(&section.id).unwrap(), section));
        }
    }

    #[test]
    fn test_applicable_to_keeps_order() {
        let registry = SectionRegistry::builtin();
        let ids: Vec<i64> = registry.applicable_to("MEASURABLE").map(|s| s.id.0).collect();
        assert!(ids.contains(&12));
        assert!(!ids.contains(&8));
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}
