//! Dynamic section descriptors
//!
//! Display/navigation configuration for the sections an entity page can
//! embed. Descriptors are owned by the [`SectionRegistry`](crate::SectionRegistry)
//! and only ever handed out behind an `Arc`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric identifier of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(pub i64);

impl FromStr for SectionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(SectionId)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDescriptor {
    pub id: SectionId,
    #[serde(default)]
    pub component_id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Entity kinds this section can be shown for; empty means all kinds
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applicable_kinds: Vec<String>,
}

impl SectionDescriptor {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: SectionId(id),
            component_id: String::new(),
            name: name.into(),
            icon: String::new(),
            description: None,
            applicable_kinds: Vec::new(),
        }
    }

    pub fn with_component(mut self, component_id: impl Into<String>, icon: impl Into<String>) -> Self {
        self.component_id = component_id.into();
        self.icon = icon.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn for_kinds(mut self, kinds: &[&str]) -> Self {
        self.applicable_kinds = kinds.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn applies_to(&self, kind: &str) -> bool {
        self.applicable_kinds.is_empty() || self.applicable_kinds.iter().any(|k| k == kind)
    }
}
