//! Entity references
//!
//! A `(kind, id)` pair naming a domain object. Built from raw route values,
//! so both halves may be missing and the id may not be numeric.

use serde::Serialize;
use std::fmt;

/// Kind of the parent entity the view starts with before activation
pub const DEFAULT_PARENT_KIND: &str = "MEASURABLE";

/// Id of the parent entity the view starts with before activation
pub const DEFAULT_PARENT_ID: i64 = 645;

/// Entity identifier as it arrived on the route.
///
/// Integers are kept as integers; anything else is carried through as the
/// raw string so callers see exactly what was requested.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum EntityId {
    Numeric(i64),
    Raw(String),
}

impl EntityId {
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<i64>() {
            Ok(n) => EntityId::Numeric(n),
            Err(_) => EntityId::Raw(raw.to_string()),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            EntityId::Numeric(n) => Some(*n),
            EntityId::Raw(_) => None,
        }
    }
}

impl From<i64> for EntityId {
    fn from(n: i64) -> Self {
        EntityId::Numeric(n)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Numeric(n) => write!(f, "{}", n),
            EntityId::Raw(s) => f.write_str(s),
        }
    }
}

/// Reference to a domain entity by type tag and identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EntityRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
}

impl EntityRef {
    pub fn new(kind: impl Into<String>, id: impl Into<EntityId>) -> Self {
        Self {
            kind: Some(kind.into()),
            id: Some(id.into()),
        }
    }

    /// The constant parent reference every view is initialised with
    pub fn default_parent() -> Self {
        Self::new(DEFAULT_PARENT_KIND, DEFAULT_PARENT_ID)
    }

    pub fn kind_display(&self) -> &str {
        self.kind.as_deref().unwrap_or("")
    }

    pub fn id_display(&self) -> String {
        self.id.as_ref().map(|id| id.to_string()).unwrap_or_default()
    }
}
