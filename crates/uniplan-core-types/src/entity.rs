//! Entity addressing.
//!
//! An inbound request names a schedule entity by kind plus a loosely-typed
//! identifier. `EntityKind` is the kind tag; `DocumentLookup` is the value
//! the storage layer is actually queried with once the identifier has been
//! resolved.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of schedule-bearing entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A student group, addressed by its group number.
    Group,
    /// A staff member, addressed by numeric id, url slug, or name.
    Employee,
}

impl EntityKind {
    /// Wire form of the kind, as it appears in cache keys and URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Group => "group",
            EntityKind::Employee => "employee",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse failure for an entity kind path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEntityKind(pub String);

impl fmt::Display for UnknownEntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown entity kind: {}", self.0)
    }
}

impl std::error::Error for UnknownEntityKind {}

impl FromStr for EntityKind {
    type Err = UnknownEntityKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "group" => Ok(EntityKind::Group),
            "employee" => Ok(EntityKind::Employee),
            other => Err(UnknownEntityKind(other.to_string())),
        }
    }
}

/// The value a schedule snapshot is looked up by in persistent storage.
///
/// Distinct from the cache key: the cache is keyed by the human-facing
/// identifier (group number or employee url slug), storage by internal
/// identity: group rows carry the group name, employee rows the numeric
/// primary key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DocumentLookup {
    /// Group snapshots are stored under the group name/number string.
    Group(String),
    /// Employee snapshots are stored under the numeric employee id.
    Employee(i64),
}

impl DocumentLookup {
    /// The entity kind this lookup addresses.
    pub fn kind(&self) -> EntityKind {
        match self {
            DocumentLookup::Group(_) => EntityKind::Group,
            DocumentLookup::Employee(_) => EntityKind::Employee,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_str() {
        for kind in [EntityKind::Group, EntityKind::Employee] {
            assert_eq!(kind.as_str().parse::<EntityKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = "auditory".parse::<EntityKind>().unwrap_err();
        assert_eq!(err, UnknownEntityKind("auditory".to_string()));
    }

    #[test]
    fn test_kind_serde_uses_lowercase() {
        assert_eq!(
            serde_json::to_string(&EntityKind::Employee).unwrap(),
            "\"employee\""
        );
        let parsed: EntityKind = serde_json::from_str("\"group\"").unwrap();
        assert_eq!(parsed, EntityKind::Group);
    }

    #[test]
    fn test_lookup_reports_kind() {
        assert_eq!(
            DocumentLookup::Group("221703".into()).kind(),
            EntityKind::Group
        );
        assert_eq!(DocumentLookup::Employee(501).kind(), EntityKind::Employee);
    }
}
