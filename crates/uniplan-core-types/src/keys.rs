//! Canonical cache key formats.
//!
//! These formats are a contract with the external ETL pipeline that writes
//! the same cache; they must match byte-for-byte.

use crate::entity::EntityKind;

/// Key caching the current academic week number (decimal string value).
pub const SYSTEM_CURRENT_WEEK: &str = "system:current_week";

/// Key for a schedule document.
///
/// `identifier` is the group number or the employee's canonical url slug,
/// never a raw free-text name.
pub fn schedule_key(kind: EntityKind, identifier: &str) -> String {
    format!("schedule:{}:{}", kind.as_str(), identifier)
}
