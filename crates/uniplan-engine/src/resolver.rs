//! Employee identifier resolution.
//!
//! Resolves a raw identifier string to a numeric employee id plus the
//! canonical url slug, in strict order: all-digit input is taken as the
//! numeric primary key directly (existence is checked later by the
//! snapshot fetch coming back empty), then an exact slug lookup, then a
//! fuzzy name search with a small candidate cap. The numeric and
//! exact-slug paths are O(1) lookups that bypass the ranked search, so a
//! direct reference never pays the disambiguation cost.

use crate::ports::EmployeeDirectory;
use uniplan_core_types::Employee;
use uniplan_errors::Result;

/// Candidate cap handed to the fuzzy search.
pub const FUZZY_CANDIDATE_LIMIT: i64 = 5;

/// Outcome of employee identifier resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Exactly one entity matched.
    Resolved {
        /// Numeric primary key used for the storage fetch.
        employee_id: i64,
        /// Canonical slug used for the cache key.
        slug: String,
    },
    /// More than one entity matched; the caller must disambiguate.
    /// Carries at most [`FUZZY_CANDIDATE_LIMIT`] candidates.
    Ambiguous(Vec<Employee>),
    /// Nothing matched at all.
    Unresolved,
}

/// Resolve a raw employee identifier against the directory.
pub async fn resolve_employee(
    directory: &dyn EmployeeDirectory,
    raw_identifier: &str,
) -> Result<Resolution> {
    let normalized = raw_identifier.trim();

    if !normalized.is_empty() && normalized.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(employee_id) = normalized.parse::<i64>() {
            return Ok(Resolution::Resolved {
                employee_id,
                slug: normalized.to_string(),
            });
        }
    }

    if let Some(employee_id) = directory.find_by_slug(normalized).await? {
        return Ok(Resolution::Resolved {
            employee_id,
            slug: normalized.to_string(),
        });
    }

    let mut matches = directory.search(normalized, FUZZY_CANDIDATE_LIMIT).await?;
    match matches.len() {
        0 => Ok(Resolution::Unresolved),
        1 => {
            let found = matches.remove(0);
            let slug = if found.url_id.is_empty() {
                found.id.to_string()
            } else {
                found.url_id.clone()
            };
            Ok(Resolution::Resolved {
                employee_id: found.id,
                slug,
            })
        }
        _ => Ok(Resolution::Ambiguous(matches)),
    }
}
