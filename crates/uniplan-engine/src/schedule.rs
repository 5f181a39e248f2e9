//! Cache-aside schedule retrieval.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use uniplan_core_types::{keys, DocumentLookup, EntityKind};
use uniplan_errors::{self as errors, Result};

use crate::ports::{EmployeeDirectory, KeyValueCache, TemporalDocumentStore};
use crate::resolver::{self, Resolution};

/// Canonical retrieval target for one entity reference.
///
/// The cache key is derived before anything is known about storage
/// contents: for a group it is the group number verbatim, for an employee
/// the canonical slug once resolved, or the raw (trimmed) input when
/// resolution produced nothing. This is what keeps the cache coherent
/// across aliases: a numeric id, a slug, and a uniquely-matching name
/// fragment all land on the same entry.
struct ResolvedTarget {
    cache_key: String,
    lookup: Option<DocumentLookup>,
}

/// Schedule resolution and retrieval engine.
///
/// Within one retrieval the steps are strictly sequential: target
/// construction (which for employees performs identifier resolution),
/// cache read, snapshot fetch, best-effort cache write. Concurrent
/// retrievals for the same entity may race through the miss path
/// redundantly; cache writes are idempotent overwrites, so no mutual
/// exclusion is needed.
pub struct ScheduleEngine {
    documents: Arc<dyn TemporalDocumentStore>,
    directory: Arc<dyn EmployeeDirectory>,
    cache: Arc<dyn KeyValueCache>,
    cache_ttl: Duration,
}

impl ScheduleEngine {
    pub fn new(
        documents: Arc<dyn TemporalDocumentStore>,
        directory: Arc<dyn EmployeeDirectory>,
        cache: Arc<dyn KeyValueCache>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            documents,
            directory,
            cache,
            cache_ttl,
        }
    }

    /// Retrieve the current schedule document for an entity reference.
    ///
    /// # Errors
    ///
    /// - `ErrorKind::NotFound`: the identifier resolves to nothing, or no
    ///   current snapshot exists.
    /// - `ErrorKind::Ambiguous`: a free-text identifier matched several
    ///   people; carries the candidate list.
    /// - `ErrorKind::Unavailable`: persistent storage could not be
    ///   reached. Cache faults never surface here.
    pub async fn get_schedule(&self, kind: EntityKind, identifier: &str) -> Result<Value> {
        let target = self.resolve_target(kind, identifier).await?;

        if let Some(cached) = self.cache.get(&target.cache_key).await {
            match serde_json::from_str::<Value>(&cached) {
                Ok(document) => {
                    tracing::debug!(key = %target.cache_key, "schedule cache hit");
                    return Ok(document);
                }
                Err(err) => {
                    tracing::warn!(key = %target.cache_key, %err, "malformed cached schedule, treating as miss");
                }
            }
        }

        if let Some(lookup) = &target.lookup {
            if let Some(document) = self.documents.fetch_current(lookup).await? {
                self.write_back(&target.cache_key, &document).await;
                return Ok(document);
            }
        }

        Err(errors::schedule_not_found(kind.as_str(), identifier))
    }

    /// Compute cache key and storage lookup value for the reference.
    ///
    /// Group resolution is the identity function; employees go through the
    /// resolution ladder. An ambiguous match is the only multi-valued
    /// outcome and propagates as its own failure kind here, before any
    /// cache or snapshot traffic for the request.
    async fn resolve_target(&self, kind: EntityKind, identifier: &str) -> Result<ResolvedTarget> {
        match kind {
            EntityKind::Group => Ok(ResolvedTarget {
                cache_key: keys::schedule_key(kind, identifier),
                lookup: Some(DocumentLookup::Group(identifier.to_string())),
            }),
            EntityKind::Employee => {
                match resolver::resolve_employee(self.directory.as_ref(), identifier).await? {
                    Resolution::Resolved { employee_id, slug } => Ok(ResolvedTarget {
                        cache_key: keys::schedule_key(kind, &slug),
                        lookup: Some(DocumentLookup::Employee(employee_id)),
                    }),
                    Resolution::Ambiguous(candidates) => {
                        Err(errors::ambiguous_identifier(identifier, candidates))
                    }
                    // Keep the raw input as the key: a previously cached
                    // entry can still satisfy the request.
                    Resolution::Unresolved => Ok(ResolvedTarget {
                        cache_key: keys::schedule_key(kind, identifier.trim()),
                        lookup: None,
                    }),
                }
            }
        }
    }

    async fn write_back(&self, key: &str, document: &Value) {
        match serde_json::to_string(document) {
            Ok(serialized) => {
                if !self
                    .cache
                    .set_with_expiry(key, &serialized, self.cache_ttl)
                    .await
                {
                    tracing::warn!(key, "schedule cache write dropped");
                }
            }
            Err(err) => {
                tracing::warn!(key, %err, "schedule document not serializable for cache");
            }
        }
    }
}
