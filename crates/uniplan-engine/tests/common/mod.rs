//! Counter-instrumented fakes for the engine's collaborator ports.

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use uniplan_core_types::{DocumentLookup, Employee};
use uniplan_engine::ports::{
    EmployeeDirectory, KeyValueCache, SystemStateStore, TemporalDocumentStore,
};
use uniplan_engine::ScheduleEngine;
use uniplan_errors::{storage_unavailable, Result};

pub const TEST_TTL: Duration = Duration::from_secs(600);

pub fn employee(id: i64, slug: &str, last_name: &str, first_name: &str) -> Employee {
    Employee {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        middle_name: None,
        degree: None,
        rank: None,
        photo_link: None,
        calendar_id: None,
        url_id: slug.to_string(),
    }
}

#[derive(Default)]
pub struct FakeDirectory {
    pub by_slug: HashMap<String, i64>,
    pub search_results: HashMap<String, Vec<Employee>>,
    pub slug_calls: AtomicUsize,
    pub search_calls: AtomicUsize,
    pub last_search_limit: Mutex<Option<i64>>,
}

impl FakeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slug(mut self, slug: &str, id: i64) -> Self {
        self.by_slug.insert(slug.to_string(), id);
        self
    }

    pub fn with_search(mut self, query: &str, results: Vec<Employee>) -> Self {
        self.search_results.insert(query.to_string(), results);
        self
    }
}

#[async_trait]
impl EmployeeDirectory for FakeDirectory {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<i64>> {
        self.slug_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.by_slug.get(slug).copied())
    }

    async fn search(&self, query: &str, limit: i64) -> Result<Vec<Employee>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_search_limit.lock().unwrap() = Some(limit);
        Ok(self.search_results.get(query).cloned().unwrap_or_default())
    }
}

#[derive(Default)]
pub struct FakeDocumentStore {
    pub documents: HashMap<DocumentLookup, Value>,
    pub fetch_calls: AtomicUsize,
    pub unavailable: bool,
}

impl FakeDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, lookup: DocumentLookup, document: Value) -> Self {
        self.documents.insert(lookup, document);
        self
    }

    pub fn unreachable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl TemporalDocumentStore for FakeDocumentStore {
    async fn fetch_current(&self, lookup: &DocumentLookup) -> Result<Option<Value>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable {
            return Err(storage_unavailable("fetch_current", "connection refused"));
        }
        Ok(self.documents.get(lookup).cloned())
    }
}

/// In-memory cache. With `broken` set, every get misses and every set is
/// dropped, simulating an unreachable cache server.
#[derive(Default)]
pub struct FakeCache {
    pub entries: Mutex<HashMap<String, String>>,
    pub broken: bool,
    pub get_calls: AtomicUsize,
    pub set_calls: AtomicUsize,
    pub keys_requested: Mutex<Vec<String>>,
    pub last_set_ttl: Mutex<Option<Duration>>,
}

impl FakeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn entry(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl KeyValueCache for FakeCache {
    async fn get(&self, key: &str) -> Option<String> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.keys_requested.lock().unwrap().push(key.to_string());
        if self.broken {
            return None;
        }
        self.entries.lock().unwrap().get(key).cloned()
    }

    async fn set_with_expiry(&self, key: &str, value: &str, ttl: Duration) -> bool {
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        if self.broken {
            return false;
        }
        *self.last_set_ttl.lock().unwrap() = Some(ttl);
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        true
    }
}

#[derive(Default)]
pub struct FakeSystemState {
    pub values: HashMap<String, String>,
    pub reads: AtomicUsize,
}

impl FakeSystemState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

#[async_trait]
impl SystemStateStore for FakeSystemState {
    async fn read_value(&self, key: &str) -> Result<Option<String>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.values.get(key).cloned())
    }
}

pub fn engine(
    documents: Arc<FakeDocumentStore>,
    directory: Arc<FakeDirectory>,
    cache: Arc<FakeCache>,
) -> ScheduleEngine {
    ScheduleEngine::new(documents, directory, cache, TEST_TTL)
}
