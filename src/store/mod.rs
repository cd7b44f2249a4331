//! Shortcode record store
//!
//! The store owns every [`Record`] for the lifetime of the process. A code
//! that is present is never removed or reassigned; only resolve mutates a
//! record, and only its statistics fields. Callers always receive copies,
//! never references into the store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::Result;

pub mod memory;

pub use memory::MemoryStore;

/// One shortened URL, keyed by its shortcode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub code: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub last_accessed_at: Option<DateTime<Utc>>,
    pub access_count: u64,
}

impl Record {
    pub fn new(code: String, url: String) -> Self {
        Self {
            code,
            url,
            created_at: Utc::now(),
            last_accessed_at: None,
            access_count: 0,
        }
    }
}

/// Read-only statistics snapshot for one shortcode.
///
/// Copied out of the stored record in one step, so the count and the
/// timestamp always belong to the same serialization of resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordStats {
    pub created_at: DateTime<Utc>,
    pub last_accessed_at: Option<DateTime<Utc>>,
    pub access_count: u64,
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert a new record.
    ///
    /// With an explicit code the insert fails with `Conflict` if the code
    /// is already taken. Without one, a free code is generated and claimed
    /// as a single logical step: two racing creates never both succeed
    /// with the same code.
    async fn create(&self, code: Option<String>, url: String) -> Result<Record>;

    /// Translate a code to its target URL, recording the access.
    ///
    /// Increments `access_count` and sets `last_accessed_at` as one
    /// observable mutation. `NotFound` if the code is absent.
    async fn resolve(&self, code: &str) -> Result<String>;

    /// Statistics snapshot for a code. Never mutates.
    async fn stats(&self, code: &str) -> Result<RecordStats>;

    /// Read-only existence probe.
    async fn exists(&self, code: &str) -> bool;

    /// Number of records currently stored.
    async fn len(&self) -> usize;

    async fn backend_name(&self) -> String;
}
