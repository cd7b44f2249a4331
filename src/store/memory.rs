use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use crate::errors::{MinilinkError, Result};
use crate::generator::CodeGenerator;
use crate::store::{Record, RecordStats, RecordStore};

/// In-memory record store backed by a concurrent map.
///
/// DashMap's sharded locks give per-key atomicity: `entry` for the
/// create claim, `get_mut` for resolve's read-modify-write, `get` for
/// stats snapshots. No operation blocks beyond shard contention.
pub struct MemoryStore {
    records: DashMap<String, Record>,
    generator: CodeGenerator,
}

impl MemoryStore {
    pub fn new(generator: CodeGenerator) -> Self {
        Self {
            records: DashMap::new(),
            generator,
        }
    }

    /// Claim `code` if it is free, inserting a fresh record.
    ///
    /// The vacant-entry insert is the single step that decides ownership
    /// of the code between racing creates.
    fn try_claim(&self, code: String, url: &str) -> Option<Record> {
        match self.records.entry(code) {
            Entry::Occupied(_) => None,
            Entry::Vacant(entry) => {
                let record = Record::new(entry.key().clone(), url.to_string());
                entry.insert(record.clone());
                Some(record)
            }
        }
    }

    fn create_with_code(&self, code: String, url: String) -> Result<Record> {
        self.try_claim(code.clone(), &url).ok_or_else(|| {
            MinilinkError::conflict(format!("Shortcode '{}' already exists", code))
        })
    }

    fn create_generated(&self, url: String) -> Result<Record> {
        // The generator probe pre-filters taken codes; the entry claim
        // decides races it cannot see. A lost claim just draws again.
        for _ in 0..self.generator.max_attempts() {
            let candidate = self
                .generator
                .generate(|code| self.records.contains_key(code))?;

            match self.try_claim(candidate.clone(), &url) {
                Some(record) => return Ok(record),
                None => {
                    debug!("Generated code '{}' claimed concurrently, retrying", candidate);
                    continue;
                }
            }
        }

        Err(MinilinkError::keyspace_exhausted(format!(
            "No claimable code of length {} after {} attempts",
            self.generator.length(),
            self.generator.max_attempts()
        )))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(CodeGenerator::default())
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn create(&self, code: Option<String>, url: String) -> Result<Record> {
        match code.filter(|c| !c.is_empty()) {
            Some(code) => self.create_with_code(code, url),
            None => self.create_generated(url),
        }
    }

    async fn resolve(&self, code: &str) -> Result<String> {
        match self.records.get_mut(code) {
            Some(mut record) => {
                // Count and timestamp move together under the shard
                // write lock; stats readers never see one without the other.
                record.access_count += 1;
                record.last_accessed_at = Some(Utc::now());
                Ok(record.url.clone())
            }
            None => Err(MinilinkError::not_found(format!(
                "Shortcode '{}' not found",
                code
            ))),
        }
    }

    async fn stats(&self, code: &str) -> Result<RecordStats> {
        match self.records.get(code) {
            Some(record) => Ok(RecordStats {
                created_at: record.created_at,
                last_accessed_at: record.last_accessed_at,
                access_count: record.access_count,
            }),
            None => Err(MinilinkError::not_found(format!(
                "Shortcode '{}' not found",
                code
            ))),
        }
    }

    async fn exists(&self, code: &str) -> bool {
        self.records.contains_key(code)
    }

    async fn len(&self) -> usize {
        self.records.len()
    }

    async fn backend_name(&self) -> String {
        "memory".to_string()
    }
}
