//! In-process `ThesisStore` used by the binary and the test suites.
//!
//! Records live behind a `parking_lot::RwLock`; no lock is held across an
//! await point. The store can be switched offline to reproduce an
//! unreachable document store.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::Deserialize;
use tracing::debug;

use crate::entities::{NewTopic, Professor, ProfessorPatch, Topic, TopicPatch, Updated};
use crate::errors::{DomainError, InfraErrorKind};
use crate::repos::{ProfessorDirectory, ThesisStore};

/// Initial contents, as read from a seed file.
#[derive(Debug, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub professors: Vec<Professor>,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

impl Seed {
    pub fn from_file(path: &Path) -> Result<Self, DomainError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            DomainError::infra(
                InfraErrorKind::Other("seed".to_string()),
                format!("failed to read {}: {e}", path.display()),
            )
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("failed to parse {}: {e}", path.display()),
            )
        })
    }
}

#[derive(Default)]
struct Records {
    professors: BTreeMap<i64, Professor>,
    topics: BTreeMap<i64, Topic>,
}

pub struct MemoryStore {
    records: RwLock<Records>,
    online: AtomicBool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Records::default()),
            online: AtomicBool::new(true),
        }
    }

    pub fn from_seed(seed: Seed) -> Self {
        let store = Self::new();
        for professor in seed.professors {
            store.insert_professor(professor);
        }
        for topic in seed.topics {
            store.insert_topic(topic);
        }
        store
    }

    pub fn insert_professor(&self, professor: Professor) {
        self.records.write().professors.insert(professor.id, professor);
    }

    pub fn insert_topic(&self, topic: Topic) {
        self.records.write().topics.insert(topic.id, topic);
    }

    /// Simulate the store going away (`false`) or coming back (`true`).
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), DomainError> {
        if self.online.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(DomainError::infra(
                InfraErrorKind::DbUnavailable,
                "document store is not reachable",
            ))
        }
    }
}

#[async_trait]
impl ProfessorDirectory for MemoryStore {
    async fn find_professor_by_subject(
        &self,
        subject_id: &str,
    ) -> Result<Option<Professor>, DomainError> {
        self.ensure_online()?;
        let records = self.records.read();
        Ok(records
            .professors
            .values()
            .find(|p| p.subject_id == subject_id)
            .cloned())
    }

    async fn find_professor_by_id(&self, id: i64) -> Result<Option<Professor>, DomainError> {
        self.ensure_online()?;
        Ok(self.records.read().professors.get(&id).cloned())
    }
}

#[async_trait]
impl ThesisStore for MemoryStore {
    async fn ping(&self) -> Result<(), DomainError> {
        self.ensure_online()
    }

    async fn update_professor(
        &self,
        id: i64,
        patch: ProfessorPatch,
    ) -> Result<Option<Updated<Professor>>, DomainError> {
        self.ensure_online()?;
        let mut records = self.records.write();
        let Some(professor) = records.professors.get_mut(&id) else {
            return Ok(None);
        };
        let modified = patch.apply(professor);
        debug!(professor_id = id, modified, "Professor update applied");
        Ok(Some(Updated {
            record: professor.clone(),
            modified,
        }))
    }

    async fn delete_professor(&self, id: i64) -> Result<bool, DomainError> {
        self.ensure_online()?;
        let mut records = self.records.write();
        if records.professors.remove(&id).is_none() {
            return Ok(false);
        }
        records.topics.retain(|_, topic| topic.professor_id != id);
        debug!(professor_id = id, "Professor removed with owned topics");
        Ok(true)
    }

    async fn find_topic_by_id(&self, id: i64) -> Result<Option<Topic>, DomainError> {
        self.ensure_online()?;
        Ok(self.records.read().topics.get(&id).cloned())
    }

    async fn create_topic(&self, owner: i64, topic: NewTopic) -> Result<Topic, DomainError> {
        self.ensure_online()?;
        let mut records = self.records.write();
        let id = records
            .topics
            .last_key_value()
            .map_or(1, |(last, _)| last.saturating_add(1));
        let topic = topic.into_topic(id, owner);
        records.topics.insert(id, topic.clone());
        debug!(topic_id = id, professor_id = owner, "Topic created");
        Ok(topic)
    }

    async fn update_topic(
        &self,
        id: i64,
        patch: TopicPatch,
    ) -> Result<Option<Updated<Topic>>, DomainError> {
        self.ensure_online()?;
        let mut records = self.records.write();
        let Some(topic) = records.topics.get_mut(&id) else {
            return Ok(None);
        };
        let modified = patch.apply(topic);
        debug!(topic_id = id, modified, "Topic update applied");
        Ok(Some(Updated {
            record: topic.clone(),
            modified,
        }))
    }

    async fn delete_topic(&self, id: i64) -> Result<bool, DomainError> {
        self.ensure_online()?;
        Ok(self.records.write().topics.remove(&id).is_some())
    }
}
