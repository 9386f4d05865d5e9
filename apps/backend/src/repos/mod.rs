//! Repository traits for the document store.
//!
//! The store itself is an external collaborator; the backend only sees it
//! through these traits. `ProfessorDirectory` is the read-only slice the
//! auth core consumes, `ThesisStore` adds what the route handlers need.

use async_trait::async_trait;

use crate::entities::{NewTopic, Professor, ProfessorPatch, Topic, TopicPatch, Updated};
use crate::errors::DomainError;

#[async_trait]
pub trait ProfessorDirectory: Send + Sync {
    async fn find_professor_by_subject(
        &self,
        subject_id: &str,
    ) -> Result<Option<Professor>, DomainError>;

    async fn find_professor_by_id(&self, id: i64) -> Result<Option<Professor>, DomainError>;
}

#[async_trait]
pub trait ThesisStore: ProfessorDirectory {
    /// Reachability check used by the health endpoint.
    async fn ping(&self) -> Result<(), DomainError>;

    /// Returns `None` when no professor has this id.
    async fn update_professor(
        &self,
        id: i64,
        patch: ProfessorPatch,
    ) -> Result<Option<Updated<Professor>>, DomainError>;

    /// Remove a professor together with the topics they own. Returns `false`
    /// when no professor has this id.
    async fn delete_professor(&self, id: i64) -> Result<bool, DomainError>;

    async fn find_topic_by_id(&self, id: i64) -> Result<Option<Topic>, DomainError>;

    /// Store a new topic for `owner` under a fresh id.
    async fn create_topic(&self, owner: i64, topic: NewTopic) -> Result<Topic, DomainError>;

    /// Returns `None` when no topic has this id.
    async fn update_topic(
        &self,
        id: i64,
        patch: TopicPatch,
    ) -> Result<Option<Updated<Topic>>, DomainError>;

    /// Returns `false` when no topic has this id.
    async fn delete_topic(&self, id: i64) -> Result<bool, DomainError>;
}
