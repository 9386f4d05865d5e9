use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::assign;
use crate::errors::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: i64,
    pub professor_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub further_info: Value,
}

/// Partial update of a topic.
///
/// `id` and `professor_id` are checked against the path and the stored owner;
/// a topic can never be reassigned through an update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopicPatch {
    pub id: Option<i64>,
    pub professor_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub categories: Option<Vec<String>>,
    pub further_info: Option<Value>,
}

impl TopicPatch {
    /// Apply the patch in place; returns `true` if any stored field changed.
    pub fn apply(self, topic: &mut Topic) -> bool {
        let mut modified = false;
        modified |= assign(&mut topic.title, self.title);
        modified |= assign(&mut topic.description, self.description);
        modified |= assign(&mut topic.categories, self.categories);
        modified |= assign(&mut topic.further_info, self.further_info);
        modified
    }
}

/// A topic as submitted for creation; the store assigns the id.
///
/// `professor_id` defaults to the authenticated professor when omitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTopic {
    pub professor_id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub further_info: Value,
}

impl NewTopic {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::validation("Topic title must not be empty"));
        }
        Ok(())
    }

    /// Materialize the topic under `id` for `owner`.
    pub fn into_topic(self, id: i64, owner: i64) -> Topic {
        Topic {
            id,
            professor_id: owner,
            title: self.title,
            description: self.description,
            categories: self.categories,
            further_info: self.further_info,
        }
    }
}
