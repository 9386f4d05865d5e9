//! Seeded store and credentials shared by the HTTP suites.

use std::sync::Arc;
use std::time::{Duration, SystemTime};

use serde_json::json;
use trenthesis_backend::adapters::MemoryStore;
use trenthesis_backend::auth::mint_credential;
use trenthesis_backend::config::DomainAllowlist;
use trenthesis_backend::entities::{Professor, Topic};
use trenthesis_backend::state::app_state::AppState;
use trenthesis_backend::state::security_config::SecurityConfig;

pub const TEST_SECRET: &[u8] = b"test_secret_key_for_testing_purposes_only";

/// Identity-provider subject of professor 1.
pub const KNOWN_SUBJECT: &str = "116652383299820429186";
pub const OTHER_SUBJECT: &str = "100000000000000000002";

pub fn security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET)
}

pub fn professor(id: i64, subject: &str, first: &str, last: &str) -> Professor {
    Professor {
        id,
        subject_id: subject.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@unitn.it", first.to_lowercase(), last.to_lowercase()),
        department: Some("DISI".to_string()),
        website: None,
        further_info: json!({}),
    }
}

pub fn topic(id: i64, professor_id: i64, title: &str) -> Topic {
    Topic {
        id,
        professor_id,
        title: title.to_string(),
        description: String::new(),
        categories: vec!["systems".to_string()],
        further_info: json!({}),
    }
}

/// Professors 1 and 2, each owning one topic with the same id.
pub fn seeded_store() -> Arc<MemoryStore> {
    let store = MemoryStore::new();
    store.insert_professor(professor(1, KNOWN_SUBJECT, "Riccardo", "Capraro"));
    store.insert_professor(professor(2, OTHER_SUBJECT, "Maria", "Rossi"));
    store.insert_topic(topic(1, 1, "Distributed tracing"));
    store.insert_topic(topic(2, 2, "Formal languages"));
    Arc::new(store)
}

/// Application state over `store` with default allow-list and test secret.
pub fn state_with(store: Arc<MemoryStore>) -> AppState {
    AppState::new(store, security(), DomainAllowlist::default())
}

pub fn bearer_for(professor_id: i64) -> String {
    let credential = mint_credential(professor_id, SystemTime::now(), &security())
        .expect("minting a test credential should succeed");
    format!("Bearer {}", credential.token)
}

/// A credential issued long enough ago to have expired.
pub fn expired_bearer_for(professor_id: i64) -> String {
    let issued = SystemTime::now() - Duration::from_secs(25 * 60 * 60);
    let credential = mint_credential(professor_id, issued, &security())
        .expect("minting a test credential should succeed");
    format!("Bearer {}", credential.token)
}
