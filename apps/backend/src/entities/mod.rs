//! Records owned by the document store, as seen by the backend.

pub mod professors;
pub mod topics;

pub use professors::{Professor, ProfessorPatch};
pub use topics::{NewTopic, Topic, TopicPatch};

use serde::Serialize;

/// Result of applying a patch: the stored record and whether any field changed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Updated<T> {
    #[serde(flatten)]
    pub record: T,
    pub modified: bool,
}

/// Overwrite `slot` with `incoming` when supplied, reporting whether the value changed.
pub(crate) fn assign<T: PartialEq>(slot: &mut T, incoming: Option<T>) -> bool {
    match incoming {
        Some(value) if *slot != value => {
            *slot = value;
            true
        }
        _ => false,
    }
}
