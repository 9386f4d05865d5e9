use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::assign;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Professor {
    pub id: i64,
    /// Identity-provider subject id; never exposed over the API.
    #[serde(skip_serializing, alias = "google_id")]
    pub subject_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub further_info: Value,
}

/// Partial update of a professor as sent by the front end.
///
/// `id` is only used to detect a body that disagrees with the URL path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfessorPatch {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub website: Option<String>,
    pub further_info: Option<Value>,
}

impl ProfessorPatch {
    /// Apply the patch in place; returns `true` if any stored field changed.
    pub fn apply(self, professor: &mut Professor) -> bool {
        let mut modified = false;
        modified |= assign(&mut professor.first_name, self.first_name);
        modified |= assign(&mut professor.last_name, self.last_name);
        modified |= assign(&mut professor.email, self.email);
        modified |= assign(&mut professor.department, self.department.map(Some));
        modified |= assign(&mut professor.website, self.website.map(Some));
        modified |= assign(&mut professor.further_info, self.further_info);
        modified
    }
}
