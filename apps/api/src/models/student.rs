use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A full student row as stored.
/// `class` is a Rust keyword, hence the renames.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "class")]
    #[sqlx(rename = "class")]
    pub class_name: String,
    pub roll_no: Option<String>,
    pub created_at: DateTime<Utc>,
}
