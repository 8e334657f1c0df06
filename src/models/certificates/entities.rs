use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub issued_at: DateTime<Utc>,
    pub certificate_url: Option<String>,
}
