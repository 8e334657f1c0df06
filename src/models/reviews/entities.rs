use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub stars: Option<i16>,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}
