//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod assignment_submissions;
pub mod assignments;
pub mod cart_items;
pub mod carts;
pub mod categories;
pub mod certificates;
pub mod choices;
pub mod countries;
pub mod course_languages;
pub mod course_skills;
pub mod course_students;
pub mod courses;
pub mod exams;
pub mod lessons;
pub mod orders;
pub mod questions;
pub mod reviews;
pub mod revoked_tokens;
pub mod skills;
pub mod student_answer_choices;
pub mod student_answers;
pub mod student_profiles;
pub mod teacher_profiles;
pub mod users;

use chrono::{DateTime, Utc};

/// 秒级时间戳转换为 UTC 时间
pub(crate) fn to_datetime(ts: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()
}
