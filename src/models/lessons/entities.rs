use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: i64,
    pub course_id: i64,
    pub teacher_id: i64,
    pub lesson_name: String,
    pub video_url: Option<String>,
    pub video_file: Option<String>,
    pub content: String,
}

/// 课程的语言版本
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseLanguage {
    pub id: i64,
    pub course_id: i64,
    pub teacher_id: i64,
    pub language: String,
    pub video_file: Option<String>,
    pub video_url: Option<String>,
}
