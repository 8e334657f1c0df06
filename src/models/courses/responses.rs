use chrono::{DateTime, Utc};
use serde::Serialize;

use super::entities::{Course, CourseDuration, Level};
use crate::models::PaginatedResponse;
use crate::models::catalog::entities::{Category, Skill};
use crate::models::lessons::entities::{CourseLanguage, Lesson};
use crate::models::reviews::entities::Review;
use crate::models::reviews::rating::{CourseRating, ReviewerCount};
use crate::models::users::responses::{TeacherBrief, UserBrief};
use crate::models::Price;

/// 课程列表项
#[derive(Debug, Clone, Serialize)]
pub struct CourseSummary {
    pub id: i64,
    pub course_name: String,
    pub course_image: Option<String>,
    pub category: Category,
    pub level: Level,
    pub duration: CourseDuration,
    pub teacher_id: i64,
    pub price: Price,
    pub avg_rating: f64,
    pub total_people: ReviewerCount,
    pub skills: Vec<Skill>,
}

impl CourseSummary {
    pub fn new(course: &Course, category: Category, skills: Vec<Skill>, rating: CourseRating) -> Self {
        Self {
            id: course.id,
            course_name: course.course_name.clone(),
            course_image: course.course_image.clone(),
            category,
            level: course.level,
            duration: course.duration,
            teacher_id: course.teacher_id,
            price: course.price,
            avg_rating: rating.avg_rating,
            total_people: rating.total_people,
            skills,
        }
    }
}

pub type CourseListResponse = PaginatedResponse<CourseSummary>;

/// 学生看到的课程详情
#[derive(Debug, Clone, Serialize)]
pub struct CourseDetail {
    #[serde(flatten)]
    pub course: CourseSummary,
    pub description: String,
    pub teacher: TeacherBrief,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub reviews: Vec<Review>,
}

/// 课程所属教师看到的详情
#[derive(Debug, Clone, Serialize)]
pub struct TeacherCourseDetail {
    #[serde(flatten)]
    pub course: CourseSummary,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub course_languages: Vec<CourseLanguage>,
    pub lessons: Vec<Lesson>,
    pub students: Vec<UserBrief>,
}

#[derive(Debug, Serialize)]
pub struct CourseStudentsResponse {
    pub items: Vec<UserBrief>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_serializes_derived_fields() {
        let now = Utc::now();
        let course = Course {
            id: 3,
            course_name: "Rust Basics".to_string(),
            category_id: 1,
            teacher_id: 9,
            description: "ownership".to_string(),
            price: Price::from_cents(15_000),
            level: Level::Beginner,
            duration: CourseDuration::OneToFourWeeks,
            course_image: None,
            created_at: now,
            updated_at: now,
        };
        let summary = CourseSummary::new(
            &course,
            Category {
                id: 1,
                category_name: "Programming".to_string(),
            },
            vec![],
            CourseRating::from_stars(&[Some(5), Some(5), None, Some(3)]),
        );
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["price"], "150.00");
        assert_eq!(value["avg_rating"], 3.3);
        assert_eq!(value["total_people"], 4);
        assert_eq!(value["category"]["category_name"], "Programming");
        assert_eq!(value["duration"], "1_4_weeks");
    }
}
