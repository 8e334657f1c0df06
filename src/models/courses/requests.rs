use serde::Deserialize;

use super::entities::{CourseDuration, Level};
use crate::models::common::pagination::{default_page, default_size, deserialize_string_to_i64};
use crate::models::{FieldError, FieldErrors, Price, Validate};
use crate::utils::validate::validate_required_text;

/// 课程列表筛选参数
///
/// 所有筛选条件取交集；`search` 只对课程名做不区分大小写的子串匹配。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseListQuery {
    #[serde(default = "default_page", deserialize_with = "deserialize_string_to_i64")]
    pub page: i64,
    #[serde(default = "default_size", deserialize_with = "deserialize_string_to_i64")]
    pub size: i64,
    pub category: Option<i64>,
    pub level: Option<Level>,
    pub teacher: Option<i64>,
    pub duration: Option<CourseDuration>,
    pub skills: Option<i64>,
    pub course_languages: Option<i64>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    pub course_name: String,
    pub category_id: i64,
    pub description: String,
    pub price: Price,
    pub level: Level,
    pub duration: CourseDuration,
    pub course_image: Option<String>,
    #[serde(default)]
    pub skill_ids: Vec<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCourseRequest {
    pub course_name: Option<String>,
    pub category_id: Option<i64>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub level: Option<Level>,
    pub duration: Option<CourseDuration>,
    pub course_image: Option<String>,
    /// 提供时整体替换课程技能
    pub skill_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnrollStudentRequest {
    pub student_id: i64,
}

fn check_price(errors: &mut FieldErrors, price: &Price) {
    if !price.is_valid() {
        errors.push(
            "price",
            "Price must be non-negative with at most 10 digits in total",
        );
    }
}

impl Validate for CreateCourseRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        errors.check("course_name", validate_required_text(&self.course_name, 255));
        errors.check("description", validate_required_text(&self.description, 10_000));
        check_price(&mut errors, &self.price);
        errors.into_result()
    }
}

impl Validate for UpdateCourseRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        if let Some(ref name) = self.course_name {
            errors.check("course_name", validate_required_text(name, 255));
        }
        if let Some(ref description) = self.description {
            errors.check("description", validate_required_text(description, 10_000));
        }
        if let Some(ref price) = self.price {
            check_price(&mut errors, price);
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web::Query;

    #[test]
    fn test_list_query_parses_all_filters() {
        let query = Query::<CourseListQuery>::from_query(
            "category=2&level=beginner&teacher=5&duration=1_3_months&skills=4&course_languages=9&search=RuSt&page=2&size=5",
        )
        .unwrap()
        .into_inner();
        assert_eq!(query.category, Some(2));
        assert_eq!(query.level, Some(Level::Beginner));
        assert_eq!(query.teacher, Some(5));
        assert_eq!(query.duration, Some(CourseDuration::OneToThreeMonths));
        assert_eq!(query.skills, Some(4));
        assert_eq!(query.course_languages, Some(9));
        assert_eq!(query.search.as_deref(), Some("RuSt"));
        assert_eq!((query.page, query.size), (2, 5));
    }

    #[test]
    fn test_list_query_defaults() {
        let query = Query::<CourseListQuery>::from_query("").unwrap().into_inner();
        assert_eq!((query.page, query.size), (1, 20));
        assert!(query.category.is_none());
    }

    #[test]
    fn test_create_course_rejects_negative_price() {
        let req: CreateCourseRequest = serde_json::from_str(
            r#"{"course_name":"Rust","category_id":1,"description":"d","price":"-1.00","level":"beginner","duration":"1_4_weeks"}"#,
        )
        .unwrap();
        let errors = req.validate().unwrap_err();
        assert_eq!(errors[0].field, "price");
    }
}
