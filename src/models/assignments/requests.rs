use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::{FieldError, FieldErrors, Validate};
use crate::utils::validate::{validate_range, validate_required_text};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssignmentRequest {
    pub course_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub due_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAssignmentRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssignmentListQuery {
    pub course_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubmissionRequest {
    pub assignment_id: i64,
    pub submission_file: String,
}

/// 教师评分，分数范围 1~100
#[derive(Debug, Clone, Deserialize)]
pub struct GradeSubmissionRequest {
    pub grade: i16,
}

impl Validate for CreateAssignmentRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        errors.check("name", validate_required_text(&self.name, 255));
        errors.into_result()
    }
}

impl Validate for UpdateAssignmentRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        if let Some(ref name) = self.name {
            errors.check("name", validate_required_text(name, 255));
        }
        errors.into_result()
    }
}

impl Validate for CreateSubmissionRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        errors.check(
            "submission_file",
            validate_required_text(&self.submission_file, 255),
        );
        errors.into_result()
    }
}

impl Validate for GradeSubmissionRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        errors.check("grade", validate_range(self.grade, 1, 100));
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_bounds() {
        for (grade, ok) in [(0, false), (1, true), (100, true), (101, false)] {
            assert_eq!(GradeSubmissionRequest { grade }.validate().is_ok(), ok);
        }
    }

    #[test]
    fn test_due_date_parses_rfc3339() {
        let req: CreateAssignmentRequest = serde_json::from_str(
            r#"{"course_id":1,"name":"Lab 1","due_date":"2026-09-01T12:00:00Z"}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.due_date.timestamp(), 1_788_264_000);
    }
}
