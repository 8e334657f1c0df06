use serde::Deserialize;

use crate::models::{FieldError, FieldErrors, Validate};

/// 加入购物车，course_id 缺失时返回字段错误
#[derive(Debug, Clone, Deserialize)]
pub struct AddCartItemRequest {
    pub course_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCartItemRequest {
    pub course_id: Option<i64>,
}

fn check_course_id(course_id: Option<i64>) -> Result<(), Vec<FieldError>> {
    let mut errors = FieldErrors::new();
    if course_id.is_none() {
        errors.push("course_id", "This field is required");
    }
    errors.into_result()
}

impl Validate for AddCartItemRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        check_course_id(self.course_id)
    }
}

impl Validate for UpdateCartItemRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        check_course_id(self.course_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_course_is_field_error() {
        let req: AddCartItemRequest = serde_json::from_str("{}").unwrap();
        let errors = req.validate().unwrap_err();
        assert_eq!(errors[0].field, "course_id");

        let req: AddCartItemRequest = serde_json::from_str(r#"{"course_id":3}"#).unwrap();
        assert!(req.validate().is_ok());
    }
}
