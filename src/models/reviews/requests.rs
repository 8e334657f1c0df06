use serde::Deserialize;

use crate::models::common::pagination::{default_page, default_size, deserialize_string_to_i64};
use crate::models::{FieldError, FieldErrors, Validate};
use crate::utils::validate::validate_range;

#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub course_id: i64,
    pub stars: Option<i16>,
    pub comment: Option<String>,
}

impl Validate for CreateReviewRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        if let Some(stars) = self.stars {
            errors.check("stars", validate_range(stars, 1, 5));
        }
        errors.into_result()
    }
}

/// 评价列表查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewListQuery {
    #[serde(default = "default_page", deserialize_with = "deserialize_string_to_i64")]
    pub page: i64,
    #[serde(default = "default_size", deserialize_with = "deserialize_string_to_i64")]
    pub size: i64,
    pub course_id: Option<i64>,
    pub student_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_bounds() {
        let review = |stars| CreateReviewRequest {
            course_id: 1,
            stars,
            comment: None,
        };
        assert!(review(None).validate().is_ok());
        assert!(review(Some(1)).validate().is_ok());
        assert!(review(Some(5)).validate().is_ok());
        assert!(review(Some(0)).validate().is_err());
        assert!(review(Some(6)).validate().is_err());
    }
}
