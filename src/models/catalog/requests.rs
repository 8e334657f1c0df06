use serde::Deserialize;

use crate::models::{FieldError, FieldErrors, Validate};
use crate::utils::validate::validate_required_text;

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub category_name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateSkillRequest {
    pub skill_name: String,
}

impl Validate for CreateCategoryRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        errors.check("category_name", validate_required_text(&self.category_name, 100));
        errors.into_result()
    }
}

impl Validate for CreateSkillRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        errors.check("skill_name", validate_required_text(&self.skill_name, 100));
        errors.into_result()
    }
}
