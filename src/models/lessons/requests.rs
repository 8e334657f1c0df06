use serde::Deserialize;

use crate::models::{FieldError, FieldErrors, Validate};
use crate::utils::validate::validate_required_text;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateLessonRequest {
    pub lesson_name: String,
    pub video_url: Option<String>,
    pub video_file: Option<String>,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLessonRequest {
    pub lesson_name: Option<String>,
    pub video_url: Option<String>,
    pub video_file: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseLanguageRequest {
    pub language: String,
    pub video_file: Option<String>,
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCourseLanguageRequest {
    pub language: Option<String>,
    pub video_file: Option<String>,
    pub video_url: Option<String>,
}

impl Validate for CreateLessonRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        errors.check("lesson_name", validate_required_text(&self.lesson_name, 255));
        errors.into_result()
    }
}

impl Validate for UpdateLessonRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        if let Some(ref name) = self.lesson_name {
            errors.check("lesson_name", validate_required_text(name, 255));
        }
        errors.into_result()
    }
}

impl Validate for CreateCourseLanguageRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        errors.check("language", validate_required_text(&self.language, 50));
        errors.into_result()
    }
}

impl Validate for UpdateCourseLanguageRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        if let Some(ref language) = self.language {
            errors.check("language", validate_required_text(language, 50));
        }
        errors.into_result()
    }
}
