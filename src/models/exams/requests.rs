use serde::Deserialize;

use crate::models::{FieldError, FieldErrors, Validate};
use crate::utils::validate::{validate_range, validate_required_text};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateExamRequest {
    pub course_id: i64,
    pub exam_name: String,
    pub passing_score: Option<i16>,
    pub duration: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateExamRequest {
    pub exam_name: Option<String>,
    pub passing_score: Option<i16>,
    pub duration: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExamListQuery {
    pub course_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceInput {
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestionRequest {
    pub text: String,
    #[serde(default)]
    pub choices: Vec<ChoiceInput>,
}

/// 提供 choices 时整体替换题目的选项
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateQuestionRequest {
    pub text: Option<String>,
    pub choices: Option<Vec<ChoiceInput>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswerRequest {
    pub question_id: i64,
    #[serde(default)]
    pub selected_choices: Vec<i64>,
    pub answer_text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnswerListQuery {
    pub exam_id: Option<i64>,
}

fn check_exam_fields(errors: &mut FieldErrors, passing_score: Option<i16>, duration: Option<i32>) {
    if let Some(score) = passing_score {
        errors.check("passing_score", validate_range(score, 1, 100));
    }
    if let Some(duration) = duration {
        errors.check("duration", validate_range(duration, 1, 24 * 60));
    }
}

fn check_choices(errors: &mut FieldErrors, choices: &[ChoiceInput]) {
    for (i, choice) in choices.iter().enumerate() {
        errors.check(
            &format!("choices[{i}].text"),
            validate_required_text(&choice.text, 255),
        );
    }
}

impl Validate for CreateExamRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        errors.check("exam_name", validate_required_text(&self.exam_name, 255));
        check_exam_fields(&mut errors, self.passing_score, Some(self.duration));
        errors.into_result()
    }
}

impl Validate for UpdateExamRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        if let Some(ref name) = self.exam_name {
            errors.check("exam_name", validate_required_text(name, 255));
        }
        check_exam_fields(&mut errors, self.passing_score, self.duration);
        errors.into_result()
    }
}

impl Validate for CreateQuestionRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        errors.check("text", validate_required_text(&self.text, 10_000));
        check_choices(&mut errors, &self.choices);
        errors.into_result()
    }
}

impl Validate for UpdateQuestionRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        if let Some(ref text) = self.text {
            errors.check("text", validate_required_text(text, 10_000));
        }
        if let Some(ref choices) = self.choices {
            check_choices(&mut errors, choices);
        }
        errors.into_result()
    }
}

impl Validate for SubmitAnswerRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        let has_text = self
            .answer_text
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty());
        if self.selected_choices.is_empty() && !has_text {
            errors.push(
                "selected_choices",
                "Select at least one choice or provide an answer text",
            );
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passing_score_range() {
        let exam = |score| CreateExamRequest {
            course_id: 1,
            exam_name: "Midterm".to_string(),
            passing_score: score,
            duration: 60,
        };
        assert!(exam(None).validate().is_ok());
        assert!(exam(Some(100)).validate().is_ok());
        assert!(exam(Some(0)).validate().is_err());
        assert!(exam(Some(101)).validate().is_err());
    }

    #[test]
    fn test_answer_needs_choice_or_text() {
        let empty: SubmitAnswerRequest = serde_json::from_str(r#"{"question_id":1}"#).unwrap();
        assert!(empty.validate().is_err());

        let text: SubmitAnswerRequest =
            serde_json::from_str(r#"{"question_id":1,"answer_text":"borrowing"}"#).unwrap();
        assert!(text.validate().is_ok());

        let choice: SubmitAnswerRequest =
            serde_json::from_str(r#"{"question_id":1,"selected_choices":[3]}"#).unwrap();
        assert!(choice.validate().is_ok());
    }

    #[test]
    fn test_blank_choice_text() {
        let req: CreateQuestionRequest = serde_json::from_str(
            r#"{"text":"Pick one","choices":[{"text":"a","is_correct":true},{"text":" "}]}"#,
        )
        .unwrap();
        let errors = req.validate().unwrap_err();
        assert_eq!(errors[0].field, "choices[1].text");
    }
}
