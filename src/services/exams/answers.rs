use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ExamService;
use crate::models::exams::grading::grade_choices;
use crate::models::exams::requests::{AnswerListQuery, SubmitAnswerRequest};
use crate::models::{ApiResponse, ListResponse};
use crate::services::{current_user_id, field_error, internal_error, try_response, validate};

/// 提交答案，提交时判分
pub async fn submit_answer(
    service: &ExamService,
    body: SubmitAnswerRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    try_response!(validate(&body));
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;

    let question = match storage.get_question(body.question_id).await {
        Ok(Some(question)) => question,
        Ok(None) => {
            return Ok(field_error(
                "question_id",
                format!("Question {} does not exist", body.question_id),
            ));
        }
        Err(e) => return Ok(internal_error("Failed to get question", e)),
    };

    let graded = match grade_choices(&question.choices, &body.selected_choices) {
        Ok(graded) => graded,
        Err(choice_id) => {
            return Ok(field_error(
                "selected_choices",
                format!("Choice {choice_id} does not belong to this question"),
            ));
        }
    };

    match storage
        .create_answer(uid, question.id, body.answer_text, graded)
        .await
    {
        Ok(answer) => Ok(HttpResponse::Created().json(ApiResponse::success(
            answer,
            "Answer submitted successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to save answer", e)),
    }
}

pub async fn list_answers(
    service: &ExamService,
    query: AnswerListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;

    match storage.list_answers(uid, query.exam_id).await {
        Ok(answers) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ListResponse::from(answers),
            "Answers retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to list answers", e)),
    }
}
