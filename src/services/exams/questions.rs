use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::{ExamService, load_owned_exam};
use crate::models::exams::entities::Question;
use crate::models::exams::requests::{CreateQuestionRequest, UpdateQuestionRequest};
use crate::models::{ApiResponse, ErrorCode, ListResponse};
use crate::services::{current_user_id, internal_error, not_found, try_response, validate};
use crate::storage::Storage;

fn question_not_found() -> HttpResponse {
    not_found(ErrorCode::QuestionNotFound, "Question not found")
}

/// 通过所属考试确认题目归当前教师
async fn load_owned_question(
    storage: &Arc<dyn Storage>,
    question_id: i64,
    teacher_id: i64,
) -> Result<Question, HttpResponse> {
    let question = match storage.get_question(question_id).await {
        Ok(Some(question)) => question,
        Ok(None) => return Err(question_not_found()),
        Err(e) => return Err(internal_error("Failed to get question", e)),
    };
    load_owned_exam(storage, question.exam_id, teacher_id).await?;
    Ok(question)
}

pub async fn list_questions(
    service: &ExamService,
    exam_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    try_response!(load_owned_exam(&storage, exam_id, uid).await);

    match storage.list_questions(exam_id).await {
        Ok(questions) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ListResponse::from(questions),
            "Questions retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to list questions", e)),
    }
}

pub async fn get_question(
    service: &ExamService,
    question_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    let question = try_response!(load_owned_question(&storage, question_id, uid).await);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        question,
        "Question retrieved successfully",
    )))
}

pub async fn create_question(
    service: &ExamService,
    exam_id: i64,
    body: CreateQuestionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    try_response!(validate(&body));
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    try_response!(load_owned_exam(&storage, exam_id, uid).await);

    match storage.create_question(exam_id, body).await {
        Ok(question) => Ok(HttpResponse::Created().json(ApiResponse::success(
            question,
            "Question created successfully",
        ))),
        Err(e) => Ok(internal_error("Question creation failed", e)),
    }
}

/// 提供 choices 时整体替换选项，已提交的答题结果不会重新判分
pub async fn update_question(
    service: &ExamService,
    question_id: i64,
    body: UpdateQuestionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    try_response!(validate(&body));
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    try_response!(load_owned_question(&storage, question_id, uid).await);

    match storage.update_question(question_id, body).await {
        Ok(Some(question)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            question,
            "Question updated successfully",
        ))),
        Ok(None) => Ok(question_not_found()),
        Err(e) => Ok(internal_error("Question update failed", e)),
    }
}

pub async fn delete_question(
    service: &ExamService,
    question_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    try_response!(load_owned_question(&storage, question_id, uid).await);

    match storage.delete_question(question_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Question deleted successfully",
        ))),
        Ok(false) => Ok(question_not_found()),
        Err(e) => Ok(internal_error("Question deletion failed", e)),
    }
}
