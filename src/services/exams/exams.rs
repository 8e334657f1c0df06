use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ExamService, exam_not_found, load_owned_exam};
use crate::models::exams::requests::{CreateExamRequest, UpdateExamRequest};
use crate::models::{ApiResponse, ListResponse};
use crate::services::courses::load_owned_course;
use crate::services::{current_user_id, internal_error, try_response, validate};

pub async fn list_teacher_exams(
    service: &ExamService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;

    match storage.list_exams(None, Some(uid)).await {
        Ok(exams) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ListResponse::from(exams),
            "Exams retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to list exams", e)),
    }
}

pub async fn get_teacher_exam(
    service: &ExamService,
    exam_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    try_response!(load_owned_exam(&storage, exam_id, uid).await);

    match storage.get_exam_detail(exam_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            detail,
            "Exam retrieved successfully",
        ))),
        Ok(None) => Ok(exam_not_found()),
        Err(e) => Ok(internal_error("Failed to get exam", e)),
    }
}

pub async fn create_exam(
    service: &ExamService,
    body: CreateExamRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    try_response!(validate(&body));
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    try_response!(load_owned_course(&storage, body.course_id, uid).await);

    match storage.create_exam(uid, body).await {
        Ok(exam) => Ok(HttpResponse::Created().json(ApiResponse::success(
            exam,
            "Exam created successfully",
        ))),
        Err(e) => Ok(internal_error("Exam creation failed", e)),
    }
}

pub async fn update_exam(
    service: &ExamService,
    exam_id: i64,
    body: UpdateExamRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    try_response!(validate(&body));
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    try_response!(load_owned_exam(&storage, exam_id, uid).await);

    match storage.update_exam(exam_id, body).await {
        Ok(Some(exam)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            exam,
            "Exam updated successfully",
        ))),
        Ok(None) => Ok(exam_not_found()),
        Err(e) => Ok(internal_error("Exam update failed", e)),
    }
}

pub async fn delete_exam(
    service: &ExamService,
    exam_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    try_response!(load_owned_exam(&storage, exam_id, uid).await);

    match storage.delete_exam(exam_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Exam deleted successfully"))),
        Ok(false) => Ok(exam_not_found()),
        Err(e) => Ok(internal_error("Exam deletion failed", e)),
    }
}
