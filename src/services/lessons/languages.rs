use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::LessonService;
use crate::models::lessons::entities::CourseLanguage;
use crate::models::lessons::requests::{CreateCourseLanguageRequest, UpdateCourseLanguageRequest};
use crate::models::{ApiResponse, ErrorCode, ListResponse};
use crate::services::courses::load_owned_course;
use crate::services::{current_user_id, internal_error, not_found, try_response, validate};
use crate::storage::Storage;

fn language_not_found() -> HttpResponse {
    not_found(ErrorCode::CourseLanguageNotFound, "Course language not found")
}

async fn load_owned_language(
    storage: &Arc<dyn Storage>,
    language_id: i64,
    teacher_id: i64,
) -> Result<CourseLanguage, HttpResponse> {
    let language = match storage.get_course_language(language_id).await {
        Ok(Some(language)) => language,
        Ok(None) => return Err(language_not_found()),
        Err(e) => return Err(internal_error("Failed to get course language", e)),
    };
    load_owned_course(storage, language.course_id, teacher_id).await?;
    Ok(language)
}

pub async fn list_languages(
    service: &LessonService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    try_response!(load_owned_course(&storage, course_id, uid).await);

    match storage.list_course_languages(course_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ListResponse::from(items),
            "Course languages retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to list course languages", e)),
    }
}

pub async fn get_language(
    service: &LessonService,
    language_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    let language = try_response!(load_owned_language(&storage, language_id, uid).await);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        language,
        "Course language retrieved successfully",
    )))
}

pub async fn create_language(
    service: &LessonService,
    course_id: i64,
    body: CreateCourseLanguageRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    try_response!(validate(&body));
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    try_response!(load_owned_course(&storage, course_id, uid).await);

    match storage.create_course_language(course_id, uid, body).await {
        Ok(language) => Ok(HttpResponse::Created().json(ApiResponse::success(
            language,
            "Course language created successfully",
        ))),
        Err(e) => Ok(internal_error("Course language creation failed", e)),
    }
}

pub async fn update_language(
    service: &LessonService,
    language_id: i64,
    body: UpdateCourseLanguageRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    try_response!(validate(&body));
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    try_response!(load_owned_language(&storage, language_id, uid).await);

    match storage.update_course_language(language_id, body).await {
        Ok(Some(language)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            language,
            "Course language updated successfully",
        ))),
        Ok(None) => Ok(language_not_found()),
        Err(e) => Ok(internal_error("Course language update failed", e)),
    }
}

pub async fn delete_language(
    service: &LessonService,
    language_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    try_response!(load_owned_language(&storage, language_id, uid).await);

    match storage.delete_course_language(language_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Course language deleted successfully",
        ))),
        Ok(false) => Ok(language_not_found()),
        Err(e) => Ok(internal_error("Course language deletion failed", e)),
    }
}
