use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::LessonService;
use crate::models::lessons::entities::Lesson;
use crate::models::lessons::requests::{CreateLessonRequest, UpdateLessonRequest};
use crate::models::{ApiResponse, ErrorCode, ListResponse};
use crate::services::courses::load_owned_course;
use crate::services::{current_user_id, internal_error, not_found, try_response, validate};
use crate::storage::Storage;

fn lesson_not_found() -> HttpResponse {
    not_found(ErrorCode::LessonNotFound, "Lesson not found")
}

/// 读取课时并确认所属课程归当前教师
async fn load_owned_lesson(
    storage: &Arc<dyn Storage>,
    lesson_id: i64,
    teacher_id: i64,
) -> Result<Lesson, HttpResponse> {
    let lesson = match storage.get_lesson(lesson_id).await {
        Ok(Some(lesson)) => lesson,
        Ok(None) => return Err(lesson_not_found()),
        Err(e) => return Err(internal_error("Failed to get lesson", e)),
    };
    load_owned_course(storage, lesson.course_id, teacher_id).await?;
    Ok(lesson)
}

fn lessons_response(items: Vec<Lesson>) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(
        ListResponse::from(items),
        "Lessons retrieved successfully",
    ))
}

pub async fn list_course_lessons(
    service: &LessonService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_course_by_id(course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(not_found(ErrorCode::CourseNotFound, "Course not found")),
        Err(e) => return Ok(internal_error("Failed to get course information", e)),
    }

    match storage.list_lessons(course_id).await {
        Ok(items) => Ok(lessons_response(items)),
        Err(e) => Ok(internal_error("Failed to list lessons", e)),
    }
}

pub async fn list_lessons(
    service: &LessonService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    try_response!(load_owned_course(&storage, course_id, uid).await);

    match storage.list_lessons(course_id).await {
        Ok(items) => Ok(lessons_response(items)),
        Err(e) => Ok(internal_error("Failed to list lessons", e)),
    }
}

pub async fn get_lesson(
    service: &LessonService,
    lesson_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    let lesson = try_response!(load_owned_lesson(&storage, lesson_id, uid).await);

    Ok(HttpResponse::Ok().json(ApiResponse::success(lesson, "Lesson retrieved successfully")))
}

pub async fn create_lesson(
    service: &LessonService,
    course_id: i64,
    body: CreateLessonRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    try_response!(validate(&body));
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    try_response!(load_owned_course(&storage, course_id, uid).await);

    match storage.create_lesson(course_id, uid, body).await {
        Ok(lesson) => Ok(HttpResponse::Created().json(ApiResponse::success(
            lesson,
            "Lesson created successfully",
        ))),
        Err(e) => Ok(internal_error("Lesson creation failed", e)),
    }
}

pub async fn update_lesson(
    service: &LessonService,
    lesson_id: i64,
    body: UpdateLessonRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    try_response!(validate(&body));
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    try_response!(load_owned_lesson(&storage, lesson_id, uid).await);

    match storage.update_lesson(lesson_id, body).await {
        Ok(Some(lesson)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            lesson,
            "Lesson updated successfully",
        ))),
        Ok(None) => Ok(lesson_not_found()),
        Err(e) => Ok(internal_error("Lesson update failed", e)),
    }
}

pub async fn delete_lesson(
    service: &LessonService,
    lesson_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    try_response!(load_owned_lesson(&storage, lesson_id, uid).await);

    match storage.delete_lesson(lesson_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Lesson deleted successfully"))),
        Ok(false) => Ok(lesson_not_found()),
        Err(e) => Ok(internal_error("Lesson deletion failed", e)),
    }
}
