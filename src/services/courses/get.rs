use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CourseService, load_owned_course};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_user_id, internal_error, not_found, try_response};

pub async fn get_course(
    service: &CourseService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_course_detail(course_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            detail,
            "Course retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::CourseNotFound, "Course not found")),
        Err(e) => Ok(internal_error("Failed to get course information", e)),
    }
}

pub async fn get_teacher_course(
    service: &CourseService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    try_response!(load_owned_course(&storage, course_id, uid).await);

    match storage.get_teacher_course_detail(course_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            detail,
            "Course retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::CourseNotFound, "Course not found")),
        Err(e) => Ok(internal_error("Failed to get course information", e)),
    }
}
