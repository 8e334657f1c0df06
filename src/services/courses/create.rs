use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CourseService, check_references};
use crate::models::{ApiResponse, ErrorCode, courses::requests::CreateCourseRequest};
use crate::services::{current_user_id, internal_error, not_found, try_response, validate};

pub async fn create_course(
    service: &CourseService,
    body: CreateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    try_response!(validate(&body));
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;

    try_response!(check_references(&storage, Some(body.category_id), Some(&body.skill_ids)).await);

    let course = match storage.create_course(uid, body).await {
        Ok(course) => course,
        Err(e) => return Ok(internal_error("Course creation failed", e)),
    };
    tracing::info!("Teacher {} created course {}", uid, course.id);

    match storage.get_teacher_course_detail(course.id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Created().json(ApiResponse::success(
            detail,
            "Course created successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::CourseNotFound, "Course not found")),
        Err(e) => Ok(internal_error("Failed to load created course", e)),
    }
}
