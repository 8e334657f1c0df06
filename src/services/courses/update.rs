use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CourseService, check_references, load_owned_course};
use crate::models::{ApiResponse, ErrorCode, courses::requests::UpdateCourseRequest};
use crate::services::{current_user_id, internal_error, not_found, try_response, validate};

pub async fn update_course(
    service: &CourseService,
    course_id: i64,
    body: UpdateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    try_response!(validate(&body));
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;

    try_response!(load_owned_course(&storage, course_id, uid).await);
    try_response!(check_references(&storage, body.category_id, body.skill_ids.as_deref()).await);

    match storage.update_course(course_id, body).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(not_found(ErrorCode::CourseNotFound, "Course not found")),
        Err(e) => return Ok(internal_error("Course update failed", e)),
    }

    match storage.get_teacher_course_detail(course_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            detail,
            "Course updated successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::CourseNotFound, "Course not found")),
        Err(e) => Ok(internal_error("Failed to load updated course", e)),
    }
}
