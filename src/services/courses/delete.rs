use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CourseService, load_owned_course};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_user_id, internal_error, not_found, try_response};

pub async fn delete_course(
    service: &CourseService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    try_response!(load_owned_course(&storage, course_id, uid).await);

    match storage.delete_course(course_id).await {
        Ok(true) => {
            tracing::info!("Teacher {} deleted course {}", uid, course_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Course deleted successfully")))
        }
        Ok(false) => Ok(not_found(ErrorCode::CourseNotFound, "Course not found")),
        Err(e) => Ok(internal_error("Course deletion failed", e)),
    }
}
