use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::{ApiResponse, courses::requests::CourseListQuery};
use crate::services::{current_user_id, internal_error, try_response};

pub async fn list_courses(
    service: &CourseService,
    query: CourseListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_courses(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Courses retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to list courses", e)),
    }
}

pub async fn list_teacher_courses(
    service: &CourseService,
    mut query: CourseListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    // 教师只能看到自己的课程
    query.teacher = Some(uid);
    list_courses(service, query, request).await
}
