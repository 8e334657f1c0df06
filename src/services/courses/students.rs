use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CourseService, load_owned_course};
use crate::models::{
    ApiResponse,
    courses::{requests::EnrollStudentRequest, responses::CourseStudentsResponse},
};
use crate::services::{current_user_id, field_error, internal_error, try_response};

pub async fn list_students(
    service: &CourseService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    try_response!(load_owned_course(&storage, course_id, uid).await);

    match storage.list_course_students(course_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CourseStudentsResponse { items },
            "Students retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to list course students", e)),
    }
}

/// 选课，重复选课返回 200
pub async fn enroll_student(
    service: &CourseService,
    course_id: i64,
    body: EnrollStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    try_response!(load_owned_course(&storage, course_id, uid).await);

    match storage.get_user_by_id(body.student_id).await {
        Ok(Some(user)) if user.is_student() => {}
        Ok(_) => {
            return Ok(field_error(
                "student_id",
                format!("Student {} does not exist", body.student_id),
            ));
        }
        Err(e) => return Ok(internal_error("Failed to load student", e)),
    }

    let created = match storage.enroll_student(course_id, body.student_id).await {
        Ok(created) => created,
        Err(e) => return Ok(internal_error("Enrollment failed", e)),
    };

    match storage.list_course_students(course_id).await {
        Ok(items) => {
            let response = ApiResponse::success(
                CourseStudentsResponse { items },
                "Student enrolled successfully",
            );
            if created {
                Ok(HttpResponse::Created().json(response))
            } else {
                Ok(HttpResponse::Ok().json(response))
            }
        }
        Err(e) => Ok(internal_error("Failed to list course students", e)),
    }
}
