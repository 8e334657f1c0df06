use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{AssignmentService, assignment_not_found, load_owned_assignment};
use crate::models::ApiResponse;
use crate::models::assignments::requests::{CreateAssignmentRequest, UpdateAssignmentRequest};
use crate::services::courses::load_owned_course;
use crate::services::{current_user_id, internal_error, try_response, validate};

pub async fn create_assignment(
    service: &AssignmentService,
    body: CreateAssignmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    try_response!(validate(&body));
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    try_response!(load_owned_course(&storage, body.course_id, uid).await);

    match storage.create_assignment(uid, body).await {
        Ok(assignment) => Ok(HttpResponse::Created().json(ApiResponse::success(
            assignment,
            "Assignment created successfully",
        ))),
        Err(e) => Ok(internal_error("Assignment creation failed", e)),
    }
}

pub async fn update_assignment(
    service: &AssignmentService,
    assignment_id: i64,
    body: UpdateAssignmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    try_response!(validate(&body));
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    try_response!(load_owned_assignment(&storage, assignment_id, uid).await);

    match storage.update_assignment(assignment_id, body).await {
        Ok(Some(assignment)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            assignment,
            "Assignment updated successfully",
        ))),
        Ok(None) => Ok(assignment_not_found()),
        Err(e) => Ok(internal_error("Assignment update failed", e)),
    }
}

pub async fn delete_assignment(
    service: &AssignmentService,
    assignment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    try_response!(load_owned_assignment(&storage, assignment_id, uid).await);

    match storage.delete_assignment(assignment_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Assignment deleted successfully",
        ))),
        Ok(false) => Ok(assignment_not_found()),
        Err(e) => Ok(internal_error("Assignment deletion failed", e)),
    }
}
