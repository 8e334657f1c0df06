use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{AssignmentService, assignment_not_found};
use crate::models::assignments::requests::AssignmentListQuery;
use crate::models::{ApiResponse, ListResponse};
use crate::services::internal_error;

pub async fn list_assignments(
    service: &AssignmentService,
    query: AssignmentListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_assignments(query).await {
        Ok(assignments) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ListResponse::from(assignments),
            "Assignments retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to list assignments", e)),
    }
}

pub async fn get_assignment(
    service: &AssignmentService,
    assignment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_assignment(assignment_id).await {
        Ok(Some(assignment)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            assignment,
            "Assignment retrieved successfully",
        ))),
        Ok(None) => Ok(assignment_not_found()),
        Err(e) => Ok(internal_error("Failed to get assignment", e)),
    }
}
