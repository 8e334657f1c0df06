use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{AssignmentService, load_owned_assignment};
use crate::models::assignments::requests::{CreateSubmissionRequest, GradeSubmissionRequest};
use crate::models::{ApiResponse, ErrorCode, ListResponse};
use crate::services::{
    current_user_id, field_error, internal_error, not_found, try_response, validate,
};

fn submission_not_found() -> HttpResponse {
    not_found(ErrorCode::SubmissionNotFound, "Submission not found")
}

pub async fn list_own_submissions(
    service: &AssignmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;

    match storage.list_student_submissions(uid).await {
        Ok(submissions) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ListResponse::from(submissions),
            "Submissions retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to list submissions", e)),
    }
}

pub async fn create_submission(
    service: &AssignmentService,
    body: CreateSubmissionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    try_response!(validate(&body));
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;

    match storage.get_assignment(body.assignment_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(field_error(
                "assignment_id",
                format!("Assignment {} does not exist", body.assignment_id),
            ));
        }
        Err(e) => return Ok(internal_error("Failed to get assignment", e)),
    }

    match storage.create_submission(uid, body).await {
        Ok(submission) => Ok(HttpResponse::Created().json(ApiResponse::success(
            submission,
            "Submission created successfully",
        ))),
        Err(e) => Ok(internal_error("Submission creation failed", e)),
    }
}

pub async fn list_assignment_submissions(
    service: &AssignmentService,
    assignment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    try_response!(load_owned_assignment(&storage, assignment_id, uid).await);

    match storage.list_assignment_submissions(assignment_id).await {
        Ok(submissions) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ListResponse::from(submissions),
            "Submissions retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to list submissions", e)),
    }
}

pub async fn grade_submission(
    service: &AssignmentService,
    submission_id: i64,
    body: GradeSubmissionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    try_response!(validate(&body));
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;

    let submission = match storage.get_submission(submission_id).await {
        Ok(Some(submission)) => submission,
        Ok(None) => return Ok(submission_not_found()),
        Err(e) => return Ok(internal_error("Failed to get submission", e)),
    };
    try_response!(load_owned_assignment(&storage, submission.assignment_id, uid).await);

    match storage.grade_submission(submission_id, body.grade).await {
        Ok(Some(submission)) => {
            tracing::info!("Teacher {} graded submission {}", uid, submission_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                submission,
                "Submission graded successfully",
            )))
        }
        Ok(None) => Ok(submission_not_found()),
        Err(e) => Ok(internal_error("Failed to grade submission", e)),
    }
}
