use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReviewService;
use crate::models::{ApiResponse, reviews::requests::CreateReviewRequest};
use crate::services::{current_user_id, field_error, internal_error, try_response, validate};

pub async fn create_review(
    service: &ReviewService,
    body: CreateReviewRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    try_response!(validate(&body));
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;

    match storage.get_course_by_id(body.course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(field_error(
                "course_id",
                format!("Course {} does not exist", body.course_id),
            ));
        }
        Err(e) => return Ok(internal_error("Failed to get course information", e)),
    }

    match storage.create_review(uid, body).await {
        Ok(review) => Ok(HttpResponse::Created().json(ApiResponse::success(
            review,
            "Review created successfully",
        ))),
        Err(e) => Ok(internal_error("Review creation failed", e)),
    }
}
