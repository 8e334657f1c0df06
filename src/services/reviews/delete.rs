use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReviewService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_user_id, forbidden, internal_error, not_found, try_response};

pub async fn delete_review(
    service: &ReviewService,
    review_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;

    let review = match storage.get_review(review_id).await {
        Ok(Some(review)) => review,
        Ok(None) => return Ok(not_found(ErrorCode::ReviewNotFound, "Review not found")),
        Err(e) => return Ok(internal_error("Failed to get review", e)),
    };

    if review.student_id != uid {
        return Ok(forbidden(
            ErrorCode::ReviewPermissionDenied,
            "You can only delete your own reviews",
        ));
    }

    match storage.delete_review(review_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Review deleted successfully"))),
        Ok(false) => Ok(not_found(ErrorCode::ReviewNotFound, "Review not found")),
        Err(e) => Ok(internal_error("Review deletion failed", e)),
    }
}
