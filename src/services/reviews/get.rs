use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReviewService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, not_found};

pub async fn get_review(
    service: &ReviewService,
    review_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_review(review_id).await {
        Ok(Some(review)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            review,
            "Review retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::ReviewNotFound, "Review not found")),
        Err(e) => Ok(internal_error("Failed to get review", e)),
    }
}
