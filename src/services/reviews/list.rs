use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReviewService;
use crate::models::{ApiResponse, reviews::requests::ReviewListQuery};
use crate::services::internal_error;

pub async fn list_reviews(
    service: &ReviewService,
    query: ReviewListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_reviews(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Reviews retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to list reviews", e)),
    }
}
