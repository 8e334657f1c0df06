use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::OrderService;
use crate::models::{ApiResponse, ListResponse};
use crate::services::{current_user_id, internal_error, try_response};

pub async fn list_orders(service: &OrderService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;

    match storage.list_orders(uid).await {
        Ok(orders) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ListResponse::from(orders),
            "Orders retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to list orders", e)),
    }
}
