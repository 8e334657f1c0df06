use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CartService, student_cart};
use crate::models::ApiResponse;
use crate::services::{current_user_id, internal_error, try_response};

pub async fn get_cart(service: &CartService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;

    match storage.get_cart_detail(uid).await {
        Ok(detail) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            detail,
            "Cart retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to load cart", e)),
    }
}

pub async fn clear_cart(service: &CartService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    let cart = try_response!(student_cart(&storage, uid).await);

    match storage.clear_cart(cart.id).await {
        Ok(removed) => {
            tracing::debug!("Cleared {} items from cart {}", removed, cart.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Cart cleared successfully")))
        }
        Err(e) => Ok(internal_error("Failed to clear cart", e)),
    }
}
