use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::OrderService;
use crate::models::{ApiResponse, FieldError, orders::requests::CreateOrderRequest};
use crate::services::carts::student_cart;
use crate::services::{
    current_user_id, internal_error, try_response, validate, validation_failed,
};

/// 基于购物车中的一个条目下单，初始状态为未支付
pub async fn create_order(
    service: &OrderService,
    body: CreateOrderRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    try_response!(validate(&body));
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    let cart = try_response!(student_cart(&storage, uid).await);

    let mut errors = Vec::new();
    match storage.get_cart_item(cart.id, body.cart_item_id).await {
        Ok(Some(_)) => {}
        Ok(None) => errors.push(FieldError::new(
            "cart_item_id",
            "Cart item does not belong to your cart",
        )),
        Err(e) => return Ok(internal_error("Failed to get cart item", e)),
    }
    match storage.get_country(body.country_id).await {
        Ok(Some(_)) => {}
        Ok(None) => errors.push(FieldError::new(
            "country_id",
            format!("Country {} does not exist", body.country_id),
        )),
        Err(e) => return Ok(internal_error("Failed to get country", e)),
    }
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    match storage.create_order(body.into_new_order(uid)).await {
        Ok(order) => {
            tracing::info!("Student {} created order {}", uid, order.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                order,
                "Order created successfully",
            )))
        }
        Err(e) => Ok(internal_error("Order creation failed", e)),
    }
}
