use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CartService, item_not_found, require_course, student_cart};
use crate::models::carts::requests::{AddCartItemRequest, UpdateCartItemRequest};
use crate::models::{ApiResponse, ListResponse};
use crate::services::{current_user_id, field_error, internal_error, try_response, validate};

pub async fn list_items(service: &CartService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    let cart = try_response!(student_cart(&storage, uid).await);

    match storage.list_cart_items(cart.id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ListResponse::from(items),
            "Cart items retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to list cart items", e)),
    }
}

pub async fn add_item(
    service: &CartService,
    body: AddCartItemRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    try_response!(validate(&body));
    let Some(course_id) = body.course_id else {
        return Ok(field_error("course_id", "This field is required"));
    };
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;

    try_response!(require_course(&storage, course_id).await);
    let cart = try_response!(student_cart(&storage, uid).await);

    match storage.add_cart_item(cart.id, course_id).await {
        Ok(item) => Ok(HttpResponse::Created().json(ApiResponse::success(
            item,
            "Course added to cart",
        ))),
        Err(e) => Ok(internal_error("Failed to add cart item", e)),
    }
}

pub async fn get_item(
    service: &CartService,
    item_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    let cart = try_response!(student_cart(&storage, uid).await);

    match storage.get_cart_item(cart.id, item_id).await {
        Ok(Some(item)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            item,
            "Cart item retrieved successfully",
        ))),
        Ok(None) => Ok(item_not_found()),
        Err(e) => Ok(internal_error("Failed to get cart item", e)),
    }
}

pub async fn update_item(
    service: &CartService,
    item_id: i64,
    body: UpdateCartItemRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    try_response!(validate(&body));
    let Some(course_id) = body.course_id else {
        return Ok(field_error("course_id", "This field is required"));
    };
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;

    try_response!(require_course(&storage, course_id).await);
    let cart = try_response!(student_cart(&storage, uid).await);

    match storage.update_cart_item(cart.id, item_id, course_id).await {
        Ok(Some(item)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            item,
            "Cart item updated successfully",
        ))),
        Ok(None) => Ok(item_not_found()),
        Err(e) => Ok(internal_error("Failed to update cart item", e)),
    }
}

pub async fn delete_item(
    service: &CartService,
    item_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    let storage = service.get_storage(request)?;
    let cart = try_response!(student_cart(&storage, uid).await);

    match storage.delete_cart_item(cart.id, item_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Cart item removed"))),
        Ok(false) => Ok(item_not_found()),
        Err(e) => Ok(internal_error("Failed to remove cart item", e)),
    }
}
