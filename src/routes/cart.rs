use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::carts::requests::{AddCartItemRequest, UpdateCartItemRequest};
use crate::models::users::entities::UserRole;
use crate::services::CartService;
use crate::utils::SafeIDI64;

static CART_SERVICE: Lazy<CartService> = Lazy::new(CartService::new_lazy);

pub async fn get_cart(req: HttpRequest) -> ActixResult<HttpResponse> {
    CART_SERVICE.get_cart(&req).await
}

pub async fn clear_cart(req: HttpRequest) -> ActixResult<HttpResponse> {
    CART_SERVICE.clear_cart(&req).await
}

pub async fn list_items(req: HttpRequest) -> ActixResult<HttpResponse> {
    CART_SERVICE.list_items(&req).await
}

pub async fn add_item(
    req: HttpRequest,
    body: web::Json<AddCartItemRequest>,
) -> ActixResult<HttpResponse> {
    CART_SERVICE.add_item(body.into_inner(), &req).await
}

pub async fn get_item(req: HttpRequest, item_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CART_SERVICE.get_item(item_id.0, &req).await
}

pub async fn update_item(
    req: HttpRequest,
    item_id: SafeIDI64,
    body: web::Json<UpdateCartItemRequest>,
) -> ActixResult<HttpResponse> {
    CART_SERVICE
        .update_item(item_id.0, body.into_inner(), &req)
        .await
}

pub async fn delete_item(req: HttpRequest, item_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CART_SERVICE.delete_item(item_id.0, &req).await
}

// 配置路由
pub fn configure_cart_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/cart")
            .wrap(middlewares::RequireRole::new(UserRole::Student))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(get_cart))
            .route("", web::delete().to(clear_cart))
            .route("/items", web::get().to(list_items))
            .route("/items", web::post().to(add_item))
            .route("/items/{id}", web::get().to(get_item))
            .route("/items/{id}", web::put().to(update_item))
            .route("/items/{id}", web::delete().to(delete_item)),
    );
}
