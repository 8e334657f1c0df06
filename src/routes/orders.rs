use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::orders::requests::CreateOrderRequest;
use crate::models::users::entities::UserRole;
use crate::services::OrderService;

static ORDER_SERVICE: Lazy<OrderService> = Lazy::new(OrderService::new_lazy);

pub async fn list_orders(req: HttpRequest) -> ActixResult<HttpResponse> {
    ORDER_SERVICE.list_orders(&req).await
}

pub async fn create_order(
    req: HttpRequest,
    body: web::Json<CreateOrderRequest>,
) -> ActixResult<HttpResponse> {
    ORDER_SERVICE.create_order(body.into_inner(), &req).await
}

// 配置路由
pub fn configure_order_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/orders")
            .wrap(middlewares::RequireRole::new(UserRole::Student))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_orders))
            .route("", web::post().to(create_order)),
    );
}
