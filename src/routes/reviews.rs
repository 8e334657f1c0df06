use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::reviews::requests::{CreateReviewRequest, ReviewListQuery};
use crate::models::users::entities::UserRole;
use crate::services::ReviewService;
use crate::utils::SafeIDI64;

static REVIEW_SERVICE: Lazy<ReviewService> = Lazy::new(ReviewService::new_lazy);

pub async fn list_reviews(
    req: HttpRequest,
    query: web::Query<ReviewListQuery>,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.list_reviews(query.into_inner(), &req).await
}

pub async fn get_review(req: HttpRequest, review_id: SafeIDI64) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.get_review(review_id.0, &req).await
}

pub async fn create_review(
    req: HttpRequest,
    body: web::Json<CreateReviewRequest>,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.create_review(body.into_inner(), &req).await
}

pub async fn delete_review(req: HttpRequest, review_id: SafeIDI64) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.delete_review(review_id.0, &req).await
}

// 配置路由
pub fn configure_review_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reviews")
            .service(
                web::resource("")
                    .route(web::get().to(list_reviews))
                    .route(
                        web::post()
                            .to(create_review)
                            .wrap(middlewares::RequireRole::new(UserRole::Student))
                            .wrap(middlewares::RequireJWT),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_review))
                    .route(
                        web::delete()
                            .to(delete_review)
                            // 只有作者本人可以删除
                            .wrap(middlewares::RequireRole::new(UserRole::Student))
                            .wrap(middlewares::RequireJWT),
                    ),
            ),
    );
}
