use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::catalog::requests::{CreateCategoryRequest, CreateSkillRequest};
use crate::models::users::entities::UserRole;
use crate::services::CatalogService;

static CATALOG_SERVICE: Lazy<CatalogService> = Lazy::new(CatalogService::new_lazy);

pub async fn list_categories(req: HttpRequest) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.list_categories(&req).await
}

pub async fn list_skills(req: HttpRequest) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.list_skills(&req).await
}

pub async fn list_countries(req: HttpRequest) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.list_countries(&req).await
}

pub async fn create_category(
    req: HttpRequest,
    body: web::Json<CreateCategoryRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.create_category(body.into_inner(), &req).await
}

pub async fn create_skill(
    req: HttpRequest,
    body: web::Json<CreateSkillRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.create_skill(body.into_inner(), &req).await
}

// 配置路由
pub fn configure_catalog_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/v1/categories", web::get().to(list_categories))
        .route("/api/v1/skills", web::get().to(list_skills))
        .route("/api/v1/countries", web::get().to(list_countries))
        .service(
            web::resource("/api/v1/teacher/categories")
                .wrap(middlewares::RequireRole::new(UserRole::Teacher))
                .wrap(middlewares::RequireJWT)
                .route(web::post().to(create_category)),
        )
        .service(
            web::resource("/api/v1/teacher/skills")
                .wrap(middlewares::RequireRole::new(UserRole::Teacher))
                .wrap(middlewares::RequireJWT)
                .route(web::post().to(create_skill)),
        );
}
