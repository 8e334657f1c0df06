use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CatalogService;
use crate::models::{
    ApiResponse,
    catalog::requests::{CreateCategoryRequest, CreateSkillRequest},
};
use crate::services::{internal_error, try_response, validate};

pub async fn create_category(
    service: &CatalogService,
    body: CreateCategoryRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    try_response!(validate(&body));
    let storage = service.get_storage(request)?;

    match storage.create_category(&body.category_name).await {
        Ok(category) => {
            tracing::info!("Category {} created", category.category_name);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                category,
                "Category created successfully",
            )))
        }
        Err(e) => Ok(internal_error("Failed to create category", e)),
    }
}

pub async fn create_skill(
    service: &CatalogService,
    body: CreateSkillRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    try_response!(validate(&body));
    let storage = service.get_storage(request)?;

    match storage.create_skill(&body.skill_name).await {
        Ok(skill) => Ok(HttpResponse::Created().json(ApiResponse::success(
            skill,
            "Skill created successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to create skill", e)),
    }
}
