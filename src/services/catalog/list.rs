use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CatalogService;
use crate::models::ApiResponse;
use crate::services::internal_error;

pub async fn list_categories(
    service: &CatalogService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    match storage.list_categories().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            items,
            "Categories retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to list categories", e)),
    }
}

pub async fn list_skills(
    service: &CatalogService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    match storage.list_skills().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            items,
            "Skills retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to list skills", e)),
    }
}

pub async fn list_countries(
    service: &CatalogService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    match storage.list_countries().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            items,
            "Countries retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to list countries", e)),
    }
}
