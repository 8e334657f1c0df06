pub mod assignments;
pub mod auth;
pub mod carts;
pub mod catalog;
pub mod certificates;
pub mod courses;
pub mod exams;
pub mod lessons;
pub mod orders;
pub mod reviews;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support;

pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use carts::CartService;
pub use catalog::CatalogService;
pub use certificates::CertificateService;
pub use courses::CourseService;
pub use exams::ExamService;
pub use lessons::LessonService;
pub use orders::OrderService;
pub use reviews::ReviewService;
pub use users::UserService;

use actix_web::{HttpRequest, HttpResponse};
use std::sync::Arc;

use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, FieldError, Validate};
use crate::storage::Storage;

/// 为服务生成懒加载结构体与 `get_storage`
///
/// 存储实例在请求时从 `app_data` 中取出。
macro_rules! define_service {
    ($name:ident) => {
        pub struct $name {
            storage: Option<std::sync::Arc<dyn $crate::storage::Storage>>,
        }

        impl $name {
            pub fn new_lazy() -> Self {
                Self { storage: None }
            }

            pub(crate) fn get_storage(
                &self,
                request: &actix_web::HttpRequest,
            ) -> actix_web::Result<std::sync::Arc<dyn $crate::storage::Storage>> {
                match &self.storage {
                    Some(storage) => Ok(storage.clone()),
                    None => $crate::services::storage_from_request(request),
                }
            }
        }
    };
}

pub(crate) use define_service;

pub(crate) fn storage_from_request(request: &HttpRequest) -> actix_web::Result<Arc<dyn Storage>> {
    request
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("Storage not found in app data"))
}

/// 当前登录用户 ID，缺失时返回 401 响应
pub(crate) fn current_user_id(request: &HttpRequest) -> Result<i64, HttpResponse> {
    RequireJWT::extract_user_id(request).ok_or_else(|| {
        HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized: missing user id",
        ))
    })
}

pub(crate) fn validation_failed(errors: Vec<FieldError>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error(
        ErrorCode::ValidationFailed,
        errors,
        "Validation failed",
    ))
}

/// 校验请求体，失败时返回 400 响应
pub(crate) fn validate<T: Validate>(body: &T) -> Result<(), HttpResponse> {
    body.validate().map_err(validation_failed)
}

pub(crate) fn field_error(field: &str, message: impl Into<String>) -> HttpResponse {
    validation_failed(vec![FieldError::new(field, message)])
}

pub(crate) fn not_found(code: ErrorCode, message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(code, message))
}

pub(crate) fn forbidden(code: ErrorCode, message: &str) -> HttpResponse {
    HttpResponse::Forbidden().json(ApiResponse::error_empty(code, message))
}

/// 记录并返回 500 响应
pub(crate) fn internal_error(context: &str, e: impl std::fmt::Display) -> HttpResponse {
    tracing::error!("{context}: {e}");
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        format!("{context}: {e}"),
    ))
}

/// 提前返回 `Err` 中携带的响应
macro_rules! try_response {
    ($expr:expr) => {
        match $expr {
            Ok(value) => value,
            Err(response) => return Ok(response),
        }
    };
}

pub(crate) use try_response;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_missing_storage_is_internal_error() {
        let req = TestRequest::default().to_http_request();
        let err = storage_from_request(&req).err().unwrap();
        assert_eq!(
            err.as_response_error().status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn test_missing_user_is_unauthorized() {
        let req = TestRequest::default().to_http_request();
        let resp = current_user_id(&req).unwrap_err();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_field_error_body() {
        let resp = field_error("category_id", "Category does not exist");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], ErrorCode::ValidationFailed as i32);
        assert_eq!(json["data"][0]["field"], "category_id");
    }
}
