//! 安全的路径参数提取器
//!
//! 路径参数解析失败时直接返回 400 和统一的 `ApiResponse`，
//! 而不是 actix 默认的纯文本 404。

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

macro_rules! define_safe_id_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                ready(parse_positive_id(req, $param).map($name))
            }
        }
    };
}

fn parse_positive_id(req: &HttpRequest, param: &str) -> Result<i64, actix_web::Error> {
    match req.match_info().get(param).map(str::parse::<i64>) {
        Some(Ok(id)) if id > 0 => Ok(id),
        _ => {
            let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                format!("Invalid path parameter: {param}"),
            ));
            Err(InternalError::from_response("invalid path parameter", response).into())
        }
    }
}

define_safe_id_extractor!(SafeIDI64, "id");

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_valid_id() {
        let req = TestRequest::default().param("id", "42").to_http_request();
        let id = SafeIDI64::extract(&req).await.unwrap();
        assert_eq!(id, SafeIDI64(42));
    }

    #[actix_web::test]
    async fn test_invalid_id() {
        for bad in ["abc", "0", "-3"] {
            let req = TestRequest::default().param("id", bad).to_http_request();
            let err = SafeIDI64::extract(&req).await.unwrap_err();
            assert_eq!(
                err.as_response_error().status_code(),
                actix_web::http::StatusCode::BAD_REQUEST
            );
        }
    }
}
