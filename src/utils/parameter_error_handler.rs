use actix_web::{HttpRequest, HttpResponse, error};

use crate::models::{ApiResponse, ErrorCode};

/// JSON 请求体解析失败时返回统一格式的 400
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    let message = match &err {
        error::JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        error::JsonPayloadError::Deserialize(e) => format!("Invalid request body: {e}"),
        error::JsonPayloadError::OverflowKnownLength { .. }
        | error::JsonPayloadError::Overflow { .. } => "Request body too large".to_string(),
        _ => format!("Invalid JSON payload: {err}"),
    };
    tracing::debug!("JSON payload error: {}", err);

    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message));
    error::InternalError::from_response(err, response).into()
}

/// 查询参数解析失败时返回统一格式的 400
pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> error::Error {
    let message = format!("Invalid query parameters: {err}");
    tracing::debug!("Query payload error: {}", err);

    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message));
    error::InternalError::from_response(err, response).into()
}
