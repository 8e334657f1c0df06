use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::auth::{RefreshTokenRequest, RefreshTokenResponse, UserInfoResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::internal_error;
use crate::utils::jwt::JwtUtils;

use super::{AuthService, refresh_token_from};

fn refresh_rejected(message: &str) -> HttpResponse {
    // 清除无效的 refresh token cookie
    HttpResponse::Unauthorized()
        .cookie(JwtUtils::create_empty_refresh_token_cookie())
        .json(ApiResponse::error_empty(ErrorCode::InvalidRefreshToken, message))
}

pub async fn handle_refresh_token(
    service: &AuthService,
    body: RefreshTokenRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = service.get_config();
    let storage = service.get_storage(request)?;

    let Some(refresh_token) = refresh_token_from(body, request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    let claims = match JwtUtils::verify_refresh_token(&refresh_token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::info!("Refresh token rejected: {}", e);
            return Ok(refresh_rejected("Login expired or invalid, please login again"));
        }
    };

    match storage.is_refresh_token_revoked(&claims.jti).await {
        Ok(false) => {}
        Ok(true) => return Ok(refresh_rejected("Refresh token has been revoked")),
        Err(e) => return Ok(internal_error("Failed to check refresh token", e)),
    }

    // 用户被停用或删除后不再签发
    let Some(user_id) = claims.user_id() else {
        return Ok(refresh_rejected("Login expired or invalid, please login again"));
    };
    match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) if user.is_active => {}
        Ok(_) => return Ok(refresh_rejected("Login expired or invalid, please login again")),
        Err(e) => return Ok(internal_error("Failed to load user", e)),
    }

    match JwtUtils::refresh_access_token(&claims) {
        Ok(access_token) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            RefreshTokenResponse {
                access_token,
                expires_in: config.access_token_expiry_secs(),
            },
            "Token refreshed successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to issue access token", e)),
    }
}

pub async fn handle_get_user(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_user(request) {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserInfoResponse { user },
            "User information retrieved successfully",
        ))),
        None => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ))),
    }
}
