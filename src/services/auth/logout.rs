use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::auth::RefreshTokenRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::internal_error;
use crate::utils::jwt::JwtUtils;

use super::{AuthService, refresh_token_from};

fn invalid_refresh_token() -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::InvalidRefreshToken,
        "Refresh token is missing or invalid",
    ))
}

/// 处理用户登出
///
/// 吊销 refresh token 并清除 cookie，成功返回 205。
pub async fn handle_logout(
    service: &AuthService,
    body: RefreshTokenRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let claims = match refresh_token_from(body, request)
        .map(|token| JwtUtils::verify_refresh_token(&token))
    {
        Some(Ok(claims)) => claims,
        Some(Err(_)) | None => return Ok(invalid_refresh_token()),
    };

    let Some(user_id) = claims.user_id() else {
        return Ok(invalid_refresh_token());
    };

    // 已吊销的令牌同样视为无效
    match storage.is_refresh_token_revoked(&claims.jti).await {
        Ok(false) => {}
        Ok(true) => return Ok(invalid_refresh_token()),
        Err(e) => return Ok(internal_error("Logout failed", e)),
    }

    if let Err(e) = storage
        .revoke_refresh_token(&claims.jti, user_id, claims.expires_at())
        .await
    {
        return Ok(internal_error("Logout failed", e));
    }

    tracing::info!("User {} logged out", user_id);

    match storage
        .purge_expired_revoked_tokens(chrono::Utc::now().timestamp())
        .await
    {
        Ok(0) => {}
        Ok(removed) => tracing::debug!("Purged {} expired revoked tokens", removed),
        Err(e) => tracing::warn!("Failed to purge expired revoked tokens: {}", e),
    }

    // max_age=0 让浏览器删除 cookie
    Ok(HttpResponse::ResetContent()
        .cookie(JwtUtils::create_empty_refresh_token_cookie())
        .finish())
}
