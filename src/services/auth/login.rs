use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse},
    users::entities::UserRole,
};
use crate::services::internal_error;
use crate::utils::jwt;
use crate::utils::password::verify_password;

use super::AuthService;

fn login_failed() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_empty(
        ErrorCode::AuthFailed,
        "Username or password is incorrect",
    ))
}

pub async fn handle_login(
    service: &AuthService,
    role: UserRole,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let config = service.get_config();

    // 1. 根据用户名或邮箱获取用户信息
    let user = match storage
        .get_user_by_username_or_email(login_request.username.trim())
        .await
    {
        Ok(Some(user)) => user,
        Ok(None) => return Ok(login_failed()),
        Err(e) => return Ok(internal_error("Login failed", e)),
    };

    // 2. 校验密码、角色与账户状态，失败时不区分原因
    if !verify_password(&login_request.password, &user.password_hash)
        || user.role() != role
        || !user.is_active
    {
        tracing::info!("Login rejected for {} on {} endpoint", user.username, role);
        return Ok(login_failed());
    }

    // 3. 更新最后登录时间
    if let Err(e) = storage.update_last_login(user.id).await {
        tracing::warn!("Failed to update last login for user {}: {}", user.id, e);
    }

    // 4. 生成令牌对
    let remember_me = login_request
        .remember_me
        .then(|| chrono::Duration::days(config.jwt.refresh_token_remember_me_expiry));
    let token_pair = match user.generate_token_pair(remember_me) {
        Ok(pair) => pair,
        Err(e) => return Ok(internal_error("Login failed, unable to generate token", e)),
    };

    tracing::info!("User {} logged in successfully", user.username);

    let refresh_cookie = jwt::JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);
    let response = LoginResponse {
        access_token: token_pair.access_token,
        refresh_token: token_pair.refresh_token,
        expires_in: config.access_token_expiry_secs(),
        user,
        created_at: chrono::Utc::now(),
    };

    Ok(HttpResponse::Ok()
        .cookie(refresh_cookie)
        .json(ApiResponse::success(response, "Login successful")))
}
