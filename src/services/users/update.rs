use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use super::{UserService, user_not_found};
use crate::cache::ObjectCache;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{
        requests::{UpdateStudentRequest, UpdateTeacherRequest, UpdateUserRequest},
        responses::UserResponse,
    },
};
use crate::services::{current_user_id, field_error, internal_error, try_response, validate};
use crate::utils::password::hash_password;

pub async fn update_student(
    service: &UserService,
    user_id: i64,
    update_data: UpdateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    try_response!(validate(&update_data));
    let password_hash = try_response!(hash_new_password(update_data.password.as_deref()));
    apply_update(service, user_id, update_data.into_update(password_hash), request).await
}

pub async fn update_teacher(
    service: &UserService,
    user_id: i64,
    update_data: UpdateTeacherRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    try_response!(validate(&update_data));
    let password_hash = try_response!(hash_new_password(update_data.password.as_deref()));
    apply_update(service, user_id, update_data.into_update(password_hash), request).await
}

fn hash_new_password(password: Option<&str>) -> Result<Option<String>, HttpResponse> {
    password
        .map(hash_password)
        .transpose()
        .map_err(|e| internal_error("Password hashing failed", e))
}

async fn apply_update(
    service: &UserService,
    user_id: i64,
    update_data: UpdateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    if uid != user_id {
        return Ok(user_not_found());
    }

    let storage = service.get_storage(request)?;

    // 邮箱不能与其他用户重复
    if let Some(ref email) = update_data.email {
        match storage.get_user_by_email(email).await {
            Ok(Some(other)) if other.id != user_id => {
                return Ok(field_error("email", "A user with that email already exists"));
            }
            Ok(_) => {}
            Err(e) => return Ok(internal_error("Failed to update user information", e)),
        }
    }

    match storage.update_user(user_id, update_data).await {
        Ok(Some(user)) => {
            invalidate_current_token(request).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                UserResponse { user },
                "User information updated successfully",
            )))
        }
        Ok(None) => Ok(user_not_found()),
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UserUpdateFailed,
            format!("Failed to update user information: {e}"),
        ))),
    }
}

/// 资料变更后清除当前 token 的用户缓存
async fn invalidate_current_token(request: &HttpRequest) {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "));
    let cache = request.app_data::<web::Data<Arc<dyn ObjectCache>>>();
    if let (Some(token), Some(cache)) = (token, cache) {
        RequireJWT::invalidate_cached_user(cache.get_ref(), token).await;
    }
}
