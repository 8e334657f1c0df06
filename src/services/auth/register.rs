use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{
    ApiResponse, FieldError,
    users::requests::{CreateUserRequest, RegisterStudentRequest, RegisterTeacherRequest},
};
use crate::services::{internal_error, try_response, validate, validation_failed};
use crate::storage::Storage;
use crate::utils::password::hash_password;

use super::AuthService;

pub async fn handle_register_student(
    service: &AuthService,
    register_request: RegisterStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    try_response!(validate(&register_request));
    let storage = service.get_storage(request)?;

    try_response!(check_duplicates(&storage, &register_request.username, &register_request.email).await);

    let password_hash = match hash_password(&register_request.password) {
        Ok(hash) => hash,
        Err(e) => return Ok(internal_error("Password hashing failed", e)),
    };
    create_user(storage, register_request.into_create_request(password_hash)).await
}

pub async fn handle_register_teacher(
    service: &AuthService,
    register_request: RegisterTeacherRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    try_response!(validate(&register_request));
    let storage = service.get_storage(request)?;

    try_response!(check_duplicates(&storage, &register_request.username, &register_request.email).await);

    let password_hash = match hash_password(&register_request.password) {
        Ok(hash) => hash,
        Err(e) => return Ok(internal_error("Password hashing failed", e)),
    };
    create_user(storage, register_request.into_create_request(password_hash)).await
}

async fn create_user(
    storage: Arc<dyn Storage>,
    create_request: CreateUserRequest,
) -> ActixResult<HttpResponse> {
    let username = create_request.username.clone();
    match storage.create_user(create_request).await {
        Ok(user) => {
            tracing::info!("User {} registered as {}", user.username, user.role());
            Ok(HttpResponse::Created().json(ApiResponse::success(user, "Registration successful")))
        }
        // 并发注册时唯一约束兜底
        Err(e) if e.code() == "E013" => Ok(validation_failed(vec![FieldError::new(
            "username",
            format!("A user with username {username} or this email already exists"),
        )])),
        Err(e) => Ok(internal_error("Registration failed", e)),
    }
}

/// 用户名与邮箱查重，重复时作为字段校验错误返回
async fn check_duplicates(
    storage: &Arc<dyn Storage>,
    username: &str,
    email: &str,
) -> Result<(), HttpResponse> {
    let mut errors = Vec::new();

    match storage.get_user_by_username(username).await {
        Ok(Some(_)) => errors.push(FieldError::new(
            "username",
            "A user with that username already exists",
        )),
        Ok(None) => {}
        Err(e) => return Err(internal_error("Registration failed", e)),
    }

    match storage.get_user_by_email(email).await {
        Ok(Some(_)) => errors.push(FieldError::new(
            "email",
            "A user with that email already exists",
        )),
        Ok(None) => {}
        Err(e) => return Err(internal_error("Registration failed", e)),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(validation_failed(errors))
    }
}
