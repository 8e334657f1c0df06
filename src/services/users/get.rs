use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{UserService, user_not_found};
use crate::models::{ApiResponse, users::responses::UserResponse};
use crate::services::{current_user_id, internal_error, try_response};

pub async fn get_user(
    service: &UserService,
    user_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let uid = try_response!(current_user_id(request));
    if uid != user_id {
        return Ok(user_not_found());
    }

    let storage = service.get_storage(request)?;
    match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserResponse { user },
            "User retrieved successfully",
        ))),
        Ok(None) => Ok(user_not_found()),
        Err(e) => Ok(internal_error("Failed to get user information", e)),
    }
}
