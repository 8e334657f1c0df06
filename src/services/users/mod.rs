pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::users::requests::{UpdateStudentRequest, UpdateTeacherRequest};

super::define_service!(UserService);

impl UserService {
    // 列出用户，结果只包含当前用户自己
    pub async fn list_users(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_users(self, request).await
    }

    // 根据ID获取用户，只能查看自己
    pub async fn get_user(&self, user_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_user(self, user_id, request).await
    }

    pub async fn update_student(
        &self,
        user_id: i64,
        update_data: UpdateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_student(self, user_id, update_data, request).await
    }

    pub async fn update_teacher(
        &self,
        user_id: i64,
        update_data: UpdateTeacherRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_teacher(self, user_id, update_data, request).await
    }
}

/// 他人 ID 一律按不存在处理
pub(crate) fn user_not_found() -> HttpResponse {
    crate::services::not_found(crate::models::ErrorCode::UserNotFound, "User not found")
}
