use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::{UpdateStudentRequest, UpdateTeacherRequest};
use crate::services::UserService;
use crate::utils::SafeIDI64;

// 懒加载的全局 UserService 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

// 列表中只包含自己
pub async fn list_users(req: HttpRequest) -> ActixResult<HttpResponse> {
    USER_SERVICE.list_users(&req).await
}

pub async fn get_user(req: HttpRequest, user_id: SafeIDI64) -> ActixResult<HttpResponse> {
    USER_SERVICE.get_user(user_id.0, &req).await
}

pub async fn update_student(
    req: HttpRequest,
    user_id: SafeIDI64,
    update_data: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .update_student(user_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn update_teacher(
    req: HttpRequest,
    user_id: SafeIDI64,
    update_data: web::Json<UpdateTeacherRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .update_teacher(user_id.0, update_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .wrap(middlewares::RequireRole::new(UserRole::Student))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_users))
            .route("/{id}", web::get().to(get_user))
            .route("/{id}", web::put().to(update_student)),
    )
    .service(
        web::scope("/api/v1/teachers")
            .wrap(middlewares::RequireRole::new(UserRole::Teacher))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_users))
            .route("/{id}", web::get().to(get_user))
            .route("/{id}", web::put().to(update_teacher)),
    );
}
