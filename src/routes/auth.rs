use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::requests::{LoginRequest, RefreshTokenRequest};
use crate::models::users::entities::UserRole;
use crate::models::users::requests::{RegisterStudentRequest, RegisterTeacherRequest};
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn student_login(
    req: HttpRequest,
    user_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .login(UserRole::Student, user_data.into_inner(), &req)
        .await
}

pub async fn teacher_login(
    req: HttpRequest,
    user_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .login(UserRole::Teacher, user_data.into_inner(), &req)
        .await
}

pub async fn register_student(
    req: HttpRequest,
    user_data: web::Json<RegisterStudentRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .register_student(user_data.into_inner(), &req)
        .await
}

pub async fn register_teacher(
    req: HttpRequest,
    user_data: web::Json<RegisterTeacherRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .register_teacher(user_data.into_inner(), &req)
        .await
}

// 请求体可省略，此时从 cookie 读取刷新令牌
pub async fn refresh_token(
    req: HttpRequest,
    body: Option<web::Json<RefreshTokenRequest>>,
) -> ActixResult<HttpResponse> {
    let body = body.map(web::Json::into_inner).unwrap_or_default();
    AUTH_SERVICE.refresh_token(body, &req).await
}

pub async fn logout(
    req: HttpRequest,
    body: Option<web::Json<RefreshTokenRequest>>,
) -> ActixResult<HttpResponse> {
    let body = body.map(web::Json::into_inner).unwrap_or_default();
    AUTH_SERVICE.logout(body, &req).await
}

pub async fn get_user(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.get_user(&request).await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(
                web::resource("/students/register")
                    .wrap(middlewares::RateLimit::register())
                    .route(web::post().to(register_student)),
            )
            .service(
                web::resource("/students/login")
                    .wrap(middlewares::RateLimit::login())
                    .route(web::post().to(student_login)),
            )
            .service(
                web::resource("/teachers/register")
                    .wrap(middlewares::RateLimit::register())
                    .route(web::post().to(register_teacher)),
            )
            .service(
                web::resource("/teachers/login")
                    .wrap(middlewares::RateLimit::login())
                    .route(web::post().to(teacher_login)),
            )
            .service(
                web::resource("/refresh")
                    .wrap(middlewares::RateLimit::refresh_token())
                    .route(web::post().to(refresh_token)),
            )
            .route("/logout", web::post().to(logout))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    .route("/me", web::get().to(get_user)),
            ),
    );
}
