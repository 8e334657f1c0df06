use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::lessons::requests::{
    CreateCourseLanguageRequest, CreateLessonRequest, UpdateCourseLanguageRequest,
    UpdateLessonRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::LessonService;
use crate::utils::SafeIDI64;

static LESSON_SERVICE: Lazy<LessonService> = Lazy::new(LessonService::new_lazy);

pub async fn list_course_lessons(
    req: HttpRequest,
    course_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    LESSON_SERVICE.list_course_lessons(course_id.0, &req).await
}

pub async fn list_lessons(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    LESSON_SERVICE.list_lessons(course_id.0, &req).await
}

pub async fn create_lesson(
    req: HttpRequest,
    course_id: SafeIDI64,
    body: web::Json<CreateLessonRequest>,
) -> ActixResult<HttpResponse> {
    LESSON_SERVICE
        .create_lesson(course_id.0, body.into_inner(), &req)
        .await
}

pub async fn get_lesson(req: HttpRequest, lesson_id: SafeIDI64) -> ActixResult<HttpResponse> {
    LESSON_SERVICE.get_lesson(lesson_id.0, &req).await
}

pub async fn update_lesson(
    req: HttpRequest,
    lesson_id: SafeIDI64,
    body: web::Json<UpdateLessonRequest>,
) -> ActixResult<HttpResponse> {
    LESSON_SERVICE
        .update_lesson(lesson_id.0, body.into_inner(), &req)
        .await
}

pub async fn delete_lesson(req: HttpRequest, lesson_id: SafeIDI64) -> ActixResult<HttpResponse> {
    LESSON_SERVICE.delete_lesson(lesson_id.0, &req).await
}

pub async fn list_languages(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    LESSON_SERVICE.list_languages(course_id.0, &req).await
}

pub async fn create_language(
    req: HttpRequest,
    course_id: SafeIDI64,
    body: web::Json<CreateCourseLanguageRequest>,
) -> ActixResult<HttpResponse> {
    LESSON_SERVICE
        .create_language(course_id.0, body.into_inner(), &req)
        .await
}

pub async fn get_language(req: HttpRequest, language_id: SafeIDI64) -> ActixResult<HttpResponse> {
    LESSON_SERVICE.get_language(language_id.0, &req).await
}

pub async fn update_language(
    req: HttpRequest,
    language_id: SafeIDI64,
    body: web::Json<UpdateCourseLanguageRequest>,
) -> ActixResult<HttpResponse> {
    LESSON_SERVICE
        .update_language(language_id.0, body.into_inner(), &req)
        .await
}

pub async fn delete_language(
    req: HttpRequest,
    language_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    LESSON_SERVICE.delete_language(language_id.0, &req).await
}

// 配置路由，课程下的列表与创建在 courses 路由中注册
pub fn configure_lesson_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teacher/lessons")
            .wrap(middlewares::RequireRole::new(UserRole::Teacher))
            .wrap(middlewares::RequireJWT)
            .route("/{id}", web::get().to(get_lesson))
            .route("/{id}", web::put().to(update_lesson))
            .route("/{id}", web::delete().to(delete_lesson)),
    )
    .service(
        web::scope("/api/v1/teacher/course-languages")
            .wrap(middlewares::RequireRole::new(UserRole::Teacher))
            .wrap(middlewares::RequireJWT)
            .route("/{id}", web::get().to(get_language))
            .route("/{id}", web::put().to(update_language))
            .route("/{id}", web::delete().to(delete_language)),
    );
}
