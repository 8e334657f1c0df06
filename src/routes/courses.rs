use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use super::lessons;
use crate::middlewares;
use crate::models::courses::requests::{
    CourseListQuery, CreateCourseRequest, EnrollStudentRequest, UpdateCourseRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::CourseService;
use crate::utils::SafeIDI64;

// 懒加载的全局 CourseService 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

pub async fn list_courses(
    req: HttpRequest,
    query: web::Query<CourseListQuery>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(query.into_inner(), &req).await
}

pub async fn get_course(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(course_id.0, &req).await
}

pub async fn list_teacher_courses(
    req: HttpRequest,
    query: web::Query<CourseListQuery>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .list_teacher_courses(query.into_inner(), &req)
        .await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_course(course_data.into_inner(), &req)
        .await
}

pub async fn get_teacher_course(
    req: HttpRequest,
    course_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_teacher_course(course_id.0, &req).await
}

pub async fn update_course(
    req: HttpRequest,
    course_id: SafeIDI64,
    update_data: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course(course_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_course(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(course_id.0, &req).await
}

pub async fn list_students(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_students(course_id.0, &req).await
}

pub async fn enroll_student(
    req: HttpRequest,
    course_id: SafeIDI64,
    body: web::Json<EnrollStudentRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .enroll_student(course_id.0, body.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .route("", web::get().to(list_courses))
            .route("/{id}", web::get().to(get_course))
            .service(
                web::resource("/{id}/lessons")
                    .wrap(middlewares::RequireJWT)
                    .route(web::get().to(lessons::list_course_lessons)),
            ),
    )
    .service(
        web::scope("/api/v1/teacher/courses")
            .wrap(middlewares::RequireRole::new(UserRole::Teacher))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_teacher_courses))
            .route("", web::post().to(create_course))
            .route("/{id}", web::get().to(get_teacher_course))
            .route("/{id}", web::put().to(update_course))
            .route("/{id}", web::delete().to(delete_course))
            .route("/{id}/languages", web::get().to(lessons::list_languages))
            .route("/{id}/languages", web::post().to(lessons::create_language))
            .route("/{id}/lessons", web::get().to(lessons::list_lessons))
            .route("/{id}/lessons", web::post().to(lessons::create_lesson))
            .route("/{id}/students", web::get().to(list_students))
            .route("/{id}/students", web::post().to(enroll_student)),
    );
}
