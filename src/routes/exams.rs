use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::exams::requests::{
    AnswerListQuery, CreateExamRequest, CreateQuestionRequest, ExamListQuery, SubmitAnswerRequest,
    UpdateExamRequest, UpdateQuestionRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ExamService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ExamService 实例
static EXAM_SERVICE: Lazy<ExamService> = Lazy::new(ExamService::new_lazy);

// 学生端
pub async fn list_exams(
    req: HttpRequest,
    query: web::Query<ExamListQuery>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.list_exams(query.into_inner(), &req).await
}

pub async fn get_exam(req: HttpRequest, exam_id: SafeIDI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.get_exam(exam_id.0, &req).await
}

pub async fn list_answers(
    req: HttpRequest,
    query: web::Query<AnswerListQuery>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.list_answers(query.into_inner(), &req).await
}

pub async fn submit_answer(
    req: HttpRequest,
    body: web::Json<SubmitAnswerRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.submit_answer(body.into_inner(), &req).await
}

// 教师端
pub async fn list_teacher_exams(req: HttpRequest) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.list_teacher_exams(&req).await
}

pub async fn create_exam(
    req: HttpRequest,
    body: web::Json<CreateExamRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.create_exam(body.into_inner(), &req).await
}

pub async fn get_teacher_exam(req: HttpRequest, exam_id: SafeIDI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.get_teacher_exam(exam_id.0, &req).await
}

pub async fn update_exam(
    req: HttpRequest,
    exam_id: SafeIDI64,
    body: web::Json<UpdateExamRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .update_exam(exam_id.0, body.into_inner(), &req)
        .await
}

pub async fn delete_exam(req: HttpRequest, exam_id: SafeIDI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.delete_exam(exam_id.0, &req).await
}

pub async fn list_questions(req: HttpRequest, exam_id: SafeIDI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.list_questions(exam_id.0, &req).await
}

pub async fn create_question(
    req: HttpRequest,
    exam_id: SafeIDI64,
    body: web::Json<CreateQuestionRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .create_question(exam_id.0, body.into_inner(), &req)
        .await
}

pub async fn get_question(req: HttpRequest, question_id: SafeIDI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.get_question(question_id.0, &req).await
}

pub async fn update_question(
    req: HttpRequest,
    question_id: SafeIDI64,
    body: web::Json<UpdateQuestionRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .update_question(question_id.0, body.into_inner(), &req)
        .await
}

pub async fn delete_question(
    req: HttpRequest,
    question_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.delete_question(question_id.0, &req).await
}

// 配置路由
pub fn configure_exam_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/exams")
            .wrap(middlewares::RequireRole::new(UserRole::Student))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_exams))
            .route("/{id}", web::get().to(get_exam)),
    )
    .service(
        web::scope("/api/v1/answers")
            .wrap(middlewares::RequireRole::new(UserRole::Student))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_answers))
            .route("", web::post().to(submit_answer)),
    )
    .service(
        web::scope("/api/v1/teacher/exams")
            .wrap(middlewares::RequireRole::new(UserRole::Teacher))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_teacher_exams))
            .route("", web::post().to(create_exam))
            .route("/{id}", web::get().to(get_teacher_exam))
            .route("/{id}", web::put().to(update_exam))
            .route("/{id}", web::delete().to(delete_exam))
            .route("/{id}/questions", web::get().to(list_questions))
            .route("/{id}/questions", web::post().to(create_question)),
    )
    .service(
        web::scope("/api/v1/teacher/questions")
            .wrap(middlewares::RequireRole::new(UserRole::Teacher))
            .wrap(middlewares::RequireJWT)
            .route("/{id}", web::get().to(get_question))
            .route("/{id}", web::put().to(update_question))
            .route("/{id}", web::delete().to(delete_question)),
    );
}
