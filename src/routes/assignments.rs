use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::assignments::requests::{
    AssignmentListQuery, CreateAssignmentRequest, CreateSubmissionRequest, GradeSubmissionRequest,
    UpdateAssignmentRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AssignmentService;
use crate::utils::SafeIDI64;

static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

pub async fn list_assignments(
    req: HttpRequest,
    query: web::Query<AssignmentListQuery>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_assignments(query.into_inner(), &req)
        .await
}

pub async fn get_assignment(req: HttpRequest, assignment_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.get_assignment(assignment_id.0, &req).await
}

pub async fn list_own_submissions(req: HttpRequest) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.list_own_submissions(&req).await
}

pub async fn create_submission(
    req: HttpRequest,
    body: web::Json<CreateSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .create_submission(body.into_inner(), &req)
        .await
}

pub async fn create_assignment(
    req: HttpRequest,
    body: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .create_assignment(body.into_inner(), &req)
        .await
}

pub async fn update_assignment(
    req: HttpRequest,
    assignment_id: SafeIDI64,
    body: web::Json<UpdateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .update_assignment(assignment_id.0, body.into_inner(), &req)
        .await
}

pub async fn delete_assignment(
    req: HttpRequest,
    assignment_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .delete_assignment(assignment_id.0, &req)
        .await
}

pub async fn list_assignment_submissions(
    req: HttpRequest,
    assignment_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_assignment_submissions(assignment_id.0, &req)
        .await
}

pub async fn grade_submission(
    req: HttpRequest,
    submission_id: SafeIDI64,
    body: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .grade_submission(submission_id.0, body.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_assignment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/assignments")
            .wrap(middlewares::RequireRole::new(UserRole::Student))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_assignments))
            .route("/{id}", web::get().to(get_assignment)),
    )
    .service(
        web::scope("/api/v1/submissions")
            .wrap(middlewares::RequireRole::new(UserRole::Student))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_own_submissions))
            .route("", web::post().to(create_submission)),
    )
    .service(
        web::scope("/api/v1/teacher/assignments")
            .wrap(middlewares::RequireRole::new(UserRole::Teacher))
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(create_assignment))
            .route("/{id}", web::put().to(update_assignment))
            .route("/{id}", web::delete().to(delete_assignment))
            .route("/{id}/submissions", web::get().to(list_assignment_submissions)),
    )
    .service(
        web::scope("/api/v1/teacher/submissions")
            .wrap(middlewares::RequireRole::new(UserRole::Teacher))
            .wrap(middlewares::RequireJWT)
            .route("/{id}/grade", web::put().to(grade_submission)),
    );
}
