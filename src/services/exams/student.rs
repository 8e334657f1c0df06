use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ExamService, exam_not_found};
use crate::models::exams::entities::PublicExamDetail;
use crate::models::exams::requests::ExamListQuery;
use crate::models::{ApiResponse, ListResponse};
use crate::services::internal_error;

pub async fn list_exams(
    service: &ExamService,
    query: ExamListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_exams(query.course_id, None).await {
        Ok(exams) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ListResponse::from(exams),
            "Exams retrieved successfully",
        ))),
        Err(e) => Ok(internal_error("Failed to list exams", e)),
    }
}

/// 学生看到的题目不带正确标记
pub async fn get_exam(
    service: &ExamService,
    exam_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_exam_detail(exam_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            PublicExamDetail::from(detail),
            "Exam retrieved successfully",
        ))),
        Ok(None) => Ok(exam_not_found()),
        Err(e) => Ok(internal_error("Failed to get exam", e)),
    }
}
