pub mod manage;
pub mod student;
pub mod submissions;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::ErrorCode;
use crate::models::assignments::entities::Assignment;
use crate::models::assignments::requests::{
    AssignmentListQuery, CreateAssignmentRequest, CreateSubmissionRequest, GradeSubmissionRequest,
    UpdateAssignmentRequest,
};
use crate::services::courses::load_owned_course;
use crate::services::{internal_error, not_found};
use crate::storage::Storage;

super::define_service!(AssignmentService);

impl AssignmentService {
    pub async fn list_assignments(
        &self,
        query: AssignmentListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        student::list_assignments(self, query, request).await
    }

    pub async fn get_assignment(
        &self,
        assignment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        student::get_assignment(self, assignment_id, request).await
    }

    pub async fn create_assignment(
        &self,
        body: CreateAssignmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_assignment(self, body, request).await
    }

    pub async fn update_assignment(
        &self,
        assignment_id: i64,
        body: UpdateAssignmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_assignment(self, assignment_id, body, request).await
    }

    pub async fn delete_assignment(
        &self,
        assignment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_assignment(self, assignment_id, request).await
    }

    pub async fn list_own_submissions(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        submissions::list_own_submissions(self, request).await
    }

    pub async fn create_submission(
        &self,
        body: CreateSubmissionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submissions::create_submission(self, body, request).await
    }

    pub async fn list_assignment_submissions(
        &self,
        assignment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submissions::list_assignment_submissions(self, assignment_id, request).await
    }

    // 评分是提交记录唯一可修改的字段
    pub async fn grade_submission(
        &self,
        submission_id: i64,
        body: GradeSubmissionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submissions::grade_submission(self, submission_id, body, request).await
    }
}

fn assignment_not_found() -> HttpResponse {
    not_found(ErrorCode::AssignmentNotFound, "Assignment not found")
}

/// 读取作业并确认所属课程归当前教师
async fn load_owned_assignment(
    storage: &Arc<dyn Storage>,
    assignment_id: i64,
    teacher_id: i64,
) -> Result<Assignment, HttpResponse> {
    let assignment = match storage.get_assignment(assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => return Err(assignment_not_found()),
        Err(e) => return Err(internal_error("Failed to get assignment", e)),
    };
    load_owned_course(storage, assignment.course_id, teacher_id).await?;
    Ok(assignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{
        body_json, create_course, create_student, create_teacher, request_as, storage,
    };
    use actix_web::http::StatusCode;

    #[actix_web::test]
    async fn test_submission_and_grading_flow() {
        let storage = storage().await;
        let teacher = create_teacher(&storage, "teacher_1").await;
        let alice = create_student(&storage, "alice_1").await;
        let course_id = create_course(&storage, &teacher, "Rust", 10_000).await;

        let service = AssignmentService::new_lazy();
        let teacher_req = request_as(&storage, Some(&teacher));
        let alice_req = request_as(&storage, Some(&alice));

        let resp = service
            .create_assignment(
                CreateAssignmentRequest {
                    course_id,
                    name: "Lab 1".to_string(),
                    description: String::new(),
                    due_date: chrono::Utc::now(),
                },
                &teacher_req,
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let assignment_id = body_json(resp).await["data"]["id"].as_i64().unwrap();

        let resp = service
            .create_submission(
                CreateSubmissionRequest {
                    assignment_id,
                    submission_file: "uploads/lab1.zip".to_string(),
                },
                &alice_req,
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let json = body_json(resp).await;
        let submission_id = json["data"]["id"].as_i64().unwrap();
        assert!(json["data"]["grade"].is_null());

        let resp = service
            .grade_submission(submission_id, GradeSubmissionRequest { grade: 101 }, &teacher_req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = service
            .grade_submission(submission_id, GradeSubmissionRequest { grade: 95 }, &teacher_req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["data"]["grade"], 95);

        let json = body_json(service.list_own_submissions(&alice_req).await.unwrap()).await;
        assert_eq!(json["data"]["items"][0]["grade"], 95);
    }

    #[actix_web::test]
    async fn test_other_teacher_cannot_grade() {
        let storage = storage().await;
        let owner = create_teacher(&storage, "teacher_1").await;
        let other = create_teacher(&storage, "teacher_2").await;
        let alice = create_student(&storage, "alice_1").await;
        let course_id = create_course(&storage, &owner, "Rust", 10_000).await;

        let assignment = storage
            .create_assignment(
                owner.id,
                CreateAssignmentRequest {
                    course_id,
                    name: "Lab 1".to_string(),
                    description: String::new(),
                    due_date: chrono::Utc::now(),
                },
            )
            .await
            .unwrap();
        let submission = storage
            .create_submission(
                alice.id,
                CreateSubmissionRequest {
                    assignment_id: assignment.id,
                    submission_file: "lab1.zip".to_string(),
                },
            )
            .await
            .unwrap();

        let resp = AssignmentService::new_lazy()
            .grade_submission(
                submission.id,
                GradeSubmissionRequest { grade: 50 },
                &request_as(&storage, Some(&other)),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
