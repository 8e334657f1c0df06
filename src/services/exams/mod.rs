pub mod answers;
pub mod exams;
pub mod questions;
pub mod student;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::ErrorCode;
use crate::models::exams::entities::Exam;
use crate::models::exams::requests::{
    AnswerListQuery, CreateExamRequest, CreateQuestionRequest, ExamListQuery, SubmitAnswerRequest,
    UpdateExamRequest, UpdateQuestionRequest,
};
use crate::services::{forbidden, internal_error, not_found};
use crate::storage::Storage;

super::define_service!(ExamService);

impl ExamService {
    // 教师端
    pub async fn list_teacher_exams(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        exams::list_teacher_exams(self, request).await
    }

    pub async fn get_teacher_exam(&self, exam_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        exams::get_teacher_exam(self, exam_id, request).await
    }

    pub async fn create_exam(
        &self,
        body: CreateExamRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        exams::create_exam(self, body, request).await
    }

    pub async fn update_exam(
        &self,
        exam_id: i64,
        body: UpdateExamRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        exams::update_exam(self, exam_id, body, request).await
    }

    pub async fn delete_exam(&self, exam_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        exams::delete_exam(self, exam_id, request).await
    }

    pub async fn list_questions(&self, exam_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        questions::list_questions(self, exam_id, request).await
    }

    pub async fn get_question(
        &self,
        question_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        questions::get_question(self, question_id, request).await
    }

    pub async fn create_question(
        &self,
        exam_id: i64,
        body: CreateQuestionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        questions::create_question(self, exam_id, body, request).await
    }

    pub async fn update_question(
        &self,
        question_id: i64,
        body: UpdateQuestionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        questions::update_question(self, question_id, body, request).await
    }

    pub async fn delete_question(
        &self,
        question_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        questions::delete_question(self, question_id, request).await
    }

    // 学生端
    pub async fn list_exams(
        &self,
        query: ExamListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        student::list_exams(self, query, request).await
    }

    pub async fn get_exam(&self, exam_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        student::get_exam(self, exam_id, request).await
    }

    pub async fn submit_answer(
        &self,
        body: SubmitAnswerRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        answers::submit_answer(self, body, request).await
    }

    pub async fn list_answers(
        &self,
        query: AnswerListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        answers::list_answers(self, query, request).await
    }
}

fn exam_not_found() -> HttpResponse {
    not_found(ErrorCode::ExamNotFound, "Exam not found")
}

/// 读取考试并确认由当前教师创建
pub(crate) async fn load_owned_exam(
    storage: &Arc<dyn Storage>,
    exam_id: i64,
    teacher_id: i64,
) -> Result<Exam, HttpResponse> {
    match storage.get_exam(exam_id).await {
        Ok(Some(exam)) if exam.teacher_id == teacher_id => Ok(exam),
        Ok(Some(_)) => Err(forbidden(
            ErrorCode::ExamPermissionDenied,
            "You do not have permission to manage this exam",
        )),
        Ok(None) => Err(exam_not_found()),
        Err(e) => Err(internal_error("Failed to get exam", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::exams::requests::ChoiceInput;
    use crate::services::test_support::{
        body_json, create_course, create_student, create_teacher, request_as, storage,
    };
    use actix_web::http::StatusCode;

    fn choice(text: &str, is_correct: bool) -> ChoiceInput {
        ChoiceInput {
            text: text.to_string(),
            is_correct,
        }
    }

    /// 创建考试与一道多选题，返回 (exam_id, question_id, choice_ids)
    async fn setup_question(
        storage: &Arc<dyn Storage>,
        teacher: &crate::models::users::entities::User,
    ) -> (i64, i64, Vec<i64>) {
        let course_id = create_course(storage, teacher, "Rust", 10_000).await;
        let service = ExamService::new_lazy();
        let req = request_as(storage, Some(teacher));

        let resp = service
            .create_exam(
                CreateExamRequest {
                    course_id,
                    exam_name: "Ownership".to_string(),
                    passing_score: Some(60),
                    duration: 30,
                },
                &req,
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let exam_id = body_json(resp).await["data"]["id"].as_i64().unwrap();

        let resp = service
            .create_question(
                exam_id,
                CreateQuestionRequest {
                    text: "Which types are Copy?".to_string(),
                    choices: vec![
                        choice("i32", true),
                        choice("bool", true),
                        choice("String", false),
                    ],
                },
                &req,
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let json = body_json(resp).await;
        let question_id = json["data"]["id"].as_i64().unwrap();
        let choice_ids = json["data"]["choices"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_i64().unwrap())
            .collect();
        (exam_id, question_id, choice_ids)
    }

    #[actix_web::test]
    async fn test_student_exam_hides_correct_flags() {
        let storage = storage().await;
        let teacher = create_teacher(&storage, "teacher_1").await;
        let alice = create_student(&storage, "alice_1").await;
        let (exam_id, _, _) = setup_question(&storage, &teacher).await;

        let resp = ExamService::new_lazy()
            .get_exam(exam_id, &request_as(&storage, Some(&alice)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["data"]["questions"][0]["choices"].as_array().unwrap().len(), 3);
        assert!(!json.to_string().contains("is_correct"));
    }

    #[actix_web::test]
    async fn test_submit_answer_grading() {
        let storage = storage().await;
        let teacher = create_teacher(&storage, "teacher_1").await;
        let alice = create_student(&storage, "alice_1").await;
        let (exam_id, question_id, ids) = setup_question(&storage, &teacher).await;

        let service = ExamService::new_lazy();
        let req = request_as(&storage, Some(&alice));
        let submit = |selected: Vec<i64>| SubmitAnswerRequest {
            question_id,
            selected_choices: selected,
            answer_text: None,
        };

        let resp = service.submit_answer(submit(vec![ids[0], ids[1]]), &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(body_json(resp).await["data"]["is_correct"], true);

        let resp = service.submit_answer(submit(vec![ids[0]]), &req).await.unwrap();
        assert_eq!(body_json(resp).await["data"]["is_correct"], false);

        let resp = service
            .submit_answer(submit(vec![ids[0], ids[1], ids[2]]), &req)
            .await
            .unwrap();
        assert_eq!(body_json(resp).await["data"]["is_correct"], false);

        // 不属于该题的选项
        let resp = service.submit_answer(submit(vec![9_999]), &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["data"][0]["field"], "selected_choices");

        let resp = service
            .list_answers(AnswerListQuery { exam_id: Some(exam_id) }, &req)
            .await
            .unwrap();
        assert_eq!(body_json(resp).await["data"]["items"].as_array().unwrap().len(), 3);
    }

    #[actix_web::test]
    async fn test_other_teacher_cannot_edit_exam() {
        let storage = storage().await;
        let owner = create_teacher(&storage, "teacher_1").await;
        let other = create_teacher(&storage, "teacher_2").await;
        let (exam_id, question_id, _) = setup_question(&storage, &owner).await;

        let service = ExamService::new_lazy();
        let req = request_as(&storage, Some(&other));
        let resp = service
            .update_exam(exam_id, UpdateExamRequest::default(), &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let resp = service.delete_question(question_id, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
