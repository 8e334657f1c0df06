use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::certificates::requests::IssueCertificateRequest;
use crate::models::{ApiResponse, ListResponse};
use crate::services::courses::load_owned_course;
use crate::services::{current_user_id, field_error, internal_error, try_response};

super::define_service!(CertificateService);

impl CertificateService {
    pub async fn list_certificates(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let uid = try_response!(current_user_id(request));
        let storage = self.get_storage(request)?;

        match storage.list_certificates(uid).await {
            Ok(certificates) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                ListResponse::from(certificates),
                "Certificates retrieved successfully",
            ))),
            Err(e) => Ok(internal_error("Failed to list certificates", e)),
        }
    }

    /// 教师为自己课程的学生颁发证书
    pub async fn issue_certificate(
        &self,
        body: IssueCertificateRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let uid = try_response!(current_user_id(request));
        let storage = self.get_storage(request)?;
        try_response!(load_owned_course(&storage, body.course_id, uid).await);

        match storage.get_user_by_id(body.student_id).await {
            Ok(Some(user)) if user.is_student() => {}
            Ok(_) => {
                return Ok(field_error(
                    "student_id",
                    format!("Student {} does not exist", body.student_id),
                ));
            }
            Err(e) => return Ok(internal_error("Failed to load student", e)),
        }

        match storage.create_certificate(body).await {
            Ok(certificate) => Ok(HttpResponse::Created().json(ApiResponse::success(
                certificate,
                "Certificate issued successfully",
            ))),
            Err(e) => Ok(internal_error("Certificate creation failed", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{
        body_json, create_course, create_student, create_teacher, request_as, storage,
    };
    use actix_web::http::StatusCode;

    #[actix_web::test]
    async fn test_issue_and_list_certificate() {
        let storage = storage().await;
        let teacher = create_teacher(&storage, "teacher_1").await;
        let alice = create_student(&storage, "alice_1").await;
        let course_id = create_course(&storage, &teacher, "Rust", 10_000).await;
        let service = CertificateService::new_lazy();

        // 教师不能作为证书的接收者
        let resp = service
            .issue_certificate(
                IssueCertificateRequest {
                    student_id: teacher.id,
                    course_id,
                    certificate_url: None,
                },
                &request_as(&storage, Some(&teacher)),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = service
            .issue_certificate(
                IssueCertificateRequest {
                    student_id: alice.id,
                    course_id,
                    certificate_url: Some("https://cdn.example.com/c/1.pdf".to_string()),
                },
                &request_as(&storage, Some(&teacher)),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let json = body_json(
            service
                .list_certificates(&request_as(&storage, Some(&alice)))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(json["data"]["items"][0]["course_id"], course_id);
    }
}
