use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct IssueCertificateRequest {
    pub student_id: i64,
    pub course_id: i64,
    pub certificate_url: Option<String>,
}
