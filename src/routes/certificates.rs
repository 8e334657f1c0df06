use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::certificates::requests::IssueCertificateRequest;
use crate::models::users::entities::UserRole;
use crate::services::CertificateService;

static CERTIFICATE_SERVICE: Lazy<CertificateService> = Lazy::new(CertificateService::new_lazy);

pub async fn list_certificates(req: HttpRequest) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE.list_certificates(&req).await
}

pub async fn issue_certificate(
    req: HttpRequest,
    body: web::Json<IssueCertificateRequest>,
) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE
        .issue_certificate(body.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_certificate_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/v1/certificates")
            .wrap(middlewares::RequireRole::new(UserRole::Student))
            .wrap(middlewares::RequireJWT)
            .route(web::get().to(list_certificates)),
    )
    .service(
        web::resource("/api/v1/teacher/certificates")
            .wrap(middlewares::RequireRole::new(UserRole::Teacher))
            .wrap(middlewares::RequireJWT)
            .route(web::post().to(issue_certificate)),
    );
}
