pub mod login;
pub mod logout;
pub mod register;
pub mod token;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::config::AppConfig;
use crate::models::auth::{LoginRequest, RefreshTokenRequest};
use crate::models::users::entities::UserRole;
use crate::models::users::requests::{RegisterStudentRequest, RegisterTeacherRequest};

super::define_service!(AuthService);

impl AuthService {
    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 按角色登录，角色不符视为凭据错误
    pub async fn login(
        &self,
        role: UserRole,
        login_request: LoginRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        login::handle_login(self, role, login_request, request).await
    }

    pub async fn register_student(
        &self,
        register_request: RegisterStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        register::handle_register_student(self, register_request, request).await
    }

    pub async fn register_teacher(
        &self,
        register_request: RegisterTeacherRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        register::handle_register_teacher(self, register_request, request).await
    }

    // 刷新令牌
    pub async fn refresh_token(
        &self,
        body: RefreshTokenRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        token::handle_refresh_token(self, body, request).await
    }

    // 注销，吊销 refresh token
    pub async fn logout(
        &self,
        body: RefreshTokenRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        logout::handle_logout(self, body, request).await
    }

    // 获取当前用户信息
    pub async fn get_user(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        token::handle_get_user(self, request).await
    }
}

/// refresh token 优先取请求体，其次取 cookie
pub(crate) fn refresh_token_from(body: RefreshTokenRequest, request: &HttpRequest) -> Option<String> {
    body.refresh
        .filter(|token| !token.trim().is_empty())
        .or_else(|| crate::utils::jwt::JwtUtils::extract_refresh_token_from_cookie(request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::courses::entities::Level;
    use crate::services::test_support::{body_json, create_student, request_as, storage};
    use crate::utils::jwt::JwtUtils;
    use actix_web::http::StatusCode;

    fn student_registration(username: &str, email: &str) -> RegisterStudentRequest {
        RegisterStudentRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: "SecureP@ss1".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: None,
            student_image: None,
            bio: None,
            grade_level: Level::Beginner,
            date_of_birth: None,
        }
    }

    fn refresh_body(token: &str) -> RefreshTokenRequest {
        RefreshTokenRequest {
            refresh: Some(token.to_string()),
        }
    }

    #[actix_web::test]
    async fn test_register_hides_password() {
        let storage = storage().await;
        let req = request_as(&storage, None);
        let service = AuthService::new_lazy();

        let resp = service
            .register_student(student_registration("new_student", "new@example.com"), &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let json = body_json(resp).await;
        assert_eq!(json["data"]["username"], "new_student");
        assert!(json["data"].get("password").is_none());
        assert!(json["data"].get("password_hash").is_none());
    }

    #[actix_web::test]
    async fn test_register_duplicate_username_is_field_error() {
        let storage = storage().await;
        create_student(&storage, "taken_name").await;
        let req = request_as(&storage, None);
        let service = AuthService::new_lazy();

        let resp = service
            .register_student(student_registration("taken_name", "other@example.com"), &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = body_json(resp).await;
        let fields: Vec<&str> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|e| e["field"].as_str())
            .collect();
        assert_eq!(fields, vec!["username"]);
    }

    #[actix_web::test]
    async fn test_logout_without_token_is_bad_request() {
        let storage = storage().await;
        let req = request_as(&storage, None);
        let service = AuthService::new_lazy();

        let resp = service
            .logout(RefreshTokenRequest::default(), &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = service
            .logout(refresh_body("not-a-jwt"), &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_logout_twice_with_same_token() {
        let storage = storage().await;
        let alice = create_student(&storage, "alice_out").await;
        let pair = JwtUtils::generate_token_pair(alice.id, "student", None).unwrap();
        let req = request_as(&storage, None);
        let service = AuthService::new_lazy();

        let first = service
            .logout(refresh_body(&pair.refresh_token), &req)
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::RESET_CONTENT);

        let second = service
            .logout(refresh_body(&pair.refresh_token), &req)
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::BAD_REQUEST);

        // 吊销后 refresh 也被拒绝
        let refreshed = service
            .refresh_token(refresh_body(&pair.refresh_token), &req)
            .await
            .unwrap();
        assert_eq!(refreshed.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_refresh_issues_access_token() {
        let storage = storage().await;
        let alice = create_student(&storage, "alice_in").await;
        let pair = JwtUtils::generate_token_pair(alice.id, "student", None).unwrap();
        let req = request_as(&storage, None);

        let resp = AuthService::new_lazy()
            .refresh_token(refresh_body(&pair.refresh_token), &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        assert_eq!(
            json["data"]["expires_in"],
            AppConfig::get().access_token_expiry_secs()
        );
        let token = json["data"]["access_token"].as_str().unwrap();
        let claims = JwtUtils::verify_access_token(token).unwrap();
        assert_eq!(claims.user_id(), Some(alice.id));
    }
}
