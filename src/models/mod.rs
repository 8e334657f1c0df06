//! 数据模型
//!
//! 每个业务域按 `entities`（业务实体）、`requests`（请求体/查询参数）、
//! `responses`（响应体）拆分。

pub mod assignments;
pub mod auth;
pub mod carts;
pub mod catalog;
pub mod certificates;
pub mod common;
pub mod courses;
pub mod exams;
pub mod lessons;
pub mod orders;
pub mod reviews;
pub mod users;

pub use common::{
    ApiResponse, FieldError, FieldErrors, ListResponse, PaginatedResponse, PaginationInfo,
    PaginationQuery, Price, Validate,
};

use serde::Serialize;

/// 业务错误码，写入 `ApiResponse.code`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用 1xxx
    BadRequest = 1000,
    ValidationFailed = 1001,
    NotFound = 1004,
    RateLimitExceeded = 1029,
    InternalServerError = 1500,

    // 认证 2xxx
    Unauthorized = 2000,
    AuthFailed = 2001,
    PermissionDenied = 2003,
    InvalidRefreshToken = 2004,

    // 用户 3xxx
    UserNotFound = 3000,
    UserNameAlreadyExists = 3001,
    UserEmailAlreadyExists = 3002,
    RegisterFailed = 3003,
    UserUpdateFailed = 3004,

    // 课程目录 4xxx
    CourseNotFound = 4000,
    CoursePermissionDenied = 4001,
    CategoryNotFound = 4002,
    SkillNotFound = 4003,
    LessonNotFound = 4004,
    CourseLanguageNotFound = 4005,
    CountryNotFound = 4006,

    // 评价 5xxx
    ReviewNotFound = 5000,
    ReviewPermissionDenied = 5001,

    // 购物车与订单 6xxx
    CartItemNotFound = 6000,
    OrderCreationFailed = 6001,

    // 考试 7xxx
    ExamNotFound = 7000,
    QuestionNotFound = 7001,
    ExamPermissionDenied = 7002,

    // 作业与证书 8xxx
    AssignmentNotFound = 8000,
    SubmissionNotFound = 8001,
    AssignmentPermissionDenied = 8002,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values_are_stable() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::ValidationFailed as i32, 1001);
        assert_eq!(ErrorCode::Unauthorized as i32, 2000);
        assert_eq!(ErrorCode::CourseNotFound as i32, 4000);
    }

    #[test]
    fn test_validation_response_shape() {
        let errors = vec![FieldError::new("username", "already taken")];
        let body =
            serde_json::to_value(ApiResponse::error(ErrorCode::ValidationFailed, errors, "invalid"))
                .unwrap();
        assert_eq!(body["code"], 1001);
        assert_eq!(body["data"][0]["field"], "username");
        assert_eq!(body["data"][0]["message"], "already taken");
    }
}
