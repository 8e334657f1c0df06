//! 服务层测试用的请求与数据构造

use actix_web::body::to_bytes;
use actix_web::test::TestRequest;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, web};
use std::sync::Arc;

use crate::models::Price;
use crate::models::courses::entities::{CourseDuration, Level};
use crate::models::courses::requests::CreateCourseRequest;
use crate::models::users::entities::{StudentProfile, TeacherProfile, User, UserProfile};
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use crate::storage::sea_orm_storage::SeaOrmStorage;

pub async fn storage() -> Arc<dyn Storage> {
    Arc::new(SeaOrmStorage::new_in_memory().await.unwrap())
}

/// 构造已通过 JWT 认证的请求
pub fn request_as(storage: &Arc<dyn Storage>, user: Option<&User>) -> HttpRequest {
    let req = TestRequest::default()
        .app_data(web::Data::new(storage.clone()))
        .to_http_request();
    if let Some(user) = user {
        req.extensions_mut().insert(user.clone());
    }
    req
}

pub async fn body_json(resp: HttpResponse) -> serde_json::Value {
    let body = to_bytes(resp.into_body()).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

pub async fn create_student(storage: &Arc<dyn Storage>, username: &str) -> User {
    storage
        .create_user(CreateUserRequest {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: "hash".to_string(),
            first_name: None,
            last_name: None,
            profile: UserProfile::Student(StudentProfile {
                student_image: None,
                bio: None,
                grade_level: Level::Beginner,
                date_of_birth: None,
            }),
        })
        .await
        .unwrap()
}

pub async fn create_teacher(storage: &Arc<dyn Storage>, username: &str) -> User {
    storage
        .create_user(CreateUserRequest {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: "hash".to_string(),
            first_name: None,
            last_name: None,
            profile: UserProfile::Teacher(TeacherProfile {
                profile_picture: None,
                bio: None,
                expertise: "Rust".to_string(),
                years_of_experience: 3,
                social_links: None,
            }),
        })
        .await
        .unwrap()
}

pub async fn create_course(storage: &Arc<dyn Storage>, teacher: &User, name: &str, cents: i64) -> i64 {
    let category_id = storage
        .create_category(&format!("{name} category"))
        .await
        .unwrap()
        .id;
    storage
        .create_course(
            teacher.id,
            CreateCourseRequest {
                course_name: name.to_string(),
                category_id,
                description: String::new(),
                price: Price::from_cents(cents),
                level: Level::Beginner,
                duration: CourseDuration::OneToFourWeeks,
                course_image: None,
                skill_ids: Vec::new(),
            },
        )
        .await
        .unwrap()
        .id
}
