pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod students;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashSet;
use std::sync::Arc;

use crate::models::courses::entities::Course;
use crate::models::courses::requests::{
    CourseListQuery, CreateCourseRequest, EnrollStudentRequest, UpdateCourseRequest,
};
use crate::models::{ErrorCode, FieldError};
use crate::services::{forbidden, internal_error, not_found, validation_failed};
use crate::storage::Storage;

super::define_service!(CourseService);

impl CourseService {
    // 公开课程列表
    pub async fn list_courses(
        &self,
        query: CourseListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_courses(self, query, request).await
    }

    // 教师自己的课程列表
    pub async fn list_teacher_courses(
        &self,
        query: CourseListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_teacher_courses(self, query, request).await
    }

    pub async fn get_course(&self, course_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_course(self, course_id, request).await
    }

    pub async fn get_teacher_course(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_teacher_course(self, course_id, request).await
    }

    pub async fn create_course(
        &self,
        body: CreateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_course(self, body, request).await
    }

    pub async fn update_course(
        &self,
        course_id: i64,
        body: UpdateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_course(self, course_id, body, request).await
    }

    pub async fn delete_course(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_course(self, course_id, request).await
    }

    pub async fn list_students(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        students::list_students(self, course_id, request).await
    }

    pub async fn enroll_student(
        &self,
        course_id: i64,
        body: EnrollStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        students::enroll_student(self, course_id, body, request).await
    }
}

/// 读取课程并确认归属当前教师
///
/// 不存在返回 404，属于其他教师返回 403。
pub(crate) async fn load_owned_course(
    storage: &Arc<dyn Storage>,
    course_id: i64,
    teacher_id: i64,
) -> Result<Course, HttpResponse> {
    match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) if course.teacher_id == teacher_id => Ok(course),
        Ok(Some(_)) => Err(forbidden(
            ErrorCode::CoursePermissionDenied,
            "You do not have permission to manage another teacher's course",
        )),
        Ok(None) => Err(not_found(ErrorCode::CourseNotFound, "Course not found")),
        Err(e) => Err(internal_error("Failed to get course information", e)),
    }
}

/// 校验请求中引用的分类与技能存在
async fn check_references(
    storage: &Arc<dyn Storage>,
    category_id: Option<i64>,
    skill_ids: Option<&[i64]>,
) -> Result<(), HttpResponse> {
    let mut errors = Vec::new();

    if let Some(category_id) = category_id {
        match storage.get_category(category_id).await {
            Ok(Some(_)) => {}
            Ok(None) => errors.push(FieldError::new(
                "category_id",
                format!("Category {category_id} does not exist"),
            )),
            Err(e) => return Err(internal_error("Failed to check category", e)),
        }
    }

    if let Some(skill_ids) = skill_ids
        && !skill_ids.is_empty()
    {
        let known: HashSet<i64> = match storage.list_skills().await {
            Ok(skills) => skills.into_iter().map(|s| s.id).collect(),
            Err(e) => return Err(internal_error("Failed to check skills", e)),
        };
        if let Some(missing) = skill_ids.iter().find(|id| !known.contains(id)) {
            errors.push(FieldError::new(
                "skill_ids",
                format!("Skill {missing} does not exist"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(validation_failed(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Price;
    use crate::services::test_support::{
        body_json, create_course, create_teacher, request_as, storage,
    };
    use actix_web::http::StatusCode;

    #[actix_web::test]
    async fn test_other_teacher_cannot_modify_course() {
        let storage = storage().await;
        let owner = create_teacher(&storage, "owner_t").await;
        let intruder = create_teacher(&storage, "intruder").await;
        let course_id = create_course(&storage, &owner, "Rust Basics", 10_000).await;

        let req = request_as(&storage, Some(&intruder));
        let service = CourseService::new_lazy();

        let update = UpdateCourseRequest {
            price: Some(Price::from_cents(1)),
            ..Default::default()
        };
        let resp = service.update_course(course_id, update, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let resp = service.delete_course(course_id, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        // 课程未被改动
        let course = storage.get_course_by_id(course_id).await.unwrap().unwrap();
        assert_eq!(course.price, Price::from_cents(10_000));
    }

    #[actix_web::test]
    async fn test_owner_updates_and_deletes_course() {
        let storage = storage().await;
        let owner = create_teacher(&storage, "owner_t").await;
        let course_id = create_course(&storage, &owner, "Rust Basics", 10_000).await;
        let req = request_as(&storage, Some(&owner));
        let service = CourseService::new_lazy();

        let update = UpdateCourseRequest {
            price: Some(Price::from_cents(8_000)),
            ..Default::default()
        };
        let resp = service.update_course(course_id, update, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["data"]["price"], "80.00");

        let resp = service.delete_course(course_id, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = service.get_teacher_course(course_id, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_update_with_unknown_category_is_field_error() {
        let storage = storage().await;
        let owner = create_teacher(&storage, "owner_t").await;
        let course_id = create_course(&storage, &owner, "Rust Basics", 10_000).await;
        let req = request_as(&storage, Some(&owner));

        let update = UpdateCourseRequest {
            category_id: Some(9_999),
            ..Default::default()
        };
        let resp = CourseService::new_lazy()
            .update_course(course_id, update, &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["data"][0]["field"], "category_id");
    }
}
