pub mod languages;
pub mod lessons;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use crate::models::lessons::requests::{
    CreateCourseLanguageRequest, CreateLessonRequest, UpdateCourseLanguageRequest,
    UpdateLessonRequest,
};

super::define_service!(LessonService);

impl LessonService {
    // 学生查看课程课时
    pub async fn list_course_lessons(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        lessons::list_course_lessons(self, course_id, request).await
    }

    pub async fn list_lessons(&self, course_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        lessons::list_lessons(self, course_id, request).await
    }

    pub async fn get_lesson(&self, lesson_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        lessons::get_lesson(self, lesson_id, request).await
    }

    pub async fn create_lesson(
        &self,
        course_id: i64,
        body: CreateLessonRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        lessons::create_lesson(self, course_id, body, request).await
    }

    pub async fn update_lesson(
        &self,
        lesson_id: i64,
        body: UpdateLessonRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        lessons::update_lesson(self, lesson_id, body, request).await
    }

    pub async fn delete_lesson(&self, lesson_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        lessons::delete_lesson(self, lesson_id, request).await
    }

    pub async fn list_languages(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        languages::list_languages(self, course_id, request).await
    }

    pub async fn get_language(
        &self,
        language_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        languages::get_language(self, language_id, request).await
    }

    pub async fn create_language(
        &self,
        course_id: i64,
        body: CreateCourseLanguageRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        languages::create_language(self, course_id, body, request).await
    }

    pub async fn update_language(
        &self,
        language_id: i64,
        body: UpdateCourseLanguageRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        languages::update_language(self, language_id, body, request).await
    }

    pub async fn delete_language(
        &self,
        language_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        languages::delete_language(self, language_id, request).await
    }
}
