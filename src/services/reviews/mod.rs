pub mod create;
pub mod delete;
pub mod get;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::reviews::requests::{CreateReviewRequest, ReviewListQuery};

super::define_service!(ReviewService);

impl ReviewService {
    pub async fn list_reviews(
        &self,
        query: ReviewListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_reviews(self, query, request).await
    }

    pub async fn get_review(&self, review_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_review(self, review_id, request).await
    }

    pub async fn create_review(
        &self,
        body: CreateReviewRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_review(self, body, request).await
    }

    // 只有作者本人可以删除
    pub async fn delete_review(
        &self,
        review_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_review(self, review_id, request).await
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
    async fn test_only_author_can_delete_review() {
        let storage = storage().await;
        let teacher = create_teacher(&storage, "teacher_1").await;
        let alice = create_student(&storage, "alice_1").await;
        let bob = create_student(&storage, "bob_01").await;
        let course_id = create_course(&storage, &teacher, "Rust", 10_000).await;

        let service = ReviewService::new_lazy();
        let resp = service
            .create_review(
                CreateReviewRequest {
                    course_id,
                    stars: Some(5),
                    comment: Some("great".to_string()),
                },
                &request_as(&storage, Some(&alice)),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let review_id = body_json(resp).await["data"]["id"].as_i64().unwrap();

        let resp = service
            .delete_review(review_id, &request_as(&storage, Some(&bob)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let resp = service
            .delete_review(review_id, &request_as(&storage, Some(&alice)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = service
            .get_review(review_id, &request_as(&storage, None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_review_for_unknown_course_is_field_error() {
        let storage = storage().await;
        let alice = create_student(&storage, "alice_1").await;

        let resp = ReviewService::new_lazy()
            .create_review(
                CreateReviewRequest {
                    course_id: 404,
                    stars: None,
                    comment: None,
                },
                &request_as(&storage, Some(&alice)),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["data"][0]["field"], "course_id");
    }
}
