pub mod cart;
pub mod items;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::ErrorCode;
use crate::models::carts::entities::Cart;
use crate::models::carts::requests::{AddCartItemRequest, UpdateCartItemRequest};
use crate::services::{field_error, internal_error};
use crate::storage::Storage;

super::define_service!(CartService);

impl CartService {
    pub async fn get_cart(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        cart::get_cart(self, request).await
    }

    pub async fn clear_cart(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        cart::clear_cart(self, request).await
    }

    pub async fn list_items(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        items::list_items(self, request).await
    }

    pub async fn add_item(
        &self,
        body: AddCartItemRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        items::add_item(self, body, request).await
    }

    pub async fn get_item(&self, item_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        items::get_item(self, item_id, request).await
    }

    pub async fn update_item(
        &self,
        item_id: i64,
        body: UpdateCartItemRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        items::update_item(self, item_id, body, request).await
    }

    pub async fn delete_item(&self, item_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        items::delete_item(self, item_id, request).await
    }
}

/// 当前学生的购物车，不存在时创建
pub(crate) async fn student_cart(
    storage: &Arc<dyn Storage>,
    student_id: i64,
) -> Result<Cart, HttpResponse> {
    storage
        .get_or_create_cart(student_id)
        .await
        .map_err(|e| internal_error("Failed to load cart", e))
}

/// 确认课程存在，否则返回 course_id 字段错误
async fn require_course(storage: &Arc<dyn Storage>, course_id: i64) -> Result<(), HttpResponse> {
    match storage.get_course_by_id(course_id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(field_error(
            "course_id",
            format!("Course {course_id} does not exist"),
        )),
        Err(e) => Err(internal_error("Failed to get course information", e)),
    }
}

fn item_not_found() -> HttpResponse {
    crate::services::not_found(ErrorCode::CartItemNotFound, "Cart item not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{
        body_json, create_course, create_student, create_teacher, request_as, storage,
    };
    use actix_web::http::StatusCode;

    #[actix_web::test]
    async fn test_cart_total_follows_course_price() {
        let storage = storage().await;
        let teacher = create_teacher(&storage, "teacher_1").await;
        let alice = create_student(&storage, "alice_1").await;
        let first = create_course(&storage, &teacher, "Rust", 10_000).await;
        let second = create_course(&storage, &teacher, "Go", 5_000).await;

        let service = CartService::new_lazy();
        let req = request_as(&storage, Some(&alice));
        for course_id in [first, second] {
            let resp = service
                .add_item(AddCartItemRequest { course_id: Some(course_id) }, &req)
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        let json = body_json(service.get_cart(&req).await.unwrap()).await;
        assert_eq!(json["data"]["items"].as_array().unwrap().len(), 2);
        assert_eq!(json["data"]["total_price"], "150.00");

        let resp = service.clear_cart(&req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(service.get_cart(&req).await.unwrap()).await;
        assert_eq!(json["data"]["total_price"], "0.00");
    }

    #[actix_web::test]
    async fn test_other_students_item_is_not_found() {
        let storage = storage().await;
        let teacher = create_teacher(&storage, "teacher_1").await;
        let alice = create_student(&storage, "alice_1").await;
        let bob = create_student(&storage, "bob_01").await;
        let course_id = create_course(&storage, &teacher, "Rust", 10_000).await;

        let service = CartService::new_lazy();
        let resp = service
            .add_item(
                AddCartItemRequest { course_id: Some(course_id) },
                &request_as(&storage, Some(&alice)),
            )
            .await
            .unwrap();
        let item_id = body_json(resp).await["data"]["id"].as_i64().unwrap();

        let bob_req = request_as(&storage, Some(&bob));
        let resp = service.get_item(item_id, &bob_req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let resp = service.delete_item(item_id, &bob_req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_add_unknown_course_is_field_error() {
        let storage = storage().await;
        let alice = create_student(&storage, "alice_1").await;
        let req = request_as(&storage, Some(&alice));
        let service = CartService::new_lazy();

        let resp = service
            .add_item(AddCartItemRequest { course_id: None }, &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = service
            .add_item(AddCartItemRequest { course_id: Some(99) }, &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["data"][0]["field"], "course_id");
    }
}
