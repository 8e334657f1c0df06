pub mod create;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::orders::requests::CreateOrderRequest;

super::define_service!(OrderService);

impl OrderService {
    pub async fn list_orders(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_orders(self, request).await
    }

    pub async fn create_order(
        &self,
        body: CreateOrderRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_order(self, body, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{
        body_json, create_course, create_student, create_teacher, request_as, storage,
    };
    use actix_web::http::StatusCode;
    use chrono::NaiveDate;

    fn order(cart_item_id: i64, country_id: i64) -> CreateOrderRequest {
        CreateOrderRequest {
            cart_item_id,
            name_on_card: "ALICE SMITH".to_string(),
            card_number: "4242424242424242".to_string(),
            expiration_date: NaiveDate::from_ymd_opt(2099, 12, 31).unwrap(),
            cvv: "123".to_string(),
            country_id,
        }
    }

    #[actix_web::test]
    async fn test_order_from_own_cart_item() {
        let storage = storage().await;
        let teacher = create_teacher(&storage, "teacher_1").await;
        let alice = create_student(&storage, "alice_1").await;
        let bob = create_student(&storage, "bob_01").await;
        let course_id = create_course(&storage, &teacher, "Rust", 10_000).await;
        let country_id = storage.list_countries().await.unwrap()[0].id;

        let cart = storage.get_or_create_cart(alice.id).await.unwrap();
        let item = storage.add_cart_item(cart.id, course_id).await.unwrap();

        let service = OrderService::new_lazy();

        // 其他学生不能用别人的购物车条目下单
        let resp = service
            .create_order(order(item.id, country_id), &request_as(&storage, Some(&bob)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["data"][0]["field"], "cart_item_id");

        let alice_req = request_as(&storage, Some(&alice));
        let resp = service
            .create_order(order(item.id, country_id), &alice_req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let json = body_json(resp).await;
        assert_eq!(json["data"]["status"], "unpaid");
        assert_eq!(json["data"]["card_number"], "**** **** **** 4242");
        assert!(json["data"].get("cvv").is_none());

        let json = body_json(service.list_orders(&alice_req).await.unwrap()).await;
        assert_eq!(json["data"]["items"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_unknown_country_is_field_error() {
        let storage = storage().await;
        let teacher = create_teacher(&storage, "teacher_1").await;
        let alice = create_student(&storage, "alice_1").await;
        let course_id = create_course(&storage, &teacher, "Rust", 10_000).await;
        let cart = storage.get_or_create_cart(alice.id).await.unwrap();
        let item = storage.add_cart_item(cart.id, course_id).await.unwrap();

        let resp = OrderService::new_lazy()
            .create_order(order(item.id, 9_999), &request_as(&storage, Some(&alice)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["data"][0]["field"], "country_id");
    }
}
