use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::{FieldError, FieldErrors, Validate};
use crate::utils::validate::{validate_card_number, validate_cvv, validate_required_text};

const MAX_NAME_ON_CARD: usize = 35;

/// 下单请求，基于购物车中的一个条目
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub cart_item_id: i64,
    pub name_on_card: String,
    pub card_number: String,
    pub expiration_date: NaiveDate,
    pub cvv: String,
    pub country_id: i64,
}

/// 存储层创建订单的输入，CVV 不落库
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub student_id: i64,
    pub cart_item_id: i64,
    pub name_on_card: String,
    pub card_last_four: String,
    pub expiration_date: NaiveDate,
    pub country_id: i64,
}

impl CreateOrderRequest {
    /// 以给定日期为"今天"校验，便于测试
    pub fn validate_at(&self, today: NaiveDate) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        errors.check(
            "name_on_card",
            validate_required_text(&self.name_on_card, MAX_NAME_ON_CARD),
        );
        errors.check("card_number", validate_card_number(&self.card_number));
        if self.expiration_date < today {
            errors.push("expiration_date", "Card has expired");
        }
        errors.check("cvv", validate_cvv(&self.cvv));
        errors.into_result()
    }

    pub fn into_new_order(self, student_id: i64) -> NewOrder {
        let digits: String = self
            .card_number
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        let card_last_four = digits[digits.len().saturating_sub(4)..].to_string();
        NewOrder {
            student_id,
            cart_item_id: self.cart_item_id,
            name_on_card: self.name_on_card,
            card_last_four,
            expiration_date: self.expiration_date,
            country_id: self.country_id,
        }
    }
}

impl Validate for CreateOrderRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        self.validate_at(chrono::Utc::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateOrderRequest {
        CreateOrderRequest {
            cart_item_id: 1,
            name_on_card: "ALICE SMITH".to_string(),
            card_number: "4242 4242 4242 4242".to_string(),
            expiration_date: NaiveDate::from_ymd_opt(2030, 1, 31).unwrap(),
            cvv: "123".to_string(),
            country_id: 1,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
    }

    #[test]
    fn test_valid_order() {
        assert!(request().validate_at(today()).is_ok());
    }

    #[test]
    fn test_expired_card() {
        let mut req = request();
        req.expiration_date = NaiveDate::from_ymd_opt(2026, 5, 31).unwrap();
        let errors = req.validate_at(today()).unwrap_err();
        assert_eq!(errors[0].field, "expiration_date");

        req.expiration_date = today();
        assert!(req.validate_at(today()).is_ok());
    }

    #[test]
    fn test_bad_card_fields() {
        let mut req = request();
        req.card_number = "1234".to_string();
        req.cvv = "12a".to_string();
        req.name_on_card = "x".repeat(36);
        let fields: Vec<String> = req
            .validate_at(today())
            .unwrap_err()
            .into_iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, vec!["name_on_card", "card_number", "cvv"]);
    }

    #[test]
    fn test_new_order_keeps_only_last_four() {
        let order = request().into_new_order(5);
        assert_eq!(order.card_last_four, "4242");
        assert_eq!(order.student_id, 5);
    }
}
