use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Price;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: i64,
    pub student_id: i64,
    pub created_at: DateTime<Utc>,
}

/// 购物车条目，价格取自课程当前价格
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: i64,
    pub cart_id: i64,
    pub course_id: i64,
    pub course_name: String,
    pub price: Price,
}

#[derive(Debug, Clone, Serialize)]
pub struct CartDetail {
    pub id: i64,
    pub student_id: i64,
    pub created_at: DateTime<Utc>,
    pub items: Vec<CartItem>,
    pub total_price: Price,
}

impl CartDetail {
    pub fn new(cart: Cart, items: Vec<CartItem>) -> Self {
        let total_price = cart_total(&items);
        Self {
            id: cart.id,
            student_id: cart.student_id,
            created_at: cart.created_at,
            items,
            total_price,
        }
    }
}

pub fn cart_total(items: &[CartItem]) -> Price {
    items.iter().map(|item| item.price).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, cents: i64) -> CartItem {
        CartItem {
            id,
            cart_id: 1,
            course_id: id,
            course_name: format!("course-{id}"),
            price: Price::from_cents(cents),
        }
    }

    #[test]
    fn test_cart_total() {
        assert_eq!(cart_total(&[]), Price::ZERO);
        assert_eq!(
            cart_total(&[item(1, 10_000), item(2, 5_000)]).to_string(),
            "150.00"
        );
    }

    #[test]
    fn test_cart_detail_total() {
        let cart = Cart {
            id: 1,
            student_id: 2,
            created_at: Utc::now(),
        };
        let detail = CartDetail::new(cart, vec![item(1, 8_000), item(2, 5_000)]);
        assert_eq!(detail.total_price, Price::from_cents(13_000));
    }
}
