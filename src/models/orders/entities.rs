use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Paid,
    Unpaid,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Paid => "paid",
            OrderStatus::Unpaid => "unpaid",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paid" => Ok(OrderStatus::Paid),
            "unpaid" => Ok(OrderStatus::Unpaid),
            _ => Err(format!("Invalid order status: {s}")),
        }
    }
}

/// 订单，卡号只返回掩码形式
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub student_id: i64,
    pub cart_item_id: i64,
    pub status: OrderStatus,
    pub name_on_card: String,
    pub card_number: String,
    pub expiration_date: NaiveDate,
    pub country_id: i64,
    pub created_at: DateTime<Utc>,
}

/// 卡号掩码，只保留后四位
pub fn mask_card_number(last_four: &str) -> String {
    format!("**** **** **** {last_four}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_name() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Unpaid).unwrap(),
            "\"unpaid\""
        );
        assert_eq!("paid".parse::<OrderStatus>().unwrap(), OrderStatus::Paid);
    }

    #[test]
    fn test_mask_card_number() {
        assert_eq!(mask_card_number("4242"), "**** **** **** 4242");
    }
}
