use super::SeaOrmStorage;
use crate::entity::orders;
use crate::entity::prelude::*;
use crate::errors::{MarketError, Result};
use crate::models::orders::{
    entities::{Order, OrderStatus},
    requests::NewOrder,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn list_orders_impl(&self, student_id: i64) -> Result<Vec<Order>> {
        let result = Orders::find()
            .filter(orders::Column::StudentId.eq(student_id))
            .order_by_asc(orders::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询订单列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_order()).collect())
    }

    /// 新订单总是未支付状态
    pub async fn create_order_impl(&self, order: NewOrder) -> Result<Order> {
        let model = orders::ActiveModel {
            student_id: Set(order.student_id),
            cart_item_id: Set(order.cart_item_id),
            status: Set(OrderStatus::Unpaid.as_str().to_string()),
            name_on_card: Set(order.name_on_card),
            card_last_four: Set(order.card_last_four),
            expiration_date: Set(order.expiration_date.format("%Y-%m-%d").to_string()),
            country_id: Set(order.country_id),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| MarketError::database_operation(format!("创建订单失败: {e}")))?;

        Ok(model.into_order())
    }
}
