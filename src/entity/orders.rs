//! 订单实体

use sea_orm::entity::prelude::*;

use super::to_datetime;
use crate::models::orders::entities::{Order, OrderStatus, mask_card_number};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub cart_item_id: i64,
    pub status: String,
    pub name_on_card: String,
    pub card_last_four: String,
    /// YYYY-MM-DD
    pub expiration_date: String,
    pub country_id: i64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::cart_items::Entity",
        from = "Column::CartItemId",
        to = "super::cart_items::Column::Id"
    )]
    CartItem,
    #[sea_orm(
        belongs_to = "super::countries::Entity",
        from = "Column::CountryId",
        to = "super::countries::Column::Id"
    )]
    Country,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::cart_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CartItem.def()
    }
}

impl Related<super::countries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Country.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_order(self) -> Order {
        Order {
            id: self.id,
            student_id: self.student_id,
            cart_item_id: self.cart_item_id,
            status: self.status.parse().unwrap_or(OrderStatus::Unpaid),
            name_on_card: self.name_on_card,
            card_number: mask_card_number(&self.card_last_four),
            expiration_date: chrono::NaiveDate::parse_from_str(&self.expiration_date, "%Y-%m-%d")
                .unwrap_or_default(),
            country_id: self.country_id,
            created_at: to_datetime(self.created_at),
        }
    }
}
