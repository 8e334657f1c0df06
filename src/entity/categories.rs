//! 课程分类实体

use sea_orm::entity::prelude::*;

use crate::models::catalog::entities::Category;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub category_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_category(self) -> Category {
        Category {
            id: self.id,
            category_name: self.category_name,
        }
    }
}
