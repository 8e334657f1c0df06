//! 国家实体（迁移时预置）

use sea_orm::entity::prelude::*;

use crate::models::catalog::entities::Country;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "countries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub country_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_country(self) -> Country {
        Country {
            id: self.id,
            country_name: self.country_name,
        }
    }
}
