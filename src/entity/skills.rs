//! 技能标签实体

use sea_orm::entity::prelude::*;

use crate::models::catalog::entities::Skill;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub skill_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_skill(self) -> Skill {
        Skill {
            id: self.id,
            skill_name: self.skill_name,
        }
    }
}
