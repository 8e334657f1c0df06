//! 课程实体

use sea_orm::entity::prelude::*;

use super::to_datetime;
use crate::models::Price;
use crate::models::courses::entities::{Course, CourseDuration, Level};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_name: String,
    /// 课程名的小写形式，用于不区分大小写的搜索
    pub search_name: String,
    pub category_id: i64,
    pub teacher_id: i64,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub price_cents: i64,
    pub level: String,
    pub duration: String,
    pub course_image: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::TeacherId",
        to = "super::users::Column::Id"
    )]
    Teacher,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_course(self) -> Course {
        Course {
            id: self.id,
            course_name: self.course_name,
            category_id: self.category_id,
            teacher_id: self.teacher_id,
            description: self.description,
            price: Price::from_cents(self.price_cents),
            level: self.level.parse().unwrap_or(Level::Beginner),
            duration: self
                .duration
                .parse()
                .unwrap_or(CourseDuration::OneToFourWeeks),
            course_image: self.course_image,
            created_at: to_datetime(self.created_at),
            updated_at: to_datetime(self.updated_at),
        }
    }
}
