//! 学生角色表实体

use sea_orm::entity::prelude::*;

use crate::models::courses::entities::Level;
use crate::models::users::entities::StudentProfile;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,
    pub student_image: Option<String>,
    pub bio: Option<String>,
    pub grade_level: String,
    /// YYYY-MM-DD
    pub date_of_birth: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_profile(self) -> StudentProfile {
        StudentProfile {
            student_image: self.student_image,
            bio: self.bio,
            grade_level: self.grade_level.parse().unwrap_or(Level::Beginner),
            date_of_birth: self
                .date_of_birth
                .and_then(|d| chrono::NaiveDate::parse_from_str(&d, "%Y-%m-%d").ok()),
        }
    }
}
