//! 教师角色表实体

use sea_orm::entity::prelude::*;

use crate::models::users::entities::TeacherProfile;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "teacher_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,
    pub profile_picture: Option<String>,
    pub bio: Option<String>,
    pub expertise: String,
    pub years_of_experience: i32,
    pub social_links: Option<String>,
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
    pub fn into_profile(self) -> TeacherProfile {
        TeacherProfile {
            profile_picture: self.profile_picture,
            bio: self.bio,
            expertise: self.expertise,
            years_of_experience: self.years_of_experience,
            social_links: self.social_links,
        }
    }
}
