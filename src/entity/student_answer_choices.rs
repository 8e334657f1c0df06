//! 答题所选选项，is_correct 为提交时的快照

use sea_orm::entity::prelude::*;

use crate::models::exams::entities::SelectedChoice;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_answer_choices")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub answer_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub choice_id: i64,
    pub is_correct: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student_answers::Entity",
        from = "Column::AnswerId",
        to = "super::student_answers::Column::Id"
    )]
    Answer,
    #[sea_orm(
        belongs_to = "super::choices::Entity",
        from = "Column::ChoiceId",
        to = "super::choices::Column::Id"
    )]
    Choice,
}

impl Related<super::student_answers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Answer.def()
    }
}

impl Related<super::choices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Choice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_selected_choice(self) -> SelectedChoice {
        SelectedChoice {
            choice_id: self.choice_id,
            is_correct: self.is_correct,
        }
    }
}
