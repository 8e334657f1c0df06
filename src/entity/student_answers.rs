//! 学生答题实体

use sea_orm::entity::prelude::*;

use super::to_datetime;
use crate::models::exams::entities::{SelectedChoice, StudentAnswer};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_answers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub question_id: i64,
    #[sea_orm(column_type = "Text", nullable)]
    pub answer_text: Option<String>,
    pub is_correct: Option<bool>,
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
        belongs_to = "super::questions::Entity",
        from = "Column::QuestionId",
        to = "super::questions::Column::Id"
    )]
    Question,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_answer(self, selected_choices: Vec<SelectedChoice>) -> StudentAnswer {
        StudentAnswer {
            id: self.id,
            student_id: self.student_id,
            question_id: self.question_id,
            answer_text: self.answer_text,
            selected_choices,
            is_correct: self.is_correct,
            created_at: to_datetime(self.created_at),
        }
    }
}
