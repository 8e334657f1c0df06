use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_accounts_and_catalog::{Courses, Users};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 作业表
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assignments::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(Assignments::TeacherId).big_integer().not_null())
                    .col(ColumnDef::new(Assignments::Name).string().not_null())
                    .col(ColumnDef::new(Assignments::Description).text().not_null())
                    .col(ColumnDef::new(Assignments::DueDate).big_integer().not_null())
                    .col(ColumnDef::new(Assignments::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignments::Table, Assignments::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignments::Table, Assignments::TeacherId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 作业提交表
        manager
            .create_table(
                Table::create()
                    .table(AssignmentSubmissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssignmentSubmissions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AssignmentSubmissions::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssignmentSubmissions::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssignmentSubmissions::SubmissionFile)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssignmentSubmissions::SubmittedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssignmentSubmissions::Grade)
                            .small_integer()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                AssignmentSubmissions::Table,
                                AssignmentSubmissions::AssignmentId,
                            )
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                AssignmentSubmissions::Table,
                                AssignmentSubmissions::StudentId,
                            )
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 考试表
        manager
            .create_table(
                Table::create()
                    .table(Exams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Exams::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Exams::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(Exams::TeacherId).big_integer().not_null())
                    .col(ColumnDef::new(Exams::ExamName).string().not_null())
                    .col(ColumnDef::new(Exams::PassingScore).small_integer().null())
                    .col(ColumnDef::new(Exams::Duration).integer().not_null())
                    .col(ColumnDef::new(Exams::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Exams::Table, Exams::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Exams::Table, Exams::TeacherId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 题目表
        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Questions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Questions::ExamId).big_integer().not_null())
                    .col(ColumnDef::new(Questions::Text).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Questions::Table, Questions::ExamId)
                            .to(Exams::Table, Exams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 选项表
        manager
            .create_table(
                Table::create()
                    .table(Choices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Choices::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Choices::QuestionId).big_integer().not_null())
                    .col(ColumnDef::new(Choices::Text).string().not_null())
                    .col(
                        ColumnDef::new(Choices::IsCorrect)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Choices::Table, Choices::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 学生答题表
        manager
            .create_table(
                Table::create()
                    .table(StudentAnswers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentAnswers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentAnswers::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentAnswers::QuestionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StudentAnswers::AnswerText).text().null())
                    .col(ColumnDef::new(StudentAnswers::IsCorrect).boolean().null())
                    .col(
                        ColumnDef::new(StudentAnswers::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentAnswers::Table, StudentAnswers::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentAnswers::Table, StudentAnswers::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 答题所选选项，is_correct 为提交时的快照
        manager
            .create_table(
                Table::create()
                    .table(StudentAnswerChoices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentAnswerChoices::AnswerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentAnswerChoices::ChoiceId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentAnswerChoices::IsCorrect)
                            .boolean()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(StudentAnswerChoices::AnswerId)
                            .col(StudentAnswerChoices::ChoiceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentAnswerChoices::Table, StudentAnswerChoices::AnswerId)
                            .to(StudentAnswers::Table, StudentAnswers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentAnswerChoices::Table, StudentAnswerChoices::ChoiceId)
                            .to(Choices::Table, Choices::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentAnswerChoices::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentAnswers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Choices::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Exams::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AssignmentSubmissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Assignments {
    #[sea_orm(iden = "assignments")]
    Table,
    Id,
    CourseId,
    TeacherId,
    Name,
    Description,
    DueDate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AssignmentSubmissions {
    #[sea_orm(iden = "assignment_submissions")]
    Table,
    Id,
    AssignmentId,
    StudentId,
    SubmissionFile,
    SubmittedAt,
    Grade,
}

#[derive(DeriveIden)]
enum Exams {
    #[sea_orm(iden = "exams")]
    Table,
    Id,
    CourseId,
    TeacherId,
    ExamName,
    PassingScore,
    Duration,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Questions {
    #[sea_orm(iden = "questions")]
    Table,
    Id,
    ExamId,
    Text,
}

#[derive(DeriveIden)]
enum Choices {
    #[sea_orm(iden = "choices")]
    Table,
    Id,
    QuestionId,
    Text,
    IsCorrect,
}

#[derive(DeriveIden)]
enum StudentAnswers {
    #[sea_orm(iden = "student_answers")]
    Table,
    Id,
    StudentId,
    QuestionId,
    AnswerText,
    IsCorrect,
    CreatedAt,
}

#[derive(DeriveIden)]
enum StudentAnswerChoices {
    #[sea_orm(iden = "student_answer_choices")]
    Table,
    AnswerId,
    ChoiceId,
    IsCorrect,
}
