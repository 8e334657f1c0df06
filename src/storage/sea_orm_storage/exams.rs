use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::prelude::*;
use crate::entity::{choices, exams, questions, student_answer_choices, student_answers};
use crate::errors::{MarketError, Result};
use crate::models::exams::{
    entities::{Choice, Exam, ExamDetail, Question, SelectedChoice, StudentAnswer},
    grading::GradedAnswer,
    requests::{ChoiceInput, CreateExamRequest, CreateQuestionRequest, UpdateExamRequest, UpdateQuestionRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

async fn insert_choices<C: ConnectionTrait>(
    db: &C,
    question_id: i64,
    inputs: Vec<ChoiceInput>,
) -> Result<()> {
    if inputs.is_empty() {
        return Ok(());
    }
    let models = inputs.into_iter().map(|input| choices::ActiveModel {
        question_id: Set(question_id),
        text: Set(input.text),
        is_correct: Set(input.is_correct),
        ..Default::default()
    });
    Choices::insert_many(models)
        .exec_without_returning(db)
        .await
        .map_err(|e| MarketError::database_operation(format!("写入选项失败: {e}")))?;
    Ok(())
}

/// 批量加载题目的选项，按题目 id 分组
async fn load_questions<C: ConnectionTrait>(
    db: &C,
    models: Vec<QuestionModel>,
) -> Result<Vec<Question>> {
    if models.is_empty() {
        return Ok(Vec::new());
    }
    let question_ids: Vec<i64> = models.iter().map(|q| q.id).collect();
    let mut choice_map: HashMap<i64, Vec<Choice>> = HashMap::new();
    for choice in Choices::find()
        .filter(choices::Column::QuestionId.is_in(question_ids))
        .order_by_asc(choices::Column::Id)
        .all(db)
        .await
        .map_err(|e| MarketError::database_operation(format!("查询选项失败: {e}")))?
    {
        choice_map
            .entry(choice.question_id)
            .or_default()
            .push(choice.into_choice());
    }

    Ok(models
        .into_iter()
        .map(|q| {
            let choices = choice_map.remove(&q.id).unwrap_or_default();
            q.into_question(choices)
        })
        .collect())
}

impl SeaOrmStorage {
    pub async fn list_exams_impl(
        &self,
        course_id: Option<i64>,
        teacher_id: Option<i64>,
    ) -> Result<Vec<Exam>> {
        let mut select = Exams::find();
        if let Some(course_id) = course_id {
            select = select.filter(exams::Column::CourseId.eq(course_id));
        }
        if let Some(teacher_id) = teacher_id {
            select = select.filter(exams::Column::TeacherId.eq(teacher_id));
        }

        let result = select
            .order_by_asc(exams::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询考试列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_exam()).collect())
    }

    pub async fn get_exam_impl(&self, id: i64) -> Result<Option<Exam>> {
        let result = Exams::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询考试失败: {e}")))?;

        Ok(result.map(|m| m.into_exam()))
    }

    pub async fn get_exam_detail_impl(&self, id: i64) -> Result<Option<ExamDetail>> {
        let Some(exam) = self.get_exam_impl(id).await? else {
            return Ok(None);
        };
        let questions = self.list_questions_impl(id).await?;
        Ok(Some(ExamDetail { exam, questions }))
    }

    pub async fn create_exam_impl(&self, teacher_id: i64, req: CreateExamRequest) -> Result<Exam> {
        let model = exams::ActiveModel {
            course_id: Set(req.course_id),
            teacher_id: Set(teacher_id),
            exam_name: Set(req.exam_name),
            passing_score: Set(req.passing_score),
            duration: Set(req.duration),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| MarketError::database_operation(format!("创建考试失败: {e}")))?;

        Ok(model.into_exam())
    }

    pub async fn update_exam_impl(
        &self,
        id: i64,
        update: UpdateExamRequest,
    ) -> Result<Option<Exam>> {
        let Some(existing) = Exams::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询考试失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        if let Some(name) = update.exam_name {
            model.exam_name = Set(name);
        }
        if let Some(score) = update.passing_score {
            model.passing_score = Set(Some(score));
        }
        if let Some(duration) = update.duration {
            model.duration = Set(duration);
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("更新考试失败: {e}")))?;

        Ok(Some(updated.into_exam()))
    }

    pub async fn delete_exam_impl(&self, id: i64) -> Result<bool> {
        let result = Exams::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("删除考试失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn list_questions_impl(&self, exam_id: i64) -> Result<Vec<Question>> {
        let models = Questions::find()
            .filter(questions::Column::ExamId.eq(exam_id))
            .order_by_asc(questions::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询题目列表失败: {e}")))?;

        load_questions(&self.db, models).await
    }

    pub async fn get_question_impl(&self, id: i64) -> Result<Option<Question>> {
        let Some(model) = Questions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询题目失败: {e}")))?
        else {
            return Ok(None);
        };

        Ok(load_questions(&self.db, vec![model]).await?.pop())
    }

    pub async fn create_question_impl(
        &self,
        exam_id: i64,
        req: CreateQuestionRequest,
    ) -> Result<Question> {
        let txn = self.db.begin().await?;

        let model = questions::ActiveModel {
            exam_id: Set(exam_id),
            text: Set(req.text),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| MarketError::database_operation(format!("创建题目失败: {e}")))?;

        insert_choices(&txn, model.id, req.choices).await?;
        let question = load_questions(&txn, vec![model])
            .await?
            .pop()
            .ok_or_else(|| MarketError::database_operation("读取新建题目失败"))?;

        txn.commit().await?;
        Ok(question)
    }

    /// 提供选项时整体替换；已有答题记录的判分结果不变
    pub async fn update_question_impl(
        &self,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>> {
        let txn = self.db.begin().await?;

        let Some(existing) = Questions::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询题目失败: {e}")))?
        else {
            return Ok(None);
        };

        let model = match update.text {
            Some(text) => {
                let mut active = existing.into_active_model();
                active.text = Set(text);
                active
                    .update(&txn)
                    .await
                    .map_err(|e| MarketError::database_operation(format!("更新题目失败: {e}")))?
            }
            None => existing,
        };

        if let Some(inputs) = update.choices {
            Choices::delete_many()
                .filter(choices::Column::QuestionId.eq(id))
                .exec(&txn)
                .await
                .map_err(|e| MarketError::database_operation(format!("清除选项失败: {e}")))?;
            insert_choices(&txn, id, inputs).await?;
        }

        let question = load_questions(&txn, vec![model]).await?.pop();
        txn.commit().await?;
        Ok(question)
    }

    pub async fn delete_question_impl(&self, id: i64) -> Result<bool> {
        let result = Questions::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("删除题目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 保存答题记录与所选选项快照
    pub async fn create_answer_impl(
        &self,
        student_id: i64,
        question_id: i64,
        answer_text: Option<String>,
        graded: GradedAnswer,
    ) -> Result<StudentAnswer> {
        let txn = self.db.begin().await?;

        let model = student_answers::ActiveModel {
            student_id: Set(student_id),
            question_id: Set(question_id),
            answer_text: Set(answer_text),
            is_correct: Set(graded.is_correct),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| MarketError::database_operation(format!("保存答题失败: {e}")))?;

        if !graded.selected.is_empty() {
            let links = graded
                .selected
                .iter()
                .map(|choice| student_answer_choices::ActiveModel {
                    answer_id: Set(model.id),
                    choice_id: Set(choice.choice_id),
                    is_correct: Set(choice.is_correct),
                });
            StudentAnswerChoices::insert_many(links)
                .exec_without_returning(&txn)
                .await
                .map_err(|e| MarketError::database_operation(format!("保存所选选项失败: {e}")))?;
        }

        txn.commit().await?;
        Ok(model.into_answer(graded.selected))
    }

    pub async fn list_answers_impl(
        &self,
        student_id: i64,
        exam_id: Option<i64>,
    ) -> Result<Vec<StudentAnswer>> {
        let mut select =
            StudentAnswers::find().filter(student_answers::Column::StudentId.eq(student_id));

        if let Some(exam_id) = exam_id {
            let question_ids: Vec<i64> = Questions::find()
                .filter(questions::Column::ExamId.eq(exam_id))
                .all(&self.db)
                .await
                .map_err(|e| MarketError::database_operation(format!("查询题目列表失败: {e}")))?
                .into_iter()
                .map(|q| q.id)
                .collect();
            if question_ids.is_empty() {
                return Ok(Vec::new());
            }
            select = select.filter(student_answers::Column::QuestionId.is_in(question_ids));
        }

        let answers = select
            .order_by_asc(student_answers::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询答题记录失败: {e}")))?;
        if answers.is_empty() {
            return Ok(Vec::new());
        }

        let answer_ids: Vec<i64> = answers.iter().map(|a| a.id).collect();
        let mut selected_map: HashMap<i64, Vec<SelectedChoice>> = HashMap::new();
        for link in StudentAnswerChoices::find()
            .filter(student_answer_choices::Column::AnswerId.is_in(answer_ids))
            .order_by_asc(student_answer_choices::Column::ChoiceId)
            .all(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询所选选项失败: {e}")))?
        {
            selected_map
                .entry(link.answer_id)
                .or_default()
                .push(link.into_selected_choice());
        }

        Ok(answers
            .into_iter()
            .map(|a| {
                let selected = selected_map.remove(&a.id).unwrap_or_default();
                a.into_answer(selected)
            })
            .collect())
    }
}
