use super::SeaOrmStorage;
use crate::entity::prelude::*;
use crate::entity::{assignment_submissions, assignments};
use crate::errors::{MarketError, Result};
use crate::models::assignments::{
    entities::{Assignment, Submission},
    requests::{
        AssignmentListQuery, CreateAssignmentRequest, CreateSubmissionRequest,
        UpdateAssignmentRequest,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn list_assignments_impl(&self, query: AssignmentListQuery) -> Result<Vec<Assignment>> {
        let mut select = Assignments::find();
        if let Some(course_id) = query.course_id {
            select = select.filter(assignments::Column::CourseId.eq(course_id));
        }

        let result = select
            .order_by_asc(assignments::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询作业列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_assignment()).collect())
    }

    pub async fn get_assignment_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    pub async fn create_assignment_impl(
        &self,
        teacher_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let model = assignments::ActiveModel {
            course_id: Set(req.course_id),
            teacher_id: Set(teacher_id),
            name: Set(req.name),
            description: Set(req.description),
            due_date: Set(req.due_date.timestamp()),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| MarketError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(model.into_assignment())
    }

    pub async fn update_assignment_impl(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        let Some(existing) = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询作业失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(description) = update.description {
            model.description = Set(description);
        }
        if let Some(due_date) = update.due_date {
            model.due_date = Set(due_date.timestamp());
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("更新作业失败: {e}")))?;

        Ok(Some(updated.into_assignment()))
    }

    pub async fn delete_assignment_impl(&self, id: i64) -> Result<bool> {
        let result = Assignments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("删除作业失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn list_assignment_submissions_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<Submission>> {
        let result = AssignmentSubmissions::find()
            .filter(assignment_submissions::Column::AssignmentId.eq(assignment_id))
            .order_by_asc(assignment_submissions::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询提交列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_submission()).collect())
    }

    pub async fn list_student_submissions_impl(&self, student_id: i64) -> Result<Vec<Submission>> {
        let result = AssignmentSubmissions::find()
            .filter(assignment_submissions::Column::StudentId.eq(student_id))
            .order_by_asc(assignment_submissions::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询提交列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_submission()).collect())
    }

    pub async fn get_submission_impl(&self, id: i64) -> Result<Option<Submission>> {
        let result = AssignmentSubmissions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    pub async fn create_submission_impl(
        &self,
        student_id: i64,
        req: CreateSubmissionRequest,
    ) -> Result<Submission> {
        let model = assignment_submissions::ActiveModel {
            assignment_id: Set(req.assignment_id),
            student_id: Set(student_id),
            submission_file: Set(req.submission_file),
            submitted_at: Set(chrono::Utc::now().timestamp()),
            grade: Set(None),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| MarketError::database_operation(format!("创建提交失败: {e}")))?;

        Ok(model.into_submission())
    }

    /// 只修改成绩
    pub async fn grade_submission_impl(&self, id: i64, grade: i16) -> Result<Option<Submission>> {
        let Some(existing) = AssignmentSubmissions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询提交失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        model.grade = Set(Some(grade));
        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("评分失败: {e}")))?;

        Ok(Some(updated.into_submission()))
    }
}
