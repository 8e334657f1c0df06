use super::SeaOrmStorage;
use crate::entity::prelude::*;
use crate::entity::{course_languages, lessons};
use crate::errors::{MarketError, Result};
use crate::models::lessons::{
    entities::{CourseLanguage, Lesson},
    requests::{
        CreateCourseLanguageRequest, CreateLessonRequest, UpdateCourseLanguageRequest,
        UpdateLessonRequest,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn list_lessons_impl(&self, course_id: i64) -> Result<Vec<Lesson>> {
        let result = Lessons::find()
            .filter(lessons::Column::CourseId.eq(course_id))
            .order_by_asc(lessons::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询课时列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_lesson()).collect())
    }

    pub async fn get_lesson_impl(&self, id: i64) -> Result<Option<Lesson>> {
        let result = Lessons::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询课时失败: {e}")))?;

        Ok(result.map(|m| m.into_lesson()))
    }

    pub async fn create_lesson_impl(
        &self,
        course_id: i64,
        teacher_id: i64,
        req: CreateLessonRequest,
    ) -> Result<Lesson> {
        let model = lessons::ActiveModel {
            course_id: Set(course_id),
            teacher_id: Set(teacher_id),
            lesson_name: Set(req.lesson_name),
            video_url: Set(req.video_url),
            video_file: Set(req.video_file),
            content: Set(req.content),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| MarketError::database_operation(format!("创建课时失败: {e}")))?;

        Ok(model.into_lesson())
    }

    pub async fn update_lesson_impl(
        &self,
        id: i64,
        update: UpdateLessonRequest,
    ) -> Result<Option<Lesson>> {
        let Some(existing) = Lessons::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询课时失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        if let Some(name) = update.lesson_name {
            model.lesson_name = Set(name);
        }
        if let Some(url) = update.video_url {
            model.video_url = Set(Some(url));
        }
        if let Some(file) = update.video_file {
            model.video_file = Set(Some(file));
        }
        if let Some(content) = update.content {
            model.content = Set(content);
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("更新课时失败: {e}")))?;

        Ok(Some(updated.into_lesson()))
    }

    pub async fn delete_lesson_impl(&self, id: i64) -> Result<bool> {
        let result = Lessons::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("删除课时失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn list_course_languages_impl(&self, course_id: i64) -> Result<Vec<CourseLanguage>> {
        let result = CourseLanguages::find()
            .filter(course_languages::Column::CourseId.eq(course_id))
            .order_by_asc(course_languages::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询语言版本失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_course_language()).collect())
    }

    pub async fn get_course_language_impl(&self, id: i64) -> Result<Option<CourseLanguage>> {
        let result = CourseLanguages::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询语言版本失败: {e}")))?;

        Ok(result.map(|m| m.into_course_language()))
    }

    pub async fn create_course_language_impl(
        &self,
        course_id: i64,
        teacher_id: i64,
        req: CreateCourseLanguageRequest,
    ) -> Result<CourseLanguage> {
        let model = course_languages::ActiveModel {
            course_id: Set(course_id),
            teacher_id: Set(teacher_id),
            language: Set(req.language),
            video_file: Set(req.video_file),
            video_url: Set(req.video_url),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| MarketError::database_operation(format!("创建语言版本失败: {e}")))?;

        Ok(model.into_course_language())
    }

    pub async fn update_course_language_impl(
        &self,
        id: i64,
        update: UpdateCourseLanguageRequest,
    ) -> Result<Option<CourseLanguage>> {
        let Some(existing) = CourseLanguages::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询语言版本失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        if let Some(language) = update.language {
            model.language = Set(language);
        }
        if let Some(file) = update.video_file {
            model.video_file = Set(Some(file));
        }
        if let Some(url) = update.video_url {
            model.video_url = Set(Some(url));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("更新语言版本失败: {e}")))?;

        Ok(Some(updated.into_course_language()))
    }

    pub async fn delete_course_language_impl(&self, id: i64) -> Result<bool> {
        let result = CourseLanguages::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("删除语言版本失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
