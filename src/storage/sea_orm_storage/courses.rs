use std::collections::{BTreeSet, HashMap};

use super::SeaOrmStorage;
use crate::entity::prelude::*;
use crate::entity::{categories, course_skills, course_students, courses, reviews, skills};
use crate::errors::{MarketError, Result};
use crate::models::{
    PaginationInfo,
    catalog::entities::{Category, Skill},
    common::pagination::normalize_page,
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::{CourseDetail, CourseListResponse, CourseSummary, TeacherCourseDetail},
    },
    reviews::rating::CourseRating,
    users::responses::{TeacherBrief, UserBrief},
};
use crate::utils::escape_like_pattern;
use sea_orm::sea_query::{Expr, ExprTrait, LikeExpr, OnConflict};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};

fn empty_page(page: u64, size: u64) -> CourseListResponse {
    CourseListResponse {
        items: Vec::new(),
        pagination: PaginationInfo::new(page, size, 0, 0),
    }
}

async fn replace_course_skills<C: ConnectionTrait>(
    db: &C,
    course_id: i64,
    skill_ids: &[i64],
) -> Result<()> {
    CourseSkills::delete_many()
        .filter(course_skills::Column::CourseId.eq(course_id))
        .exec(db)
        .await
        .map_err(|e| MarketError::database_operation(format!("清除课程技能失败: {e}")))?;

    let unique: BTreeSet<i64> = skill_ids.iter().copied().collect();
    if unique.is_empty() {
        return Ok(());
    }
    let links = unique.into_iter().map(|skill_id| course_skills::ActiveModel {
        course_id: Set(course_id),
        skill_id: Set(skill_id),
    });
    CourseSkills::insert_many(links)
        .exec_without_returning(db)
        .await
        .map_err(|e| MarketError::database_operation(format!("写入课程技能失败: {e}")))?;
    Ok(())
}

impl SeaOrmStorage {
    /// 为一组课程批量加载分类、技能和评分汇总
    pub(crate) async fn build_course_summaries(
        &self,
        courses: &[Course],
    ) -> Result<Vec<CourseSummary>> {
        if courses.is_empty() {
            return Ok(Vec::new());
        }
        let course_ids: Vec<i64> = courses.iter().map(|c| c.id).collect();
        let category_ids: Vec<i64> = courses
            .iter()
            .map(|c| c.category_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let category_map: HashMap<i64, Category> = Categories::find()
            .filter(categories::Column::Id.is_in(category_ids))
            .all(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询分类失败: {e}")))?
            .into_iter()
            .map(|m| (m.id, m.into_category()))
            .collect();

        let links = CourseSkills::find()
            .filter(course_skills::Column::CourseId.is_in(course_ids.clone()))
            .all(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询课程技能失败: {e}")))?;

        let skill_ids: Vec<i64> = links
            .iter()
            .map(|l| l.skill_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let skill_map: HashMap<i64, Skill> = if skill_ids.is_empty() {
            HashMap::new()
        } else {
            Skills::find()
                .filter(skills::Column::Id.is_in(skill_ids))
                .all(&self.db)
                .await
                .map_err(|e| MarketError::database_operation(format!("查询技能失败: {e}")))?
                .into_iter()
                .map(|m| (m.id, m.into_skill()))
                .collect()
        };

        let mut course_skill_map: HashMap<i64, Vec<Skill>> = HashMap::new();
        for link in links {
            if let Some(skill) = skill_map.get(&link.skill_id) {
                course_skill_map
                    .entry(link.course_id)
                    .or_default()
                    .push(skill.clone());
            }
        }

        // 评分只取课程 ID 与星级两列
        let star_rows: Vec<(i64, Option<i16>)> = Reviews::find()
            .select_only()
            .column(reviews::Column::CourseId)
            .column(reviews::Column::Stars)
            .filter(reviews::Column::CourseId.is_in(course_ids))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询课程评分失败: {e}")))?;

        let mut stars_map: HashMap<i64, Vec<Option<i16>>> = HashMap::new();
        for (course_id, stars) in star_rows {
            stars_map.entry(course_id).or_default().push(stars);
        }

        Ok(courses
            .iter()
            .map(|course| {
                let category = category_map
                    .get(&course.category_id)
                    .cloned()
                    .unwrap_or_else(|| Category {
                        id: course.category_id,
                        category_name: String::new(),
                    });
                let mut skills = course_skill_map.remove(&course.id).unwrap_or_default();
                skills.sort_by_key(|s| s.id);
                let stars = stars_map.remove(&course.id).unwrap_or_default();
                CourseSummary::new(course, category, skills, CourseRating::from_stars(&stars))
            })
            .collect())
    }

    async fn build_course_summary(&self, course: &Course) -> Result<CourseSummary> {
        self.build_course_summaries(std::slice::from_ref(course))
            .await?
            .pop()
            .ok_or_else(|| MarketError::not_found(format!("课程 {} 不存在", course.id)))
    }

    /// 按筛选条件分页列出课程，按 ID 升序
    pub async fn list_courses_impl(&self, query: CourseListQuery) -> Result<CourseListResponse> {
        let (page, size) = normalize_page(query.page, query.size);

        let mut select = Courses::find();

        if let Some(category_id) = query.category {
            select = select.filter(courses::Column::CategoryId.eq(category_id));
        }
        if let Some(level) = query.level {
            select = select.filter(courses::Column::Level.eq(level.as_str()));
        }
        if let Some(teacher_id) = query.teacher {
            select = select.filter(courses::Column::TeacherId.eq(teacher_id));
        }
        if let Some(duration) = query.duration {
            select = select.filter(courses::Column::Duration.eq(duration.as_str()));
        }

        // 技能筛选：先取关联表中的课程 ID
        if let Some(skill_id) = query.skills {
            let course_ids: Vec<i64> = CourseSkills::find()
                .filter(course_skills::Column::SkillId.eq(skill_id))
                .all(&self.db)
                .await
                .map_err(|e| MarketError::database_operation(format!("查询课程技能失败: {e}")))?
                .into_iter()
                .map(|l| l.course_id)
                .collect();
            if course_ids.is_empty() {
                return Ok(empty_page(page, size));
            }
            select = select.filter(courses::Column::Id.is_in(course_ids));
        }

        // 语言版本筛选：按语言版本 ID 找到所属课程
        if let Some(language_id) = query.course_languages {
            match CourseLanguages::find_by_id(language_id)
                .one(&self.db)
                .await
                .map_err(|e| MarketError::database_operation(format!("查询语言版本失败: {e}")))?
            {
                Some(language) => {
                    select = select.filter(courses::Column::Id.eq(language.course_id));
                }
                None => return Ok(empty_page(page, size)),
            }
        }

        // 只搜索课程名，不区分大小写
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(&search.trim().to_lowercase());
            select = select.filter(
                Expr::col((Courses, courses::Column::SearchName))
                    .like(LikeExpr::new(format!("%{escaped}%")).escape('\\')),
            );
        }

        select = select.order_by_asc(courses::Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| MarketError::database_operation(format!("查询课程总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| MarketError::database_operation(format!("查询课程页数失败: {e}")))?;

        let courses: Vec<Course> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询课程列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_course())
            .collect();

        Ok(CourseListResponse {
            items: self.build_course_summaries(&courses).await?,
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 学生视角的课程详情：教师信息与评价列表
    pub async fn get_course_detail_impl(&self, id: i64) -> Result<Option<CourseDetail>> {
        let Some(course) = self.get_course_by_id_impl(id).await? else {
            return Ok(None);
        };
        let summary = self.build_course_summary(&course).await?;

        let teacher = self
            .get_user_by_id_impl(course.teacher_id)
            .await?
            .ok_or_else(|| MarketError::not_found(format!("课程 {id} 的教师不存在")))?;

        let reviews = Reviews::find()
            .filter(reviews::Column::CourseId.eq(id))
            .order_by_asc(reviews::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询评价失败: {e}")))?
            .into_iter()
            .map(|m| m.into_review())
            .collect();

        Ok(Some(CourseDetail {
            course: summary,
            description: course.description,
            teacher: TeacherBrief::from(&teacher),
            created_at: course.created_at,
            updated_at: course.updated_at,
            reviews,
        }))
    }

    /// 教师视角的课程详情：语言版本、课时与选课学生
    pub async fn get_teacher_course_detail_impl(
        &self,
        id: i64,
    ) -> Result<Option<TeacherCourseDetail>> {
        let Some(course) = self.get_course_by_id_impl(id).await? else {
            return Ok(None);
        };
        let summary = self.build_course_summary(&course).await?;

        Ok(Some(TeacherCourseDetail {
            course: summary,
            description: course.description,
            created_at: course.created_at,
            updated_at: course.updated_at,
            course_languages: self.list_course_languages_impl(id).await?,
            lessons: self.list_lessons_impl(id).await?,
            students: self.list_course_students_impl(id).await?,
        }))
    }

    pub async fn create_course_impl(
        &self,
        teacher_id: i64,
        req: CreateCourseRequest,
    ) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();
        let txn = self.db.begin().await?;

        let model = courses::ActiveModel {
            search_name: Set(req.course_name.to_lowercase()),
            course_name: Set(req.course_name),
            category_id: Set(req.category_id),
            teacher_id: Set(teacher_id),
            description: Set(req.description),
            price_cents: Set(req.price.cents()),
            level: Set(req.level.to_string()),
            duration: Set(req.duration.to_string()),
            course_image: Set(req.course_image),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| MarketError::database_operation(format!("创建课程失败: {e}")))?;

        replace_course_skills(&txn, model.id, &req.skill_ids).await?;
        txn.commit().await?;

        Ok(model.into_course())
    }

    pub async fn update_course_impl(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let Some(existing) = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询课程失败: {e}")))?
        else {
            return Ok(None);
        };

        let txn = self.db.begin().await?;
        let mut model = existing.into_active_model();
        model.updated_at = Set(chrono::Utc::now().timestamp());

        if let Some(name) = update.course_name {
            model.search_name = Set(name.to_lowercase());
            model.course_name = Set(name);
        }
        if let Some(category_id) = update.category_id {
            model.category_id = Set(category_id);
        }
        if let Some(description) = update.description {
            model.description = Set(description);
        }
        if let Some(price) = update.price {
            model.price_cents = Set(price.cents());
        }
        if let Some(level) = update.level {
            model.level = Set(level.to_string());
        }
        if let Some(duration) = update.duration {
            model.duration = Set(duration.to_string());
        }
        if let Some(image) = update.course_image {
            model.course_image = Set(Some(image));
        }

        let updated = model
            .update(&txn)
            .await
            .map_err(|e| MarketError::database_operation(format!("更新课程失败: {e}")))?;

        if let Some(ref skill_ids) = update.skill_ids {
            replace_course_skills(&txn, id, skill_ids).await?;
        }
        txn.commit().await?;

        Ok(Some(updated.into_course()))
    }

    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 选课，重复选课不报错
    pub async fn enroll_student_impl(&self, course_id: i64, student_id: i64) -> Result<bool> {
        let model = course_students::ActiveModel {
            course_id: Set(course_id),
            student_id: Set(student_id),
            enrolled_at: Set(chrono::Utc::now().timestamp()),
        };
        let inserted = CourseStudents::insert(model)
            .on_conflict(
                OnConflict::columns([
                    course_students::Column::CourseId,
                    course_students::Column::StudentId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("选课失败: {e}")))?;

        Ok(inserted > 0)
    }

    pub async fn list_course_students_impl(&self, course_id: i64) -> Result<Vec<UserBrief>> {
        let student_ids: Vec<i64> = CourseStudents::find()
            .filter(course_students::Column::CourseId.eq(course_id))
            .all(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询选课学生失败: {e}")))?
            .into_iter()
            .map(|m| m.student_id)
            .collect();

        self.get_user_briefs(student_ids).await
    }
}
