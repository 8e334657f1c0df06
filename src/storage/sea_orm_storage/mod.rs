//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod carts;
mod catalog;
mod certificates;
mod courses;
mod exams;
mod lessons;
mod orders;
mod reviews;
mod users;

#[cfg(test)]
mod tests;

use crate::config::AppConfig;
use crate::errors::{MarketError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| MarketError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| MarketError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| MarketError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| MarketError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 内存 SQLite，单连接保证所有查询看到同一个库
    #[cfg(test)]
    pub(crate) async fn new_in_memory() -> Result<Self> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| MarketError::database_config(format!("SQLite URL 解析失败: {e}")))?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opt)
            .await
            .map_err(|e| MarketError::database_connection(format!("SQLite 连接失败: {e}")))?;

        let db = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool);
        Migrator::up(&db, None)
            .await
            .map_err(|e| MarketError::database_operation(format!("数据库迁移失败: {e}")))?;

        Ok(Self { db })
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(MarketError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    assignments::{
        entities::{Assignment, Submission},
        requests::{
            AssignmentListQuery, CreateAssignmentRequest, CreateSubmissionRequest,
            UpdateAssignmentRequest,
        },
    },
    carts::entities::{Cart, CartDetail, CartItem},
    catalog::entities::{Category, Country, Skill},
    certificates::{entities::Certificate, requests::IssueCertificateRequest},
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::{CourseDetail, CourseListResponse, TeacherCourseDetail},
    },
    exams::{
        entities::{Exam, ExamDetail, Question, StudentAnswer},
        grading::GradedAnswer,
        requests::{CreateExamRequest, CreateQuestionRequest, UpdateExamRequest, UpdateQuestionRequest},
    },
    lessons::{
        entities::{CourseLanguage, Lesson},
        requests::{
            CreateCourseLanguageRequest, CreateLessonRequest, UpdateCourseLanguageRequest,
            UpdateLessonRequest,
        },
    },
    orders::{entities::Order, requests::NewOrder},
    reviews::{
        entities::Review,
        requests::{CreateReviewRequest, ReviewListQuery},
        responses::ReviewListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest},
        responses::UserBrief,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn revoke_refresh_token(&self, jti: &str, user_id: i64, expires_at: i64) -> Result<()> {
        self.revoke_refresh_token_impl(jti, user_id, expires_at).await
    }

    async fn is_refresh_token_revoked(&self, jti: &str) -> Result<bool> {
        self.is_refresh_token_revoked_impl(jti).await
    }

    async fn purge_expired_revoked_tokens(&self, now: i64) -> Result<u64> {
        self.purge_expired_revoked_tokens_impl(now).await
    }

    // 参考数据
    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.list_categories_impl().await
    }

    async fn get_category(&self, id: i64) -> Result<Option<Category>> {
        self.get_category_impl(id).await
    }

    async fn create_category(&self, name: &str) -> Result<Category> {
        self.create_category_impl(name).await
    }

    async fn list_skills(&self) -> Result<Vec<Skill>> {
        self.list_skills_impl().await
    }

    async fn create_skill(&self, name: &str) -> Result<Skill> {
        self.create_skill_impl(name).await
    }

    async fn list_countries(&self) -> Result<Vec<Country>> {
        self.list_countries_impl().await
    }

    async fn get_country(&self, id: i64) -> Result<Option<Country>> {
        self.get_country_impl(id).await
    }

    // 课程模块
    async fn list_courses(&self, query: CourseListQuery) -> Result<CourseListResponse> {
        self.list_courses_impl(query).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn get_course_detail(&self, id: i64) -> Result<Option<CourseDetail>> {
        self.get_course_detail_impl(id).await
    }

    async fn get_teacher_course_detail(&self, id: i64) -> Result<Option<TeacherCourseDetail>> {
        self.get_teacher_course_detail_impl(id).await
    }

    async fn create_course(&self, teacher_id: i64, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(teacher_id, course).await
    }

    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>> {
        self.update_course_impl(id, update).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    async fn enroll_student(&self, course_id: i64, student_id: i64) -> Result<bool> {
        self.enroll_student_impl(course_id, student_id).await
    }

    async fn list_course_students(&self, course_id: i64) -> Result<Vec<UserBrief>> {
        self.list_course_students_impl(course_id).await
    }

    // 课时与语言版本
    async fn list_lessons(&self, course_id: i64) -> Result<Vec<Lesson>> {
        self.list_lessons_impl(course_id).await
    }

    async fn get_lesson(&self, id: i64) -> Result<Option<Lesson>> {
        self.get_lesson_impl(id).await
    }

    async fn create_lesson(
        &self,
        course_id: i64,
        teacher_id: i64,
        lesson: CreateLessonRequest,
    ) -> Result<Lesson> {
        self.create_lesson_impl(course_id, teacher_id, lesson).await
    }

    async fn update_lesson(&self, id: i64, update: UpdateLessonRequest) -> Result<Option<Lesson>> {
        self.update_lesson_impl(id, update).await
    }

    async fn delete_lesson(&self, id: i64) -> Result<bool> {
        self.delete_lesson_impl(id).await
    }

    async fn list_course_languages(&self, course_id: i64) -> Result<Vec<CourseLanguage>> {
        self.list_course_languages_impl(course_id).await
    }

    async fn get_course_language(&self, id: i64) -> Result<Option<CourseLanguage>> {
        self.get_course_language_impl(id).await
    }

    async fn create_course_language(
        &self,
        course_id: i64,
        teacher_id: i64,
        language: CreateCourseLanguageRequest,
    ) -> Result<CourseLanguage> {
        self.create_course_language_impl(course_id, teacher_id, language)
            .await
    }

    async fn update_course_language(
        &self,
        id: i64,
        update: UpdateCourseLanguageRequest,
    ) -> Result<Option<CourseLanguage>> {
        self.update_course_language_impl(id, update).await
    }

    async fn delete_course_language(&self, id: i64) -> Result<bool> {
        self.delete_course_language_impl(id).await
    }

    // 评价模块
    async fn list_reviews(&self, query: ReviewListQuery) -> Result<ReviewListResponse> {
        self.list_reviews_impl(query).await
    }

    async fn get_review(&self, id: i64) -> Result<Option<Review>> {
        self.get_review_impl(id).await
    }

    async fn create_review(&self, student_id: i64, review: CreateReviewRequest) -> Result<Review> {
        self.create_review_impl(student_id, review).await
    }

    async fn delete_review(&self, id: i64) -> Result<bool> {
        self.delete_review_impl(id).await
    }

    // 购物车模块
    async fn get_or_create_cart(&self, student_id: i64) -> Result<Cart> {
        self.get_or_create_cart_impl(student_id).await
    }

    async fn get_cart_detail(&self, student_id: i64) -> Result<CartDetail> {
        self.get_cart_detail_impl(student_id).await
    }

    async fn list_cart_items(&self, cart_id: i64) -> Result<Vec<CartItem>> {
        self.list_cart_items_impl(cart_id).await
    }

    async fn get_cart_item(&self, cart_id: i64, item_id: i64) -> Result<Option<CartItem>> {
        self.get_cart_item_impl(cart_id, item_id).await
    }

    async fn add_cart_item(&self, cart_id: i64, course_id: i64) -> Result<CartItem> {
        self.add_cart_item_impl(cart_id, course_id).await
    }

    async fn update_cart_item(
        &self,
        cart_id: i64,
        item_id: i64,
        course_id: i64,
    ) -> Result<Option<CartItem>> {
        self.update_cart_item_impl(cart_id, item_id, course_id).await
    }

    async fn delete_cart_item(&self, cart_id: i64, item_id: i64) -> Result<bool> {
        self.delete_cart_item_impl(cart_id, item_id).await
    }

    async fn clear_cart(&self, cart_id: i64) -> Result<u64> {
        self.clear_cart_impl(cart_id).await
    }

    // 订单模块
    async fn list_orders(&self, student_id: i64) -> Result<Vec<Order>> {
        self.list_orders_impl(student_id).await
    }

    async fn create_order(&self, order: NewOrder) -> Result<Order> {
        self.create_order_impl(order).await
    }

    // 考试模块
    async fn list_exams(&self, course_id: Option<i64>, teacher_id: Option<i64>) -> Result<Vec<Exam>> {
        self.list_exams_impl(course_id, teacher_id).await
    }

    async fn get_exam(&self, id: i64) -> Result<Option<Exam>> {
        self.get_exam_impl(id).await
    }

    async fn get_exam_detail(&self, id: i64) -> Result<Option<ExamDetail>> {
        self.get_exam_detail_impl(id).await
    }

    async fn create_exam(&self, teacher_id: i64, exam: CreateExamRequest) -> Result<Exam> {
        self.create_exam_impl(teacher_id, exam).await
    }

    async fn update_exam(&self, id: i64, update: UpdateExamRequest) -> Result<Option<Exam>> {
        self.update_exam_impl(id, update).await
    }

    async fn delete_exam(&self, id: i64) -> Result<bool> {
        self.delete_exam_impl(id).await
    }

    async fn list_questions(&self, exam_id: i64) -> Result<Vec<Question>> {
        self.list_questions_impl(exam_id).await
    }

    async fn get_question(&self, id: i64) -> Result<Option<Question>> {
        self.get_question_impl(id).await
    }

    async fn create_question(
        &self,
        exam_id: i64,
        question: CreateQuestionRequest,
    ) -> Result<Question> {
        self.create_question_impl(exam_id, question).await
    }

    async fn update_question(
        &self,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>> {
        self.update_question_impl(id, update).await
    }

    async fn delete_question(&self, id: i64) -> Result<bool> {
        self.delete_question_impl(id).await
    }

    async fn create_answer(
        &self,
        student_id: i64,
        question_id: i64,
        answer_text: Option<String>,
        graded: GradedAnswer,
    ) -> Result<StudentAnswer> {
        self.create_answer_impl(student_id, question_id, answer_text, graded)
            .await
    }

    async fn list_answers(
        &self,
        student_id: i64,
        exam_id: Option<i64>,
    ) -> Result<Vec<StudentAnswer>> {
        self.list_answers_impl(student_id, exam_id).await
    }

    // 作业模块
    async fn list_assignments(&self, query: AssignmentListQuery) -> Result<Vec<Assignment>> {
        self.list_assignments_impl(query).await
    }

    async fn get_assignment(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_impl(id).await
    }

    async fn create_assignment(
        &self,
        teacher_id: i64,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(teacher_id, assignment).await
    }

    async fn update_assignment(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(id, update).await
    }

    async fn delete_assignment(&self, id: i64) -> Result<bool> {
        self.delete_assignment_impl(id).await
    }

    async fn list_assignment_submissions(&self, assignment_id: i64) -> Result<Vec<Submission>> {
        self.list_assignment_submissions_impl(assignment_id).await
    }

    async fn list_student_submissions(&self, student_id: i64) -> Result<Vec<Submission>> {
        self.list_student_submissions_impl(student_id).await
    }

    async fn get_submission(&self, id: i64) -> Result<Option<Submission>> {
        self.get_submission_impl(id).await
    }

    async fn create_submission(
        &self,
        student_id: i64,
        submission: CreateSubmissionRequest,
    ) -> Result<Submission> {
        self.create_submission_impl(student_id, submission).await
    }

    async fn grade_submission(&self, id: i64, grade: i16) -> Result<Option<Submission>> {
        self.grade_submission_impl(id, grade).await
    }

    // 证书模块
    async fn list_certificates(&self, student_id: i64) -> Result<Vec<Certificate>> {
        self.list_certificates_impl(student_id).await
    }

    async fn create_certificate(
        &self,
        certificate: IssueCertificateRequest,
    ) -> Result<Certificate> {
        self.create_certificate_impl(certificate).await
    }
}
