use crate::errors::Result;
use std::sync::Arc;
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

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（基础表 + 角色表，同一事务）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 吊销 refresh token
    async fn revoke_refresh_token(&self, jti: &str, user_id: i64, expires_at: i64) -> Result<()>;
    async fn is_refresh_token_revoked(&self, jti: &str) -> Result<bool>;
    // 清理已过期的吊销记录，返回删除条数
    async fn purge_expired_revoked_tokens(&self, now: i64) -> Result<u64>;

    /// 参考数据
    async fn list_categories(&self) -> Result<Vec<Category>>;
    async fn get_category(&self, id: i64) -> Result<Option<Category>>;
    async fn create_category(&self, name: &str) -> Result<Category>;
    async fn list_skills(&self) -> Result<Vec<Skill>>;
    async fn create_skill(&self, name: &str) -> Result<Skill>;
    async fn list_countries(&self) -> Result<Vec<Country>>;
    async fn get_country(&self, id: i64) -> Result<Option<Country>>;

    /// 课程目录
    // 按筛选条件分页列出课程，附带评分汇总
    async fn list_courses(&self, query: CourseListQuery) -> Result<CourseListResponse>;
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    async fn get_course_detail(&self, id: i64) -> Result<Option<CourseDetail>>;
    async fn get_teacher_course_detail(&self, id: i64) -> Result<Option<TeacherCourseDetail>>;
    async fn create_course(&self, teacher_id: i64, course: CreateCourseRequest) -> Result<Course>;
    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>>;
    async fn delete_course(&self, id: i64) -> Result<bool>;
    // 选课，已选过时返回 false
    async fn enroll_student(&self, course_id: i64, student_id: i64) -> Result<bool>;
    async fn list_course_students(&self, course_id: i64) -> Result<Vec<UserBrief>>;

    /// 课时与语言版本
    async fn list_lessons(&self, course_id: i64) -> Result<Vec<Lesson>>;
    async fn get_lesson(&self, id: i64) -> Result<Option<Lesson>>;
    async fn create_lesson(
        &self,
        course_id: i64,
        teacher_id: i64,
        lesson: CreateLessonRequest,
    ) -> Result<Lesson>;
    async fn update_lesson(&self, id: i64, update: UpdateLessonRequest) -> Result<Option<Lesson>>;
    async fn delete_lesson(&self, id: i64) -> Result<bool>;
    async fn list_course_languages(&self, course_id: i64) -> Result<Vec<CourseLanguage>>;
    async fn get_course_language(&self, id: i64) -> Result<Option<CourseLanguage>>;
    async fn create_course_language(
        &self,
        course_id: i64,
        teacher_id: i64,
        language: CreateCourseLanguageRequest,
    ) -> Result<CourseLanguage>;
    async fn update_course_language(
        &self,
        id: i64,
        update: UpdateCourseLanguageRequest,
    ) -> Result<Option<CourseLanguage>>;
    async fn delete_course_language(&self, id: i64) -> Result<bool>;

    /// 评价
    async fn list_reviews(&self, query: ReviewListQuery) -> Result<ReviewListResponse>;
    async fn get_review(&self, id: i64) -> Result<Option<Review>>;
    async fn create_review(&self, student_id: i64, review: CreateReviewRequest) -> Result<Review>;
    async fn delete_review(&self, id: i64) -> Result<bool>;

    /// 购物车
    // 获取学生的购物车，不存在时创建
    async fn get_or_create_cart(&self, student_id: i64) -> Result<Cart>;
    async fn get_cart_detail(&self, student_id: i64) -> Result<CartDetail>;
    async fn list_cart_items(&self, cart_id: i64) -> Result<Vec<CartItem>>;
    // 只返回属于该购物车的条目
    async fn get_cart_item(&self, cart_id: i64, item_id: i64) -> Result<Option<CartItem>>;
    async fn add_cart_item(&self, cart_id: i64, course_id: i64) -> Result<CartItem>;
    async fn update_cart_item(
        &self,
        cart_id: i64,
        item_id: i64,
        course_id: i64,
    ) -> Result<Option<CartItem>>;
    async fn delete_cart_item(&self, cart_id: i64, item_id: i64) -> Result<bool>;
    async fn clear_cart(&self, cart_id: i64) -> Result<u64>;

    /// 订单
    async fn list_orders(&self, student_id: i64) -> Result<Vec<Order>>;
    async fn create_order(&self, order: NewOrder) -> Result<Order>;

    /// 考试
    async fn list_exams(&self, course_id: Option<i64>, teacher_id: Option<i64>) -> Result<Vec<Exam>>;
    async fn get_exam(&self, id: i64) -> Result<Option<Exam>>;
    async fn get_exam_detail(&self, id: i64) -> Result<Option<ExamDetail>>;
    async fn create_exam(&self, teacher_id: i64, exam: CreateExamRequest) -> Result<Exam>;
    async fn update_exam(&self, id: i64, update: UpdateExamRequest) -> Result<Option<Exam>>;
    async fn delete_exam(&self, id: i64) -> Result<bool>;
    async fn list_questions(&self, exam_id: i64) -> Result<Vec<Question>>;
    async fn get_question(&self, id: i64) -> Result<Option<Question>>;
    // 题目与选项在同一事务中写入
    async fn create_question(&self, exam_id: i64, question: CreateQuestionRequest)
    -> Result<Question>;
    async fn update_question(
        &self,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>>;
    async fn delete_question(&self, id: i64) -> Result<bool>;
    // 保存已判分的答题记录
    async fn create_answer(
        &self,
        student_id: i64,
        question_id: i64,
        answer_text: Option<String>,
        graded: GradedAnswer,
    ) -> Result<StudentAnswer>;
    async fn list_answers(&self, student_id: i64, exam_id: Option<i64>)
    -> Result<Vec<StudentAnswer>>;

    /// 作业
    async fn list_assignments(&self, query: AssignmentListQuery) -> Result<Vec<Assignment>>;
    async fn get_assignment(&self, id: i64) -> Result<Option<Assignment>>;
    async fn create_assignment(
        &self,
        teacher_id: i64,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    async fn update_assignment(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    async fn delete_assignment(&self, id: i64) -> Result<bool>;
    async fn list_assignment_submissions(&self, assignment_id: i64) -> Result<Vec<Submission>>;
    async fn list_student_submissions(&self, student_id: i64) -> Result<Vec<Submission>>;
    async fn get_submission(&self, id: i64) -> Result<Option<Submission>>;
    async fn create_submission(
        &self,
        student_id: i64,
        submission: CreateSubmissionRequest,
    ) -> Result<Submission>;
    async fn grade_submission(&self, id: i64, grade: i16) -> Result<Option<Submission>>;

    /// 证书
    async fn list_certificates(&self, student_id: i64) -> Result<Vec<Certificate>>;
    async fn create_certificate(&self, certificate: IssueCertificateRequest)
    -> Result<Certificate>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
