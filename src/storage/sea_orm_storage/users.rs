use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::prelude::*;
use crate::entity::{revoked_tokens, student_profiles, teacher_profiles, users};
use crate::errors::{MarketError, Result};
use crate::models::courses::entities::Level;
use crate::models::users::{
    entities::{StudentProfile, TeacherProfile, User, UserProfile, UserRole},
    requests::{CreateUserRequest, ProfilePatch, UpdateUserRequest},
    responses::UserBrief,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait,
};

fn format_date(date: chrono::NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

// 角色表缺行时的兜底资料
fn fallback_profile(role: &str) -> UserProfile {
    match role.parse::<UserRole>() {
        Ok(UserRole::Teacher) => UserProfile::Teacher(TeacherProfile {
            profile_picture: None,
            bio: None,
            expertise: String::new(),
            years_of_experience: 0,
            social_links: None,
        }),
        _ => UserProfile::Student(StudentProfile {
            student_image: None,
            bio: None,
            grade_level: Level::Beginner,
            date_of_birth: None,
        }),
    }
}

impl SeaOrmStorage {
    /// 批量加载角色资料并组装业务模型
    pub(crate) async fn load_users<C: ConnectionTrait>(
        db: &C,
        models: Vec<UserModel>,
    ) -> Result<Vec<User>> {
        if models.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i64> = models.iter().map(|m| m.id).collect();

        let mut teachers: HashMap<i64, TeacherProfile> = TeacherProfiles::find()
            .filter(teacher_profiles::Column::UserId.is_in(ids.clone()))
            .all(db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询教师资料失败: {e}")))?
            .into_iter()
            .map(|m| (m.user_id, m.into_profile()))
            .collect();

        let mut students: HashMap<i64, StudentProfile> = StudentProfiles::find()
            .filter(student_profiles::Column::UserId.is_in(ids))
            .all(db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询学生资料失败: {e}")))?
            .into_iter()
            .map(|m| (m.user_id, m.into_profile()))
            .collect();

        Ok(models
            .into_iter()
            .map(|m| {
                let profile = match m.role.parse::<UserRole>() {
                    Ok(UserRole::Teacher) => teachers.remove(&m.id).map(UserProfile::Teacher),
                    Ok(UserRole::Student) => students.remove(&m.id).map(UserProfile::Student),
                    Err(_) => None,
                }
                .unwrap_or_else(|| fallback_profile(&m.role));
                m.into_user(profile)
            })
            .collect())
    }

    async fn load_user(&self, model: Option<UserModel>) -> Result<Option<User>> {
        match model {
            Some(m) => Ok(Self::load_users(&self.db, vec![m]).await?.pop()),
            None => Ok(None),
        }
    }

    pub(crate) async fn get_user_briefs(&self, ids: Vec<i64>) -> Result<Vec<UserBrief>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let models = Users::find()
            .filter(users::Column::Id.is_in(ids))
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询用户失败: {e}")))?;
        let users = Self::load_users(&self.db, models).await?;
        Ok(users.iter().map(UserBrief::from).collect())
    }

    /// 创建用户
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp();
        let txn = self.db.begin().await?;

        let user = users::ActiveModel {
            username: Set(req.username),
            email: Set(req.email),
            password_hash: Set(req.password_hash),
            role: Set(req.profile.role().to_string()),
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                MarketError::conflict("用户名或邮箱已存在")
            }
            _ => MarketError::database_operation(format!("创建用户失败: {e}")),
        })?;

        match &req.profile {
            UserProfile::Teacher(p) => {
                let profile = teacher_profiles::ActiveModel {
                    user_id: Set(user.id),
                    profile_picture: Set(p.profile_picture.clone()),
                    bio: Set(p.bio.clone()),
                    expertise: Set(p.expertise.clone()),
                    years_of_experience: Set(p.years_of_experience),
                    social_links: Set(p.social_links.clone()),
                };
                TeacherProfiles::insert(profile)
                    .exec_without_returning(&txn)
                    .await
                    .map_err(|e| {
                        MarketError::database_operation(format!("创建教师资料失败: {e}"))
                    })?;
            }
            UserProfile::Student(p) => {
                let profile = student_profiles::ActiveModel {
                    user_id: Set(user.id),
                    student_image: Set(p.student_image.clone()),
                    bio: Set(p.bio.clone()),
                    grade_level: Set(p.grade_level.to_string()),
                    date_of_birth: Set(p.date_of_birth.map(format_date)),
                };
                StudentProfiles::insert(profile)
                    .exec_without_returning(&txn)
                    .await
                    .map_err(|e| {
                        MarketError::database_operation(format!("创建学生资料失败: {e}"))
                    })?;
            }
        }

        txn.commit().await?;
        Ok(user.into_user(req.profile))
    }

    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询用户失败: {e}")))?;

        self.load_user(result).await
    }

    pub async fn get_user_by_username_impl(&self, username: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询用户失败: {e}")))?;

        self.load_user(result).await
    }

    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询用户失败: {e}")))?;

        self.load_user(result).await
    }

    /// 通过用户名或邮箱获取用户
    pub async fn get_user_by_username_or_email_impl(
        &self,
        identifier: &str,
    ) -> Result<Option<User>> {
        let result = Users::find()
            .filter(
                Condition::any()
                    .add(users::Column::Username.eq(identifier))
                    .add(users::Column::Email.eq(identifier)),
            )
            .one(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询用户失败: {e}")))?;

        self.load_user(result).await
    }

    /// 更新用户最后登录时间
    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Users::update_many()
            .col_expr(users::Column::LastLogin, sea_orm::sea_query::Expr::value(now))
            .filter(users::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("更新最后登录时间失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 更新用户基础信息与角色资料
    pub async fn update_user_impl(
        &self,
        id: i64,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        let Some(existing) = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询用户失败: {e}")))?
        else {
            return Ok(None);
        };

        let txn = self.db.begin().await?;
        let mut model = existing.into_active_model();
        model.updated_at = Set(chrono::Utc::now().timestamp());
        if let Some(email) = update.email {
            model.email = Set(email);
        }
        if let Some(password_hash) = update.password_hash {
            model.password_hash = Set(password_hash);
        }
        if let Some(first_name) = update.first_name {
            model.first_name = Set(Some(first_name));
        }
        if let Some(last_name) = update.last_name {
            model.last_name = Set(Some(last_name));
        }
        model.update(&txn).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => MarketError::conflict("邮箱已被使用"),
            _ => MarketError::database_operation(format!("更新用户失败: {e}")),
        })?;

        match update.profile {
            Some(ProfilePatch::Teacher {
                profile_picture,
                bio,
                expertise,
                years_of_experience,
                social_links,
            }) => {
                if let Some(profile) = TeacherProfiles::find_by_id(id).one(&txn).await? {
                    let mut profile = profile.into_active_model();
                    if let Some(v) = profile_picture {
                        profile.profile_picture = Set(Some(v));
                    }
                    if let Some(v) = bio {
                        profile.bio = Set(Some(v));
                    }
                    if let Some(v) = expertise {
                        profile.expertise = Set(v);
                    }
                    if let Some(v) = years_of_experience {
                        profile.years_of_experience = Set(v);
                    }
                    if let Some(v) = social_links {
                        profile.social_links = Set(Some(v));
                    }
                    profile.update(&txn).await?;
                }
            }
            Some(ProfilePatch::Student {
                student_image,
                bio,
                grade_level,
                date_of_birth,
            }) => {
                if let Some(profile) = StudentProfiles::find_by_id(id).one(&txn).await? {
                    let mut profile = profile.into_active_model();
                    if let Some(v) = student_image {
                        profile.student_image = Set(Some(v));
                    }
                    if let Some(v) = bio {
                        profile.bio = Set(Some(v));
                    }
                    if let Some(v) = grade_level {
                        profile.grade_level = Set(v.to_string());
                    }
                    if let Some(v) = date_of_birth {
                        profile.date_of_birth = Set(Some(format_date(v)));
                    }
                    profile.update(&txn).await?;
                }
            }
            None => {}
        }

        txn.commit().await?;
        self.get_user_by_id_impl(id).await
    }

    /// 写入吊销记录，重复吊销视为成功
    pub async fn revoke_refresh_token_impl(
        &self,
        jti: &str,
        user_id: i64,
        expires_at: i64,
    ) -> Result<()> {
        let model = revoked_tokens::ActiveModel {
            jti: Set(jti.to_string()),
            user_id: Set(user_id),
            expires_at: Set(expires_at),
            revoked_at: Set(chrono::Utc::now().timestamp()),
        };
        RevokedTokens::insert(model)
            .on_conflict(
                sea_orm::sea_query::OnConflict::column(revoked_tokens::Column::Jti)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("吊销令牌失败: {e}")))?;
        Ok(())
    }

    pub async fn is_refresh_token_revoked_impl(&self, jti: &str) -> Result<bool> {
        let found = RevokedTokens::find_by_id(jti.to_string())
            .one(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("查询吊销记录失败: {e}")))?;
        Ok(found.is_some())
    }

    /// 过期的 refresh token 本身已无法通过校验，吊销记录可以删除
    pub async fn purge_expired_revoked_tokens_impl(&self, now: i64) -> Result<u64> {
        let result = RevokedTokens::delete_many()
            .filter(revoked_tokens::Column::ExpiresAt.lt(now))
            .exec(&self.db)
            .await
            .map_err(|e| MarketError::database_operation(format!("清理吊销记录失败: {e}")))?;
        Ok(result.rows_affected)
    }
}
