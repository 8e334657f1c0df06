use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户基础表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::FirstName).string().null())
                    .col(ColumnDef::new(Users::LastName).string().null())
                    .col(
                        ColumnDef::new(Users::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 教师角色表（与用户一对一）
        manager
            .create_table(
                Table::create()
                    .table(TeacherProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeacherProfiles::UserId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TeacherProfiles::ProfilePicture)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(TeacherProfiles::Bio).text().null())
                    .col(
                        ColumnDef::new(TeacherProfiles::Expertise)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeacherProfiles::YearsOfExperience)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(TeacherProfiles::SocialLinks).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(TeacherProfiles::Table, TeacherProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 学生角色表（与用户一对一）
        manager
            .create_table(
                Table::create()
                    .table(StudentProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentProfiles::UserId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StudentProfiles::StudentImage).string().null())
                    .col(ColumnDef::new(StudentProfiles::Bio).text().null())
                    .col(
                        ColumnDef::new(StudentProfiles::GradeLevel)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StudentProfiles::DateOfBirth).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentProfiles::Table, StudentProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 已吊销的 refresh token
        manager
            .create_table(
                Table::create()
                    .table(RevokedTokens::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RevokedTokens::Jti)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RevokedTokens::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(RevokedTokens::ExpiresAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RevokedTokens::RevokedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(RevokedTokens::Table, RevokedTokens::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 分类表
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Categories::CategoryName).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 技能表
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Skills::SkillName).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::CourseName).string().not_null())
                    .col(ColumnDef::new(Courses::SearchName).string().not_null())
                    .col(ColumnDef::new(Courses::CategoryId).big_integer().not_null())
                    .col(ColumnDef::new(Courses::TeacherId).big_integer().not_null())
                    .col(ColumnDef::new(Courses::Description).text().not_null())
                    .col(ColumnDef::new(Courses::PriceCents).big_integer().not_null())
                    .col(ColumnDef::new(Courses::Level).string().not_null())
                    .col(ColumnDef::new(Courses::Duration).string().not_null())
                    .col(ColumnDef::new(Courses::CourseImage).string().null())
                    .col(ColumnDef::new(Courses::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Courses::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::TeacherId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 课程常用筛选字段索引
        for (name, column) in [
            ("idx_courses_category_id", Courses::CategoryId),
            ("idx_courses_teacher_id", Courses::TeacherId),
            ("idx_courses_level", Courses::Level),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Courses::Table)
                        .col(column)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }

        // 课程-技能关联表
        manager
            .create_table(
                Table::create()
                    .table(CourseSkills::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CourseSkills::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(CourseSkills::SkillId).big_integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(CourseSkills::CourseId)
                            .col(CourseSkills::SkillId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseSkills::Table, CourseSkills::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseSkills::Table, CourseSkills::SkillId)
                            .to(Skills::Table, Skills::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 课程-学生选课关联表
        manager
            .create_table(
                Table::create()
                    .table(CourseStudents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseStudents::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseStudents::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseStudents::EnrolledAt)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CourseStudents::CourseId)
                            .col(CourseStudents::StudentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseStudents::Table, CourseStudents::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseStudents::Table, CourseStudents::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 课程多语言视频
        manager
            .create_table(
                Table::create()
                    .table(CourseLanguages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseLanguages::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseLanguages::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseLanguages::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CourseLanguages::Language).string().not_null())
                    .col(ColumnDef::new(CourseLanguages::VideoFile).string().null())
                    .col(ColumnDef::new(CourseLanguages::VideoUrl).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseLanguages::Table, CourseLanguages::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseLanguages::Table, CourseLanguages::TeacherId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 课时表
        manager
            .create_table(
                Table::create()
                    .table(Lessons::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Lessons::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Lessons::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(Lessons::TeacherId).big_integer().not_null())
                    .col(ColumnDef::new(Lessons::LessonName).string().not_null())
                    .col(ColumnDef::new(Lessons::VideoUrl).string().null())
                    .col(ColumnDef::new(Lessons::VideoFile).string().null())
                    .col(ColumnDef::new(Lessons::Content).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Lessons::Table, Lessons::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Lessons::Table, Lessons::TeacherId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 评价表（不限制同一学生对同一课程的评价次数）
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reviews::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reviews::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Reviews::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(Reviews::Stars).small_integer().null())
                    .col(ColumnDef::new(Reviews::Comment).text().null())
                    .col(ColumnDef::new(Reviews::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Reviews::Table, Reviews::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Reviews::Table, Reviews::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_course_id")
                    .table(Reviews::Table)
                    .col(Reviews::CourseId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // 证书表
        manager
            .create_table(
                Table::create()
                    .table(Certificates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Certificates::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Certificates::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Certificates::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(Certificates::IssuedAt).big_integer().not_null())
                    .col(ColumnDef::new(Certificates::CertificateUrl).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Certificates::Table, Certificates::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Certificates::Table, Certificates::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Certificates::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Lessons::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseLanguages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseStudents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseSkills::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RevokedTokens::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TeacherProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Role,
    FirstName,
    LastName,
    IsActive,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TeacherProfiles {
    #[sea_orm(iden = "teacher_profiles")]
    Table,
    UserId,
    ProfilePicture,
    Bio,
    Expertise,
    YearsOfExperience,
    SocialLinks,
}

#[derive(DeriveIden)]
enum StudentProfiles {
    #[sea_orm(iden = "student_profiles")]
    Table,
    UserId,
    StudentImage,
    Bio,
    GradeLevel,
    DateOfBirth,
}

#[derive(DeriveIden)]
enum RevokedTokens {
    #[sea_orm(iden = "revoked_tokens")]
    Table,
    Jti,
    UserId,
    ExpiresAt,
    RevokedAt,
}

#[derive(DeriveIden)]
enum Categories {
    #[sea_orm(iden = "categories")]
    Table,
    Id,
    CategoryName,
}

#[derive(DeriveIden)]
enum Skills {
    #[sea_orm(iden = "skills")]
    Table,
    Id,
    SkillName,
}

#[derive(DeriveIden)]
pub(crate) enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    CourseName,
    SearchName,
    CategoryId,
    TeacherId,
    Description,
    PriceCents,
    Level,
    Duration,
    CourseImage,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CourseSkills {
    #[sea_orm(iden = "course_skills")]
    Table,
    CourseId,
    SkillId,
}

#[derive(DeriveIden)]
enum CourseStudents {
    #[sea_orm(iden = "course_students")]
    Table,
    CourseId,
    StudentId,
    EnrolledAt,
}

#[derive(DeriveIden)]
enum CourseLanguages {
    #[sea_orm(iden = "course_languages")]
    Table,
    Id,
    CourseId,
    TeacherId,
    Language,
    VideoFile,
    VideoUrl,
}

#[derive(DeriveIden)]
enum Lessons {
    #[sea_orm(iden = "lessons")]
    Table,
    Id,
    CourseId,
    TeacherId,
    LessonName,
    VideoUrl,
    VideoFile,
    Content,
}

#[derive(DeriveIden)]
enum Reviews {
    #[sea_orm(iden = "reviews")]
    Table,
    Id,
    StudentId,
    CourseId,
    Stars,
    Comment,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Certificates {
    #[sea_orm(iden = "certificates")]
    Table,
    Id,
    StudentId,
    CourseId,
    IssuedAt,
    CertificateUrl,
}
