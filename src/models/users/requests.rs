use chrono::NaiveDate;
use serde::Deserialize;

use super::entities::{StudentProfile, TeacherProfile, UserProfile};
use crate::models::courses::entities::Level;
use crate::models::{FieldError, FieldErrors, Validate};
use crate::utils::validate::{
    validate_email, validate_password_simple, validate_range, validate_required_text,
    validate_username,
};

/// 学生注册请求
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterStudentRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub student_image: Option<String>,
    pub bio: Option<String>,
    #[serde(default = "default_grade_level")]
    pub grade_level: Level,
    pub date_of_birth: Option<NaiveDate>,
}

fn default_grade_level() -> Level {
    Level::Beginner
}

/// 教师注册请求
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterTeacherRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_picture: Option<String>,
    pub bio: Option<String>,
    pub expertise: String,
    #[serde(default)]
    pub years_of_experience: i32,
    pub social_links: Option<String>,
}

fn check_credentials(errors: &mut FieldErrors, username: &str, email: &str, password: &str) {
    errors.check("username", validate_username(username));
    errors.check("email", validate_email(email));
    errors.check("password", validate_password_simple(password));
}

impl Validate for RegisterStudentRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        check_credentials(&mut errors, &self.username, &self.email, &self.password);
        errors.into_result()
    }
}

impl Validate for RegisterTeacherRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        check_credentials(&mut errors, &self.username, &self.email, &self.password);
        errors.check("expertise", validate_required_text(&self.expertise, 255));
        errors.check(
            "years_of_experience",
            validate_range(self.years_of_experience, 0, 80),
        );
        errors.into_result()
    }
}

impl RegisterStudentRequest {
    pub fn into_create_request(self, password_hash: String) -> CreateUserRequest {
        CreateUserRequest {
            username: self.username,
            email: self.email,
            password_hash,
            first_name: self.first_name,
            last_name: self.last_name,
            profile: UserProfile::Student(StudentProfile {
                student_image: self.student_image,
                bio: self.bio,
                grade_level: self.grade_level,
                date_of_birth: self.date_of_birth,
            }),
        }
    }
}

impl RegisterTeacherRequest {
    pub fn into_create_request(self, password_hash: String) -> CreateUserRequest {
        CreateUserRequest {
            username: self.username,
            email: self.email,
            password_hash,
            first_name: self.first_name,
            last_name: self.last_name,
            profile: UserProfile::Teacher(TeacherProfile {
                profile_picture: self.profile_picture,
                bio: self.bio,
                expertise: self.expertise.trim().to_string(),
                years_of_experience: self.years_of_experience,
                social_links: self.social_links,
            }),
        }
    }
}

/// 存储层创建用户的输入（密码已哈希）
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile: UserProfile,
}

/// 学生更新自己的资料
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStudentRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub student_image: Option<String>,
    pub bio: Option<String>,
    pub grade_level: Option<Level>,
    pub date_of_birth: Option<NaiveDate>,
}

/// 教师更新自己的资料
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTeacherRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_picture: Option<String>,
    pub bio: Option<String>,
    pub expertise: Option<String>,
    pub years_of_experience: Option<i32>,
    pub social_links: Option<String>,
}

fn check_optional_credentials(
    errors: &mut FieldErrors,
    email: Option<&String>,
    password: Option<&String>,
) {
    if let Some(email) = email {
        errors.check("email", validate_email(email));
    }
    if let Some(password) = password {
        errors.check("password", validate_password_simple(password));
    }
}

impl Validate for UpdateStudentRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        check_optional_credentials(&mut errors, self.email.as_ref(), self.password.as_ref());
        errors.into_result()
    }
}

impl Validate for UpdateTeacherRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        check_optional_credentials(&mut errors, self.email.as_ref(), self.password.as_ref());
        if let Some(ref expertise) = self.expertise {
            errors.check("expertise", validate_required_text(expertise, 255));
        }
        if let Some(years) = self.years_of_experience {
            errors.check("years_of_experience", validate_range(years, 0, 80));
        }
        errors.into_result()
    }
}

/// 角色资料的局部更新
#[derive(Debug, Clone)]
pub enum ProfilePatch {
    Teacher {
        profile_picture: Option<String>,
        bio: Option<String>,
        expertise: Option<String>,
        years_of_experience: Option<i32>,
        social_links: Option<String>,
    },
    Student {
        student_image: Option<String>,
        bio: Option<String>,
        grade_level: Option<Level>,
        date_of_birth: Option<NaiveDate>,
    },
}

/// 存储层更新用户的输入（密码已哈希）
#[derive(Debug, Clone, Default)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile: Option<ProfilePatch>,
}

impl UpdateStudentRequest {
    pub fn into_update(self, password_hash: Option<String>) -> UpdateUserRequest {
        UpdateUserRequest {
            email: self.email,
            password_hash,
            first_name: self.first_name,
            last_name: self.last_name,
            profile: Some(ProfilePatch::Student {
                student_image: self.student_image,
                bio: self.bio,
                grade_level: self.grade_level,
                date_of_birth: self.date_of_birth,
            }),
        }
    }
}

impl UpdateTeacherRequest {
    pub fn into_update(self, password_hash: Option<String>) -> UpdateUserRequest {
        UpdateUserRequest {
            email: self.email,
            password_hash,
            first_name: self.first_name,
            last_name: self.last_name,
            profile: Some(ProfilePatch::Teacher {
                profile_picture: self.profile_picture,
                bio: self.bio,
                expertise: self.expertise,
                years_of_experience: self.years_of_experience,
                social_links: self.social_links,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student_request(username: &str, email: &str, password: &str) -> RegisterStudentRequest {
        RegisterStudentRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            first_name: None,
            last_name: None,
            student_image: None,
            bio: None,
            grade_level: Level::Beginner,
            date_of_birth: None,
        }
    }

    #[test]
    fn test_register_student_collects_all_field_errors() {
        let errors = student_request("ab", "not-an-email", "short")
            .validate()
            .unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"username"));
        assert!(fields.contains(&"email"));
        assert!(fields.contains(&"password"));
    }

    #[test]
    fn test_register_student_valid() {
        assert!(
            student_request("alice_01", "alice@example.com", "Str0ngPassw0rd")
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_grade_level_defaults_to_beginner() {
        let req: RegisterStudentRequest = serde_json::from_str(
            r#"{"username":"bob_student","email":"bob@example.com","password":"Str0ngPassw0rd"}"#,
        )
        .unwrap();
        assert_eq!(req.grade_level, Level::Beginner);
    }

    #[test]
    fn test_register_teacher_requires_expertise() {
        let req = RegisterTeacherRequest {
            username: "teacher01".to_string(),
            email: "t@example.com".to_string(),
            password: "Str0ngPassw0rd".to_string(),
            first_name: None,
            last_name: None,
            profile_picture: None,
            bio: None,
            expertise: "   ".to_string(),
            years_of_experience: -1,
            social_links: None,
        };
        let errors = req.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["expertise", "years_of_experience"]);
    }
}
