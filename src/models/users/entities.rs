use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::courses::entities::Level;
use crate::utils::jwt::{JwtUtils, TokenPair};

// 用户角色
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student,
    Teacher,
}

impl UserRole {
    pub const STUDENT: &'static str = "student";
    pub const TEACHER: &'static str = "teacher";

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => Self::STUDENT,
            UserRole::Teacher => Self::TEACHER,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::STUDENT => Ok(UserRole::Student),
            Self::TEACHER => Ok(UserRole::Teacher),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

/// 教师角色资料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherProfile {
    pub profile_picture: Option<String>,
    pub bio: Option<String>,
    pub expertise: String,
    pub years_of_experience: i32,
    pub social_links: Option<String>,
}

/// 学生角色资料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub student_image: Option<String>,
    pub bio: Option<String>,
    pub grade_level: Level,
    pub date_of_birth: Option<NaiveDate>,
}

/// 用户角色资料，一个用户只能是教师或学生之一
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum UserProfile {
    Teacher(TeacherProfile),
    Student(StudentProfile),
}

impl UserProfile {
    pub fn role(&self) -> UserRole {
        match self {
            UserProfile::Teacher(_) => UserRole::Teacher,
            UserProfile::Student(_) => UserRole::Student,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub profile: UserProfile,
}

impl User {
    pub fn role(&self) -> UserRole {
        self.profile.role()
    }

    pub fn is_teacher(&self) -> bool {
        self.role() == UserRole::Teacher
    }

    pub fn is_student(&self) -> bool {
        self.role() == UserRole::Student
    }

    pub fn generate_token_pair(
        &self,
        refresh_expiry: Option<chrono::Duration>,
    ) -> Result<TokenPair, jsonwebtoken::errors::Error> {
        JwtUtils::generate_token_pair(self.id, self.role().as_str(), refresh_expiry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_student() -> User {
        User {
            id: 7,
            username: "alice_01".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            first_name: Some("Alice".to_string()),
            last_name: None,
            is_active: true,
            last_login: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            profile: UserProfile::Student(StudentProfile {
                student_image: None,
                bio: None,
                grade_level: Level::Beginner,
                date_of_birth: NaiveDate::from_ymd_opt(2001, 5, 17),
            }),
        }
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let json = serde_json::to_value(sample_student()).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["profile"]["role"], "student");
        assert_eq!(json["profile"]["grade_level"], "beginner");
    }

    #[test]
    fn test_profile_tag_roundtrip_through_cache_json() {
        let user = sample_student();
        let json = serde_json::to_string(&user).unwrap();
        let restored: User = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.role(), UserRole::Student);
        assert!(restored.password_hash.is_empty());
        assert_eq!(restored.profile, user.profile);
    }

    #[test]
    fn test_role_parse() {
        assert_eq!("teacher".parse::<UserRole>().unwrap(), UserRole::Teacher);
        assert!("admin".parse::<UserRole>().is_err());
    }
}
