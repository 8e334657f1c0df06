use serde::{Deserialize, Serialize};

use super::entities::{User, UserProfile};

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

/// 资料列表，只包含当前用户自己
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub items: Vec<User>,
}

/// 嵌套在其他资源里的用户简要信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserBrief {
    pub id: i64,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<&User> for UserBrief {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

/// 课程详情中的教师信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherBrief {
    pub id: i64,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_picture: Option<String>,
    pub years_of_experience: i32,
}

impl From<&User> for TeacherBrief {
    fn from(user: &User) -> Self {
        let (profile_picture, years_of_experience) = match &user.profile {
            UserProfile::Teacher(t) => (t.profile_picture.clone(), t.years_of_experience),
            UserProfile::Student(_) => (None, 0),
        };
        Self {
            id: user.id,
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            profile_picture,
            years_of_experience,
        }
    }
}
