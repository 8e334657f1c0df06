use serde::Deserialize;

// 用户登录请求
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// 用户名或邮箱
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

/// 刷新与登出请求，refresh 缺省时从 cookie 读取
#[derive(Debug, Default, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh: Option<String>,
}
