use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：5 <= x <= 16
    if username.len() < 5 || username.len() > 16 {
        return Err("Username length must be between 5 and 16 characters");
    }
    // 用户名格式校验：只能包含字母、数字、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

static CARD_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{13,16}$").expect("Invalid card number regex"));

static CVV_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3}$").expect("Invalid CVV regex"));

/// 必填文本：去除首尾空白后非空，且不超过 `max_chars` 个字符
pub fn validate_required_text(value: &str, max_chars: usize) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("This field may not be blank".to_string());
    }
    if trimmed.chars().count() > max_chars {
        return Err(format!("Ensure this field has no more than {max_chars} characters"));
    }
    Ok(())
}

/// 整数闭区间校验
pub fn validate_range<T: PartialOrd + std::fmt::Display>(
    value: T,
    min: T,
    max: T,
) -> Result<(), String> {
    if value < min || value > max {
        return Err(format!("Value must be between {min} and {max}"));
    }
    Ok(())
}

/// 银行卡号：13~16 位数字（允许空格分隔）
pub fn validate_card_number(card_number: &str) -> Result<(), &'static str> {
    let digits: String = card_number.chars().filter(|c| !c.is_whitespace()).collect();
    if !CARD_NUMBER_RE.is_match(&digits) {
        return Err("Card number must contain 13 to 16 digits");
    }
    Ok(())
}

pub fn validate_cvv(cvv: &str) -> Result<(), &'static str> {
    if !CVV_RE.is_match(cvv) {
        return Err("CVV must contain exactly 3 digits");
    }
    Ok(())
}

/// 密码策略验证结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// 验证密码是否符合安全策略
///
/// 策略要求：
/// - 最小长度：8 字符
/// - 必须包含：大写字母 + 小写字母 + 数字
/// - 可选：特殊字符（增强安全性）
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    // 1. 长度检查：至少 8 个字符
    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }

    // 2. 大写字母检查
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }

    // 3. 小写字母检查
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }

    // 4. 数字检查
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    // 5. 常见弱密码检查
    let weak_passwords = [
        "password",
        "12345678",
        "123456789",
        "qwerty123",
        "admin123",
        "password1",
        "Password1",
        "Qwerty123",
        "Abcd1234",
    ];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// 简化的密码验证（返回 Result）
pub fn validate_password_simple(password: &str) -> Result<(), String> {
    let result = validate_password(password);
    if result.is_valid {
        Ok(())
    } else {
        Err(result.error_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecureP@ss1").is_valid);
        assert!(validate_password("MyP@ssw0rd").is_valid);
        assert!(validate_password("SecurePass123").is_valid);
    }

    #[test]
    fn test_short_password() {
        let result = validate_password("Ab1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_no_uppercase() {
        let result = validate_password("abcd1234");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one uppercase letter")
        );
    }

    #[test]
    fn test_no_lowercase() {
        let result = validate_password("ABCD1234");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one lowercase letter")
        );
    }

    #[test]
    fn test_no_digit() {
        let result = validate_password("AbcdEfgh");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one digit")
        );
    }

    #[test]
    fn test_username_rules() {
        assert!(validate_username("alice_01").is_ok());
        assert!(validate_username("abc").is_err());
        assert!(validate_username("with space").is_err());
        assert!(validate_username("a_very_long_username_x").is_err());
    }

    #[test]
    fn test_card_and_cvv() {
        assert!(validate_card_number("4111111111111111").is_ok());
        assert!(validate_card_number("4111 1111 1111 1").is_ok());
        assert!(validate_card_number("411111111111").is_err());
        assert!(validate_card_number("41111111111111112").is_err());
        assert!(validate_card_number("4111-1111-1111-1111").is_err());
        assert!(validate_cvv("123").is_ok());
        assert!(validate_cvv("12a").is_err());
        assert!(validate_cvv("1234").is_err());
    }

    #[test]
    fn test_required_text_and_range() {
        assert!(validate_required_text("  ", 10).is_err());
        assert!(validate_required_text("Rust", 3).is_err());
        assert!(validate_required_text("Rust", 4).is_ok());
        assert!(validate_range(5, 1, 5).is_ok());
        assert!(validate_range(0, 1, 5).is_err());
        assert!(validate_range(101, 1, 100).is_err());
    }

    #[test]
    fn test_common_password() {
        let result = validate_password("Password1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password is too common, please choose a stronger password")
        );
    }
}
