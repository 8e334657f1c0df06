use serde::{Deserialize, Serialize};

/// 字段级校验错误，作为 400 响应的 data 返回
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 请求体校验
pub trait Validate {
    fn validate(&self) -> Result<(), Vec<FieldError>>;
}

/// 收集字段错误的辅助结构
#[derive(Debug, Default)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    /// 将 `Result<(), &str>` 形式的校验结果记到指定字段
    pub fn check<E: Into<String>>(&mut self, field: &str, result: Result<(), E>) {
        if let Err(message) = result {
            self.push(field, message);
        }
    }

    pub fn into_result(self) -> Result<(), Vec<FieldError>> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self.0)
        }
    }
}
