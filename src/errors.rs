//! 统一错误处理模块
//!
//! 通过宏生成课程市场的错误枚举，每个变体带有稳定的错误代码与类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 生成 enum 本体、`code()`、`error_type()`、`message()` 以及
/// snake_case 形式的便捷构造函数。
macro_rules! define_market_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum MarketError {
            $($variant(String),)*
        }

        impl MarketError {
            /// 错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(MarketError::$variant(_) => $code,)*
                }
            }

            /// 错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(MarketError::$variant(_) => $type_name,)*
                }
            }

            pub fn message(&self) -> &str {
                match self {
                    $(MarketError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl MarketError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        MarketError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_market_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    FileOperation("E006", "File Operation Error"),
    Validation("E007", "Validation Error"),
    NotFound("E008", "Resource Not Found"),
    Serialization("E009", "Serialization Error"),
    DateParse("E010", "Date Parse Error"),
    Authentication("E011", "Authentication Error"),
    Authorization("E012", "Authorization Error"),
    Conflict("E013", "Resource Conflict"),
}

impl MarketError {
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for MarketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for MarketError {}

impl From<sea_orm::DbErr> for MarketError {
    fn from(err: sea_orm::DbErr) -> Self {
        MarketError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for MarketError {
    fn from(err: std::io::Error) -> Self {
        MarketError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for MarketError {
    fn from(err: serde_json::Error) -> Self {
        MarketError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for MarketError {
    fn from(err: chrono::ParseError) -> Self {
        MarketError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MarketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(MarketError::cache_connection("test").code(), "E001");
        assert_eq!(MarketError::database_config("test").code(), "E003");
        assert_eq!(MarketError::validation("test").code(), "E007");
        assert_eq!(MarketError::not_found("test").code(), "E008");
        assert_eq!(MarketError::authorization("test").code(), "E012");
        assert_eq!(MarketError::conflict("test").code(), "E013");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            MarketError::cache_connection("test").error_type(),
            "Cache Connection Error"
        );
        assert_eq!(
            MarketError::conflict("test").error_type(),
            "Resource Conflict"
        );
    }

    #[test]
    fn test_format_simple() {
        let err = MarketError::validation("Invalid card number");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid card number"));
    }

    #[test]
    fn test_from_db_err() {
        let err: MarketError = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert_eq!(err.code(), "E005");
        assert!(err.message().contains("boom"));
    }
}
