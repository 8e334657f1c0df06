use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 100;

// 分页查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationQuery {
    #[serde(default = "default_page", deserialize_with = "deserialize_string_to_i64")]
    pub page: i64,
    #[serde(default = "default_size", deserialize_with = "deserialize_string_to_i64")]
    pub size: i64,
}

impl PaginationQuery {
    /// 归一化后的 (page, size)，page 从 1 开始，size 限制在 [1, 100]
    pub fn normalized(&self) -> (u64, u64) {
        normalize_page(self.page, self.size)
    }
}

pub fn normalize_page(page: i64, size: i64) -> (u64, u64) {
    (page.max(1) as u64, size.clamp(1, MAX_PAGE_SIZE) as u64)
}

// 分页响应信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl PaginationInfo {
    pub fn new(page: u64, size: u64, total: u64, total_pages: u64) -> Self {
        Self {
            page: page as i64,
            page_size: size as i64,
            total: total as i64,
            total_pages: total_pages as i64,
        }
    }
}

// 分页列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
}

// 支持字符串或整数形式的页码参数
pub(crate) fn deserialize_string_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Error, Unexpected, Visitor};
    use std::fmt;

    struct I64Visitor;

    impl<'de> Visitor<'de> for I64Visitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a string containing an integer")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            i64::try_from(value).map_err(|_| Error::invalid_value(Unexpected::Unsigned(value), &self))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            value
                .trim()
                .parse()
                .map_err(|_| Error::invalid_value(Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(I64Visitor)
}

pub(crate) fn default_page() -> i64 {
    1
}

pub(crate) fn default_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            size: default_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web::Query;

    #[test]
    fn test_normalize_clamps_size_and_page() {
        assert_eq!(normalize_page(0, 0), (1, 1));
        assert_eq!(normalize_page(-3, 500), (1, 100));
        assert_eq!(normalize_page(4, 20), (4, 20));
    }

    #[test]
    fn test_query_from_urlencoded_strings() {
        let query = Query::<PaginationQuery>::from_query("page=3&size=50").unwrap();
        assert_eq!(query.normalized(), (3, 50));

        let query = Query::<PaginationQuery>::from_query("").unwrap();
        assert_eq!(query.normalized(), (1, DEFAULT_PAGE_SIZE as u64));
    }

    #[test]
    fn test_query_rejects_garbage() {
        assert!(Query::<PaginationQuery>::from_query("page=abc").is_err());
    }
}
