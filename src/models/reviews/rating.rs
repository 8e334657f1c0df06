//! 课程评分聚合
//!
//! 每次读取时根据当前评价行计算，不做缓存。

use serde::{Deserialize, Serialize};

/// 评价人数超过该值时显示为 "10000+"
pub const REVIEWER_COUNT_CAP: u64 = 10_000;

/// 评价人数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReviewerCount {
    Exact(u64),
    Capped(String),
}

impl ReviewerCount {
    pub fn from_count(count: u64) -> Self {
        if count > REVIEWER_COUNT_CAP {
            ReviewerCount::Capped(format!("{REVIEWER_COUNT_CAP}+"))
        } else {
            ReviewerCount::Exact(count)
        }
    }
}

/// 平均评分，保留一位小数（四舍五入，远离零）
///
/// 分母是全部评价数（包括未打星的评价），没有评价时为 0。
pub fn average_rating(stars: &[Option<i16>]) -> f64 {
    if stars.is_empty() {
        return 0.0;
    }
    let sum: i64 = stars.iter().flatten().map(|s| i64::from(*s)).sum();
    let count = stars.len() as i64;
    // 以十分位整数计算，避免浮点误差影响 .x5 的进位
    let doubled = 20 * sum.abs() + count;
    let tenths = doubled / (2 * count);
    let tenths = if sum < 0 { -tenths } else { tenths };
    tenths as f64 / 10.0
}

/// 一门课程的评分汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRating {
    pub avg_rating: f64,
    pub total_people: ReviewerCount,
}

impl CourseRating {
    pub fn from_stars(stars: &[Option<i16>]) -> Self {
        Self {
            avg_rating: average_rating(stars),
            total_people: ReviewerCount::from_count(stars.len() as u64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_reviews() {
        let rating = CourseRating::from_stars(&[]);
        assert_eq!(rating.avg_rating, 0.0);
        assert_eq!(rating.total_people, ReviewerCount::Exact(0));
    }

    #[test]
    fn test_null_stars_count_in_denominator() {
        let rating = CourseRating::from_stars(&[Some(5), Some(5), None, Some(3)]);
        assert_eq!(rating.avg_rating, 3.3);
        assert_eq!(rating.total_people, ReviewerCount::Exact(4));
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        // 13 / 4 = 3.25 -> 3.3
        assert_eq!(average_rating(&[Some(4), Some(3), Some(3), Some(3)]), 3.3);
        // 9 / 2 = 4.5
        assert_eq!(average_rating(&[Some(4), Some(5)]), 4.5);
        assert_eq!(average_rating(&[Some(5), Some(4), Some(4)]), 4.3);
    }

    #[test]
    fn test_only_null_stars() {
        assert_eq!(average_rating(&[None, None]), 0.0);
    }

    #[test]
    fn test_reviewer_count_cap() {
        assert_eq!(ReviewerCount::from_count(10_000), ReviewerCount::Exact(10_000));
        let capped = ReviewerCount::from_count(10_001);
        assert_eq!(capped, ReviewerCount::Capped("10000+".to_string()));
        assert_eq!(serde_json::to_string(&capped).unwrap(), "\"10000+\"");
        assert_eq!(
            serde_json::to_string(&ReviewerCount::Exact(4)).unwrap(),
            "4"
        );
    }
}
