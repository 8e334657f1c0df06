use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Price;

/// 难度等级，课程等级与学生年级共用
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Level::Beginner),
            "intermediate" => Ok(Level::Intermediate),
            "advanced" => Ok(Level::Advanced),
            _ => Err(format!("Invalid level: {s}")),
        }
    }
}

/// 课程时长档位
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CourseDuration {
    #[serde(rename = "under_2_hours")]
    Under2Hours,
    #[serde(rename = "1_4_weeks")]
    OneToFourWeeks,
    #[serde(rename = "1_3_months")]
    OneToThreeMonths,
    #[serde(rename = "3_6_months")]
    ThreeToSixMonths,
}

impl CourseDuration {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseDuration::Under2Hours => "under_2_hours",
            CourseDuration::OneToFourWeeks => "1_4_weeks",
            CourseDuration::OneToThreeMonths => "1_3_months",
            CourseDuration::ThreeToSixMonths => "3_6_months",
        }
    }
}

impl std::fmt::Display for CourseDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CourseDuration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "under_2_hours" => Ok(CourseDuration::Under2Hours),
            "1_4_weeks" => Ok(CourseDuration::OneToFourWeeks),
            "1_3_months" => Ok(CourseDuration::OneToThreeMonths),
            "3_6_months" => Ok(CourseDuration::ThreeToSixMonths),
            _ => Err(format!("Invalid course duration: {s}")),
        }
    }
}

/// 课程基础信息（单表行）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub course_name: String,
    pub category_id: i64,
    pub teacher_id: i64,
    pub description: String,
    pub price: Price,
    pub level: Level,
    pub duration: CourseDuration,
    pub course_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_wire_names() {
        assert_eq!(
            serde_json::to_string(&CourseDuration::OneToFourWeeks).unwrap(),
            "\"1_4_weeks\""
        );
        let parsed: CourseDuration = serde_json::from_str("\"under_2_hours\"").unwrap();
        assert_eq!(parsed, CourseDuration::Under2Hours);
        for d in [
            CourseDuration::Under2Hours,
            CourseDuration::OneToFourWeeks,
            CourseDuration::OneToThreeMonths,
            CourseDuration::ThreeToSixMonths,
        ] {
            assert_eq!(d.as_str().parse::<CourseDuration>().unwrap(), d);
        }
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("advanced".parse::<Level>().unwrap(), Level::Advanced);
        assert!("expert".parse::<Level>().is_err());
    }
}
