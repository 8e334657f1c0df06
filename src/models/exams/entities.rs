use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exam {
    pub id: i64,
    pub course_id: i64,
    pub teacher_id: i64,
    pub exam_name: String,
    pub passing_score: Option<i16>,
    /// 考试时长（分钟）
    pub duration: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub id: i64,
    pub question_id: i64,
    pub text: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub exam_id: i64,
    pub text: String,
    pub choices: Vec<Choice>,
}

/// 学生看到的选项，不带正确标记
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublicChoice {
    pub id: i64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublicQuestion {
    pub id: i64,
    pub exam_id: i64,
    pub text: String,
    pub choices: Vec<PublicChoice>,
}

impl From<Question> for PublicQuestion {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            exam_id: question.exam_id,
            text: question.text,
            choices: question
                .choices
                .into_iter()
                .map(|c| PublicChoice {
                    id: c.id,
                    text: c.text,
                })
                .collect(),
        }
    }
}

/// 教师看到的考试详情
#[derive(Debug, Clone, Serialize)]
pub struct ExamDetail {
    #[serde(flatten)]
    pub exam: Exam,
    pub questions: Vec<Question>,
}

/// 学生看到的考试详情
#[derive(Debug, Clone, Serialize)]
pub struct PublicExamDetail {
    #[serde(flatten)]
    pub exam: Exam,
    pub questions: Vec<PublicQuestion>,
}

impl From<ExamDetail> for PublicExamDetail {
    fn from(detail: ExamDetail) -> Self {
        Self {
            exam: detail.exam,
            questions: detail.questions.into_iter().map(Into::into).collect(),
        }
    }
}

/// 答题时选中的选项，is_correct 为提交时的快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedChoice {
    pub choice_id: i64,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentAnswer {
    pub id: i64,
    pub student_id: i64,
    pub question_id: i64,
    pub answer_text: Option<String>,
    pub selected_choices: Vec<SelectedChoice>,
    /// 纯文本作答时为空
    pub is_correct: Option<bool>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_question_hides_correctness() {
        let question = Question {
            id: 1,
            exam_id: 2,
            text: "2 + 2 = ?".to_string(),
            choices: vec![
                Choice {
                    id: 10,
                    question_id: 1,
                    text: "4".to_string(),
                    is_correct: true,
                },
                Choice {
                    id: 11,
                    question_id: 1,
                    text: "5".to_string(),
                    is_correct: false,
                },
            ],
        };
        let value = serde_json::to_value(PublicQuestion::from(question)).unwrap();
        let body = value.to_string();
        assert!(!body.contains("is_correct"));
        assert_eq!(value["choices"][0]["id"], 10);
    }
}
