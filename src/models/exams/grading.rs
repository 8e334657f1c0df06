//! 选择题判分
//!
//! 只在提交时判分一次，结果冻结在答题记录里。

use std::collections::HashSet;

use super::entities::{Choice, SelectedChoice};

#[derive(Debug, Clone, PartialEq)]
pub struct GradedAnswer {
    pub selected: Vec<SelectedChoice>,
    pub is_correct: Option<bool>,
}

/// 根据题目的全部选项为所选选项判分
///
/// 所选选项必须都属于该题，否则返回不属于该题的选项 id。
/// 选中集合与正确集合完全相同时判为正确；未选任何选项时为纯文本作答，结果为空。
pub fn grade_choices(choices: &[Choice], selected_ids: &[i64]) -> Result<GradedAnswer, i64> {
    let mut seen = HashSet::new();
    let mut selected = Vec::new();
    for id in selected_ids {
        if !seen.insert(*id) {
            continue;
        }
        let choice = choices.iter().find(|c| c.id == *id).ok_or(*id)?;
        selected.push(SelectedChoice {
            choice_id: choice.id,
            is_correct: choice.is_correct,
        });
    }

    if selected.is_empty() {
        return Ok(GradedAnswer {
            selected,
            is_correct: None,
        });
    }

    let correct: HashSet<i64> = choices.iter().filter(|c| c.is_correct).map(|c| c.id).collect();
    Ok(GradedAnswer {
        is_correct: Some(seen == correct),
        selected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices() -> Vec<Choice> {
        [(1, true), (2, true), (3, false)]
            .into_iter()
            .map(|(id, is_correct)| Choice {
                id,
                question_id: 1,
                text: format!("choice {id}"),
                is_correct,
            })
            .collect()
    }

    #[test]
    fn test_exact_correct_set() {
        let graded = grade_choices(&choices(), &[2, 1]).unwrap();
        assert_eq!(graded.is_correct, Some(true));
        assert_eq!(graded.selected.len(), 2);
    }

    #[test]
    fn test_missing_or_extra_choice() {
        assert_eq!(grade_choices(&choices(), &[1]).unwrap().is_correct, Some(false));
        assert_eq!(
            grade_choices(&choices(), &[1, 2, 3]).unwrap().is_correct,
            Some(false)
        );
    }

    #[test]
    fn test_duplicate_ids_collapse() {
        let graded = grade_choices(&choices(), &[1, 2, 2]).unwrap();
        assert_eq!(graded.is_correct, Some(true));
        assert_eq!(graded.selected.len(), 2);
    }

    #[test]
    fn test_foreign_choice_rejected() {
        assert_eq!(grade_choices(&choices(), &[1, 99]), Err(99));
    }

    #[test]
    fn test_text_only_answer() {
        let graded = grade_choices(&choices(), &[]).unwrap();
        assert_eq!(graded.is_correct, None);
        assert!(graded.selected.is_empty());
    }

    #[test]
    fn test_snapshot_keeps_flags() {
        let graded = grade_choices(&choices(), &[3]).unwrap();
        assert_eq!(
            graded.selected,
            vec![SelectedChoice {
                choice_id: 3,
                is_correct: false
            }]
        );
    }
}
