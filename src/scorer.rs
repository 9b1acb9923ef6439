//! Question scorer: turns raw assessment answers into a skill profile.
//!
//! Scoring is a pure function of the answers, the question set, and the
//! configured thresholds. Two identical submissions always produce identical
//! results.

use std::collections::BTreeMap;

use crate::config::SkillThresholds;
use crate::error::AlgoError;
use crate::types::{AssessmentResult, Question, SkillLevel};

/// Score one assessment submission.
///
/// `answers[i]` is the selected option index for `questions[i]`. Each answer
/// contributes its option weight toward the question's category; per-category
/// and overall scores are the earned weight divided by the maximum earnable
/// weight, clamped into `[0, 1]`.
pub fn analyze(
    answers: &[usize],
    questions: &[Question],
    thresholds: &SkillThresholds,
) -> Result<AssessmentResult, AlgoError> {
    if questions.is_empty() {
        return Err(AlgoError::MalformedInput(
            "assessment has no questions".to_string(),
        ));
    }
    if answers.len() != questions.len() {
        return Err(AlgoError::MalformedInput(format!(
            "expected {} answers, got {}",
            questions.len(),
            answers.len()
        )));
    }

    let mut earned: BTreeMap<&str, f64> = BTreeMap::new();
    let mut maximum: BTreeMap<&str, f64> = BTreeMap::new();
    let mut total_earned = 0.0;
    let mut total_max = 0.0;

    for (index, (answer, question)) in answers.iter().zip(questions).enumerate() {
        let option = question.options.get(*answer).ok_or_else(|| {
            AlgoError::MalformedInput(format!(
                "answer {} out of range for question {} with {} options",
                answer,
                index,
                question.options.len()
            ))
        })?;
        let max = question.max_weight();

        *earned.entry(question.category.as_str()).or_default() += option.weight;
        *maximum.entry(question.category.as_str()).or_default() += max;
        total_earned += option.weight;
        total_max += max;
    }

    let mut category_scores = BTreeMap::new();
    for (category, max) in &maximum {
        let got = earned.get(category).copied().unwrap_or(0.0);
        let score = if *max > 0.0 {
            (got / max).clamp(0.0, 1.0)
        } else {
            0.0
        };
        category_scores.insert((*category).to_string(), score);
    }

    let overall_score = if total_max > 0.0 {
        (total_earned / total_max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let skill_level = SkillLevel::from_score(overall_score, thresholds);

    tracing::debug!(
        level = skill_level.as_str(),
        score = overall_score,
        categories = category_scores.len(),
        "assessment scored"
    );

    Ok(AssessmentResult {
        skill_level,
        category_scores,
        overall_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AnswerOption;

    fn question(category: &str, weights: &[f64]) -> Question {
        Question {
            prompt: format!("About {category}"),
            category: category.to_string(),
            options: weights
                .iter()
                .map(|w| AnswerOption {
                    label: format!("worth {w}"),
                    weight: *w,
                })
                .collect(),
        }
    }

    #[test]
    fn test_eighty_percent_is_advanced() {
        // Earned 12 of a possible 15 across three questions.
        let questions = vec![
            question("foundations", &[0.0, 2.0, 5.0]),
            question("statistics", &[0.0, 2.0, 5.0]),
            question("visualization", &[0.0, 2.0, 5.0]),
        ];
        let result = analyze(&[2, 2, 1], &questions, &SkillThresholds::default()).unwrap();

        assert!((result.overall_score - 0.8).abs() < 1e-9);
        assert_eq!(result.skill_level, SkillLevel::Advanced);
        assert_eq!(result.category_scores["foundations"], 1.0);
        assert!((result.category_scores["statistics"] - 1.0).abs() < 1e-9);
        assert!((result.category_scores["visualization"] - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_answer_count_mismatch_is_rejected() {
        let questions = vec![question("foundations", &[0.0, 1.0])];
        let err = analyze(&[0, 0], &questions, &SkillThresholds::default()).unwrap_err();
        assert!(matches!(err, AlgoError::MalformedInput(_)));
        assert!(err.to_string().contains("expected 1 answers"), "got {err}");
    }

    #[test]
    fn test_answer_index_out_of_range_is_rejected() {
        let questions = vec![question("foundations", &[0.0, 1.0])];
        let err = analyze(&[2], &questions, &SkillThresholds::default()).unwrap_err();
        assert!(matches!(err, AlgoError::MalformedInput(_)));
        assert!(err.to_string().contains("out of range"), "got {err}");
    }

    #[test]
    fn test_empty_assessment_is_rejected() {
        let err = analyze(&[], &[], &SkillThresholds::default()).unwrap_err();
        assert!(matches!(err, AlgoError::MalformedInput(_)));
    }

    #[test]
    fn test_scores_stay_in_unit_interval() {
        let questions = vec![
            question("foundations", &[0.0]),
            question("statistics", &[4.0, 4.0]),
        ];
        let result = analyze(&[0, 1], &questions, &SkillThresholds::default()).unwrap();

        for (category, score) in &result.category_scores {
            assert!((0.0..=1.0).contains(score), "{category} score {score}");
        }
        assert!((0.0..=1.0).contains(&result.overall_score));
    }

    #[test]
    fn test_all_zero_weights_score_zero() {
        let questions = vec![question("foundations", &[0.0, 0.0])];
        let result = analyze(&[1], &questions, &SkillThresholds::default()).unwrap();
        assert_eq!(result.overall_score, 0.0);
        assert_eq!(result.category_scores["foundations"], 0.0);
        assert_eq!(result.skill_level, SkillLevel::Beginner);
    }

    #[test]
    fn test_same_input_same_output() {
        let questions = vec![
            question("foundations", &[0.0, 1.0, 2.0]),
            question("statistics", &[0.0, 3.0]),
            question("foundations", &[1.0, 2.0]),
        ];
        let answers = [1, 1, 0];
        let first = analyze(&answers, &questions, &SkillThresholds::default()).unwrap();
        let second = analyze(&answers, &questions, &SkillThresholds::default()).unwrap();
        assert_eq!(first, second);
    }
}
