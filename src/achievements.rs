//! Achievement definitions and the evaluator that awards them.
//!
//! The evaluator is called with a user snapshot after every progress change.
//! It only ever reports achievements the user has not earned yet, so hosts
//! can surface each unlock exactly once.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::types::{EarnedAchievement, Module, User};

/// Unlock condition of an achievement.
///
/// The variant set is closed on purpose: content authors pick from these,
/// they do not invent new condition kinds at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AchievementCriteria {
    /// Total completed modules reaches `count`.
    #[serde(rename_all = "camelCase")]
    ModulesCompleted { count: u32 },
    /// Every module of `category` in the current path is completed.
    #[serde(rename_all = "camelCase")]
    CategoryMastery { category: String },
    /// `count` consecutive completions share one category.
    #[serde(rename_all = "camelCase")]
    CategoryStreak { count: u32 },
}

/// Catalog entry describing one earnable achievement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub points: u32,
    pub criteria: AchievementCriteria,
}

/// How far a user is toward one unearned achievement, for dashboards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementProgress {
    pub achievement_id: String,
    pub current_value: f64,
    pub target_value: f64,
    pub percentage: f64,
}

/// Return every catalog achievement the user now satisfies but has not
/// earned yet, in catalog order.
///
/// `previous_completed` is the completed-module list from before the change
/// being evaluated; it only feeds the progress-delta log line, the award
/// decision itself looks at the full snapshot so thresholds crossed in one
/// jump are still caught.
pub fn evaluate(
    user: &User,
    previous_completed: &[String],
    catalog: &[Achievement],
) -> Vec<Achievement> {
    let path_modules: &[Module] = user
        .current_path
        .as_ref()
        .map(|p| p.modules.as_slice())
        .unwrap_or(&[]);

    let newly: Vec<&str> = user
        .completed_modules
        .iter()
        .map(String::as_str)
        .filter(|id| !previous_completed.iter().any(|p| p == id))
        .collect();
    let delta_categories: BTreeSet<&str> = newly
        .iter()
        .filter_map(|id| path_modules.iter().find(|m| m.id == *id))
        .map(|m| m.category.as_str())
        .collect();
    tracing::debug!(
        user = %user.id,
        delta = newly.len(),
        categories = ?delta_categories,
        total = user.completed_modules.len(),
        "evaluating achievements"
    );

    let earned: HashSet<&str> = user
        .achievements
        .iter()
        .map(|a| a.achievement_id.as_str())
        .collect();

    let unlocked: Vec<Achievement> = catalog
        .iter()
        .filter(|entry| !earned.contains(entry.id.as_str()))
        .filter(|entry| criteria_met(&entry.criteria, user, path_modules))
        .cloned()
        .collect();

    if !unlocked.is_empty() {
        tracing::debug!(
            user = %user.id,
            unlocked = unlocked.len(),
            "new achievements earned"
        );
    }

    unlocked
}

/// Sum of catalog points for every earned achievement. Earned entries whose
/// id no longer exists in the catalog contribute nothing.
pub fn total_points(achievements: &[EarnedAchievement], catalog: &[Achievement]) -> u32 {
    achievements
        .iter()
        .filter_map(|earned| catalog.iter().find(|entry| entry.id == earned.achievement_id))
        .map(|entry| entry.points)
        .sum()
}

/// Progress toward one achievement, capped at 100 percent.
pub fn progress_toward(user: &User, entry: &Achievement) -> AchievementProgress {
    let path_modules: &[Module] = user
        .current_path
        .as_ref()
        .map(|p| p.modules.as_slice())
        .unwrap_or(&[]);

    let (current_value, target_value) = match &entry.criteria {
        AchievementCriteria::ModulesCompleted { count } => {
            (user.completed_modules.len() as f64, *count as f64)
        }
        AchievementCriteria::CategoryMastery { category } => {
            let (done, total) = category_counts(user, path_modules, category);
            (done as f64, total as f64)
        }
        AchievementCriteria::CategoryStreak { count } => {
            (longest_category_streak(user, path_modules) as f64, *count as f64)
        }
    };

    let percentage = if target_value > 0.0 {
        (current_value / target_value * 100.0).min(100.0)
    } else {
        0.0
    };

    AchievementProgress {
        achievement_id: entry.id.clone(),
        current_value,
        target_value,
        percentage,
    }
}

fn criteria_met(criteria: &AchievementCriteria, user: &User, path_modules: &[Module]) -> bool {
    match criteria {
        AchievementCriteria::ModulesCompleted { count } => {
            user.completed_modules.len() as u32 >= *count
        }
        AchievementCriteria::CategoryMastery { category } => {
            let (done, total) = category_counts(user, path_modules, category);
            total > 0 && done == total
        }
        AchievementCriteria::CategoryStreak { count } => {
            longest_category_streak(user, path_modules) >= *count
        }
    }
}

fn category_counts(user: &User, path_modules: &[Module], category: &str) -> (u32, u32) {
    let mut done = 0;
    let mut total = 0;
    for module in path_modules.iter().filter(|m| m.category == category) {
        total += 1;
        if user.has_completed(&module.id) {
            done += 1;
        }
    }
    (done, total)
}

/// Longest run of consecutive completions sharing a category, in completion
/// order. Completions that no longer resolve to a path module break the run.
fn longest_category_streak(user: &User, path_modules: &[Module]) -> u32 {
    let mut best = 0u32;
    let mut run = 0u32;
    let mut last: Option<&str> = None;

    for id in &user.completed_modules {
        let Some(module) = path_modules.iter().find(|m| &m.id == id) else {
            last = None;
            run = 0;
            continue;
        };
        let category = module.category.as_str();
        run = if last == Some(category) { run + 1 } else { 1 };
        last = Some(category);
        best = best.max(run);
    }

    best
}
