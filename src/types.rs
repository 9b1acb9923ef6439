//! Core data model shared by every algorithm module.
//!
//! All structs serialize with camelCase field names so hosts can round-trip
//! the same JSON documents they persist and ship to clients. Nothing in here
//! performs I/O; these are plain data carriers.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SkillThresholds;

// ============================================================================
// Skill levels
// ============================================================================

/// Ordinal skill classification, shared by user profiles and module
/// difficulty tags so the two can be compared directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
        }
    }

    /// Parse from a stored string, defaulting to `Beginner` on unknown input.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "advanced" => SkillLevel::Advanced,
            "intermediate" => SkillLevel::Intermediate,
            _ => SkillLevel::Beginner,
        }
    }

    /// Position on the ordinal scale, `0` for beginner up to `2` for advanced.
    pub fn tier(&self) -> u8 {
        match self {
            SkillLevel::Beginner => 0,
            SkillLevel::Intermediate => 1,
            SkillLevel::Advanced => 2,
        }
    }

    /// Classify an overall assessment score against the configured cutoffs.
    pub fn from_score(score: f64, thresholds: &SkillThresholds) -> Self {
        if score >= thresholds.advanced {
            SkillLevel::Advanced
        } else if score >= thresholds.intermediate {
            SkillLevel::Intermediate
        } else {
            SkillLevel::Beginner
        }
    }
}

// ============================================================================
// Assessment content and results
// ============================================================================

/// One selectable answer together with the score weight it contributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub label: String,
    pub weight: f64,
}

/// Immutable assessment question drawn from track content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub prompt: String,
    pub options: Vec<AnswerOption>,
    /// Skill area this question probes, e.g. `"statistics"`.
    pub category: String,
}

impl Question {
    /// Highest weight any option of this question can contribute.
    pub fn max_weight(&self) -> f64 {
        self.options.iter().map(|o| o.weight).fold(0.0, f64::max)
    }
}

/// The question set a track presents to new users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub track: String,
    pub questions: Vec<Question>,
}

/// Outcome of scoring one assessment submission. Derived data, never mutated.
///
/// `category_scores` uses a `BTreeMap` so iteration order, and therefore
/// every downstream computation, is independent of insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub skill_level: SkillLevel,
    /// Normalized score per question category, each within `[0, 1]`.
    pub category_scores: BTreeMap<String, f64>,
    /// Normalized score across all questions, within `[0, 1]`.
    pub overall_score: f64,
}

// ============================================================================
// Tracks and modules
// ============================================================================

/// A learning track users enroll in, e.g. "Data Analytics".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Immutable module template from a track catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Author-assigned ordering weight, lower means earlier.
    pub priority: u32,
    pub difficulty: SkillLevel,
    pub category: String,
    pub estimated_minutes: u32,
}

/// An ordered module sequence assigned to one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    pub id: String,
    pub user_id: String,
    pub track: String,
    pub modules: Vec<Module>,
    /// Completion percentage over `modules`, within `[0, 100]`.
    pub progress: f64,
    /// Append-only log of why the path looks the way it does.
    pub adaptation_history: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl LearningPath {
    /// Share of `modules` whose id appears in `completed`, as a percentage.
    pub fn progress_percent(modules: &[Module], completed: &[String]) -> f64 {
        if modules.is_empty() {
            return 0.0;
        }
        let done = modules
            .iter()
            .filter(|m| completed.iter().any(|id| *id == m.id))
            .count();
        done as f64 / modules.len() as f64 * 100.0
    }
}

// ============================================================================
// Users and patches
// ============================================================================

/// An achievement the user has unlocked, with the award timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarnedAchievement {
    pub achievement_id: String,
    pub earned_at: DateTime<Utc>,
}

/// User record snapshot. Owned and persisted by the hosting application;
/// the algorithms only ever read it and describe changes via [`UserPatch`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,
    pub assessment_completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_level: Option<SkillLevel>,
    /// Ids of completed modules, in completion order.
    pub completed_modules: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_path: Option<LearningPath>,
    pub achievements: Vec<EarnedAchievement>,
    pub total_points: u32,
}

impl User {
    /// Fresh user with nothing selected, assessed, or completed.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            track: None,
            assessment_completed: false,
            skill_level: None,
            completed_modules: Vec::new(),
            current_path: None,
            achievements: Vec::new(),
            total_points: 0,
        }
    }

    pub fn has_completed(&self, module_id: &str) -> bool {
        self.completed_modules.iter().any(|id| id == module_id)
    }
}

/// Partial user update produced by the session flows.
///
/// `Some` means "set the field to this value"; `None` means "leave it alone".
/// The storage collaborator applies the whole patch atomically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_level: Option<SkillLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_modules: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_path: Option<LearningPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<EarnedAchievement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_points: Option<u32>,
}

impl UserPatch {
    /// True when applying the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.track.is_none()
            && self.assessment_completed.is_none()
            && self.skill_level.is_none()
            && self.completed_modules.is_none()
            && self.current_path.is_none()
            && self.achievements.is_none()
            && self.total_points.is_none()
    }

    /// Write every set field onto `user`.
    pub fn apply(self, user: &mut User) {
        if let Some(track) = self.track {
            user.track = Some(track);
        }
        if let Some(done) = self.assessment_completed {
            user.assessment_completed = done;
        }
        if let Some(level) = self.skill_level {
            user.skill_level = Some(level);
        }
        if let Some(completed) = self.completed_modules {
            user.completed_modules = completed;
        }
        if let Some(path) = self.current_path {
            user.current_path = Some(path);
        }
        if let Some(achievements) = self.achievements {
            user.achievements = achievements;
        }
        if let Some(points) = self.total_points {
            user.total_points = points;
        }
    }
}
