//! Session flows mirroring the hosting application's user journeys.
//!
//! Each flow takes an immutable [`User`] snapshot plus catalog data and
//! returns a [`UserPatch`] describing what to persist, together with the
//! facts a host needs for notifications. Applying the patch is the storage
//! collaborator's job; nothing here performs I/O, so the only
//! non-determinism is the path id and the award timestamps.

use std::collections::HashSet;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::achievements::{self, Achievement};
use crate::adapter;
use crate::catalog::ContentCatalog;
use crate::config::AlgoConfig;
use crate::error::AlgoError;
use crate::generator;
use crate::scorer;
use crate::types::{AssessmentResult, EarnedAchievement, LearningPath, User, UserPatch};

/// Host-side screen a user should land on, derived from their snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    TrackSelection,
    Assessment,
    Dashboard,
}

/// Route a user by how far through onboarding they are.
pub fn screen_for(user: &User) -> Screen {
    match &user.track {
        None => Screen::TrackSelection,
        Some(track) if track.is_empty() => Screen::TrackSelection,
        Some(_) if !user.assessment_completed => Screen::Assessment,
        Some(_) => Screen::Dashboard,
    }
}

/// Outcome of [`select_track`].
#[derive(Debug, Clone)]
pub struct TrackSelection {
    pub patch: UserPatch,
    /// Display name for the host's confirmation message.
    pub track_name: String,
}

/// Enroll the user in a track.
pub fn select_track(
    user: &User,
    track_id: &str,
    catalog: &ContentCatalog,
) -> Result<TrackSelection, AlgoError> {
    let track = catalog
        .track(track_id)
        .ok_or_else(|| AlgoError::UnknownTrack(track_id.to_string()))?;

    tracing::debug!(user = %user.id, track = track_id, "track selected");

    Ok(TrackSelection {
        patch: UserPatch {
            track: Some(track.id.clone()),
            ..Default::default()
        },
        track_name: track.name.clone(),
    })
}

/// Outcome of [`complete_assessment`].
#[derive(Debug, Clone)]
pub struct AssessmentOutcome {
    pub patch: UserPatch,
    pub result: AssessmentResult,
    pub new_achievements: Vec<Achievement>,
}

/// Score the user's assessment and build their initial learning path.
///
/// Fails if the user has no track selected, the track has no assessment, or
/// the answers do not match the question set.
pub fn complete_assessment(
    user: &User,
    answers: &[usize],
    catalog: &ContentCatalog,
    config: &AlgoConfig,
) -> Result<AssessmentOutcome, AlgoError> {
    let track = user
        .track
        .clone()
        .ok_or_else(|| AlgoError::MalformedInput("user has no track selected".to_string()))?;
    let assessment = catalog
        .assessment(&track)
        .ok_or_else(|| AlgoError::UnknownTrack(track.clone()))?;

    let result = scorer::analyze(answers, &assessment.questions, &config.thresholds)?;
    let modules = generator::generate(user, &result, &track, catalog, &config.generator)?;

    let progress = LearningPath::progress_percent(&modules, &user.completed_modules);
    let path = LearningPath {
        id: format!("path_{}", Uuid::new_v4()),
        user_id: user.id.clone(),
        track,
        modules,
        progress,
        adaptation_history: vec![format!(
            "Initial path generated based on {} level assessment",
            result.skill_level.as_str()
        )],
        created_at: Utc::now(),
    };

    let mut patch = UserPatch {
        assessment_completed: Some(true),
        skill_level: Some(result.skill_level),
        current_path: Some(path),
        ..Default::default()
    };
    let new_achievements = award_new_achievements(&mut patch, user, catalog);

    tracing::debug!(
        user = %user.id,
        level = result.skill_level.as_str(),
        score = result.overall_score,
        "assessment completed"
    );

    Ok(AssessmentOutcome {
        patch,
        result,
        new_achievements,
    })
}

/// Outcome of [`complete_module`].
#[derive(Debug, Clone)]
pub struct ModuleCompletion {
    pub patch: UserPatch,
    /// Title for the host's confirmation message.
    pub module_title: String,
    pub new_achievements: Vec<Achievement>,
}

/// Record one module completion and refresh path progress.
///
/// Completing a module that is already completed is a no-op with an empty
/// patch; completing a module outside the current path is an error.
pub fn complete_module(
    user: &User,
    module_id: &str,
    catalog: &ContentCatalog,
) -> Result<ModuleCompletion, AlgoError> {
    let path = user
        .current_path
        .as_ref()
        .ok_or_else(|| AlgoError::MalformedInput("user has no active learning path".to_string()))?;
    let module = path
        .modules
        .iter()
        .find(|m| m.id == module_id)
        .ok_or_else(|| {
            AlgoError::MalformedInput(format!(
                "module {module_id} is not part of the current path"
            ))
        })?;
    let module_title = module.title.clone();

    if user.has_completed(module_id) {
        tracing::debug!(user = %user.id, module = module_id, "module already completed");
        return Ok(ModuleCompletion {
            patch: UserPatch::default(),
            module_title,
            new_achievements: Vec::new(),
        });
    }

    let mut completed = user.completed_modules.clone();
    completed.push(module_id.to_string());

    let mut updated_path = path.clone();
    updated_path.progress = LearningPath::progress_percent(&updated_path.modules, &completed);

    let mut patch = UserPatch {
        completed_modules: Some(completed),
        current_path: Some(updated_path),
        ..Default::default()
    };
    let new_achievements = award_new_achievements(&mut patch, user, catalog);

    tracing::debug!(
        user = %user.id,
        module = module_id,
        total = user.completed_modules.len() + 1,
        "module completed"
    );

    Ok(ModuleCompletion {
        patch,
        module_title,
        new_achievements,
    })
}

/// Outcome of [`adapt_path`].
#[derive(Debug, Clone)]
pub struct PathAdaptation {
    pub patch: UserPatch,
    pub completed_count: usize,
}

/// Re-sequence the user's current path against their completion history.
///
/// A user without an active path gets an empty patch back; there is nothing
/// to adapt and nothing to report.
pub fn adapt_path(user: &User, config: &AlgoConfig) -> PathAdaptation {
    let Some(path) = user.current_path.as_ref() else {
        tracing::debug!(user = %user.id, "adapt requested without an active path");
        return PathAdaptation {
            patch: UserPatch::default(),
            completed_count: 0,
        };
    };

    let completed: HashSet<String> = user.completed_modules.iter().cloned().collect();
    let modules = adapter::adapt(&path.modules, &completed, user, &config.adapter);

    let mut updated = path.clone();
    updated.progress = LearningPath::progress_percent(&modules, &user.completed_modules);
    updated.adaptation_history.push(format!(
        "Path adapted based on {} completed modules",
        user.completed_modules.len()
    ));
    updated.modules = modules;

    tracing::debug!(
        user = %user.id,
        completed = user.completed_modules.len(),
        adaptations = updated.adaptation_history.len(),
        "learning path adapted"
    );

    PathAdaptation {
        patch: UserPatch {
            current_path: Some(updated),
            ..Default::default()
        },
        completed_count: user.completed_modules.len(),
    }
}

/// Evaluate achievements against the patched snapshot and, when something
/// unlocked, fold the new awards and point total into the patch.
fn award_new_achievements(
    patch: &mut UserPatch,
    user: &User,
    catalog: &ContentCatalog,
) -> Vec<Achievement> {
    let mut snapshot = user.clone();
    patch.clone().apply(&mut snapshot);

    let unlocked = achievements::evaluate(&snapshot, &user.completed_modules, catalog.achievements());
    if unlocked.is_empty() {
        return unlocked;
    }

    let now = Utc::now();
    let mut earned = user.achievements.clone();
    earned.extend(unlocked.iter().map(|entry| EarnedAchievement {
        achievement_id: entry.id.clone(),
        earned_at: now,
    }));
    patch.total_points = Some(achievements::total_points(&earned, catalog.achievements()));
    patch.achievements = Some(earned);

    unlocked
}
