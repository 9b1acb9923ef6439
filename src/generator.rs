//! Path generator: assessment result plus track catalog into an initial
//! ordered module sequence.
//!
//! Ordering is driven by author priority, bent toward the user's weak
//! categories and away from modules above their level. The sort is stable
//! with a total-order key, so equal-priority modules keep catalog
//! declaration order and the whole function is deterministic.

use crate::catalog::ContentCatalog;
use crate::config::GeneratorConfig;
use crate::error::AlgoError;
use crate::types::{AssessmentResult, Module, SkillLevel, User};

/// Weakness assumed for categories the assessment did not cover.
const UNCOVERED_WEAKNESS: f64 = 0.5;

/// Build the initial learning path for a freshly assessed user.
///
/// Modules more than `max_tier_gap` difficulty tiers above the assessed
/// level are excluded outright. The rest are ordered by an effective
/// priority: author priority scaled down for weak categories (so they come
/// earlier) and scaled up for above-level stretch modules (so they come
/// later). Lower key sorts first.
pub fn generate(
    user: &User,
    result: &AssessmentResult,
    track: &str,
    catalog: &ContentCatalog,
    config: &GeneratorConfig,
) -> Result<Vec<Module>, AlgoError> {
    let candidates = catalog
        .modules(track)
        .ok_or_else(|| AlgoError::UnknownTrack(track.to_string()))?;

    let skill = result.skill_level;
    let mut path: Vec<Module> = candidates
        .iter()
        .filter(|module| tier_gap(module.difficulty, skill) <= config.max_tier_gap as i8)
        .cloned()
        .collect();

    path.sort_by(|a, b| {
        effective_priority(a, result, config).total_cmp(&effective_priority(b, result, config))
    });

    tracing::debug!(
        user = %user.id,
        track,
        level = skill.as_str(),
        candidates = candidates.len(),
        modules = path.len(),
        "generated initial learning path"
    );

    Ok(path)
}

/// Difficulty tiers above (positive) or below (negative) the user's level.
fn tier_gap(difficulty: SkillLevel, skill: SkillLevel) -> i8 {
    difficulty.tier() as i8 - skill.tier() as i8
}

fn effective_priority(module: &Module, result: &AssessmentResult, config: &GeneratorConfig) -> f64 {
    let weakness = result
        .category_scores
        .get(&module.category)
        .map(|score| 1.0 - score)
        .unwrap_or(UNCOVERED_WEAKNESS);

    // Weakness 0.5 is neutral; weaker categories shrink the key and move up.
    let mut key = (module.priority as f64 + 1.0) * (1.0 - config.weakness_bias * (weakness - 0.5));

    if tier_gap(module.difficulty, result.skill_level) > 0 {
        key *= 1.0 + config.stretch_penalty;
    }

    key
}
