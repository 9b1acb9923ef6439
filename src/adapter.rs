//! Path adapter: re-sequences a learning path as completion history accrues.
//!
//! The adapter is a pure permutation. It never adds or drops modules, it
//! moves completed ones into a stable prefix and re-scores the remainder
//! using signals derived from actual progress. Running it twice on its own
//! output changes nothing.

use std::collections::{BTreeMap, HashSet};

use crate::config::AdapterConfig;
use crate::types::{Module, SkillLevel, User};

/// Reorder `current_modules` against the user's completion history.
///
/// Completed modules come first, in completion order. Remaining modules are
/// ordered by author priority bent toward categories the user has touched
/// least; completing one of the path's hardest modules strengthens that
/// pull, and repeated adaptations without matching completions push
/// above-level modules later. Ties keep their current relative order, so a
/// path with no fresh signal comes back unchanged.
pub fn adapt(
    current_modules: &[Module],
    completed_ids: &HashSet<String>,
    user: &User,
    config: &AdapterConfig,
) -> Vec<Module> {
    if current_modules.is_empty() {
        return Vec::new();
    }

    let mut path: Vec<Module> = Vec::with_capacity(current_modules.len());
    let mut placed: HashSet<&str> = HashSet::new();

    // Completed prefix in completion order. Completed ids missing from the
    // user's ordered list (host passed a wider set) fall back to path order.
    for completed_id in &user.completed_modules {
        if !completed_ids.contains(completed_id) {
            continue;
        }
        if let Some(module) = current_modules.iter().find(|m| &m.id == completed_id) {
            if placed.insert(module.id.as_str()) {
                path.push(module.clone());
            }
        }
    }
    for module in current_modules {
        if completed_ids.contains(&module.id) && placed.insert(module.id.as_str()) {
            path.push(module.clone());
        }
    }
    let completed_count = path.len();

    let mut remaining: Vec<Module> = current_modules
        .iter()
        .filter(|m| !completed_ids.contains(&m.id))
        .cloned()
        .collect();

    let need = category_need(current_modules, completed_ids);
    let signals = progress_signals(current_modules, completed_ids, user, config);

    remaining.sort_by(|a, b| {
        remaining_key(a, &need, &signals, config).total_cmp(&remaining_key(
            b,
            &need,
            &signals,
            config,
        ))
    });

    tracing::debug!(
        user = %user.id,
        completed = completed_count,
        remaining = remaining.len(),
        hard_mastery = signals.hard_mastery,
        slow_progress = signals.slow_progress,
        "adapted learning path"
    );

    path.extend(remaining);
    path
}

/// Per-category share of the path still uncompleted, in `[0, 1]`.
/// `1.0` means untouched, `0.0` means the category is done.
fn category_need(modules: &[Module], completed: &HashSet<String>) -> BTreeMap<String, f64> {
    let mut total: BTreeMap<&str, f64> = BTreeMap::new();
    let mut done: BTreeMap<&str, f64> = BTreeMap::new();

    for module in modules {
        *total.entry(module.category.as_str()).or_default() += 1.0;
        if completed.contains(&module.id) {
            *done.entry(module.category.as_str()).or_default() += 1.0;
        }
    }

    total
        .iter()
        .map(|(category, count)| {
            let completed_count = done.get(category).copied().unwrap_or(0.0);
            ((*category).to_string(), 1.0 - completed_count / count)
        })
        .collect()
}

struct ProgressSignals {
    /// The user completed a module at the path's hardest difficulty.
    hard_mastery: bool,
    /// Adaptations keep happening without matching completions.
    slow_progress: bool,
    skill: SkillLevel,
}

fn progress_signals(
    modules: &[Module],
    completed_ids: &HashSet<String>,
    user: &User,
    config: &AdapterConfig,
) -> ProgressSignals {
    let hardest = modules
        .iter()
        .map(|m| m.difficulty)
        .max()
        .unwrap_or_default();
    let hard_mastery = modules
        .iter()
        .any(|m| m.difficulty == hardest && completed_ids.contains(&m.id));

    let adaptations = user
        .current_path
        .as_ref()
        .map(|p| p.adaptation_history.len())
        .unwrap_or(0);
    let completed_count = modules
        .iter()
        .filter(|m| completed_ids.contains(&m.id))
        .count();
    let slow_progress = adaptations >= config.slow_progress_min_adaptations
        && (completed_count as f64) < adaptations as f64 * config.slow_progress_ratio;

    ProgressSignals {
        hard_mastery,
        slow_progress,
        skill: user.skill_level.unwrap_or_default(),
    }
}

fn remaining_key(
    module: &Module,
    need: &BTreeMap<String, f64>,
    signals: &ProgressSignals,
    config: &AdapterConfig,
) -> f64 {
    let bias = if signals.hard_mastery {
        config.coverage_bias * config.hard_mastery_boost
    } else {
        config.coverage_bias
    };
    let category_need = need.get(&module.category).copied().unwrap_or(0.5);

    // Need 0.5 is neutral; needier categories shrink the key and move up.
    let mut key = (module.priority as f64 + 1.0) * (1.0 - bias * (category_need - 0.5));

    if signals.slow_progress {
        let gap = module.difficulty.tier() as i8 - signals.skill.tier() as i8;
        if gap > 0 {
            key *= 1.0 + config.above_level_penalty * gap as f64;
        }
    }

    key
}
