//! Tunable parameters for the scoring, generation, and adaptation algorithms.
//!
//! Every knob has a concrete default so `AlgoConfig::default()` is fully
//! usable; `AlgoConfig::from_env()` lets deployments override individual
//! values without recompiling.

use serde::{Deserialize, Serialize};

/// Overall-score cutoffs that map an assessment onto a skill level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillThresholds {
    /// Scores at or above this classify as advanced.
    pub advanced: f64,
    /// Scores at or above this (and below `advanced`) classify as intermediate.
    pub intermediate: f64,
}

impl Default for SkillThresholds {
    fn default() -> Self {
        Self {
            advanced: 0.75,
            intermediate: 0.4,
        }
    }
}

/// Knobs for the initial path generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// How strongly category weakness pulls a module forward, in `[0, 1]`.
    pub weakness_bias: f64,
    /// Ordering penalty applied to modules above the user's level.
    pub stretch_penalty: f64,
    /// Widest difficulty-over-skill gap still included in a path.
    pub max_tier_gap: u8,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            weakness_bias: 0.5,
            stretch_penalty: 0.25,
            max_tier_gap: 1,
        }
    }
}

/// Knobs for the progress-driven path adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// How strongly category coverage need pulls a module forward, in `[0, 1]`.
    pub coverage_bias: f64,
    /// Multiplier on `coverage_bias` once the user has completed a module at
    /// the path's hardest difficulty.
    pub hard_mastery_boost: f64,
    /// Ordering penalty per difficulty tier above the user's level, applied
    /// only while progress is flagged as slow.
    pub above_level_penalty: f64,
    /// Adaptations required before the slow-progress heuristic can trigger.
    pub slow_progress_min_adaptations: usize,
    /// Progress counts as slow while completions stay below
    /// `adaptations * slow_progress_ratio`.
    pub slow_progress_ratio: f64,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            coverage_bias: 0.5,
            hard_mastery_boost: 1.5,
            above_level_penalty: 0.5,
            slow_progress_min_adaptations: 3,
            slow_progress_ratio: 1.0,
        }
    }
}

/// Top-level configuration handed to the session flows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlgoConfig {
    pub thresholds: SkillThresholds,
    pub generator: GeneratorConfig,
    pub adapter: AdapterConfig,
}

impl AlgoConfig {
    /// Build a config from `COMPASS_*` environment variables, falling back to
    /// the defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("COMPASS_ADVANCED_THRESHOLD") {
            config.thresholds.advanced = val.parse().unwrap_or(0.75);
        }
        if let Ok(val) = std::env::var("COMPASS_INTERMEDIATE_THRESHOLD") {
            config.thresholds.intermediate = val.parse().unwrap_or(0.4);
        }
        if let Ok(val) = std::env::var("COMPASS_WEAKNESS_BIAS") {
            config.generator.weakness_bias = val.parse().unwrap_or(0.5);
        }
        if let Ok(val) = std::env::var("COMPASS_MAX_TIER_GAP") {
            config.generator.max_tier_gap = val.parse().unwrap_or(1);
        }
        if let Ok(val) = std::env::var("COMPASS_COVERAGE_BIAS") {
            config.adapter.coverage_bias = val.parse().unwrap_or(0.5);
        }

        config
    }
}
