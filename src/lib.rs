//! # compass-algo: personalized learning path core
//!
//! Pure implementation of the four algorithms behind an adaptive learning
//! product:
//!
//! - **Question scorer**: assessment answers into a per-category skill
//!   profile and an overall skill level
//! - **Path generator**: skill profile plus track catalog into an initial
//!   ordered module sequence
//! - **Path adapter**: completion history into a re-sequenced path that
//!   favors untouched categories and respects demonstrated pace
//! - **Achievement evaluator**: progress snapshots into newly earned
//!   achievements, each awarded exactly once
//!
//! On top of those sit the session flows ([`session`]), which mirror the
//! hosting application's user journeys and return [`types::UserPatch`]
//! values instead of writing anywhere.
//!
//! ## Design
//!
//! - No I/O anywhere; hosts own storage, transport, and rendering
//! - Deterministic: identical inputs produce identical outputs, with stable
//!   total-order sorting throughout
//! - Content (tracks, assessments, modules, achievements) is read-only and
//!   supplied by the host through [`catalog::ContentCatalog`]
//!
//! ## Example
//!
//! ```rust
//! use compass_algo::{complete_assessment, AlgoConfig, ContentCatalog};
//! use compass_algo::types::{
//!     AnswerOption, Assessment, Module, Question, SkillLevel, Track, User,
//! };
//!
//! let questions = vec![Question {
//!     prompt: "How comfortable are you with spreadsheets?".into(),
//!     category: "foundations".into(),
//!     options: vec![
//!         AnswerOption { label: "Never used them".into(), weight: 0.0 },
//!         AnswerOption { label: "Daily pivot tables".into(), weight: 3.0 },
//!     ],
//! }];
//! let modules = vec![Module {
//!     id: "m1".into(),
//!     title: "Spreadsheet foundations".into(),
//!     description: "Formulas, references, and tidy data".into(),
//!     priority: 1,
//!     difficulty: SkillLevel::Beginner,
//!     category: "foundations".into(),
//!     estimated_minutes: 45,
//! }];
//! let catalog = ContentCatalog::new(
//!     vec![Track {
//!         id: "data-analytics".into(),
//!         name: "Data Analytics".into(),
//!         description: "Work with data end to end".into(),
//!     }],
//!     vec![Assessment { track: "data-analytics".into(), questions }],
//!     [("data-analytics".to_string(), modules)].into_iter().collect(),
//!     vec![],
//! );
//!
//! let mut user = User::new("user_1");
//! user.track = Some("data-analytics".into());
//!
//! let outcome = complete_assessment(&user, &[1], &catalog, &AlgoConfig::default()).unwrap();
//! assert_eq!(outcome.result.skill_level, SkillLevel::Advanced);
//! let path = outcome.patch.current_path.unwrap();
//! assert_eq!(path.modules.len(), 1);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

pub mod achievements;
pub mod adapter;
pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod scorer;
pub mod session;
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

pub use achievements::{
    evaluate, progress_toward, total_points, Achievement, AchievementCriteria,
    AchievementProgress,
};
pub use adapter::adapt;
pub use catalog::ContentCatalog;
pub use config::{AdapterConfig, AlgoConfig, GeneratorConfig, SkillThresholds};
pub use error::AlgoError;
pub use generator::generate;
pub use scorer::analyze;
pub use session::{
    adapt_path, complete_assessment, complete_module, screen_for, select_track,
    AssessmentOutcome, ModuleCompletion, PathAdaptation, Screen, TrackSelection,
};
pub use types::{
    AnswerOption, Assessment, AssessmentResult, EarnedAchievement, LearningPath, Module,
    Question, SkillLevel, Track, User, UserPatch,
};
