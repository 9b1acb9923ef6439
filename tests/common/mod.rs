//! Shared content fixtures for the integration suites.
//!
//! One realistic two-track catalog, small enough to reason about by hand:
//! answer weights equal their option index, so a submission of all `3`s is a
//! perfect score and all `0`s is a blank one.

use std::collections::BTreeMap;

use compass_algo::{
    Achievement, AchievementCriteria, AnswerOption, Assessment, ContentCatalog, Module, Question,
    SkillLevel, Track, User,
};

pub const DATA_TRACK: &str = "data-analytics";
pub const SOFTWARE_TRACK: &str = "software-development";

/// One answer per data-analytics question. All top options: 15/15.
pub const ANSWERS_ADVANCED: [usize; 5] = [3, 3, 3, 3, 3];
/// Middling options: 10/15, lands intermediate.
pub const ANSWERS_INTERMEDIATE: [usize; 5] = [2, 2, 2, 2, 2];
/// Bottom options: 0/15, lands beginner.
pub const ANSWERS_BEGINNER: [usize; 5] = [0, 0, 0, 0, 0];
/// Strong foundations, blank statistics, decent visualization: 8/15.
pub const ANSWERS_WEAK_STATISTICS: [usize; 5] = [3, 3, 0, 0, 2];

pub fn sample_catalog() -> ContentCatalog {
    let tracks = vec![
        Track {
            id: DATA_TRACK.to_string(),
            name: "Data Analytics".to_string(),
            description: "Collect, analyze, and present data".to_string(),
        },
        Track {
            id: SOFTWARE_TRACK.to_string(),
            name: "Software Development".to_string(),
            description: "Build and ship working software".to_string(),
        },
    ];

    let assessments = vec![
        Assessment {
            track: DATA_TRACK.to_string(),
            questions: vec![
                question("How often do you work with spreadsheets?", "foundations"),
                question("Can you reshape a messy dataset?", "foundations"),
                question("How solid is your descriptive statistics?", "statistics"),
                question("Have you worked with probability distributions?", "statistics"),
                question("Have you built charts for an audience?", "visualization"),
            ],
        },
        Assessment {
            track: SOFTWARE_TRACK.to_string(),
            questions: vec![
                question("How comfortable are you with version control?", "tooling"),
                question("Do you write automated tests?", "practices"),
            ],
        },
    ];

    let mut modules_by_track = BTreeMap::new();
    modules_by_track.insert(
        DATA_TRACK.to_string(),
        vec![
            module("da-spreadsheets", "Spreadsheet Foundations", "foundations", 1, SkillLevel::Beginner, 45),
            module("da-data-cleaning", "Data Cleaning", "foundations", 2, SkillLevel::Beginner, 60),
            module("da-descriptive-stats", "Descriptive Statistics", "statistics", 3, SkillLevel::Beginner, 60),
            module("da-probability", "Probability Essentials", "statistics", 4, SkillLevel::Intermediate, 90),
            module("da-charts", "Charting Basics", "visualization", 5, SkillLevel::Beginner, 45),
            module("da-dashboards", "Interactive Dashboards", "visualization", 6, SkillLevel::Intermediate, 90),
            module("da-sql", "SQL for Analysts", "foundations", 7, SkillLevel::Intermediate, 120),
            module("da-ml-intro", "Machine Learning Intro", "statistics", 8, SkillLevel::Advanced, 150),
        ],
    );
    modules_by_track.insert(
        SOFTWARE_TRACK.to_string(),
        vec![
            module("sd-git", "Git Essentials", "tooling", 1, SkillLevel::Beginner, 60),
            module("sd-testing", "Testing Fundamentals", "practices", 2, SkillLevel::Beginner, 90),
        ],
    );

    let achievements = vec![
        Achievement {
            id: "first-module".to_string(),
            title: "First Steps".to_string(),
            description: "Complete your first module".to_string(),
            points: 10,
            criteria: AchievementCriteria::ModulesCompleted { count: 1 },
        },
        Achievement {
            id: "five-modules".to_string(),
            title: "Momentum".to_string(),
            description: "Complete 5 modules".to_string(),
            points: 50,
            criteria: AchievementCriteria::ModulesCompleted { count: 5 },
        },
        Achievement {
            id: "stats-master".to_string(),
            title: "Statistics Master".to_string(),
            description: "Finish every statistics module in your path".to_string(),
            points: 30,
            criteria: AchievementCriteria::CategoryMastery {
                category: "statistics".to_string(),
            },
        },
        Achievement {
            id: "focused-three".to_string(),
            title: "Laser Focus".to_string(),
            description: "Complete three modules of one category in a row".to_string(),
            points: 20,
            criteria: AchievementCriteria::CategoryStreak { count: 3 },
        },
    ];

    ContentCatalog::new(tracks, assessments, modules_by_track, achievements)
}

/// A brand-new user with nothing selected yet.
pub fn fresh_user() -> User {
    User::new("user_1")
}

/// A user who picked the data track but has not taken the assessment.
pub fn enrolled_user() -> User {
    let mut user = fresh_user();
    user.track = Some(DATA_TRACK.to_string());
    user
}

fn question(prompt: &str, category: &str) -> Question {
    Question {
        prompt: prompt.to_string(),
        category: category.to_string(),
        options: (0..4)
            .map(|i| AnswerOption {
                label: format!("option {i}"),
                weight: i as f64,
            })
            .collect(),
    }
}

fn module(
    id: &str,
    title: &str,
    category: &str,
    priority: u32,
    difficulty: SkillLevel,
    estimated_minutes: u32,
) -> Module {
    Module {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title}, hands-on"),
        priority,
        difficulty,
        category: category.to_string(),
        estimated_minutes,
    }
}
