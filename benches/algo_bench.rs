//! Benchmarks for the scoring, generation, and adaptation hot paths.

use std::collections::{BTreeMap, HashSet};

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use compass_algo::{
    adapt, analyze, generate, AdapterConfig, AnswerOption, Assessment, AssessmentResult,
    ContentCatalog, GeneratorConfig, LearningPath, Module, Question, SkillLevel, SkillThresholds,
    Track, User,
};

const CATEGORIES: [&str; 4] = ["foundations", "statistics", "visualization", "tooling"];

fn bench_questions(count: usize) -> Vec<Question> {
    (0..count)
        .map(|i| Question {
            prompt: format!("question {i}"),
            category: CATEGORIES[i % CATEGORIES.len()].to_string(),
            options: (0..4)
                .map(|j| AnswerOption {
                    label: format!("option {j}"),
                    weight: j as f64,
                })
                .collect(),
        })
        .collect()
}

fn bench_modules(count: usize) -> Vec<Module> {
    let levels = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
    ];
    (0..count)
        .map(|i| Module {
            id: format!("m{i}"),
            title: format!("Module {i}"),
            description: String::new(),
            priority: (i % 10) as u32,
            difficulty: levels[i % levels.len()],
            category: CATEGORIES[i % CATEGORIES.len()].to_string(),
            estimated_minutes: 30 + (i % 6) as u32 * 15,
        })
        .collect()
}

fn bench_analyze(c: &mut Criterion) {
    let questions = bench_questions(20);
    let answers: Vec<usize> = (0..20).map(|i| i % 4).collect();
    let thresholds = SkillThresholds::default();

    c.bench_function("analyze_20_questions", |b| {
        b.iter(|| analyze(black_box(&answers), black_box(&questions), &thresholds))
    });
}

fn bench_generate(c: &mut Criterion) {
    let modules = bench_modules(60);
    let catalog = ContentCatalog::new(
        vec![Track {
            id: "t".to_string(),
            name: "Track".to_string(),
            description: String::new(),
        }],
        vec![Assessment {
            track: "t".to_string(),
            questions: Vec::new(),
        }],
        [("t".to_string(), modules)].into_iter().collect(),
        Vec::new(),
    );
    let result = AssessmentResult {
        skill_level: SkillLevel::Intermediate,
        category_scores: CATEGORIES
            .iter()
            .enumerate()
            .map(|(i, c)| (c.to_string(), i as f64 * 0.25))
            .collect::<BTreeMap<String, f64>>(),
        overall_score: 0.55,
    };
    let user = User::new("bench");
    let config = GeneratorConfig::default();

    c.bench_function("generate_60_modules", |b| {
        b.iter(|| generate(black_box(&user), black_box(&result), "t", &catalog, &config))
    });
}

fn bench_adapt(c: &mut Criterion) {
    let modules = bench_modules(60);
    let completed_ids: HashSet<String> = modules
        .iter()
        .take(20)
        .map(|m| m.id.clone())
        .collect();
    let mut user = User::new("bench");
    user.skill_level = Some(SkillLevel::Intermediate);
    user.completed_modules = modules.iter().take(20).map(|m| m.id.clone()).collect();
    user.current_path = Some(LearningPath {
        id: "p".to_string(),
        user_id: "bench".to_string(),
        track: "t".to_string(),
        modules: modules.clone(),
        progress: 0.0,
        adaptation_history: vec!["entry".to_string(); 3],
        created_at: Utc::now(),
    });
    let config = AdapterConfig::default();

    c.bench_function("adapt_60_modules_20_done", |b| {
        b.iter(|| adapt(black_box(&modules), &completed_ids, &user, &config))
    });
}

criterion_group!(benches, bench_analyze, bench_generate, bench_adapt);
criterion_main!(benches);
