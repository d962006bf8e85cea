use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use trajlens_core::{
    ClassifierRules, Step, Trajectory, reproduction_steps, search_steps, tool_usage,
};
use trajlens_report::{AnalysisReport, TranscriptOptions, render_transcript};

fn synthetic_trajectory(steps: usize) -> Trajectory {
    let actions = [
        ("create reproduce.py", "File /testbed/reproduce.py created successfully."),
        ("search_dir 'QuerySet' django/", "Found 12 matches"),
        ("str_replace_editor view /testbed/django/db/models/query.py", "Here's the result"),
        ("edit 10:12\n    pass\nend_of_edit", "File updated."),
        ("cd /testbed && python reproduce.py", "Traceback (most recent call last):"),
    ];
    (0..steps)
        .map(|i| {
            let (action, observation) = actions[i % actions.len()];
            Step::new(format!("step {i}"), action, observation.repeat(1 + i % 4))
        })
        .collect::<Vec<_>>()
        .into()
}

fn bench_detectors_1000_steps(c: &mut Criterion) {
    let trajectory = synthetic_trajectory(1000);
    let rules = ClassifierRules::new();

    c.bench_function("detectors_1000_steps", |b| {
        b.iter(|| {
            black_box(reproduction_steps(black_box(&trajectory), &rules));
            black_box(search_steps(black_box(&trajectory), &rules));
            black_box(tool_usage(black_box(&trajectory), &rules));
        });
    });
}

fn bench_render_1000_steps(c: &mut Criterion) {
    let trajectory = synthetic_trajectory(1000);
    let generated = chrono::NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    c.bench_function("render_1000_steps", |b| {
        b.iter(|| {
            black_box(render_transcript(&trajectory, TranscriptOptions::default()));
            black_box(AnalysisReport::new(&trajectory, "bench.traj", generated).render());
        });
    });
}

criterion_group!(benches, bench_detectors_1000_steps, bench_render_1000_steps);
criterion_main!(benches);
