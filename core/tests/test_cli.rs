mod common;

use clap::Parser;
use zwoforge_core::cli::{run, Args};
use zwoforge_core::{IntervalOffHours, Metrics, Numbering, StaticPageSource};

#[test]
fn flags_override_config() {
    let args = Args::try_parse_from([
        "zwoforge",
        "page.html",
        "--gap",
        "4",
        "--numbering",
        "training",
        "--corrected-off-hours",
    ])
    .unwrap();
    let cfg = args.resolve_config().unwrap();
    assert_eq!(cfg.gap_threshold, 4);
    assert_eq!(cfg.numbering, Numbering::Training);
    assert_eq!(cfg.interval_off_hours, IntervalOffHours::Corrected);
    assert!(!cfg.parallel);
}

#[test]
fn unknown_numbering_is_rejected() {
    let err = Args::try_parse_from(["zwoforge", "x", "--numbering", "roman"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    assert!(err.to_string().contains("ordinal"), "{err}");
}

#[test]
fn run_from_local_file() {
    let tmp = tempfile::tempdir().unwrap();
    let page_path = tmp.path().join("page.html");
    std::fs::write(&page_path, common::two_workout_page()).unwrap();
    let out = tmp.path().join("out");

    let args = Args::try_parse_from([
        "zwoforge",
        page_path.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
        "--numbering",
        "ordinal",
    ])
    .unwrap();

    let metrics = Metrics::new().unwrap();
    // Lokal fil finnes, så kilden brukes ikke
    let source = StaticPageSource { html: String::new() };
    let report = run(&args, &source, &metrics).unwrap();

    assert_eq!(
        report.written,
        vec![out.join("1 Week 1 Day 1.zwo"), out.join("2 Week 1 _ Day 2.zwo")]
    );
    assert!(report.page.is_complete());
    assert_eq!(metrics.documents_compiled(), 2);
    assert_eq!(metrics.steps_classified("ramp"), 2);
    assert_eq!(metrics.steps_classified("free_ride"), 1);
}

#[test]
fn run_from_source_when_target_is_not_a_file() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("out");
    let args = Args::try_parse_from([
        "zwoforge",
        "https://example.invalid/workouts/pebble-pounder",
        "--out",
        out.to_str().unwrap(),
    ])
    .unwrap();

    let source = StaticPageSource { html: common::two_workout_page() };
    let report = run(&args, &source, &Metrics::new().unwrap()).unwrap();
    assert_eq!(report.written.len(), 2);
    assert!(out.join("Week 1 Day 1.zwo").is_file());
}
