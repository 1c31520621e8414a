use zwoforge_core::{
    compile_page, load_config, save_config, write_workouts, CompileConfig, CompileError,
    IntervalOffHours, Numbering, RawStep,
};

#[test]
fn writes_each_workout_and_creates_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("nested").join("zwo");

    let raw = vec![
        RawStep::new("10min free ride", 1),
        RawStep::new("20min @ 70% FTP", 30),
    ];
    let titles = vec!["Day 1".to_string(), "Day 2".to_string()];
    let page = compile_page(&raw, &titles, &CompileConfig::default(), None).unwrap();

    let written = write_workouts(&page, &out).unwrap();
    assert_eq!(written, vec![out.join("Day 1.zwo"), out.join("Day 2.zwo")]);

    let text = std::fs::read_to_string(&written[1]).unwrap();
    assert_eq!(text, page.workouts[1].xml);
}

#[test]
fn duplicate_file_names_are_refused_before_writing() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("zwo");

    let raw = vec![RawStep::new("10min free ride", 1)];
    let mut page = compile_page(&raw, &["Day 1".to_string()], &CompileConfig::default(), None).unwrap();
    let mut copy = page.workouts[0].clone();
    copy.index = 1;
    copy.file_name = "DAY 1.zwo".into();
    page.workouts.push(copy);

    match write_workouts(&page, &out) {
        Err(CompileError::DuplicateFileName { file_name }) => assert_eq!(file_name, "DAY 1.zwo"),
        other => panic!("expected duplicate file name, got {other:?}"),
    }
    assert!(!out.exists());
}

#[test]
fn config_roundtrip_and_missing_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("zwoforge.json");

    // Mangler fil → standardverdier
    let cfg = load_config(&path).unwrap();
    assert_eq!(cfg, CompileConfig::default());

    let cfg = CompileConfig {
        gap_threshold: 15,
        interval_off_hours: IntervalOffHours::Corrected,
        numbering: Numbering::Training,
        ..CompileConfig::default()
    };
    save_config(&cfg, &path).unwrap();
    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded, cfg);

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"interval_off_hours\": \"corrected\""), "{raw}");
}
