//! Loading instances from JSON files.

use {
    organ_dispatch::{
        DecisionEngine, Hours, InputError, InstanceSpec, SelectorKind, SweepOptions,
        SweepReport,
        data::{load_instance, save_instance},
        demo_instance, run_sweep,
    },
    std::fs,
};

// Needs all 17 significant digits to print
const AWKWARD_HOURS: f64 = 13.420171184955747;

#[test]
fn saved_demo_evaluates_the_same() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("demo.json");
    save_instance(&path, &demo_instance()).unwrap();

    let from_disk = DecisionEngine::new(load_instance(&path).unwrap(), SelectorKind::ClosedForm);
    let in_memory =
        DecisionEngine::new(demo_instance().validate().unwrap(), SelectorKind::ClosedForm);

    assert_eq!(
        from_disk.evaluate(Hours::new(8.0)).unwrap(),
        in_memory.evaluate(Hours::new(8.0)).unwrap()
    );
}

#[test]
fn planning_distribution_drives_the_eev_choice() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("planning.json");
    fs::write(
        &path,
        r#"{
            "name": "two routes",
            "facilities": [
                {"id": "Near", "value": 10.0},
                {"id": "Far", "value": 20.0}
            ],
            "scenarios": [
                {"id": "Clear", "probability": 0.5},
                {"id": "Jam", "probability": 0.5}
            ],
            "travel_times": {
                "Clear": {"Near": 1.0, "Far": 2.0},
                "Jam": {"Near": 2.0, "Far": 6.0}
            },
            "planning_probabilities": {"Clear": 0.9, "Jam": 0.1}
        }"#,
    )
    .unwrap();

    let model = load_instance(&path).unwrap();
    assert!(model.has_distinct_planning());
    let eval = DecisionEngine::new(model, SelectorKind::ClosedForm)
        .evaluate(Hours::new(3.0))
        .unwrap();

    // Planner averages Far at 2.4h and takes it; really it only arrives when Clear
    assert_eq!(eval.eev.decision.facility_label(), "Far");
    assert!((eval.eev.decision.expected_value - 10.0).abs() < 1e-9);
    // RP: Near 10 vs Far 10, tie goes to the smaller id
    assert_eq!(eval.rp.facility_label(), "Far");
}

#[test]
fn missing_travel_time_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gap.json");
    fs::write(
        &path,
        r#"{
            "facilities": [{"id": "A", "value": 1.0}, {"id": "B", "value": 2.0}],
            "scenarios": [{"id": "S", "probability": 1.0}],
            "travel_times": {"S": {"A": 1.0}}
        }"#,
    )
    .unwrap();

    let err = load_instance(&path).unwrap_err();
    assert_eq!(
        err.downcast_ref::<InputError>(),
        Some(&InputError::MissingTravelTime {
            scenario: "S".to_string(),
            facility: "B".to_string(),
        })
    );
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let err = load_instance(&path).unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse instance file"));
}

#[test]
fn boundary_time_survives_disk() {
    let spec = InstanceSpec::builder()
        .facility("A", 10.0)
        .scenario("only", 1.0, &[AWKWARD_HOURS])
        .spec();
    let threshold = Hours::new(AWKWARD_HOURS);
    let before = DecisionEngine::new(spec.clone().validate().unwrap(), SelectorKind::ClosedForm)
        .evaluate(threshold)
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("boundary.json");
    save_instance(&path, &spec).unwrap();
    let model = load_instance(&path).unwrap();

    assert_eq!(model.travel_time(0, 0), Hours::new(AWKWARD_HOURS));
    let after = DecisionEngine::new(model, SelectorKind::ClosedForm)
        .evaluate(threshold)
        .unwrap();
    assert_eq!(before.rp.expected_value, 10.0);
    assert_eq!(after, before);
}

#[test]
fn sweep_json_keeps_every_digit() {
    let model = InstanceSpec::builder()
        .facility("A", 0.1 + 0.2)
        .facility("B", 1.0 / 3.0)
        .scenario("s1", 0.3, &[AWKWARD_HOURS, 2.0])
        .scenario("s2", 0.7, &[1.0, AWKWARD_HOURS])
        .build()
        .unwrap();
    let engine = DecisionEngine::new(model, SelectorKind::ClosedForm);
    let report = run_sweep(
        &engine,
        &[1.0 / 7.0, 2.0, AWKWARD_HOURS],
        SweepOptions::default(),
    )
    .unwrap();

    let json = serde_json::to_string(&report).unwrap();
    let back: SweepReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}
