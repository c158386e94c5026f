//! Invariants that hold for any valid instance.

use organ_dispatch::{
    DecisionEngine, EvaluationError, Hours, InputError, InstanceSpec, SelectorKind,
    SweepOptions, demo_instance, run_sweep,
};

fn demo_engine() -> DecisionEngine {
    DecisionEngine::new(demo_instance().validate().unwrap(), SelectorKind::ClosedForm)
}

#[test]
fn metrics_are_never_negative_across_a_fine_sweep() {
    let thresholds: Vec<f64> = (0..=60).map(|i| i as f64 * 0.25).collect();
    let report = run_sweep(&demo_engine(), &thresholds, SweepOptions::default()).unwrap();

    assert_eq!(report.failed_count(), 0);
    for row in report.solved() {
        assert!(row.evpi >= 0.0, "EVPI at {}", row.threshold);
        assert!(row.vss >= 0.0, "VSS at {}", row.threshold);
        assert!(row.eev_value <= row.rp_value && row.rp_value <= row.ws_value);
    }
}

#[test]
fn rp_and_ws_grow_with_the_threshold() {
    let thresholds: Vec<f64> = (0..=28).map(|i| i as f64 * 0.5).collect();
    let report = run_sweep(&demo_engine(), &thresholds, SweepOptions::default()).unwrap();
    let rows: Vec<_> = report.solved().collect();

    for pair in rows.windows(2) {
        assert!(pair[1].rp_value >= pair[0].rp_value);
        assert!(pair[1].ws_value >= pair[0].ws_value);
    }
}

#[test]
fn boundary_travel_time_counts_as_feasible() {
    // A takes exactly 8h in Extreme
    let model = demo_instance().validate().unwrap();
    let scores = organ_dispatch::analysis::facility_scores(&model, Hours::new(8.0));
    let a = scores.iter().find(|s| s.id.as_str() == "A").unwrap();
    assert!((a.feasible_mass - 1.0).abs() < 1e-9);
}

#[test]
fn ties_go_to_the_smallest_id_every_time() {
    let model = InstanceSpec::builder()
        .facility("Zeta", 10.0)
        .facility("Alpha", 10.0)
        .facility("Mid", 10.0)
        .scenario("only", 1.0, &[1.0, 1.0, 1.0])
        .build()
        .unwrap();

    for kind in [SelectorKind::ClosedForm, SelectorKind::Milp] {
        let engine = DecisionEngine::new(model.clone(), kind);
        for _ in 0..3 {
            let eval = engine.evaluate(Hours::new(2.0)).unwrap();
            assert_eq!(eval.rp.facility_label(), "Alpha");
            assert_eq!(eval.eev.decision.facility_label(), "Alpha");
        }
    }
}

#[test]
fn single_scenario_has_no_uncertainty() {
    let model = InstanceSpec::builder()
        .facility("A", 10.0)
        .facility("B", 30.0)
        .facility("C", 20.0)
        .scenario("certain", 1.0, &[1.0, 5.0, 2.0])
        .build()
        .unwrap();
    let engine = DecisionEngine::new(model, SelectorKind::ClosedForm);
    let eval = engine.evaluate(Hours::new(3.0)).unwrap();

    assert_eq!(eval.rp.facility_label(), "C");
    assert_eq!(eval.metrics.evpi, 0.0);
    assert_eq!(eval.metrics.vss, 0.0);
}

#[test]
fn invalid_threshold_is_an_input_error() {
    let err = demo_engine().evaluate(Hours::new(-1.0)).unwrap_err();
    assert_eq!(
        err,
        EvaluationError::Input(InputError::InvalidThreshold { hours: -1.0 })
    );
    assert!(!err.is_recoverable());
}

#[test]
fn evaluation_does_not_touch_the_model() {
    let engine = demo_engine();
    let before = engine.model().clone();
    for hours in [3.0, 8.0, 11.0] {
        engine.evaluate(Hours::new(hours)).unwrap();
    }
    assert_eq!(engine.model(), &before);
}
