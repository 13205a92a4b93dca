use gravsim::scoring::accuracy::{
    check_pairing, score, summarize, AxisErrors, ErrorReport, PercentError,
};
use gravsim::simulation::states::{Body, System, NVec3};
use gravsim::SimError;

fn body(name: &str, x: [f64; 3], v: [f64; 3]) -> Body {
    Body::new(name, 1.0e24, NVec3::from(x), NVec3::from(v))
}

fn system(bodies: Vec<Body>) -> System {
    System::new(bodies).unwrap()
}

fn approx(e: PercentError, expected: f64) -> bool {
    match e {
        PercentError::Value(v) => (v - expected).abs() < 1e-9,
        PercentError::Undefined => false,
    }
}

// ==================================================================================
// PercentError
// ==================================================================================

#[test]
fn relative_error_is_percentage_of_reference() {
    assert!(approx(PercentError::relative(110.0, 100.0), 10.0));
    assert!(approx(PercentError::relative(90.0, 100.0), 10.0));
    assert!(approx(PercentError::relative(-90.0, -100.0), 10.0));
    assert!(approx(PercentError::relative(5.0, 5.0), 0.0));
}

#[test]
fn zero_reference_is_undefined() {
    assert_eq!(PercentError::relative(1.0, 0.0), PercentError::Undefined);
    assert_eq!(PercentError::relative(0.0, 0.0), PercentError::Undefined);
    assert_eq!(PercentError::relative(f64::NAN, 1.0), PercentError::Undefined);
}

#[test]
fn undefined_poisons_the_mean() {
    let mean = PercentError::mean(&[PercentError::Value(1.0), PercentError::Undefined]);
    assert!(mean.is_undefined());
    assert_eq!(mean.value(), None);

    let mean = PercentError::mean(&[PercentError::Value(1.0), PercentError::Value(3.0)]);
    assert_eq!(mean, PercentError::Value(2.0));
}

#[test]
fn percent_error_display() {
    assert_eq!(PercentError::Value(2.5).to_string(), "2.5");
    assert_eq!(PercentError::Undefined.to_string(), "undefined");
}

// ==================================================================================
// Per-body reports
// ==================================================================================

#[test]
fn report_averages_axes_then_quantities() {
    let sim = body("Mars", [110.0, 200.0, 330.0], [10.0, 22.0, 30.0]);
    let ideal = body("Mars", [100.0, 200.0, 300.0], [10.0, 20.0, 30.0]);

    let r = ErrorReport::compare(&sim, &ideal);

    assert!(approx(r.position_axes.x, 10.0));
    assert!(approx(r.position_axes.y, 0.0));
    assert!(approx(r.position_axes.z, 10.0));
    assert!(approx(r.displacement_error, 20.0 / 3.0));
    assert!(approx(r.velocity_axes.y, 10.0));
    assert!(approx(r.velocity_error, 10.0 / 3.0));
    assert!(approx(r.true_error, 5.0));
    assert_eq!(r.undefined_terms(), 0);
}

#[test]
fn zero_reference_axis_gives_undefined_marker() {
    let sim = body("Sun", [12.0, 200.0, 300.0], [1.0, 2.0, 3.0]);
    let ideal = body("Sun", [0.0, 200.0, 300.0], [1.0, 2.0, 3.0]);

    let r = ErrorReport::compare(&sim, &ideal);

    assert_eq!(r.position_axes.x, PercentError::Undefined);
    assert!(approx(r.position_axes.y, 0.0));
    assert!(r.displacement_error.is_undefined());
    assert!(approx(r.velocity_error, 0.0));
    assert!(r.true_error.is_undefined());
    assert_eq!(r.undefined_terms(), 1);
}

#[test]
fn axis_errors_count_undefined() {
    let e = AxisErrors::between(&NVec3::new(1.0, 1.0, 1.0), &NVec3::new(0.0, 0.0, 2.0));
    assert_eq!(e.undefined_count(), 2);
    assert!(approx(e.z, 50.0));
}

// ==================================================================================
// Pairing and scoring whole systems
// ==================================================================================

#[test]
fn pairing_is_by_name_not_order() {
    let sim_a = body("Earth", [1.5e11, 2.0e9, 1.0e7], [300.0, 29_000.0, 1.0]);
    let sim_b = body("Jupiter", [7.4e11, 1.0e10, -3.0e9], [-100.0, 13_000.0, 2.0]);
    let sim_c = body("Venus", [-1.0e11, 3.0e10, 5.0e9], [-9_000.0, -33_000.0, 500.0]);

    let ideal_a = body("Earth", [1.49e11, 2.1e9, 1.1e7], [310.0, 29_100.0, 1.5]);
    let ideal_b = body("Jupiter", [7.3e11, 1.1e10, -3.1e9], [-110.0, 13_100.0, 2.5]);
    let ideal_c = body("Venus", [-1.1e11, 3.1e10, 5.2e9], [-9_100.0, -33_100.0, 480.0]);

    let in_order = score(
        &system(vec![sim_a.clone(), sim_b.clone(), sim_c.clone()]),
        &system(vec![ideal_a.clone(), ideal_b.clone(), ideal_c.clone()]),
    )
    .unwrap();

    let shuffled = score(
        &system(vec![sim_c, sim_a, sim_b]),
        &system(vec![ideal_b, ideal_c, ideal_a]),
    )
    .unwrap();

    assert_eq!(in_order, shuffled);
    let names: Vec<&str> = in_order.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Earth", "Jupiter", "Venus"]);
}

#[test]
fn identical_states_score_zero() {
    let s = system(vec![
        body("a", [1.0, 2.0, 3.0], [4.0, 5.0, 6.0]),
        body("b", [-1.0, -2.0, -3.0], [-4.0, -5.0, -6.0]),
    ]);

    let reports = score(&s, &s.clone()).unwrap();
    for r in &reports {
        assert_eq!(r.true_error, PercentError::Value(0.0));
    }
}

#[test]
fn mismatched_body_sets_are_a_pairing_error() {
    let sim = system(vec![
        body("Earth", [1.0, 1.0, 1.0], [1.0, 1.0, 1.0]),
        body("Pluto", [1.0, 1.0, 1.0], [1.0, 1.0, 1.0]),
    ]);
    let ideal = system(vec![
        body("Earth", [1.0, 1.0, 1.0], [1.0, 1.0, 1.0]),
        body("Ceres", [1.0, 1.0, 1.0], [1.0, 1.0, 1.0]),
    ]);

    match score(&sim, &ideal) {
        Err(SimError::PairingMismatch {
            missing_in_ideal,
            missing_in_simulated,
        }) => {
            assert_eq!(missing_in_ideal, vec!["Pluto".to_string()]);
            assert_eq!(missing_in_simulated, vec!["Ceres".to_string()]);
        }
        other => panic!("expected PairingMismatch, got {:?}", other),
    }
    assert!(check_pairing(&sim, &sim).is_ok());
}

#[test]
fn extra_reference_body_is_a_pairing_error() {
    let sim = system(vec![body("Earth", [1.0, 1.0, 1.0], [1.0, 1.0, 1.0])]);
    let ideal = system(vec![
        body("Earth", [1.0, 1.0, 1.0], [1.0, 1.0, 1.0]),
        body("Moon", [1.0, 1.0, 1.0], [1.0, 1.0, 1.0]),
    ]);

    assert!(matches!(
        check_pairing(&sim, &ideal),
        Err(SimError::PairingMismatch { .. })
    ));
}

// ==================================================================================
// Summary
// ==================================================================================

#[test]
fn summary_tracks_mean_and_worst() {
    let sim = system(vec![
        body("a", [110.0, 110.0, 110.0], [10.0, 10.0, 10.0]),
        body("b", [130.0, 130.0, 130.0], [10.0, 10.0, 10.0]),
    ]);
    let ideal = system(vec![
        body("a", [100.0, 100.0, 100.0], [10.0, 10.0, 10.0]),
        body("b", [100.0, 100.0, 100.0], [10.0, 10.0, 10.0]),
    ]);

    let summary = summarize(&score(&sim, &ideal).unwrap());

    assert_eq!(summary.bodies, 2);
    // a: (10 + 0) / 2 = 5, b: (30 + 0) / 2 = 15
    assert!(approx(summary.mean_true_error, 10.0));
    let (worst, value) = summary.worst.unwrap();
    assert_eq!(worst, "b");
    assert!((value - 15.0).abs() < 1e-9);
    assert_eq!(summary.undefined_terms, 0);
}

#[test]
fn summary_with_undefined_body() {
    let sim = system(vec![
        body("a", [110.0, 110.0, 110.0], [10.0, 10.0, 10.0]),
        body("b", [130.0, 130.0, 130.0], [10.0, 10.0, 10.0]),
    ]);
    let ideal = system(vec![
        body("a", [100.0, 100.0, 100.0], [10.0, 10.0, 10.0]),
        body("b", [100.0, 100.0, 100.0], [10.0, 0.0, 10.0]),
    ]);

    let summary = summarize(&score(&sim, &ideal).unwrap());

    assert!(summary.mean_true_error.is_undefined());
    assert_eq!(summary.worst.map(|(n, _)| n), Some("a".to_string()));
    assert_eq!(summary.undefined_terms, 1);
}
