//! Integration test: par curve -> forwards -> spot curve.
//!
//! Bootstrapping a par curve from a spot curve and converting it back
//! through bucketed forwards must reproduce the spot rates on the
//! single-year buckets.

use approx::assert_abs_diff_eq;
use rfr_curves::alternative::{
    build_par_curve, forward_to_term_structure, par_to_forward, par_to_forward_detailed,
    DEFAULT_CRA, DEFAULT_MAX_ERROR, DEFAULT_MAX_RUNS, DEFAULT_SPAN,
};
use rfr_curves::RateTable;

fn upward_spot_curve() -> RateTable {
    (1..=20)
        .map(|t| (t, 0.005 + 0.025 * (1.0 - (-f64::from(t) / 8.0).exp())))
        .collect()
}

#[test]
fn test_round_trip_recovers_spot_rates() {
    let spot = upward_spot_curve();
    let par = build_par_curve(&spot, &RateTable::new(), DEFAULT_CRA).unwrap();

    let forwards = par_to_forward(&par, DEFAULT_SPAN, DEFAULT_MAX_RUNS, DEFAULT_MAX_ERROR).unwrap();
    let term = forward_to_term_structure(&forwards).unwrap();

    assert_eq!(term.len(), DEFAULT_SPAN as usize);
    for (&maturity, &rate) in &spot {
        assert_abs_diff_eq!(term.get(maturity).unwrap(), rate, epsilon = 1e-8);
    }
}

#[test]
fn test_round_trip_with_swap_points() {
    let spot = upward_spot_curve();
    let swaps: RateTable = [(25, 0.032), (30, 0.033), (40, 0.034), (50, 0.034)]
        .into_iter()
        .collect();
    let par = build_par_curve(&spot, &swaps, DEFAULT_CRA).unwrap();

    let result =
        par_to_forward_detailed(&par, DEFAULT_SPAN, DEFAULT_MAX_RUNS, DEFAULT_MAX_ERROR).unwrap();
    assert!(result.converged());
    assert_eq!(result.buckets.len(), 24);

    let term = forward_to_term_structure(&result.forwards).unwrap();
    for maturity in 1..=20 {
        assert_abs_diff_eq!(term.get(maturity).unwrap(), spot[&maturity], epsilon = 1e-8);
    }

    // Flat forward past the last swap point.
    let last = result.forwards.get(50).unwrap();
    assert!(result.forwards.iter().skip(50).all(|(_, f)| f == last));
}

#[test]
fn test_tail_spot_rates_move_towards_last_forward() {
    let spot = upward_spot_curve();
    let par = build_par_curve(&spot, &RateTable::new(), DEFAULT_CRA).unwrap();
    let forwards = par_to_forward(&par, DEFAULT_SPAN, DEFAULT_MAX_RUNS, DEFAULT_MAX_ERROR).unwrap();
    let term = forward_to_term_structure(&forwards).unwrap();

    let last_forward = forwards.get(120).unwrap();
    let gap_at_20 = (term.get(20).unwrap() - last_forward).abs();
    let gap_at_120 = (term.get(120).unwrap() - last_forward).abs();
    assert!(gap_at_120 < gap_at_20);
}
