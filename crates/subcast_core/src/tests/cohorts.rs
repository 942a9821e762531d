//! Tests for the cohort revenue engine: tier splits, trial-activity
//! windows and retention decay.

use crate::cohort::build_cohort_grids;
use crate::config::ParametersBuilder;
use crate::model::AcquisitionSeries;

/// A series with a single nonzero cohort at `month`.
fn single_cohort(months: usize, month: usize, trials: u64, paid: u64) -> AcquisitionSeries {
    let mut series = AcquisitionSeries {
        marketing_budgets: vec![0.0; months],
        installs: vec![0; months],
        trials: vec![0; months],
        new_paid_users: vec![0; months],
    };
    series.trials[month] = trials;
    series.new_paid_users[month] = paid;
    series
}

#[test]
fn test_empty_cohorts_leave_zero_rows() {
    let params = ParametersBuilder::new()
        .months(6)
        .development_period_months(2)
        .build()
        .unwrap();
    let series = single_cohort(6, 3, 1_000, 400);
    let (revenue, trial_activity) = build_cohort_grids(&params, &series);

    for cohort in [0, 1, 2] {
        assert!(revenue.row(cohort).iter().all(|&v| v == 0.0));
        assert!(trial_activity.row(cohort).iter().all(|&v| v == 0.0));
    }
    assert!(revenue.row_sum(3) > 0.0);
}

#[test]
fn test_no_contribution_before_cohort_month() {
    let params = ParametersBuilder::new().months(8).build().unwrap();
    let series = single_cohort(8, 4, 500, 200);
    let (revenue, trial_activity) = build_cohort_grids(&params, &series);

    for month in 0..4 {
        assert_eq!(revenue.get(4, month), 0.0);
        assert_eq!(trial_activity.get(4, month), 0.0);
    }
}

#[test]
fn test_trial_activity_window() {
    // 45-day trial spans one whole month beyond the acquisition month.
    let params = ParametersBuilder::new()
        .months(5)
        .trial_period_days(45)
        .build()
        .unwrap();
    let series = single_cohort(5, 0, 100, 0);
    let (_, trial_activity) = build_cohort_grids(&params, &series);

    // 70/20/10 floor split of 100 trials keeps all 100.
    assert_eq!(trial_activity.get(0, 0), 100.0);
    assert_eq!(trial_activity.get(0, 1), 100.0);
    assert_eq!(trial_activity.get(0, 2), 0.0);
}

#[test]
fn test_trial_window_clipped_to_horizon() {
    let params = ParametersBuilder::new()
        .months(4)
        .trial_period_days(92)
        .build()
        .unwrap();
    let series = single_cohort(4, 2, 100, 50);
    let (revenue, trial_activity) = build_cohort_grids(&params, &series);

    // Trial months = 3, so the window would run through month 5; it clips
    // at month 3 instead.
    assert!(trial_activity.get(2, 2) > 0.0);
    assert!(trial_activity.get(2, 3) > 0.0);

    // Paid conversion would land at month 5, past the horizon: no revenue.
    assert!(revenue.row(2).iter().all(|&v| v == 0.0));
}

#[test]
fn test_retention_decay() {
    // Single monthly-only tier for round numbers: 10 users at $20 with
    // retention 0.75 (rebill rate 3).
    let params = ParametersBuilder::new()
        .months(4)
        .prices(20.0, 15.0, 10.0)
        .distributions(1.0, 0.0, 0.0)
        .rebill_rate(3.0)
        .trial_period_days(7)
        .build()
        .unwrap();
    let series = single_cohort(4, 0, 0, 10);
    let (revenue, _) = build_cohort_grids(&params, &series);

    let expected = [200.0, 150.0, 112.5, 84.375];
    for (month, want) in expected.iter().enumerate() {
        assert!(
            (revenue.get(0, month) - want).abs() < 1e-9,
            "month {month}: got {}, want {want}",
            revenue.get(0, month)
        );
    }
}

#[test]
fn test_conversion_delayed_by_trial_period() {
    let params = ParametersBuilder::new()
        .months(6)
        .prices(20.0, 15.0, 10.0)
        .distributions(1.0, 0.0, 0.0)
        .trial_period_days(45)
        .build()
        .unwrap();
    let series = single_cohort(6, 1, 0, 10);
    let (revenue, _) = build_cohort_grids(&params, &series);

    // Trial months = 1: revenue starts at month 2, not the cohort month.
    assert_eq!(revenue.get(1, 1), 0.0);
    assert_eq!(revenue.get(1, 2), 200.0);
}

#[test]
fn test_tier_split_drops_remainders() {
    // 9 paid users split 70/20/10 floors to 6 + 1 + 0; two users are lost
    // to truncation by design.
    let params = ParametersBuilder::new()
        .months(2)
        .prices(24.0, 15.0, 10.0)
        .trial_period_days(7)
        .build()
        .unwrap();
    let series = single_cohort(2, 0, 0, 9);
    let (revenue, _) = build_cohort_grids(&params, &series);

    let expected = 6.0 * 24.0 + 1.0 * 15.0;
    assert!((revenue.get(0, 0) - expected).abs() < 1e-9);
}

#[test]
fn test_grids_are_deterministic() {
    let params = super::scenario_params();
    let series = crate::acquisition::project_acquisition(&params);

    let (revenue_a, trials_a) = build_cohort_grids(&params, &series);
    let (revenue_b, trials_b) = build_cohort_grids(&params, &series);
    assert_eq!(revenue_a, revenue_b);
    assert_eq!(trials_a, trials_b);
}
