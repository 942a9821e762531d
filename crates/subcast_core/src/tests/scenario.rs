//! The full 36-month reference scenario: a fitness-app launch with a
//! three-month development period, geometric marketing growth capped at
//! $500K and January seasonality.

use crate::projection::project;

use super::scenario_params;

#[test]
fn test_development_months_are_silent() {
    let projection = project(&scenario_params()).unwrap();

    for month in 0..3 {
        let row = &projection.monthly[month];
        assert_eq!(row.marketing_cost, 0.0);
        assert_eq!(row.net_revenue, 0.0);
        assert_eq!(row.new_paid_users, 0);
        assert_eq!(row.new_trials, 0);
        assert_eq!(row.active_paid_users, 0);
        assert_eq!(row.active_trials, 0.0);
    }
}

#[test]
fn test_marketing_ramp_and_cap() {
    let projection = project(&scenario_params()).unwrap();

    assert_eq!(projection.monthly[3].marketing_cost, 80_000.0);
    assert_eq!(projection.monthly[4].marketing_cost, 160_000.0);
    assert_eq!(projection.monthly[5].marketing_cost, 320_000.0);
    for month in 6..36 {
        let expected = if month % 12 == 0 { 1_000_000.0 } else { 500_000.0 };
        assert_eq!(
            projection.monthly[month].marketing_cost,
            expected,
            "month {month}"
        );
    }
}

#[test]
fn test_early_months_need_investment() {
    let projection = project(&scenario_params()).unwrap();

    // Development months burn developer salaries with no revenue.
    assert_eq!(projection.monthly[0].required_investment, 15_000.0);

    // The first marketing months still run at a loss.
    for month in 3..6 {
        assert!(
            projection.monthly[month].required_investment > 0.0,
            "month {month}"
        );
    }
}

#[test]
fn test_investment_only_where_rolling_profit_negative() {
    let projection = project(&scenario_params()).unwrap();

    let mut rolling = 0.0;
    for row in &projection.monthly {
        rolling += row.net_profit;
        if rolling < 0.0 {
            assert!(row.required_investment > 0.0, "month {}", row.month);
            rolling = 0.0;
        } else {
            assert_eq!(row.required_investment, 0.0, "month {}", row.month);
        }
    }

    assert!(projection.total_required_investment() > 0.0);
}

#[test]
fn test_business_turns_profitable() {
    let projection = project(&scenario_params()).unwrap();

    let last = projection.monthly.last().unwrap();
    assert!(last.net_profit > 0.0);
    assert!(last.required_investment == 0.0);
    assert!(projection.final_cumulative_profit() > 0.0);
}

#[test]
fn test_cohort_economics() {
    let projection = project(&scenario_params()).unwrap();

    // Every post-development cohort acquires paid users.
    assert_eq!(projection.cohorts.len(), 33);
    assert!(projection.cohorts.iter().all(|c| c.ltv > 0.0));
    assert!(projection.cohorts.iter().all(|c| c.cac > 0.0));

    assert!(projection.average_ltv() > 0.0);
    assert!(projection.average_cac() > 0.0);
    // Unit economics work out across the horizon.
    assert!(projection.average_ltv_cac() > 1.0);
}

#[test]
fn test_two_year_profit_lookup() {
    let projection = project(&scenario_params()).unwrap();

    assert_eq!(
        projection.cumulative_profit_through(23),
        Some(projection.monthly[23].cumulative_profit)
    );
    assert!(projection.cumulative_profit_through(36).is_none());
}

#[test]
fn test_unanchored_scenario_has_no_dates() {
    let projection = project(&scenario_params()).unwrap();
    assert!(projection.monthly.iter().all(|row| row.date.is_none()));
}

#[test]
fn test_projection_serializes() {
    let projection = project(&scenario_params()).unwrap();

    let json = serde_json::to_string(&projection).unwrap();
    let back: crate::model::Projection = serde_json::from_str(&json).unwrap();
    assert_eq!(projection, back);
}

#[test]
fn test_runs_are_pure() {
    let params = scenario_params();
    let a = project(&params).unwrap();
    let b = project(&params).unwrap();
    assert_eq!(a, b);
}
