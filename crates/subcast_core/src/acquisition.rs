//! Marketing spend and user acquisition.
//!
//! Produces the four per-month acquisition series: marketing budget,
//! installs, trial starts and new paying users. The loop is strictly
//! sequential — each month's install capacity depends on the cumulative
//! paid-user total from all prior months.

use crate::config::Parameters;
use crate::model::AcquisitionSeries;

/// Simulate acquisition for every projection month.
///
/// Per month: nothing happens during the development period; afterwards the
/// marketing budget grows geometrically (capped, doubled in seasonality
/// months), installs are bought at the effective CPI and clamped to the
/// remaining addressable market, and trials/paid conversions are floored to
/// whole users. Truncation toward zero throughout, never rounding.
#[must_use]
pub fn project_acquisition(params: &Parameters) -> AcquisitionSeries {
    let seasonal = params.seasonality_set();

    let mut series = AcquisitionSeries::with_capacity(params.months);
    let mut budget = params.initial_marketing_budget;
    let mut total_paid_users: u64 = 0;

    for month in 0..params.months {
        if month < params.development_period_months {
            series.marketing_budgets.push(0.0);
            series.installs.push(0);
            series.trials.push(0);
            series.new_paid_users.push(0);
            continue;
        }

        budget =
            (budget * (1.0 + params.marketing_growth_rate)).min(params.max_marketing_budget);

        let in_season = seasonal.contains(&params.month_of_year(month));
        // Seasonality doubles the spend itself, not just the unit cost.
        let spend = if in_season { budget * 2.0 } else { budget };
        let cpi = if in_season {
            params.base_cpi * params.seasonality_cac_factor
        } else {
            params.base_cpi
        };
        let install_to_trial = if in_season {
            (params.install_to_trial_conversion * params.seasonality_install_to_trial_factor)
                .min(1.0)
        } else {
            params.install_to_trial_conversion
        };

        let potential_installs = (spend / cpi) as u64;
        let remaining_market = params.market_size.saturating_sub(total_paid_users);
        let installs = potential_installs.min(remaining_market);
        let trials = (installs as f64 * install_to_trial) as u64;
        let paid = (trials as f64 * params.trial_to_paid_conversion) as u64;

        series.marketing_budgets.push(spend);
        series.installs.push(installs);
        series.trials.push(trials);
        series.new_paid_users.push(paid);
        total_paid_users += paid;
    }

    series
}
