//! Integration tests for the projection engine
//!
//! Tests are organized by topic:
//! - `acquisition` - budget growth, seasonality, market saturation
//! - `cohorts` - tier splits, trial windows, retention decay
//! - `metrics` - cost categories, EBITDA, investment reset rule, LTV/CAC
//! - `scenario` - the full 36-month reference scenario

mod cohorts;
mod scenario;

use crate::config::{Parameters, ParametersBuilder};

/// The reference scenario: a fitness-app launch over 36 months.
pub(crate) fn scenario_params() -> Parameters {
    ParametersBuilder::new()
        .prices(24.0, 15.0, 10.0)
        .market_size(360_000_000)
        .install_to_trial_conversion(0.08)
        .trial_to_paid_conversion(0.4)
        .base_cpi(1.2)
        .initial_marketing_budget(40_000.0)
        .max_marketing_budget(500_000.0)
        .rebill_rate(2.8)
        .store_payment_percentage(0.33)
        .trial_period_days(7)
        .development_period_months(3)
        .marketing_team_salary(4_000.0)
        .marketing_team_per_budget(50_000.0)
        .months(36)
        .build()
        .expect("scenario parameters are valid")
}
