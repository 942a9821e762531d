//! Parameters Builder
//!
//! Fluent API for assembling a [`Parameters`] record. Every setter consumes
//! and returns the builder; `build()` runs validation so an invalid record
//! is never handed to the projection.
//!
//! # Example
//!
//! ```ignore
//! use subcast_core::config::ParametersBuilder;
//!
//! let params = ParametersBuilder::new()
//!     .prices(24.0, 15.0, 10.0)
//!     .market_size(360_000_000)
//!     .install_to_trial_conversion(0.08)
//!     .trial_to_paid_conversion(0.4)
//!     .base_cpi(1.2)
//!     .initial_marketing_budget(40_000.0)
//!     .max_marketing_budget(500_000.0)
//!     .rebill_rate(2.8)
//!     .months(36)
//!     .development_period_months(3)
//!     .build()?;
//! ```

use super::Parameters;
use crate::error::ValidationError;

/// Builder for [`Parameters`], starting from the default scenario.
#[derive(Debug, Clone, Default)]
pub struct ParametersBuilder {
    params: Parameters,
}

impl ParametersBuilder {
    /// Create a builder seeded with the default parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set all three tier prices at once (monthly, quarterly, yearly).
    #[must_use]
    pub fn prices(mut self, monthly: f64, quarterly: f64, yearly: f64) -> Self {
        self.params.monthly_price = monthly;
        self.params.quarterly_price = quarterly;
        self.params.yearly_price = yearly;
        self
    }

    /// Set the tier population shares (must sum to 1.0).
    #[must_use]
    pub fn distributions(mut self, monthly: f64, quarterly: f64, yearly: f64) -> Self {
        self.params.monthly_distribution = monthly;
        self.params.quarterly_distribution = quarterly;
        self.params.yearly_distribution = yearly;
        self
    }

    #[must_use]
    pub fn market_size(mut self, users: u64) -> Self {
        self.params.market_size = users;
        self
    }

    #[must_use]
    pub fn install_to_trial_conversion(mut self, rate: f64) -> Self {
        self.params.install_to_trial_conversion = rate;
        self
    }

    #[must_use]
    pub fn trial_to_paid_conversion(mut self, rate: f64) -> Self {
        self.params.trial_to_paid_conversion = rate;
        self
    }

    #[must_use]
    pub fn rebill_rate(mut self, rate: f64) -> Self {
        self.params.rebill_rate = rate;
        self
    }

    #[must_use]
    pub fn base_cpi(mut self, cpi: f64) -> Self {
        self.params.base_cpi = cpi;
        self
    }

    #[must_use]
    pub fn cpi_increase_rate(mut self, rate: f64) -> Self {
        self.params.cpi_increase_rate = rate;
        self
    }

    #[must_use]
    pub fn initial_marketing_budget(mut self, budget: f64) -> Self {
        self.params.initial_marketing_budget = budget;
        self
    }

    #[must_use]
    pub fn marketing_growth_rate(mut self, rate: f64) -> Self {
        self.params.marketing_growth_rate = rate;
        self
    }

    #[must_use]
    pub fn max_marketing_budget(mut self, budget: f64) -> Self {
        self.params.max_marketing_budget = budget;
        self
    }

    #[must_use]
    pub fn months(mut self, months: usize) -> Self {
        self.params.months = months;
        self
    }

    #[must_use]
    pub fn development_period_months(mut self, months: usize) -> Self {
        self.params.development_period_months = months;
        self
    }

    /// Anchor month 0 to a calendar date.
    #[must_use]
    pub fn start(mut self, year: i16, month: i8, day: i8) -> Self {
        self.params.start = Some(jiff::civil::date(year, month, day));
        self
    }

    #[must_use]
    pub fn developer_salary(mut self, salary: f64) -> Self {
        self.params.developer_salary = salary;
        self
    }

    #[must_use]
    pub fn developer_count(mut self, count: u32) -> Self {
        self.params.developer_count = count;
        self
    }

    #[must_use]
    pub fn monthly_operational_cost(mut self, cost: f64) -> Self {
        self.params.monthly_operational_cost = cost;
        self
    }

    #[must_use]
    pub fn per_user_maintenance_cost(mut self, cost: f64) -> Self {
        self.params.per_user_maintenance_cost = cost;
        self
    }

    #[must_use]
    pub fn marketing_team_salary(mut self, salary: f64) -> Self {
        self.params.marketing_team_salary = salary;
        self
    }

    #[must_use]
    pub fn marketing_team_per_budget(mut self, budget: f64) -> Self {
        self.params.marketing_team_per_budget = budget;
        self
    }

    #[must_use]
    pub fn store_commission_rate(mut self, rate: f64) -> Self {
        self.params.store_commission_rate = rate;
        self
    }

    #[must_use]
    pub fn store_payment_percentage(mut self, percentage: f64) -> Self {
        self.params.store_payment_percentage = percentage;
        self
    }

    #[must_use]
    pub fn refund_rate(mut self, rate: f64) -> Self {
        self.params.refund_rate = rate;
        self
    }

    #[must_use]
    pub fn trial_period_days(mut self, days: u32) -> Self {
        self.params.trial_period_days = days;
        self
    }

    #[must_use]
    pub fn inflation_rate_annual(mut self, rate: f64) -> Self {
        self.params.inflation_rate_annual = rate;
        self
    }

    /// Replace the seasonality configuration: affected calendar months
    /// (1-12) plus the CAC and install-to-trial multipliers.
    #[must_use]
    pub fn seasonality(mut self, months: Vec<u8>, cac_factor: f64, trial_factor: f64) -> Self {
        self.params.seasonality_months = months;
        self.params.seasonality_cac_factor = cac_factor;
        self.params.seasonality_install_to_trial_factor = trial_factor;
        self
    }

    /// Disable seasonality entirely.
    #[must_use]
    pub fn no_seasonality(mut self) -> Self {
        self.params.seasonality_months = Vec::new();
        self
    }

    /// Validate and return the finished parameter set.
    pub fn build(self) -> Result<Parameters, ValidationError> {
        self.params.validate()?;
        Ok(self.params)
    }
}
