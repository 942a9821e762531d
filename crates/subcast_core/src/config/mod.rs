//! Projection parameters
//!
//! `Parameters` is the single immutable input record for a projection run:
//! prices, conversion rates, costs, growth rates and seasonality. It is
//! validated once, before any computation starts. For ergonomic
//! construction use the fluent [`ParametersBuilder`].

use jiff::ToSpan;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::model::SubscriptionTier;

pub mod builder;

pub use builder::ParametersBuilder;

/// Average days per calendar month, used to convert the trial period from
/// days to whole months.
pub const DAYS_PER_MONTH: f64 = 30.44;

/// Distribution sums within this tolerance of 1.0 pass validation.
const DISTRIBUTION_TOLERANCE: f64 = 1e-9;

fn default_months() -> usize {
    36
}

fn default_development_period_months() -> usize {
    6
}

fn default_marketing_growth_rate() -> f64 {
    1.0
}

fn default_max_marketing_budget() -> f64 {
    300_000.0
}

fn default_developer_salary() -> f64 {
    5_000.0
}

fn default_developer_count() -> u32 {
    3
}

fn default_monthly_operational_cost() -> f64 {
    7_000.0
}

fn default_per_user_maintenance_cost() -> f64 {
    0.5
}

fn default_cpi_increase_rate() -> f64 {
    0.0
}

fn default_store_commission_rate() -> f64 {
    0.30
}

fn default_store_payment_percentage() -> f64 {
    0.33
}

fn default_inflation_rate_annual() -> f64 {
    0.04
}

fn default_trial_period_days() -> u32 {
    7
}

fn default_marketing_team_salary() -> f64 {
    2_500.0
}

fn default_marketing_team_per_budget() -> f64 {
    50_000.0
}

fn default_refund_rate() -> f64 {
    0.03
}

fn default_monthly_distribution() -> f64 {
    0.70
}

fn default_quarterly_distribution() -> f64 {
    0.20
}

fn default_yearly_distribution() -> f64 {
    0.10
}

fn default_seasonality_months() -> Vec<u8> {
    vec![1]
}

fn default_seasonality_cac_factor() -> f64 {
    1.3
}

fn default_seasonality_install_to_trial_factor() -> f64 {
    1.15
}

/// All business inputs for one projection run.
///
/// Construction is cheap; nothing is derived until [`validate`] and the
/// projection itself run. Fields without a serde default must appear in
/// serialized parameter files.
///
/// [`validate`]: Parameters::validate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    // === Subscription pricing ===
    /// Monthly tier price per billing month.
    pub monthly_price: f64,
    /// Quarterly tier price per billing month.
    pub quarterly_price: f64,
    /// Yearly tier price per billing month.
    pub yearly_price: f64,

    /// Share of users on the monthly tier.
    #[serde(default = "default_monthly_distribution")]
    pub monthly_distribution: f64,
    /// Share of users on the quarterly tier.
    #[serde(default = "default_quarterly_distribution")]
    pub quarterly_distribution: f64,
    /// Share of users on the yearly tier.
    #[serde(default = "default_yearly_distribution")]
    pub yearly_distribution: f64,

    // === Market and conversion ===
    /// Maximum addressable users.
    pub market_size: u64,
    pub install_to_trial_conversion: f64,
    pub trial_to_paid_conversion: f64,
    /// Average number of times a subscription renews; drives retention.
    pub rebill_rate: f64,

    // === Acquisition ===
    /// Base cost per install.
    pub base_cpi: f64,
    /// CPI growth rate with cumulative user count. Carried in the record;
    /// the consolidated engine applies only the seasonality multiplier.
    #[serde(default = "default_cpi_increase_rate")]
    pub cpi_increase_rate: f64,
    pub initial_marketing_budget: f64,
    #[serde(default = "default_marketing_growth_rate")]
    pub marketing_growth_rate: f64,
    #[serde(default = "default_max_marketing_budget")]
    pub max_marketing_budget: f64,

    // === Horizon ===
    /// Projection horizon in months.
    #[serde(default = "default_months")]
    pub months: usize,
    /// Months of development before any market activity or operational
    /// spend.
    #[serde(default = "default_development_period_months")]
    pub development_period_months: usize,
    /// Optional calendar anchor for month 0. When absent, month 0 is
    /// January, so month-of-year is `month % 12 + 1`.
    #[serde(default)]
    pub start: Option<jiff::civil::Date>,

    // === Costs ===
    #[serde(default = "default_developer_salary")]
    pub developer_salary: f64,
    #[serde(default = "default_developer_count")]
    pub developer_count: u32,
    #[serde(default = "default_monthly_operational_cost")]
    pub monthly_operational_cost: f64,
    #[serde(default = "default_per_user_maintenance_cost")]
    pub per_user_maintenance_cost: f64,
    #[serde(default = "default_marketing_team_salary")]
    pub marketing_team_salary: f64,
    /// Marketing budget handled per team member; team size is the budget
    /// divided by this, rounded up.
    #[serde(default = "default_marketing_team_per_budget")]
    pub marketing_team_per_budget: f64,

    // === Revenue deductions ===
    #[serde(default = "default_store_commission_rate")]
    pub store_commission_rate: f64,
    /// Fraction of payments routed through the store, and thus subject to
    /// commission.
    #[serde(default = "default_store_payment_percentage")]
    pub store_payment_percentage: f64,
    #[serde(default = "default_refund_rate")]
    pub refund_rate: f64,

    // === Trials, inflation, seasonality ===
    #[serde(default = "default_trial_period_days")]
    pub trial_period_days: u32,
    #[serde(default = "default_inflation_rate_annual")]
    pub inflation_rate_annual: f64,
    /// Calendar months (1-12) with seasonal cost and conversion behavior.
    #[serde(default = "default_seasonality_months")]
    pub seasonality_months: Vec<u8>,
    #[serde(default = "default_seasonality_cac_factor")]
    pub seasonality_cac_factor: f64,
    #[serde(default = "default_seasonality_install_to_trial_factor")]
    pub seasonality_install_to_trial_factor: f64,
}

impl Default for Parameters {
    /// A complete fitness-app scenario: required fields match the reference
    /// interactive model's starting values, everything else takes the serde
    /// defaults.
    fn default() -> Self {
        Self {
            monthly_price: 24.0,
            quarterly_price: 15.0,
            yearly_price: 10.0,
            monthly_distribution: default_monthly_distribution(),
            quarterly_distribution: default_quarterly_distribution(),
            yearly_distribution: default_yearly_distribution(),
            market_size: 360_000_000,
            install_to_trial_conversion: 0.08,
            trial_to_paid_conversion: 0.4,
            rebill_rate: 2.8,
            base_cpi: 1.2,
            cpi_increase_rate: default_cpi_increase_rate(),
            initial_marketing_budget: 40_000.0,
            marketing_growth_rate: default_marketing_growth_rate(),
            max_marketing_budget: default_max_marketing_budget(),
            months: default_months(),
            development_period_months: default_development_period_months(),
            start: None,
            developer_salary: default_developer_salary(),
            developer_count: default_developer_count(),
            monthly_operational_cost: default_monthly_operational_cost(),
            per_user_maintenance_cost: default_per_user_maintenance_cost(),
            marketing_team_salary: default_marketing_team_salary(),
            marketing_team_per_budget: default_marketing_team_per_budget(),
            store_commission_rate: default_store_commission_rate(),
            store_payment_percentage: default_store_payment_percentage(),
            refund_rate: default_refund_rate(),
            trial_period_days: default_trial_period_days(),
            inflation_rate_annual: default_inflation_rate_annual(),
            seasonality_months: default_seasonality_months(),
            seasonality_cac_factor: default_seasonality_cac_factor(),
            seasonality_install_to_trial_factor: default_seasonality_install_to_trial_factor(),
        }
    }
}

impl Parameters {
    /// Check the parameter set; runs once before any computation.
    ///
    /// Tier distributions must sum to 1.0 (tolerance 1e-9), the horizon
    /// must be non-empty, divisors must be positive, and every numeric
    /// field must be finite and non-negative.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.months == 0 {
            return Err(ValidationError::ZeroMonths);
        }

        let total =
            self.monthly_distribution + self.quarterly_distribution + self.yearly_distribution;
        if (total - 1.0).abs() > DISTRIBUTION_TOLERANCE {
            return Err(ValidationError::TierDistribution { total });
        }

        for (field, value) in [
            ("monthly_price", self.monthly_price),
            ("base_cpi", self.base_cpi),
            ("marketing_team_per_budget", self.marketing_team_per_budget),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::NonFinite { field });
            }
            if value <= 0.0 {
                return Err(ValidationError::NonPositive { field, value });
            }
        }

        for (field, value) in [
            ("quarterly_price", self.quarterly_price),
            ("yearly_price", self.yearly_price),
            ("monthly_distribution", self.monthly_distribution),
            ("quarterly_distribution", self.quarterly_distribution),
            ("yearly_distribution", self.yearly_distribution),
            (
                "install_to_trial_conversion",
                self.install_to_trial_conversion,
            ),
            ("trial_to_paid_conversion", self.trial_to_paid_conversion),
            ("rebill_rate", self.rebill_rate),
            ("cpi_increase_rate", self.cpi_increase_rate),
            ("initial_marketing_budget", self.initial_marketing_budget),
            ("marketing_growth_rate", self.marketing_growth_rate),
            ("max_marketing_budget", self.max_marketing_budget),
            ("developer_salary", self.developer_salary),
            ("monthly_operational_cost", self.monthly_operational_cost),
            ("per_user_maintenance_cost", self.per_user_maintenance_cost),
            ("marketing_team_salary", self.marketing_team_salary),
            ("store_commission_rate", self.store_commission_rate),
            ("store_payment_percentage", self.store_payment_percentage),
            ("refund_rate", self.refund_rate),
            ("inflation_rate_annual", self.inflation_rate_annual),
            ("seasonality_cac_factor", self.seasonality_cac_factor),
            (
                "seasonality_install_to_trial_factor",
                self.seasonality_install_to_trial_factor,
            ),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(ValidationError::Negative { field, value });
            }
        }

        Ok(())
    }

    /// The three fixed subscription tiers derived from the price and
    /// distribution fields.
    #[must_use]
    pub fn tiers(&self) -> [SubscriptionTier; 3] {
        [
            SubscriptionTier {
                duration_months: 1,
                price: self.monthly_price,
                distribution: self.monthly_distribution,
            },
            SubscriptionTier {
                duration_months: 3,
                price: self.quarterly_price,
                distribution: self.quarterly_distribution,
            },
            SubscriptionTier {
                duration_months: 12,
                price: self.yearly_price,
                distribution: self.yearly_distribution,
            },
        ]
    }

    /// Monthly retention probability derived from the rebill rate:
    /// `1 - 1/(1 + rebill_rate)`. Higher rebill rate, higher retention.
    #[must_use]
    pub fn retention_rate(&self) -> f64 {
        1.0 - 1.0 / (1.0 + self.rebill_rate)
    }

    /// Monthly discount rate derived from the annual inflation rate:
    /// `(1 + annual)^(1/12) - 1`.
    #[must_use]
    pub fn monthly_discount_rate(&self) -> f64 {
        (1.0 + self.inflation_rate_annual).powf(1.0 / 12.0) - 1.0
    }

    /// Trial period length in whole months, truncated.
    #[must_use]
    pub fn trial_months(&self) -> usize {
        (f64::from(self.trial_period_days) / DAYS_PER_MONTH) as usize
    }

    /// Calendar month (1-12) for the zero-based projection month.
    #[must_use]
    pub fn month_of_year(&self, month: usize) -> u8 {
        let start_month = self.start.map_or(1, |d| d.month() as usize);
        ((start_month - 1 + month) % 12 + 1) as u8
    }

    /// Calendar date for the zero-based projection month, when anchored.
    #[must_use]
    pub fn date_for_month(&self, month: usize) -> Option<jiff::civil::Date> {
        let start = self.start?;
        start.checked_add((month as i64).months()).ok()
    }

    /// Seasonality months as a lookup set.
    #[must_use]
    pub fn seasonality_set(&self) -> FxHashSet<u8> {
        self.seasonality_months.iter().copied().collect()
    }
}
