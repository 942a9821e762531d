//! Core data types: subscription tiers, the cohort grids produced by the
//! revenue engine, and the output tables handed to consumers.

use serde::{Deserialize, Serialize};

/// A subscription tier with a fixed share of the user population.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionTier {
    /// Billing period length in months (1, 3 or 12).
    pub duration_months: u32,
    /// Price charged per billing month.
    pub price: f64,
    /// Share of users on this tier, in [0, 1].
    pub distribution: f64,
}

/// A `months × months` grid with a flat row-major backing store.
///
/// Entry `[cohort][month]` is the contribution of the cohort acquired in
/// `cohort` during calendar month `month`; zero for `month < cohort`. One
/// grid holds revenue, a parallel grid holds active-trial headcount. Grids
/// are rebuilt from scratch on every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortGrid {
    months: usize,
    data: Vec<f64>,
}

impl CohortGrid {
    /// Create a zeroed grid covering `months` cohorts over `months` months.
    #[must_use]
    pub fn new(months: usize) -> Self {
        Self {
            months,
            data: vec![0.0; months * months],
        }
    }

    /// Number of months (and cohorts) the grid covers.
    #[must_use]
    pub fn months(&self) -> usize {
        self.months
    }

    /// Value at `[cohort][month]`.
    #[must_use]
    pub fn get(&self, cohort: usize, month: usize) -> f64 {
        self.data[cohort * self.months + month]
    }

    /// Add `amount` to `[cohort][month]`.
    pub fn add(&mut self, cohort: usize, month: usize, amount: f64) {
        self.data[cohort * self.months + month] += amount;
    }

    /// One cohort's full row.
    #[must_use]
    pub fn row(&self, cohort: usize) -> &[f64] {
        &self.data[cohort * self.months..(cohort + 1) * self.months]
    }

    /// Mutable view of one cohort's row.
    pub fn row_mut(&mut self, cohort: usize) -> &mut [f64] {
        &mut self.data[cohort * self.months..(cohort + 1) * self.months]
    }

    /// Sum of one cohort's row (its total lifetime contribution).
    #[must_use]
    pub fn row_sum(&self, cohort: usize) -> f64 {
        self.row(cohort).iter().sum()
    }

    /// Sum over all cohorts for one calendar month.
    #[must_use]
    pub fn column_sum(&self, month: usize) -> f64 {
        (0..self.months).map(|c| self.get(c, month)).sum()
    }

    /// The flat row-major backing data.
    #[must_use]
    pub fn data(&self) -> &[f64] {
        &self.data
    }
}

/// Per-month acquisition series: four equal-length sequences, one entry per
/// projection month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AcquisitionSeries {
    /// Marketing spend per month (seasonality doubling included).
    pub marketing_budgets: Vec<f64>,
    /// App installs per month, clamped to the remaining market.
    pub installs: Vec<u64>,
    /// New trial starts per month.
    pub trials: Vec<u64>,
    /// New paying users per month.
    pub new_paid_users: Vec<u64>,
}

impl AcquisitionSeries {
    /// Create empty series with room for `months` entries each.
    #[must_use]
    pub fn with_capacity(months: usize) -> Self {
        Self {
            marketing_budgets: Vec::with_capacity(months),
            installs: Vec::with_capacity(months),
            trials: Vec::with_capacity(months),
            new_paid_users: Vec::with_capacity(months),
        }
    }

    /// Number of recorded months.
    #[must_use]
    pub fn len(&self) -> usize {
        self.marketing_budgets.len()
    }

    /// Whether no months have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marketing_budgets.is_empty()
    }
}

/// One row of the monthly metrics table.
///
/// All monetary fields are raw dollars and user counts are raw heads;
/// scaling to $M / K happens at the presentation boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyMetrics {
    /// Zero-based projection month.
    pub month: usize,
    /// Calendar date for this month when the parameter set anchors one.
    pub date: Option<jiff::civil::Date>,
    /// Revenue net of refunds and store commission.
    pub net_revenue: f64,
    /// Sum of the five cost categories below.
    pub total_cost: f64,
    pub marketing_cost: f64,
    pub development_cost: f64,
    pub marketing_team_cost: f64,
    pub operational_cost: f64,
    pub maintenance_cost: f64,
    /// Running total of marketing spend through this month.
    pub cumulative_marketing: f64,
    /// Operating profit: net revenue minus total cost.
    pub net_profit: f64,
    /// Net revenue minus marketing and maintenance spend only.
    pub ebitda: f64,
    /// EBITDA over net revenue, in percent; 0 when net revenue is 0.
    pub ebitda_margin: f64,
    /// Operating profit discounted by the monthly inflation rate.
    pub inflation_adjusted_profit: f64,
    /// Running total of operating profit through this month.
    pub cumulative_profit: f64,
    /// Cash injection needed to cover this month's rolling deficit.
    pub required_investment: f64,
    pub active_paid_users: u64,
    pub active_trials: f64,
    pub new_paid_users: u64,
    pub new_trials: u64,
}

/// One row of the cohort metrics table; only cohorts that produced at least
/// one paying user appear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortMetrics {
    /// Zero-based acquisition month of the cohort.
    pub cohort: usize,
    /// Paying users acquired in this cohort.
    pub users: u64,
    /// Trial starts in this cohort.
    pub trials: u64,
    /// Lifetime revenue per paying user, pre-refund.
    pub ltv: f64,
    /// Marketing spend per paying user.
    pub cac: f64,
    /// LTV over CAC; 0 when CAC is 0.
    pub ltv_cac_ratio: f64,
}

/// Complete results from one projection run: the two output tables plus
/// convenience accessors for the derived scalars consumers usually want.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// One row per projection month, in month order.
    pub monthly: Vec<MonthlyMetrics>,
    /// One row per cohort with paying users, in cohort order.
    pub cohorts: Vec<CohortMetrics>,
}

impl Projection {
    /// Number of projected months.
    #[must_use]
    pub fn months(&self) -> usize {
        self.monthly.len()
    }

    /// Mean LTV across cohorts; 0 when no cohort produced paying users.
    #[must_use]
    pub fn average_ltv(&self) -> f64 {
        mean(self.cohorts.iter().map(|c| c.ltv))
    }

    /// Mean CAC across cohorts; 0 when no cohort produced paying users.
    #[must_use]
    pub fn average_cac(&self) -> f64 {
        mean(self.cohorts.iter().map(|c| c.cac))
    }

    /// Mean LTV/CAC ratio across cohorts; 0 when no cohorts.
    #[must_use]
    pub fn average_ltv_cac(&self) -> f64 {
        mean(self.cohorts.iter().map(|c| c.ltv_cac_ratio))
    }

    /// Total cash injections required across the horizon.
    #[must_use]
    pub fn total_required_investment(&self) -> f64 {
        self.monthly.iter().map(|m| m.required_investment).sum()
    }

    /// Cumulative operating profit through the given month (zero-based),
    /// or `None` past the horizon.
    #[must_use]
    pub fn cumulative_profit_through(&self, month: usize) -> Option<f64> {
        self.monthly.get(month).map(|m| m.cumulative_profit)
    }

    /// Cumulative operating profit at the end of the horizon.
    #[must_use]
    pub fn final_cumulative_profit(&self) -> f64 {
        self.monthly.last().map_or(0.0, |m| m.cumulative_profit)
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 { 0.0 } else { sum / count as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_indexing_row_major() {
        let mut grid = CohortGrid::new(3);
        grid.add(0, 2, 5.0);
        grid.add(1, 1, 7.0);
        grid.add(1, 1, 3.0);

        assert_eq!(grid.get(0, 2), 5.0);
        assert_eq!(grid.get(1, 1), 10.0);
        assert_eq!(grid.get(2, 0), 0.0);
        assert_eq!(grid.row(0), &[0.0, 0.0, 5.0]);
        assert_eq!(grid.row(1), &[0.0, 10.0, 0.0]);
    }

    #[test]
    fn test_grid_sums() {
        let mut grid = CohortGrid::new(3);
        grid.add(0, 0, 1.0);
        grid.add(0, 1, 2.0);
        grid.add(1, 1, 4.0);
        grid.add(2, 2, 8.0);

        assert_eq!(grid.row_sum(0), 3.0);
        assert_eq!(grid.column_sum(1), 6.0);
        assert_eq!(grid.column_sum(2), 8.0);
    }

    #[test]
    fn test_grid_row_mut() {
        let mut grid = CohortGrid::new(2);
        grid.row_mut(1).copy_from_slice(&[1.5, 2.5]);
        assert_eq!(grid.get(1, 0), 1.5);
        assert_eq!(grid.get(1, 1), 2.5);
        assert_eq!(grid.row(0), &[0.0, 0.0]);
    }

    #[test]
    fn test_projection_scalar_helpers() {
        let projection = Projection {
            monthly: vec![],
            cohorts: vec![],
        };
        assert_eq!(projection.average_ltv(), 0.0);
        assert_eq!(projection.average_cac(), 0.0);
        assert_eq!(projection.average_ltv_cac(), 0.0);
        assert_eq!(projection.total_required_investment(), 0.0);
        assert_eq!(projection.final_cumulative_profit(), 0.0);
        assert!(projection.cumulative_profit_through(0).is_none());
    }
}
