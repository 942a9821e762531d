//! Metrics aggregation.
//!
//! Folds the cohort grids and the acquisition series into the two output
//! tables: company-wide monthly metrics and per-cohort LTV/CAC.

use crate::config::Parameters;
use crate::model::{AcquisitionSeries, CohortGrid, CohortMetrics, MonthlyMetrics};

/// Build both output tables from the run's intermediate results.
#[must_use]
pub fn aggregate(
    params: &Parameters,
    acquisition: &AcquisitionSeries,
    revenue: &CohortGrid,
    trial_activity: &CohortGrid,
) -> (Vec<MonthlyMetrics>, Vec<CohortMetrics>) {
    let monthly = monthly_metrics(params, acquisition, revenue, trial_activity);
    let cohorts = cohort_metrics(acquisition, revenue);
    (monthly, cohorts)
}

fn monthly_metrics(
    params: &Parameters,
    acquisition: &AcquisitionSeries,
    revenue: &CohortGrid,
    trial_activity: &CohortGrid,
) -> Vec<MonthlyMetrics> {
    let monthly_discount_rate = params.monthly_discount_rate();
    let development_cost = params.developer_salary * f64::from(params.developer_count);

    let mut rows = Vec::with_capacity(params.months);
    let mut cumulative_marketing = 0.0;
    let mut cumulative_profit = 0.0;
    // Rolling accumulator for required investment; reset to zero whenever a
    // shortfall is covered by an injection.
    let mut rolling_profit = 0.0;

    for month in 0..params.months {
        let in_operation = month >= params.development_period_months;
        let marketing_cost = acquisition.marketing_budgets[month];

        let gross_revenue = revenue.column_sum(month);
        let after_refunds = gross_revenue - gross_revenue * params.refund_rate;

        // Monthly-price approximation: the monthly tier dominates the
        // population, so revenue over monthly price tracks the active base.
        let active_paid_users = (gross_revenue / params.monthly_price) as u64;
        let active_trials = trial_activity.column_sum(month);

        let operational_cost = if in_operation {
            params.monthly_operational_cost
        } else {
            0.0
        };
        let maintenance_cost = if in_operation {
            params.per_user_maintenance_cost * (active_paid_users as f64 + active_trials)
        } else {
            0.0
        };
        let marketing_team_cost = if marketing_cost > 0.0 {
            let team_size = (marketing_cost / params.marketing_team_per_budget).ceil();
            team_size * params.marketing_team_salary
        } else {
            0.0
        };

        let total_cost = marketing_cost
            + development_cost
            + operational_cost
            + maintenance_cost
            + marketing_team_cost;

        let commission =
            after_refunds * params.store_commission_rate * params.store_payment_percentage;
        let net_revenue = after_refunds - commission;
        let net_profit = net_revenue - total_cost;

        // Ad-hoc EBITDA: only marketing and maintenance are added back.
        let ebitda = net_revenue - marketing_cost - maintenance_cost;
        let ebitda_margin = if net_revenue == 0.0 {
            0.0
        } else {
            ebitda / net_revenue * 100.0
        };

        let discount_factor = (1.0 + monthly_discount_rate).powi(month as i32).recip();

        cumulative_marketing += marketing_cost;
        cumulative_profit += net_profit;

        rolling_profit += net_profit;
        let required_investment = if rolling_profit < 0.0 {
            let shortfall = -rolling_profit;
            rolling_profit = 0.0;
            shortfall
        } else {
            0.0
        };

        rows.push(MonthlyMetrics {
            month,
            date: params.date_for_month(month),
            net_revenue,
            total_cost,
            marketing_cost,
            development_cost,
            marketing_team_cost,
            operational_cost,
            maintenance_cost,
            cumulative_marketing,
            net_profit,
            ebitda,
            ebitda_margin,
            inflation_adjusted_profit: net_profit * discount_factor,
            cumulative_profit,
            required_investment,
            active_paid_users,
            active_trials,
            new_paid_users: acquisition.new_paid_users[month],
            new_trials: acquisition.trials[month],
        });
    }

    rows
}

fn cohort_metrics(acquisition: &AcquisitionSeries, revenue: &CohortGrid) -> Vec<CohortMetrics> {
    let mut rows = Vec::new();

    for cohort in 0..revenue.months() {
        let users = acquisition.new_paid_users[cohort];
        if users == 0 {
            continue;
        }

        // Lifetime revenue is pre-refund, matching the cohort grid.
        let lifetime_revenue = revenue.row_sum(cohort);
        let ltv = lifetime_revenue / users as f64;
        let cac = acquisition.marketing_budgets[cohort] / users as f64;
        let ltv_cac_ratio = if cac > 0.0 { ltv / cac } else { 0.0 };

        rows.push(CohortMetrics {
            cohort,
            users,
            trials: acquisition.trials[cohort],
            ltv,
            cac,
            ltv_cac_ratio,
        });
    }

    rows
}
