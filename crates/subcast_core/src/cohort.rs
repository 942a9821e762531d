//! Cohort revenue engine.
//!
//! For each acquisition cohort this fills one row of the revenue grid and
//! one row of the trial-activity grid. Rows are independent once the
//! acquisition series is known, so with the `parallel` feature they are
//! computed on the rayon pool; the serial fallback produces identical
//! output.

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::config::Parameters;
use crate::model::{AcquisitionSeries, CohortGrid};

/// Build the revenue and trial-activity grids for every cohort.
#[must_use]
pub fn build_cohort_grids(
    params: &Parameters,
    acquisition: &AcquisitionSeries,
) -> (CohortGrid, CohortGrid) {
    let mut revenue = CohortGrid::new(params.months);
    let mut trial_activity = CohortGrid::new(params.months);

    for row in cohort_rows(params, acquisition) {
        revenue.row_mut(row.cohort).copy_from_slice(&row.revenue);
        trial_activity
            .row_mut(row.cohort)
            .copy_from_slice(&row.trial_activity);
    }

    (revenue, trial_activity)
}

struct CohortRow {
    cohort: usize,
    revenue: Vec<f64>,
    trial_activity: Vec<f64>,
}

#[cfg(feature = "parallel")]
fn cohort_rows(params: &Parameters, acquisition: &AcquisitionSeries) -> Vec<CohortRow> {
    (0..params.months)
        .into_par_iter()
        .filter_map(|cohort| cohort_row(params, acquisition, cohort))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn cohort_rows(params: &Parameters, acquisition: &AcquisitionSeries) -> Vec<CohortRow> {
    (0..params.months)
        .filter_map(|cohort| cohort_row(params, acquisition, cohort))
        .collect()
}

/// Compute one cohort's revenue and trial-activity rows.
///
/// Returns `None` for cohorts with no trials and no paid users — their rows
/// stay all-zero in the grids.
fn cohort_row(
    params: &Parameters,
    acquisition: &AcquisitionSeries,
    cohort: usize,
) -> Option<CohortRow> {
    let trial_users = acquisition.trials[cohort];
    let paid_users = acquisition.new_paid_users[cohort];
    if trial_users == 0 && paid_users == 0 {
        return None;
    }

    let months = params.months;
    let trial_months = params.trial_months();
    let retention = params.retention_rate();

    let mut revenue = vec![0.0; months];
    let mut trial_activity = vec![0.0; months];

    for tier in params.tiers() {
        // Floor split: fractional users are dropped, not redistributed, so
        // tier totals can slightly undercount the cohort.
        let tier_trials = (trial_users as f64 * tier.distribution) as u64;
        let tier_paid = (paid_users as f64 * tier.distribution) as u64;

        if tier_trials > 0 {
            // Trials run from the acquisition month through the end of the
            // trial period, clipped to the horizon.
            let last_trial_month = (cohort + trial_months).min(months - 1);
            for m in cohort..=last_trial_month {
                trial_activity[m] += tier_trials as f64;
            }
        }

        if tier_paid > 0 {
            // Conversion lands when the trial period ends; from there the
            // subscriber count decays geometrically. Fractional actives are
            // fine here, unlike installs and trials.
            let start = cohort + trial_months;
            for m in start..months {
                let active = tier_paid as f64 * retention.powi((m - start) as i32);
                revenue[m] += active * tier.price;
            }
        }
    }

    Some(CohortRow {
        cohort,
        revenue,
        trial_activity,
    })
}
