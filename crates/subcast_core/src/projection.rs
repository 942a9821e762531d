//! Top-level projection entry point.

use crate::acquisition::project_acquisition;
use crate::aggregate::aggregate;
use crate::cohort::build_cohort_grids;
use crate::config::Parameters;
use crate::error::Result;
use crate::model::Projection;

/// Run a full projection: validate, then acquisition → cohort grids →
/// aggregation.
///
/// A pure function of the parameter set — every run allocates fresh grids
/// and series, and an invalid parameter set fails here before any
/// computation starts.
pub fn project(params: &Parameters) -> Result<Projection> {
    params.validate()?;

    let acquisition = project_acquisition(params);
    let (revenue, trial_activity) = build_cohort_grids(params, &acquisition);
    let (monthly, cohorts) = aggregate(params, &acquisition, &revenue, &trial_activity);

    Ok(Projection { monthly, cohorts })
}
