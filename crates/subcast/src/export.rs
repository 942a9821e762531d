//! CSV export of projection tables.
//!
//! Writes the monthly metrics table to the given path and the cohort table
//! to a `*_cohorts.csv` sibling, with the same $M / K scaling the rendered
//! tables use. Export files are transient artifacts; nothing else is
//! persisted.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use subcast_core::Projection;

const MONTHLY_HEADER: &str = "Month,Net Revenue ($M),Total Cost ($M),Marketing Spend ($M),\
Development Cost ($M),Marketing Team Cost ($M),Operational Cost ($M),Maintenance Cost ($M),\
Cumulative Marketing ($M),Net Profit ($M),EBITDA ($M),EBITDA Margin (%),\
Inflation Adjusted Profit ($M),Cumulative Profit ($M),Required Investment ($M),\
Active Users (K),Active Trials (K),New Users (K),New Trials (K)";

const COHORT_HEADER: &str = "Cohort,Users,Trials,LTV,CAC,LTV/CAC Ratio";

/// Path for the cohort table next to the monthly table.
pub fn cohort_export_path(path: &Path) -> PathBuf {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("export");
    path.with_file_name(format!("{stem}_cohorts.csv"))
}

/// Write the monthly metrics table as CSV.
pub fn write_monthly_csv(path: &Path, projection: &Projection) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "{MONTHLY_HEADER}")?;

    for row in &projection.monthly {
        writeln!(
            out,
            "{},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.1},{:.4},{:.4},{:.4},{:.3},{:.3},{:.3},{:.3}",
            row.month + 1,
            row.net_revenue / 1e6,
            row.total_cost / 1e6,
            row.marketing_cost / 1e6,
            row.development_cost / 1e6,
            row.marketing_team_cost / 1e6,
            row.operational_cost / 1e6,
            row.maintenance_cost / 1e6,
            row.cumulative_marketing / 1e6,
            row.net_profit / 1e6,
            row.ebitda / 1e6,
            row.ebitda_margin,
            row.inflation_adjusted_profit / 1e6,
            row.cumulative_profit / 1e6,
            row.required_investment / 1e6,
            row.active_paid_users as f64 / 1e3,
            row.active_trials / 1e3,
            row.new_paid_users as f64 / 1e3,
            row.new_trials as f64 / 1e3,
        )?;
    }

    out.flush()
}

/// Write the cohort metrics table as CSV.
pub fn write_cohorts_csv(path: &Path, projection: &Projection) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "{COHORT_HEADER}")?;

    for row in &projection.cohorts {
        writeln!(
            out,
            "{},{},{},{:.2},{:.2},{:.2}",
            row.cohort + 1,
            row.users,
            row.trials,
            row.ltv,
            row.cac,
            row.ltv_cac_ratio,
        )?;
    }

    out.flush()
}
