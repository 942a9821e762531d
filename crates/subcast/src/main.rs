use std::fs;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{WrapErr, eyre};
use tracing_subscriber::EnvFilter;

use subcast_core::{Parameters, project};

mod export;
mod table;

#[derive(Parser, Debug)]
#[command(name = "subcast")]
#[command(about = "Month-by-month financial projections for a subscription app")]
struct Args {
    /// YAML parameter file (built-in default scenario when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the projection horizon in months
    #[arg(short, long)]
    months: Option<usize>,

    /// Anchor month 0 to a calendar date (YYYY-MM-DD); affects seasonality
    /// and adds date labels to the monthly table
    #[arg(short, long)]
    start: Option<jiff::civil::Date>,

    /// Write the monthly table as CSV here (cohort table goes to a
    /// *_cohorts.csv sibling)
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Also print the per-cohort LTV/CAC table
    #[arg(long)]
    cohorts: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_parameters(args: &Args) -> color_eyre::Result<Parameters> {
    let mut params = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .wrap_err_with(|| format!("reading parameter file {}", path.display()))?;
            serde_saphyr::from_str(&text)
                .map_err(|err| eyre!("parsing {}: {err}", path.display()))?
        }
        None => Parameters::default(),
    };

    if let Some(months) = args.months {
        params.months = months;
    }
    if let Some(start) = args.start {
        params.start = Some(start);
    }

    Ok(params)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level);

    let params = load_parameters(&args)?;
    tracing::info!(months = params.months, "running projection");

    let projection = project(&params).wrap_err("invalid parameters")?;

    print!("{}", table::render_monthly(&projection));
    if args.cohorts {
        println!();
        print!("{}", table::render_cohorts(&projection));
    }
    println!();
    print!("{}", table::render_summary(&projection));

    if let Some(path) = &args.export {
        export::write_monthly_csv(path, &projection)
            .wrap_err_with(|| format!("writing {}", path.display()))?;
        let cohort_path = export::cohort_export_path(path);
        export::write_cohorts_csv(&cohort_path, &projection)
            .wrap_err_with(|| format!("writing {}", cohort_path.display()))?;
        tracing::info!(
            monthly = %path.display(),
            cohorts = %cohort_path.display(),
            "exported projection tables"
        );
    }

    Ok(())
}
