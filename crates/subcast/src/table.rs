//! Plain-text table rendering for projection results.
//!
//! Money is scaled to $M and user counts to K here, at the presentation
//! boundary; the core tables stay in raw dollars and heads.

use subcast_core::Projection;

/// Format a currency value in compact form (e.g., $2.1M, $450K, $50)
pub fn format_compact_currency(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000.0 {
        format!("{}${:.1}M", sign, abs_value / 1_000_000.0)
    } else if abs_value >= 1_000.0 {
        format!("{}${:.0}K", sign, abs_value / 1_000.0)
    } else {
        format!("{}${:.0}", sign, abs_value)
    }
}

/// Format a ratio as a percentage with one decimal
pub fn format_percentage(value: f64) -> String {
    format!("{value:.1}%")
}

fn millions(value: f64) -> String {
    format!("{:.2}", value / 1e6)
}

fn thousands(value: f64) -> String {
    format!("{:.1}", value / 1e3)
}

/// Render the monthly metrics table.
pub fn render_monthly(projection: &Projection) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>7}  {:>10}  {:>10}  {:>10}  {:>10}  {:>8}  {:>10}  {:>10}  {:>10}  {:>10}\n",
        "Month",
        "NetRev $M",
        "Cost $M",
        "Profit $M",
        "EBITDA $M",
        "Margin",
        "CumP $M",
        "ReqInv $M",
        "Active K",
        "New K",
    ));

    for row in &projection.monthly {
        let label = match row.date {
            Some(date) => format!("{:>7}", format!("{}-{:02}", date.year(), date.month())),
            None => format!("{:>7}", row.month + 1),
        };
        out.push_str(&format!(
            "{}  {:>10}  {:>10}  {:>10}  {:>10}  {:>8}  {:>10}  {:>10}  {:>10}  {:>10}\n",
            label,
            millions(row.net_revenue),
            millions(row.total_cost),
            millions(row.net_profit),
            millions(row.ebitda),
            format_percentage(row.ebitda_margin),
            millions(row.cumulative_profit),
            millions(row.required_investment),
            thousands(row.active_paid_users as f64),
            thousands(row.new_paid_users as f64),
        ));
    }

    out
}

/// Render the cohort metrics table.
pub fn render_cohorts(projection: &Projection) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>6}  {:>10}  {:>10}  {:>10}  {:>10}  {:>8}\n",
        "Cohort", "Users", "Trials", "LTV", "CAC", "LTV/CAC",
    ));

    for row in &projection.cohorts {
        out.push_str(&format!(
            "{:>6}  {:>10}  {:>10}  {:>10}  {:>10}  {:>8}\n",
            row.cohort + 1,
            row.users,
            row.trials,
            format!("${:.2}", row.ltv),
            format!("${:.2}", row.cac),
            format!("{:.2}x", row.ltv_cac_ratio),
        ));
    }

    out
}

/// Render the derived summary scalars.
pub fn render_summary(projection: &Projection) -> String {
    let two_year = projection
        .cumulative_profit_through(23)
        .unwrap_or_else(|| projection.final_cumulative_profit());

    format!(
        "Average LTV:               {}\n\
         Average CAC:               {}\n\
         Average LTV/CAC:           {:.2}x\n\
         Total required investment: {}\n\
         Cumulative profit (2y):    {}\n\
         Cumulative profit (end):   {}\n",
        format_compact_currency(projection.average_ltv()),
        format_compact_currency(projection.average_cac()),
        projection.average_ltv_cac(),
        format_compact_currency(projection.total_required_investment()),
        format_compact_currency(two_year),
        format_compact_currency(projection.final_cumulative_profit()),
    )
}
