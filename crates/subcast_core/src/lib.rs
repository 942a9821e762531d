//! Subscription-app financial projection library
//!
//! This crate computes month-by-month financial projections for a
//! subscription-app business from a single immutable parameter set:
//! - Acquisition: marketing spend, installs, trials and paid conversions
//!   under budget growth, seasonality and market saturation
//! - Cohort revenue: per-cohort retention decay across three subscription
//!   tiers, producing revenue and trial-activity grids
//! - Aggregation: monthly revenue/cost/profit/EBITDA/required-investment
//!   metrics and per-cohort LTV vs. CAC
//!
//! # Builder DSL
//!
//! Use the fluent builder for ergonomic setup:
//!
//! ```ignore
//! use subcast_core::{ParametersBuilder, project};
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
//!     .development_period_months(3)
//!     .build()?;
//!
//! let projection = project(&params)?;
//! println!("total investment: {}", projection.total_required_investment());
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod acquisition;
pub mod aggregate;
pub mod cohort;
pub mod error;
pub mod projection;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{Parameters, ParametersBuilder};
pub use error::ValidationError;
pub use model::{CohortMetrics, MonthlyMetrics, Projection};
pub use projection::project;
