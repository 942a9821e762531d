use std::fmt;

/// Errors detected while validating a parameter set.
///
/// Validation runs once, before any computation starts; a failed run
/// produces no partial tables.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Subscription tier population shares must sum to 1.0.
    TierDistribution { total: f64 },
    /// The projection horizon must cover at least one month.
    ZeroMonths,
    /// A numeric parameter was NaN or infinite.
    NonFinite { field: &'static str },
    /// A parameter that must be non-negative was negative.
    Negative { field: &'static str, value: f64 },
    /// A parameter used as a divisor must be strictly positive.
    NonPositive { field: &'static str, value: f64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::TierDistribution { total } => {
                write!(f, "tier distributions must sum to 1.0, got {total}")
            }
            ValidationError::ZeroMonths => {
                write!(f, "projection horizon must be at least one month")
            }
            ValidationError::NonFinite { field } => {
                write!(f, "parameter {field} must be a finite number")
            }
            ValidationError::Negative { field, value } => {
                write!(f, "parameter {field} must be non-negative, got {value}")
            }
            ValidationError::NonPositive { field, value } => {
                write!(f, "parameter {field} must be positive, got {value}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

pub type Result<T> = std::result::Result<T, ValidationError>;
