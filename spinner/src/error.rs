use std::fmt;

use validator::ValidationErrors;

/// Initialization failures. Runtime operation never errors: commands issued
/// in an incompatible state are absorbed as no-ops instead.
#[derive(Debug)]
pub enum SpinnerError {
    InvalidConfig(ValidationErrors),
    /// Every weight floored to zero copies, leaving nothing to draw.
    EmptyRewardPool,
}

impl fmt::Display for SpinnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpinnerError::InvalidConfig(errors) => {
                write!(f, "invalid configuration: {}", errors)
            }
            SpinnerError::EmptyRewardPool => write!(f, "reward pool came out empty"),
        }
    }
}

impl std::error::Error for SpinnerError {}

impl From<ValidationErrors> for SpinnerError {
    fn from(errors: ValidationErrors) -> Self {
        SpinnerError::InvalidConfig(errors)
    }
}
