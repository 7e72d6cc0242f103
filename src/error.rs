//! Errors for the job core. Validation failures get their own type so callers
//! that only care about business rules can match on them directly.

use thiserror::Error;

/// A business rule on a `Job` was violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("job name cannot be empty")]
    EmptyName,
    #[error("job description cannot be empty")]
    EmptyDescription,
    #[error("salary cannot be negative (got {0})")]
    NegativeSalary(i64),
    #[error("years of experience cannot be negative (got {0})")]
    NegativeExperience(i64),
    #[error("invalid job type: {0}")]
    InvalidType(String),
    #[error("contract job requires at least 5 years of experience (got {0})")]
    InsufficientContractExperience(i64),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("job failed validation: {0}")]
    Validation(#[from] ValidationError),
    #[error("error building object {0}")]
    BuilderFailed(String),
}

pub type Result<T> = std::result::Result<T, Error>;
