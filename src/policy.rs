//! Decides what happens when a job fails validation while it's being
//! constructed.

use crate::{
    error::Result,
    models::job::Job,
};

/// How strictly to treat an invalid job at construction time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationPolicy {
    /// Log the violation at `warn` and hand the job back anyway.
    Advisory,
    /// Refuse to produce an invalid job.
    Strict,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        ValidationPolicy::Advisory
    }
}

impl ValidationPolicy {
    /// Validate `job`. Advisory logs the violation and returns the job anyway,
    /// strict returns the violation as an error.
    pub fn apply(&self, job: Job) -> Result<Job> {
        match self {
            ValidationPolicy::Advisory => job.advise(),
            ValidationPolicy::Strict => job.validate()?,
        }
        Ok(job)
    }
}
