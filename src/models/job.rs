//! A job is a single posting: what the work is, what skills it takes, where it
//! sits in the organization, and what it pays.
//!
//! Jobs are checked against a small set of business rules when they're built
//! (see [Job::validate]). Whether a failed check stops construction or just
//! gets logged is up to the [ValidationPolicy] the caller picks. The plain
//! constructor ([Job::new]) and cloning are advisory, [Job::create] and the
//! builder are strict.
//!
//! The builder has no way to skip validation:
//!
//! ```compile_fail
//! use job_core::{Job, JobType};
//!
//! let job = Job::builder()
//!     .name("")
//!     .description("")
//!     .job_type(JobType::Contract)
//!     .build_unchecked();
//! ```
//!
//! [ValidationPolicy]: crate::policy::ValidationPolicy

use crate::{
    error::{Error, Result, ValidationError},
    models::{
        hierarchy::Hierarchy,
        skill::Skill,
    },
    policy::ValidationPolicy,
};
use std::convert::TryFrom;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Contract work needs at least this many years of experience.
pub const CONTRACT_MIN_YEARS: i64 = 5;

/// The kind of employment a job offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
}

impl Default for JobType {
    fn default() -> Self {
        JobType::FullTime
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JobType::FullTime => "FullTime",
            JobType::PartTime => "PartTime",
            JobType::Contract => "Contract",
        };
        f.write_str(name)
    }
}

impl TryFrom<u8> for JobType {
    type Error = ValidationError;

    fn try_from(val: u8) -> std::result::Result<Self, Self::Error> {
        Ok(match val {
            0 => JobType::FullTime,
            1 => JobType::PartTime,
            2 => JobType::Contract,
            _ => Err(ValidationError::InvalidType(val.to_string()))?,
        })
    }
}

impl FromStr for JobType {
    type Err = ValidationError;

    /// Accepts "fulltime", "Full-Time", "part_time", "CONTRACT" and the like.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();
        Ok(match normalized.as_str() {
            "fulltime" => JobType::FullTime,
            "parttime" => JobType::PartTime,
            "contract" => JobType::Contract,
            _ => Err(ValidationError::InvalidType(s.to_string()))?,
        })
    }
}

/// The job model.
///
/// Equality only looks at `name`, `description`, and `skills` (in order). Two
/// postings for the same work with different pay, type, or placement compare
/// equal.
#[derive(Debug, Default, getset::Getters, derive_builder::Builder)]
#[builder(pattern = "owned", setter(into), build_fn(private, name = "build_unchecked"))]
#[getset(get = "pub")]
pub struct Job {
    /// The job title
    name: String,
    /// Freeform description of the work
    description: String,
    /// Full time, part time, or contract
    job_type: JobType,
    /// Skills required for the job, in order of importance
    #[builder(default)]
    skills: Vec<Skill>,
    /// Where the job sits in the org chart
    #[builder(default)]
    hierarchy: Hierarchy,
    #[builder(default)]
    salary: i64,
    #[builder(default)]
    years_of_experience: i64,
}

impl Job {
    /// Create a job from all of its fields. Validation is advisory: a job that
    /// breaks the rules is logged and returned anyway.
    pub fn new<N: Into<String>, D: Into<String>>(name: N, description: D, skills: Vec<Skill>, job_type: JobType, hierarchy: Hierarchy, salary: i64, years_of_experience: i64) -> Self {
        let job = Self::from_parts(name, description, skills, job_type, hierarchy, salary, years_of_experience);
        job.advise();
        job
    }

    /// Create a job from all of its fields, rejecting it if it breaks any of
    /// the rules checked by [Job::validate].
    pub fn create<N: Into<String>, D: Into<String>>(name: N, description: D, skills: Vec<Skill>, job_type: JobType, hierarchy: Hierarchy, salary: i64, years_of_experience: i64) -> Result<Self> {
        let job = Self::from_parts(name, description, skills, job_type, hierarchy, salary, years_of_experience);
        ValidationPolicy::Strict.apply(job)
    }

    pub fn builder() -> JobBuilder {
        JobBuilder::default()
    }

    fn from_parts<N: Into<String>, D: Into<String>>(name: N, description: D, skills: Vec<Skill>, job_type: JobType, hierarchy: Hierarchy, salary: i64, years_of_experience: i64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            job_type,
            skills,
            hierarchy,
            salary,
            years_of_experience,
        }
    }

    /// Shorthand for `years_of_experience()`.
    pub fn yoe(&self) -> i64 {
        self.years_of_experience
    }

    /// Check this job against the business rules. Rules are checked in a fixed
    /// order and the first one that fails is returned.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.name.is_empty() {
            Err(ValidationError::EmptyName)?;
        }
        if self.description.is_empty() {
            Err(ValidationError::EmptyDescription)?;
        }
        if self.salary < 0 {
            Err(ValidationError::NegativeSalary(self.salary))?;
        }
        if self.years_of_experience < 0 {
            Err(ValidationError::NegativeExperience(self.years_of_experience))?;
        }
        // the job type can't hold anything outside its three variants, so the
        // "invalid type" rule is enforced when converting raw input into a
        // JobType (see its TryFrom/FromStr impls).
        if self.job_type == JobType::Contract && self.years_of_experience < CONTRACT_MIN_YEARS {
            Err(ValidationError::InsufficientContractExperience(self.years_of_experience))?;
        }
        Ok(())
    }

    /// Whether this job passes [Job::validate].
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Log the first rule this job breaks, if any.
    pub(crate) fn advise(&self) {
        if let Err(err) = self.validate() {
            tracing::warn!(job = self.name.as_str(), error = %err, "invalid job");
        }
    }
}

impl JobBuilder {
    /// Build the job, rejecting it if it fails validation.
    pub fn build(self) -> Result<Job> {
        self.build_with(ValidationPolicy::Strict)
    }

    /// Build the job, handling validation failures per `policy`.
    pub fn build_with(self, policy: ValidationPolicy) -> Result<Job> {
        let job = self.build_unchecked()
            .map_err(|e| Error::BuilderFailed(e))?;
        policy.apply(job)
    }
}

impl Clone for Job {
    /// Copies the job and re-checks the copy, logging (but not failing on) any
    /// rule it breaks.
    fn clone(&self) -> Self {
        let job = Self {
            name: self.name.clone(),
            description: self.description.clone(),
            job_type: self.job_type,
            skills: self.skills.clone(),
            hierarchy: self.hierarchy.clone(),
            salary: self.salary,
            years_of_experience: self.years_of_experience,
        };
        job.advise();
        job
    }
}

impl PartialEq for Job {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name &&
            self.description == other.description &&
            self.skills == other.skills
    }
}

impl Eq for Job {}

impl Hash for Job {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.description.hash(state);
        self.skills.hash(state);
    }
}
