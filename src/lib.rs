//! Welcome to the job core, a small library for describing job postings and
//! checking them against a handful of business rules.
//!
//! The main entry point is [Job]. Jobs can be made with [Job::new], which logs
//! (via `tracing`) any rule a job breaks but hands it back regardless, or with
//! [Job::create] / [Job::builder], which refuse invalid jobs outright. The
//! [ValidationPolicy] type lets a caller pick either behavior explicitly.
//!
//! ```
//! use job_core::{Hierarchy, Job, JobType, Position, Skill, ValidationError};
//!
//! let job = Job::builder()
//!     .name("electrician")
//!     .description("wires up buildings")
//!     .job_type(JobType::Contract)
//!     .skills(vec![Skill::new("conduit bending", 3)])
//!     .hierarchy(Hierarchy::new(Position::Employee))
//!     .salary(70000)
//!     .years_of_experience(6)
//!     .build()
//!     .unwrap();
//! assert!(job.is_valid());
//!
//! let green = Job::new("electrician", "wires up buildings", vec![], JobType::Contract, Hierarchy::default(), 70000, 1);
//! assert_eq!(green.validate(), Err(ValidationError::InsufficientContractExperience(1)));
//! ```

pub mod error;
mod util;
pub mod models;
pub mod policy;

pub use error::{Error, Result, ValidationError};
pub use models::{
    hierarchy::{Hierarchy, Position},
    job::{Job, JobBuilder, JobType},
    skill::Skill,
};
pub use policy::ValidationPolicy;
