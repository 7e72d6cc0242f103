//! The job data model. A `Job` carries its required `Skill`s and the
//! `Hierarchy` it sits in.

pub mod hierarchy;
pub mod job;
pub mod skill;
