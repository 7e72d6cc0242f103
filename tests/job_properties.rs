//! Property tests for job validation and equality.

use job_core::{Hierarchy, Job, JobType, Position, Skill, ValidationError};
use proptest::prelude::*;

fn skill_strategy() -> impl Strategy<Value = Skill> {
    ("[a-z]{1,12}", 0u64..10).prop_map(|(name, level)| Skill::new(name, level))
}

fn job_type_strategy() -> impl Strategy<Value = JobType> {
    prop_oneof![
        Just(JobType::FullTime),
        Just(JobType::PartTime),
        Just(JobType::Contract),
    ]
}

fn position_strategy() -> impl Strategy<Value = Position> {
    prop_oneof![
        Just(Position::Employee),
        Just(Position::Manager),
        Just(Position::Executive),
        Just(Position::CEO),
    ]
}

proptest! {
    #[test]
    fn non_contract_jobs_with_text_are_valid(
        name in "[a-zA-Z ]{1,30}",
        description in ".{1,80}",
        job_type in prop_oneof![Just(JobType::FullTime), Just(JobType::PartTime)],
        skills in prop::collection::vec(skill_strategy(), 0..6),
        salary in 0i64..1_000_000,
        yoe in 0i64..60
    ) {
        let job = Job::create(name, description, skills, job_type, Hierarchy::default(), salary, yoe);
        prop_assert!(job.is_ok());
    }

    #[test]
    fn contract_jobs_need_five_years(
        yoe in 0i64..60,
        salary in 0i64..1_000_000
    ) {
        let job = Job::new("contractor", "short gig", vec![], JobType::Contract, Hierarchy::default(), salary, yoe);
        if yoe >= 5 {
            prop_assert_eq!(job.validate(), Ok(()));
        } else {
            prop_assert_eq!(job.validate(), Err(ValidationError::InsufficientContractExperience(yoe)));
        }
    }

    #[test]
    fn empty_name_is_reported_first(
        description in ".{0,40}",
        job_type in job_type_strategy(),
        salary in any::<i64>(),
        yoe in any::<i64>()
    ) {
        let job = Job::new(String::new(), description, vec![], job_type, Hierarchy::default(), salary, yoe);
        prop_assert_eq!(job.validate(), Err(ValidationError::EmptyName));
    }

    #[test]
    fn empty_description_is_reported_second(
        name in "[a-z]{1,20}",
        job_type in job_type_strategy(),
        salary in any::<i64>(),
        yoe in any::<i64>()
    ) {
        let job = Job::new(name, String::new(), vec![], job_type, Hierarchy::default(), salary, yoe);
        prop_assert_eq!(job.validate(), Err(ValidationError::EmptyDescription));
    }

    #[test]
    fn equality_ignores_type_placement_and_pay(
        skills in prop::collection::vec(skill_strategy(), 0..6),
        type1 in job_type_strategy(),
        type2 in job_type_strategy(),
        position in position_strategy(),
        salary1 in 0i64..1_000_000,
        salary2 in 0i64..1_000_000
    ) {
        let job1 = Job::new("tailor", "sews", skills.clone(), type1, Hierarchy::default(), salary1, 10);
        let job2 = Job::new("tailor", "sews", skills, type2, Hierarchy::new(position), salary2, 20);
        prop_assert_eq!(&job1, &job2);
        prop_assert_eq!(&job1.clone(), &job1);
    }

    #[test]
    fn equality_respects_skill_order(
        skills in prop::collection::vec(skill_strategy(), 2..6)
    ) {
        let mut reversed = skills.clone();
        reversed.reverse();
        prop_assume!(reversed != skills);
        let job1 = Job::new("tailor", "sews", skills, JobType::FullTime, Hierarchy::default(), 0, 0);
        let job2 = Job::new("tailor", "sews", reversed, JobType::FullTime, Hierarchy::default(), 0, 0);
        prop_assert_ne!(job1, job2);
    }
}
