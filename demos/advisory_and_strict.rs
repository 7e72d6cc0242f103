use job_core::{
    error::Result,
    Hierarchy, Job, JobType, Position, Skill, ValidationPolicy,
};

/// Build a small org chart for the job to sit in.
fn org_chart() -> Hierarchy {
    let mut manager = Hierarchy::new(Position::Manager);
    manager.add_subordinate(Hierarchy::new(Position::Employee));
    manager.add_subordinate(Hierarchy::new(Position::Employee));
    manager
}

fn example() -> Result<()> {
    let skills = vec![Skill::new("carpentry", 4), Skill::new("estimating", 2)];

    // advisory: the warning gets logged, but we still get our job back
    let apprentice = Job::new("carpenter", "frames houses", skills.clone(), JobType::Contract, org_chart(), 38000, 1);
    println!("advisory job: {} ({}), valid: {}", apprentice.name(), apprentice.job_type(), apprentice.is_valid());

    // strict: the same job is rejected
    match Job::create("carpenter", "frames houses", skills.clone(), JobType::Contract, org_chart(), 38000, 1) {
        Ok(_) => println!("strict job accepted?"),
        Err(e) => println!("strict job rejected: {}", e),
    }

    let lead = Job::builder()
        .name("lead carpenter")
        .description("runs the framing crew")
        .job_type(JobType::Contract)
        .skills(skills)
        .hierarchy(org_chart())
        .salary(72000)
        .years_of_experience(9)
        .build_with(ValidationPolicy::Strict)?;
    println!("lead job: {} managing {} people", lead.name(), lead.hierarchy().len() - 1);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt::init();
    if let Err(e) = example() {
        eprintln!("example failed: {}", e);
    }
}
