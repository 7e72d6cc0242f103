//! A skill is a named competency a job asks for, along with how good at it
//! someone needs to be.

/// A required skill. Read-only once built.
#[derive(Clone, Debug, PartialEq, Eq, Hash, getset::Getters)]
#[getset(get = "pub")]
pub struct Skill {
    /// The skill's name, ie "welding"
    name: String,
    /// Proficiency level. Higher is better, the scale is up to the caller.
    level: u64,
}

impl Skill {
    pub fn new<T: Into<String>>(name: T, level: u64) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}
