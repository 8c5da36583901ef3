use std::fmt;

use serde::{Deserialize, Serialize};

/// Skill label carried by candidates and requested by open positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Competency(pub String);

impl Competency {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Competency {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Competency {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Competency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds an owned competency list from string labels.
pub fn competencies<I, S>(labels: I) -> Vec<Competency>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    labels.into_iter().map(Competency::new).collect()
}

/// Immutable snapshot of a job seeker and the skills they bring.
///
/// Competencies keep the order they were declared in and are not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    name: String,
    competencies: Vec<Competency>,
}

impl Candidate {
    pub fn new<I, C>(name: impl Into<String>, competencies: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Competency>,
    {
        Self {
            name: name.into(),
            competencies: competencies.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn competencies(&self) -> &[Competency] {
        &self.competencies
    }

    pub fn has_competency(&self, competency: &Competency) -> bool {
        self.competencies.contains(competency)
    }

    /// True when every required competency is present. Vacuously true for an empty requirement.
    pub fn covers(&self, required: &[Competency]) -> bool {
        required
            .iter()
            .all(|competency| self.has_competency(competency))
    }
}

/// Employment lifecycle of a roster entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Hired,
    Terminated,
}

impl EmploymentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            EmploymentStatus::Hired => "hired",
            EmploymentStatus::Terminated => "terminated",
        }
    }
}

/// Name under which a company signs its employees' hire and termination notices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyName(pub String);

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
