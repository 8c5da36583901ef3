use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use super::domain::{Candidate, Competency};
use super::events::HiringEvent;
use super::notify::{Notifier, SubscriptionId};
use super::registry::CandidateRegistry;

/// Rule a headhunter applies when picking a candidate for a set of required competencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchPolicy {
    /// Looks only at the first required competency and ignores the rest.
    #[default]
    FirstSkill,
    /// Requires the candidate to hold every required competency.
    AllSkills,
}

impl MatchPolicy {
    pub const fn label(self) -> &'static str {
        match self {
            MatchPolicy::FirstSkill => "first-skill",
            MatchPolicy::AllSkills => "all-skills",
        }
    }

    fn select(self, registry: &CandidateRegistry, required: &[Competency]) -> Option<Rc<Candidate>> {
        match self {
            MatchPolicy::FirstSkill => required
                .first()
                .and_then(|competency| registry.find_first_by_competency(competency)),
            MatchPolicy::AllSkills => registry.find_first_by_all_competencies(required),
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown match policy '{0}' (expected 'first-skill' or 'all-skills')")]
pub struct UnknownMatchPolicy(pub String);

impl FromStr for MatchPolicy {
    type Err = UnknownMatchPolicy;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "first-skill" | "first_skill" | "first" => Ok(Self::FirstSkill),
            "all-skills" | "all_skills" | "all" | "perfect" => Ok(Self::AllSkills),
            _ => Err(UnknownMatchPolicy(value.to_string())),
        }
    }
}

/// Notifications published by a [`Headhunter`].
#[derive(Debug, Clone, PartialEq)]
pub enum HeadhunterEvent {
    CandidateRegistered {
        candidate: Rc<Candidate>,
    },
    CandidateMatched {
        candidate: Rc<Candidate>,
        required: Vec<Competency>,
    },
    CandidateNotFound {
        required: Vec<Competency>,
    },
}

impl HiringEvent for HeadhunterEvent {
    fn kind(&self) -> &'static str {
        match self {
            HeadhunterEvent::CandidateRegistered { .. } => "candidate-registered",
            HeadhunterEvent::CandidateMatched { .. } => "candidate-matched",
            HeadhunterEvent::CandidateNotFound { .. } => "candidate-not-found",
        }
    }

    fn payload(&self) -> Value {
        match self {
            HeadhunterEvent::CandidateRegistered { candidate } => json!({
                "candidate": candidate.as_ref(),
            }),
            HeadhunterEvent::CandidateMatched {
                candidate,
                required,
            } => json!({
                "candidate": candidate.as_ref(),
                "required": required,
            }),
            HeadhunterEvent::CandidateNotFound { required } => json!({
                "required": required,
            }),
        }
    }
}

/// Candidate pool plus a matching policy, announcing every registration and match attempt.
#[derive(Debug)]
pub struct Headhunter {
    policy: MatchPolicy,
    candidates: CandidateRegistry,
    events: Notifier<HeadhunterEvent>,
}

impl Headhunter {
    pub fn new(policy: MatchPolicy) -> Self {
        Self {
            policy,
            candidates: CandidateRegistry::new(),
            events: Notifier::new(),
        }
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    pub fn candidates(&self) -> &CandidateRegistry {
        &self.candidates
    }

    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&HeadhunterEvent) + 'static,
    {
        self.events.subscribe(handler)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    pub fn notifier(&self) -> &Notifier<HeadhunterEvent> {
        &self.events
    }

    pub fn register(&mut self, candidate: Candidate) -> Rc<Candidate> {
        let candidate = self.candidates.register(candidate);
        debug!(candidate = candidate.name(), "candidate registered");
        self.events.publish(&HeadhunterEvent::CandidateRegistered {
            candidate: Rc::clone(&candidate),
        });
        candidate
    }

    pub fn register_all<I>(&mut self, candidates: I) -> Vec<Rc<Candidate>>
    where
        I: IntoIterator<Item = Candidate>,
    {
        candidates
            .into_iter()
            .map(|candidate| self.register(candidate))
            .collect()
    }

    /// Select a candidate under the configured policy and announce the result.
    ///
    /// Exactly one of `CandidateMatched` or `CandidateNotFound` is published per call.
    pub fn find_match(&self, required: &[Competency]) -> Option<Rc<Candidate>> {
        let candidate = self.policy.select(&self.candidates, required);

        let event = match &candidate {
            Some(candidate) => {
                debug!(
                    policy = %self.policy,
                    candidate = candidate.name(),
                    "candidate matched"
                );
                HeadhunterEvent::CandidateMatched {
                    candidate: Rc::clone(candidate),
                    required: required.to_vec(),
                }
            }
            None => {
                debug!(policy = %self.policy, ?required, "no candidate matched");
                HeadhunterEvent::CandidateNotFound {
                    required: required.to_vec(),
                }
            }
        };
        self.events.publish(&event);

        candidate
    }
}

impl Default for Headhunter {
    fn default() -> Self {
        Self::new(MatchPolicy::default())
    }
}
