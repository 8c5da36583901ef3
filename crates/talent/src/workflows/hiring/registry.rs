use std::rc::Rc;

use super::domain::{Candidate, Competency};

/// Insertion-ordered candidate pool. Duplicate names are allowed.
#[derive(Debug, Default)]
pub struct CandidateRegistry {
    candidates: Vec<Rc<Candidate>>,
}

impl CandidateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, candidate: Candidate) -> Rc<Candidate> {
        let candidate = Rc::new(candidate);
        self.candidates.push(Rc::clone(&candidate));
        candidate
    }

    /// Earliest registrant holding `competency`.
    pub fn find_first_by_competency(&self, competency: &Competency) -> Option<Rc<Candidate>> {
        self.candidates
            .iter()
            .find(|candidate| candidate.has_competency(competency))
            .cloned()
    }

    /// Earliest registrant covering every competency in `competencies`.
    ///
    /// An empty requirement is satisfied by anyone, so the first registrant wins.
    pub fn find_first_by_all_competencies(
        &self,
        competencies: &[Competency],
    ) -> Option<Rc<Candidate>> {
        self.candidates
            .iter()
            .find(|candidate| candidate.covers(competencies))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<Candidate>> {
        self.candidates.iter()
    }
}
