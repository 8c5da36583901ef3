use std::rc::Rc;

use tracing::{debug, info};

use super::company::{Company, Employee};
use super::domain::Competency;
use super::headhunter::Headhunter;

/// One match → verify → hire transaction between a headhunter and a company.
///
/// The headhunter may use a permissive policy; the company's own `verify` keeps hiring sound.
pub struct HiringProcess<'a> {
    headhunter: &'a Headhunter,
    company: &'a mut Company,
}

impl<'a> HiringProcess<'a> {
    pub fn new(headhunter: &'a Headhunter, company: &'a mut Company) -> Self {
        Self {
            headhunter,
            company,
        }
    }

    /// Returns the new employee, or `None` when no candidate was found or verification failed.
    pub fn execute(&mut self, position: &str, required: &[Competency]) -> Option<Rc<Employee>> {
        let Some(candidate) = self.headhunter.find_match(required) else {
            debug!(position, "no hire: headhunter found no candidate");
            return None;
        };

        if !self.company.verify(&candidate, required) {
            info!(
                position,
                candidate = candidate.name(),
                policy = %self.headhunter.policy(),
                "no hire: candidate failed company verification"
            );
            return None;
        }

        Some(self.company.hire(&candidate, position))
    }
}
