//! Candidate matching and hiring with synchronous, per-publisher notifications.
//!
//! A [`Headhunter`] finds a plausible candidate under its [`MatchPolicy`], a [`Company`]
//! re-verifies full competency coverage, and [`HiringProcess`] ties the two together.

pub mod company;
pub mod domain;
pub mod events;
pub mod headhunter;
mod journal;
pub mod notify;
mod process;
pub mod registry;

#[cfg(test)]
mod tests;

pub use company::{Company, CompanyError, CompanyEvent, Employee, EmployeeEvent, EmployeeView};
pub use domain::{competencies, Candidate, CompanyName, Competency, EmploymentStatus};
pub use events::HiringEvent;
pub use headhunter::{Headhunter, HeadhunterEvent, MatchPolicy, UnknownMatchPolicy};
pub use journal::{EventJournal, JournalEntry};
pub use notify::{Notifier, SubscriptionId};
pub use process::HiringProcess;
pub use registry::CandidateRegistry;
