use std::cell::RefCell;
use std::rc::Rc;

use crate::workflows::hiring::{
    competencies, Candidate, Company, Competency, Headhunter, HiringEvent, MatchPolicy, Notifier,
};

pub(super) fn skills(labels: &[&str]) -> Vec<Competency> {
    competencies(labels.iter().copied())
}

pub(super) fn john_doe() -> Candidate {
    Candidate::new("John Doe", ["javascript", "html", "css"])
}

pub(super) fn jane_smith() -> Candidate {
    Candidate::new("Jane Smith", ["ruby", "rubyonrails"])
}

pub(super) fn headhunter(policy: MatchPolicy) -> Headhunter {
    let mut headhunter = Headhunter::new(policy);
    headhunter.register_all([john_doe(), jane_smith()]);
    headhunter
}

pub(super) fn best_brothers() -> Company {
    Company::founded(
        "The Best Brothers",
        [
            ("Robert Dringer", "CEO"),
            ("Frank Dringer", "CFO"),
            ("Mark Twain", "Head software writer"),
        ],
    )
}

/// Records the `kind()` of every event published on a notifier.
pub(super) fn record_kinds<E>(notifier: &Notifier<E>) -> Rc<RefCell<Vec<&'static str>>>
where
    E: HiringEvent + 'static,
{
    let kinds = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&kinds);
    notifier.subscribe(move |event: &E| sink.borrow_mut().push(event.kind()));
    kinds
}
