use super::common::*;
use crate::workflows::hiring::{
    Candidate, EventJournal, Headhunter, HiringProcess, MatchPolicy,
};

#[test]
fn hires_the_first_candidate_covering_all_requirements() {
    for policy in [MatchPolicy::FirstSkill, MatchPolicy::AllSkills] {
        let headhunter = headhunter(policy);
        let mut company = best_brothers();

        let employee = HiringProcess::new(&headhunter, &mut company)
            .execute("web-designer", &skills(&["html", "css"]))
            .expect("john is hired");

        assert_eq!(employee.name(), "John Doe");
        assert_eq!(employee.position(), "web-designer");
        assert_eq!(company.employees().len(), 4);
        assert_eq!(company.employees()[3], "John Doe");
    }
}

#[test]
fn no_hire_when_nobody_covers_the_requirements() {
    let headhunter = headhunter(MatchPolicy::AllSkills);
    let mut company = best_brothers();
    let journal = EventJournal::new();
    journal.attach("headhunter", headhunter.notifier());
    journal.attach("company", company.notifier());

    let outcome = HiringProcess::new(&headhunter, &mut company)
        .execute("backend", &skills(&["ruby", "python"]));

    assert!(outcome.is_none());
    assert_eq!(company.employees().len(), 3);
    assert_eq!(journal.kinds(), vec!["candidate-not-found"]);
}

#[test]
fn verification_rejects_permissive_matches() {
    let headhunter = headhunter(MatchPolicy::FirstSkill);
    let mut company = best_brothers();
    let journal = EventJournal::new();
    journal.attach("headhunter", headhunter.notifier());
    journal.attach("company", company.notifier());

    // Jane holds ruby, so the first-skill policy matches her, but she lacks python.
    let outcome = HiringProcess::new(&headhunter, &mut company)
        .execute("backend", &skills(&["ruby", "python"]));

    assert!(outcome.is_none());
    assert_eq!(company.employees().len(), 3);
    assert_eq!(journal.kinds(), vec!["candidate-matched"]);
}

#[test]
fn first_skill_policy_with_a_single_requirement_skips_non_holders() {
    let mut headhunter = Headhunter::new(MatchPolicy::FirstSkill);
    headhunter.register(Candidate::new("Scripter", ["javascript"]));
    headhunter.register(Candidate::new("Designer", ["css", "html"]));
    let mut company = best_brothers();

    let employee = HiringProcess::new(&headhunter, &mut company)
        .execute("web-designer", &skills(&["html"]))
        .expect("designer holds html as a non-leading competency");

    assert_eq!(employee.name(), "Designer");
}

#[test]
fn empty_requirements_differ_by_policy() {
    let strict = headhunter(MatchPolicy::AllSkills);
    let mut company = best_brothers();
    let hired = HiringProcess::new(&strict, &mut company)
        .execute("generalist", &[])
        .expect("first registrant satisfies an empty requirement");
    assert_eq!(hired.name(), "John Doe");

    let permissive = headhunter(MatchPolicy::FirstSkill);
    assert!(HiringProcess::new(&permissive, &mut company)
        .execute("generalist", &[])
        .is_none());
}

#[test]
fn successful_hire_publishes_the_full_sequence() {
    let headhunter = headhunter(MatchPolicy::AllSkills);
    let mut company = best_brothers();
    let journal = EventJournal::new();
    journal.attach("headhunter", headhunter.notifier());
    journal.attach("company", company.notifier());

    let employee = HiringProcess::new(&headhunter, &mut company)
        .execute("web-designer", &skills(&["html", "css"]))
        .expect("john is hired");
    journal.attach("employee", employee.notifier());
    company.terminate(&employee).expect("john is on the roster");

    assert_eq!(
        journal.kinds(),
        vec![
            "candidate-matched",
            "employee-hired",
            "employee-terminated",
            "terminated-by",
        ]
    );
    let entries = journal.entries();
    assert_eq!(entries[0].source, "headhunter");
    assert_eq!(entries[0].payload["candidate"]["name"], "John Doe");
    assert!(entries.windows(2).all(|pair| pair[0].occurred_at <= pair[1].occurred_at));
    assert!(journal.to_json().expect("journal serializes").contains("terminated-by"));
}
