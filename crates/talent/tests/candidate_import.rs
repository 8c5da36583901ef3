use std::io::Write;

use talent::workflows::hiring::{competencies, Company, Headhunter, HiringProcess, MatchPolicy};
use talent::workflows::import::{CandidateImportError, CandidateImporter};

fn write_fixture(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("talent-{}-{name}", std::process::id()));
    let mut file = std::fs::File::create(&path).expect("fixture file can be created");
    file.write_all(contents.as_bytes())
        .expect("fixture file can be written");
    path
}

#[test]
fn imported_candidates_feed_the_hiring_workflow() {
    let path = write_fixture(
        "pool.csv",
        "Name,Competencies\nJohn Doe,JavaScript;HTML;CSS\nJane Smith,ruby; rubyonrails\n",
    );
    let candidates = CandidateImporter::from_path(&path).expect("fixture imports");
    std::fs::remove_file(&path).ok();

    let mut headhunter = Headhunter::new(MatchPolicy::AllSkills);
    headhunter.register_all(candidates);
    let mut company = Company::new("Acme");

    let employee = HiringProcess::new(&headhunter, &mut company)
        .execute("rails-developer", &competencies(["rubyonrails", "ruby"]))
        .expect("jane covers both ruby skills");

    assert_eq!(employee.name(), "Jane Smith");
    assert_eq!(company.employees(), vec!["Jane Smith"]);
}

#[test]
fn malformed_csv_is_reported() {
    let path = write_fixture("broken.csv", "Name,Competencies\nJohn Doe,html,unexpected\n");
    let result = CandidateImporter::from_path(&path);
    std::fs::remove_file(&path).ok();

    match result {
        Err(err @ CandidateImportError::Csv(_)) => {
            assert!(err.to_string().starts_with("invalid candidate CSV data"))
        }
        other => panic!("expected csv error, got {other:?}"),
    }
}
