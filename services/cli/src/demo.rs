use clap::Args;
use std::cell::RefCell;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::rc::Rc;
use talent::config::AppConfig;
use talent::error::AppError;
use talent::workflows::hiring::{
    competencies, Candidate, CandidateRegistry, Company, CompanyEvent, Competency, EmployeeEvent,
    EventJournal, Headhunter, HeadhunterEvent, HiringProcess, MatchPolicy,
};
use talent::workflows::import::CandidateImporter;
use tracing::info;

const DEMO_POSITION: &str = "web-designer";
const DEMO_REQUIREMENTS: [&str; 2] = ["html", "css"];
const DEMO_FOUNDERS: [(&str, &str); 3] = [
    ("Robert Dringer", "CEO"),
    ("Frank Dringer", "CFO"),
    ("Mark Twain", "Head software writer"),
];

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Matching policy (first-skill or all-skills). Defaults to HIRING_MATCH_POLICY.
    #[arg(long)]
    pub(crate) policy: Option<MatchPolicy>,
    /// Print the recorded event journal as JSON once the round finishes.
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct HireArgs {
    /// Position to fill
    #[arg(long)]
    pub(crate) position: String,
    /// Required competencies, comma separated (e.g. html,css)
    #[arg(long, value_delimiter = ',')]
    pub(crate) require: Vec<String>,
    /// CSV file with `Name` and `Competencies` columns; defaults to the built-in pool
    #[arg(long)]
    pub(crate) candidates: Option<PathBuf>,
    /// Matching policy (first-skill or all-skills). Defaults to HIRING_MATCH_POLICY.
    #[arg(long)]
    pub(crate) policy: Option<MatchPolicy>,
    /// Print the recorded event journal as JSON once the round finishes.
    #[arg(long)]
    pub(crate) json: bool,
}

struct Round<'a> {
    policy: MatchPolicy,
    candidates: Vec<Candidate>,
    position: &'a str,
    required: &'a [Competency],
    json: bool,
}

pub(crate) fn run_demo(config: &AppConfig, args: DemoArgs) -> Result<(), AppError> {
    let required = competencies(DEMO_REQUIREMENTS);
    let candidates = default_candidates();

    let mut preview = CandidateRegistry::new();
    for candidate in candidates.iter().cloned() {
        preview.register(candidate);
    }
    if !args.json {
        match preview.find_first_by_all_competencies(&required) {
            Some(candidate) => println!("Match: {}", describe(&candidate)),
            None => println!("Match: none"),
        }
    }

    let company = Company::founded(config.hiring.company_name.as_str(), DEMO_FOUNDERS);
    run_round(
        company,
        Round {
            policy: args.policy.unwrap_or(config.hiring.match_policy),
            candidates,
            position: DEMO_POSITION,
            required: &required,
            json: args.json,
        },
    )
}

pub(crate) fn run_hire(config: &AppConfig, args: HireArgs) -> Result<(), AppError> {
    let candidates = match &args.candidates {
        Some(path) => CandidateImporter::from_path(path)?,
        None => default_candidates(),
    };
    let required = competencies(
        args.require
            .iter()
            .map(|label| label.trim())
            .filter(|label| !label.is_empty()),
    );

    let company = Company::founded(config.hiring.company_name.as_str(), DEMO_FOUNDERS);
    run_round(
        company,
        Round {
            policy: args.policy.unwrap_or(config.hiring.match_policy),
            candidates,
            position: &args.position,
            required: &required,
            json: args.json,
        },
    )
}

fn run_round(company: Company, round: Round<'_>) -> Result<(), AppError> {
    print!("{}", play_round(company, round)?);
    Ok(())
}

/// Run one hiring round and return what belongs on stdout: the console transcript, or only the
/// journal JSON when `--json` is set.
fn play_round(mut company: Company, round: Round<'_>) -> Result<String, AppError> {
    let mut headhunter = Headhunter::new(round.policy);
    let journal = EventJournal::new();
    journal.attach("headhunter", headhunter.notifier());
    journal.attach("company", company.notifier());
    attach_employee_journal(&company, &journal);

    let transcript = Rc::new(RefCell::new(String::new()));
    if !round.json {
        attach_console(&headhunter, &company, &transcript);
    }

    headhunter.register_all(round.candidates);

    info!(
        policy = %round.policy,
        position = round.position,
        candidates = headhunter.candidates().len(),
        "starting hiring round"
    );

    let outcome =
        HiringProcess::new(&headhunter, &mut company).execute(round.position, round.required);

    if round.json {
        return Ok(format!("{}\n", journal.to_json()?));
    }

    let mut out = transcript.borrow_mut();
    match outcome {
        Some(employee) => line(
            &mut out,
            format_args!(
                "Congratulations {} the {} !",
                employee.name(),
                employee.position()
            ),
        ),
        None => line(&mut out, format_args!("Sorry..")),
    }
    line(
        &mut out,
        format_args!("Current list of employees: {}", company.employees().join(", ")),
    );
    Ok(std::mem::take(&mut *out))
}

fn attach_employee_journal(company: &Company, journal: &Rc<EventJournal>) {
    let journal = Rc::clone(journal);
    company.subscribe(move |event: &CompanyEvent| {
        if let CompanyEvent::EmployeeHired { employee } = event {
            journal.attach(format!("employee:{}", employee.name()), employee.notifier());
        }
    });
}

fn attach_console(headhunter: &Headhunter, company: &Company, transcript: &Rc<RefCell<String>>) {
    let out = Rc::clone(transcript);
    headhunter.subscribe(move |event: &HeadhunterEvent| {
        let mut out = out.borrow_mut();
        match event {
            HeadhunterEvent::CandidateRegistered { candidate } => line(
                &mut out,
                format_args!("Candidate registered {}", describe(candidate)),
            ),
            HeadhunterEvent::CandidateMatched {
                candidate,
                required,
            } => line(
                &mut out,
                format_args!(
                    "Candidate matched {} for [{}]",
                    describe(candidate),
                    join(required)
                ),
            ),
            HeadhunterEvent::CandidateNotFound { required } => line(
                &mut out,
                format_args!("Candidate not found for [{}]", join(required)),
            ),
        };
    });

    let out = Rc::clone(transcript);
    company.subscribe(move |event: &CompanyEvent| {
        if let CompanyEvent::EmployeeHired { employee } = event {
            line(
                &mut out.borrow_mut(),
                format_args!("Company hired {} ({})", employee.name(), employee.position()),
            );

            let out = Rc::clone(&out);
            let name = employee.name().to_string();
            employee.subscribe(move |event: &EmployeeEvent| {
                let mut out = out.borrow_mut();
                match event {
                    EmployeeEvent::HiredBy { company } => {
                        line(&mut out, format_args!("{name} was hired by {company}"))
                    }
                    EmployeeEvent::TerminatedBy { company } => {
                        line(&mut out, format_args!("{name} was let go by {company}"))
                    }
                };
            });
        }
    });
}

fn line(out: &mut String, args: std::fmt::Arguments<'_>) {
    // Writing into a String cannot fail.
    let _ = out.write_fmt(args);
    out.push('\n');
}

fn default_candidates() -> Vec<Candidate> {
    vec![
        Candidate::new("John Doe", ["javascript", "html", "css"]),
        Candidate::new("Jane Smith", ["ruby", "rubyonrails"]),
    ]
}

fn describe(candidate: &Candidate) -> String {
    format!("{} [{}]", candidate.name(), join(candidate.competencies()))
}

fn join(competencies: &[Competency]) -> String {
    competencies
        .iter()
        .map(Competency::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
