//! CSV intake for candidate pools.
//!
//! Expected headers are `Name` and `Competencies`; competencies are `;`-separated. Labels are
//! kept as written apart from trimming, so `HTML` and `html` stay distinct skills.

mod parser;

use crate::workflows::hiring::Candidate;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum CandidateImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingName { line: u64 },
}

impl std::fmt::Display for CandidateImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CandidateImportError::Io(err) => write!(f, "failed to read candidate file: {}", err),
            CandidateImportError::Csv(err) => write!(f, "invalid candidate CSV data: {}", err),
            CandidateImportError::MissingName { line } => {
                write!(f, "candidate on line {} has no name", line)
            }
        }
    }
}

impl std::error::Error for CandidateImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CandidateImportError::Io(err) => Some(err),
            CandidateImportError::Csv(err) => Some(err),
            CandidateImportError::MissingName { .. } => None,
        }
    }
}

impl From<std::io::Error> for CandidateImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CandidateImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct CandidateImporter;

impl CandidateImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Candidate>, CandidateImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Parse candidates in file order. A row without a name rejects the whole import.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Candidate>, CandidateImportError> {
        parser::parse_records(reader)?
            .into_iter()
            .map(|record| match record.name {
                Some(name) => Ok(Candidate::new(name, record.competencies)),
                None => Err(CandidateImportError::MissingName { line: record.line }),
            })
            .collect()
    }
}
