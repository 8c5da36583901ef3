use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct CandidateRecord {
    /// 1-based line in the source file where the record starts.
    pub(crate) line: u64,
    pub(crate) name: Option<String>,
    pub(crate) competencies: Vec<String>,
}

/// Parse rows as written: fields are trimmed, blank competency tokens dropped, nothing else.
pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<CandidateRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut records = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let row: CandidateRow = record.deserialize(Some(&headers))?;
        records.push(CandidateRecord {
            line: record.position().map(|position| position.line()).unwrap_or(0),
            competencies: row.competency_labels(),
            name: row.name,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct CandidateRow {
    #[serde(rename = "Name", default, deserialize_with = "empty_string_as_none")]
    name: Option<String>,
    #[serde(
        rename = "Competencies",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    competencies: Option<String>,
}

impl CandidateRow {
    fn competency_labels(&self) -> Vec<String> {
        self.competencies
            .as_deref()
            .map(|raw| {
                raw.split(';')
                    .map(str::trim)
                    .filter(|label| !label.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_labels_as_written_apart_from_trimming() {
        let csv = "Name,Competencies\n  John   Doe ,JavaScript; HTML ;;css\n";
        let records = parse_records(csv.as_bytes()).expect("csv parses");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name.as_deref(), Some("John   Doe"));
        assert_eq!(records[0].competencies, vec!["JavaScript", "HTML", "css"]);
    }

    #[test]
    fn blank_fields_become_none_or_empty() {
        let csv = "Name,Competencies\n ,\n";
        let records = parse_records(csv.as_bytes()).expect("csv parses");
        assert_eq!(records[0].line, 2);
        assert!(records[0].name.is_none());
        assert!(records[0].competencies.is_empty());
    }

    #[test]
    fn reports_file_lines_including_the_header() {
        let csv = "Name,Competencies\nJohn Doe,html\nJane Smith,ruby\n";
        let records = parse_records(csv.as_bytes()).expect("csv parses");
        let lines: Vec<u64> = records.iter().map(|record| record.line).collect();
        assert_eq!(lines, vec![2, 3]);
    }
}
