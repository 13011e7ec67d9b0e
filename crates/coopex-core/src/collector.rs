//! Ordering and serialization of the collected records.

use std::io::Write;

use tracing::debug;

use crate::error::OutputError;
use crate::models::record::{Record, RECORD_HEADERS};

/// Sort records by id, comparing ids as strings: "12" sorts before "3".
///
/// The sort is stable, so records sharing an id keep their relative order.
pub fn sort_records(records: &mut [Record]) {
    records.sort_by(|a, b| a.id.cmp(&b.id));
}

/// Write the header row and one row per record as CSV.
pub fn write_csv<W: Write>(writer: W, records: &[Record]) -> Result<(), OutputError> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(RECORD_HEADERS)?;
    for record in records {
        wtr.write_record(record.to_row())?;
    }

    wtr.flush()?;
    debug!("Wrote {} CSV rows", records.len());
    Ok(())
}

/// Sort `records` and write them as CSV.
pub fn finalize<W: Write>(writer: W, mut records: Vec<Record>) -> Result<Vec<Record>, OutputError> {
    sort_records(&mut records);
    write_csv(writer, &records)?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(id: &str, first: &str, last: &str) -> Record {
        Record {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            emails: Vec::new(),
            emails_with_name: Vec::new(),
            profile_link: None,
            repo_link: None,
            cover_letter: false,
            evaluations: Vec::new(),
            term_averages: Vec::new(),
            overall_average: None,
        }
    }

    #[test]
    fn test_ids_sort_as_strings() {
        let mut records = vec![
            record("2", "B", "B"),
            record("10", "A", "A"),
            record("3", "C", "C"),
            record("12", "D", "D"),
        ];
        sort_records(&mut records);

        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["10", "12", "2", "3"]);
    }

    #[test]
    fn test_csv_layout() {
        let mut jane = record("12", "Jane", "Doe");
        jane.emails = vec!["a@x.com".to_string(), "b@x.com".to_string()];
        jane.emails_with_name = vec![
            "Jane Doe <a@x.com>".to_string(),
            "Jane Doe <b@x.com>".to_string(),
        ];
        jane.term_averages = vec!["80".to_string(), "90".to_string()];
        jane.overall_average = Some(85.0);

        let mut out = Vec::new();
        finalize(&mut out, vec![record("3", "Alan", "Smith"), jane]).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "ID,First name,Last name,Email,Email with name,LinkedIn,Github,Included a cover letter,Work term evaluations,Term averages,Overall average",
                r#"12,Jane,Doe,"a@x.com,b@x.com","Jane Doe <a@x.com>,Jane Doe <b@x.com>",,,No,,"80,90",85.0"#,
                "3,Alan,Smith,,,,,No,,,Unknown",
            ]
        );
    }

    #[test]
    fn test_empty_result_set_has_header() {
        let mut out = Vec::new();
        write_csv(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }
}
