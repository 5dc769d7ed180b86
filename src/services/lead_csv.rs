//! CSV lead-file reader and writer.

use std::io::{Read, Write};
use std::path::Path;

use crate::domain::{AppError, LeadTable, ResultTable};

/// Read a lead table from CSV with a required header row.
///
/// Rows with a different number of fields than the header are rejected.
pub fn read_leads<R: Read>(reader: R) -> Result<LeadTable, AppError> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(str::to_string).collect());
    }

    LeadTable::new(headers, rows)
}

pub fn read_leads_file(path: &Path) -> Result<LeadTable, AppError> {
    let file = std::fs::File::open(path).map_err(|e| {
        AppError::Io(std::io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))
    })?;
    read_leads(file)
}

/// Write the result table as CSV, header row first.
pub fn write_results<W: Write>(writer: W, table: &ResultTable) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(table.headers())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_results_file(path: &Path, table: &ResultTable) -> Result<(), AppError> {
    let file = std::fs::File::create(path)?;
    write_results(file, table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_headers_and_rows_in_order() {
        let table = read_leads("name,company\nAlice,Acme\nBob,Globex\n".as_bytes()).unwrap();

        assert_eq!(table.headers(), ["name", "company"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].name(), "Alice");
        assert_eq!(table.records()[1].values(), ["Bob", "Globex"]);
    }

    #[test]
    fn missing_name_header_is_rejected() {
        let result = read_leads("email\na@example.com\n".as_bytes());
        assert!(matches!(result, Err(AppError::MissingNameColumn)));
    }

    #[test]
    fn empty_input_has_no_name_column() {
        let result = read_leads("".as_bytes());
        assert!(matches!(result, Err(AppError::MissingNameColumn)));
    }

    #[test]
    fn header_only_input_is_an_empty_table() {
        let table = read_leads("name\n".as_bytes()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let result = read_leads("name,company\nAlice\n".as_bytes());
        assert!(matches!(result, Err(AppError::Csv(_))));
    }

    #[test]
    fn quoted_fields_survive_round_trip() {
        let table =
            read_leads("name,notes\n\"Doe, Jane\",\"likes \"\"ski\"\" trips\"\n".as_bytes()).unwrap();
        let result = table.with_email_text(vec!["Hi Jane,\nWelcome.".to_string()]).unwrap();

        let mut out = Vec::new();
        write_results(&mut out, &result).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "name,notes,email_text\n\"Doe, Jane\",\"likes \"\"ski\"\" trips\",\"Hi Jane,\nWelcome.\"\n"
        );
    }

    #[test]
    fn file_helpers_read_and_write() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("leads.csv");
        std::fs::write(&input, "name\nAlice\n").unwrap();

        let table = read_leads_file(&input).unwrap();
        let result = table.with_email_text(vec!["Hello".to_string()]).unwrap();
        let output = dir.path().join("out.csv");
        write_results_file(&output, &result).unwrap();

        assert_eq!(std::fs::read_to_string(output).unwrap(), "name,email_text\nAlice,Hello\n");
    }

    #[test]
    fn missing_input_file_names_the_path() {
        let err = read_leads_file(Path::new("/nonexistent/leads.csv")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/leads.csv"));
    }
}
