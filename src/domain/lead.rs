//! Lead table domain model.

use crate::domain::AppError;

/// Column that identifies a lead.
pub const NAME_COLUMN: &str = "name";

/// Column appended to the table with the generated email (or failure message).
pub const EMAIL_COLUMN: &str = "email_text";

/// Placeholder used in failure messages when a lead has no name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// One input row. Every value is carried through to the output unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadRecord {
    name: Option<String>,
    values: Vec<String>,
}

impl LeadRecord {
    /// Name used in prompts and search queries; empty when absent.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Name used to identify the record in failure messages.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_NAME)
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

/// Tabular lead data with a required `name` column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadTable {
    headers: Vec<String>,
    records: Vec<LeadRecord>,
}

impl LeadTable {
    /// Build a table from a header row and value rows.
    ///
    /// Fails with [`AppError::MissingNameColumn`] when no header is exactly
    /// `name`. Whitespace-only name cells are treated as absent; any other
    /// name is kept as written.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, AppError> {
        let name_index = headers
            .iter()
            .position(|h| h == NAME_COLUMN)
            .ok_or(AppError::MissingNameColumn)?;

        let records = rows
            .into_iter()
            .map(|values| {
                let name =
                    values.get(name_index).filter(|v| !v.trim().is_empty()).cloned();
                LeadRecord { name, values }
            })
            .collect();

        Ok(Self { headers, records })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[LeadRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Attach one email value per record, producing the output table.
    ///
    /// An existing `email_text` column is overwritten in place; otherwise the
    /// column is appended.
    pub fn with_email_text(self, emails: Vec<String>) -> Result<ResultTable, AppError> {
        if emails.len() != self.records.len() {
            return Err(AppError::RowCountMismatch {
                expected: self.records.len(),
                actual: emails.len(),
            });
        }

        let existing = self.headers.iter().position(|h| h == EMAIL_COLUMN);
        let mut headers = self.headers;
        if existing.is_none() {
            headers.push(EMAIL_COLUMN.to_string());
        }

        let rows = self
            .records
            .into_iter()
            .zip(emails)
            .map(|(record, email)| {
                let mut values = record.values;
                match existing {
                    Some(index) if index < values.len() => values[index] = email,
                    Some(index) => {
                        values.resize(index, String::new());
                        values.push(email);
                    }
                    None => values.push(email),
                }
                values
            })
            .collect();

        Ok(ResultTable { headers, rows })
    }
}

/// Input table plus the `email_text` column, in input row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ResultTable {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Values of the `email_text` column, one per row.
    pub fn email_texts(&self) -> Vec<&str> {
        let Some(index) = self.headers.iter().position(|h| h == EMAIL_COLUMN) else {
            return Vec::new();
        };
        self.rows.iter().map(|row| row.get(index).map(String::as_str).unwrap_or("")).collect()
    }
}
