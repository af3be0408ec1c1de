use std::{fs::File, io, path::Path};

use chrono::NaiveDate;
use derive_getters::Getters;
use derive_more::{Constructor, Deref};
use serde::{Deserialize, Deserializer};

use super::{
    cutoff::CutoffDate,
    error::{FormatError, TransformError},
};

const ROW_DATE_FORMAT: &str = "%m/%d/%Y";

/// Keeps an empty cell as `Some("")`; only a missing column is `None`.
fn deserialize_present_cell<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(de).map(Some)
}

/// One row of an EverBank export. Columns other than these are ignored.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Getters, Constructor)]
pub struct InputRecord {
    #[serde(skip)]
    line: u64,
    #[serde(rename = "Date", default, deserialize_with = "deserialize_present_cell")]
    date: Option<String>,
    #[serde(rename = "Description", default, deserialize_with = "deserialize_present_cell")]
    description: Option<String>,
    #[serde(rename = "Credits(+)", default, deserialize_with = "deserialize_present_cell")]
    credit: Option<String>,
    #[serde(rename = "Debits(-)", default, deserialize_with = "deserialize_present_cell")]
    debit: Option<String>,
}

impl InputRecord {
    pub fn parsed_date(&self) -> Result<NaiveDate, FormatError> {
        let value = self
            .date
            .as_deref()
            .ok_or(FormatError::MissingDate { line: self.line })?;
        NaiveDate::parse_from_str(value, ROW_DATE_FORMAT).map_err(|_| FormatError::RowDate {
            line: self.line,
            value: value.to_owned(),
        })
    }

    /// The credit if it is present and non-empty, otherwise the debit.
    pub fn raw_amount(&self) -> Option<&str> {
        non_empty(&self.credit).or_else(|| non_empty(&self.debit))
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[derive(Debug, Default, PartialEq, Deref)]
pub struct Transactions(pub Vec<InputRecord>);

impl Transactions {
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, TransformError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TransformError::NotFound {
            path: path.to_owned(),
            source,
        })?;
        let transactions = Self::from_reader(file)?;
        log::info!("read {} rows from {}", transactions.len(), path.display());

        Ok(transactions)
    }

    /// Short rows are accepted; their trailing columns read as missing.
    pub fn from_reader<R: io::Read>(rdr: R) -> Result<Self, FormatError> {
        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(rdr);
        let headers = rdr.headers()?.clone();
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(FormatError::NoHeader);
        }

        rdr.records()
            .map(|record| -> Result<InputRecord, FormatError> {
                let record = record?;
                let short_headers: csv::StringRecord;
                let row_headers = if record.len() < headers.len() {
                    short_headers = headers.iter().take(record.len()).collect();
                    &short_headers
                } else {
                    &headers
                };
                let mut row: InputRecord = record.deserialize(Some(row_headers))?;
                row.line = record.position().map_or(0, |pos| pos.line());
                Ok(row)
            })
            .collect::<Result<_, _>>()
            .map(Self)
    }

    /// Rows dated on or after `cutoff`, in file order.
    pub fn since(&self, cutoff: &CutoffDate) -> Result<Vec<&InputRecord>, FormatError> {
        let mut kept = Vec::with_capacity(self.len());
        for row in &self.0 {
            if cutoff.admits(row.parsed_date()?) {
                kept.push(row);
            } else {
                log::debug!("line {}: dated before {}, skipped", row.line, **cutoff);
            }
        }

        Ok(kept)
    }
}
