use std::{fs::File, io, path::Path};

use derive_getters::Getters;
use derive_more::{Constructor, Deref};
use serde::Serialize;

use super::{
    error::{FormatError, TransformError},
    transaction::InputRecord,
};

const HEADER: [&str; 3] = ["Date", "Payee", "Amount"];

/// Strips every space and `$`, leaving separators and signs alone.
pub fn clean_amount(raw: &str) -> String {
    raw.chars().filter(|c| !matches!(c, ' ' | '$')).collect()
}

/// One row of a Simplifi import. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, Constructor)]
pub struct OutputRecord {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Payee")]
    payee: String,
    #[serde(rename = "Amount")]
    amount: String,
}

impl TryFrom<&InputRecord> for OutputRecord {
    type Error = TransformError;

    fn try_from(row: &InputRecord) -> Result<Self, Self::Error> {
        let line = *row.line();
        let date = row
            .date()
            .clone()
            .ok_or(FormatError::MissingDate { line })?;
        let payee = row.description().clone().ok_or(TransformError::MissingField {
            line,
            field: "Description",
        })?;
        let amount = row.raw_amount().ok_or(TransformError::MissingField {
            line,
            field: "Credits(+) or Debits(-)",
        })?;

        Ok(Self::new(date, payee, clean_amount(amount)))
    }
}

#[derive(Debug, Default, PartialEq, Deref)]
pub struct Entries(pub Vec<OutputRecord>);

impl Entries {
    pub fn to_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), TransformError> {
        let path = path.as_ref();
        let io_error = |source| TransformError::Io {
            path: path.to_owned(),
            source,
        };
        let file = File::create(path).map_err(io_error)?;
        self.to_writer(file).map_err(io_error)?;
        log::info!("wrote {} rows to {}", self.len(), path.display());

        Ok(())
    }

    /// The header is written even when there are no entries.
    pub fn to_writer<W: io::Write>(&self, wrt: W) -> io::Result<()> {
        let mut wrt = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(wrt);
        wrt.write_record(HEADER)?;
        for entry in &self.0 {
            wrt.serialize(entry)?;
        }
        wrt.flush()?;

        Ok(())
    }
}
