use std::path::Path;

use derive_getters::Getters;

use super::{
    cutoff::CutoffDate,
    entry::{Entries, OutputRecord},
    error::TransformError,
    transaction::Transactions,
};

/// Row counts of a finished transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Summary {
    read: usize,
    written: usize,
}

/// Filters `transactions` to those on or after `cutoff` and reshapes them.
///
/// Any bad date in the input fails the whole selection, as does a kept row
/// lacking a payee or an amount.
pub fn select(transactions: &Transactions, cutoff: &CutoffDate) -> Result<Entries, TransformError> {
    transactions
        .since(cutoff)?
        .into_iter()
        .map(OutputRecord::try_from)
        .collect::<Result<_, _>>()
        .map(Entries)
}

/// Reads an EverBank export at `input`, keeps rows dated on or after `cutoff`
/// (`YYYY-MM-DD`) and writes them to `output` as a Simplifi import.
///
/// The cutoff is validated before either file is touched, and `output` is
/// only created once every row has been reshaped.
pub fn transform<P, Q>(input: P, output: Q, cutoff: &str) -> Result<Summary, TransformError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let cutoff: CutoffDate = cutoff.parse()?;
    let transactions = Transactions::from_csv(input)?;
    let entries = select(&transactions, &cutoff)?;
    entries.to_csv(output)?;

    Ok(Summary {
        read: transactions.len(),
        written: entries.len(),
    })
}
