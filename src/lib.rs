mod cutoff;
mod entry;
mod error;
mod transaction;
mod transformer;

pub use self::{
    cutoff::CutoffDate,
    entry::{clean_amount, Entries, OutputRecord},
    error::{FormatError, TransformError},
    transaction::{InputRecord, Transactions},
    transformer::{select, transform, Summary},
};
