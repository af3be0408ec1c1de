use std::path::PathBuf;

use clap::Parser;

/// Transform EverBank CSV exports for import into Simplifi.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Args {
    /// Path to the EverBank CSV export file
    pub input_file: PathBuf,

    /// Path where the transformed CSV should be saved
    pub output_file: PathBuf,

    /// Filter transactions from this date (YYYY-MM-DD)
    #[clap(short, long)]
    pub date: String,
}

pub fn parse() -> Args {
    Args::parse()
}
