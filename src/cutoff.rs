use std::str::FromStr;

use chrono::NaiveDate;
use derive_more::Deref;

use super::error::FormatError;

const CUTOFF_FORMAT: &str = "%Y-%m-%d";

/// Inclusive lower bound on transaction dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deref)]
pub struct CutoffDate(NaiveDate);

impl CutoffDate {
    pub fn admits(&self, date: NaiveDate) -> bool {
        date >= self.0
    }
}

impl FromStr for CutoffDate {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, CUTOFF_FORMAT)
            .map(Self)
            .map_err(|_| FormatError::CutoffDate(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::CutoffDate;
    use crate::FormatError;

    #[test]
    fn parse_iso_date() {
        let cutoff: CutoffDate = "2025-02-12".parse().unwrap();
        assert_eq!(*cutoff, NaiveDate::from_ymd_opt(2025, 2, 12).unwrap());
    }

    #[test]
    fn reject_bank_format() {
        for bad in ["02/12/2025", "2025-13-01", "2025-02-30", "", "yesterday"] {
            let err = bad.parse::<CutoffDate>().unwrap_err();
            assert!(matches!(err, FormatError::CutoffDate(ref s) if s == bad));
        }
    }

    #[test]
    fn admits_is_inclusive() {
        let cutoff: CutoffDate = "2025-02-12".parse().unwrap();
        assert!(!cutoff.admits(NaiveDate::from_ymd_opt(2025, 2, 11).unwrap()));
        assert!(cutoff.admits(NaiveDate::from_ymd_opt(2025, 2, 12).unwrap()));
        assert!(cutoff.admits(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()));
    }
}
