//! Month localization and display date formatting.
//!
//! # Responsibility
//! - Map English month names (chrono `%B`) to the application locale.
//! - Render display dates in `DD/MM/YYYY` form.
//!
//! # Invariants
//! - A usable table covers all twelve months exactly; an unmapped month is
//!   a configuration defect, not data.
//! - `month_label` is a pure function of date and table; it is never used
//!   as a filter key independent of the date.

use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

const PORTUGUESE_MONTHS: [(&str, &str); 12] = [
    ("January", "Janeiro"),
    ("February", "Fevereiro"),
    ("March", "Março"),
    ("April", "Abril"),
    ("May", "Maio"),
    ("June", "Junho"),
    ("July", "Julho"),
    ("August", "Agosto"),
    ("September", "Setembro"),
    ("October", "Outubro"),
    ("November", "Novembro"),
    ("December", "Dezembro"),
];

pub type LocaleResult<T> = Result<T, LocaleError>;

/// Configuration error for the month localization table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// The table carries no localized name for the computed month.
    UnmappedMonth(String),
}

impl Display for LocaleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmappedMonth(month) => {
                write!(f, "no localized name configured for month `{month}`")
            }
        }
    }
}

impl Error for LocaleError {}

/// English-to-locale month name table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthTable {
    entries: Vec<(String, String)>,
}

impl MonthTable {
    /// Returns the Portuguese table used by the application.
    pub fn portuguese() -> Self {
        Self::from_pairs(
            PORTUGUESE_MONTHS
                .iter()
                .map(|(english, localized)| ((*english).to_string(), (*localized).to_string())),
        )
    }

    /// Builds a table from explicit (English, localized) pairs.
    ///
    /// Callers are responsible for covering all twelve months; lookups for
    /// missing entries fail with [`LocaleError::UnmappedMonth`].
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    /// Resolves the localized name for one English month name.
    pub fn localize(&self, english_month: &str) -> LocaleResult<&str> {
        self.entries
            .iter()
            .find(|(english, _)| english == english_month)
            .map(|(_, localized)| localized.as_str())
            .ok_or_else(|| LocaleError::UnmappedMonth(english_month.to_string()))
    }

    /// Derives the localized month label for one date.
    pub fn month_label(&self, date: NaiveDate) -> LocaleResult<String> {
        let english = date.format("%B").to_string();
        Ok(self.localize(&english)?.to_string())
    }
}

impl Default for MonthTable {
    fn default() -> Self {
        Self::portuguese()
    }
}

/// Formats a date for display as `DD/MM/YYYY`.
///
/// Storage and query matching always use the ISO `YYYY-MM-DD` form; this
/// helper exists for presentation only.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::{display_date, LocaleError, MonthTable};
    use chrono::NaiveDate;

    #[test]
    fn portuguese_table_covers_all_twelve_months() {
        let table = MonthTable::portuguese();
        for month in 1..=12 {
            let date = NaiveDate::from_ymd_opt(2024, month, 1).unwrap();
            table.month_label(date).expect("month should be mapped");
        }
    }

    #[test]
    fn march_maps_to_marco() {
        let table = MonthTable::portuguese();
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(table.month_label(date).unwrap(), "Março");
    }

    #[test]
    fn incomplete_table_reports_unmapped_month() {
        let table = MonthTable::from_pairs(vec![("January".to_string(), "Janeiro".to_string())]);
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let err = table.month_label(date).unwrap_err();
        assert_eq!(err, LocaleError::UnmappedMonth("June".to_string()));
    }

    #[test]
    fn display_date_uses_day_month_year() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert_eq!(display_date(date), "10/06/2024");
    }
}
