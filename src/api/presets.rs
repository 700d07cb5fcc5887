use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{days, shift_time};
use crate::core::{Dataset, Window};
use crate::error::{ViewError, ViewResult};

const YEAR_PREFIX: &str = "Year-";

/// Canned window offered by the range dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangePreset {
    Last7Days,
    Last28Days,
    Last90Days,
    /// Calendar year, `Jan-01 00:00` to the last millisecond of `Dec-31`.
    Year(i32),
}

impl RangePreset {
    /// Validated year preset.
    pub fn year(year: i32) -> ViewResult<Self> {
        year_window(year)?;
        Ok(Self::Year(year))
    }

    /// Day count of the trailing presets, `None` for calendar years.
    #[must_use]
    pub fn trailing_days(self) -> Option<i64> {
        match self {
            Self::Last7Days => Some(7),
            Self::Last28Days => Some(28),
            Self::Last90Days => Some(90),
            Self::Year(_) => None,
        }
    }

    /// Resolves the preset against `dataset`.
    ///
    /// Trailing presets end at the last record; year presets ignore the data
    /// entirely, so a year without records resolves to an empty view.
    pub fn window(self, dataset: &Dataset) -> ViewResult<Window> {
        let count = match self {
            Self::Last7Days => 7,
            Self::Last28Days => 28,
            Self::Last90Days => 90,
            Self::Year(year) => return year_window(year),
        };
        let end = dataset.last().timestamp;
        let start = shift_time(end, -days(count)?)?;
        Window::new(start, end)
    }

    /// Human-readable dropdown label.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Last7Days => "Last 7 days".to_owned(),
            Self::Last28Days => "Last 28 days".to_owned(),
            Self::Last90Days => "Last 90 days".to_owned(),
            Self::Year(year) => year.to_string(),
        }
    }
}

impl fmt::Display for RangePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Last7Days => f.write_str("Last7Days"),
            Self::Last28Days => f.write_str("Last28Days"),
            Self::Last90Days => f.write_str("Last90Days"),
            Self::Year(year) => write!(f, "{YEAR_PREFIX}{year}"),
        }
    }
}

impl FromStr for RangePreset {
    type Err = ViewError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "Last7Days" => Ok(Self::Last7Days),
            "Last28Days" => Ok(Self::Last28Days),
            "Last90Days" => Ok(Self::Last90Days),
            _ => {
                let digits = input.strip_prefix(YEAR_PREFIX).ok_or_else(|| {
                    ViewError::InvalidArgument(format!("unknown range preset `{input}`"))
                })?;
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ViewError::InvalidArgument(format!(
                        "malformed year in range preset `{input}`"
                    )));
                }
                let year = digits.parse::<i32>().map_err(|e| {
                    ViewError::InvalidArgument(format!(
                        "malformed year in range preset `{input}`: {e}"
                    ))
                })?;
                Self::year(year)
            }
        }
    }
}

/// Any value the range dropdown can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropdownChoice {
    Preset(RangePreset),
    /// `Custom` entry: shows the full dataset span.
    Custom,
    /// Empty placeholder entry: shows the full dataset span.
    Placeholder,
}

impl FromStr for DropdownChoice {
    type Err = ViewError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim() {
            "" => Ok(Self::Placeholder),
            "Custom" => Ok(Self::Custom),
            other => other.parse().map(Self::Preset),
        }
    }
}

/// Dropdown entries for `dataset`: trailing presets, one per year, `Custom`.
#[must_use]
pub fn dropdown_options(dataset: &Dataset) -> Vec<DropdownChoice> {
    let mut options = vec![
        DropdownChoice::Preset(RangePreset::Last7Days),
        DropdownChoice::Preset(RangePreset::Last28Days),
        DropdownChoice::Preset(RangePreset::Last90Days),
    ];
    options.extend(
        dataset
            .years()
            .into_iter()
            .map(|year| DropdownChoice::Preset(RangePreset::Year(year))),
    );
    options.push(DropdownChoice::Custom);
    options
}

fn year_window(year: i32) -> ViewResult<Window> {
    let invalid = || ViewError::InvalidArgument(format!("year {year} is out of range"));
    let first_day = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(invalid)?;
    let next_year = NaiveDate::from_ymd_opt(year + 1, 1, 1).ok_or_else(invalid)?;
    let start = first_day.and_hms_opt(0, 0, 0).ok_or_else(invalid)?.and_utc();
    let next_start: DateTime<Utc> = next_year.and_hms_opt(0, 0, 0).ok_or_else(invalid)?.and_utc();
    let end = shift_time(next_start, -chrono::Duration::milliseconds(1))?;
    Window::new(start, end)
}
