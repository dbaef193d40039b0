//! Date labels: `dd.MM.yyyy` in, `dd MMMM` out.
//!
//! The locale and both layouts are fixed. [`DATE_LABEL_FORMAT`] is the only
//! instance of [`DateLabelFormat`]; its fields are private so callers cannot
//! build a variant of it.
//!
//! # Strictness
//!
//! Input is checked character by character before any date arithmetic:
//! exactly ten characters, ASCII digits in every slot except positions 2 and
//! 5, which must be `.`. Single-digit days or months, surrounding whitespace
//! and signs are rejected. The digits must then name a real date; nothing
//! rolls over (`31.02.2024` is an error, not `02.03.2024`).
//!
//! The day is always rendered with two digits: `01.01.2024` → `01 января`.

use chrono::{Datelike, NaiveDate};

use crate::domain::error::ParseError;

/// Layout used by chrono once the shape check has passed.
const CHRONO_INPUT: &str = "%d.%m.%Y";
const INPUT_LEN: usize = 10;
const SEPARATOR_POSITIONS: [usize; 2] = [2, 5];

// ── Locale ────────────────────────────────────────────────────────────────────

/// Month names of one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthNames {
    tag: &'static str,
    /// Genitive forms, used after a day number ("25 декабря").
    genitive: [&'static str; 12],
}

impl MonthNames {
    pub const fn tag(&self) -> &'static str {
        self.tag
    }

    /// Month name for `date`, in the form that follows a day number.
    pub fn for_date(&self, date: NaiveDate) -> &'static str {
        // month0() is always 0..=11
        self.genitive[date.month0() as usize]
    }

    pub fn all(&self) -> &[&'static str; 12] {
        &self.genitive
    }
}

pub const RUSSIAN: MonthNames = MonthNames {
    tag: "ru",
    genitive: [
        "января",
        "февраля",
        "марта",
        "апреля",
        "мая",
        "июня",
        "июля",
        "августа",
        "сентября",
        "октября",
        "ноября",
        "декабря",
    ],
};

// ── Format configuration ──────────────────────────────────────────────────────

/// Process-wide date label configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateLabelFormat {
    locale: MonthNames,
    input_pattern: &'static str,
    output_pattern: &'static str,
}

impl DateLabelFormat {
    pub const fn locale(&self) -> &MonthNames {
        &self.locale
    }

    /// Human-readable input layout.
    pub const fn input_pattern(&self) -> &'static str {
        self.input_pattern
    }

    /// Human-readable output layout.
    pub const fn output_pattern(&self) -> &'static str {
        self.output_pattern
    }
}

pub const DATE_LABEL_FORMAT: DateLabelFormat = DateLabelFormat {
    locale: RUSSIAN,
    input_pattern: "dd.MM.yyyy",
    output_pattern: "dd MMMM",
};

// ── Operations ────────────────────────────────────────────────────────────────

/// Convert `dd.MM.yyyy` into `dd MMMM` using [`DATE_LABEL_FORMAT`].
///
/// ```
/// use archpat_core::domain::format_date_label;
///
/// assert_eq!(format_date_label("25.12.2024").unwrap(), "25 декабря");
/// assert!(format_date_label("2024-12-25").is_err());
/// ```
pub fn format_date_label(input: &str) -> Result<String, ParseError> {
    let date = parse_date(input)?;
    Ok(render_label(date))
}

/// Parse a strict `dd.MM.yyyy` string into a calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate, ParseError> {
    check_shape(input)?;
    NaiveDate::parse_from_str(input, CHRONO_INPUT).map_err(|_| ParseError::InvalidDate {
        input: input.to_owned(),
    })
}

/// Render `date` as `dd MMMM` in the fixed locale.
pub fn render_label(date: NaiveDate) -> String {
    format!(
        "{} {}",
        date.format("%d"),
        DATE_LABEL_FORMAT.locale.for_date(date)
    )
}

fn check_shape(input: &str) -> Result<(), ParseError> {
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    let len = input.chars().count();
    if len != INPUT_LEN {
        return Err(ParseError::Length {
            input: input.to_owned(),
            len,
        });
    }

    for (position, found) in input.chars().enumerate() {
        if SEPARATOR_POSITIONS.contains(&position) {
            if found != '.' {
                return Err(ParseError::Separator {
                    input: input.to_owned(),
                    position,
                    found,
                });
            }
        } else if !found.is_ascii_digit() {
            return Err(ParseError::NonDigit {
                input: input.to_owned(),
                position,
                found,
            });
        }
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
