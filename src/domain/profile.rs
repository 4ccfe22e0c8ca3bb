//! Band profile record and its label-delimited extraction.

use regex::Regex;
use serde::Serialize;

use crate::domain::ProfileParseError;

/// Labels the profile prompt instructs the model to emit, one per line.
const REQUIRED_LABELS: [&str; 7] = [
    "Band Name",
    "Author Style",
    "Nationality",
    "Genre 1",
    "Genre 2",
    "Style Name",
    "Reference Year",
];

/// Structured band profile extracted from the first completion.
///
/// Immutable once parsed; every later stage derives from it.
#[derive(Debug, Clone, Serialize)]
pub struct BandProfile {
    pub band_name: String,
    pub author_style: String,
    pub nationality: String,
    pub genre_one: String,
    pub genre_two: String,
    pub style_name: String,
    pub reference_year: i32,
}

impl BandProfile {
    /// Extract a profile from label-delimited completion text.
    ///
    /// For each required label the first line matching `^Label:\s*(.*)$` is
    /// taken and its remainder trimmed. Field lookups are independent: all
    /// missing labels are collected before failing so the error names every
    /// absent field. The reference-year value is stripped of non-digit
    /// characters before integer parsing.
    pub fn parse(text: &str) -> Result<Self, ProfileParseError> {
        let mut values = Vec::with_capacity(REQUIRED_LABELS.len());
        let mut missing = Vec::new();

        for label in REQUIRED_LABELS {
            match find_labeled_value(text, label) {
                Some(value) => values.push(value),
                None => missing.push(label.to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(ProfileParseError::MissingFields(missing));
        }

        let mut values = values.into_iter();
        let band_name = values.next().unwrap_or_default();
        let author_style = values.next().unwrap_or_default();
        let nationality = values.next().unwrap_or_default();
        let genre_one = values.next().unwrap_or_default();
        let genre_two = values.next().unwrap_or_default();
        let style_name = values.next().unwrap_or_default();
        let year_raw = values.next().unwrap_or_default();

        let digits: String = year_raw.chars().filter(|c| c.is_ascii_digit()).collect();
        let reference_year = digits
            .parse::<i32>()
            .map_err(|_| ProfileParseError::InvalidReferenceYear(year_raw.clone()))?;

        Ok(Self {
            band_name,
            author_style,
            nationality,
            genre_one,
            genre_two,
            style_name,
            reference_year,
        })
    }
}

/// Find the first line `Label: value` and return the trimmed value.
fn find_labeled_value(text: &str, label: &str) -> Option<String> {
    let pattern = format!(r"(?m)^{}:[ \t]*(.*)$", regex::escape(label));
    let re = Regex::new(&pattern).ok()?;
    re.captures(text).map(|caps| caps[1].trim().to_string())
}
