//! Argument validation for the operation surface. All checks run before
//! any network access.

use std::{error::Error, fmt};

use crate::format::OutputFormat;

pub const MAX_RESULT_SIZE: usize = 50_000;
pub const MAX_SUMMARY_SIZE: usize = 500;

pub const DEFAULT_SEARCH_SIZE: usize = 10;
pub const DEFAULT_ASSOCIATION_SIZE: usize = 25;
pub const DEFAULT_SUMMARY_SIZE: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentError {
    Missing { name: &'static str },
    Empty { name: &'static str },
    MissingAnyOf { names: &'static str },
    SizeOutOfRange { name: &'static str, max: usize },
    ScoreOutOfRange { value: f64 },
    UnknownFormat { value: String },
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { name } => write!(f, "missing required argument `{name}`"),
            Self::Empty { name } => write!(f, "argument `{name}` must not be empty"),
            Self::MissingAnyOf { names } => {
                write!(f, "at least one of {names} must be supplied")
            }
            Self::SizeOutOfRange { name, max } => {
                write!(f, "argument `{name}` must be between 1 and {max}")
            }
            Self::ScoreOutOfRange { value } => {
                write!(f, "argument `min_score` must be between 0.0 and 1.0, got {value}")
            }
            Self::UnknownFormat { value } => {
                write!(f, "unknown output format `{value}`, expected `structured` or `tabular`")
            }
        }
    }
}

impl Error for ArgumentError {}

/// Trims `value` and rejects the empty string.
///
/// # Errors
/// Returns `ArgumentError::Empty` if nothing remains after trimming.
pub fn non_empty(name: &'static str, value: &str) -> Result<String, ArgumentError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ArgumentError::Empty { name });
    }
    Ok(trimmed.to_owned())
}

/// Requires `value` to be present and non-empty.
///
/// # Errors
/// Returns `ArgumentError::Missing` when absent, `ArgumentError::Empty`
/// when blank.
pub fn require_text(name: &'static str, value: Option<&str>) -> Result<String, ArgumentError> {
    let value = value.ok_or(ArgumentError::Missing { name })?;
    non_empty(name, value)
}

/// Passes absence through, but rejects a present-but-blank value.
///
/// # Errors
/// Returns `ArgumentError::Empty` when a supplied value is blank.
pub fn optional_text(
    name: &'static str,
    value: Option<&str>,
) -> Result<Option<String>, ArgumentError> {
    value.map(|raw| non_empty(name, raw)).transpose()
}

/// Resolves the requested result size, applying `default` when absent.
///
/// # Errors
/// Returns `ArgumentError::SizeOutOfRange` outside `1..=max`.
pub fn result_size(
    name: &'static str,
    value: Option<usize>,
    default: usize,
    max: usize,
) -> Result<usize, ArgumentError> {
    let size = value.unwrap_or(default);
    if size == 0 || size > max {
        return Err(ArgumentError::SizeOutOfRange { name, max });
    }
    Ok(size)
}

/// Validates an optional minimum association score.
///
/// # Errors
/// Returns `ArgumentError::ScoreOutOfRange` outside `[0.0, 1.0]`.
pub fn score_floor(value: Option<f64>) -> Result<Option<f64>, ArgumentError> {
    match value {
        None => Ok(None),
        Some(score) if (0.0..=1.0).contains(&score) => Ok(Some(score)),
        Some(score) => Err(ArgumentError::ScoreOutOfRange { value: score }),
    }
}

/// Parses the optional output format name, case-insensitively.
///
/// # Errors
/// Returns `ArgumentError::UnknownFormat` for anything other than
/// `structured` or `tabular`.
pub fn output_format(value: Option<&str>) -> Result<OutputFormat, ArgumentError> {
    match value {
        None => Ok(OutputFormat::default()),
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "structured" => Ok(OutputFormat::Structured),
            "tabular" => Ok(OutputFormat::Tabular),
            _ => Err(ArgumentError::UnknownFormat {
                value: raw.to_owned(),
            }),
        },
    }
}
