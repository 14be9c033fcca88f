//! Length-based validators for strings and arrays

use serde::{Deserialize, Serialize};

use super::bounds::{check_bounds, plural_suffix, BoundTexts};
use crate::error::ValidationResult;
use crate::options::{ArrayLengthOptions, StringLengthOptions};

/// How string length is counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LengthMode {
    /// Unicode scalar values
    Chars,
    /// UTF-16 code units, as counted by UTF-16 string runtimes
    #[default]
    Utf16,
    /// UTF-8 bytes
    Bytes,
}

impl LengthMode {
    /// Measure `input` in this mode
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Chars => input.chars().count(),
            LengthMode::Utf16 => input.encode_utf16().count(),
            LengthMode::Bytes => input.len(),
        }
    }
}

fn array_below_min(min: &usize) -> String {
    format!("must have at least {min} element{}", plural_suffix(*min))
}

fn array_above_max(max: &usize) -> String {
    format!("must have at most {max} element{}", plural_suffix(*max))
}

fn string_below_min(min: &usize) -> String {
    format!("must be at least {min} character{} long", plural_suffix(*min))
}

fn string_above_max(max: &usize) -> String {
    format!("must be at most {max} character{} long", plural_suffix(*max))
}

const ARRAY_TEXTS: BoundTexts<usize> = BoundTexts {
    below_min: array_below_min,
    above_max: array_above_max,
};

const STRING_TEXTS: BoundTexts<usize> = BoundTexts {
    below_min: string_below_min,
    above_max: string_above_max,
};

/// Validate that the number of elements in `value` lies within the bounds.
///
/// # Errors
///
/// Returns a configuration error when both bounds are set and `min > max`.
pub fn validate_array_length<T>(value: &[T], options: &ArrayLengthOptions) -> ValidationResult {
    check_bounds("array_length", value.len(), options, &ARRAY_TEXTS)
}

/// Validate that the length of `value`, counted in UTF-16 code units, lies
/// within the bounds.
///
/// Characters outside the Basic Multilingual Plane count as two, which keeps
/// results in line with rule sets shared with UTF-16 based tooling. Use
/// [`validate_string_length_with`] to count chars or bytes instead.
///
/// # Errors
///
/// Returns a configuration error when both bounds are set and `min > max`.
pub fn validate_string_length(value: &str, options: &StringLengthOptions) -> ValidationResult {
    validate_string_length_with(value, LengthMode::default(), options)
}

/// Like [`validate_string_length`], counting length in the given mode.
///
/// # Errors
///
/// Returns a configuration error when both bounds are set and `min > max`.
pub fn validate_string_length_with(
    value: &str,
    mode: LengthMode,
    options: &StringLengthOptions,
) -> ValidationResult {
    check_bounds("string_length", mode.measure(value), options, &STRING_TEXTS)
}
