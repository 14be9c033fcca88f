//! Numeric range validator

use std::fmt::Display;

use super::bounds::{check_bounds, BoundTexts};
use crate::error::ValidationResult;
use crate::options::NumberRangeOptions;

/// Validate that `value` lies within the bounds.
///
/// Works for any ordered, displayable number. Default texts render the bound
/// with `Display`, so `4.0_f64` reads as `4` and an infinite bound reads as
/// `Infinity` or `-Infinity`. A NaN value never violates a bound since it
/// compares false against everything.
///
/// # Errors
///
/// Returns a configuration error when both bounds are set and `min > max`.
pub fn validate_number_range<N>(value: N, options: &NumberRangeOptions<N>) -> ValidationResult
where
    N: PartialOrd + Display,
{
    let texts = BoundTexts {
        below_min: below_min::<N>,
        above_max: above_max::<N>,
    };
    check_bounds("number_range", value, options, &texts)
}

fn below_min<N: Display>(min: &N) -> String {
    format!("must be at least {}", render_bound(min))
}

fn above_max<N: Display>(max: &N) -> String {
    format!("must be at most {}", render_bound(max))
}

/// `Display` for floats writes `inf`; messages spell it out.
fn render_bound<N: Display>(bound: &N) -> String {
    let rendered = bound.to_string();
    match rendered.as_str() {
        "inf" => "Infinity".to_string(),
        "-inf" => "-Infinity".to_string(),
        _ => rendered,
    }
}
