//! Shared min/max algorithm behind the length and range validators

use std::fmt::Display;

use tracing::{debug, trace};

use crate::error::{ConfigurationError, ValidationResult};
use crate::options::BoundOptions;

/// Default texts for one kind of bound
pub(crate) struct BoundTexts<T> {
    pub(crate) below_min: fn(&T) -> String,
    pub(crate) above_max: fn(&T) -> String,
}

/// Check `measured` against the bounds in `options`.
///
/// Returns immediately with no messages when both bounds are unset, and with
/// a configuration error when `min > max`. Otherwise the min check runs
/// before the max check and both may report.
pub(crate) fn check_bounds<T>(
    rule: &'static str,
    measured: T,
    options: &BoundOptions<T>,
    texts: &BoundTexts<T>,
) -> ValidationResult
where
    T: PartialOrd + Display,
{
    if options.is_unbounded() {
        return Ok(Vec::new());
    }

    if let (Some(min), Some(max)) = (&options.min, &options.max) {
        if min > max {
            debug!(rule, %min, %max, "rejecting inverted bounds");
            return Err(ConfigurationError::inverted_bounds(min, max));
        }
    }

    let mut errors = Vec::new();

    if let Some(min) = &options.min {
        if measured < *min {
            errors.push(options.messages.compose(|| (texts.below_min)(min)));
        }
    }

    if let Some(max) = &options.max {
        if measured > *max {
            errors.push(options.messages.compose(|| (texts.above_max)(max)));
        }
    }

    trace!(rule, %measured, errors = errors.len(), "bounds checked");
    Ok(errors)
}

/// `"s"` unless the count is exactly one
pub(crate) fn plural_suffix(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
