//! # cdk-validation
//!
//! Stateless validation primitives for construct properties: array and
//! string length, numeric range, object attribute sets and regular
//! expression matching.
//!
//! Every validator returns the ordered list of human-readable error messages
//! for its value. An empty list means the value is valid. Only a malformed
//! call, such as `min > max` or an invalid pattern, is reported as a
//! [`ConfigurationError`]. Callers concatenate the lists of several
//! validators to build a full report.
//!
//! ```
//! use cdk_validation::{validate_array_length, validate_reg_exp, ArrayLengthOptions, Pattern, PatternOptions};
//!
//! let errors = validate_array_length(&["subnet-a"], &ArrayLengthOptions::new().min(2))?;
//! assert_eq!(errors, vec!["must have at least 2 elements"]);
//!
//! let account = Pattern::new("^[0-9]{12}$")?;
//! let errors = validate_reg_exp("abc", &account, &PatternOptions::new().message_prefix("account: "));
//! assert_eq!(errors, vec!["account: must match regExp /^[0-9]{12}$/"]);
//! # Ok::<(), cdk_validation::ConfigurationError>(())
//! ```

pub mod error;
pub mod options;
pub mod validators;

pub use error::{ConfigurationError, ValidationResult};
pub use options::{
    ArrayLengthOptions, AttributeOptions, BoundOptions, MessageOptions, NumberRangeOptions,
    PatternOptions, StringLengthOptions,
};
pub use validators::{
    validate_array_length, validate_number_range, validate_object_attributes, validate_reg_exp,
    validate_string_length, validate_string_length_with, AttributeKeys, LengthMode, Pattern,
};
