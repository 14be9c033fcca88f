//! Built-in validators

mod bounds;

pub mod attributes;
pub mod length;
pub mod numeric;
pub mod pattern;

pub use attributes::{validate_object_attributes, AttributeKeys};
pub use length::{validate_array_length, validate_string_length, validate_string_length_with, LengthMode};
pub use numeric::validate_number_range;
pub use pattern::{validate_reg_exp, Pattern};
