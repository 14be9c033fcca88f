//! Option types accepted by the validators
//!
//! Every validator takes its value plus one options struct. All fields are
//! optional except the attribute lists, and every struct deserializes from
//! the camelCase keys used by construct property definitions (`min`, `max`,
//! `message`, `messagePrefix`, `mandatoryAttributes`, `optionalAttributes`).

use serde::{Deserialize, Serialize};

/// Custom message and prefix shared by every validator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MessageOptions {
    /// Replaces every generated default text verbatim. Default: none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Prepended to every message without a separator. Default: empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_prefix: Option<String>,
}

/// Options for the pattern validator
pub type PatternOptions = MessageOptions;

impl MessageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the custom message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the message prefix
    pub fn message_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.message_prefix = Some(prefix.into());
        self
    }

    /// Build the final error text: prefix, then the custom message if one is
    /// set, otherwise the default text.
    pub(crate) fn compose<F>(&self, default_text: F) -> String
    where
        F: FnOnce() -> String,
    {
        let prefix = self.message_prefix.as_deref().unwrap_or("");
        match self.message.as_deref() {
            Some(message) => format!("{prefix}{message}"),
            None => format!("{prefix}{}", default_text()),
        }
    }
}

/// Optional lower and upper bound on a measured quantity
///
/// Both bounds are inclusive. Leaving both unset turns the validator into a
/// no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoundOptions<T> {
    /// Minimum allowed value. Default: unbounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<T>,
    /// Maximum allowed value. Default: unbounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<T>,
    #[serde(flatten)]
    pub messages: MessageOptions,
}

/// Options for [`validate_array_length`](crate::validate_array_length)
pub type ArrayLengthOptions = BoundOptions<usize>;

/// Options for [`validate_string_length`](crate::validate_string_length)
pub type StringLengthOptions = BoundOptions<usize>;

/// Options for [`validate_number_range`](crate::validate_number_range)
pub type NumberRangeOptions<N = f64> = BoundOptions<N>;

impl<T> Default for BoundOptions<T> {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            messages: MessageOptions::default(),
        }
    }
}

impl<T> BoundOptions<T> {
    /// Create options with no bounds and default messages
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum bound
    pub fn min(mut self, min: T) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the maximum bound
    pub fn max(mut self, max: T) -> Self {
        self.max = Some(max);
        self
    }

    /// Set both bounds
    pub fn range(mut self, min: T, max: T) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Set the custom message used for both bound violations
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.messages.message = Some(message.into());
        self
    }

    /// Set the message prefix
    pub fn message_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.messages.message_prefix = Some(prefix.into());
        self
    }

    /// Whether neither bound is set
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Allowed attribute set for the object attribute validator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AttributeOptions {
    /// Names that must be present, reported in this order when missing
    pub mandatory_attributes: Vec<String>,
    /// Names that may be present. Never checked for presence.
    pub optional_attributes: Vec<String>,
    #[serde(flatten)]
    pub messages: MessageOptions,
}

impl AttributeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append mandatory attribute names
    pub fn mandatory<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mandatory_attributes
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Append optional attribute names
    pub fn optional<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_attributes
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Set the custom message used for every generated error
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.messages.message = Some(message.into());
        self
    }

    /// Set the message prefix
    pub fn message_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.messages.message_prefix = Some(prefix.into());
        self
    }

    /// Whether `name` is in the mandatory or optional set
    pub fn allows(&self, name: &str) -> bool {
        self.mandatory_attributes.iter().any(|a| a == name)
            || self.optional_attributes.iter().any(|a| a == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_defaults() {
        let options = MessageOptions::new();
        assert_eq!(options.compose(|| "must be set".to_string()), "must be set");
    }

    #[test]
    fn test_compose_prefix_without_separator() {
        let options = MessageOptions::new().message_prefix("name");
        assert_eq!(options.compose(|| ": too long".to_string()), "name: too long");
    }

    #[test]
    fn test_compose_custom_message_wins() {
        let options = MessageOptions::new()
            .message("is wrong")
            .message_prefix("field ");
        assert_eq!(
            options.compose(|| unreachable!("default text must not be built")),
            "field is wrong"
        );
    }

    #[test]
    fn test_bound_builders() {
        let options = BoundOptions::new().range(1, 5).message("bad");
        assert_eq!(options.min, Some(1));
        assert_eq!(options.max, Some(5));
        assert_eq!(options.messages.message.as_deref(), Some("bad"));
        assert!(!options.is_unbounded());
        assert!(BoundOptions::<usize>::new().is_unbounded());
    }

    #[test]
    fn test_bound_options_from_json() {
        let options: ArrayLengthOptions = serde_json::from_value(serde_json::json!({
            "min": 1,
            "messagePrefix": "subnets: "
        }))
        .unwrap();

        assert_eq!(options.min, Some(1));
        assert_eq!(options.max, None);
        assert_eq!(options.messages.message_prefix.as_deref(), Some("subnets: "));
        assert_eq!(options.messages.message, None);
    }

    #[test]
    fn test_bound_options_serialize_skips_unset() {
        let options = NumberRangeOptions::<i64>::new().max(10);
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value, serde_json::json!({ "max": 10 }));
    }

    #[test]
    fn test_attribute_options_allows() {
        let options = AttributeOptions::new().mandatory(["a"]).optional(["b"]);
        assert!(options.allows("a"));
        assert!(options.allows("b"));
        assert!(!options.allows("c"));
    }

    #[test]
    fn test_attribute_options_from_json() {
        let options: AttributeOptions = serde_json::from_value(serde_json::json!({
            "mandatoryAttributes": ["name"],
            "optionalAttributes": ["tags"],
            "message": "invalid props"
        }))
        .unwrap();

        assert_eq!(options.mandatory_attributes, vec!["name"]);
        assert_eq!(options.optional_attributes, vec!["tags"]);
        assert_eq!(options.messages.message.as_deref(), Some("invalid props"));
    }
}
