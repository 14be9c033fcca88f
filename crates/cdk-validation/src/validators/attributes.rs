//! Object attribute set validator

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::trace;

use crate::options::AttributeOptions;

/// Anything that exposes a set of named attributes
///
/// The iteration order of [`attribute_keys`](Self::attribute_keys) decides the
/// order in which unknown attributes are reported, so ordered maps give
/// deterministic output and `HashMap` does not.
pub trait AttributeKeys {
    /// Attribute names in iteration order
    fn attribute_keys(&self) -> Vec<&str>;

    /// Whether `name` is present
    fn has_attribute(&self, name: &str) -> bool {
        self.attribute_keys().iter().any(|key| *key == name)
    }
}

impl AttributeKeys for Map<String, Value> {
    fn attribute_keys(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.contains_key(name)
    }
}

/// Non-object values have no attributes.
impl AttributeKeys for Value {
    fn attribute_keys(&self) -> Vec<&str> {
        match self {
            Value::Object(map) => map.attribute_keys(),
            _ => Vec::new(),
        }
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.as_object().is_some_and(|map| map.contains_key(name))
    }
}

impl<K, V, S> AttributeKeys for IndexMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    fn attribute_keys(&self) -> Vec<&str> {
        self.keys().map(|key| <K as Borrow<str>>::borrow(key)).collect()
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.contains_key(name)
    }
}

impl<K, V> AttributeKeys for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
{
    fn attribute_keys(&self) -> Vec<&str> {
        self.keys().map(|key| <K as Borrow<str>>::borrow(key)).collect()
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.contains_key(name)
    }
}

impl<K, V, S> AttributeKeys for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    fn attribute_keys(&self) -> Vec<&str> {
        self.keys().map(|key| <K as Borrow<str>>::borrow(key)).collect()
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.contains_key(name)
    }
}

/// Validate that `input` holds every mandatory attribute and nothing outside
/// the mandatory and optional sets.
///
/// Missing mandatory attributes are reported first, in the order they are
/// listed in `options`, followed by unknown attributes in the input's
/// iteration order. Both kinds compose their message as
/// `prefix + (message or default)`.
pub fn validate_object_attributes<O>(input: &O, options: &AttributeOptions) -> Vec<String>
where
    O: AttributeKeys + ?Sized,
{
    let mut errors = Vec::new();

    for name in &options.mandatory_attributes {
        if !input.has_attribute(name) {
            errors.push(
                options
                    .messages
                    .compose(|| format!("missing mandatory attribute: {name}")),
            );
        }
    }

    for key in input.attribute_keys() {
        if !options.allows(key) {
            errors.push(
                options
                    .messages
                    .compose(|| format!("contains unknown attribute: {key}")),
            );
        }
    }

    trace!(errors = errors.len(), "object attributes checked");
    errors
}
