//! Regular expression validator

use std::fmt;
use std::str::FromStr;

use regex::{Regex, RegexBuilder};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use crate::error::ConfigurationError;
use crate::options::PatternOptions;

/// Flags accepted by [`Pattern::with_flags`]. `g` and `u` are accepted and
/// have no effect: matching is stateless and always Unicode-aware.
const SUPPORTED_FLAGS: &str = "gimsux";

/// Literal form of the empty pattern, which would otherwise render as `//`
const EMPTY_SOURCE: &str = "(?:)";

/// A compiled regular expression that remembers its literal form
///
/// Renders as `/source/flags`, which is what the default error message of
/// [`validate_reg_exp`] embeds.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    source: String,
    flags: String,
}

impl Pattern {
    /// Compile a pattern without flags
    pub fn new(source: &str) -> Result<Self, ConfigurationError> {
        Self::with_flags(source, "")
    }

    /// Compile a pattern with single-letter flags
    ///
    /// - `i`: case insensitive
    /// - `m`: `^` and `$` match at line boundaries
    /// - `s`: `.` matches `\n`
    /// - `x`: ignore whitespace and allow `#` comments
    pub fn with_flags(source: &str, flags: &str) -> Result<Self, ConfigurationError> {
        let mut builder = RegexBuilder::new(source);
        for (index, flag) in flags.char_indices() {
            if flags[..index].contains(flag) {
                debug!(flag = %flag, "rejecting repeated pattern flag");
                return Err(ConfigurationError::DuplicateFlag { flag });
            }
            match flag {
                'i' => builder.case_insensitive(true),
                'm' => builder.multi_line(true),
                's' => builder.dot_matches_new_line(true),
                'x' => builder.ignore_whitespace(true),
                'g' | 'u' => &mut builder,
                other => {
                    debug!(flag = %other, supported = SUPPORTED_FLAGS, "rejecting pattern flag");
                    return Err(ConfigurationError::UnsupportedFlag { flag: other });
                }
            };
        }

        let regex = builder
            .build()
            .map_err(|source_error| ConfigurationError::InvalidPattern {
                pattern: source.to_string(),
                source: source_error,
            })?;

        Ok(Self {
            regex,
            source: source.to_string(),
            flags: flags.to_string(),
        })
    }

    /// Parse a `/source/flags` literal
    ///
    /// Escaped delimiters (`\/`) in the source are unescaped, and `/(?:)/`
    /// yields the empty pattern, so any rendered pattern parses back to an
    /// equal one.
    pub fn from_literal(literal: &str) -> Result<Self, ConfigurationError> {
        let malformed = || ConfigurationError::MalformedLiteral {
            literal: literal.to_string(),
        };

        let body = literal.strip_prefix('/').ok_or_else(malformed)?;
        let end = body.rfind('/').ok_or_else(malformed)?;
        let (source, flags) = (&body[..end], &body[end + 1..]);
        if source.is_empty() {
            return Err(malformed());
        }

        let source = unescape_delimiters(source);
        if source == EMPTY_SOURCE {
            return Self::with_flags("", flags);
        }
        Self::with_flags(&source, flags)
    }

    /// The pattern source as given, without delimiters
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The flags as given
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// The compiled expression
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    /// Whether the pattern matches anywhere in `text`
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Escape every `/` that is not already escaped so the literal form can be
/// parsed back.
fn escape_delimiters(source: &str) -> String {
    let mut escaped = String::with_capacity(source.len());
    let mut after_backslash = false;
    for ch in source.chars() {
        if ch == '/' && !after_backslash {
            escaped.push('\\');
        }
        escaped.push(ch);
        after_backslash = ch == '\\' && !after_backslash;
    }
    escaped
}

/// Inverse of [`escape_delimiters`]: drop the backslash of every `\/`,
/// leaving other escapes untouched.
fn unescape_delimiters(source: &str) -> String {
    let mut unescaped = String::with_capacity(source.len());
    let mut chars = source.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            unescaped.push(ch);
            continue;
        }
        match chars.next() {
            Some('/') => unescaped.push('/'),
            Some(next) => {
                unescaped.push('\\');
                unescaped.push(next);
            }
            None => unescaped.push('\\'),
        }
    }
    unescaped
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.source.is_empty() {
            write!(f, "/{EMPTY_SOURCE}/{}", self.flags)
        } else {
            write!(f, "/{}/{}", escape_delimiters(&self.source), self.flags)
        }
    }
}

/// Patterns are equal when their literal forms are, so `a\/b` and `a/b`
/// compare equal.
impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Pattern {}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self {
            source: regex.as_str().to_string(),
            flags: String::new(),
            regex,
        }
    }
}

impl FromStr for Pattern {
    type Err = ConfigurationError;

    fn from_str(literal: &str) -> Result<Self, Self::Err> {
        Self::from_literal(literal)
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let literal = String::deserialize(deserializer)?;
        Self::from_literal(&literal).map_err(de::Error::custom)
    }
}

/// Validate that `pattern` matches somewhere in `value`.
///
/// Produces at most one message; the default text is
/// `must match regExp /source/flags`.
pub fn validate_reg_exp(value: &str, pattern: &Pattern, options: &PatternOptions) -> Vec<String> {
    let mut errors = Vec::new();
    if !pattern.is_match(value) {
        errors.push(options.compose(|| format!("must match regExp {pattern}")));
    }
    trace!(%pattern, errors = errors.len(), "pattern checked");
    errors
}
