//! Word casing policies applied before deduplication.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Casing transform applied to every word of a word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Casing {
    /// All letters lowercase.
    #[default]
    Lower,
    /// All letters uppercase.
    Upper,
    /// First letter of each word uppercase, the rest untouched.
    Title,
    /// Words kept exactly as provided.
    None,
}

impl Casing {
    /// Applies the transform to a single word.
    pub fn apply(self, word: &str) -> String {
        match self {
            Casing::Lower => word.to_lowercase(),
            Casing::Upper => word.to_uppercase(),
            Casing::Title => title_case(word),
            Casing::None => word.to_owned(),
        }
    }

    /// Returns the selector name accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Casing::Lower => "lower",
            Casing::Upper => "upper",
            Casing::Title => "title",
            Casing::None => "none",
        }
    }
}

impl fmt::Display for Casing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Casing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lower" => Ok(Casing::Lower),
            "upper" => Ok(Casing::Upper),
            "title" => Ok(Casing::Title),
            "none" => Ok(Casing::None),
            other => Err(Error::InvalidCasingPolicy(other.to_owned())),
        }
    }
}

/// Numeric casing selectors, in declaration order.
impl TryFrom<u8> for Casing {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Casing::Lower),
            1 => Ok(Casing::Upper),
            2 => Ok(Casing::Title),
            3 => Ok(Casing::None),
            other => Err(Error::InvalidCasingPolicy(other.to_string())),
        }
    }
}

/// Uppercases the first letter of every word, leaving the remaining
/// letters as they are.
///
/// A word begins after any separator. ASCII letters, digits and `_`
/// are word characters; outside ASCII, letters and digits are word
/// characters and whitespace separates. This is a simple per-character
/// transform, not a locale-aware one.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_separator = true;

    for c in s.chars() {
        if prev_separator {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_separator = is_separator(c);
    }

    out
}

fn is_separator(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    if c.is_alphanumeric() {
        return false;
    }
    c.is_whitespace()
}
