//! Built-in alphabets, separators and word list.
//!
//! "Ambiguous" characters are the ones easily confused when read back
//! (`i l o`, `I O`, `0 1`). The default alphabets leave them out.

/// Lowercase letters without look-alikes.
pub const LOWER: &str = "abcdefghjkmnpqrstuvwxyz";
/// All lowercase letters.
pub const LOWER_AMBIGUOUS: &str = "abcdefghijklmnopqrstuvwxyz";
/// Uppercase letters without look-alikes.
pub const UPPER: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ";
/// All uppercase letters.
pub const UPPER_AMBIGUOUS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Digits without look-alikes.
pub const NUMERIC: &str = "23456789";
/// All digits.
pub const NUMERIC_AMBIGUOUS: &str = "0123456789";
/// Special characters.
pub const SPECIAL: &str = "!#$%&*+-=?@^";

/// Default password alphabet: unambiguous letters and digits.
pub const ALPHABET_DEFAULT: &str = concat!(
    "abcdefghjkmnpqrstuvwxyz",
    "ABCDEFGHJKLMNPQRSTUVWXYZ",
    "23456789"
);
/// Default password alphabet including look-alike characters.
pub const ALPHABET_DEFAULT_AMBIGUOUS: &str = concat!(
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "0123456789"
);

pub const SEPARATOR_SPACE: char = ' ';
pub const SEPARATOR_DASH: char = '-';
pub const SEPARATOR_UNDERSCORE: char = '_';
pub const SEPARATOR_DOT: char = '.';
/// Default passphrase word separator.
pub const SEPARATOR_DEFAULT: char = SEPARATOR_SPACE;

static WORD_LIST_DEFAULT: &str = include_str!("wordlists/default.txt");

/// Returns the built-in word list: 256 distinct lowercase words, so
/// every word costs exactly 8 bits.
pub fn default_words() -> impl Iterator<Item = &'static str> {
    WORD_LIST_DEFAULT
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// Character classes to combine into a password alphabet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharsetOptions {
    pub lowercase: bool,
    pub uppercase: bool,
    pub numeric: bool,
    pub special: bool,
    /// Include look-alike characters in the selected classes.
    pub ambiguous: bool,
}

impl CharsetOptions {
    /// Builds the alphabet for the selected classes.
    ///
    /// With no class selected the default alphabet is returned, with or
    /// without look-alikes depending on `ambiguous`.
    pub fn build(&self) -> String {
        let mut alphabet = String::new();

        if self.lowercase {
            alphabet.push_str(if self.ambiguous { LOWER_AMBIGUOUS } else { LOWER });
        }
        if self.uppercase {
            alphabet.push_str(if self.ambiguous { UPPER_AMBIGUOUS } else { UPPER });
        }
        if self.numeric {
            alphabet.push_str(if self.ambiguous { NUMERIC_AMBIGUOUS } else { NUMERIC });
        }
        if self.special {
            alphabet.push_str(SPECIAL);
        }

        if alphabet.is_empty() {
            let default = if self.ambiguous {
                ALPHABET_DEFAULT_AMBIGUOUS
            } else {
                ALPHABET_DEFAULT
            };
            alphabet.push_str(default);
        }

        alphabet
    }
}
