use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DictionaryError;

/// Separator between the two languages of a dictionary type name
pub const PAIR_SEPARATOR: char = '-';

/// Source and target language of a dictionary
///
/// The pair is fixed once a dictionary exists. Its `From-To` rendering is
/// both the registry's type name and the stem of the dictionary's files.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguagePair {
    /// Language the words are written in
    pub from: String,
    /// Language the translations are written in
    pub to: String,
}

impl LanguagePair {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Type name under which the dictionary is registered (`From-To`)
    pub fn type_name(&self) -> String {
        format!("{}{}{}", self.from, PAIR_SEPARATOR, self.to)
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

impl FromStr for LanguagePair {
    type Err = DictionaryError;

    /// Parse `From-To`. Exactly one separator and two tokens usable as
    /// a file name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let tokens: Vec<&str> = trimmed.split(PAIR_SEPARATOR).map(str::trim).collect();

        match tokens.as_slice() {
            [from, to] if is_plain_name(from) && is_plain_name(to) => Ok(Self::new(*from, *to)),
            _ => Err(DictionaryError::InvalidFormat(format!(
                "'{}' is not of the form 'From{}To'",
                s, PAIR_SEPARATOR
            ))),
        }
    }
}

// Tokens become file stems inside the cache directory
fn is_plain_name(token: &str) -> bool {
    !token.is_empty() && !token.contains(['/', '\\']) && token != "." && token != ".."
}
