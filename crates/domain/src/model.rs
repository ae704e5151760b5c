//! Domain models and value objects

use serde::{Serialize, Serializer, ser::SerializeStruct};
use std::fmt;

/// A validated input token: non-empty, ASCII letters only, no repeated letter
/// (case-insensitively)
///
/// Only [`crate::policy::TokenPolicy::validate`] can build one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    pub(crate) fn new_unchecked(value: &str) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters (every letter is one byte)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn chars(&self) -> Vec<char> {
        self.0.chars().collect()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// All anagrams of a token, sorted by code point with no duplicates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnagramSet {
    token: Token,
    anagrams: Vec<String>,
}

impl AnagramSet {
    /// Build a set from permutations that are already sorted and unique
    pub(crate) fn from_sorted(token: Token, anagrams: Vec<String>) -> Self {
        debug_assert!(anagrams.windows(2).all(|w| w[0] < w[1]));
        Self { token, anagrams }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn anagrams(&self) -> &[String] {
        &self.anagrams
    }

    pub fn len(&self) -> usize {
        self.anagrams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anagrams.is_empty()
    }
}

impl Serialize for AnagramSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AnagramSet", 3)?;
        state.serialize_field("token", self.token.as_str())?;
        state.serialize_field("count", &self.anagrams.len())?;
        state.serialize_field("anagrams", &self.anagrams)?;
        state.end()
    }
}

/// A raw token read from a token source, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenEntry {
    /// 1-based position in the source (line number for files)
    pub line: usize,
    /// Token text with surrounding whitespace removed
    pub value: String,
}

impl TokenEntry {
    pub fn new(line: usize, value: impl Into<String>) -> Self {
        Self {
            line,
            value: value.into(),
        }
    }
}
