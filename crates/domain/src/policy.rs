//! Token validation rules

use crate::model::Token;

/// Validation rules applied to every token before permutation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenPolicy {
    /// Maximum token length; `None` accepts any length
    pub max_len: Option<usize>,
}

impl TokenPolicy {
    pub fn new(max_len: Option<usize>) -> Self {
        Self { max_len }
    }

    /// Validate a raw token, checking in order: empty, non-letter,
    /// duplicate letter, length cap. The first violation wins.
    pub fn validate(&self, raw: Option<&str>) -> Result<Token, TokenError> {
        let raw = match raw {
            Some(value) if !value.is_empty() => value,
            _ => return Err(TokenError::EmptyInput),
        };

        if let Some((position, ch)) = raw
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_alphabetic())
        {
            return Err(TokenError::InvalidCharacter { ch, position });
        }

        // 26 letters, so a bitmask tracks what has been seen
        let mut seen = 0u32;
        for ch in raw.chars() {
            let bit = 1u32 << (ch.to_ascii_lowercase() as u32 - 'a' as u32);
            if seen & bit != 0 {
                return Err(TokenError::DuplicateLetter { ch });
            }
            seen |= bit;
        }

        if let Some(max) = self.max_len {
            if raw.len() > max {
                return Err(TokenError::InputTooLong {
                    len: raw.len(),
                    max,
                });
            }
        }

        Ok(Token::new_unchecked(raw))
    }
}

/// Token validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Input must not be empty")]
    EmptyInput,
    #[error("Input must contain only letters (a-z, A-Z): found '{ch}' at position {position}")]
    InvalidCharacter { ch: char, position: usize },
    #[error("Input must contain only distinct letters: '{ch}' is repeated")]
    DuplicateLetter { ch: char },
    #[error("Input is too long: {len} letters (max {max})")]
    InputTooLong { len: usize, max: usize },
}

impl TokenError {
    /// Stable category name, used in JSON output and exit reporting
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty",
            Self::InvalidCharacter { .. } => "non-letter",
            Self::DuplicateLetter { .. } => "duplicate-letter",
            Self::InputTooLong { .. } => "too-long",
        }
    }
}
