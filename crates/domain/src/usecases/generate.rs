//! Anagram generation use case

use std::collections::BTreeSet;

use crate::{
    model::{AnagramSet, Token},
    policy::{TokenError, TokenPolicy},
};

/// Generates every anagram of a token of distinct letters
#[derive(Debug, Clone, Default)]
pub struct AnagramGenerator {
    policy: TokenPolicy,
}

impl AnagramGenerator {
    /// Generator without a length cap
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator that rejects tokens longer than `max_len`
    pub fn with_max_len(max_len: usize) -> Self {
        Self::with_policy(TokenPolicy::new(Some(max_len)))
    }

    pub fn with_policy(policy: TokenPolicy) -> Self {
        Self { policy }
    }

    /// Validate a token without generating anything
    pub fn validate(&self, token: &str) -> Result<Token, TokenError> {
        self.policy.validate(Some(token))
    }

    /// Generate all anagrams of `token`, sorted ascending
    pub fn generate(&self, token: &str) -> Result<AnagramSet, TokenError> {
        self.generate_from(Some(token))
    }

    /// Like [`Self::generate`], treating an absent token as empty input
    pub fn generate_from(&self, token: Option<&str>) -> Result<AnagramSet, TokenError> {
        let token = self.policy.validate(token)?;
        Ok(self.permutations_of(token))
    }

    /// Expand a validated token; infallible
    pub fn permutations_of(&self, token: Token) -> AnagramSet {
        let letters = token.chars();
        let mut found = BTreeSet::new();
        let mut prefix = String::with_capacity(letters.len());

        permute(&mut prefix, &letters, &mut found);

        tracing::debug!(
            token = %token,
            count = found.len(),
            "Generated anagrams"
        );

        AnagramSet::from_sorted(token, found.into_iter().collect())
    }
}

/// Prefix/suffix expansion: move each remaining letter onto the prefix in
/// turn and recurse on what is left. The set merges any repeats and keeps the
/// results ordered.
fn permute(prefix: &mut String, remaining: &[char], found: &mut BTreeSet<String>) {
    if remaining.is_empty() {
        found.insert(prefix.clone());
        return;
    }

    for (i, &ch) in remaining.iter().enumerate() {
        let mut rest = Vec::with_capacity(remaining.len() - 1);
        rest.extend_from_slice(&remaining[..i]);
        rest.extend_from_slice(&remaining[i + 1..]);

        prefix.push(ch);
        permute(prefix, &rest, found);
        prefix.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expected_count;

    fn sorted_letters(s: &str) -> Vec<char> {
        let mut chars: Vec<char> = s.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn test_generate_three_letters() {
        let result = AnagramGenerator::new().generate("abc").unwrap();
        assert_eq!(
            result.anagrams(),
            ["abc", "acb", "bac", "bca", "cab", "cba"]
        );
    }

    #[test]
    fn test_generate_single_letter() {
        let result = AnagramGenerator::new().generate("a").unwrap();
        assert_eq!(result.anagrams(), ["a"]);
    }

    #[test]
    fn test_generate_two_letters() {
        let result = AnagramGenerator::new().generate("xy").unwrap();
        assert_eq!(result.anagrams(), ["xy", "yx"]);
    }

    #[test]
    fn test_generate_preserves_casing() {
        let result = AnagramGenerator::new().generate("aB").unwrap();
        // 'B' (0x42) sorts before 'a' (0x61)
        assert_eq!(result.anagrams(), ["Ba", "aB"]);
    }

    #[test]
    fn test_generate_count_is_factorial() {
        let generator = AnagramGenerator::new();
        for token in ["a", "ab", "abc", "abcd", "abcde", "abcdef"] {
            let result = generator.generate(token).unwrap();
            assert_eq!(result.len() as u64, expected_count(token.len()).unwrap());
        }
    }

    #[test]
    fn test_generate_sorted_unique_permutations() {
        let token = "dCbAe";
        let result = AnagramGenerator::new().generate(token).unwrap();

        assert!(result.anagrams().windows(2).all(|w| w[0] < w[1]));
        for anagram in result.anagrams() {
            assert_eq!(anagram.len(), token.len());
            assert_eq!(sorted_letters(anagram), sorted_letters(token));
        }
    }

    #[test]
    fn test_generate_is_repeatable() {
        let generator = AnagramGenerator::new();
        let first = generator.generate("wxyz").unwrap();
        let _ = generator.generate("abc").unwrap();
        let second = generator.generate("wxyz").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_empty_input() {
        let generator = AnagramGenerator::new();
        assert_eq!(generator.generate(""), Err(TokenError::EmptyInput));
        assert_eq!(generator.generate_from(None), Err(TokenError::EmptyInput));
    }

    #[test]
    fn test_generate_non_letter() {
        let result = AnagramGenerator::new().generate("a1c");
        assert!(matches!(result, Err(TokenError::InvalidCharacter { ch: '1', .. })));
    }

    #[test]
    fn test_generate_duplicate_letters() {
        let generator = AnagramGenerator::new();
        assert!(matches!(
            generator.generate("aab"),
            Err(TokenError::DuplicateLetter { ch: 'a' })
        ));
        assert!(matches!(
            generator.generate("aAb"),
            Err(TokenError::DuplicateLetter { ch: 'A' })
        ));
    }

    #[test]
    fn test_generate_length_cap() {
        let generator = AnagramGenerator::with_max_len(4);
        assert_eq!(generator.generate("abcd").unwrap().len(), 24);
        assert_eq!(
            generator.generate("abcde"),
            Err(TokenError::InputTooLong { len: 5, max: 4 })
        );
    }

    #[test]
    fn test_uncapped_generator_accepts_long_tokens() {
        let generator = AnagramGenerator::new();
        assert!(generator.validate("abcdefghijklmnop").is_ok());
    }
}
