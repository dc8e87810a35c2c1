//! Substitute-character pool.

use std::collections::HashSet;

/// Characters that are always displayed as-is and never enter a pool.
#[inline]
#[must_use]
pub const fn is_literal(c: char) -> bool {
    c == ' ' || c == '\n'
}

/// Where substitute characters come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolMode {
    /// The target text's own non-whitespace characters.
    Original,
    /// An externally supplied charset.
    Explicit,
}

impl PoolMode {
    #[must_use]
    pub const fn from_flag(use_original_chars_only: bool) -> Self {
        if use_original_chars_only {
            Self::Original
        } else {
            Self::Explicit
        }
    }
}

/// Ordered candidate characters for scrambling.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    /// Derive the pool for `text`.
    ///
    /// In [`PoolMode::Original`] the charset is ignored and the text's
    /// characters are de-duplicated in first-seen order. In
    /// [`PoolMode::Explicit`] the charset is taken in order minus spaces and
    /// newlines; repeated characters weight the draw toward themselves.
    #[must_use]
    pub fn derive(text: &str, mode: PoolMode, charset: &str) -> Self {
        let chars = match mode {
            PoolMode::Original => {
                let mut seen = HashSet::new();
                text.chars()
                    .filter(|&c| !is_literal(c) && seen.insert(c))
                    .collect()
            }
            PoolMode::Explicit => charset.chars().filter(|&c| !is_literal(c)).collect(),
        };
        Self { chars }
    }

    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<char> {
        self.chars.get(idx).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_original_dedups_in_first_seen_order() {
        let pool = CharacterPool::derive("hello world\nhi", PoolMode::Original, "XYZ");
        assert_eq!(pool.chars(), &['h', 'e', 'l', 'o', 'w', 'r', 'd', 'i']);
    }

    #[test]
    fn test_original_ignores_charset_and_whitespace() {
        let pool = CharacterPool::derive(" \n \n", PoolMode::Original, "ABC");
        assert!(pool.is_empty());
    }

    #[test]
    fn test_explicit_keeps_duplicates() {
        let pool = CharacterPool::derive("ignored", PoolMode::Explicit, "0011#");
        assert_eq!(pool.chars(), &['0', '0', '1', '1', '#']);
        assert_eq!(pool.len(), 5);
        assert_eq!(pool.get(4), Some('#'));
        assert_eq!(pool.get(5), None);
    }

    #[test]
    fn test_explicit_drops_spaces_and_newlines() {
        let pool = CharacterPool::derive("ABCD", PoolMode::Explicit, "a \na\n b");
        assert_eq!(pool.chars(), &['a', 'a', 'b']);
        assert!(CharacterPool::derive("ABCD", PoolMode::Explicit, " \n").is_empty());
    }

    #[test]
    fn test_explicit_empty_charset() {
        assert!(CharacterPool::derive("text", PoolMode::Explicit, "").is_empty());
    }

    #[test]
    fn test_mode_from_flag() {
        assert_eq!(PoolMode::from_flag(true), PoolMode::Original);
        assert_eq!(PoolMode::from_flag(false), PoolMode::Explicit);
    }
}
