//! Revealed-position bookkeeping and the next-index policy.

use crate::options::RevealDirection;
use crate::scramble::pool::is_literal;

/// Set of positions fixed to their original character for the current run.
///
/// Positions are indices into the target text's `char`s. A sequential run
/// steps over every position once; whitespace positions consume their step
/// without any visible change, and [`RevealedSet::glyph_indices`] reports
/// only the positions that carry a scrambled glyph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealedSet {
    flags: Vec<bool>,
    count: usize,
}

impl RevealedSet {
    /// An empty set over a text of `text_len` positions.
    #[must_use]
    pub fn new(text_len: usize) -> Self {
        Self {
            flags: vec![false; text_len],
            count: 0,
        }
    }

    /// Number of positions this set can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.flags.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Every position has been revealed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.count == self.flags.len()
    }

    #[must_use]
    pub fn contains(&self, idx: usize) -> bool {
        self.flags.get(idx).copied().unwrap_or(false)
    }

    /// Insert a position. Returns `false` if it was out of range or already
    /// present.
    pub fn insert(&mut self, idx: usize) -> bool {
        match self.flags.get_mut(idx) {
            Some(flag) if !*flag => {
                *flag = true;
                self.count += 1;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.flags.fill(false);
        self.count = 0;
    }

    /// First position not yet revealed, in ascending order.
    #[must_use]
    pub fn first_unrevealed(&self) -> Option<usize> {
        self.flags.iter().position(|&f| !f)
    }

    /// Revealed positions in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(i, &f)| f.then_some(i))
    }

    /// Revealed positions of `text` that are not whitespace.
    #[must_use]
    pub fn glyph_indices(&self, text: &[char]) -> Vec<usize> {
        self.iter()
            .filter(|&i| text.get(i).is_some_and(|&c| !is_literal(c)))
            .collect()
    }
}

/// Next position to reveal.
///
/// Callers only ask while `revealed.len() < text_len`. `Center` alternates
/// outward from `text_len / 2`, right side first, and falls back to the
/// lowest unrevealed index whenever its candidate is out of range or taken.
#[must_use]
pub fn next_index(text_len: usize, direction: RevealDirection, revealed: &RevealedSet) -> usize {
    let size = revealed.len();
    let candidate = match direction {
        RevealDirection::Start => Some(size),
        RevealDirection::End => text_len.checked_sub(1 + size),
        RevealDirection::Center => {
            let middle = text_len / 2;
            let offset = size / 2;
            if size % 2 == 0 {
                Some(middle + offset)
            } else {
                middle.checked_sub(offset + 1)
            }
        }
    };

    match candidate {
        Some(idx) if idx < text_len && !revealed.contains(idx) => idx,
        _ => revealed.first_unrevealed().unwrap_or(0),
    }
}
