//! One substitution pass over the target text.

use crate::scramble::pool::{CharacterPool, PoolMode, is_literal};
use crate::scramble::reveal::RevealedSet;
use crate::scramble::rng::RandomSource;
use rand::seq::SliceRandom;

/// Produce the displayed string for the current revealed set.
///
/// Whitespace and revealed positions are emitted literally. In
/// [`PoolMode::Original`] the unrevealed characters are shuffled once and
/// dealt back to the unrevealed positions in document order, so the output
/// is always a permutation of the text. In [`PoolMode::Explicit`] every
/// unrevealed position draws independently from `pool`; an empty pool leaves
/// the position literal.
#[must_use]
pub fn render<R: RandomSource + ?Sized>(
    text: &[char],
    revealed: &RevealedSet,
    pool: &CharacterPool,
    mode: PoolMode,
    rng: &mut R,
) -> String {
    let is_hidden = |i: usize, c: char| !is_literal(c) && !revealed.contains(i);
    let mut out = String::with_capacity(text.len());

    match mode {
        PoolMode::Original => {
            let mut remaining: Vec<char> = text
                .iter()
                .enumerate()
                .filter(|&(i, &c)| is_hidden(i, c))
                .map(|(_, &c)| c)
                .collect();
            remaining.shuffle(rng);

            let mut dealt = remaining.into_iter();
            for (i, &c) in text.iter().enumerate() {
                if is_hidden(i, c) {
                    out.push(dealt.next().unwrap_or(c));
                } else {
                    out.push(c);
                }
            }
        }
        PoolMode::Explicit => {
            for (i, &c) in text.iter().enumerate() {
                let drawn = if is_hidden(i, c) {
                    pool.chars().choose(rng).copied()
                } else {
                    None
                };
                out.push(drawn.unwrap_or(c));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn sorted_glyphs(s: &str) -> Vec<char> {
        let mut v: Vec<char> = s.chars().filter(|&c| !is_literal(c)).collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_explicit_single_glyph_pool() {
        let text = chars("AB CD");
        let pool = CharacterPool::derive("", PoolMode::Explicit, "#");
        let mut rng = StdRng::seed_from_u64(0);
        let mut revealed = RevealedSet::new(text.len());
        revealed.insert(1);

        let out = render(&text, &revealed, &pool, PoolMode::Explicit, &mut rng);
        assert_eq!(out, "#B ##");
    }

    #[test]
    fn test_explicit_empty_pool_renders_literal() {
        let text = chars("SECRET");
        let pool = CharacterPool::derive("", PoolMode::Explicit, "");
        let mut rng = StdRng::seed_from_u64(0);
        let out = render(
            &text,
            &RevealedSet::new(text.len()),
            &pool,
            PoolMode::Explicit,
            &mut rng,
        );
        assert_eq!(out, "SECRET");
    }

    #[test]
    fn test_explicit_draws_only_from_pool() {
        let text = chars("hello world");
        let pool = CharacterPool::derive("", PoolMode::Explicit, "01");
        let mut rng = StdRng::seed_from_u64(3);
        let out = render(
            &text,
            &RevealedSet::new(text.len()),
            &pool,
            PoolMode::Explicit,
            &mut rng,
        );
        for (i, c) in out.chars().enumerate() {
            if i == 5 {
                assert_eq!(c, ' ');
            } else {
                assert!(c == '0' || c == '1', "unexpected {c:?} at {i}");
            }
        }
    }

    #[test]
    fn test_original_is_permutation() {
        let text = chars("decrypt me\nplease");
        let pool = CharacterPool::derive("decrypt me\nplease", PoolMode::Original, "");
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let out = render(
                &text,
                &RevealedSet::new(text.len()),
                &pool,
                PoolMode::Original,
                &mut rng,
            );
            assert_eq!(out.chars().count(), text.len());
            assert_eq!(sorted_glyphs(&out), sorted_glyphs("decrypt me\nplease"));
            assert_eq!(out.chars().nth(7), Some(' '));
            assert_eq!(out.chars().nth(10), Some('\n'));
        }
    }

    #[test]
    fn test_original_withholds_revealed_characters() {
        // "HI" with index 0 revealed: only 'I' is left to deal.
        let text = chars("HI");
        let pool = CharacterPool::derive("HI", PoolMode::Original, "");
        let mut revealed = RevealedSet::new(2);
        revealed.insert(0);
        let mut rng = StdRng::seed_from_u64(5);
        let out = render(&text, &revealed, &pool, PoolMode::Original, &mut rng);
        assert_eq!(out, "HI");
    }

    #[test]
    fn test_fully_revealed_is_literal() {
        let text = chars("a b");
        let pool = CharacterPool::derive("", PoolMode::Explicit, "xyz");
        let mut revealed = RevealedSet::new(3);
        for i in 0..3 {
            revealed.insert(i);
        }
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(render(&text, &revealed, &pool, PoolMode::Explicit, &mut rng), "a b");
    }

    #[test]
    fn test_empty_text() {
        let pool = CharacterPool::default();
        let mut rng = StdRng::seed_from_u64(0);
        let out = render(&[], &RevealedSet::new(0), &pool, PoolMode::Original, &mut rng);
        assert!(out.is_empty());
    }
}
