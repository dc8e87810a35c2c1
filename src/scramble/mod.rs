//! Scramble primitives: character pool, reveal ordering, substitution pass.
//!
//! These are pure building blocks; [`RevealEngine`](crate::RevealEngine)
//! drives them tick by tick.

pub mod pool;
pub mod render;
pub mod reveal;
pub mod rng;

pub use pool::{CharacterPool, PoolMode, is_literal};
pub use render::render;
pub use reveal::{RevealedSet, next_index};
pub use rng::RandomSource;
