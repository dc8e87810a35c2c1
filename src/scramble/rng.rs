//! Injectable random source.
//!
//! Every [`rand::RngCore`] is a [`RandomSource`], so hosts pass
//! `StdRng::from_entropy()` in production and `StdRng::seed_from_u64(..)`
//! when a reproducible scramble sequence is needed. Sampling and shuffling go
//! through [`rand::seq::SliceRandom`].

use rand::RngCore;

/// Random generator driving substitution and shuffling.
pub trait RandomSource: RngCore {}

impl<R: RngCore + ?Sized> RandomSource for R {}
