//! Fuzz target for a complete reveal run.
//!
//! Any text and charset must settle back to the literal text within the
//! tick bound for its mode, keeping its line structure on every tick.

#![no_main]

use arbitrary::Arbitrary;
use decrypt_text::{DecryptOptions, RevealDirection, RevealEngine};
use libfuzzer_sys::fuzz_target;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;

#[derive(Arbitrary, Debug)]
struct Run {
    text: String,
    charset: String,
    direction: u8,
    sequential: bool,
    original_only: bool,
    max_iterations: u8,
    seed: u64,
}

fuzz_target!(|run: Run| {
    let direction = match run.direction % 3 {
        0 => RevealDirection::Start,
        1 => RevealDirection::End,
        _ => RevealDirection::Center,
    };
    let opts = DecryptOptions::new(run.text.as_str())
        .with_characters(run.charset.as_str())
        .with_direction(direction)
        .with_sequential(run.sequential)
        .with_original_chars_only(run.original_only)
        .with_max_iterations(u32::from(run.max_iterations));
    let mut engine = RevealEngine::with_rng(opts, StdRng::seed_from_u64(run.seed));

    let bound = if run.sequential {
        run.text.chars().count()
    } else {
        usize::from(run.max_iterations.max(1))
    };

    let lines = run.text.split('\n').count();
    engine.start(Instant::now());
    let mut ticks = 0;
    while engine.is_scrambling() {
        engine.tick();
        ticks += 1;
        assert!(ticks <= bound, "run exceeded {bound} ticks");
        assert_eq!(engine.displayed().chars().count(), run.text.chars().count());
        assert_eq!(engine.displayed().split('\n').count(), lines);
        assert_eq!(engine.frame().lines.len(), lines);
    }
    assert_eq!(engine.displayed(), run.text);
});
