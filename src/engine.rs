//! The reveal engine: an explicit state machine over scramble ticks.
//!
//! # States
//!
//! ```text
//!            start()                       tick(): set complete
//!   Idle ───────────────▶ ScramblingSequential ─────────────────▶ Idle
//!     ▲                                                             ▲
//!     │      start()                       tick(): max iterations   │
//!     └─────────────────▶ ScramblingIterative ─────────────────────┘
//!
//!   stop() / reconfigure() / drop: any state ──▶ Idle (timer cleared)
//! ```
//!
//! All mutation goes through engine methods. The timer is cooperative: the
//! host calls [`RevealEngine::advance`] with its clock and the engine runs at
//! most one tick per call.
//!
//! # Example
//!
//! ```
//! use decrypt_text::{DecryptOptions, RevealEngine};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use std::time::Instant;
//!
//! let opts = DecryptOptions::new("OK").with_characters("#");
//! let mut engine = RevealEngine::with_rng(opts, StdRng::seed_from_u64(1));
//! engine.start(Instant::now());
//! engine.tick();
//! assert_eq!(engine.displayed(), "O#");
//! engine.tick();
//! assert_eq!(engine.displayed(), "OK");
//! assert!(!engine.is_scrambling());
//! ```

use crate::event::{LogLevel, emit_event, emit_log, names};
use crate::layout::{DisplayFrame, LineLayout};
use crate::options::DecryptOptions;
use crate::scramble::{self, CharacterPool, PoolMode, RandomSource, RevealedSet};
use crate::timer::TickTimer;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

/// Animation state of one engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationState {
    /// Literal text, empty revealed set, no timer.
    #[default]
    Idle,
    /// One more position revealed per tick.
    ScramblingSequential,
    /// Whole text re-scrambled per tick for a bounded number of ticks.
    ScramblingIterative,
}

impl AnimationState {
    #[must_use]
    pub const fn is_scrambling(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The engine was idle; nothing changed.
    Inactive,
    /// A sequential step revealed `index`. `settled` is set on the step that
    /// completed the run.
    Revealed { index: usize, settled: bool },
    /// An iterative pass; `iteration` counts from 1.
    Scrambled { iteration: u32, settled: bool },
}

impl TickOutcome {
    /// Whether this tick ended the run.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        match self {
            Self::Inactive => false,
            Self::Revealed { settled, .. } | Self::Scrambled { settled, .. } => *settled,
        }
    }

    #[must_use]
    pub const fn did_tick(&self) -> bool {
        !matches!(self, Self::Inactive)
    }
}

/// Scramble/reveal engine for one text.
pub struct RevealEngine<R: RandomSource = StdRng> {
    options: DecryptOptions,
    text: Vec<char>,
    layout: LineLayout,
    pool: CharacterPool,
    mode: PoolMode,
    revealed: RevealedSet,
    state: AnimationState,
    iteration: u32,
    ticks: u64,
    displayed: String,
    timer: TickTimer,
    rng: R,
}

impl RevealEngine<StdRng> {
    /// Create an engine seeded from system entropy.
    #[must_use]
    pub fn new(options: DecryptOptions) -> Self {
        Self::with_rng(options, StdRng::from_entropy())
    }
}

impl<R: RandomSource> RevealEngine<R> {
    /// Create an engine with an explicit random source.
    pub fn with_rng(options: DecryptOptions, rng: R) -> Self {
        let text: Vec<char> = options.text.chars().collect();
        let mode = PoolMode::from_flag(options.use_original_chars_only);
        let pool = CharacterPool::derive(&options.text, mode, &options.characters);
        Self {
            layout: LineLayout::new(&text),
            revealed: RevealedSet::new(text.len()),
            displayed: options.text.clone(),
            timer: TickTimer::new(options.speed),
            text,
            pool,
            mode,
            state: AnimationState::Idle,
            iteration: 0,
            ticks: 0,
            options,
            rng,
        }
    }

    #[must_use]
    pub fn options(&self) -> &DecryptOptions {
        &self.options
    }

    #[must_use]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    #[must_use]
    pub fn is_scrambling(&self) -> bool {
        self.state.is_scrambling()
    }

    /// The string to paint right now.
    #[must_use]
    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    /// The untouched target text, independent of animation state.
    #[must_use]
    pub fn accessible_text(&self) -> &str {
        &self.options.text
    }

    #[must_use]
    pub fn text_len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub fn revealed(&self) -> &RevealedSet {
        &self.revealed
    }

    /// Revealed positions that carry a glyph (whitespace excluded).
    #[must_use]
    pub fn revealed_glyphs(&self) -> Vec<usize> {
        self.revealed.glyph_indices(&self.text)
    }

    #[must_use]
    pub fn pool(&self) -> &CharacterPool {
        &self.pool
    }

    /// Iterative passes completed in the current run.
    #[must_use]
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    /// Ticks executed in the current run.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The displayed string split into classified line segments.
    #[must_use]
    pub fn frame(&self) -> DisplayFrame {
        DisplayFrame::build(
            &self.layout,
            &self.displayed,
            &self.revealed,
            self.is_scrambling(),
        )
    }

    /// Begin a run. Restarts from scratch if one is already in progress.
    ///
    /// Returns `false` when there is nothing to animate (empty text).
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_scrambling() {
            self.reset();
        }
        if self.text.is_empty() {
            emit_log(LogLevel::Debug, "decrypt: empty text, nothing to animate");
            return false;
        }

        self.revealed.clear();
        self.iteration = 0;
        self.ticks = 0;
        self.state = if self.options.sequential {
            AnimationState::ScramblingSequential
        } else {
            AnimationState::ScramblingIterative
        };
        self.timer.arm(now);

        emit_log(
            LogLevel::Debug,
            &format!(
                "decrypt: {:?} over {} chars every {:?}",
                self.state,
                self.text.len(),
                self.options.speed
            ),
        );
        emit_event(
            names::START,
            &format!(
                "{{\"len\":{},\"sequential\":{}}}",
                self.text.len(),
                self.options.sequential
            ),
        );
        true
    }

    /// Cancel any run and show the literal text. Safe to call when idle.
    pub fn stop(&mut self) {
        if self.is_scrambling() {
            emit_log(LogLevel::Debug, "decrypt: stopped");
            emit_event(names::STOP, &format!("{{\"ticks\":{}}}", self.ticks));
        }
        self.reset();
    }

    /// Run the pending tick if it is due at `now`.
    pub fn advance(&mut self, now: Instant) -> TickOutcome {
        if !self.is_scrambling() || !self.timer.poll(now) {
            return TickOutcome::Inactive;
        }
        self.tick()
    }

    /// Time until the next tick is due, `None` when idle.
    #[must_use]
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        if self.is_scrambling() {
            self.timer.time_until_due(now)
        } else {
            None
        }
    }

    /// Run one tick immediately, ignoring the timer.
    pub fn tick(&mut self) -> TickOutcome {
        match self.state {
            AnimationState::Idle => TickOutcome::Inactive,
            AnimationState::ScramblingSequential => self.tick_sequential(),
            AnimationState::ScramblingIterative => self.tick_iterative(),
        }
    }

    fn tick_sequential(&mut self) -> TickOutcome {
        let len = self.text.len();
        if self.revealed.len() >= len {
            // Only reachable if a run was started over a complete set.
            self.settle();
            return TickOutcome::Inactive;
        }

        let index = scramble::next_index(len, self.options.reveal_direction, &self.revealed);
        self.revealed.insert(index);
        self.ticks += 1;

        if self.revealed.is_complete() {
            self.settle();
            return TickOutcome::Revealed {
                index,
                settled: true,
            };
        }

        self.displayed = self.scramble();
        TickOutcome::Revealed {
            index,
            settled: false,
        }
    }

    fn tick_iterative(&mut self) -> TickOutcome {
        self.displayed = self.scramble();
        self.iteration += 1;
        self.ticks += 1;

        let settled = self.iteration >= self.options.max_iterations.max(1);
        if settled {
            self.settle();
        }
        TickOutcome::Scrambled {
            iteration: self.iteration,
            settled,
        }
    }

    fn scramble(&mut self) -> String {
        scramble::render(
            &self.text,
            &self.revealed,
            &self.pool,
            self.mode,
            &mut self.rng,
        )
    }

    fn settle(&mut self) {
        emit_log(
            LogLevel::Debug,
            &format!("decrypt: settled after {} ticks", self.ticks),
        );
        emit_event(names::SETTLE, &format!("{{\"ticks\":{}}}", self.ticks));
        self.reset();
    }

    /// Back to `Idle`: timer cleared, revealed set empty, literal text.
    fn reset(&mut self) {
        self.timer.clear();
        self.revealed.clear();
        self.state = AnimationState::Idle;
        self.displayed.clone_from(&self.options.text);
    }

    /// Replace the configuration.
    ///
    /// Any change to a field that drives the animation hard-resets the engine
    /// to `Idle` and rebuilds the pool, layout and revealed set. Returns
    /// whether that reset happened; callers decide whether to start again.
    pub fn reconfigure(&mut self, options: DecryptOptions) -> bool {
        if !self.options.differs_in_animation(&options) {
            self.options = options;
            return false;
        }

        self.stop();
        self.text = options.text.chars().collect();
        self.layout = LineLayout::new(&self.text);
        self.mode = PoolMode::from_flag(options.use_original_chars_only);
        self.pool = CharacterPool::derive(&options.text, self.mode, &options.characters);
        self.revealed = RevealedSet::new(self.text.len());
        self.timer.set_interval(options.speed);
        self.iteration = 0;
        self.ticks = 0;
        self.displayed.clone_from(&options.text);
        self.options = options;
        true
    }
}

impl<R: RandomSource> Drop for RevealEngine<R> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<R: RandomSource> std::fmt::Debug for RevealEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealEngine")
            .field("state", &self.state)
            .field("text_len", &self.text.len())
            .field("revealed", &self.revealed.len())
            .field("iteration", &self.iteration)
            .field("displayed", &self.displayed)
            .finish_non_exhaustive()
    }
}
