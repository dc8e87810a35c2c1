//! `decrypt_text` - scramble-and-reveal text animation for terminals
//!
//! Text starts out scrambled through a pool of substitute glyphs and settles,
//! position by position or all at once, into its final string. Animations
//! are started by a visibility signal (once per instance) or by pointer
//! hover, and advance on a cooperative timer driven by the host loop.
//!
//! # Usage
//!
//! ```
//! use decrypt_text::{DecryptOptions, DecryptedText, RevealDirection, VisibilityEntry};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use std::time::{Duration, Instant};
//!
//! let opts = DecryptOptions::new("ACCESS GRANTED")
//!     .with_direction(RevealDirection::Center)
//!     .with_speed_ms(40);
//! let mut text = DecryptedText::with_rng(opts, StdRng::seed_from_u64(7));
//!
//! let mut now = Instant::now();
//! text.on_visibility(VisibilityEntry::visible(), now);
//! while text.is_scrambling() {
//!     now += Duration::from_millis(40);
//!     text.advance(now);
//! }
//! assert_eq!(text.displayed(), "ACCESS GRANTED");
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)] // Unsafe code needs justification (required for ioctl FFI)
#![allow(clippy::cast_possible_truncation)] // Intentional cell coordinate casts
#![allow(clippy::module_name_repetitions)] // Allow scramble::ScrambleX etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::must_use_candidate)] // Builder-style APIs are already annotated
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests

pub mod ansi;
pub mod decrypted;
pub mod engine;
pub mod error;
pub mod event;
pub mod layout;
pub mod options;
pub mod pointer;
pub mod scramble;
pub mod style;
pub mod terminal;
pub mod text_box;
pub mod timer;
pub mod trigger;

// Re-export core types at crate root
pub use decrypted::DecryptedText;
pub use engine::{AnimationState, RevealEngine, TickOutcome};
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};
pub use layout::{DisplayFrame, FrameLine, LineLayout, Segment, SegmentKind};
pub use options::{AnimateOn, DEFAULT_CHARACTERS, DecryptOptions, RevealDirection};
pub use pointer::{HoverRegion, MouseEvent, PointerTransition};
pub use scramble::{CharacterPool, PoolMode, RandomSource, RevealedSet};
pub use style::{StyleHooks, TextAttributes};
pub use text_box::AnimatedTextBox;
pub use timer::TickTimer;
pub use trigger::{
    ObserverHandle, ObserverOptions, Subscription, TriggerCommand, TriggerController,
    VisibilityEntry, VisibilitySource,
};
