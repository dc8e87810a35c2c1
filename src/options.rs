//! Configuration surface for a decrypting text.
//!
//! All fields have defaults except the target text. Builder methods return
//! a modified copy so call sites can read like
//! `DecryptOptions::new("ACCESS GRANTED").with_speed_ms(40).with_direction(RevealDirection::Center)`.

use crate::error::Error;
use crate::style::StyleHooks;
use std::str::FromStr;
use std::time::Duration;

/// Glyphs used for scrambling when no charset is supplied.
pub const DEFAULT_CHARACTERS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!@#$%^&*()_+=";

/// Default tick interval in milliseconds.
pub const DEFAULT_SPEED_MS: u64 = 5;

/// Default iteration cap for non-sequential runs.
pub const DEFAULT_MAX_ITERATIONS: u32 = 10;

/// Order in which positions are revealed in sequential mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RevealDirection {
    /// Left to right.
    #[default]
    Start,
    /// Right to left.
    End,
    /// Outward from the middle, alternating sides.
    Center,
}

impl RevealDirection {
    /// Lenient lookup: unknown names degrade to [`RevealDirection::Start`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Center => "center",
        }
    }
}

impl FromStr for RevealDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(Self::Start),
            "end" => Ok(Self::End),
            "center" | "centre" => Ok(Self::Center),
            _ => Err(Error::InvalidOption {
                option: "revealDirection",
                value: s.to_string(),
            }),
        }
    }
}

/// Which external signal starts the animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnimateOn {
    /// Play once, the first time the text becomes visible.
    #[default]
    View,
    /// Play on pointer enter, reset on pointer leave.
    Hover,
}

impl FromStr for AnimateOn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "view" => Ok(Self::View),
            "hover" => Ok(Self::Hover),
            _ => Err(Error::InvalidOption {
                option: "animateOn",
                value: s.to_string(),
            }),
        }
    }
}

/// Options for one decrypting text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecryptOptions {
    /// Target content.
    pub text: String,
    /// Tick interval.
    pub speed: Duration,
    /// Tick cap for non-sequential runs.
    pub max_iterations: u32,
    /// Reveal one position per tick (`true`) or scramble everything for
    /// `max_iterations` ticks (`false`).
    pub sequential: bool,
    pub reveal_direction: RevealDirection,
    /// Scramble with a permutation of the text's own characters.
    pub use_original_chars_only: bool,
    /// Explicit pool, ignored when `use_original_chars_only` is set.
    pub characters: String,
    pub animate_on: AnimateOn,
    pub style: StyleHooks,
}

impl DecryptOptions {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            speed: Duration::from_millis(DEFAULT_SPEED_MS),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            sequential: true,
            reveal_direction: RevealDirection::Start,
            use_original_chars_only: false,
            characters: DEFAULT_CHARACTERS.to_string(),
            animate_on: AnimateOn::View,
            style: StyleHooks::default(),
        }
    }

    /// Page title preset: plays once on view, revealing every 60 ms.
    #[must_use]
    pub fn title(text: impl Into<String>) -> Self {
        Self::new(text)
            .with_animate_on(AnimateOn::View)
            .with_speed_ms(60)
            .with_sequential(true)
    }

    /// Preset for the heading slot of an [`AnimatedTextBox`](crate::AnimatedTextBox).
    #[must_use]
    pub fn text_box_title(text: impl Into<String>) -> Self {
        Self::new(text).with_speed_ms(100)
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn with_speed(mut self, speed: Duration) -> Self {
        self.speed = speed;
        self
    }

    #[must_use]
    pub fn with_speed_ms(self, ms: u64) -> Self {
        self.with_speed(Duration::from_millis(ms))
    }

    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[must_use]
    pub fn with_sequential(mut self, sequential: bool) -> Self {
        self.sequential = sequential;
        self
    }

    #[must_use]
    pub fn with_direction(mut self, direction: RevealDirection) -> Self {
        self.reveal_direction = direction;
        self
    }

    #[must_use]
    pub fn with_original_chars_only(mut self, enabled: bool) -> Self {
        self.use_original_chars_only = enabled;
        self
    }

    #[must_use]
    pub fn with_characters(mut self, characters: impl Into<String>) -> Self {
        self.characters = characters.into();
        self
    }

    #[must_use]
    pub fn with_animate_on(mut self, animate_on: AnimateOn) -> Self {
        self.animate_on = animate_on;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: StyleHooks) -> Self {
        self.style = style;
        self
    }

    /// Whether switching from `self` to `other` invalidates a running
    /// animation. Styling hooks and the trigger source are not part of the
    /// animation itself.
    #[must_use]
    pub fn differs_in_animation(&self, other: &Self) -> bool {
        self.text != other.text
            || self.speed != other.speed
            || self.max_iterations != other.max_iterations
            || self.sequential != other.sequential
            || self.reveal_direction != other.reveal_direction
            || self.use_original_chars_only != other.use_original_chars_only
            || self.characters != other.characters
    }
}
