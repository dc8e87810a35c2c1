//! Two-slot container: a decrypting heading above static body text.

use crate::decrypted::DecryptedText;
use crate::layout::{DisplayFrame, FrameLine};
use crate::options::DecryptOptions;
use crate::scramble::RandomSource;
use rand::rngs::StdRng;

/// Heading used when none is given.
pub const DEFAULT_TITLE: &str = "HEADING";

/// Body used when none is given.
pub const DEFAULT_CONTENT: &str = "content goes here";

/// Heading plus body. Only the heading animates.
#[derive(Debug)]
pub struct AnimatedTextBox<R: RandomSource = StdRng> {
    title: DecryptedText<R>,
    content: String,
}

impl AnimatedTextBox<StdRng> {
    /// Box whose heading uses the [`DecryptOptions::text_box_title`] preset.
    #[must_use]
    pub fn new(title: &str, content: impl Into<String>) -> Self {
        Self::from_parts(DecryptedText::new(DecryptOptions::text_box_title(title)), content)
    }
}

impl Default for AnimatedTextBox<StdRng> {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, DEFAULT_CONTENT)
    }
}

impl<R: RandomSource> AnimatedTextBox<R> {
    /// Box around an already configured heading.
    pub fn from_parts(title: DecryptedText<R>, content: impl Into<String>) -> Self {
        Self {
            title,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &DecryptedText<R> {
        &self.title
    }

    pub fn title_mut(&mut self) -> &mut DecryptedText<R> {
        &mut self.title
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Heading lines followed by body lines. An empty body adds nothing.
    #[must_use]
    pub fn frame(&self) -> DisplayFrame {
        let mut lines: Vec<FrameLine> = self.title.frame().lines;
        if !self.content.is_empty() {
            lines.extend(DisplayFrame::plain(&self.content).lines);
        }
        DisplayFrame { lines }
    }
}
