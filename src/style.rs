//! Text attributes and the styling hooks applied to decrypting text.
//!
//! - [`TextAttributes`]: Bitflags for bold, dim, underline, etc.
//! - [`StyleHooks`]: Which attributes apply to the whole text, to revealed
//!   positions and to still-encrypted positions.
//!
//! # Examples
//!
//! ```
//! use decrypt_text::{StyleHooks, TextAttributes};
//!
//! let hooks = StyleHooks::default()
//!     .with_revealed(TextAttributes::BOLD)
//!     .with_encrypted(TextAttributes::DIM);
//! assert!(hooks.encrypted.contains(TextAttributes::DIM));
//! ```

use crate::layout::SegmentKind;
use bitflags::bitflags;

bitflags! {
    /// Text rendering attributes (bold, italic, underline, etc.).
    ///
    /// Attributes are represented as bitflags and can be combined using
    /// bitwise OR. Not all terminals support all attributes.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold/increased intensity.
        const BOLD          = 0x01;
        /// Dim/decreased intensity.
        const DIM           = 0x02;
        /// Italic (not widely supported).
        const ITALIC        = 0x04;
        /// Underlined text.
        const UNDERLINE     = 0x08;
        /// Blinking text (rarely supported).
        const BLINK         = 0x10;
        /// Swapped foreground/background.
        const INVERSE       = 0x20;
        /// Hidden/invisible text.
        const HIDDEN        = 0x40;
        /// Strikethrough text.
        const STRIKETHROUGH = 0x80;
    }
}

impl TextAttributes {
    /// SGR parameter codes for each set flag, in bit order.
    #[must_use]
    pub fn sgr_codes(self) -> Vec<u8> {
        const TABLE: [(TextAttributes, u8); 8] = [
            (TextAttributes::BOLD, 1),
            (TextAttributes::DIM, 2),
            (TextAttributes::ITALIC, 3),
            (TextAttributes::UNDERLINE, 4),
            (TextAttributes::BLINK, 5),
            (TextAttributes::INVERSE, 7),
            (TextAttributes::HIDDEN, 8),
            (TextAttributes::STRIKETHROUGH, 9),
        ];
        TABLE
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, code)| *code)
            .collect()
    }
}

/// Attribute hooks for a decrypting text.
///
/// `parent` applies to every segment. `revealed` and `encrypted` are layered
/// on top while a scramble run is in progress; settled text uses `parent`
/// only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StyleHooks {
    pub parent: TextAttributes,
    pub revealed: TextAttributes,
    pub encrypted: TextAttributes,
}

impl StyleHooks {
    #[must_use]
    pub fn with_parent(mut self, attrs: TextAttributes) -> Self {
        self.parent = attrs;
        self
    }

    #[must_use]
    pub fn with_revealed(mut self, attrs: TextAttributes) -> Self {
        self.revealed = attrs;
        self
    }

    #[must_use]
    pub fn with_encrypted(mut self, attrs: TextAttributes) -> Self {
        self.encrypted = attrs;
        self
    }

    /// Effective attributes for a segment of the given kind.
    #[must_use]
    pub fn resolve(&self, kind: SegmentKind) -> TextAttributes {
        match kind {
            SegmentKind::Plain => self.parent,
            SegmentKind::Revealed => self.parent | self.revealed,
            SegmentKind::Encrypted => self.parent | self.encrypted,
        }
    }
}
