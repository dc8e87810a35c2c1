//! Line structure of a decrypting text.
//!
//! [`LineLayout`] maps global character positions to lines once per text, so
//! per-tick rendering never re-splits the string. [`DisplayFrame`] is the
//! displayed string cut into lines of classified segments, ready to paint.

use crate::scramble::RevealedSet;
use std::ops::Range;
use unicode_width::UnicodeWidthStr;

/// Global character range of one line (newline excluded).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineSpan {
    pub start: usize,
    pub len: usize,
}

impl LineSpan {
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }
}

/// Precomputed line boundaries of a text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineLayout {
    spans: Vec<LineSpan>,
}

impl LineLayout {
    #[must_use]
    pub fn new(text: &[char]) -> Self {
        let mut spans = Vec::new();
        let mut start = 0;
        for (i, &c) in text.iter().enumerate() {
            if c == '\n' {
                spans.push(LineSpan {
                    start,
                    len: i - start,
                });
                start = i + 1;
            }
        }
        spans.push(LineSpan {
            start,
            len: text.len() - start,
        });
        Self { spans }
    }

    #[must_use]
    pub fn spans(&self) -> &[LineSpan] {
        &self.spans
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.spans.len()
    }
}

/// How a segment should be styled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Settled text outside any run.
    Plain,
    /// Positions fixed to their original character during a run.
    Revealed,
    /// Positions still showing a substitute during a run.
    Encrypted,
}

/// A run of characters sharing one [`SegmentKind`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub kind: SegmentKind,
}

/// One line of a [`DisplayFrame`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameLine {
    pub segments: Vec<Segment>,
}

impl FrameLine {
    #[must_use]
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Display width in terminal columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.segments.iter().map(|s| s.text.width()).sum()
    }
}

/// The displayed string split by line, each position classified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayFrame {
    pub lines: Vec<FrameLine>,
}

impl DisplayFrame {
    /// Cut `displayed` along `layout`.
    ///
    /// When `scrambling` is false every line is a single [`SegmentKind::Plain`]
    /// segment; otherwise consecutive positions are grouped by whether they
    /// are in `revealed`.
    #[must_use]
    pub fn build(
        layout: &LineLayout,
        displayed: &str,
        revealed: &RevealedSet,
        scrambling: bool,
    ) -> Self {
        let chars: Vec<char> = displayed.chars().collect();
        let lines = layout
            .spans()
            .iter()
            .map(|span| {
                let range = span.range();
                let Some(line) = chars.get(range.clone()) else {
                    return FrameLine::default();
                };
                if !scrambling {
                    return plain_line(line);
                }
                classify_line(line, range.start, revealed)
            })
            .collect();
        Self { lines }
    }

    /// Plain frame for static text.
    #[must_use]
    pub fn plain(text: &str) -> Self {
        Self {
            lines: text
                .split('\n')
                .map(|line| plain_line(&line.chars().collect::<Vec<_>>()))
                .collect(),
        }
    }

    /// Lines as strings.
    #[must_use]
    pub fn line_texts(&self) -> Vec<String> {
        self.lines.iter().map(FrameLine::text).collect()
    }

    /// Reassemble the displayed string.
    #[must_use]
    pub fn text(&self) -> String {
        self.line_texts().join("\n")
    }

    /// Widest line in terminal columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.lines.iter().map(FrameLine::width).max().unwrap_or(0)
    }
}

fn plain_line(chars: &[char]) -> FrameLine {
    if chars.is_empty() {
        return FrameLine::default();
    }
    FrameLine {
        segments: vec![Segment {
            text: chars.iter().collect(),
            kind: SegmentKind::Plain,
        }],
    }
}

fn classify_line(chars: &[char], start: usize, revealed: &RevealedSet) -> FrameLine {
    let mut segments: Vec<Segment> = Vec::new();
    for (offset, &c) in chars.iter().enumerate() {
        let kind = if revealed.contains(start + offset) {
            SegmentKind::Revealed
        } else {
            SegmentKind::Encrypted
        };
        match segments.last_mut() {
            Some(last) if last.kind == kind => last.text.push(c),
            _ => segments.push(Segment {
                text: c.to_string(),
                kind,
            }),
        }
    }
    FrameLine { segments }
}
