#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte span `start..end` of one token or error in the pattern source.
///
/// The scanner works in `usize` byte offsets; spans store them narrowed to
/// u32, which comfortably covers any pattern worth lexing.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Span {
    start: u32,
    end: u32,
}

impl Span {
    /// Builds a span from byte offsets into the pattern. Requires
    /// `start <= end`.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self {
            start: u32::try_from(start).unwrap_or(u32::MAX),
            end: u32::try_from(end).unwrap_or(u32::MAX),
        }
    }

    /// Offset of the first byte covered.
    #[must_use]
    pub const fn start(self) -> usize {
        self.start as usize
    }

    /// Offset just past the last byte covered.
    #[must_use]
    pub const fn end(self) -> usize {
        self.end as usize
    }

    /// Number of pattern bytes covered.
    #[must_use]
    pub const fn len(self) -> usize {
        (self.end - self.start) as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(feature = "diagnostics")]
impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        Self::new(miette::SourceOffset::from(span.start()), span.len())
    }
}
