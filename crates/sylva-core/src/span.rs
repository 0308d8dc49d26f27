//! Position model: half-open byte ranges and the interval algebra over them.
//!
//! Every node, token and comment exposes a `[start, end)` range. All
//! position-based queries reduce to the pure predicates defined here.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Half-open byte range `[start, end)`.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a span. A reversed pair is collapsed to an empty span at `start`.
    pub const fn new(start: u32, end: u32) -> Self {
        if end < start {
            Self { start, end: start }
        } else {
            Self { start, end }
        }
    }

    pub const fn empty(at: u32) -> Self {
        Self { start: at, end: at }
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// `self.start < other.end && other.start < self.end`.
    #[inline]
    pub const fn overlaps(self, other: Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// `other` lies within `self`. Equal spans contain each other.
    #[inline]
    pub const fn contains_range(self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// `self` ends at or before `other` starts.
    ///
    /// Two empty spans at the same position are unordered, so `is_before`
    /// and `is_after` are never both true.
    #[inline]
    pub const fn is_before(self, other: Span) -> bool {
        self.end <= other.start && self.start < other.end
    }

    /// `self` starts at or after `other` ends.
    #[inline]
    pub const fn is_after(self, other: Span) -> bool {
        other.is_before(self)
    }

    /// `start <= pos < end`; the end position itself is outside.
    #[inline]
    pub const fn contains_pos(self, pos: u32) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Smallest span enclosing both.
    pub fn cover(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn to_range(self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl From<Range<u32>> for Span {
    fn from(range: Range<u32>) -> Self {
        Span::new(range.start, range.end)
    }
}

/// Anything with a source range.
pub trait Ranged {
    fn span(&self) -> Span;

    #[inline]
    fn start(&self) -> u32 {
        self.span().start
    }

    #[inline]
    fn end(&self) -> u32 {
        self.span().end
    }
}

impl Ranged for Span {
    #[inline]
    fn span(&self) -> Span {
        *self
    }
}

impl<T: Ranged + ?Sized> Ranged for &T {
    #[inline]
    fn span(&self) -> Span {
        (*self).span()
    }
}

/// The two ranges share at least one position.
pub fn overlap<A: Ranged + ?Sized, B: Ranged + ?Sized>(a: &A, b: &B) -> bool {
    a.span().overlaps(b.span())
}

/// `b` lies within `a`.
pub fn contains_range<A: Ranged + ?Sized, B: Ranged + ?Sized>(a: &A, b: &B) -> bool {
    a.span().contains_range(b.span())
}

/// `a` ends at or before `b` starts.
pub fn before<A: Ranged + ?Sized, B: Ranged + ?Sized>(a: &A, b: &B) -> bool {
    a.span().is_before(b.span())
}

/// `a` starts at or after `b` ends.
pub fn after<A: Ranged + ?Sized, B: Ranged + ?Sized>(a: &A, b: &B) -> bool {
    a.span().is_after(b.span())
}

/// `pos` falls inside `range`, end-exclusive.
pub fn is_in_range<R: Ranged + ?Sized>(range: &R, pos: u32) -> bool {
    range.span().contains_pos(pos)
}
