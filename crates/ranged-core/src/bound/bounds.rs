// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Runtime descriptions of bound shapes and the error raised when a checked
//! construction is rejected.

/// The set of raw values a bound shape admits, widened to `i128`.
///
/// # Examples
///
/// ```rust
/// # use ranged_core::bound::Bounds;
/// assert_eq!(Bounds::AtMost(5).to_string(), "<= 5");
/// assert_eq!(Bounds::Within(0, 4).to_string(), "[0, 4]");
/// assert!(Bounds::Wrapping(250, 5).contains(3));
/// assert!(!Bounds::Wrapping(250, 5).contains(100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bounds {
    /// Every value of the representation.
    Unbounded,
    /// `value <= bound`.
    AtMost(i128),
    /// `value >= bound`.
    AtLeast(i128),
    /// `lo <= value <= hi`.
    Within(i128, i128),
    /// `value >= lo || value <= hi`, with `lo > hi`.
    Wrapping(i128, i128),
}

impl Bounds {
    /// Returns `true` if `value` satisfies the bounds.
    #[inline]
    pub fn contains(&self, value: i128) -> bool {
        match *self {
            Bounds::Unbounded => true,
            Bounds::AtMost(hi) => value <= hi,
            Bounds::AtLeast(lo) => value >= lo,
            Bounds::Within(lo, hi) => lo <= value && value <= hi,
            Bounds::Wrapping(lo, hi) => value >= lo || value <= hi,
        }
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bounds::Unbounded => write!(f, "unbounded"),
            Bounds::AtMost(hi) => write!(f, "<= {}", hi),
            Bounds::AtLeast(lo) => write!(f, ">= {}", lo),
            Bounds::Within(lo, hi) => write!(f, "[{}, {}]", lo, hi),
            Bounds::Wrapping(lo, hi) => write!(f, "[{}, {}] (wrapping)", lo, hi),
        }
    }
}

/// A checked construction rejected its input.
///
/// Returned by [`Refinement::refine`](crate::bound::Refinement::refine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundsError {
    value: i128,
    bounds: Bounds,
}

impl BoundsError {
    #[inline]
    pub(crate) fn new(value: i128, bounds: Bounds) -> Self {
        Self { value, bounds }
    }

    /// The rejected raw value, widened to `i128`.
    #[inline]
    pub fn value(&self) -> i128 {
        self.value
    }

    /// The bounds the value failed to satisfy.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

impl std::fmt::Display for BoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "value {} is outside {}", self.value, self.bounds)
    }
}

impl std::error::Error for BoundsError {}

/// Aborts on a broken trusted construction.
///
/// A caller of a trusted constructor asserted a proof it did not have. This
/// is not an error to recover from.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn violated(value: i128, bounds: Bounds) -> ! {
    panic!("contract violation: value {value} is outside {bounds}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Bounds::Unbounded.to_string(), "unbounded");
        assert_eq!(Bounds::AtLeast(-7).to_string(), ">= -7");
        assert_eq!(Bounds::Wrapping(250, 5).to_string(), "[250, 5] (wrapping)");
    }

    #[test]
    fn test_contains() {
        assert!(Bounds::Unbounded.contains(i128::MIN));
        assert!(Bounds::AtMost(3).contains(3));
        assert!(!Bounds::AtMost(3).contains(4));
        assert!(Bounds::AtLeast(-2).contains(-2));
        assert!(!Bounds::AtLeast(-2).contains(-3));
        assert!(Bounds::Within(0, 4).contains(0));
        assert!(!Bounds::Within(0, 4).contains(5));
        assert!(Bounds::Wrapping(250, 5).contains(255));
        assert!(!Bounds::Wrapping(250, 5).contains(6));
    }

    #[test]
    fn test_error_display_and_accessors() {
        let err = BoundsError::new(9, Bounds::Within(0, 4));
        assert_eq!(err.value(), 9);
        assert_eq!(err.bounds(), Bounds::Within(0, 4));
        assert_eq!(err.to_string(), "value 9 is outside [0, 4]");
    }

    #[test]
    #[should_panic(expected = "contract violation: value 9 is outside <= 5")]
    fn test_violated_panics() {
        violated(9, Bounds::AtMost(5));
    }
}
