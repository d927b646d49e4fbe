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

//! Runtime description of an offset window `[start, end)`.
//!
//! A bounds-tracked pointer carries its window in the type; [`Window`] is the
//! value-level view of it, used for diagnostics.

use typenum::Integer;

/// A half-open window of pointer offsets `[start, end)`.
///
/// # Invariants
///
/// `start <= end`.
///
/// # Examples
///
/// ```rust
/// # use ranged_ptr::window::Window;
/// let w = Window::new(-3, 7);
/// assert_eq!(w.len(), 10);
/// assert!(w.contains_offset(-3));
/// assert!(!w.contains_offset(7));
/// assert_eq!(w.to_string(), "[-3, 7)");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    start: isize,
    end: isize,
}

impl Window {
    /// Creates a new window.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    #[inline]
    pub fn new(start: isize, end: isize) -> Self {
        assert!(start <= end, "invalid window: start must not exceed end");
        Self { start, end }
    }

    /// The window described by the type-level bounds `[L, U)`.
    ///
    /// A window whose type-level bounds are reversed, as produced by
    /// advancing a pointer past its last element, is reported as empty at
    /// `L`.
    #[inline]
    pub fn of<L: Integer, U: Integer>() -> Self {
        let (start, end) = (L::ISIZE, U::ISIZE);
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Inclusive start offset.
    #[inline]
    pub const fn start(&self) -> isize {
        self.start
    }

    /// Exclusive end offset.
    #[inline]
    pub const fn end(&self) -> isize {
        self.end
    }

    /// Number of accessible offsets.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.abs_diff(self.start)
    }

    /// Returns `true` if no offset is accessible.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `offset` lies in the window.
    #[inline]
    pub fn contains_offset(&self, offset: isize) -> bool {
        self.start <= offset && offset < self.end
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typenum::{N3, P2, P7, Z0};

    #[test]
    fn test_construction() {
        let w = Window::new(-2, 5);
        assert_eq!(w.start(), -2);
        assert_eq!(w.end(), 5);
        assert_eq!(w.len(), 7);
        assert!(!w.is_empty());
        assert!(Window::new(4, 4).is_empty());
    }

    #[test]
    #[should_panic(expected = "invalid window")]
    fn test_new_panic() {
        let _ = Window::new(3, 2);
    }

    #[test]
    fn test_of_type_level_bounds() {
        assert_eq!(Window::of::<N3, P7>(), Window::new(-3, 7));
        assert_eq!(Window::of::<Z0, Z0>(), Window::new(0, 0));
        // Reversed bounds collapse to an empty window.
        assert_eq!(Window::of::<P7, P2>(), Window::new(7, 7));
        assert!(Window::of::<P7, P2>().is_empty());
    }

    #[test]
    fn test_contains_offset() {
        let w = Window::new(0, 10);
        assert!(w.contains_offset(0));
        assert!(w.contains_offset(9));
        assert!(!w.contains_offset(10));
        assert!(!w.contains_offset(-1));
        assert!(!Window::new(3, 3).contains_offset(3));
    }

    #[test]
    fn test_display_debug() {
        let w = Window::new(-3, 7);
        assert_eq!(format!("{}", w), "[-3, 7)");
        assert_eq!(format!("{:?}", w), "Window { start: -3, end: 7 }");
    }
}
