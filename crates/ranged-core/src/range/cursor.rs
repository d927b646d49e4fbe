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

use crate::bound::refinement::Refinement;
use crate::bound::shapes::LowerBound;
use crate::num::repr::Repr;
use typenum::P1;

/// The raw state shared by every range type: the next value, the exclusive
/// sentinel and the step.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<T> {
    current: T,
    end: T,
    step: T,
    exhausted: bool,
}

impl<T> Cursor<T>
where
    T: Repr,
{
    #[inline]
    pub(crate) fn new(first: T, end: T, step: LowerBound<T, P1>) -> Self {
        Self {
            current: first,
            end,
            step: step.get(),
            exhausted: first >= end,
        }
    }

    /// Yields the current value and advances. Overflow of the advance ends
    /// the sequence after the value it was computed from.
    #[inline]
    pub(crate) fn next_raw(&mut self) -> Option<T> {
        if self.exhausted {
            return None;
        }
        let value = self.current;
        match value.checked_add_val(self.step) {
            Some(next) if next < self.end => self.current = next,
            _ => self.exhausted = true,
        }
        Some(value)
    }

    #[inline]
    pub(crate) fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        let span = self.end.widen() - self.current.widen();
        let step = self.step.widen();
        match usize::try_from((span + step - 1) / step) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::BoundedValue;

    fn step<T: Repr>(v: T) -> LowerBound<T, P1> {
        BoundedValue::new(v).assume()
    }

    fn drain<T: Repr>(mut cursor: Cursor<T>) -> Vec<T> {
        let mut out = Vec::new();
        while let Some(v) = cursor.next_raw() {
            out.push(v);
        }
        out
    }

    #[test]
    fn test_unit_step() {
        let cursor = Cursor::new(2i32, 6, step(1));
        assert_eq!(cursor.size_hint(), (4, Some(4)));
        assert_eq!(drain(cursor), vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_larger_step_stops_before_sentinel() {
        let cursor = Cursor::new(0u8, 10, step(3));
        assert_eq!(cursor.size_hint(), (4, Some(4)));
        assert_eq!(drain(cursor), vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_overflow_ends_sequence() {
        let cursor = Cursor::new(250u8, 255, step(4));
        assert_eq!(cursor.size_hint(), (2, Some(2)));
        assert_eq!(drain(cursor), vec![250, 254]);

        let cursor = Cursor::new(i8::MAX - 1, i8::MAX, step(100));
        assert_eq!(drain(cursor), vec![i8::MAX - 1]);
    }

    #[test]
    fn test_empty_cases() {
        assert!(drain(Cursor::new(5i64, 5, step(1))).is_empty());
        assert!(drain(Cursor::new(6i64, 5, step(1))).is_empty());
        let spent = Cursor::new(9i64, 5, step(1));
        assert_eq!(spent.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_size_hint_tracks_progress() {
        let mut cursor = Cursor::new(-3i16, 4, step(2));
        assert_eq!(cursor.size_hint(), (4, Some(4)));
        cursor.next_raw();
        assert_eq!(cursor.size_hint(), (3, Some(3)));
        cursor.next_raw();
        cursor.next_raw();
        cursor.next_raw();
        assert_eq!(cursor.size_hint(), (0, Some(0)));
        assert_eq!(cursor.next_raw(), None);
    }
}
