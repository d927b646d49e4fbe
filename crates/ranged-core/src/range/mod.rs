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

//! # Range Iteration
//!
//! Half-open ranges `[first, sentinel)` over bound shapes. Each element is
//! typed with the bound that the two ends prove for it, so a loop index
//! produced here can be fed straight into an API demanding an
//! [`Interval`](crate::bound::Interval) or [`UpperBound`](crate::bound::UpperBound).
//!
//! Ranges are lazy and forward-only. Advancing past the end of the
//! representation ends the range instead of wrapping.

mod cursor;
pub mod range_to;
pub mod types;

pub use range_to::RangeTo;
pub use types::{Impossible, IntervalRange, IntervalRangeItem, LowerRange, OpenRange, UpperRange};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::{BoundedValue, Interval, LowerBound, Refinement, UpperBound};
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use typenum::{N3, P1, P2, P3, P4, P5, P9, P10, Z0};

    fn step<T: crate::num::repr::Repr>(v: T) -> LowerBound<T, P1> {
        BoundedValue::new(v).assume()
    }

    #[test]
    fn test_interval_range_yields_typed_elements() {
        let first = LowerBound::<i32, Z0>::at_bound();
        let end = UpperBound::<i32, P5>::at_bound();
        let range = first.range_to(end);
        assert_eq!(range.size_hint(), (5, Some(5)));

        let items: Vec<Interval<i32, Z0, P4>> = range.collect();
        let raw: Vec<i32> = items.iter().map(|v| v.get()).collect();
        assert_eq!(raw, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_degenerate_interval_range_is_empty() {
        let range = LowerBound::<i32, P5>::at_bound().range_to(UpperBound::<i32, P5>::at_bound());
        assert_eq!(range.size_hint(), (0, Some(0)));
        assert_eq!(range.count(), 0);

        let reversed =
            LowerBound::<i32, P9>::at_bound().range_to(UpperBound::<i32, P2>::at_bound());
        let items: Vec<Impossible> = reversed.collect();
        assert!(items.is_empty());
    }

    #[test]
    fn test_open_range() {
        let got: Vec<i64> = BoundedValue::new(-2i64)
            .range_to(3i64)
            .map(|v| v.get())
            .collect();
        assert_eq!(got, vec![-2, -1, 0, 1, 2]);

        let got: Vec<BoundedValue<i64>> = BoundedValue::new(0i64)
            .range_to(BoundedValue::new(2i64))
            .collect();
        assert_eq!(got, vec![BoundedValue::new(0i64), BoundedValue::new(1i64)]);
    }

    #[test]
    fn test_upper_range() {
        let first: UpperBound<i32, P10> = BoundedValue::new(-2i32).assume();
        let end: UpperBound<i32, P4> = BoundedValue::new(1i32).assume();
        let items: Vec<UpperBound<i32, P3>> = first.range_to(end).collect();
        assert_eq!(items.len(), 3);

        let sentinel: Interval<i32, N3, P2> = BoundedValue::new(2i32).assume();
        let items: Vec<UpperBound<i32, P1>> = BoundedValue::new(0i32).range_to(sentinel).collect();
        assert_eq!(items.iter().map(|v| v.get()).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_lower_range() {
        let first: LowerBound<u8, P2> = BoundedValue::new(5u8).assume();
        let items: Vec<LowerBound<u8, P2>> = first.range_to(8u8).collect();
        assert_eq!(items.len(), 3);

        let iv: Interval<u8, P2, P9> = BoundedValue::new(7u8).assume();
        let items: Vec<LowerBound<u8, P2>> = iv.range_to(BoundedValue::new(9u8)).collect();
        assert_eq!(items.iter().map(|v| v.get()).collect::<Vec<_>>(), vec![7, 8]);
    }

    #[test]
    fn test_interval_receiver_with_interval_sentinel() {
        let first: Interval<i16, N3, P4> = BoundedValue::new(-1i16).assume();
        let end: Interval<i16, Z0, P10> = BoundedValue::new(3i16).assume();
        let items: Vec<Interval<i16, N3, P9>> = first.range_to(end).collect();
        assert_eq!(
            items.iter().map(|v| v.get()).collect::<Vec<_>>(),
            vec![-1, 0, 1, 2]
        );
    }

    #[test]
    fn test_step_and_overflow_termination() {
        let got: Vec<u8> = BoundedValue::new(250u8)
            .range_to_by(u8::MAX, step(4u8))
            .map(|v| v.get())
            .collect();
        assert_eq!(got, vec![250, 254]);

        let got: Vec<i8> = BoundedValue::new(100i8)
            .range_to_by(i8::MAX, step(20i8))
            .map(|v| v.get())
            .collect();
        assert_eq!(got, vec![100, 120]);
    }

    #[test]
    fn test_from_zero() {
        let n: UpperBound<usize, P5> = BoundedValue::new(3usize).assume();
        let seen: Vec<Interval<usize, Z0, P4>> = n.from_zero().collect();
        assert_eq!(seen.len(), 3);

        let iv: Interval<i32, P2, P5> = BoundedValue::new(4i32).assume();
        assert_eq!(iv.from_zero().count(), 4);

        let low: LowerBound<i64, N3> = BoundedValue::new(2i64).assume();
        let seen: Vec<LowerBound<i64, Z0>> = low.from_zero().collect();
        assert_eq!(seen.len(), 2);

        let negative: UpperBound<i32, P5> = BoundedValue::new(-2i32).assume();
        assert_eq!(negative.from_zero().count(), 0);

        let nothing = UpperBound::<i32, Z0>::at_bound().from_zero();
        let items: Vec<Impossible> = nothing.collect();
        assert!(items.is_empty());
    }

    #[test]
    fn test_fused() {
        let mut range = BoundedValue::new(0i32).range_to(1i32);
        assert!(range.next().is_some());
        assert!(range.next().is_none());
        assert!(range.next().is_none());
    }

    #[test]
    fn test_matches_std_step_by_randomized() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1_000 {
            let first: i32 = rng.random_range(-50..50);
            let end: i32 = rng.random_range(-50..50);
            let by: i32 = rng.random_range(1..7);

            let range = BoundedValue::new(first).range_to_by(end, step(by));
            let (lo, hi) = range.size_hint();
            let items: Vec<i32> = range.map(|v| v.get()).collect();
            let expected: Vec<i32> = (first..end).step_by(by as usize).collect();

            assert_eq!(items, expected);
            assert_eq!(lo, items.len());
            assert_eq!(hi, Some(items.len()));
        }
    }
}
