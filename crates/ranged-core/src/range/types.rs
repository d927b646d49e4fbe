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

//! The range types produced by [`RangeTo`](crate::range::RangeTo).
//!
//! Each type is a lazy, forward-only sequence over a cursor; the element
//! type carries the bound every yielded value is known to satisfy.

use crate::bound::refinement::{Refinement, TOKEN};
use crate::bound::shapes::{Interval, LowerBound, UpperBound};
use crate::bound::value::BoundedValue;
use crate::num::repr::{IntervalRule, Repr};
use crate::range::cursor::Cursor;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ops::Sub;
use typenum::{Cmp, Compare, Diff, Equal, Greater, Integer, Less, P1};

/// The element type of a range that can never yield.
///
/// Has no values, so code matching on it is statically unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Impossible {}

/// Builds an element from a raw value the cursor has already bounded.
#[inline(always)]
fn element<R: Refinement>(raw: R::Repr) -> R {
    debug_assert!(R::is_valid(raw), "range element {} outside {}", raw, R::bounds());
    R::from_raw(raw, TOKEN)
}

/// A range with no known bounds on either end. Yields [`BoundedValue`].
#[derive(Debug, Clone)]
pub struct OpenRange<T> {
    cursor: Cursor<T>,
}

impl<T: Repr> OpenRange<T> {
    #[inline]
    pub(crate) fn new(first: T, end: T, step: LowerBound<T, P1>) -> Self {
        Self {
            cursor: Cursor::new(first, end, step),
        }
    }
}

impl<T: Repr> Iterator for OpenRange<T> {
    type Item = BoundedValue<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next_raw().map(BoundedValue::new)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}

impl<T: Repr> FusedIterator for OpenRange<T> {}

/// A range whose sentinel is at most `M`. Yields `UpperBound<T, M - 1>`.
#[derive(Debug, Clone)]
pub struct UpperRange<T, M> {
    cursor: Cursor<T>,
    bound: PhantomData<fn() -> M>,
}

impl<T: Repr, M> UpperRange<T, M> {
    #[inline]
    pub(crate) fn new(first: T, end: T, step: LowerBound<T, P1>) -> Self {
        Self {
            cursor: Cursor::new(first, end, step),
            bound: PhantomData,
        }
    }
}

impl<T, M> Iterator for UpperRange<T, M>
where
    T: Repr,
    M: Integer + Sub<P1>,
    Diff<M, P1>: Integer,
{
    type Item = UpperBound<T, Diff<M, P1>>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next_raw().map(element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}

impl<T, M> FusedIterator for UpperRange<T, M>
where
    T: Repr,
    M: Integer + Sub<P1>,
    Diff<M, P1>: Integer,
{
}

/// A range whose first value is at least `N`. Yields `LowerBound<T, N>`.
#[derive(Debug, Clone)]
pub struct LowerRange<T, N> {
    cursor: Cursor<T>,
    bound: PhantomData<fn() -> N>,
}

impl<T: Repr, N> LowerRange<T, N> {
    #[inline]
    pub(crate) fn new(first: T, end: T, step: LowerBound<T, P1>) -> Self {
        Self {
            cursor: Cursor::new(first, end, step),
            bound: PhantomData,
        }
    }
}

impl<T, N> Iterator for LowerRange<T, N>
where
    T: Repr,
    N: Integer,
{
    type Item = LowerBound<T, N>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next_raw().map(element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}

impl<T, N> FusedIterator for LowerRange<T, N>
where
    T: Repr,
    N: Integer,
{
}

/// A range from at least `N` to a sentinel at most `M`.
///
/// For `N < M` it yields `Interval<T, N, M - 1>`. For `N >= M` no value can
/// satisfy both ends: the item type is [`Impossible`] and the range is empty
/// without ever touching its cursor. The choice is made at compile time
/// through `typenum::Compare<N, M>`.
///
/// # Examples
///
/// ```rust
/// use ranged_core::bound::{LowerBound, UpperBound};
/// use ranged_core::range::{Impossible, RangeTo};
/// use typenum::P5;
///
/// let empty = LowerBound::<i32, P5>::at_bound().range_to(UpperBound::<i32, P5>::at_bound());
/// let items: Vec<Impossible> = empty.collect();
/// assert!(items.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct IntervalRange<T, N, M> {
    cursor: Cursor<T>,
    bound: PhantomData<fn() -> (N, M)>,
}

impl<T: Repr, N, M> IntervalRange<T, N, M> {
    #[inline]
    pub(crate) fn new(first: T, end: T, step: LowerBound<T, P1>) -> Self {
        Self {
            cursor: Cursor::new(first, end, step),
            bound: PhantomData,
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for typenum::Less {}
    impl Sealed for typenum::Equal {}
    impl Sealed for typenum::Greater {}
}

/// Chooses the element type of an [`IntervalRange`] from the ordering of
/// its two bounds. Implemented for `Less`, `Equal` and `Greater`; sealed.
pub trait IntervalRangeItem<T, N, M>: sealed::Sealed {
    /// The element type.
    type Item;

    #[doc(hidden)]
    fn next_item(range: &mut IntervalRange<T, N, M>) -> Option<Self::Item>;

    #[doc(hidden)]
    fn remaining(range: &IntervalRange<T, N, M>) -> (usize, Option<usize>);
}

impl<T, N, M> IntervalRangeItem<T, N, M> for Less
where
    T: Repr,
    N: Integer,
    M: Integer + Sub<P1>,
    Diff<M, P1>: Integer,
    T::Kind: IntervalRule<N, Diff<M, P1>>,
{
    type Item = Interval<T, N, Diff<M, P1>>;

    #[inline]
    fn next_item(range: &mut IntervalRange<T, N, M>) -> Option<Self::Item> {
        range.cursor.next_raw().map(element)
    }

    #[inline]
    fn remaining(range: &IntervalRange<T, N, M>) -> (usize, Option<usize>) {
        range.cursor.size_hint()
    }
}

macro_rules! impossible_range {
    ($($ord:ty),*) => {
        $(
            impl<T, N, M> IntervalRangeItem<T, N, M> for $ord {
                type Item = Impossible;

                #[inline(always)]
                fn next_item(_range: &mut IntervalRange<T, N, M>) -> Option<Impossible> {
                    None
                }

                #[inline(always)]
                fn remaining(_range: &IntervalRange<T, N, M>) -> (usize, Option<usize>) {
                    (0, Some(0))
                }
            }
        )*
    };
}

impossible_range!(Equal, Greater);

impl<T, N, M> Iterator for IntervalRange<T, N, M>
where
    N: Cmp<M>,
    Compare<N, M>: IntervalRangeItem<T, N, M>,
{
    type Item = <Compare<N, M> as IntervalRangeItem<T, N, M>>::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        <Compare<N, M> as IntervalRangeItem<T, N, M>>::next_item(self)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        <Compare<N, M> as IntervalRangeItem<T, N, M>>::remaining(self)
    }
}

impl<T, N, M> FusedIterator for IntervalRange<T, N, M>
where
    N: Cmp<M>,
    Compare<N, M>: IntervalRangeItem<T, N, M>,
{
}
