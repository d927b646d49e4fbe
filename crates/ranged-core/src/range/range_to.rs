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
use crate::bound::shapes::{Interval, LowerBound, UpperBound};
use crate::bound::value::BoundedValue;
use crate::num::repr::{IntervalRule, Repr};
use crate::range::types::{IntervalRange, LowerRange, OpenRange, UpperRange};
use typenum::{Integer, IsLessOrEqual, P1, True, Z0};

/// Builds a range from `self` up to, but excluding, a sentinel of type `S`.
///
/// The range type, and with it the element type, follows from what the two
/// ends prove:
///
/// | receiver | sentinel `T` / `BoundedValue` | sentinel `UpperBound[m]` / `Interval[_, m]` |
/// |---|---|---|
/// | `BoundedValue`, `UpperBound` | [`OpenRange`] | [`UpperRange<T, m>`](UpperRange) |
/// | `LowerBound[n]`, `Interval[n, _]` | [`LowerRange<T, n>`](LowerRange) | [`IntervalRange<T, n, m>`](IntervalRange) |
///
/// # Examples
///
/// ```rust
/// use ranged_core::bound::{BoundedValue, Interval, LowerBound, Refinement, UpperBound};
/// use ranged_core::range::RangeTo;
/// use typenum::{P4, P5, Z0};
///
/// let first = LowerBound::<i32, Z0>::at_bound();
/// let end = UpperBound::<i32, P5>::at_bound();
/// let digits: Vec<Interval<i32, Z0, P4>> = first.range_to(end).collect();
/// assert_eq!(digits.iter().map(|d| d.get()).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
///
/// let evens: Vec<i32> = BoundedValue::new(0i32)
///     .range_to_by(7, BoundedValue::new(2).assume())
///     .map(|v| v.get())
///     .collect();
/// assert_eq!(evens, vec![0, 2, 4, 6]);
/// ```
pub trait RangeTo<S>: Refinement {
    /// The range type produced.
    type Range;

    /// Range with an explicit step of at least one.
    fn range_to_by(self, sentinel: S, step: LowerBound<Self::Repr, P1>) -> Self::Range;

    /// Range with step one.
    #[inline]
    fn range_to(self, sentinel: S) -> Self::Range {
        self.range_to_by(sentinel, LowerBound::at_bound())
    }
}

macro_rules! range_to_impls {
    (
        [$($g:ident),*] $recv:ty where [$($w:tt)*]
        => open $open:ty, bounded $bounded:ty
    ) => {
        impl<T, $($g),*> RangeTo<BoundedValue<T>> for $recv
        where
            T: Repr,
            $($w)*
        {
            type Range = $open;

            #[inline]
            fn range_to_by(self, sentinel: BoundedValue<T>, step: LowerBound<T, P1>) -> $open {
                <$open>::new(self.get(), sentinel.get(), step)
            }
        }

        impl<T, $($g),*> RangeTo<T> for $recv
        where
            T: Repr,
            $($w)*
        {
            type Range = $open;

            #[inline]
            fn range_to_by(self, sentinel: T, step: LowerBound<T, P1>) -> $open {
                <$open>::new(self.get(), sentinel, step)
            }
        }

        impl<T, $($g,)* M> RangeTo<UpperBound<T, M>> for $recv
        where
            T: Repr,
            M: Integer,
            $($w)*
        {
            type Range = $bounded;

            #[inline]
            fn range_to_by(self, sentinel: UpperBound<T, M>, step: LowerBound<T, P1>) -> $bounded {
                <$bounded>::new(self.get(), sentinel.get(), step)
            }
        }

        impl<T, $($g,)* P, M> RangeTo<Interval<T, P, M>> for $recv
        where
            T: Repr,
            P: Integer + IsLessOrEqual<M, Output = True>,
            M: Integer,
            T::Kind: IntervalRule<P, M>,
            $($w)*
        {
            type Range = $bounded;

            #[inline]
            fn range_to_by(self, sentinel: Interval<T, P, M>, step: LowerBound<T, P1>) -> $bounded {
                <$bounded>::new(self.get(), sentinel.get(), step)
            }
        }
    };
}

range_to_impls!(
    [] BoundedValue<T> where []
    => open OpenRange<T>, bounded UpperRange<T, M>
);

range_to_impls!(
    [K] UpperBound<T, K> where [K: Integer,]
    => open OpenRange<T>, bounded UpperRange<T, M>
);

range_to_impls!(
    [N] LowerBound<T, N> where [N: Integer,]
    => open LowerRange<T, N>, bounded IntervalRange<T, N, M>
);

range_to_impls!(
    [N, Q] Interval<T, N, Q> where [
        N: Integer + IsLessOrEqual<Q, Output = True>,
        Q: Integer,
        T::Kind: IntervalRule<N, Q>,
    ]
    => open LowerRange<T, N>, bounded IntervalRange<T, N, M>
);

impl<T, M> UpperBound<T, M>
where
    T: Repr,
    M: Integer,
{
    /// Counts from zero up to, but excluding, `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranged_core::bound::{BoundedValue, Refinement, UpperBound};
    /// use typenum::P10;
    ///
    /// let n: UpperBound<usize, P10> = BoundedValue::new(3).assume();
    /// let seen: Vec<usize> = n.from_zero().map(|i| i.get()).collect();
    /// assert_eq!(seen, vec![0, 1, 2]);
    /// ```
    #[inline]
    pub fn from_zero(self) -> IntervalRange<T, Z0, M> {
        LowerBound::<T, Z0>::at_bound().range_to(self)
    }
}

impl<T, N, M> Interval<T, N, M>
where
    T: Repr,
    N: Integer + IsLessOrEqual<M, Output = True>,
    M: Integer,
    T::Kind: IntervalRule<N, M>,
{
    /// Counts from zero up to, but excluding, `self`.
    #[inline]
    pub fn from_zero(self) -> IntervalRange<T, Z0, M> {
        LowerBound::<T, Z0>::at_bound().range_to(self)
    }
}

impl<T, N> LowerBound<T, N>
where
    T: Repr,
    N: Integer,
{
    /// Counts from zero up to, but excluding, `self`.
    #[inline]
    pub fn from_zero(self) -> LowerRange<T, Z0> {
        LowerBound::<T, Z0>::at_bound().range_to(self.get())
    }
}
