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

//! # Bound-Composing Operators
//!
//! Arithmetic on bound shapes whose result type carries the bound derived
//! from the operand bounds, computed at the type level with `typenum`:
//!
//! | expression | result |
//! |---|---|
//! | `UpperBound[n] + UpperBound[m]` | `UpperBound[n + m]` |
//! | `LowerBound[n] + LowerBound[m]` | `LowerBound[n + m]` |
//! | `UpperBound[n] - LowerBound[m]` | `UpperBound[n - m]` |
//! | `LowerBound[n] - UpperBound[m]` | `LowerBound[n - m]` |
//! | `Interval[n, m] + Interval[p, q]` | `Interval[n + p, m + q]` |
//! | `Interval[n, m] - Interval[p, q]` | `Interval[n - q, m - p]` |
//!
//! Two intervals combine for any representation as long as neither wraps.
//! Intervals also combine with the one-sided shapes, keeping whichever side
//! both operands bound; that mix is defined for signed representations only.
//!
//! The compound assignments keep the bound of the left-hand side and are
//! implemented only where the right-hand side cannot move the value past
//! it, e.g. subtracting a non-negative `LowerBound` from an `UpperBound`.
//!
//! The raw computation overflows like the primitive operators do: it panics
//! with `attempt to add with overflow` (or `subtract`).
//!
//! # Examples
//!
//! ```rust
//! use ranged_core::bound::{BoundedValue, LowerBound, Refinement, UpperBound};
//! use typenum::{P2, P3, P5};
//!
//! let a: UpperBound<i32, P5> = BoundedValue::new(5).assume();
//! let b: LowerBound<i32, P2> = BoundedValue::new(2).assume();
//! let c: UpperBound<i32, P3> = a - b;
//! assert_eq!(c.get(), 3);
//! ```

use crate::bound::refinement::{Refinement, TOKEN};
use crate::bound::shapes::{Interval, LowerBound, UpperBound};
use crate::num::repr::{IntervalRule, Repr, SignedRepr};
use std::ops::{Add, AddAssign, Sub, SubAssign};
use typenum::{Diff, Integer, IsGreaterOrEqual, IsLessOrEqual, Sum, True, Z0};

#[cold]
#[inline(never)]
#[track_caller]
fn overflow(op: &str) -> ! {
    panic!("attempt to {} with overflow", op)
}

#[inline(always)]
#[track_caller]
fn add_raw<T: Repr>(lhs: T, rhs: T) -> T {
    match lhs.checked_add_val(rhs) {
        Some(v) => v,
        None => overflow("add"),
    }
}

#[inline(always)]
#[track_caller]
fn sub_raw<T: Repr>(lhs: T, rhs: T) -> T {
    match lhs.checked_sub_val(rhs) {
        Some(v) => v,
        None => overflow("subtract"),
    }
}

/// Builds a shape whose bound holds by construction of the operator.
#[inline(always)]
fn derived<R: Refinement>(raw: R::Repr) -> R {
    R::from_raw(raw, TOKEN)
}

// One-sided shapes.

impl<T, N, M> Add<UpperBound<T, M>> for UpperBound<T, N>
where
    T: Repr,
    N: Integer + Add<M>,
    M: Integer,
    Sum<N, M>: Integer,
{
    type Output = UpperBound<T, Sum<N, M>>;

    #[inline]
    #[track_caller]
    fn add(self, rhs: UpperBound<T, M>) -> Self::Output {
        derived(add_raw(self.get(), rhs.get()))
    }
}

impl<T, N, M> Add<LowerBound<T, M>> for LowerBound<T, N>
where
    T: Repr,
    N: Integer + Add<M>,
    M: Integer,
    Sum<N, M>: Integer,
{
    type Output = LowerBound<T, Sum<N, M>>;

    #[inline]
    #[track_caller]
    fn add(self, rhs: LowerBound<T, M>) -> Self::Output {
        derived(add_raw(self.get(), rhs.get()))
    }
}

impl<T, N, M> Sub<LowerBound<T, M>> for UpperBound<T, N>
where
    T: Repr,
    N: Integer + Sub<M>,
    M: Integer,
    Diff<N, M>: Integer,
{
    type Output = UpperBound<T, Diff<N, M>>;

    #[inline]
    #[track_caller]
    fn sub(self, rhs: LowerBound<T, M>) -> Self::Output {
        derived(sub_raw(self.get(), rhs.get()))
    }
}

impl<T, N, M> Sub<UpperBound<T, M>> for LowerBound<T, N>
where
    T: Repr,
    N: Integer + Sub<M>,
    M: Integer,
    Diff<N, M>: Integer,
{
    type Output = LowerBound<T, Diff<N, M>>;

    #[inline]
    #[track_caller]
    fn sub(self, rhs: UpperBound<T, M>) -> Self::Output {
        derived(sub_raw(self.get(), rhs.get()))
    }
}

// Interval with interval.

impl<T, N, M, P, Q> Add<Interval<T, P, Q>> for Interval<T, N, M>
where
    T: Repr,
    N: Integer + Add<P> + IsLessOrEqual<M, Output = True>,
    M: Integer + Add<Q>,
    P: Integer + IsLessOrEqual<Q, Output = True>,
    Q: Integer,
    Sum<N, P>: Integer,
    Sum<M, Q>: Integer,
    T::Kind: IntervalRule<N, M> + IntervalRule<P, Q> + IntervalRule<Sum<N, P>, Sum<M, Q>>,
{
    type Output = Interval<T, Sum<N, P>, Sum<M, Q>>;

    #[inline]
    #[track_caller]
    fn add(self, rhs: Interval<T, P, Q>) -> Self::Output {
        derived(add_raw(self.get(), rhs.get()))
    }
}

impl<T, N, M, P, Q> Sub<Interval<T, P, Q>> for Interval<T, N, M>
where
    T: Repr,
    N: Integer + Sub<Q> + IsLessOrEqual<M, Output = True>,
    M: Integer + Sub<P>,
    P: Integer + IsLessOrEqual<Q, Output = True>,
    Q: Integer,
    Diff<N, Q>: Integer,
    Diff<M, P>: Integer,
    T::Kind: IntervalRule<N, M> + IntervalRule<P, Q> + IntervalRule<Diff<N, Q>, Diff<M, P>>,
{
    type Output = Interval<T, Diff<N, Q>, Diff<M, P>>;

    #[inline]
    #[track_caller]
    fn sub(self, rhs: Interval<T, P, Q>) -> Self::Output {
        derived(sub_raw(self.get(), rhs.get()))
    }
}

// Interval with one-sided shapes.

impl<T, N, M, K> Add<UpperBound<T, K>> for Interval<T, N, M>
where
    T: Repr<Kind = SignedRepr>,
    N: Integer,
    M: Integer + Add<K>,
    K: Integer,
    Sum<M, K>: Integer,
    SignedRepr: IntervalRule<N, M>,
{
    type Output = UpperBound<T, Sum<M, K>>;

    #[inline]
    #[track_caller]
    fn add(self, rhs: UpperBound<T, K>) -> Self::Output {
        derived(add_raw(self.get(), rhs.get()))
    }
}

impl<T, N, M, K> Add<LowerBound<T, K>> for Interval<T, N, M>
where
    T: Repr<Kind = SignedRepr>,
    N: Integer + Add<K>,
    M: Integer,
    K: Integer,
    Sum<N, K>: Integer,
    SignedRepr: IntervalRule<N, M>,
{
    type Output = LowerBound<T, Sum<N, K>>;

    #[inline]
    #[track_caller]
    fn add(self, rhs: LowerBound<T, K>) -> Self::Output {
        derived(add_raw(self.get(), rhs.get()))
    }
}

impl<T, N, M, K> Sub<UpperBound<T, K>> for Interval<T, N, M>
where
    T: Repr<Kind = SignedRepr>,
    N: Integer + Sub<K>,
    M: Integer,
    K: Integer,
    Diff<N, K>: Integer,
    SignedRepr: IntervalRule<N, M>,
{
    type Output = LowerBound<T, Diff<N, K>>;

    #[inline]
    #[track_caller]
    fn sub(self, rhs: UpperBound<T, K>) -> Self::Output {
        derived(sub_raw(self.get(), rhs.get()))
    }
}

impl<T, N, M, K> Sub<LowerBound<T, K>> for Interval<T, N, M>
where
    T: Repr<Kind = SignedRepr>,
    N: Integer,
    M: Integer + Sub<K>,
    K: Integer,
    Diff<M, K>: Integer,
    SignedRepr: IntervalRule<N, M>,
{
    type Output = UpperBound<T, Diff<M, K>>;

    #[inline]
    #[track_caller]
    fn sub(self, rhs: LowerBound<T, K>) -> Self::Output {
        derived(sub_raw(self.get(), rhs.get()))
    }
}

impl<T, K, N, M> Add<Interval<T, N, M>> for UpperBound<T, K>
where
    T: Repr<Kind = SignedRepr>,
    K: Integer + Add<M>,
    N: Integer,
    M: Integer,
    Sum<K, M>: Integer,
    SignedRepr: IntervalRule<N, M>,
{
    type Output = UpperBound<T, Sum<K, M>>;

    #[inline]
    #[track_caller]
    fn add(self, rhs: Interval<T, N, M>) -> Self::Output {
        derived(add_raw(self.get(), rhs.get()))
    }
}

impl<T, K, N, M> Add<Interval<T, N, M>> for LowerBound<T, K>
where
    T: Repr<Kind = SignedRepr>,
    K: Integer + Add<N>,
    N: Integer,
    M: Integer,
    Sum<K, N>: Integer,
    SignedRepr: IntervalRule<N, M>,
{
    type Output = LowerBound<T, Sum<K, N>>;

    #[inline]
    #[track_caller]
    fn add(self, rhs: Interval<T, N, M>) -> Self::Output {
        derived(add_raw(self.get(), rhs.get()))
    }
}

impl<T, K, N, M> Sub<Interval<T, N, M>> for UpperBound<T, K>
where
    T: Repr<Kind = SignedRepr>,
    K: Integer + Sub<N>,
    N: Integer,
    M: Integer,
    Diff<K, N>: Integer,
    SignedRepr: IntervalRule<N, M>,
{
    type Output = UpperBound<T, Diff<K, N>>;

    #[inline]
    #[track_caller]
    fn sub(self, rhs: Interval<T, N, M>) -> Self::Output {
        derived(sub_raw(self.get(), rhs.get()))
    }
}

impl<T, K, N, M> Sub<Interval<T, N, M>> for LowerBound<T, K>
where
    T: Repr<Kind = SignedRepr>,
    K: Integer + Sub<M>,
    N: Integer,
    M: Integer,
    Diff<K, M>: Integer,
    SignedRepr: IntervalRule<N, M>,
{
    type Output = LowerBound<T, Diff<K, M>>;

    #[inline]
    #[track_caller]
    fn sub(self, rhs: Interval<T, N, M>) -> Self::Output {
        derived(sub_raw(self.get(), rhs.get()))
    }
}

// Bound-preserving compound assignment.

impl<T, N, K> SubAssign<LowerBound<T, K>> for UpperBound<T, N>
where
    T: Repr,
    N: Integer,
    K: Integer + IsGreaterOrEqual<Z0, Output = True>,
{
    #[inline]
    #[track_caller]
    fn sub_assign(&mut self, rhs: LowerBound<T, K>) {
        *self = derived(sub_raw(self.get(), rhs.get()));
    }
}

impl<T, N, K, L> SubAssign<Interval<T, K, L>> for UpperBound<T, N>
where
    T: Repr,
    N: Integer,
    K: Integer + IsGreaterOrEqual<Z0, Output = True> + IsLessOrEqual<L, Output = True>,
    L: Integer,
    T::Kind: IntervalRule<K, L>,
{
    #[inline]
    #[track_caller]
    fn sub_assign(&mut self, rhs: Interval<T, K, L>) {
        *self = derived(sub_raw(self.get(), rhs.get()));
    }
}

impl<T, N, K> AddAssign<UpperBound<T, K>> for UpperBound<T, N>
where
    T: Repr,
    N: Integer,
    K: Integer + IsLessOrEqual<Z0, Output = True>,
{
    #[inline]
    #[track_caller]
    fn add_assign(&mut self, rhs: UpperBound<T, K>) {
        *self = derived(add_raw(self.get(), rhs.get()));
    }
}

impl<T, N, K, L> AddAssign<Interval<T, K, L>> for UpperBound<T, N>
where
    T: Repr,
    N: Integer,
    K: Integer + IsLessOrEqual<L, Output = True>,
    L: Integer + IsLessOrEqual<Z0, Output = True>,
    T::Kind: IntervalRule<K, L>,
{
    #[inline]
    #[track_caller]
    fn add_assign(&mut self, rhs: Interval<T, K, L>) {
        *self = derived(add_raw(self.get(), rhs.get()));
    }
}

impl<T, N, K> AddAssign<LowerBound<T, K>> for LowerBound<T, N>
where
    T: Repr,
    N: Integer,
    K: Integer + IsGreaterOrEqual<Z0, Output = True>,
{
    #[inline]
    #[track_caller]
    fn add_assign(&mut self, rhs: LowerBound<T, K>) {
        *self = derived(add_raw(self.get(), rhs.get()));
    }
}

impl<T, N, K, L> AddAssign<Interval<T, K, L>> for LowerBound<T, N>
where
    T: Repr,
    N: Integer,
    K: Integer + IsGreaterOrEqual<Z0, Output = True> + IsLessOrEqual<L, Output = True>,
    L: Integer,
    T::Kind: IntervalRule<K, L>,
{
    #[inline]
    #[track_caller]
    fn add_assign(&mut self, rhs: Interval<T, K, L>) {
        *self = derived(add_raw(self.get(), rhs.get()));
    }
}

impl<T, N, K> SubAssign<UpperBound<T, K>> for LowerBound<T, N>
where
    T: Repr,
    N: Integer,
    K: Integer + IsLessOrEqual<Z0, Output = True>,
{
    #[inline]
    #[track_caller]
    fn sub_assign(&mut self, rhs: UpperBound<T, K>) {
        *self = derived(sub_raw(self.get(), rhs.get()));
    }
}

impl<T, N, K, L> SubAssign<Interval<T, K, L>> for LowerBound<T, N>
where
    T: Repr,
    N: Integer,
    K: Integer + IsLessOrEqual<L, Output = True>,
    L: Integer + IsLessOrEqual<Z0, Output = True>,
    T::Kind: IntervalRule<K, L>,
{
    #[inline]
    #[track_caller]
    fn sub_assign(&mut self, rhs: Interval<T, K, L>) {
        *self = derived(sub_raw(self.get(), rhs.get()));
    }
}
