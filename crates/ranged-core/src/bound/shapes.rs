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

//! # Bound Shapes
//!
//! The three refinements of a raw integer: [`UpperBound`], [`LowerBound`]
//! and [`Interval`]. Their numeric parameters are `typenum` integers and
//! part of the type, so two shapes are the same type exactly when the
//! representation and every parameter match.
//!
//! Moving between shapes follows one of two rules:
//!
//! - Along a subset relation proven by the parameters (an `Interval<T, 0, 4>`
//!   is an `UpperBound<T, 9>`), conversion is a zero-cost reinterpretation
//!   through [`Refinement::widen`] or `From`.
//! - Anywhere else, the value is re-validated through
//!   [`Refinement::assume`] or [`Refinement::constrain`].

use crate::bound::bounds::{Bounds, violated};
use crate::bound::refinement::{Implies, Refinement, Token};
use crate::bound::value::BoundedValue;
use crate::num::repr::{IntervalRule, Repr, param};
use std::marker::PhantomData;
use typenum::{Integer, IsGreaterOrEqual, IsLessOrEqual, True};

/// Narrows the type-level integer `N` into the representation `T`.
///
/// # Panics
///
/// Panics with a contract violation if `N` is not representable by `T`.
#[inline]
#[track_caller]
pub(crate) fn repr_of<T: Repr, N: Integer>() -> T {
    let wide = param::<N>();
    match T::narrow(wide) {
        Some(value) => value,
        None => {
            let lo = <T as num_traits::Bounded>::min_value().widen();
            let hi = <T as num_traits::Bounded>::max_value().widen();
            violated(wide, Bounds::Within(lo, hi))
        }
    }
}

/// A raw integer proven to be at most `N`.
///
/// # Examples
///
/// ```rust
/// use ranged_core::bound::{BoundedValue, Refinement, UpperBound};
/// use typenum::{P3, P5};
///
/// let a: UpperBound<i32, P5> = BoundedValue::new(4).assume();
/// let b: UpperBound<i32, P3> = BoundedValue::new(-10).assume();
/// let c = a + b; // UpperBound<i32, P8>
/// assert_eq!(c.get(), -6);
/// ```
#[repr(transparent)]
pub struct UpperBound<T, N> {
    value: T,
    bound: PhantomData<fn() -> N>,
}

/// A raw integer proven to be at least `N`.
///
/// # Examples
///
/// ```rust
/// use ranged_core::bound::{BoundedValue, LowerBound, Refinement};
/// use typenum::N7;
///
/// fn takes_lower(x: LowerBound<i32, N7>) -> i32 {
///     x.get()
/// }
///
/// let x = BoundedValue::new(-2).constrain_lower::<N7>().unwrap();
/// assert_eq!(takes_lower(x), -2);
/// ```
#[repr(transparent)]
pub struct LowerBound<T, N> {
    value: T,
    bound: PhantomData<fn() -> N>,
}

/// A raw integer proven to lie in the closed interval `[N, M]`.
///
/// For signed representations `N <= M` is required: the impls simply do not
/// exist for a reversed interval.
///
/// ```rust,compile_fail
/// use ranged_core::bound::BoundedValue;
/// use typenum::{P2, P5};
///
/// let x = BoundedValue::new(3).constrain_within::<P5, P2>();
/// ```
///
/// For unsigned representations `N > M` denotes a window that wraps around
/// the top of the domain, valid iff `value >= N || value <= M`.
///
/// # Examples
///
/// ```rust
/// use ranged_core::bound::{BoundedValue, Interval, Refinement};
/// use typenum::{P2, P4, P8, Z0};
///
/// let a: Interval<i32, Z0, P4> = BoundedValue::new(3).assume();
/// let b: Interval<i32, P2, P4> = BoundedValue::new(2).assume();
/// let sum = a + b; // Interval<i32, P2, P8>
/// let _: Interval<i32, P2, P8> = sum;
/// assert_eq!(sum.get(), 5);
/// ```
#[repr(transparent)]
pub struct Interval<T, N, M> {
    value: T,
    bound: PhantomData<fn() -> (N, M)>,
}

macro_rules! shape_common {
    ($shape:ident < $($p:ident),+ >) => {
        impl<T: Copy, $($p),+> Clone for $shape<T, $($p),+> {
            #[inline(always)]
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T: Copy, $($p),+> Copy for $shape<T, $($p),+> {}

        impl<T: PartialEq, $($p),+> PartialEq for $shape<T, $($p),+> {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.value == other.value
            }
        }

        impl<T: Eq, $($p),+> Eq for $shape<T, $($p),+> {}

        impl<T: PartialOrd, $($p),+> PartialOrd for $shape<T, $($p),+> {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.value.partial_cmp(&other.value)
            }
        }

        impl<T: Ord, $($p),+> Ord for $shape<T, $($p),+> {
            #[inline]
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.value.cmp(&other.value)
            }
        }

        impl<T: std::hash::Hash, $($p),+> std::hash::Hash for $shape<T, $($p),+> {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.value.hash(state);
            }
        }

        impl<T: Repr, $($p),+> PartialEq<T> for $shape<T, $($p),+> {
            #[inline]
            fn eq(&self, other: &T) -> bool {
                self.value == *other
            }
        }

        impl<T: Repr, $($p),+> PartialOrd<T> for $shape<T, $($p),+> {
            #[inline]
            fn partial_cmp(&self, other: &T) -> Option<std::cmp::Ordering> {
                self.value.partial_cmp(other)
            }
        }

        impl<T: std::fmt::Display, $($p),+> std::fmt::Display for $shape<T, $($p),+> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.value)
            }
        }

        impl<T, $($p),+> From<$shape<T, $($p),+>> for BoundedValue<T>
        where
            T: Repr,
        {
            #[inline(always)]
            fn from(shape: $shape<T, $($p),+>) -> Self {
                BoundedValue::new(shape.value)
            }
        }

        impl<T, $($p),+> Implies<BoundedValue<T>> for $shape<T, $($p),+>
        where
            T: Repr,
            Self: Refinement<Repr = T>,
        {
        }
    };
}

shape_common!(UpperBound<N>);
shape_common!(LowerBound<N>);
shape_common!(Interval<N, M>);

fn interval_bounds<T, N, M>() -> Bounds
where
    T: Repr,
    N: Integer,
    M: Integer,
    T::Kind: IntervalRule<N, M>,
{
    if <T::Kind as IntervalRule<N, M>>::WRAPPING {
        Bounds::Wrapping(param::<N>(), param::<M>())
    } else {
        Bounds::Within(param::<N>(), param::<M>())
    }
}

fn debug_shape<T: std::fmt::Debug>(
    f: &mut std::fmt::Formatter<'_>,
    name: &str,
    value: &T,
    bounds: Bounds,
) -> std::fmt::Result {
    f.debug_struct(name)
        .field("value", value)
        .field("bounds", &format_args!("{}", bounds))
        .finish()
}

impl<T: std::fmt::Debug, N: Integer> std::fmt::Debug for UpperBound<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        debug_shape(f, "UpperBound", &self.value, Bounds::AtMost(param::<N>()))
    }
}

impl<T: std::fmt::Debug, N: Integer> std::fmt::Debug for LowerBound<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        debug_shape(f, "LowerBound", &self.value, Bounds::AtLeast(param::<N>()))
    }
}

impl<T, N, M> std::fmt::Debug for Interval<T, N, M>
where
    T: Repr,
    N: Integer,
    M: Integer,
    T::Kind: IntervalRule<N, M>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        debug_shape(f, "Interval", &self.value, interval_bounds::<T, N, M>())
    }
}

macro_rules! impl_into_raw {
    ($($t:ty),* $(,)?) => {
        $(
            impl<N> From<UpperBound<$t, N>> for $t {
                #[inline(always)]
                fn from(shape: UpperBound<$t, N>) -> Self {
                    shape.value
                }
            }

            impl<N> From<LowerBound<$t, N>> for $t {
                #[inline(always)]
                fn from(shape: LowerBound<$t, N>) -> Self {
                    shape.value
                }
            }

            impl<N, M> From<Interval<$t, N, M>> for $t {
                #[inline(always)]
                fn from(shape: Interval<$t, N, M>) -> Self {
                    shape.value
                }
            }

            impl From<BoundedValue<$t>> for $t {
                #[inline(always)]
                fn from(value: BoundedValue<$t>) -> Self {
                    value.get()
                }
            }
        )*
    };
}

impl_into_raw!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T, N> Refinement for UpperBound<T, N>
where
    T: Repr,
    N: Integer,
{
    type Repr = T;

    #[inline(always)]
    fn is_valid(raw: T) -> bool {
        raw.widen() <= param::<N>()
    }

    #[inline]
    fn bounds() -> Bounds {
        Bounds::AtMost(param::<N>())
    }

    #[inline(always)]
    fn get(self) -> T {
        self.value
    }

    #[inline(always)]
    fn from_raw(raw: T, _token: Token) -> Self {
        Self {
            value: raw,
            bound: PhantomData,
        }
    }
}

impl<T, N> Refinement for LowerBound<T, N>
where
    T: Repr,
    N: Integer,
{
    type Repr = T;

    #[inline(always)]
    fn is_valid(raw: T) -> bool {
        raw.widen() >= param::<N>()
    }

    #[inline]
    fn bounds() -> Bounds {
        Bounds::AtLeast(param::<N>())
    }

    #[inline(always)]
    fn get(self) -> T {
        self.value
    }

    #[inline(always)]
    fn from_raw(raw: T, _token: Token) -> Self {
        Self {
            value: raw,
            bound: PhantomData,
        }
    }
}

impl<T, N, M> Refinement for Interval<T, N, M>
where
    T: Repr,
    N: Integer,
    M: Integer,
    T::Kind: IntervalRule<N, M>,
{
    type Repr = T;

    #[inline(always)]
    fn is_valid(raw: T) -> bool {
        <T::Kind as IntervalRule<N, M>>::contains(raw.widen())
    }

    #[inline]
    fn bounds() -> Bounds {
        interval_bounds::<T, N, M>()
    }

    #[inline(always)]
    fn get(self) -> T {
        self.value
    }

    #[inline(always)]
    fn from_raw(raw: T, _token: Token) -> Self {
        Self {
            value: raw,
            bound: PhantomData,
        }
    }
}

impl<T, N> UpperBound<T, N>
where
    T: Repr,
    N: Integer,
{
    /// The value sitting exactly on the bound.
    ///
    /// # Panics
    ///
    /// Panics with a contract violation if `N` does not fit in `T`.
    #[inline]
    #[track_caller]
    pub fn at_bound() -> Self {
        Self {
            value: repr_of::<T, N>(),
            bound: PhantomData,
        }
    }

    /// Trusted narrowing to the interval `[M, N]`.
    ///
    /// # Panics
    ///
    /// Panics with a contract violation if the value is below `M`.
    #[inline]
    #[track_caller]
    pub fn assume_lower<M>(self) -> Interval<T, M, N>
    where
        M: Integer,
        T::Kind: IntervalRule<M, N>,
    {
        self.assume()
    }

    /// Checked narrowing to the interval `[M, N]`.
    #[inline]
    pub fn constrain_lower<M>(self) -> Option<Interval<T, M, N>>
    where
        M: Integer,
        T::Kind: IntervalRule<M, N>,
    {
        self.constrain()
    }

    /// Lossless conversion to a wider representation, keeping the bound.
    #[inline(always)]
    pub fn cast<U>(self) -> UpperBound<U, N>
    where
        U: Repr + From<T>,
    {
        UpperBound {
            value: <U as From<T>>::from(self.value),
            bound: PhantomData,
        }
    }
}

impl<T, N> LowerBound<T, N>
where
    T: Repr,
    N: Integer,
{
    /// The value sitting exactly on the bound.
    ///
    /// # Panics
    ///
    /// Panics with a contract violation if `N` does not fit in `T`.
    #[inline]
    #[track_caller]
    pub fn at_bound() -> Self {
        Self {
            value: repr_of::<T, N>(),
            bound: PhantomData,
        }
    }

    /// Trusted narrowing to the interval `[N, M]`.
    ///
    /// # Panics
    ///
    /// Panics with a contract violation if the value exceeds `M`.
    #[inline]
    #[track_caller]
    pub fn assume_upper<M>(self) -> Interval<T, N, M>
    where
        M: Integer,
        T::Kind: IntervalRule<N, M>,
    {
        self.assume()
    }

    /// Checked narrowing to the interval `[N, M]`.
    #[inline]
    pub fn constrain_upper<M>(self) -> Option<Interval<T, N, M>>
    where
        M: Integer,
        T::Kind: IntervalRule<N, M>,
    {
        self.constrain()
    }

    /// Lossless conversion to a wider representation, keeping the bound.
    #[inline(always)]
    pub fn cast<U>(self) -> LowerBound<U, N>
    where
        U: Repr + From<T>,
    {
        LowerBound {
            value: <U as From<T>>::from(self.value),
            bound: PhantomData,
        }
    }
}

impl<T, N, M> Interval<T, N, M>
where
    T: Repr,
    N: Integer,
    M: Integer,
    T::Kind: IntervalRule<N, M>,
{
    /// The value `N`.
    ///
    /// # Panics
    ///
    /// Panics with a contract violation if `N` does not fit in `T`.
    #[inline]
    #[track_caller]
    pub fn lowest() -> Self {
        Self {
            value: repr_of::<T, N>(),
            bound: PhantomData,
        }
    }

    /// The value `M`.
    ///
    /// # Panics
    ///
    /// Panics with a contract violation if `M` does not fit in `T`.
    #[inline]
    #[track_caller]
    pub fn highest() -> Self {
        Self {
            value: repr_of::<T, M>(),
            bound: PhantomData,
        }
    }

    /// `true` if the interval wraps around the unsigned domain.
    #[inline(always)]
    pub fn is_wrapping() -> bool {
        <T::Kind as IntervalRule<N, M>>::WRAPPING
    }

    /// Trusted narrowing of the upper end to `MM`.
    ///
    /// # Panics
    ///
    /// Panics with a contract violation if the value exceeds `MM`.
    #[inline]
    #[track_caller]
    pub fn assume_upper<MM>(self) -> Interval<T, N, MM>
    where
        MM: Integer,
        T::Kind: IntervalRule<N, MM>,
    {
        self.assume()
    }

    /// Checked narrowing of the upper end to `MM`.
    #[inline]
    pub fn constrain_upper<MM>(self) -> Option<Interval<T, N, MM>>
    where
        MM: Integer,
        T::Kind: IntervalRule<N, MM>,
    {
        self.constrain()
    }

    /// Trusted narrowing of the lower end to `NN`.
    ///
    /// # Panics
    ///
    /// Panics with a contract violation if the value is below `NN`.
    #[inline]
    #[track_caller]
    pub fn assume_lower<NN>(self) -> Interval<T, NN, M>
    where
        NN: Integer,
        T::Kind: IntervalRule<NN, M>,
    {
        self.assume()
    }

    /// Checked narrowing of the lower end to `NN`.
    #[inline]
    pub fn constrain_lower<NN>(self) -> Option<Interval<T, NN, M>>
    where
        NN: Integer,
        T::Kind: IntervalRule<NN, M>,
    {
        self.constrain()
    }

    /// Projection onto the upper end.
    #[inline(always)]
    pub fn upper(self) -> UpperBound<T, M>
    where
        N: IsLessOrEqual<M, Output = True>,
    {
        UpperBound {
            value: self.value,
            bound: PhantomData,
        }
    }

    /// Projection onto the lower end.
    #[inline(always)]
    pub fn lower(self) -> LowerBound<T, N>
    where
        N: IsLessOrEqual<M, Output = True>,
    {
        LowerBound {
            value: self.value,
            bound: PhantomData,
        }
    }

    /// Lossless conversion to a wider representation, keeping the bounds.
    ///
    /// Only ordinary (non-wrapping) intervals can be cast, since a wrapping
    /// window does not survive a change of domain.
    #[inline(always)]
    pub fn cast<U>(self) -> Interval<U, N, M>
    where
        U: Repr + From<T>,
        U::Kind: IntervalRule<N, M>,
        N: IsLessOrEqual<M, Output = True>,
    {
        Interval {
            value: <U as From<T>>::from(self.value),
            bound: PhantomData,
        }
    }
}

/// The single value `N` as the interval `[N, N]`.
///
/// # Panics
///
/// Panics with a contract violation if `N` does not fit in `T`.
///
/// # Examples
///
/// ```rust
/// use ranged_core::bound::{Interval, Refinement, constant};
/// use typenum::P9;
///
/// let nine: Interval<i32, P9, P9> = constant();
/// assert_eq!(nine.get(), 9);
/// ```
#[inline]
#[track_caller]
pub fn constant<T, N>() -> Interval<T, N, N>
where
    T: Repr,
    N: Integer,
    T::Kind: IntervalRule<N, N>,
{
    Interval::lowest()
}

impl<T, N, M> Implies<UpperBound<T, M>> for UpperBound<T, N>
where
    T: Repr,
    N: Integer,
    M: Integer + IsGreaterOrEqual<N, Output = True>,
{
}

impl<T, N, M> Implies<LowerBound<T, M>> for LowerBound<T, N>
where
    T: Repr,
    N: Integer,
    M: Integer + IsLessOrEqual<N, Output = True>,
{
}

impl<T, N, M, MM> Implies<UpperBound<T, MM>> for Interval<T, N, M>
where
    T: Repr,
    N: Integer + IsLessOrEqual<M, Output = True>,
    M: Integer,
    MM: Integer + IsGreaterOrEqual<M, Output = True>,
    T::Kind: IntervalRule<N, M>,
{
}

impl<T, N, M, NN> Implies<LowerBound<T, NN>> for Interval<T, N, M>
where
    T: Repr,
    N: Integer + IsLessOrEqual<M, Output = True>,
    M: Integer,
    NN: Integer + IsLessOrEqual<N, Output = True>,
    T::Kind: IntervalRule<N, M>,
{
}

impl<T, N, M, NN, MM> Implies<Interval<T, NN, MM>> for Interval<T, N, M>
where
    T: Repr,
    N: Integer + IsLessOrEqual<M, Output = True>,
    M: Integer,
    NN: Integer + IsLessOrEqual<N, Output = True>,
    MM: Integer + IsGreaterOrEqual<M, Output = True>,
    T::Kind: IntervalRule<N, M> + IntervalRule<NN, MM>,
{
}

impl<T, N, M, MM> From<Interval<T, N, M>> for UpperBound<T, MM>
where
    T: Repr,
    N: Integer + IsLessOrEqual<M, Output = True>,
    M: Integer,
    MM: Integer + IsGreaterOrEqual<M, Output = True>,
    T::Kind: IntervalRule<N, M>,
{
    #[inline(always)]
    fn from(interval: Interval<T, N, M>) -> Self {
        interval.widen()
    }
}

impl<T, N, M, NN> From<Interval<T, N, M>> for LowerBound<T, NN>
where
    T: Repr,
    N: Integer + IsLessOrEqual<M, Output = True>,
    M: Integer,
    NN: Integer + IsLessOrEqual<N, Output = True>,
    T::Kind: IntervalRule<N, M>,
{
    #[inline(always)]
    fn from(interval: Interval<T, N, M>) -> Self {
        interval.widen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use typenum::{N3, N7, P2, P4, P5, P9, P10, P45, P250, Z0};

    #[test]
    fn test_upper_bound_predicate() {
        assert!(UpperBound::<i32, P5>::is_valid(5));
        assert!(UpperBound::<i32, P5>::is_valid(i32::MIN));
        assert!(!UpperBound::<i32, P5>::is_valid(6));
        assert_eq!(UpperBound::<i32, P5>::bounds(), Bounds::AtMost(5));
    }

    #[test]
    fn test_lower_bound_predicate() {
        assert!(LowerBound::<i8, N7>::is_valid(-7));
        assert!(!LowerBound::<i8, N7>::is_valid(-8));
        assert!(LowerBound::<u8, N7>::is_valid(0));
    }

    #[test]
    fn test_interval_predicate_signed() {
        type Digit = Interval<i16, Z0, P9>;
        for v in -20i16..20 {
            assert_eq!(Digit::is_valid(v), (0..=9).contains(&v));
        }
        assert!(!Digit::is_wrapping());
        assert_eq!(Digit::bounds(), Bounds::Within(0, 9));
    }

    #[test]
    fn test_interval_predicate_unsigned_wrapping() {
        type Wrap = Interval<u8, P250, P5>;
        assert!(Wrap::is_wrapping());
        assert_eq!(Wrap::bounds(), Bounds::Wrapping(250, 5));
        assert!(Wrap::is_valid(250));
        assert!(Wrap::is_valid(255));
        assert!(Wrap::is_valid(0));
        assert!(Wrap::is_valid(5));
        assert!(!Wrap::is_valid(6));
        assert!(!Wrap::is_valid(249));
    }

    #[test]
    fn test_constrain_matches_predicate_randomized() {
        let mut rng = StdRng::seed_from_u64(0xB0A7);
        for _ in 0..10_000 {
            let raw: i32 = rng.random_range(-100..100);
            let value = BoundedValue::new(raw);

            match value.constrain::<Interval<i32, N3, P45>>() {
                Some(v) => {
                    assert!(Interval::<i32, N3, P45>::is_valid(raw));
                    assert_eq!(v.get(), raw);
                }
                None => assert!(!Interval::<i32, N3, P45>::is_valid(raw)),
            }

            match value.constrain::<UpperBound<i32, P10>>() {
                Some(v) => assert_eq!(v.get(), raw),
                None => assert!(raw > 10),
            }

            match value.constrain::<LowerBound<i32, N7>>() {
                Some(v) => assert_eq!(v.get(), raw),
                None => assert!(raw < -7),
            }
        }
    }

    #[test]
    fn test_constrain_unsigned_wrapping_randomized() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2_000 {
            let raw: u8 = rng.random();
            let got = BoundedValue::new(raw).constrain::<Interval<u8, P250, P5>>();
            assert_eq!(got.is_some(), raw >= 250 || raw <= 5);
        }
    }

    #[test]
    #[should_panic(expected = "contract violation: value 10 is outside [0, 9]")]
    fn test_assume_traps() {
        let _: Interval<i32, Z0, P9> = BoundedValue::new(10).assume();
    }

    #[test]
    fn test_refine_reports_bounds() {
        let err = BoundedValue::new(-8i64)
            .refine::<LowerBound<i64, N7>>()
            .unwrap_err();
        assert_eq!(err.value(), -8);
        assert_eq!(err.bounds(), Bounds::AtLeast(-7));
    }

    #[test]
    fn test_assume_unchecked_valid() {
        let x: UpperBound<u32, P4> = unsafe { BoundedValue::new(3u32).assume_unchecked() };
        assert_eq!(x.get(), 3);
    }

    #[test]
    fn test_at_bound_and_constants() {
        assert_eq!(UpperBound::<i32, P5>::at_bound().get(), 5);
        assert_eq!(LowerBound::<i32, N7>::at_bound().get(), -7);
        assert_eq!(Interval::<u8, P2, P9>::lowest().get(), 2);
        assert_eq!(Interval::<u8, P2, P9>::highest().get(), 9);
        assert_eq!(constant::<i64, P45>().get(), 45);
    }

    #[test]
    #[should_panic(expected = "contract violation")]
    fn test_constant_out_of_repr() {
        let _ = constant::<u8, N3>();
    }

    #[test]
    fn test_one_sided_to_interval() {
        let up: UpperBound<i32, P10> = BoundedValue::new(4).assume();
        let iv = up.assume_lower::<Z0>();
        assert_eq!(iv.get(), 4);
        assert!(up.constrain_lower::<P5>().is_none());

        let low: LowerBound<i32, Z0> = BoundedValue::new(10).assume();
        assert!(low.constrain_upper::<P10>().is_some());
        assert!(low.constrain_upper::<P9>().is_none());
    }

    #[test]
    fn test_interval_narrowing() {
        let iv: Interval<i32, Z0, P45> = BoundedValue::new(9).assume();
        assert_eq!(iv.constrain_upper::<P9>().unwrap().get(), 9);
        assert!(iv.constrain_upper::<P5>().is_none());
        assert!(iv.constrain_lower::<P10>().is_none());
        assert_eq!(iv.assume_lower::<P4>().get(), 9);
    }

    #[test]
    fn test_widening_conversions() {
        let iv: Interval<i32, P2, P4> = BoundedValue::new(3).assume();

        let up: UpperBound<i32, P4> = iv.upper();
        let low: LowerBound<i32, P2> = iv.lower();
        assert_eq!(up.get(), 3);
        assert_eq!(low.get(), 3);

        let looser_up: UpperBound<i32, P9> = iv.into();
        let looser_low: LowerBound<i32, N3> = iv.into();
        assert_eq!(looser_up.get(), 3);
        assert_eq!(looser_low.get(), 3);

        let wider: Interval<i32, Z0, P10> = iv.widen();
        assert_eq!(wider.get(), 3);

        let up_wider: UpperBound<i32, P45> = up.widen();
        let low_wider: LowerBound<i32, N7> = low.widen();
        assert_eq!(up_wider.get(), 3);
        assert_eq!(low_wider.get(), 3);

        let raw: BoundedValue<i32> = iv.widen();
        assert_eq!(raw.get(), 3);
        assert_eq!(i32::from(iv), 3);
    }

    fn split_ends<T, N, M>(iv: Interval<T, N, M>) -> (LowerBound<T, N>, UpperBound<T, M>)
    where
        T: Repr,
        N: Integer + IsLessOrEqual<M, Output = True>,
        M: Integer,
        T::Kind: IntervalRule<N, M>,
    {
        (iv.lower(), iv.upper())
    }

    #[test]
    fn test_projections_in_generic_context() {
        let iv: Interval<i64, N3, P5> = BoundedValue::new(-1i64).assume();
        let (low, up) = split_ends(iv);
        assert_eq!(low.get(), -1);
        assert_eq!(up.get(), -1);
        assert_eq!(LowerBound::<i64, N3>::bounds(), Bounds::AtLeast(-3));

        let digit: Interval<usize, Z0, P9> = BoundedValue::new(9usize).assume();
        let (low, up) = split_ends(digit);
        assert_eq!(low.get(), 9);
        assert_eq!(up, 9usize);
    }

    #[test]
    fn test_cast_keeps_bounds() {
        let iv: Interval<u8, P2, P9> = BoundedValue::new(7u8).assume();
        let wide: Interval<i32, P2, P9> = iv.cast();
        assert_eq!(wide.get(), 7);

        let up: UpperBound<i8, P5> = BoundedValue::new(-100i8).assume();
        assert_eq!(up.cast::<i64>().get(), -100);
    }

    #[test]
    fn test_comparisons_and_formatting() {
        let a: Interval<i32, Z0, P9> = BoundedValue::new(3).assume();
        let b: Interval<i32, Z0, P9> = BoundedValue::new(5).assume();
        assert!(a < b);
        assert_eq!(a, 3i32);
        assert!(b > 4i32);
        assert_eq!(a.to_string(), "3");
        assert_eq!(
            format!("{:?}", a),
            "Interval { value: 3, bounds: [0, 9] }"
        );
        let up: UpperBound<i32, P5> = BoundedValue::new(1).assume();
        assert_eq!(format!("{:?}", up), "UpperBound { value: 1, bounds: <= 5 }");
    }
}
