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

//! The unconstrained wrapper every raw integer enters the library through.

use crate::bound::bounds::Bounds;
use crate::bound::refinement::{Implies, Refinement, Token};
use crate::bound::shapes::{Interval, LowerBound, UpperBound};
use crate::num::repr::{IntervalRule, Repr};
use typenum::Integer;

/// A raw integer with no proven bounds.
///
/// `BoundedValue` is the entry point of the conversion protocol: its
/// predicate accepts everything, and [`Refinement::assume`] /
/// [`Refinement::constrain`] move it into a stronger shape.
///
/// # Examples
///
/// ```rust
/// use ranged_core::bound::{BoundedValue, Refinement};
/// use typenum::{P10, Z0};
///
/// let input = BoundedValue::new(7i32);
/// let digit = input.constrain_within::<Z0, P10>().expect("in range");
/// assert_eq!(digit.get(), 7);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BoundedValue<T> {
    value: T,
}

impl<T> BoundedValue<T>
where
    T: Repr,
{
    /// Wraps a raw integer.
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Lossless conversion to a wider representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ranged_core::bound::{BoundedValue, Refinement};
    /// let wide: BoundedValue<i64> = BoundedValue::new(-3i8).cast();
    /// assert_eq!(wide.get(), -3);
    /// ```
    #[inline(always)]
    pub fn cast<U>(self) -> BoundedValue<U>
    where
        U: Repr + From<T>,
    {
        BoundedValue::new(<U as From<T>>::from(self.value))
    }

    /// Trusted narrowing into `UpperBound<T, N>`.
    ///
    /// # Panics
    ///
    /// Panics with a contract violation if the value exceeds `N`.
    #[inline]
    #[track_caller]
    pub fn assume_upper<N: Integer>(self) -> UpperBound<T, N> {
        self.assume()
    }

    /// Checked narrowing into `UpperBound<T, N>`.
    #[inline]
    pub fn constrain_upper<N: Integer>(self) -> Option<UpperBound<T, N>> {
        self.constrain()
    }

    /// Trusted narrowing into `LowerBound<T, N>`.
    ///
    /// # Panics
    ///
    /// Panics with a contract violation if the value is below `N`.
    #[inline]
    #[track_caller]
    pub fn assume_lower<N: Integer>(self) -> LowerBound<T, N> {
        self.assume()
    }

    /// Checked narrowing into `LowerBound<T, N>`.
    #[inline]
    pub fn constrain_lower<N: Integer>(self) -> Option<LowerBound<T, N>> {
        self.constrain()
    }

    /// Checked narrowing into `Interval<T, N, M>`.
    ///
    /// For unsigned representations with `N > M` the interval wraps:
    ///
    /// ```rust
    /// # use ranged_core::bound::{BoundedValue, Refinement};
    /// use typenum::{P5, P250};
    ///
    /// assert!(BoundedValue::new(253u8).constrain_within::<P250, P5>().is_some());
    /// assert!(BoundedValue::new(2u8).constrain_within::<P250, P5>().is_some());
    /// assert!(BoundedValue::new(100u8).constrain_within::<P250, P5>().is_none());
    /// ```
    #[inline]
    pub fn constrain_within<N, M>(self) -> Option<Interval<T, N, M>>
    where
        N: Integer,
        M: Integer,
        T::Kind: IntervalRule<N, M>,
    {
        self.constrain()
    }
}

impl<T> Refinement for BoundedValue<T>
where
    T: Repr,
{
    type Repr = T;

    #[inline(always)]
    fn is_valid(_raw: T) -> bool {
        true
    }

    #[inline]
    fn bounds() -> Bounds {
        Bounds::Unbounded
    }

    #[inline(always)]
    fn get(self) -> T {
        self.value
    }

    #[inline(always)]
    fn from_raw(raw: T, _token: Token) -> Self {
        Self::new(raw)
    }
}

impl<T> Implies<BoundedValue<T>> for BoundedValue<T> where T: Repr {}

impl<T> From<T> for BoundedValue<T>
where
    T: Repr,
{
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> PartialEq<T> for BoundedValue<T>
where
    T: Repr,
{
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.value == *other
    }
}

impl<T> PartialOrd<T> for BoundedValue<T>
where
    T: Repr,
{
    #[inline]
    fn partial_cmp(&self, other: &T) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(other)
    }
}

impl<T> std::fmt::Display for BoundedValue<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typenum::{N7, P2, P10, Z0};

    #[test]
    fn test_new_and_get() {
        let x = BoundedValue::new(-12i16);
        assert_eq!(x.get(), -12);
        assert_eq!(x, -12i16);
        assert!(x < 0i16);
        assert_eq!(BoundedValue::<u8>::default().get(), 0);
    }

    #[test]
    fn test_one_sided_narrowing() {
        let x = BoundedValue::new(2i32);
        assert_eq!(x.assume_upper::<P2>().get(), 2);
        assert!(x.constrain_upper::<Z0>().is_none());
        assert_eq!(x.assume_lower::<N7>().get(), 2);
        assert!(x.constrain_lower::<P10>().is_none());
    }

    #[test]
    fn test_within_signed() {
        assert!(BoundedValue::new(0i32).constrain_within::<Z0, P10>().is_some());
        assert!(BoundedValue::new(10i32).constrain_within::<Z0, P10>().is_some());
        assert!(BoundedValue::new(-1i32).constrain_within::<Z0, P10>().is_none());
        assert!(BoundedValue::new(11i32).constrain_within::<Z0, P10>().is_none());
    }

    #[test]
    #[should_panic(expected = "contract violation: value 3 is outside <= 2")]
    fn test_assume_upper_violation() {
        BoundedValue::new(3i32).assume_upper::<P2>();
    }

    #[test]
    fn test_cast_and_display() {
        let x: BoundedValue<u64> = BoundedValue::new(200u8).cast();
        assert_eq!(x.get(), 200);
        assert_eq!(x.to_string(), "200");
        assert_eq!(BoundedValue::from(5usize).get(), 5);
    }
}
