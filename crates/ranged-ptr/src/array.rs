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

//! A fixed-size array indexed by proven-in-bounds intervals.

use crate::ptr::{BoundedPtr, BoundedPtrMut};
use ranged_core::bound::{Interval, LowerBound, Refinement, UpperBound};
use ranged_core::range::{IntervalRange, RangeTo};
use std::ops::{Index, IndexMut};
use typenum::generic_const_mappings::{Const, ToUInt, U};
use typenum::{Integer, IsGreaterOrEqual, IsLess, IsLessOrEqual, NonZero, PInt, True, Unsigned, Z0};

/// The type-level length of an array of `N` elements.
pub type Len<const N: usize> = PInt<U<N>>;

/// An array of `N` elements whose `Index` takes an `Interval<usize, A, B>`
/// with `0 <= A <= B < N`, so every access is in bounds by construction.
///
/// # Examples
///
/// ```rust
/// use ranged_core::bound::{BoundedValue, Interval, Refinement};
/// use ranged_ptr::array::BoundedArray;
/// use typenum::{P10, Z0};
///
/// let squares = BoundedArray::<i32, 11>::from_fn(|i| (i * i) as i32);
/// let i: Interval<usize, Z0, P10> = BoundedValue::new(7).assume();
/// assert_eq!(squares[i], 49);
/// ```
///
/// An index type that may reach `N` does not compile:
///
/// ```rust,compile_fail
/// use ranged_core::bound::{BoundedValue, Interval, Refinement};
/// use ranged_ptr::array::BoundedArray;
/// use typenum::{P11, Z0};
///
/// let squares = BoundedArray::<i32, 11>::from_fn(|i| (i * i) as i32);
/// let i: Interval<usize, Z0, P11> = BoundedValue::new(7).assume();
/// let _ = squares[i];
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundedArray<T, const N: usize> {
    items: [T; N],
}

impl<T, const N: usize> BoundedArray<T, N> {
    /// Wraps an array.
    #[inline]
    pub const fn new(items: [T; N]) -> Self {
        Self { items }
    }

    /// Builds the array by calling `f` with each index.
    #[inline]
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self {
            items: std::array::from_fn(f),
        }
    }

    /// Unwraps the array.
    #[inline]
    pub fn into_inner(self) -> [T; N] {
        self.items
    }

    /// Number of elements, always `N`.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` if `N == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// The elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// The elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Iterates the elements in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T, const N: usize> BoundedArray<T, N>
where
    Const<N>: ToUInt,
    U<N>: Unsigned + NonZero,
{
    /// A pointer to the first element with window `[0, N)`.
    #[inline]
    pub fn as_bounded_ptr(&self) -> BoundedPtr<'_, T, Z0, Len<N>> {
        BoundedPtr::from_array(&self.items)
    }

    /// An exclusive pointer to the first element with window `[0, N)`.
    #[inline]
    pub fn as_bounded_ptr_mut(&mut self) -> BoundedPtrMut<'_, T, Z0, Len<N>> {
        BoundedPtrMut::from_array_mut(&mut self.items)
    }

    /// A pointer to the first element restricted to the window `[L, H)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranged_core::bound::constant;
    /// use ranged_ptr::array::BoundedArray;
    /// use typenum::{P2, P3, P5};
    ///
    /// let a = BoundedArray::new([10, 11, 12, 13, 14, 15]);
    /// let middle = a.window::<P2, P5>();
    /// assert_eq!(middle[constant::<isize, P3>()], 13);
    /// ```
    #[inline]
    pub fn window<L, H>(&self) -> BoundedPtr<'_, T, L, H>
    where
        L: Integer,
        H: Integer + IsLessOrEqual<Len<N>, Output = True>,
        Z0: IsLessOrEqual<L, Output = True>,
    {
        self.as_bounded_ptr().shrink()
    }

    /// An exclusive pointer to the first element restricted to `[L, H)`.
    #[inline]
    pub fn window_mut<L, H>(&mut self) -> BoundedPtrMut<'_, T, L, H>
    where
        L: Integer,
        H: Integer + IsLessOrEqual<Len<N>, Output = True>,
        Z0: IsLessOrEqual<L, Output = True>,
    {
        self.as_bounded_ptr_mut().shrink()
    }

    /// Every valid index, each typed as an interval inside `[0, N)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranged_ptr::array::BoundedArray;
    ///
    /// let mut a = BoundedArray::new([0u32; 4]);
    /// for i in a.indices() {
    ///     a[i] = 7;
    /// }
    /// assert_eq!(a.into_inner(), [7; 4]);
    /// ```
    #[inline]
    pub fn indices(&self) -> IntervalRange<usize, Z0, Len<N>> {
        LowerBound::<usize, Z0>::at_bound().range_to(UpperBound::<usize, Len<N>>::at_bound())
    }
}

impl<T, const N: usize, A, B> Index<Interval<usize, A, B>> for BoundedArray<T, N>
where
    Const<N>: ToUInt,
    U<N>: Unsigned + NonZero,
    A: Integer + IsGreaterOrEqual<Z0, Output = True> + IsLessOrEqual<B, Output = True>,
    B: Integer + IsLess<Len<N>, Output = True>,
{
    type Output = T;

    #[inline]
    fn index(&self, index: Interval<usize, A, B>) -> &T {
        // SAFETY: `0 <= A <= index <= B < N`.
        unsafe { self.items.get_unchecked(index.get()) }
    }
}

impl<T, const N: usize, A, B> IndexMut<Interval<usize, A, B>> for BoundedArray<T, N>
where
    Const<N>: ToUInt,
    U<N>: Unsigned + NonZero,
    A: Integer + IsGreaterOrEqual<Z0, Output = True> + IsLessOrEqual<B, Output = True>,
    B: Integer + IsLess<Len<N>, Output = True>,
{
    #[inline]
    fn index_mut(&mut self, index: Interval<usize, A, B>) -> &mut T {
        // SAFETY: `0 <= A <= index <= B < N`.
        unsafe { self.items.get_unchecked_mut(index.get()) }
    }
}

impl<T, const N: usize> From<[T; N]> for BoundedArray<T, N> {
    #[inline]
    fn from(items: [T; N]) -> Self {
        Self::new(items)
    }
}

impl<T, const N: usize> AsRef<[T]> for BoundedArray<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a BoundedArray<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use ranged_core::bound::{BoundedValue, constant};
    use typenum::{P2, P3, P4, P6, P7, P10};

    #[test]
    fn test_index_with_interval() {
        let a = BoundedArray::<i32, 11>::from_fn(|i| i as i32 * 2);
        let i: Interval<usize, Z0, P10> = BoundedValue::new(10usize).assume();
        assert_eq!(a[i], 20);
        assert_eq!(a[constant::<usize, Z0>()], 0);
        assert_eq!(a[constant::<usize, P3>()], 6);
    }

    #[test]
    fn test_index_randomized() {
        let mut a = BoundedArray::<u64, 11>::from_fn(|i| i as u64);
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..1_000 {
            let raw: usize = rng.random_range(0..=10);
            let i: Interval<usize, Z0, P10> = BoundedValue::new(raw).assume();
            a[i] += 1;
            assert!(a[i] > raw as u64);
        }
        let total: u64 = a.iter().sum();
        assert_eq!(total, (0..11).sum::<u64>() + 1_000);
    }

    #[test]
    fn test_index_mut_and_indices() {
        let mut a = BoundedArray::new([0usize; 7]);
        let mut seen = 0;
        for i in a.indices() {
            let _: Interval<usize, Z0, P6> = i;
            a[i] = i.get() * 3;
            seen += 1;
        }
        assert_eq!(seen, 7);
        assert_eq!(a.into_inner(), [0, 3, 6, 9, 12, 15, 18]);
    }

    #[test]
    fn test_bounded_ptr_views() {
        let mut a = BoundedArray::from([1, 2, 3, 4, 5, 6, 7]);
        {
            let p = a.as_bounded_ptr();
            assert_eq!(p.window().to_string(), "[0, 7)");
            assert_eq!(p[constant::<isize, P6>()], 7);
        }
        {
            let w = a.window::<P2, P4>();
            assert_eq!(w.window().to_string(), "[2, 4)");
            assert_eq!(w[constant::<isize, P3>()], 4);
        }
        {
            let mut w = a.window_mut::<P4, P7>();
            w[constant::<isize, P4>()] = 40;
        }
        {
            let mut p = a.as_bounded_ptr_mut();
            *p = 100;
        }
        assert_eq!(a.as_slice(), &[100, 2, 3, 4, 40, 6, 7]);
    }

    #[test]
    fn test_basic_accessors() {
        let mut a = BoundedArray::new([3u8, 1, 2]);
        assert_eq!(a.len(), 3);
        assert!(!a.is_empty());
        a.as_mut_slice().sort();
        assert_eq!(a.as_ref(), &[1, 2, 3]);
        assert_eq!((&a).into_iter().count(), 3);
    }
}
