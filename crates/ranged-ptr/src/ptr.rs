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

//! # Bounds-Tracked Pointers
//!
//! [`BoundedPtr`] and [`BoundedPtrMut`] pair an address with a type-level
//! window `[L, U)` of offsets that may be dereferenced. Indexing takes an
//! `Interval<isize, A, B>` and only compiles when `[A, B]` lies inside the
//! window, so element access needs no runtime check.
//!
//! Advancing a pointer by an interval shifts the window the other way:
//! advancing `[L, U)` by `[l, u]` leaves `[L - l, U - u)`, the offsets that
//! stay valid for every value the interval admits. The address itself may
//! point outside the underlying allocation; only window offsets are ever
//! dereferenced.
//!
//! # Examples
//!
//! ```rust
//! use ranged_core::bound::constant;
//! use ranged_ptr::ptr::BoundedPtr;
//! use typenum::{N3, P3, P6};
//!
//! let data = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
//! let p = BoundedPtr::from_array(&data) + constant::<isize, P3>();
//! assert_eq!(p.window().to_string(), "[-3, 7)");
//! assert_eq!(*p, 3);
//! assert_eq!(p[constant::<isize, N3>()], 0);
//! assert_eq!(p[constant::<isize, P6>()], 9);
//! ```
//!
//! Offsets outside the window do not compile:
//!
//! ```rust,compile_fail
//! use ranged_core::bound::constant;
//! use ranged_ptr::ptr::BoundedPtr;
//! use typenum::P3;
//!
//! let data = [1, 2, 3];
//! let p = BoundedPtr::from_array(&data);
//! let _ = p[constant::<isize, P3>()];
//! ```
//!
//! Nor does dereferencing a pointer whose window excludes offset zero:
//!
//! ```rust,compile_fail
//! use ranged_core::bound::constant;
//! use ranged_ptr::ptr::BoundedPtr;
//! use typenum::P1;
//!
//! let x = 5;
//! let p = BoundedPtr::from_ref(&x) + constant::<isize, P1>();
//! let _ = *p;
//! ```

use crate::window::Window;
use ranged_core::bound::{Interval, Refinement};
use std::marker::PhantomData;
use std::ops::{Add, Deref, DerefMut, Index, IndexMut, Sub};
use typenum::generic_const_mappings::{Const, ToUInt};
use typenum::{
    Diff, Integer, IsGreater, IsLess, IsLessOrEqual, NonZero, P1, PInt, True, Unsigned, Z0,
};

/// A shared pointer that may be dereferenced at offsets in `[L, U)`.
///
/// `Copy`, and `Send`/`Sync` exactly when `&'a T` is.
pub struct BoundedPtr<'a, T, L, U> {
    ptr: *const T,
    marker: PhantomData<(&'a T, fn() -> (L, U))>,
}

/// An exclusive pointer that may be dereferenced at offsets in `[L, U)`.
///
/// Not `Copy`; use [`BoundedPtrMut::reborrow`] for a shorter-lived copy.
pub struct BoundedPtrMut<'a, T, L, U> {
    ptr: *mut T,
    marker: PhantomData<(&'a mut T, fn() -> (L, U))>,
}

// SAFETY: a `BoundedPtr` only hands out `&'a T`, like a shared reference.
unsafe impl<T: Sync, L, U> Send for BoundedPtr<'_, T, L, U> {}
// SAFETY: as above.
unsafe impl<T: Sync, L, U> Sync for BoundedPtr<'_, T, L, U> {}
// SAFETY: a `BoundedPtrMut` is an exclusive borrow, like `&'a mut T`.
unsafe impl<T: Send, L, U> Send for BoundedPtrMut<'_, T, L, U> {}
// SAFETY: as above.
unsafe impl<T: Sync, L, U> Sync for BoundedPtrMut<'_, T, L, U> {}

impl<T, L, U> Clone for BoundedPtr<'_, T, L, U> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, L, U> Copy for BoundedPtr<'_, T, L, U> {}

impl<'a, T> BoundedPtr<'a, T, Z0, P1> {
    /// A pointer to a single element.
    #[inline]
    pub fn from_ref(value: &'a T) -> Self {
        Self {
            ptr: value,
            marker: PhantomData,
        }
    }
}

impl<'a, T, N> BoundedPtr<'a, T, Z0, PInt<N>>
where
    N: Unsigned + NonZero,
{
    /// A pointer to the first element of an array, covering all of it.
    #[inline]
    pub fn from_array<const LEN: usize>(items: &'a [T; LEN]) -> Self
    where
        Const<LEN>: ToUInt<Output = N>,
    {
        Self {
            ptr: items.as_ptr(),
            marker: PhantomData,
        }
    }
}

impl<'a, T, L, U> BoundedPtr<'a, T, L, U>
where
    L: Integer,
    U: Integer,
{
    /// The window of offsets this pointer may access.
    #[inline]
    pub fn window(&self) -> Window {
        Window::of::<L, U>()
    }

    /// The raw address.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr
    }

    /// The element at `offset`, borrowed for the full lifetime `'a`.
    #[inline]
    pub fn get<A, B>(&self, offset: Interval<isize, A, B>) -> &'a T
    where
        L: IsLessOrEqual<A, Output = True>,
        A: Integer + IsLessOrEqual<B, Output = True>,
        B: Integer + IsLess<U, Output = True>,
    {
        // SAFETY: `L <= A <= offset <= B < U`, and every offset of the
        // window addresses a live element for `'a`.
        unsafe { &*self.ptr.wrapping_offset(offset.get()) }
    }

    /// A single-element pointer at `offset`.
    #[inline]
    pub fn at<A, B>(self, offset: Interval<isize, A, B>) -> BoundedPtr<'a, T, Z0, P1>
    where
        L: IsLessOrEqual<A, Output = True>,
        A: Integer + IsLessOrEqual<B, Output = True>,
        B: Integer + IsLess<U, Output = True>,
    {
        BoundedPtr {
            ptr: self.ptr.wrapping_offset(offset.get()),
            marker: PhantomData,
        }
    }

    /// Forgets part of the window.
    #[inline]
    pub fn shrink<L2, U2>(self) -> BoundedPtr<'a, T, L2, U2>
    where
        L: IsLessOrEqual<L2, Output = True>,
        L2: Integer,
        U2: Integer + IsLessOrEqual<U, Output = True>,
    {
        BoundedPtr {
            ptr: self.ptr,
            marker: PhantomData,
        }
    }
}

impl<T, L, U> Deref for BoundedPtr<'_, T, L, U>
where
    L: Integer + IsLessOrEqual<Z0, Output = True>,
    U: Integer + IsGreater<Z0, Output = True>,
{
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        // SAFETY: offset zero lies in the window.
        unsafe { &*self.ptr }
    }
}

impl<T, L, U, A, B> Index<Interval<isize, A, B>> for BoundedPtr<'_, T, L, U>
where
    L: Integer + IsLessOrEqual<A, Output = True>,
    U: Integer,
    A: Integer + IsLessOrEqual<B, Output = True>,
    B: Integer + IsLess<U, Output = True>,
{
    type Output = T;

    #[inline]
    fn index(&self, offset: Interval<isize, A, B>) -> &T {
        self.get(offset)
    }
}

impl<'a, T, L, U, A, B> Add<Interval<isize, A, B>> for BoundedPtr<'a, T, L, U>
where
    L: Integer + Sub<A>,
    U: Integer + Sub<B>,
    A: Integer + IsLessOrEqual<B, Output = True>,
    B: Integer,
{
    type Output = BoundedPtr<'a, T, Diff<L, A>, Diff<U, B>>;

    #[inline]
    fn add(self, offset: Interval<isize, A, B>) -> Self::Output {
        BoundedPtr {
            ptr: self.ptr.wrapping_offset(offset.get()),
            marker: PhantomData,
        }
    }
}

impl<T, L, U> std::fmt::Debug for BoundedPtr<'_, T, L, U>
where
    L: Integer,
    U: Integer,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedPtr")
            .field("address", &self.ptr)
            .field("window", &self.window())
            .finish()
    }
}

impl<'a, T> BoundedPtrMut<'a, T, Z0, P1> {
    /// An exclusive pointer to a single element.
    #[inline]
    pub fn from_mut(value: &'a mut T) -> Self {
        Self {
            ptr: value,
            marker: PhantomData,
        }
    }
}

impl<'a, T, N> BoundedPtrMut<'a, T, Z0, PInt<N>>
where
    N: Unsigned + NonZero,
{
    /// An exclusive pointer to the first element of an array, covering all
    /// of it.
    #[inline]
    pub fn from_array_mut<const LEN: usize>(items: &'a mut [T; LEN]) -> Self
    where
        Const<LEN>: ToUInt<Output = N>,
    {
        Self {
            ptr: items.as_mut_ptr(),
            marker: PhantomData,
        }
    }
}

impl<'a, T, L, U> BoundedPtrMut<'a, T, L, U>
where
    L: Integer,
    U: Integer,
{
    /// The window of offsets this pointer may access.
    #[inline]
    pub fn window(&self) -> Window {
        Window::of::<L, U>()
    }

    /// The raw address.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr
    }

    /// A shorter-lived exclusive pointer with the same window.
    #[inline]
    pub fn reborrow(&mut self) -> BoundedPtrMut<'_, T, L, U> {
        BoundedPtrMut {
            ptr: self.ptr,
            marker: PhantomData,
        }
    }

    /// A shared pointer with the same window, borrowing `self`.
    #[inline]
    pub fn as_shared(&self) -> BoundedPtr<'_, T, L, U> {
        BoundedPtr {
            ptr: self.ptr,
            marker: PhantomData,
        }
    }

    /// Gives up exclusivity for the rest of `'a`.
    #[inline]
    pub fn into_shared(self) -> BoundedPtr<'a, T, L, U> {
        BoundedPtr {
            ptr: self.ptr,
            marker: PhantomData,
        }
    }

    /// A single-element exclusive pointer at `offset`, borrowing `self`.
    #[inline]
    pub fn at_mut<A, B>(&mut self, offset: Interval<isize, A, B>) -> BoundedPtrMut<'_, T, Z0, P1>
    where
        L: IsLessOrEqual<A, Output = True>,
        A: Integer + IsLessOrEqual<B, Output = True>,
        B: Integer + IsLess<U, Output = True>,
    {
        BoundedPtrMut {
            ptr: self.ptr.wrapping_offset(offset.get()),
            marker: PhantomData,
        }
    }

    /// Forgets part of the window.
    #[inline]
    pub fn shrink<L2, U2>(self) -> BoundedPtrMut<'a, T, L2, U2>
    where
        L: IsLessOrEqual<L2, Output = True>,
        L2: Integer,
        U2: Integer + IsLessOrEqual<U, Output = True>,
    {
        BoundedPtrMut {
            ptr: self.ptr,
            marker: PhantomData,
        }
    }
}

impl<T, L, U> Deref for BoundedPtrMut<'_, T, L, U>
where
    L: Integer + IsLessOrEqual<Z0, Output = True>,
    U: Integer + IsGreater<Z0, Output = True>,
{
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        // SAFETY: offset zero lies in the window.
        unsafe { &*self.ptr }
    }
}

impl<T, L, U> DerefMut for BoundedPtrMut<'_, T, L, U>
where
    L: Integer + IsLessOrEqual<Z0, Output = True>,
    U: Integer + IsGreater<Z0, Output = True>,
{
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        // SAFETY: offset zero lies in the window and the pointer is exclusive.
        unsafe { &mut *self.ptr }
    }
}

impl<T, L, U, A, B> Index<Interval<isize, A, B>> for BoundedPtrMut<'_, T, L, U>
where
    L: Integer + IsLessOrEqual<A, Output = True>,
    U: Integer,
    A: Integer + IsLessOrEqual<B, Output = True>,
    B: Integer + IsLess<U, Output = True>,
{
    type Output = T;

    #[inline]
    fn index(&self, offset: Interval<isize, A, B>) -> &T {
        // SAFETY: `L <= offset < U`.
        unsafe { &*self.ptr.wrapping_offset(offset.get()) }
    }
}

impl<T, L, U, A, B> IndexMut<Interval<isize, A, B>> for BoundedPtrMut<'_, T, L, U>
where
    L: Integer + IsLessOrEqual<A, Output = True>,
    U: Integer,
    A: Integer + IsLessOrEqual<B, Output = True>,
    B: Integer + IsLess<U, Output = True>,
{
    #[inline]
    fn index_mut(&mut self, offset: Interval<isize, A, B>) -> &mut T {
        // SAFETY: `L <= offset < U` and the pointer is exclusive.
        unsafe { &mut *self.ptr.wrapping_offset(offset.get()) }
    }
}

impl<'a, T, L, U, A, B> Add<Interval<isize, A, B>> for BoundedPtrMut<'a, T, L, U>
where
    L: Integer + Sub<A>,
    U: Integer + Sub<B>,
    A: Integer + IsLessOrEqual<B, Output = True>,
    B: Integer,
{
    type Output = BoundedPtrMut<'a, T, Diff<L, A>, Diff<U, B>>;

    #[inline]
    fn add(self, offset: Interval<isize, A, B>) -> Self::Output {
        BoundedPtrMut {
            ptr: self.ptr.wrapping_offset(offset.get()),
            marker: PhantomData,
        }
    }
}

impl<'a, T, L, U> From<BoundedPtrMut<'a, T, L, U>> for BoundedPtr<'a, T, L, U>
where
    L: Integer,
    U: Integer,
{
    #[inline]
    fn from(ptr: BoundedPtrMut<'a, T, L, U>) -> Self {
        ptr.into_shared()
    }
}

impl<T, L, U> std::fmt::Debug for BoundedPtrMut<'_, T, L, U>
where
    L: Integer,
    U: Integer,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedPtrMut")
            .field("address", &self.ptr)
            .field("window", &self.window())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use ranged_core::bound::{BoundedValue, constant};
    use typenum::{N3, N5, P2, P3, P4, P5, P6, P7, P9, P10};

    fn offset<A: Integer, B: Integer>(v: isize) -> Interval<isize, A, B>
    where
        A: IsLessOrEqual<B, Output = True>,
    {
        BoundedValue::new(v).assume()
    }

    #[test]
    fn test_from_ref_deref() {
        let x = 42u64;
        let p = BoundedPtr::from_ref(&x);
        assert_eq!(*p, 42);
        assert_eq!(p.window(), Window::new(0, 1));
        let q = p;
        assert_eq!(*q, *p);
    }

    #[test]
    fn test_advance_shifts_window() {
        let data: [i32; 10] = std::array::from_fn(|i| i as i32 * 10);
        let p = BoundedPtr::from_array(&data);
        assert_eq!(p.window().to_string(), "[0, 10)");

        let q: BoundedPtr<'_, i32, N3, P7> = p + constant::<isize, P3>();
        assert_eq!(q.window().to_string(), "[-3, 7)");
        assert_eq!(*q, 30);
        assert_eq!(q[constant::<isize, N3>()], 0);
        assert_eq!(q[constant::<isize, P6>()], 90);
        assert_eq!(q.get(offset::<Z0, P2>(2)), &50);
    }

    #[test]
    fn test_advance_by_runtime_interval_randomized() {
        let data: [usize; 10] = std::array::from_fn(|i| i);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..1_000 {
            let by = rng.random_range(0..=4i64) as isize;
            let at = rng.random_range(0..=5i64) as isize;
            let p = BoundedPtr::from_array(&data);
            // [0, 10) advanced by [0, 4] leaves [0, 6).
            let q: BoundedPtr<'_, usize, Z0, P6> = p + offset::<Z0, P4>(by);
            assert_eq!(q.window(), Window::new(0, 6));
            assert_eq!(q[offset::<Z0, P5>(at)], (by + at) as usize);
        }
    }

    #[test]
    fn test_at_and_shrink() {
        let data = [1u8, 2, 3, 4, 5];
        let p = BoundedPtr::from_array(&data);
        let single = p.at(constant::<isize, P4>());
        assert_eq!(*single, 5);
        assert_eq!(single.window(), Window::new(0, 1));

        let inner: BoundedPtr<'_, u8, P2, P3> = p.shrink();
        assert_eq!(inner.window(), Window::new(2, 3));
        assert_eq!(inner[constant::<isize, P2>()], 3);
    }

    #[test]
    fn test_advanced_single_element_pointer() {
        let x = 1i16;
        let p = BoundedPtr::from_ref(&x) + constant::<isize, P5>();
        assert_eq!(p.window(), Window::new(-5, -4));
        assert_eq!(p[constant::<isize, N5>()], 1);

        // Advancing by an interval wider than the window leaves nothing.
        let q = BoundedPtr::from_ref(&x) + offset::<Z0, P5>(0);
        assert!(q.window().is_empty());
    }

    #[test]
    fn test_mutable_pointer() {
        let mut data = [0i32; 10];
        {
            let mut p = BoundedPtrMut::from_array_mut(&mut data);
            p[constant::<isize, P9>()] = 9;
            *p = -1;
            *p.at_mut(constant::<isize, P4>()) = 4;

            let mut q: BoundedPtrMut<'_, i32, N5, P5> = p + constant::<isize, P5>();
            q[constant::<isize, N5>()] += 100;
            *q = 5;
            assert_eq!(q.reborrow()[constant::<isize, P4>()], 9);
            assert_eq!(*q.as_shared(), 5);
        }
        assert_eq!(data, [99, 0, 0, 0, 4, 5, 0, 0, 0, 9]);
    }

    #[test]
    fn test_from_mut_and_into_shared() {
        let mut x = 7u32;
        let mut p = BoundedPtrMut::from_mut(&mut x);
        *p += 1;
        let shared: BoundedPtr<'_, u32, Z0, P1> = p.into();
        assert_eq!(*shared, 8);
    }

    #[test]
    fn test_debug_shows_window() {
        let x = 0u8;
        let p = BoundedPtr::from_ref(&x) + constant::<isize, P10>();
        let shown = format!("{:?}", p);
        assert!(shown.starts_with("BoundedPtr { address: "));
        assert!(shown.ends_with("window: Window { start: -10, end: -9 } }"));
    }
}
