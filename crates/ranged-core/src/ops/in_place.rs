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

//! In-place arithmetic for any bound shape.
//!
//! The checked family computes the raw result, tests it against the
//! shape's own predicate, and only stores it if it passes. Overflow and
//! division by zero count as failures. The unchecked family always stores
//! the result; the caller must already know it is in bounds.

use crate::bound::refinement::{Refinement, TOKEN};
use crate::num::checked::{CheckedAddVal, CheckedDivVal, CheckedMulVal, CheckedSubVal};
use num_traits::{WrappingAdd, WrappingMul, WrappingSub};

#[inline(always)]
fn store_checked<R: Refinement>(slot: &mut R, raw: Option<R::Repr>) -> bool {
    match raw {
        Some(raw) if R::is_valid(raw) => {
            *slot = R::from_raw(raw, TOKEN);
            true
        }
        _ => false,
    }
}

#[inline(always)]
#[track_caller]
fn store_trusted<R: Refinement>(slot: &mut R, raw: R::Repr) -> &mut R {
    debug_assert!(
        R::is_valid(raw),
        "in-place update produced {} outside {}",
        raw,
        R::bounds()
    );
    *slot = R::from_raw(raw, TOKEN);
    slot
}

/// In-place arithmetic keeping the shape of the receiver.
///
/// Blanket-implemented for every [`Refinement`].
///
/// # Examples
///
/// ```rust
/// use ranged_core::bound::{BoundedValue, Interval, Refinement};
/// use ranged_core::ops::InPlaceOps;
/// use typenum::{P10, Z0};
///
/// let mut x: Interval<u32, Z0, P10> = BoundedValue::new(8).assume();
/// assert!(x.try_increment(2));
/// assert!(!x.try_increment(1));
/// assert_eq!(x.get(), 10);
/// ```
pub trait InPlaceOps: Refinement {
    /// Adds `delta` if the sum stays in bounds. Returns `true` on success.
    #[inline]
    fn try_increment(&mut self, delta: Self::Repr) -> bool {
        let raw = self.get().checked_add_val(delta);
        store_checked(self, raw)
    }

    /// Subtracts `delta` if the difference stays in bounds.
    #[inline]
    fn try_decrement(&mut self, delta: Self::Repr) -> bool {
        let raw = self.get().checked_sub_val(delta);
        store_checked(self, raw)
    }

    /// Multiplies by `factor` if the product stays in bounds.
    #[inline]
    fn try_multiply(&mut self, factor: Self::Repr) -> bool {
        let raw = self.get().checked_mul_val(factor);
        store_checked(self, raw)
    }

    /// Divides by `divisor` if the quotient stays in bounds. A zero divisor
    /// fails.
    #[inline]
    fn try_divide(&mut self, divisor: Self::Repr) -> bool {
        let raw = self.get().checked_div_val(divisor);
        store_checked(self, raw)
    }

    /// Adds `delta` unconditionally, wrapping on overflow.
    ///
    /// # Safety
    ///
    /// The result must satisfy the predicate of `Self`. Debug builds assert
    /// it.
    #[inline]
    #[track_caller]
    unsafe fn increment_unsafe(&mut self, delta: Self::Repr) -> &mut Self {
        let raw = self.get().wrapping_add(&delta);
        store_trusted(self, raw)
    }

    /// Subtracts `delta` unconditionally, wrapping on overflow.
    ///
    /// # Safety
    ///
    /// The result must satisfy the predicate of `Self`.
    #[inline]
    #[track_caller]
    unsafe fn decrement_unsafe(&mut self, delta: Self::Repr) -> &mut Self {
        let raw = self.get().wrapping_sub(&delta);
        store_trusted(self, raw)
    }

    /// Multiplies by `factor` unconditionally, wrapping on overflow.
    ///
    /// # Safety
    ///
    /// The result must satisfy the predicate of `Self`.
    #[inline]
    #[track_caller]
    unsafe fn multiply_unsafe(&mut self, factor: Self::Repr) -> &mut Self {
        let raw = self.get().wrapping_mul(&factor);
        store_trusted(self, raw)
    }

    /// Divides by `divisor` unconditionally.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero, like primitive division.
    ///
    /// # Safety
    ///
    /// The result must satisfy the predicate of `Self`.
    #[inline]
    #[track_caller]
    unsafe fn divide_unsafe(&mut self, divisor: Self::Repr) -> &mut Self {
        let raw = self.get() / divisor;
        store_trusted(self, raw)
    }
}

impl<R: Refinement> InPlaceOps for R {}
