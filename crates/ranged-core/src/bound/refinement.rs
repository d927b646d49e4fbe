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

//! # The Conversion Protocol
//!
//! `Refinement` is the capability every bound shape provides: a pure
//! validity predicate over its raw representation, and the only ways of
//! moving a raw value into a stronger shape.
//!
//! - [`Refinement::assume`] is the trusted path. The caller holds a proof the
//!   predicate is satisfied; a broken proof is a contract violation and
//!   panics instead of continuing with invalid data.
//! - [`Refinement::assume_unchecked`] is the same promise without the check
//!   in release builds. The predicate becomes an optimizer hint.
//! - [`Refinement::constrain`] and [`Refinement::refine`] are the checked
//!   paths. Rejection is an ordinary `None` / `Err`.
//! - [`Refinement::widen`] forgets information along a subset relation the
//!   type system has already proven, so it never re-validates.
//!
//! Only this crate can build a shape from a raw value without going through
//! one of these entry points: the hook doing so takes a token that is not
//! nameable outside the crate, which also seals the trait.

use crate::bound::bounds::{Bounds, BoundsError, violated};
use crate::num::repr::Repr;

mod private {
    #[derive(Debug, Clone, Copy)]
    pub struct Token(pub(crate) ());
}

pub(crate) use private::Token;

pub(crate) const TOKEN: Token = Token(());

/// A raw integer refined by a validity predicate.
///
/// Implemented by [`BoundedValue`](crate::bound::BoundedValue),
/// [`UpperBound`](crate::bound::UpperBound),
/// [`LowerBound`](crate::bound::LowerBound) and
/// [`Interval`](crate::bound::Interval). This trait is sealed.
///
/// # Examples
///
/// ```rust
/// use ranged_core::bound::{BoundedValue, Interval, Refinement};
/// use typenum::{P45, Z0};
///
/// type Small = Interval<i32, Z0, P45>;
///
/// assert!(Small::is_valid(45));
/// assert!(BoundedValue::new(46).constrain::<Small>().is_none());
///
/// let x: Small = BoundedValue::new(12).assume();
/// assert_eq!(x.get(), 12);
/// ```
pub trait Refinement: Copy + std::fmt::Debug + Sized {
    /// The raw integer type.
    type Repr: Repr;

    /// The validity predicate of the shape.
    fn is_valid(raw: Self::Repr) -> bool;

    /// Runtime description of the values this shape admits.
    fn bounds() -> Bounds;

    /// Returns the raw value.
    fn get(self) -> Self::Repr;

    #[doc(hidden)]
    fn from_raw(raw: Self::Repr, token: Token) -> Self;

    /// Trusted narrowing into `U`.
    ///
    /// # Panics
    ///
    /// Panics with a contract violation if `U` rejects the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranged_core::bound::{BoundedValue, LowerBound, Refinement};
    /// use typenum::N7;
    ///
    /// let x: LowerBound<i32, N7> = BoundedValue::new(-7).assume();
    /// assert_eq!(x.get(), -7);
    /// ```
    ///
    /// ```rust,should_panic
    /// use ranged_core::bound::{BoundedValue, LowerBound, Refinement};
    /// use typenum::N7;
    ///
    /// let _: LowerBound<i32, N7> = BoundedValue::new(-8).assume();
    /// ```
    #[inline]
    #[track_caller]
    fn assume<U>(self) -> U
    where
        U: Refinement<Repr = Self::Repr>,
    {
        let raw = self.get();
        if !U::is_valid(raw) {
            violated(raw.widen(), U::bounds());
        }
        U::from_raw(raw, TOKEN)
    }

    /// Trusted narrowing into `U` without a release-mode check.
    ///
    /// # Safety
    ///
    /// `U::is_valid(self.get())` must hold. Bound shapes are trusted by
    /// unchecked indexing elsewhere, so a violated predicate is undefined
    /// behavior. Debug builds assert it.
    #[inline]
    #[track_caller]
    unsafe fn assume_unchecked<U>(self) -> U
    where
        U: Refinement<Repr = Self::Repr>,
    {
        let raw = self.get();
        debug_assert!(
            U::is_valid(raw),
            "called `assume_unchecked` with a value outside {}",
            U::bounds()
        );
        if !U::is_valid(raw) {
            // SAFETY: the caller guarantees the predicate holds.
            unsafe { std::hint::unreachable_unchecked() }
        }
        U::from_raw(raw, TOKEN)
    }

    /// Checked narrowing into `U`.
    ///
    /// Returns `None` if `U` rejects the value. The raw value is preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranged_core::bound::{BoundedValue, Refinement, UpperBound};
    /// use typenum::P2;
    ///
    /// assert!(BoundedValue::new(3).constrain::<UpperBound<i64, P2>>().is_none());
    /// assert_eq!(BoundedValue::new(2i64).constrain::<UpperBound<i64, P2>>().unwrap().get(), 2);
    /// ```
    #[inline]
    fn constrain<U>(self) -> Option<U>
    where
        U: Refinement<Repr = Self::Repr>,
    {
        let raw = self.get();
        if U::is_valid(raw) {
            Some(U::from_raw(raw, TOKEN))
        } else {
            None
        }
    }

    /// Checked narrowing into `U`, reporting the rejected value and bounds.
    ///
    /// # Errors
    ///
    /// Returns a [`BoundsError`] if `U` rejects the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranged_core::bound::{BoundedValue, Interval, Refinement};
    /// use typenum::{P10, Z0};
    ///
    /// let err = BoundedValue::new(11).refine::<Interval<i32, Z0, P10>>().unwrap_err();
    /// assert_eq!(err.to_string(), "value 11 is outside [0, 10]");
    /// ```
    #[inline]
    fn refine<U>(self) -> Result<U, BoundsError>
    where
        U: Refinement<Repr = Self::Repr>,
    {
        let raw = self.get();
        self.constrain::<U>()
            .ok_or_else(|| BoundsError::new(raw.widen(), U::bounds()))
    }

    /// Zero-cost conversion into a shape whose bounds are implied by `Self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranged_core::bound::{BoundedValue, Interval, Refinement, UpperBound};
    /// use typenum::{P4, P9, Z0};
    ///
    /// let x: Interval<i32, Z0, P4> = BoundedValue::new(3).assume();
    /// let y: UpperBound<i32, P9> = x.widen();
    /// assert_eq!(y.get(), 3);
    /// ```
    ///
    /// Narrowing does not compile:
    ///
    /// ```rust,compile_fail
    /// use ranged_core::bound::{BoundedValue, Interval, Refinement, UpperBound};
    /// use typenum::{P3, P4, Z0};
    ///
    /// let x: Interval<i32, Z0, P4> = BoundedValue::new(3).assume();
    /// let y: UpperBound<i32, P3> = x.widen();
    /// ```
    #[inline(always)]
    fn widen<U>(self) -> U
    where
        Self: Implies<U>,
        U: Refinement<Repr = Self::Repr>,
    {
        U::from_raw(self.get(), TOKEN)
    }
}

/// Every valid value of `Self` is a valid value of `U`.
///
/// Implemented only where the subset relation follows from the type
/// parameters, which makes [`Refinement::widen`] sound without a check.
pub trait Implies<U>: Refinement
where
    U: Refinement<Repr = Self::Repr>,
{
}
