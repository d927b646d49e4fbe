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

//! # Integer Representations
//!
//! The raw integer types a bound shape may wrap, and the signedness split
//! that decides how an interval reads its two parameters.
//!
//! All bound parameters are `typenum` integers and every comparison between a
//! raw value and a parameter happens after widening both to `i128`. This is
//! why `i128` and `u128` are not representations: their values do not all
//! widen losslessly.

use crate::num::checked::{CheckedAddVal, CheckedDivVal, CheckedMulVal, CheckedSubVal};
use num_traits::{PrimInt, WrappingAdd, WrappingMul, WrappingSub};
use std::fmt::{Debug, Display};
use std::hash::Hash;
use typenum::{Integer, IsLessOrEqual, True};

mod sealed {
    pub trait Sealed {}
}

/// Widens a type-level integer parameter to `i128`.
#[inline(always)]
pub fn param<N: Integer>() -> i128 {
    i128::from(N::I64)
}

/// Marker for the signedness of a representation.
pub trait Signedness: sealed::Sealed + Copy + Debug + 'static {
    /// `true` for the two's-complement signed types.
    const SIGNED: bool;
}

/// Signedness marker of `i8`, `i16`, `i32`, `i64` and `isize`.
#[derive(Debug, Clone, Copy)]
pub enum SignedRepr {}

/// Signedness marker of `u8`, `u16`, `u32`, `u64` and `usize`.
#[derive(Debug, Clone, Copy)]
pub enum UnsignedRepr {}

impl sealed::Sealed for SignedRepr {}
impl sealed::Sealed for UnsignedRepr {}

impl Signedness for SignedRepr {
    const SIGNED: bool = true;
}

impl Signedness for UnsignedRepr {
    const SIGNED: bool = false;
}

/// How an interval `[N, M]` is read for a given signedness.
///
/// Signed representations only admit `N <= M`; the impl does not exist
/// otherwise, so a reversed signed interval cannot be named in any
/// operation. Unsigned representations admit every pair: `N > M` denotes a
/// window that wraps around the top of the domain.
pub trait IntervalRule<N: Integer, M: Integer>: Signedness {
    /// `true` when the interval wraps around the unsigned domain.
    const WRAPPING: bool;

    /// Returns `true` if the widened `value` lies in the interval.
    fn contains(value: i128) -> bool;
}

impl<N, M> IntervalRule<N, M> for SignedRepr
where
    N: Integer + IsLessOrEqual<M, Output = True>,
    M: Integer,
{
    const WRAPPING: bool = false;

    #[inline(always)]
    fn contains(value: i128) -> bool {
        param::<N>() <= value && value <= param::<M>()
    }
}

impl<N, M> IntervalRule<N, M> for UnsignedRepr
where
    N: Integer,
    M: Integer,
{
    const WRAPPING: bool = N::I64 > M::I64;

    #[inline(always)]
    fn contains(value: i128) -> bool {
        let (lo, hi) = (param::<N>(), param::<M>());
        if lo <= hi {
            lo <= value && value <= hi
        } else {
            // `N - 1 == M` lands here too and accepts everything.
            value >= lo || value <= hi
        }
    }
}

/// A primitive integer usable as the raw value of a bound shape.
///
/// This trait is sealed.
pub trait Repr:
    PrimInt
    + WrappingAdd
    + WrappingSub
    + WrappingMul
    + CheckedAddVal
    + CheckedSubVal
    + CheckedMulVal
    + CheckedDivVal
    + Hash
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + 'static
    + sealed::Sealed
{
    /// Signedness of the representation.
    type Kind: Signedness;

    /// Lossless widening to `i128`.
    fn widen(self) -> i128;

    /// Narrows a wide value back, returning `None` if it does not fit.
    fn narrow(wide: i128) -> Option<Self>;
}

macro_rules! impl_repr {
    ($kind:ty => $($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Repr for $t {
                type Kind = $kind;

                #[inline(always)]
                fn widen(self) -> i128 {
                    self as i128
                }

                #[inline(always)]
                fn narrow(wide: i128) -> Option<Self> {
                    <$t>::try_from(wide).ok()
                }
            }
        )*
    };
}

impl_repr!(SignedRepr => i8, i16, i32, i64, isize);
impl_repr!(UnsignedRepr => u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;
    use typenum::{N3, P2, P5, P250, Z0};

    #[test]
    fn test_widen_narrow() {
        assert_eq!(u64::MAX.widen(), u64::MAX as i128);
        assert_eq!(i8::MIN.widen(), -128);
        assert_eq!(<u8 as Repr>::narrow(256), None);
        assert_eq!(<u8 as Repr>::narrow(255), Some(255));
        assert_eq!(<i16 as Repr>::narrow(-1), Some(-1));
        assert_eq!(<usize as Repr>::narrow(-1), None);
    }

    #[test]
    fn test_signed_interval_rule() {
        assert!(<SignedRepr as IntervalRule<N3, P5>>::contains(-3));
        assert!(<SignedRepr as IntervalRule<N3, P5>>::contains(5));
        assert!(!<SignedRepr as IntervalRule<N3, P5>>::contains(6));
        assert!(!<SignedRepr as IntervalRule<N3, P5>>::WRAPPING);
    }

    #[test]
    fn test_unsigned_wrapping_rule() {
        type Wrap = UnsignedRepr;
        assert!(<Wrap as IntervalRule<P250, P5>>::WRAPPING);
        for v in 0u8..=255 {
            let expected = v >= 250 || v <= 5;
            assert_eq!(<Wrap as IntervalRule<P250, P5>>::contains(v.widen()), expected);
        }
        // Ordinary unsigned interval.
        assert!(<Wrap as IntervalRule<Z0, P2>>::contains(2));
        assert!(!<Wrap as IntervalRule<Z0, P2>>::contains(3));
    }

    #[test]
    fn test_unsigned_full_domain_sentinel() {
        // `N - 1 == M` carries no effective constraint.
        type Full = UnsignedRepr;
        for v in 0u8..=255 {
            assert!(<Full as IntervalRule<P5, typenum::P4>>::contains(v.widen()));
        }
    }
}
