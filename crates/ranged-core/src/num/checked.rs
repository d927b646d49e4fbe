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

//! # Checked Arithmetic by Value
//!
//! By-value mirrors of the primitive `checked_*` methods. The in-place
//! operations of every bound shape run through these traits so that raw
//! overflow and division by zero surface as `None` before the validity
//! predicate of the shape is ever consulted.

use core::ops::{Add, Div, Mul, Sub};

/// Checked addition by value.
///
/// # Examples
///
/// ```rust
/// # use ranged_core::num::checked::CheckedAddVal;
/// let a: u8 = 200;
/// assert_eq!(a.checked_add_val(100), None);
/// assert_eq!(a.checked_add_val(50), Some(250));
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value, returning `None` if overflow occurs.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

/// Checked subtraction by value.
///
/// # Examples
///
/// ```rust
/// # use ranged_core::num::checked::CheckedSubVal;
/// let a: u8 = 50;
/// assert_eq!(a.checked_sub_val(100), None);
/// assert_eq!(a.checked_sub_val(20), Some(30));
/// ```
pub trait CheckedSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs checked subtraction by value, returning `None` if underflow occurs.
    fn checked_sub_val(self, v: Self) -> Option<Self>;
}

/// Checked multiplication by value.
///
/// # Examples
///
/// ```rust
/// # use ranged_core::num::checked::CheckedMulVal;
/// let a: i8 = 20;
/// assert_eq!(a.checked_mul_val(5), Some(100));
/// assert_eq!(a.checked_mul_val(7), None);
/// ```
pub trait CheckedMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs checked multiplication by value, returning `None` if overflow occurs.
    fn checked_mul_val(self, v: Self) -> Option<Self>;
}

/// Checked division by value.
///
/// # Examples
///
/// ```rust
/// # use ranged_core::num::checked::CheckedDivVal;
/// let a: i8 = -128;
/// assert_eq!(a.checked_div_val(0), None);
/// assert_eq!(a.checked_div_val(-1), None);
/// assert_eq!(a.checked_div_val(2), Some(-64));
/// ```
pub trait CheckedDivVal: Sized + Div<Self, Output = Self> {
    /// Performs checked division by value, returning `None` on division by
    /// zero or overflow (`MIN / -1`).
    fn checked_div_val(self, v: Self) -> Option<Self>;
}

macro_rules! checked_impl_val {
    ($($t:ty),* $(,)?) => {
        $(
            impl CheckedAddVal for $t {
                #[inline(always)]
                fn checked_add_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_add(self, v)
                }
            }

            impl CheckedSubVal for $t {
                #[inline(always)]
                fn checked_sub_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_sub(self, v)
                }
            }

            impl CheckedMulVal for $t {
                #[inline(always)]
                fn checked_mul_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_mul(self, v)
                }
            }

            impl CheckedDivVal for $t {
                #[inline(always)]
                fn checked_div_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_div(self, v)
                }
            }
        )*
    };
}

checked_impl_val!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
