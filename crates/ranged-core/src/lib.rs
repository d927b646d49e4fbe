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

//! # Ranged Core
//!
//! Refinement-typed integers: a raw integer paired with a numeric bound that
//! lives in its type. A function taking `Interval<usize, Z0, P9>` cannot be
//! handed anything that was not proven to lie in `[0, 9]`, and arithmetic on
//! bounded values yields results whose bounds are derived at compile time.
//!
//! ## Modules
//!
//! - `num`: the sealed `Repr` trait over the supported primitive integers,
//!   signedness markers, and by-value checked arithmetic.
//! - `bound`: `BoundedValue`, `UpperBound`, `LowerBound`, `Interval` and the
//!   `Refinement` conversion protocol (`assume`, `constrain`, `refine`,
//!   `widen`).
//! - `ops`: bound-composing `+`/`-` operators, bound-preserving compound
//!   assignment, and the `InPlaceOps` mixin.
//! - `range`: lazy half-open ranges whose elements carry the bound proven by
//!   their two ends.
//!
//! Bound parameters are `typenum` integers (`P5`, `N3`, `Z0`).
//!
//! ## Example
//!
//! ```rust
//! use ranged_core::bound::{BoundedValue, Interval, LowerBound, Refinement, UpperBound};
//! use ranged_core::range::RangeTo;
//! use typenum::{P3, P4, P5, Z0};
//!
//! fn digit_at(table: &[u8; 5], i: Interval<usize, Z0, P4>) -> u8 {
//!     table[i.get()]
//! }
//!
//! let table = [1, 2, 3, 4, 5];
//! let mut total = 0;
//! for i in LowerBound::<usize, Z0>::at_bound().range_to(UpperBound::<usize, P5>::at_bound()) {
//!     total += digit_at(&table, i);
//! }
//! assert_eq!(total, 15);
//!
//! let hi: UpperBound<i32, P5> = BoundedValue::new(5).assume();
//! let lo: LowerBound<i32, typenum::P2> = BoundedValue::new(2).assume();
//! let diff: UpperBound<i32, P3> = hi - lo;
//! assert_eq!(diff.get(), 3);
//! ```

pub mod bound;
pub mod num;
pub mod ops;
pub mod range;
