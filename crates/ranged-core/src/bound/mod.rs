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

//! # Bounded Values
//!
//! Raw integers refined by a numeric bound carried in the type:
//!
//! - [`BoundedValue`]: no bound, the entry point.
//! - [`UpperBound`]: `value <= N`.
//! - [`LowerBound`]: `value >= N`.
//! - [`Interval`]: `N <= value <= M` (or a wrapping window for unsigned
//!   representations when `N > M`).
//!
//! All four implement [`Refinement`], which holds the conversion protocol.

pub mod bounds;
pub mod refinement;
pub mod shapes;
pub mod value;

pub use bounds::{Bounds, BoundsError};
pub use refinement::{Implies, Refinement};
pub use shapes::{Interval, LowerBound, UpperBound, constant};
pub use value::BoundedValue;
