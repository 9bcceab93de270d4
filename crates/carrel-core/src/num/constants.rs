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

//! # Integer Constants
//!
//! Associated-constant traits for primitive integers. Generic code that
//! reserves a sentinel value (for example `-1` for "no borrower") can name
//! that value through a trait bound instead of hard-coding a literal per
//! type.
//!
//! ## Usage
//!
//! ```rust
//! use carrel_core::num::constants::MinusOne;
//!
//! fn unborrowed<T: MinusOne>() -> T {
//!     T::MINUS_ONE
//! }
//!
//! assert_eq!(unborrowed::<i32>(), -1);
//! assert_eq!(i64::MINUS_ONE, -1);
//! ```

/// A trait for integer types that have a constant representing -1.
pub trait MinusOne {
    /// The constant representing -1 for the implementing type.
    const MINUS_ONE: Self;
}

macro_rules! impl_minus_one {
    ($($t:ty),+ $(,)?) => {
        $(
            impl MinusOne for $t {
                const MINUS_ONE: Self = -1;
            }
        )+
    };
}

impl_minus_one!(i8, i16, i32, i64, i128, isize);
