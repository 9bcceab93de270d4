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

use crate::index::PatronIndex;
use carrel_core::num::constants::MinusOne;
use num_traits::{PrimInt, Signed};

/// A borrower id that may be absent.
///
/// Instead of using `Option<PatronIndex>`, this type uses a sentinel encoding
/// to keep the borrow state of a book in a single machine word. A book either
/// sits on the shelf (no borrower) or is checked out to exactly one patron,
/// and the registry consults this state on every availability query.
///
/// Encoding:
/// - Non-negative values (>= 0) represent a concrete patron id.
/// - Negative values (<= -1) are reserved to indicate "unborrowed".
///
/// This convention assumes valid patron ids are non-negative, which holds by
/// construction since ids are registration slot positions.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Borrower<T>(T)
where
    T: Signed;

impl<T> Borrower<T>
where
    T: PrimInt + Signed + MinusOne,
{
    const NONE_SENTINEL: T = T::MINUS_ONE;

    /// Creates a `Borrower` representing "unborrowed".
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use carrel_model::borrower::Borrower;
    ///
    /// let nobody: Borrower<i32> = Borrower::none();
    /// assert!(nobody.is_none());
    /// ```
    #[inline]
    pub fn none() -> Self {
        Borrower(Self::NONE_SENTINEL)
    }

    /// Creates a `Borrower` holding the given patron id.
    ///
    /// # Panics
    ///
    /// Panics if the index value does not fit the raw id type `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use carrel_model::borrower::Borrower;
    /// # use carrel_model::index::PatronIndex;
    ///
    /// let holder = Borrower::<i32>::from_index(PatronIndex::new(3));
    /// assert!(holder.is_some());
    /// assert_eq!(holder.index(), Some(PatronIndex::new(3)));
    /// ```
    #[inline]
    pub fn from_index(index: PatronIndex) -> Self {
        match T::from(index.get()) {
            Some(raw) => Borrower(raw),
            None => panic!(
                "called `Borrower::from_index` with an index that does not fit the raw id type: {}",
                index
            ),
        }
    }

    /// Creates a `Borrower` from a raw value without checking for the sentinel.
    /// Any negative value is treated as "unborrowed".
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use carrel_model::borrower::Borrower;
    ///
    /// let holder = Borrower::from_raw(2i64);
    /// assert!(holder.is_some());
    /// assert_eq!(holder.raw(), 2);
    /// ```
    #[inline]
    pub const fn from_raw(value: T) -> Self {
        Borrower(value)
    }

    /// Checks if the `Borrower` represents "unborrowed".
    #[inline]
    pub fn is_none(&self) -> bool {
        self.0 <= Self::NONE_SENTINEL
    }

    /// Checks if the `Borrower` holds a patron id.
    #[inline]
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Returns the raw value, including the sentinel if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use carrel_model::borrower::Borrower;
    ///
    /// let nobody: Borrower<i32> = Borrower::none();
    /// assert_eq!(nobody.raw(), -1);
    /// ```
    #[inline]
    pub fn raw(&self) -> T {
        self.0
    }

    /// Converts the `Borrower` into an `Option<PatronIndex>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use carrel_model::borrower::Borrower;
    /// # use carrel_model::index::PatronIndex;
    ///
    /// let holder = Borrower::<i32>::from_index(PatronIndex::new(1));
    /// assert_eq!(holder.index(), Some(PatronIndex::new(1)));
    ///
    /// let nobody: Borrower<i32> = Borrower::none();
    /// assert_eq!(nobody.index(), None);
    /// ```
    #[inline]
    pub fn index(&self) -> Option<PatronIndex> {
        if self.is_none() {
            None
        } else {
            // A non-negative id of a primitive integer type always fits usize.
            self.0.to_usize().map(PatronIndex::new)
        }
    }
}

impl<T> Default for Borrower<T>
where
    T: PrimInt + Signed + MinusOne,
{
    fn default() -> Self {
        Self::none()
    }
}

impl<T> std::fmt::Debug for Borrower<T>
where
    T: PrimInt + Signed + MinusOne + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "Borrower(None)")
        } else {
            write!(f, "Borrower({})", self.0)
        }
    }
}
