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

//! # Book
//!
//! The `Book` entity: an immutable-identity record (title, author, year, and
//! three literary-aspect values) with mutable borrow state.
//!
//! The borrow state is a sentinel-encoded back-reference to a patron id and
//! lives in a `Cell`, so a registry holding the book by shared reference can
//! still flip it between "on the shelf" and "checked out". The book itself
//! never validates the id it is handed; cross-checking against the patron
//! table is the registry's responsibility.
//!
//! Books are compared by identity, not by value: two distinct books with
//! identical fields (duplicate editions) are distinct entities.

use crate::{borrower::Borrower, index::PatronIndex};
use carrel_core::num::constants::MinusOne;
use num_traits::{PrimInt, Signed};
use std::cell::Cell;

/// A book with fixed identity fields and a transient borrower reference.
///
/// The three aspect values (comic, dramatic, educational) are non-negative
/// and fixed at construction; their sum is the book's *literary value*.
///
/// Books deliberately implement neither `Clone` nor `PartialEq`: a book is
/// identified by *which object* it is, and a copy would be a different book.
pub struct Book<T>
where
    T: Signed,
{
    title: String,
    author: String,
    year: T,
    comic_value: T,
    dramatic_value: T,
    educational_value: T,
    borrower: Cell<Borrower<T>>,
}

impl<T> Book<T>
where
    T: PrimInt + Signed + MinusOne + std::fmt::Display,
{
    /// Creates a new `Book` with the given characteristics. The book starts
    /// out unborrowed.
    ///
    /// # Panics
    ///
    /// Panics if any of the three aspect values is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use carrel_model::book::Book;
    ///
    /// let book = Book::new("book1", "author1", 2001, 2, 3, 1);
    /// assert_eq!(book.literary_value(), 6);
    /// assert!(book.borrower().is_none());
    /// ```
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: T,
        comic_value: T,
        dramatic_value: T,
        educational_value: T,
    ) -> Self {
        assert!(
            comic_value >= T::zero(),
            "called `Book::new` with a negative comic value: {}",
            comic_value
        );
        assert!(
            dramatic_value >= T::zero(),
            "called `Book::new` with a negative dramatic value: {}",
            dramatic_value
        );
        assert!(
            educational_value >= T::zero(),
            "called `Book::new` with a negative educational value: {}",
            educational_value
        );

        Self {
            title: title.into(),
            author: author.into(),
            year,
            comic_value,
            dramatic_value,
            educational_value,
            borrower: Cell::new(Borrower::none()),
        }
    }

    /// Returns the title of the book.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the author of the book.
    #[inline]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the publication year of the book.
    #[inline]
    pub fn year(&self) -> T {
        self.year
    }

    /// Returns the comic aspect value of the book.
    #[inline]
    pub fn comic_value(&self) -> T {
        self.comic_value
    }

    /// Returns the dramatic aspect value of the book.
    #[inline]
    pub fn dramatic_value(&self) -> T {
        self.dramatic_value
    }

    /// Returns the educational aspect value of the book.
    #[inline]
    pub fn educational_value(&self) -> T {
        self.educational_value
    }

    /// Returns the literary value of the book, the sum of its three aspect
    /// values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use carrel_model::book::Book;
    ///
    /// let book = Book::new("dune", "herbert", 1965, 1, 8, 4);
    /// assert_eq!(book.literary_value(), 13);
    /// ```
    #[inline]
    pub fn literary_value(&self) -> T {
        self.comic_value + self.dramatic_value + self.educational_value
    }

    /// Returns the current borrow state of the book.
    #[inline]
    pub fn borrower(&self) -> Borrower<T> {
        self.borrower.get()
    }

    /// Marks the book as borrowed by the patron with the given id.
    ///
    /// The id is stored unconditionally; whether it refers to a registered
    /// patron is not checked at this layer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use carrel_model::book::Book;
    /// # use carrel_model::index::PatronIndex;
    ///
    /// let book = Book::new("dune", "herbert", 1965, 1, 8, 4);
    /// book.set_borrower(PatronIndex::new(0));
    /// assert_eq!(book.borrower().index(), Some(PatronIndex::new(0)));
    /// ```
    #[inline]
    pub fn set_borrower(&self, patron_index: PatronIndex) {
        self.borrower.set(Borrower::from_index(patron_index));
    }

    /// Marks the book as returned, resetting its borrow state unconditionally.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use carrel_model::book::Book;
    /// # use carrel_model::index::PatronIndex;
    ///
    /// let book = Book::new("dune", "herbert", 1965, 1, 8, 4);
    /// book.set_borrower(PatronIndex::new(2));
    /// book.clear_borrower();
    /// assert!(book.borrower().is_none());
    /// ```
    #[inline]
    pub fn clear_borrower(&self) {
        self.borrower.set(Borrower::none());
    }
}

impl<T> std::fmt::Display for Book<T>
where
    T: PrimInt + Signed + MinusOne + std::fmt::Display,
{
    /// Formats the book as `[title,author,year,literary_value]`, comma-joined
    /// with no surrounding spaces. This is the book's external string
    /// contract.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{},{},{},{}]",
            self.title,
            self.author,
            self.year,
            self.literary_value()
        )
    }
}

impl<T> std::fmt::Debug for Book<T>
where
    T: PrimInt + Signed + MinusOne + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Book({},{},{},{:?})",
            self.title,
            self.author,
            self.year,
            self.borrower.get()
        )
    }
}
