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

//! # Patron
//!
//! The `Patron` entity: an immutable taste profile that scores and judges
//! books. A patron assigns a weight to each literary aspect of a book
//! (comic, dramatic, educational) and carries an enjoyment threshold, the
//! minimum weighted score a book must reach for the patron to enjoy it.
//!
//! Patrons carry no mutable state. All scoring operations are pure integer
//! arithmetic in the model's numeric type `T`.

use crate::book::Book;
use carrel_core::num::constants::MinusOne;
use num_traits::{PrimInt, Signed};

/// A library patron with a name and per-aspect tendency weights.
///
/// Like `Book`, a patron is identified by *which object* it is, so the type
/// deliberately implements neither `Clone` nor `PartialEq`.
pub struct Patron<T>
where
    T: Signed,
{
    first_name: String,
    last_name: String,
    comic_tendency: T,
    dramatic_tendency: T,
    educational_tendency: T,
    enjoyment_threshold: T,
}

impl<T> Patron<T>
where
    T: PrimInt + Signed + MinusOne + std::fmt::Display,
{
    /// Creates a new `Patron` with the given characteristics.
    ///
    /// The enjoyment threshold may be any integer; a non-positive threshold
    /// simply means the patron enjoys every book.
    ///
    /// # Panics
    ///
    /// Panics if any of the three tendency weights is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use carrel_model::patron::Patron;
    ///
    /// let patron = Patron::new("patron1", "last1", 3, 5, 1, 22);
    /// assert_eq!(format!("{}", patron), "patron1 last1");
    /// ```
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        comic_tendency: T,
        dramatic_tendency: T,
        educational_tendency: T,
        enjoyment_threshold: T,
    ) -> Self {
        assert!(
            comic_tendency >= T::zero(),
            "called `Patron::new` with a negative comic tendency: {}",
            comic_tendency
        );
        assert!(
            dramatic_tendency >= T::zero(),
            "called `Patron::new` with a negative dramatic tendency: {}",
            dramatic_tendency
        );
        assert!(
            educational_tendency >= T::zero(),
            "called `Patron::new` with a negative educational tendency: {}",
            educational_tendency
        );

        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            comic_tendency,
            dramatic_tendency,
            educational_tendency,
            enjoyment_threshold,
        }
    }

    /// Returns the first name of the patron.
    #[inline]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name of the patron.
    #[inline]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the weight the patron assigns to the comic aspect of books.
    #[inline]
    pub fn comic_tendency(&self) -> T {
        self.comic_tendency
    }

    /// Returns the weight the patron assigns to the dramatic aspect of books.
    #[inline]
    pub fn dramatic_tendency(&self) -> T {
        self.dramatic_tendency
    }

    /// Returns the weight the patron assigns to the educational aspect of books.
    #[inline]
    pub fn educational_tendency(&self) -> T {
        self.educational_tendency
    }

    /// Returns the minimum score a book must reach for this patron to enjoy it.
    #[inline]
    pub fn enjoyment_threshold(&self) -> T {
        self.enjoyment_threshold
    }

    /// Returns the value this patron assigns to the given book: the dot
    /// product of the patron's tendency weights and the book's aspect values.
    ///
    /// Pure integer arithmetic; no side effects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use carrel_model::book::Book;
    /// # use carrel_model::patron::Patron;
    ///
    /// let book = Book::new("book1", "author1", 2001, 2, 3, 1);
    /// let patron = Patron::new("patron1", "last1", 3, 5, 1, 22);
    /// assert_eq!(patron.book_score(&book), 22); // 3*2 + 5*3 + 1*1
    /// ```
    #[inline]
    pub fn book_score(&self, book: &Book<T>) -> T {
        self.comic_tendency * book.comic_value()
            + self.dramatic_tendency * book.dramatic_value()
            + self.educational_tendency * book.educational_value()
    }

    /// Returns `true` if this patron will enjoy the given book, i.e. if the
    /// book's score reaches the enjoyment threshold (inclusive).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use carrel_model::book::Book;
    /// # use carrel_model::patron::Patron;
    ///
    /// let book = Book::new("book1", "author1", 2001, 2, 3, 1);
    /// let on_the_fence = Patron::new("patron1", "last1", 3, 5, 1, 22);
    /// assert!(on_the_fence.will_enjoy(&book)); // 22 >= 22
    ///
    /// let picky = Patron::new("patron2", "last2", 3, 5, 1, 23);
    /// assert!(!picky.will_enjoy(&book)); // 22 < 23
    /// ```
    #[inline]
    pub fn will_enjoy(&self, book: &Book<T>) -> bool {
        self.book_score(book) >= self.enjoyment_threshold
    }
}

impl<T> std::fmt::Display for Patron<T>
where
    T: Signed,
{
    /// Formats the patron as `first_name last_name`, separated by a single
    /// space. This is the patron's external string contract.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

impl<T> std::fmt::Debug for Patron<T>
where
    T: Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Patron({} {},{},{},{},{})",
            self.first_name,
            self.last_name,
            self.comic_tendency,
            self.dramatic_tendency,
            self.educational_tendency,
            self.enjoyment_threshold
        )
    }
}
