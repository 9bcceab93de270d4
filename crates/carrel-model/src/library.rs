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

//! # Library
//!
//! The `Library` registry: a bounded, ordered collection of books and
//! patrons, the checkout/return state machine, and the personalized
//! book-recommendation query.
//!
//! ## Identity
//!
//! The library identifies entities by their registration slot. The first
//! book added receives `BookIndex(0)`, the next `BookIndex(1)`, and so on;
//! patrons work the same way. Slots are never vacated (there is no
//! deregistration), so ids are stable and never reused. Whether two
//! registrations refer to "the same" book is decided by reference identity
//! (`std::ptr::eq`), never by field equality.
//!
//! ## State machine
//!
//! Per book slot: `Unregistered -> Available <-> Borrowed`. Per patron
//! slot: `Unregistered -> Registered` (terminal). All transitions are
//! driven through the registry so that the per-patron borrow counters stay
//! consistent with the borrower references on the books.
//!
//! ## Failure contract
//!
//! Every fallible operation reports failure through its return value
//! (`None` / `false`) and leaves the registry untouched. Nothing in this
//! module panics on bad input at runtime; out-of-range indices are ordinary
//! query misses.

use crate::{
    book::Book,
    index::{BookIndex, PatronIndex},
    patron::Patron,
};
use carrel_core::num::constants::MinusOne;
use num_traits::{PrimInt, Signed};

/// A bounded registry pairing books and patrons.
///
/// The registry borrows the entities it tracks; callers construct `Book`s
/// and `Patron`s externally and register them. The same entity may be
/// registered with several independent `Library` instances, each assigning
/// its own id and tracking its own borrow counts.
///
/// # Examples
///
/// ```rust
/// # use carrel_model::book::Book;
/// # use carrel_model::library::Library;
/// # use carrel_model::patron::Patron;
///
/// let book = Book::new("book1", "author1", 2001, 2, 3, 1);
/// let patron = Patron::new("patron1", "last1", 3, 5, 1, 22);
///
/// let mut library = Library::new(3, 2, 2);
/// let book_index = library.add_book(&book).unwrap();
/// let patron_index = library.register_patron(&patron).unwrap();
///
/// assert!(library.borrow_book(book_index, patron_index));
/// assert!(!library.is_book_available(book_index));
/// library.return_book(book_index);
/// assert!(library.is_book_available(book_index));
/// ```
pub struct Library<'a, T>
where
    T: Signed,
{
    /// The maximal number of books this library can hold.
    book_capacity: usize,
    /// The maximal number of books a single patron may borrow at the same time.
    max_borrowed_books: usize,
    /// The maximal number of patrons this library can register.
    patron_capacity: usize,
    /// The shelf; slot position is the book's id.
    books: Vec<&'a Book<T>>,
    /// The patron that borrowed each book *through this library*, parallel
    /// to `books`. A book shared with another registry may be checked out
    /// there; such foreign borrows never appear here.
    loans: Vec<Option<PatronIndex>>,
    /// The patron list; slot position is the patron's id.
    patrons: Vec<&'a Patron<T>>,
    /// Per-patron count of currently borrowed books, parallel to `patrons`.
    borrowed_counts: Vec<usize>,
}

impl<'a, T> Library<'a, T>
where
    T: PrimInt + Signed + MinusOne + std::fmt::Display,
{
    /// Creates a new, empty `Library` with the given capacities.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use carrel_model::library::Library;
    ///
    /// let library = Library::<i32>::new(3, 2, 2);
    /// assert_eq!(library.book_capacity(), 3);
    /// assert_eq!(library.max_borrowed_books(), 2);
    /// assert_eq!(library.patron_capacity(), 2);
    /// assert_eq!(library.num_books(), 0);
    /// assert_eq!(library.num_patrons(), 0);
    /// ```
    pub fn new(book_capacity: usize, max_borrowed_books: usize, patron_capacity: usize) -> Self {
        Self {
            book_capacity,
            max_borrowed_books,
            patron_capacity,
            books: Vec::with_capacity(book_capacity),
            loans: Vec::with_capacity(book_capacity),
            patrons: Vec::with_capacity(patron_capacity),
            borrowed_counts: Vec::with_capacity(patron_capacity),
        }
    }

    /// Returns the maximal number of books this library can hold.
    #[inline]
    pub fn book_capacity(&self) -> usize {
        self.book_capacity
    }

    /// Returns the maximal number of books a single patron may borrow at the
    /// same time.
    ///
    /// Note that `borrow_book` blocks a patron only once their count
    /// *exceeds* this limit; see [`Library::borrow_book`].
    #[inline]
    pub fn max_borrowed_books(&self) -> usize {
        self.max_borrowed_books
    }

    /// Returns the maximal number of patrons this library can register.
    #[inline]
    pub fn patron_capacity(&self) -> usize {
        self.patron_capacity
    }

    /// Returns the number of books currently registered.
    #[inline]
    pub fn num_books(&self) -> usize {
        self.books.len()
    }

    /// Returns the number of patrons currently registered.
    #[inline]
    pub fn num_patrons(&self) -> usize {
        self.patrons.len()
    }

    /// Returns a slice of all registered books, in id order.
    #[inline]
    pub fn books(&self) -> &[&'a Book<T>] {
        &self.books
    }

    /// Returns a slice of all registered patrons, in id order.
    #[inline]
    pub fn patrons(&self) -> &[&'a Patron<T>] {
        &self.patrons
    }

    /// Adds the given book to this library, if there is a spot available and
    /// it is not already registered.
    ///
    /// Re-adding an already-registered book is idempotent: its existing id is
    /// returned and nothing changes. Returns `None` when the shelf is full.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use carrel_model::book::Book;
    /// # use carrel_model::index::BookIndex;
    /// # use carrel_model::library::Library;
    ///
    /// let first = Book::new("a", "b", 2000, 1, 1, 1);
    /// let second = Book::new("c", "d", 2001, 1, 1, 1);
    ///
    /// let mut library = Library::new(1, 1, 1);
    /// assert_eq!(library.add_book(&first), Some(BookIndex::new(0)));
    /// assert_eq!(library.add_book(&first), Some(BookIndex::new(0)));
    /// assert_eq!(library.add_book(&second), None); // shelf is full
    /// ```
    pub fn add_book(&mut self, book: &'a Book<T>) -> Option<BookIndex> {
        if let Some(existing) = self.book_index_of(book) {
            return Some(existing);
        }

        if self.books.len() >= self.book_capacity {
            return None;
        }

        self.books.push(book);
        self.loans.push(None);
        Some(BookIndex::new(self.books.len() - 1))
    }

    /// Returns `true` if the given index refers to a registered book.
    #[inline]
    pub fn contains_book_index(&self, book_index: BookIndex) -> bool {
        book_index.get() < self.books.len()
    }

    /// Returns the id of the given book if it is registered with this
    /// library, `None` otherwise.
    ///
    /// Lookup is by reference identity, so a field-for-field copy of a
    /// registered book is not found.
    pub fn book_index_of(&self, book: &Book<T>) -> Option<BookIndex> {
        self.books
            .iter()
            .position(|&shelved| std::ptr::eq(shelved, book))
            .map(BookIndex::new)
    }

    /// Returns `true` if the book with the given id is registered and
    /// currently on the shelf (not borrowed).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use carrel_model::book::Book;
    /// # use carrel_model::index::BookIndex;
    /// # use carrel_model::library::Library;
    ///
    /// let book = Book::new("a", "b", 2000, 1, 1, 1);
    /// let mut library = Library::new(1, 1, 1);
    /// let index = library.add_book(&book).unwrap();
    ///
    /// assert!(library.is_book_available(index));
    /// assert!(!library.is_book_available(BookIndex::new(9)));
    /// ```
    #[inline]
    pub fn is_book_available(&self, book_index: BookIndex) -> bool {
        if !self.contains_book_index(book_index) {
            return false;
        }

        self.books[book_index.get()].borrower().is_none()
    }

    /// Registers the given patron with this library, if there is a spot
    /// available.
    ///
    /// Re-registering an already-registered patron is idempotent: their
    /// existing id is returned and nothing changes. Returns `None` when the
    /// patron list is full.
    pub fn register_patron(&mut self, patron: &'a Patron<T>) -> Option<PatronIndex> {
        if let Some(existing) = self.patron_index_of(patron) {
            return Some(existing);
        }

        if self.patrons.len() >= self.patron_capacity {
            return None;
        }

        self.patrons.push(patron);
        self.borrowed_counts.push(0);
        Some(PatronIndex::new(self.patrons.len() - 1))
    }

    /// Returns `true` if the given index refers to a registered patron.
    #[inline]
    pub fn contains_patron_index(&self, patron_index: PatronIndex) -> bool {
        patron_index.get() < self.patrons.len()
    }

    /// Returns the id of the given patron if they are registered with this
    /// library, `None` otherwise.
    ///
    /// Lookup is by reference identity, like [`Library::book_index_of`].
    pub fn patron_index_of(&self, patron: &Patron<T>) -> Option<PatronIndex> {
        self.patrons
            .iter()
            .position(|&registered| std::ptr::eq(registered, patron))
            .map(PatronIndex::new)
    }

    /// Returns the number of books the patron with the given id currently
    /// has borrowed through this library.
    ///
    /// # Panics
    ///
    /// Panics if `patron_index` is not a registered patron.
    #[inline]
    pub fn borrowed_count(&self, patron_index: PatronIndex) -> usize {
        let index = patron_index.get();
        debug_assert!(
            index < self.patrons.len(),
            "called `Library::borrowed_count` with patron index out of bounds: the len is {} but the index is {}",
            self.patrons.len(),
            index
        );

        self.borrowed_counts[index]
    }

    /// Returns the book registered under the given id.
    ///
    /// # Panics
    ///
    /// Panics if `book_index` is not a registered book.
    #[inline]
    pub fn book(&self, book_index: BookIndex) -> &'a Book<T> {
        let index = book_index.get();
        debug_assert!(
            index < self.books.len(),
            "called `Library::book` with book index out of bounds: the len is {} but the index is {}",
            self.books.len(),
            index
        );

        self.books[index]
    }

    /// Returns the patron registered under the given id.
    ///
    /// # Panics
    ///
    /// Panics if `patron_index` is not a registered patron.
    #[inline]
    pub fn patron(&self, patron_index: PatronIndex) -> &'a Patron<T> {
        let index = patron_index.get();
        debug_assert!(
            index < self.patrons.len(),
            "called `Library::patron` with patron index out of bounds: the len is {} but the index is {}",
            self.patrons.len(),
            index
        );

        self.patrons[index]
    }

    /// Marks the book with the given id as borrowed by the patron with the
    /// given id, if the book is available, the patron has not overdrawn
    /// their allowance, and the patron will enjoy the book.
    ///
    /// Returns `false` and mutates nothing when any precondition fails.
    ///
    /// The allowance check is deliberately strict (`count > limit` rather
    /// than `>=`): a patron is blocked only once their count already exceeds
    /// `max_borrowed_books`, so they can end up holding one book more than
    /// the configured limit. This mirrors the system's original lending
    /// policy and is pinned down by tests.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use carrel_model::book::Book;
    /// # use carrel_model::library::Library;
    /// # use carrel_model::patron::Patron;
    ///
    /// let book = Book::new("book1", "author1", 2001, 2, 3, 1);
    /// let patron = Patron::new("patron1", "last1", 3, 5, 1, 22);
    ///
    /// let mut library = Library::new(1, 1, 1);
    /// let b = library.add_book(&book).unwrap();
    /// let p = library.register_patron(&patron).unwrap();
    ///
    /// assert!(library.borrow_book(b, p));
    /// assert!(!library.borrow_book(b, p)); // already checked out
    /// ```
    pub fn borrow_book(&mut self, book_index: BookIndex, patron_index: PatronIndex) -> bool {
        if !self.contains_book_index(book_index)
            || !self.contains_patron_index(patron_index)
            || !self.is_book_available(book_index)
        {
            return false;
        }

        if self.borrowed_counts[patron_index.get()] > self.max_borrowed_books
            || !self.patrons[patron_index.get()].will_enjoy(self.books[book_index.get()])
        {
            return false;
        }

        self.books[book_index.get()].set_borrower(patron_index);
        self.loans[book_index.get()] = Some(patron_index);
        self.borrowed_counts[patron_index.get()] += 1;

        true
    }

    /// Returns the book with the given id to the shelf.
    ///
    /// A no-op when the id is invalid or the book is not currently borrowed.
    /// Otherwise the holder's borrow count is decremented and the book's
    /// borrower reference is cleared.
    ///
    /// Borrow counts move only for loans made through this library. A book
    /// shared with another registry may carry a foreign borrower id whose
    /// value collides with a local patron slot; consulting the local loan
    /// record instead of the id on the book keeps that patron's count
    /// untouched.
    pub fn return_book(&mut self, book_index: BookIndex) {
        if !self.contains_book_index(book_index) || self.is_book_available(book_index) {
            return;
        }

        if let Some(holder) = self.loans[book_index.get()].take() {
            self.borrowed_counts[holder.get()] -= 1;
        }

        self.books[book_index.get()].clear_borrower();
    }

    /// Suggests the available book the patron with the given id will enjoy
    /// the most, if any such book exists.
    ///
    /// Candidates are books that are both on the shelf and enjoyable for the
    /// patron; among them the strictly highest-scoring one wins, with the
    /// earliest id breaking ties. The running maximum is seeded at zero, so
    /// a candidate scoring zero or less is never suggested even when it is
    /// the only one. That boundary mirrors the system's original behavior
    /// and is pinned down by tests.
    ///
    /// Pure query; no mutation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use carrel_model::book::Book;
    /// # use carrel_model::library::Library;
    /// # use carrel_model::patron::Patron;
    ///
    /// let light = Book::new("light", "a", 2000, 5, 0, 0);
    /// let heavy = Book::new("heavy", "b", 2001, 0, 9, 0);
    /// let patron = Patron::new("p", "q", 1, 2, 0, 1);
    ///
    /// let mut library = Library::new(2, 1, 1);
    /// library.add_book(&light);
    /// library.add_book(&heavy);
    /// let p = library.register_patron(&patron).unwrap();
    ///
    /// let suggestion = library.suggest_book(p).unwrap();
    /// assert_eq!(suggestion.title(), "heavy"); // score 18 beats 5
    /// ```
    pub fn suggest_book(&self, patron_index: PatronIndex) -> Option<&'a Book<T>> {
        if !self.contains_patron_index(patron_index) {
            return None;
        }

        let patron = self.patrons[patron_index.get()];
        let mut max_score = T::zero();
        let mut best: Option<&'a Book<T>> = None;

        for (slot, &book) in self.books.iter().enumerate() {
            if !self.is_book_available(BookIndex::new(slot)) || !patron.will_enjoy(book) {
                continue;
            }

            let score = patron.book_score(book);
            // Strict comparison: ties keep the earliest slot, and a score
            // never beating the zero seed yields no suggestion.
            if score > max_score {
                max_score = score;
                best = Some(book);
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shelf() -> Vec<Book<i32>> {
        vec![
            Book::new("book0", "author0", 2000, 2, 3, 1),
            Book::new("book1", "author1", 2001, 0, 5, 5),
            Book::new("book2", "author2", 2002, 4, 0, 0),
            Book::new("book3", "author3", 2003, 1, 1, 1),
        ]
    }

    #[test]
    fn test_add_books_assigns_sequential_ids() {
        let books = shelf();
        let mut library = Library::new(4, 2, 2);

        for (expected, book) in books.iter().enumerate() {
            assert_eq!(library.add_book(book), Some(BookIndex::new(expected)));
        }
        assert_eq!(library.num_books(), 4);
        assert_eq!(library.books().len(), 4);
        assert!(std::ptr::eq(library.book(BookIndex::new(2)), &books[2]));
    }

    #[test]
    fn test_patron_accessors() {
        let patron = Patron::new("p0", "l0", 1, 1, 1, 0);
        let mut library = Library::<i32>::new(1, 1, 1);
        let p = library.register_patron(&patron).unwrap();

        assert_eq!(library.patrons().len(), 1);
        assert!(std::ptr::eq(library.patron(p), &patron));
    }

    #[test]
    fn test_add_book_rejects_when_full() {
        let books = shelf();
        let mut library = Library::new(3, 2, 2);

        for book in books.iter().take(3) {
            assert!(library.add_book(book).is_some());
        }

        // The 4th distinct book is rejected and nothing changes.
        assert_eq!(library.add_book(&books[3]), None);
        assert_eq!(library.num_books(), 3);
        assert_eq!(library.book_index_of(&books[3]), None);
    }

    #[test]
    fn test_add_book_is_idempotent() {
        let books = shelf();
        let mut library = Library::new(3, 2, 2);

        let first = library.add_book(&books[0]);
        assert_eq!(library.add_book(&books[0]), first);
        assert_eq!(library.num_books(), 1);
    }

    #[test]
    fn test_identity_not_value_equality() {
        // Two field-for-field identical books are distinct entities.
        let original = Book::new("dune", "herbert", 1965, 1, 8, 4);
        let duplicate = Book::new("dune", "herbert", 1965, 1, 8, 4);

        let mut library = Library::new(2, 1, 1);
        let a = library.add_book(&original).unwrap();
        let b = library.add_book(&duplicate).unwrap();

        assert_ne!(a, b);
        assert_eq!(library.book_index_of(&original), Some(a));
        assert_eq!(library.book_index_of(&duplicate), Some(b));
    }

    #[test]
    fn test_contains_book_index() {
        let books = shelf();
        let mut library = Library::new(4, 2, 2);
        library.add_book(&books[0]);

        assert!(library.contains_book_index(BookIndex::new(0)));
        // Slot 1 is within capacity but unoccupied.
        assert!(!library.contains_book_index(BookIndex::new(1)));
        assert!(!library.contains_book_index(BookIndex::new(99)));
    }

    #[test]
    fn test_register_patron_capacity_and_idempotence() {
        let patrons = vec![
            Patron::new("p0", "l0", 1, 1, 1, 0),
            Patron::new("p1", "l1", 1, 1, 1, 0),
            Patron::new("p2", "l2", 1, 1, 1, 0),
        ];
        let mut library = Library::<i32>::new(3, 2, 2);

        let first = library.register_patron(&patrons[0]);
        assert_eq!(first, Some(PatronIndex::new(0)));
        assert_eq!(library.register_patron(&patrons[0]), first);
        assert_eq!(
            library.register_patron(&patrons[1]),
            Some(PatronIndex::new(1))
        );

        // The 3rd distinct patron is rejected.
        assert_eq!(library.register_patron(&patrons[2]), None);
        assert_eq!(library.num_patrons(), 2);
    }

    #[test]
    fn test_borrow_book_happy_path() {
        let book = Book::new("book1", "author1", 2001, 2, 3, 1);
        let patron = Patron::new("patron1", "last1", 3, 5, 1, 22);
        let mut library = Library::new(3, 2, 2);

        let b = library.add_book(&book).unwrap();
        let p = library.register_patron(&patron).unwrap();

        assert!(library.is_book_available(b));
        assert!(library.borrow_book(b, p));
        assert!(!library.is_book_available(b));
        assert_eq!(library.borrowed_count(p), 1);
        assert_eq!(book.borrower().index(), Some(p));
    }

    #[test]
    fn test_borrow_book_rejects_invalid_ids() {
        let book = Book::new("book1", "author1", 2001, 2, 3, 1);
        let patron = Patron::new("patron1", "last1", 3, 5, 1, 0);
        let mut library = Library::new(3, 2, 2);

        let b = library.add_book(&book).unwrap();
        let p = library.register_patron(&patron).unwrap();

        assert!(!library.borrow_book(BookIndex::new(7), p));
        assert!(!library.borrow_book(b, PatronIndex::new(7)));
        assert!(library.is_book_available(b));
        assert_eq!(library.borrowed_count(p), 0);
    }

    #[test]
    fn test_borrow_book_rejects_unavailable_book() {
        let book = Book::new("book1", "author1", 2001, 2, 3, 1);
        let eager = Patron::new("p0", "l0", 1, 1, 1, 0);
        let other = Patron::new("p1", "l1", 1, 1, 1, 0);
        let mut library = Library::new(1, 2, 2);

        let b = library.add_book(&book).unwrap();
        let p0 = library.register_patron(&eager).unwrap();
        let p1 = library.register_patron(&other).unwrap();

        assert!(library.borrow_book(b, p0));
        assert!(!library.borrow_book(b, p1));
        assert_eq!(library.borrowed_count(p1), 0);
    }

    #[test]
    fn test_borrow_book_rejects_disliked_book() {
        let dull = Book::new("dull", "author", 2001, 0, 0, 1);
        let picky = Patron::new("p", "l", 1, 1, 1, 10);
        let mut library = Library::new(1, 2, 1);

        let b = library.add_book(&dull).unwrap();
        let p = library.register_patron(&picky).unwrap();

        assert!(!library.borrow_book(b, p));
        assert!(library.is_book_available(b));
    }

    #[test]
    fn test_borrow_limit_is_strict_exceeds_by_one() {
        // The allowance check blocks only when count > max_borrowed_books,
        // so a patron can hold max + 1 books before being refused.
        let books: Vec<Book<i32>> = (0..4)
            .map(|i| Book::new(format!("b{i}"), "a", 2000 + i, 1, 1, 1))
            .collect();
        let patron = Patron::new("p", "l", 1, 1, 1, 0);
        let mut library = Library::new(4, 2, 1);

        let indices: Vec<BookIndex> = books
            .iter()
            .map(|book| library.add_book(book).unwrap())
            .collect();
        let p = library.register_patron(&patron).unwrap();

        // Counts 0, 1, 2 all pass the `> 2` check.
        assert!(library.borrow_book(indices[0], p));
        assert!(library.borrow_book(indices[1], p));
        assert!(library.borrow_book(indices[2], p));
        assert_eq!(library.borrowed_count(p), 3); // max_borrowed_books + 1

        // Count 3 > 2 finally blocks.
        assert!(!library.borrow_book(indices[3], p));
        assert_eq!(library.borrowed_count(p), 3);
    }

    #[test]
    fn test_return_book_restores_availability() {
        let book = Book::new("book1", "author1", 2001, 2, 3, 1);
        let patron = Patron::new("patron1", "last1", 1, 1, 1, 0);
        let mut library = Library::new(1, 1, 1);

        let b = library.add_book(&book).unwrap();
        let p = library.register_patron(&patron).unwrap();

        assert!(library.borrow_book(b, p));
        library.return_book(b);

        assert!(library.is_book_available(b));
        assert_eq!(library.borrowed_count(p), 0);
        assert!(book.borrower().is_none());
    }

    #[test]
    fn test_return_book_is_noop_on_invalid_or_available() {
        let book = Book::new("book1", "author1", 2001, 2, 3, 1);
        let patron = Patron::new("patron1", "last1", 1, 1, 1, 0);
        let mut library = Library::new(1, 1, 1);

        let b = library.add_book(&book).unwrap();
        let p = library.register_patron(&patron).unwrap();

        // Never borrowed: nothing happens.
        library.return_book(b);
        assert_eq!(library.borrowed_count(p), 0);

        // Invalid id: nothing happens.
        library.return_book(BookIndex::new(42));
        assert!(library.is_book_available(b));

        // Double return decrements exactly once.
        assert!(library.borrow_book(b, p));
        library.return_book(b);
        library.return_book(b);
        assert_eq!(library.borrowed_count(p), 0);
    }

    #[test]
    fn test_return_of_foreign_borrow_leaves_local_counts_alone() {
        // A book shared by two libraries is borrowed through the first and
        // returned through the second. The stored borrower id collides with
        // the second library's patron slot 0, but that patron holds nothing
        // there and their count must not move (or underflow).
        let book = Book::new("shared", "author", 2001, 2, 3, 1);
        let traveler = Patron::new("p0", "l0", 1, 1, 1, 0);
        let local = Patron::new("p1", "l1", 1, 1, 1, 0);

        let mut first = Library::new(1, 1, 1);
        let mut second = Library::new(1, 1, 1);

        let b_first = first.add_book(&book).unwrap();
        let b_second = second.add_book(&book).unwrap();
        let p_first = first.register_patron(&traveler).unwrap();
        let p_second = second.register_patron(&local).unwrap();

        assert!(first.borrow_book(b_first, p_first));
        assert!(!second.is_book_available(b_second));

        second.return_book(b_second);
        assert!(second.is_book_available(b_second));
        assert_eq!(second.borrowed_count(p_second), 0);

        // The local patron is unaffected and can borrow normally.
        assert!(second.borrow_book(b_second, p_second));
        assert_eq!(second.borrowed_count(p_second), 1);
    }

    #[test]
    fn test_suggest_book_picks_highest_score() {
        let books = shelf();
        // Tendencies (1, 2, 0): book0 scores 8, book1 scores 10, book2
        // scores 4, book3 scores 3.
        let patron = Patron::new("p", "l", 1, 2, 0, 1);
        let mut library = Library::new(4, 2, 1);

        for book in &books {
            library.add_book(book);
        }
        let p = library.register_patron(&patron).unwrap();

        let suggestion = library.suggest_book(p).unwrap();
        assert!(std::ptr::eq(suggestion, &books[1]));
    }

    #[test]
    fn test_suggest_book_skips_unavailable_and_disliked() {
        let books = shelf();
        let patron = Patron::new("p", "l", 1, 2, 0, 5);
        let other = Patron::new("q", "m", 1, 1, 1, 0);
        let mut library = Library::new(4, 2, 2);

        let indices: Vec<BookIndex> = books
            .iter()
            .map(|book| library.add_book(book).unwrap())
            .collect();
        let p = library.register_patron(&patron).unwrap();
        let q = library.register_patron(&other).unwrap();

        // book1 (best for p, score 10) goes out to someone else.
        assert!(library.borrow_book(indices[1], q));

        // book3 (score 3) and book2 (score 4) are below p's threshold of 5;
        // book0 (score 8) is the best remaining enjoyable candidate.
        let suggestion = library.suggest_book(p).unwrap();
        assert!(std::ptr::eq(suggestion, &books[0]));
    }

    #[test]
    fn test_suggest_book_none_for_invalid_patron() {
        let books = shelf();
        let mut library = Library::<i32>::new(4, 2, 1);
        library.add_book(&books[0]);

        assert!(library.suggest_book(PatronIndex::new(0)).is_none());
    }

    #[test]
    fn test_suggest_book_zero_seed_excludes_zero_score() {
        // A sole enjoyable candidate scoring 0 never beats the zero-seeded
        // running maximum, so no suggestion is produced.
        let dull = Book::new("dull", "author", 2001, 0, 0, 0);
        let easygoing = Patron::new("p", "l", 1, 1, 1, 0);
        let mut library = Library::new(1, 1, 1);

        library.add_book(&dull);
        let p = library.register_patron(&easygoing).unwrap();

        assert!(easygoing.will_enjoy(&dull));
        assert!(library.suggest_book(p).is_none());
    }

    #[test]
    fn test_suggest_book_tie_keeps_earliest() {
        let first = Book::new("first", "a", 2000, 2, 0, 0);
        let second = Book::new("second", "b", 2001, 2, 0, 0);
        let patron = Patron::new("p", "l", 1, 0, 0, 0);
        let mut library = Library::new(2, 1, 1);

        library.add_book(&first);
        library.add_book(&second);
        let p = library.register_patron(&patron).unwrap();

        // Both score 2; strict `>` keeps the earlier slot.
        let suggestion = library.suggest_book(p).unwrap();
        assert!(std::ptr::eq(suggestion, &first));
    }

    #[test]
    fn test_independent_libraries_track_independently() {
        let book = Book::new("book1", "author1", 2001, 2, 3, 1);
        let extra = Book::new("extra", "author2", 2002, 1, 1, 1);
        let patron = Patron::new("patron1", "last1", 1, 1, 1, 0);

        let mut first = Library::new(2, 1, 1);
        let mut second = Library::new(2, 1, 1);

        // Same instances, independent ids per registry.
        first.add_book(&extra);
        let b_first = first.add_book(&book).unwrap();
        let b_second = second.add_book(&book).unwrap();
        assert_eq!(b_first, BookIndex::new(1));
        assert_eq!(b_second, BookIndex::new(0));

        let p_first = first.register_patron(&patron).unwrap();
        let p_second = second.register_patron(&patron).unwrap();

        // A borrow through one library never moves the other's counters.
        assert!(first.borrow_book(b_first, p_first));
        assert_eq!(first.borrowed_count(p_first), 1);
        assert_eq!(second.borrowed_count(p_second), 0);
    }

    #[test]
    fn test_scenario_capacities_three_two_two() {
        // Library(book_capacity = 3, max_borrowed_books = 2,
        // patron_capacity = 2) rejects the 4th book and the 3rd patron.
        let books = shelf();
        let patrons = vec![
            Patron::new("p0", "l0", 1, 1, 1, 0),
            Patron::new("p1", "l1", 1, 1, 1, 0),
            Patron::new("p2", "l2", 1, 1, 1, 0),
        ];
        let mut library = Library::<i32>::new(3, 2, 2);

        assert!(library.add_book(&books[0]).is_some());
        assert!(library.add_book(&books[1]).is_some());
        assert!(library.add_book(&books[2]).is_some());
        assert_eq!(library.add_book(&books[3]), None);

        assert!(library.register_patron(&patrons[0]).is_some());
        assert!(library.register_patron(&patrons[1]).is_some());
        assert_eq!(library.register_patron(&patrons[2]), None);
    }

    #[test]
    fn test_zero_capacity_library() {
        let book = Book::new("a", "b", 2000, 1, 1, 1);
        let patron = Patron::new("c", "d", 1, 1, 1, 0);
        let mut library = Library::new(0, 0, 0);

        assert_eq!(library.add_book(&book), None);
        assert_eq!(library.register_patron(&patron), None);
        assert_eq!(library.num_books(), 0);
        assert_eq!(library.num_patrons(), 0);
    }
}
