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

//! # Carrel Model
//!
//! **The Core Domain Model for the Carrel Library-Management System.**
//!
//! This crate defines the fundamental data structures used to represent a
//! small lending library: a bounded registry of books and patrons supporting
//! check-out, return, and a personalized recommendation query based on
//! per-patron taste scoring.
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation of concerns between
//! **entities** and the **registry** that tracks them:
//!
//! * **`index`**: Provides strongly-typed wrappers (`BookIndex`, `PatronIndex`) to prevent logical indexing errors.
//! * **`borrower`**: A sentinel-encoded optional patron id (`Borrower`), kept to a single machine word.
//! * **`book`**: The `Book` entity, an immutable-identity record with mutable borrow state.
//! * **`patron`**: The `Patron` entity, an immutable taste profile that scores and judges books.
//! * **`library`**: The `Library` registry, which pairs books and patrons, encodes the
//!   checkout/return state machine, and answers the recommendation query.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: Indices are distinct types. You cannot accidentally use a `PatronIndex` to fetch a `Book`.
//! 2.  **Sentinel Failure**: Fallible operations report failure through their return value
//!     (`Option`, `bool`) and never panic. Every failure is a normal, recoverable outcome.
//! 3.  **Reference Identity**: Entities are identified by *which object* they are, not by their
//!     field values. Two distinct books with identical fields receive distinct ids.

pub mod book;
pub mod borrower;
pub mod index;
pub mod library;
pub mod patron;
