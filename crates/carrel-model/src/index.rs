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

use carrel_core::utils::index::{TypedIndex, TypedIndexTag};

/// A tag type for book indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct BookIndexTag;

impl TypedIndexTag for BookIndexTag {
    const NAME: &'static str = "BookIndex";
}

/// A typed index for books.
///
/// A book's index is its zero-based registration slot within a `Library`,
/// stable for the library's lifetime and never reused.
pub type BookIndex = TypedIndex<BookIndexTag>;

/// A tag type for patron indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct PatronIndexTag;

impl TypedIndexTag for PatronIndexTag {
    const NAME: &'static str = "PatronIndex";
}

/// A typed index for patrons.
///
/// A patron's index is its zero-based registration slot within a `Library`,
/// stable for the library's lifetime and never reused.
pub type PatronIndex = TypedIndex<PatronIndexTag>;
