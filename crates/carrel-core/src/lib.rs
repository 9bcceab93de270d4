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

//! # Carrel Core
//!
//! Foundational utilities for the carrel library-management ecosystem. This
//! crate consolidates reusable building blocks focused on correctness and
//! ergonomic APIs that underpin the higher-level domain-model crate.
//!
//! ## Modules
//!
//! - `num`: Integer-centric utilities, namely the associated constant trait
//!   `MinusOne` used for sentinel encodings.
//! - `utils`: Core helpers such as phantom-tagged, strongly typed indices
//!   (`TypedIndex<T>`).
//!
//! ## Purpose
//!
//! Registry-style code juggles several index spaces at once (book slots,
//! patron slots) and encodes "absent" as reserved integer values. These
//! primitives make both patterns type-safe without runtime overhead,
//! reducing accidental bugs such as index mixing.
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
pub mod utils;
