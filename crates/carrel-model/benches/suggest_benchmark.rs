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

use carrel_model::book::Book;
use carrel_model::library::Library;
use carrel_model::patron::Patron;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Builds a deterministic shelf of `n` books with spread-out aspect values.
fn make_books(n: usize) -> Vec<Book<i64>> {
    (0..n)
        .map(|i| {
            let i = i as i64;
            Book::new(
                format!("book{i}"),
                format!("author{}", i % 17),
                1950 + (i % 70),
                i % 11,
                (i * 7) % 13,
                (i * 3) % 5,
            )
        })
        .collect()
}

fn bench_suggest_book(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggest_book");

    for &num_books in &[16usize, 256, 4096] {
        let books = make_books(num_books);
        let patron = Patron::new("bench", "patron", 2i64, 3, 1, 10);

        let mut library = Library::new(num_books, num_books, 1);
        for book in &books {
            library.add_book(book);
        }
        let patron_index = library.register_patron(&patron).unwrap();

        group.throughput(Throughput::Elements(num_books as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_books),
            &num_books,
            |b, _| {
                b.iter(|| black_box(library.suggest_book(black_box(patron_index))));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_suggest_book);
criterion_main!(benches);
