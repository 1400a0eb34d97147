//! Ita - adaptors and combinators for lazy, callback-driven sequences.
//!
//! A sequence here is a value that, given a visitor, calls it once per
//! element and stops as soon as the visitor returns `false`. Ita provides:
//!
//! - The protocol itself: [`Seq`] for single values, [`Seq2`] for pairs
//! - Adapters for sources that are not sequences: [`num_at`] for "count +
//!   element-at-index", [`keys_values`] for "key list + lookup"
//! - Lazy combinators: [`pipe`], [`filter`], [`take_first`], [`take_second`]
//! - Terminals: [`exec`] and the fallible [`try_exec`]
//! - [`Chain`] / [`Chain2`] for writing the same pipelines left to right
//!
//! # Quick Start
//!
//! ```rust
//! use ita::{num_at, Chain};
//!
//! // A type that only knows its length and how to fetch one element
//! struct MyList {
//!     s: Vec<&'static str>,
//! }
//!
//! impl MyList {
//!     fn num(&self) -> usize {
//!         self.s.len()
//!     }
//!
//!     fn item(&self, i: usize) -> &'static str {
//!         self.s[i]
//!     }
//! }
//!
//! let list = MyList { s: vec!["rei", "ichi", "ni", "san", "shi", "go"] };
//!
//! let mut out = Vec::new();
//! Chain::new(num_at(|| list.num(), |i| list.item(i)))
//!     .pipe(str::to_uppercase)
//!     .filter(|s| s.len() <= 2)
//!     .exec(|s| out.push(s));
//!
//! assert_eq!(out, vec!["NI", "GO"]);
//! ```
//!
//! # Laziness and Early Stop
//!
//! Building a pipeline does no work. Elements are produced one at a time when
//! the pipeline is drained, and each one travels through every stage before
//! the next is produced. When any visitor returns `false`, every upstream
//! stage stops immediately:
//!
//! ```rust
//! use std::cell::Cell;
//! use ita::{num_at, pipe, Seq};
//!
//! let produced = Cell::new(0);
//! let seq = pipe(
//!     num_at(|| 1_000u32, |i| {
//!         produced.set(produced.get() + 1);
//!         i
//!     }),
//!     |i| i * 2,
//! );
//!
//! seq.visit(|v| v < 6);
//! assert_eq!(produced.get(), 4);
//! ```
//!
//! # Errors
//!
//! Ita defines no error type. Failures inside caller-supplied closures pass
//! through unchanged; [`try_exec`] stops at the first `Err` returned by the
//! action and hands it back as is.

mod adapt;
mod chain;
mod combinators;
mod seq;
mod source;

// Re-export public API
pub use adapt::{
    keys_values, keys_values_seq, num_at, num_at_index, KeysValues, KeysValuesSeq, NumAt,
    NumAtIndex,
};
pub use chain::{Chain, Chain2};
pub use combinators::{
    exec, exec2, filter, filter2, pipe, pipe2, take_first, take_second, try_exec, try_exec2,
    Filter, Filter2, Pipe, Pipe2, TakeFirst, TakeSecond,
};
pub use seq::{all, from_fn, from_fn2, values, All, FromFn, FromFn2, Seq, Seq2, Values};
pub use source::{indexed, indexed_with_index, keyed, Indexed, Keyed};
