//! A Fenwick tree (Binary Indexed Tree) engine built for visualizing the algorithm.
//!
//! For presentation helpers (input filtering, table layout, highlighting), see the
//! `fenwick-viz-adapter` crate.
//!
//! [`FenwickTree`] supports point updates and prefix-sum queries in `O(log n)`, and records the
//! exact aggregate cells each operation visited as a [`Trace`]. The trace is part of the contract:
//! an observer reads it after every call to highlight the update path or the query path.
//!
//! It is UI-agnostic. A presentation layer is expected to:
//! - drive the tree through `resize`, `set_value` and `prefix_sum`
//! - read back `values`, `tree`, `trace` and `last_sum` to render
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod fenwick;
mod options;
mod state;
mod trace;
mod tree;


pub use error::{Error, MAX_LEN};
pub use fenwick::{covered_range, level};
pub use options::{FenwickOptions, InitialValue, OnChangeCallback};
pub use state::Snapshot;
pub use trace::{Trace, TraceKind};
pub use tree::FenwickTree;
