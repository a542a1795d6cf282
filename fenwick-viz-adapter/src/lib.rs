//! Adapter utilities for the `fenwick-viz` crate.
//!
//! The `fenwick-viz` crate is UI-agnostic and focuses on the tree and its traces. This crate
//! provides small, framework-neutral helpers a visualization page needs:
//!
//! - A [`Controller`] that filters raw input and maps page events onto tree operations
//! - A [`TreeLayout`] that places tree cells into table rows and columns
//! - [`Highlight`]s derived from the current trace
//!
//! This crate is intentionally framework-agnostic (no HTML/TUI bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod error;
mod highlight;
mod layout;


pub use controller::{Controller, DEFAULT_MAX_LEN};
pub use error::InputError;
pub use highlight::Highlight;
pub use layout::{LayoutCell, TreeLayout};
