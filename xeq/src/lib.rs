//! Utilities for working with immutable ordered sequences, with element
//! identity decided by caller-supplied witnesses rather than by trait
//! bounds on the element type.
//!
//! The sequence operations all follow the same contract: inputs are
//! borrowed and never mutated, outputs are fresh values, and absence is
//! an `Option` rather than a panic. Results that cannot be empty say so
//! in their type by returning a [`NonEmpty`].
//!
//! ```
//! use xeq::{insert_many, nonempty, pluck_first, upsert, Keyed};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Stop {
//!     id: u32,
//!     name: &'static str,
//! }
//!
//! let by_id = Keyed::new(|s: &Stop| s.id);
//! let line = vec![
//!     Stop { id: 1, name: "harbour" },
//!     Stop { id: 2, name: "market" },
//! ];
//!
//! // a known id replaces in place, so the line keeps its length
//! let line = upsert(&by_id, Stop { id: 2, name: "new market" }, &line);
//! assert_eq!(line.len(), 2);
//!
//! // pull the first match out, keeping the rest in order
//! let stops: Vec<Stop> = line.into();
//! let (pulled, rest) = pluck_first(|s: &Stop| s.id == 1, &stops);
//! assert_eq!(pulled.map(|s| s.name), Some("harbour"));
//!
//! // splicing past the end is out of range
//! let extension = nonempty![Stop { id: 3, name: "park" }];
//! assert!(insert_many(9, &extension, &rest).is_none());
//! ```
//!
//! The `datetime`, `uri` and `string` modules wrap [`chrono`], [`url`]
//! and the standard library with the same conventions. Helpers for
//! deferred computations live in the separate `xeq-defer` crate, keeping
//! this one free of any runtime.

pub mod datetime;
pub mod error;
pub mod sequence;
pub mod string;
pub mod uri;
pub mod witness;

pub use error::{Error, Result};
pub use nonempty::{nonempty, NonEmpty};
pub use sequence::{
    all, any, insert_many, join, length, member, membership, pluck_first, upsert, Disordered,
};
pub use witness::{Equality, Keyed, Order, Structural};
