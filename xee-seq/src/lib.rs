//! Lazy sequence combinators.
//!
//! A [`Sequence`] is anything that can be iterated: a collection, a range,
//! an iterator chain, a generator. The combinators in this crate take
//! sequences and return new ones without collecting anything in between:
//!
//! - [`drop`] and [`drop_while`] skip a prefix;
//! - [`take`] and [`take_while`] keep only a prefix;
//! - [`zip`] and [`zip_all`] pair up two sequences in lockstep;
//! - [`chunk`] groups consecutive elements.
//!
//! Nothing is produced until it's asked for, and asking stops as soon as the
//! consumer stops. The results are iterators themselves, so combinators
//! nest:
//!
//! ```
//! use xee_seq::{chunk, drop, take};
//!
//! let chunks = chunk(take(drop(1.., 2), 5), 2).unwrap();
//! assert_eq!(
//!     chunks.collect::<Vec<_>>(),
//!     vec![vec![3, 4], vec![5, 6], vec![7]]
//! );
//! ```
mod chunk;
mod drop;
pub mod error;
mod pull;
mod sequence;
mod take;
mod zip;

pub use chunk::{chunk, Chunks};
pub use drop::{drop, drop_while, Dropped, DroppedWhile};
pub use error::{Error, Result};
pub use pull::Pull;
pub use sequence::{Sequence, Sequence2};
pub use take::{take, take_while, Taken, TakenWhile};
pub use zip::{zip, zip_all, Zipped, ZippedAll};
