//! # RunBag - Run-Length Collections with Keyed Sorting
//!
//! An ordered collection that stores consecutive equal values as
//! (value, count) runs, plus a stable keyed bubble sort over plain
//! slices.
//!
//! The bag decides equality with a comparer supplied at construction
//! and upholds two properties:
//! 1. **Adjacent compression only**: a push inspects just the last run,
//!    so equal values arriving non-adjacently stay in separate runs
//! 2. **Order preservation**: rebuilding the sequence replays the runs
//!    in insertion order
//!
//! ## Example
//!
//! ```
//! use runbag_rs::{bubble_sort_by_key, RunLengthBag};
//!
//! let mut bag = RunLengthBag::new();
//! bag.extend("aaabbc".chars());
//!
//! assert_eq!(bag.len(), 6);
//! assert_eq!(bag.runs().len(), 3);
//!
//! // Rebuilds the original sequence
//! let rebuilt: String = bag.iter().collect();
//! assert_eq!(rebuilt, "aaabbc");
//!
//! let mut words = vec!["plum", "fig", "apple"];
//! bubble_sort_by_key(&mut words, |w| w.len());
//! assert_eq!(words, vec!["fig", "plum", "apple"]);
//! ```
//!
//! ## Performance
//!
//! - O(1) amortized push: a single comparison against the last run
//! - Rebuilding is O(total value count)
//! - The sort is the classic O(n^2) adjacent-swap scheme with a
//!   zero-swap early exit; already-sorted input costs one pass

mod bag;
mod iter;
mod run;
mod sort;


pub use bag::{BagStats, RunLengthBag};
pub use iter::RunLengthIter;
pub use run::Run;
pub use sort::{bubble_sort, bubble_sort_by_key};
