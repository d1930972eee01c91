//! Ordered symbol table backed by a left-leaning red-black (LLRB) tree.
//!
//! Implements the LLRB variant described by Robert Sedgewick in
//! *Left-leaning Red-Black Trees* (2008): red links lean left only, which
//! keeps insertion and minimum deletion to a handful of rotations and color
//! flips applied on the way back up a recursive descent. Height stays below
//! `2·log2(n+1)`, so all operations run in `O(log n)`.
//!
//! Nodes own their children; there are no parent links. The color bit of
//! each node describes the link coming from its parent.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`map`] | [`OrderedMap`] public API and std trait impls |
//! [`types`] | [`LlrbNode`] and the owned [`Link`] type |
//! [`util`] | rotations, color flips, `put`, `delete_min`, invariant checks |
//! [`iter`] | ascending [`Iter`], [`Keys`], [`Values`], [`IntoIter`] |
//! [`print`] | Graphviz rendering of the tree shape |
//!
//! With the `serde` feature the map also implements `Serialize` and
//! `Deserialize`. Its tests only build with the feature enabled:
//! `cargo test -p skeleton-order --features serde`.

pub mod iter;
pub mod map;
pub mod print;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod types;
pub mod util;

pub use iter::{IntoIter, Iter, Keys, Values};
pub use map::OrderedMap;
pub use types::{Link, LlrbNode};
