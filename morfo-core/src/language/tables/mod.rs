//! Runtime tables for morphology rules
//!
//! All tables are allocation-free during lookup.

pub mod affix;
pub mod wordset;

pub use affix::{AffixTrie, Anchor};
pub use wordset::WordSet;
