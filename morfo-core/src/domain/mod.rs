//! Segmentation pipeline
//!
//! Leaves first: ending normalization, affix enumeration, root
//! validation, compound splitting, reconstruction search, candidate
//! selection and final assembly. Every step is a pure function of the
//! word, the rules and the dictionary.

pub mod affix;
pub mod assemble;
pub mod compound;
pub mod disambiguate;
pub mod ending;
pub mod reconstruct;
pub mod scoring;
pub mod validator;

pub use affix::{strip_affixes, AffixChain, AffixReduction};
pub use compound::{split_compound, CompoundSplit};
pub use disambiguate::{collect_candidates, select, CandidateSet};
pub use ending::{normalize, NormalizedWord};
pub use reconstruct::{Candidate, CandidateOrigin};
pub use scoring::{Score, ScoringPolicy};
pub use validator::RootValidator;
