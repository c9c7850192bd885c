//! PFI Inference Engine
//!
//! This crate infers protocol fields (preamble, global constants, sync word)
//! from a corpus of bit-decoded frames by pairwise comparison and voting.

pub mod assigner;
pub mod cancel;
pub mod constant;
pub mod detector;
pub mod vote;

pub use assigner::LabelAssigner;
pub use cancel::CancelToken;
pub use constant::{
    ConstantAggregator, ConstantCache, ConstantTable, PairKey, PairwiseConstantScanner,
};
pub use detector::{PreambleDetector, SyncDetector};
