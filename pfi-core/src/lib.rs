//! PFI Core Library
//!
//! This crate provides the core data types for PFI (Protocol Field Inference):
//! bit intervals, field labels, the frame abstraction and inference config.

pub mod config;
pub mod error;
pub mod frame;
pub mod interval;
pub mod label;
pub mod utils;

pub use config::{InferenceConfig, SHORTEST_CONSTANT_IN_BITS};
pub use error::InferenceError;
pub use frame::{BitFrame, Frame};
pub use interval::Interval;
pub use label::FieldLabel;
