//! Generation domain
//!
//! How the external text-generation service is asked to answer:
//! [`mode::GenerationMode`] selects between free-text and schema-constrained
//! output, which in turn selects the parsing path on the way back.

pub mod mode;

pub use mode::GenerationMode;
