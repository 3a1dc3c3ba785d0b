//! Error types and error handling for the front end.
//!
//! This module defines the error types used by every stage of the
//! pipeline. It includes:
//!
//! - Error structures with source position information
//! - One error variant per lexical, syntax and semantic failure
//! - Error names and suggestions for diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
