//! Source parsers.
//!
//! - `script`: JS/TS (optionally JSX) parser built on swc, with byte-offset helpers
//!   for span-based rewriting.

pub mod script;
