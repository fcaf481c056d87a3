//! Core transform engine.
//!
//! - `transform`: single-script literal rewriting and import injection
//! - `records`: identifier generation and the identifier → text map
//! - `context`: project-wide batch run over scanned files
//! - `catalog`: locale message file writer
//! - `file_scanner`, `parsers`, `error`: supporting pieces

pub mod catalog;
pub mod context;
pub mod error;
pub mod file_scanner;
pub mod parsers;
pub mod records;
pub mod transform;

pub use context::{FileTransform, ParseFailure, TransformContext, TransformResults};
pub use error::{TransformError, TransformResult};
pub use records::{RecordMap, identifier_for};
