//! cjk-i18n - rewrite hardcoded Chinese text in JS/TS into i18n calls
//!
//! Every string or template literal containing CJK characters is replaced with a
//! call to the translation function keyed by the MD5 digest of its text, and the
//! `vue-i18n` hook is imported where needed. The identifier → text pairs are
//! collected for the message catalog.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface (`init`, `print`, `extract`, `rewrite`)
//! - `config`: `.i18nrc.json` loading and parsing
//! - `core`: Transform engine, batch context and message catalog
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
