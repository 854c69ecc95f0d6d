//! `mdsplice_core` is the engine behind the `mdsplice` tool. It converts
//! individual files (code, CSV, JSON, plain text, Markdown) into Markdown and
//! splices the result into a host document at named placeholder regions,
//! rerunning idempotently to refresh stale content.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Host document text
//!   → Scanner (locates <!--file PATTERN--> ... <!--file end--> regions)
//!   → Resolver (pattern → matching files, relative to the host's directory)
//!   → Converters (file bytes → Markdown fragment, per extension)
//!   → Rewriter (ordered span substitution into one new buffer)
//! ```
//!
//! ## Key Types
//!
//! - [`Block`] — One placeholder region: pattern plus marker and body spans.
//! - [`Resolution`] — Outcome of resolving a pattern: not found, one file,
//!   or several.
//! - [`FileKind`] — Closed set of conversion categories keyed by extension.
//! - [`ConversionOptions`] — Immutable per-run options (date stamp, CSV
//!   header breaking, bold columns).
//! - [`HostDocument`] / [`UpdateOutcome`] — Input and result of one run.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use mdsplice_core::ConversionOptions;
//! use mdsplice_core::HostDocument;
//! use mdsplice_core::update_document;
//!
//! let document = HostDocument::load(Path::new("README.md")).unwrap();
//! let outcome = update_document(&document, &ConversionOptions::default()).unwrap();
//! println!("{}", outcome.content);
//! ```
//!
//! A pattern that matches nothing renders a comment fragment and the run
//! continues; only a malformed block (an unterminated start marker) fails the
//! whole run.

pub use config::*;
pub use convert::*;
pub use engine::*;
pub use error::*;
pub use resolver::*;
pub use rewriter::*;
pub use scanner::*;

pub mod config;
pub mod convert;
mod engine;
mod error;
pub mod resolver;
mod rewriter;
pub mod scanner;
