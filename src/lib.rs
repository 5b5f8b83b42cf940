//! Scrapi - OpenAPI component schemas from HTML API reference pages
//!
//! Scrapi is a CLI tool and library that reads hand-authored API reference
//! documentation, infers a schema for every documented object from its
//! attributes table, and writes the schemas as one OpenAPI document.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, report, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Documentation-to-schema inference engine
//! - `diagnostics`: Diagnostic type definitions and the sink they go through
//! - `discovery`: Page links on the index page
//! - `document`: OpenAPI document assembly
//! - `fetch`: HTTP and local mirror page fetchers
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod diagnostics;
pub mod discovery;
pub mod document;
pub mod fetch;
pub mod utils;
