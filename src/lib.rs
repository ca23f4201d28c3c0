//! Jaibind - A C header to Jai bindings generator
//!
//! This crate provides the core library functionality for jaibind:
//! regex-based extraction of declarations from a C header and emission
//! of the corresponding Jai declarations.

pub mod bindings;
pub mod config;
pub mod util;

pub use bindings::{HeaderParser, JaiGenerator, ParsedHeader};
pub use config::Manifest;
