// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Source map position resolver for stack-beautifier.
//!
//! This crate provides functionality for:
//! - Parsing JavaScript/TypeScript source maps (v3)
//! - Decoding Base64 VLQ mappings
//! - Looking up original positions for minified line/column pairs
//!
//! [`ParsedSourceMap`] implements [`stack_beautifier_core::PositionResolver`].
//!
//! # Example
//!
//! ```
//! use stack_beautifier_core::{beautify, FormatOptions};
//! use stack_beautifier_symbolicate::ParsedSourceMap;
//!
//! let source_map = ParsedSourceMap::from_str(r#"{
//!     "version": 3,
//!     "sources": ["src/app.ts"],
//!     "names": ["main"],
//!     "mappings": "AAAAA"
//! }"#).unwrap();
//!
//! let out = beautify(&["x@1:0"], &source_map, FormatOptions::default()).unwrap();
//! assert_eq!(out, "  at main (src/app.ts:1:0)");
//! ```

pub mod error;
pub mod sourcemap;
pub mod vlq;

pub use error::{Result, SymbolicateError};
pub use sourcemap::ParsedSourceMap;
pub use vlq::{decode_vlq_mappings, decode_vlq_segment, DecodedMappings, Mapping, OriginalMapping};
