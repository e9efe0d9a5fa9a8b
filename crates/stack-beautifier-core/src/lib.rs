// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Stack trace beautification core.
//!
//! Turns a stack trace captured from minified JavaScript into one that
//! references original source locations. This crate provides:
//! - The stack line grammar ([`match_frame`])
//! - The [`PositionResolver`] seam and frame resolution
//! - Whole-trace processing with first-line and blank-line policy
//! - Common path prefix shortening and output formatting
//!
//! No I/O happens here; the resolver is supplied by the caller.
//!
//! # Example
//!
//! ```
//! use stack_beautifier_core::{beautify, FormatOptions, OriginalPosition, StaticResolver};
//!
//! let mut resolver = StaticResolver::new();
//! resolver.insert(10, 5, OriginalPosition {
//!     source: "src/app.js".to_string(),
//!     line: 2,
//!     column: 1,
//!     name: Some("foo".to_string()),
//! });
//!
//! let out = beautify(&["foo@10:5"], &resolver, FormatOptions::default()).unwrap();
//! assert_eq!(out, "  at foo (src/app.js:2:1)");
//! ```

pub mod error;
pub mod format;
pub mod frame;
pub mod matcher;
pub mod prefix;
pub mod processor;
pub mod resolver;

pub use error::{BeautifyError, Result};
pub use format::{format_entry, format_stack};
pub use frame::{OriginalPosition, ParsedFrame, ResolvedEntry, ResolvedFrame};
pub use matcher::match_frame;
pub use prefix::common_prefix;
pub use processor::process_stack;
pub use resolver::{resolve_frame, MinifiedPosition, PositionResolver, StaticResolver};

use tracing::debug;

/// Output options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
	/// Rewrite source paths relative to their common prefix.
	pub shorten_paths: bool,
}

impl Default for FormatOptions {
	fn default() -> Self {
		Self {
			shorten_paths: true,
		}
	}
}

/// Process, shorten and format a trimmed stack trace in one pass.
pub fn beautify<S, R>(lines: &[S], resolver: &R, options: FormatOptions) -> Result<String>
where
	S: AsRef<str>,
	R: PositionResolver + ?Sized,
{
	let entries = process_stack(lines, resolver)?;

	let prefix = if options.shorten_paths {
		common_prefix(&entries)
	} else {
		String::new()
	};
	debug!(entries = entries.len(), prefix = %prefix, "formatting stack trace");

	Ok(format_stack(&entries, &prefix))
}
