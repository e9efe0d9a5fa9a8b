// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Frame types flowing through the beautifier pipeline.

/// A frame extracted from one line of a minified stack trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFrame {
	/// Symbol name, or the minified file reference for `at <path>:<line>` frames.
	pub name: Option<String>,
	/// Line in the generated file (1-indexed, as printed in traces).
	pub line: u32,
	/// Column in the generated file. Defaults to 0 when the trace omits it.
	pub column: u32,
}

/// Original position information returned by a [`PositionResolver`](crate::PositionResolver).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginalPosition {
	/// Original source file path.
	pub source: String,
	/// Line in the original source (1-indexed).
	pub line: u32,
	/// Column in the original source (0-indexed).
	pub column: u32,
	/// Original identifier name if available.
	pub name: Option<String>,
}

/// Outcome of resolving a single [`ParsedFrame`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedFrame {
	/// The resolver had no original position for the minified address.
	Unknown,
	/// The frame maps back to an original source location.
	Known(OriginalPosition),
}

impl ResolvedFrame {
	/// The original source path, if the frame was resolved.
	pub fn source(&self) -> Option<&str> {
		match self {
			Self::Unknown => None,
			Self::Known(pos) => Some(&pos.source),
		}
	}
}

/// One processed line of the input trace, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedEntry {
	/// Free-form first line (usually the error message), emitted verbatim.
	Passthrough(String),
	/// A stack frame after resolution.
	Frame(ResolvedFrame),
}

impl ResolvedEntry {
	/// The original source path of a resolved frame entry.
	pub fn source(&self) -> Option<&str> {
		match self {
			Self::Passthrough(_) => None,
			Self::Frame(frame) => frame.source(),
		}
	}
}
