// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Position resolver seam and the adapter that feeds it parsed frames.

use std::collections::HashMap;

use crate::frame::{OriginalPosition, ParsedFrame, ResolvedFrame};

/// A position in the minified (generated) code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinifiedPosition<'a> {
	/// 1-indexed line.
	pub line: u32,
	/// Column as printed in the trace.
	pub column: u32,
	/// Symbol name seen in the trace, passed through for disambiguation.
	pub name: Option<&'a str>,
}

/// Maps positions in minified code back to original sources.
///
/// Returning `None` means "unknown origin" and is not an error.
pub trait PositionResolver {
	fn original_position_for(&self, position: MinifiedPosition<'_>) -> Option<OriginalPosition>;
}

/// Fixed lookup table keyed by `(line, column)`; the query name is ignored.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
	positions: HashMap<(u32, u32), OriginalPosition>,
}

impl StaticResolver {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, line: u32, column: u32, position: OriginalPosition) {
		self.positions.insert((line, column), position);
	}
}

impl PositionResolver for StaticResolver {
	fn original_position_for(&self, position: MinifiedPosition<'_>) -> Option<OriginalPosition> {
		self.positions.get(&(position.line, position.column)).cloned()
	}
}

/// Resolve a parsed frame to its original location.
///
/// An empty source path or name from the resolver is treated as absent.
pub fn resolve_frame<R: PositionResolver + ?Sized>(
	resolver: &R,
	frame: &ParsedFrame,
) -> ResolvedFrame {
	let query = MinifiedPosition {
		line: frame.line,
		column: frame.column,
		name: frame.name.as_deref(),
	};

	match resolver.original_position_for(query) {
		Some(pos) if !pos.source.is_empty() => ResolvedFrame::Known(OriginalPosition {
			name: pos.name.filter(|n| !n.is_empty()),
			..pos
		}),
		_ => ResolvedFrame::Unknown,
	}
}
