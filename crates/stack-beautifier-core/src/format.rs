// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Rendering of resolved entries back to stack trace text.

use crate::frame::{OriginalPosition, ResolvedEntry, ResolvedFrame};

/// Render one entry, shortening its source path with `prefix` when non-empty.
pub fn format_entry(entry: &ResolvedEntry, prefix: &str) -> String {
	match entry {
		ResolvedEntry::Passthrough(text) => text.clone(),
		ResolvedEntry::Frame(ResolvedFrame::Unknown) => "  at <unknown>".to_string(),
		ResolvedEntry::Frame(ResolvedFrame::Known(pos)) => format_position(pos, prefix),
	}
}

fn format_position(pos: &OriginalPosition, prefix: &str) -> String {
	let source = match pos.source.strip_prefix(prefix) {
		Some(rest) if !prefix.is_empty() => format!("./{rest}"),
		_ => pos.source.clone(),
	};

	match &pos.name {
		Some(name) => format!("  at {name} ({source}:{}:{})", pos.line, pos.column),
		None => format!("  at {source}:{}:{}", pos.line, pos.column),
	}
}

/// Render all entries, one per line, without a trailing newline.
pub fn format_stack(entries: &[ResolvedEntry], prefix: &str) -> String {
	entries
		.iter()
		.map(|entry| format_entry(entry, prefix))
		.collect::<Vec<_>>()
		.join("\n")
}
