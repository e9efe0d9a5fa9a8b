// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Stack line grammar.
//!
//! Recognised frame conventions, tried in this order:
//!
//! 1. `someFun@13:12`
//! 2. `at filename:13:12`
//! 3. `at someFun (filename:13:12)`
//! 4. `at filename:13` (column defaults to 0)
//!
//! The first grammar that matches the whole line wins.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::trace;

use crate::frame::ParsedFrame;

/// A single frame convention and the capture groups holding its fields.
struct FrameGrammar {
	label: &'static str,
	pattern: Regex,
	name_group: usize,
	line_group: usize,
	column_group: Option<usize>,
}

impl FrameGrammar {
	fn new(
		label: &'static str,
		pattern: &str,
		name_group: usize,
		line_group: usize,
		column_group: Option<usize>,
	) -> Self {
		Self {
			label,
			pattern: Regex::new(pattern).expect("frame grammar pattern is valid"),
			name_group,
			line_group,
			column_group,
		}
	}

	fn extract(&self, line: &str) -> Option<ParsedFrame> {
		let caps = self.pattern.captures(line)?;

		let name = caps
			.get(self.name_group)
			.map(|m| m.as_str())
			.filter(|s| !s.is_empty())
			.map(str::to_string);
		let line = number(&caps, self.line_group)?;
		let column = match self.column_group {
			Some(group) => number(&caps, group)?,
			None => 0,
		};

		Some(ParsedFrame { name, line, column })
	}
}

/// ASCII digit groups can still overflow `u32`; such a line does not match.
fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
	caps.get(group)?.as_str().parse().ok()
}

static GRAMMARS: LazyLock<[FrameGrammar; 4]> = LazyLock::new(|| {
	[
		FrameGrammar::new("symbol@line:column", r"^(.*)@([0-9]+):([0-9]+)$", 1, 2, Some(3)),
		FrameGrammar::new("at path:line:column", r"^at (.*):([0-9]+):([0-9]+)$", 1, 2, Some(3)),
		FrameGrammar::new(
			"at symbol (path:line:column)",
			r"^at (.*) \((.*):([0-9]+):([0-9]+)\)$",
			1,
			3,
			Some(4),
		),
		FrameGrammar::new("at path:line", r"^at (.*):([0-9]+)$", 1, 2, None),
	]
});

/// Match a trimmed trace line against the frame grammars.
///
/// Returns `None` when no grammar matches the whole line.
pub fn match_frame(line: &str) -> Option<ParsedFrame> {
	GRAMMARS.iter().find_map(|grammar| {
		let frame = grammar.extract(line)?;
		trace!(grammar = grammar.label, line, "matched stack frame");
		Some(frame)
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn frame(name: Option<&str>, line: u32, column: u32) -> ParsedFrame {
		ParsedFrame {
			name: name.map(str::to_string),
			line,
			column,
		}
	}

	#[test]
	fn test_symbol_at_line_column() {
		assert_eq!(match_frame("someFun@13:12"), Some(frame(Some("someFun"), 13, 12)));
	}

	#[test]
	fn test_at_path_line_column() {
		assert_eq!(
			match_frame("at filename:13:12"),
			Some(frame(Some("filename"), 13, 12))
		);
	}

	#[test]
	fn test_at_symbol_with_location() {
		assert_eq!(
			match_frame("at someFun (filename:13:12)"),
			Some(frame(Some("someFun"), 13, 12))
		);
	}

	#[test]
	fn test_at_symbol_with_url_location() {
		assert_eq!(
			match_frame("at Object.render (https://example.com/static/main.js:1:4821)"),
			Some(frame(Some("Object.render"), 1, 4821))
		);
	}

	#[test]
	fn test_at_path_line_defaults_column() {
		assert_eq!(match_frame("at filename:13"), Some(frame(Some("filename"), 13, 0)));
	}

	#[test]
	fn test_anonymous_symbol() {
		assert_eq!(match_frame("@1:20"), Some(frame(None, 1, 20)));
	}

	#[test]
	fn test_first_grammar_wins_over_last() {
		// Also matches `at <path>:<line>` with path "foo@1".
		assert_eq!(match_frame("at foo@1:2"), Some(frame(Some("at foo"), 1, 2)));
	}

	#[test]
	fn test_line_column_grammar_wins_over_line_only() {
		// Also matches `at <path>:<line>` with path "f:1".
		assert_eq!(match_frame("at f:1:2"), Some(frame(Some("f"), 1, 2)));
	}

	#[test]
	fn test_no_match() {
		assert_eq!(match_frame("Error: something broke"), None);
		assert_eq!(match_frame(""), None);
		assert_eq!(match_frame("at foo"), None);
		assert_eq!(match_frame("foo@bar:1"), None);
	}

	#[test]
	fn test_formatted_output_is_not_a_frame() {
		assert_eq!(match_frame("  at <unknown>"), None);
		assert_eq!(match_frame("  at foo (src/app.js:2:1)"), None);
	}

	#[test]
	fn test_non_ascii_digits_do_not_match() {
		// Arabic-Indic and fullwidth digits.
		assert_eq!(match_frame("foo@\u{0661}\u{0662}:3"), None);
		assert_eq!(match_frame("at bundle.js:\u{FF11}:3"), None);
		assert_eq!(match_frame("at bundle.js:1:\u{0663}"), None);
	}

	#[test]
	fn test_overflowing_number_does_not_match() {
		assert_eq!(match_frame("foo@99999999999:1"), None);
	}

	proptest! {
		#[test]
		fn symbol_grammar_extracts_fields(
			name in "[A-Za-z_$][A-Za-z0-9_$.]{0,20}",
			line in 0u32..100_000,
			column in 0u32..100_000,
		) {
			let parsed = match_frame(&format!("{name}@{line}:{column}"));
			prop_assert_eq!(parsed, Some(frame(Some(name.as_str()), line, column)));
		}

		#[test]
		fn located_grammar_extracts_symbol(
			name in "[A-Za-z_$][A-Za-z0-9_$.]{0,20}",
			path in "[a-z/]{1,20}\\.js",
			line in 0u32..100_000,
			column in 0u32..100_000,
		) {
			let parsed = match_frame(&format!("at {name} ({path}:{line}:{column})"));
			prop_assert_eq!(parsed, Some(frame(Some(name.as_str()), line, column)));
		}
	}
}
