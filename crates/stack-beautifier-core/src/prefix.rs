// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Common source path prefix used to shorten formatted frames.

use crate::frame::ResolvedEntry;

/// Dependency directory the prefix must never reach into.
const DEPENDENCY_DIR: &str = "node_modules";

/// Compute the prefix shared by all resolved source paths.
///
/// Returns an empty string when fewer than two entries have a source, when
/// nothing is shared, or when the shared prefix is itself a whole source
/// path. The prefix never contains `node_modules`.
///
/// Comparing against every source, not just the first, keeps the result independent of frame order.
pub fn common_prefix(entries: &[ResolvedEntry]) -> String {
	let sources: Vec<&str> = entries.iter().filter_map(ResolvedEntry::source).collect();

	let Some((first, rest)) = sources.split_first() else {
		return String::new();
	};
	if rest.is_empty() {
		return String::new();
	}

	let mut prefix = first.to_string();
	for source in &sources {
		while !source.starts_with(prefix.as_str()) || prefix.contains(DEPENDENCY_DIR) {
			prefix.pop();
		}
	}

	if sources.iter().any(|source| *source == prefix) {
		String::new()
	} else {
		prefix
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::frame::{OriginalPosition, ResolvedFrame};
	use proptest::prelude::*;

	fn known(source: &str) -> ResolvedEntry {
		ResolvedEntry::Frame(ResolvedFrame::Known(OriginalPosition {
			source: source.to_string(),
			line: 1,
			column: 0,
			name: None,
		}))
	}

	fn entries(sources: &[&str]) -> Vec<ResolvedEntry> {
		sources.iter().map(|s| known(s)).collect()
	}

	#[test]
	fn test_shared_directory() {
		let entries = entries(&["/home/u/app/src/a.js", "/home/u/app/src/b.js"]);
		assert_eq!(common_prefix(&entries), "/home/u/app/src/");
	}

	#[test]
	fn test_single_source_is_not_shortened() {
		let entries = entries(&["/home/u/app/src/a.js"]);
		assert_eq!(common_prefix(&entries), "");
	}

	#[test]
	fn test_unknown_and_passthrough_entries_ignored() {
		let entries = vec![
			ResolvedEntry::Passthrough("Error: boom".to_string()),
			known("/srv/app/a.js"),
			ResolvedEntry::Frame(ResolvedFrame::Unknown),
			known("/srv/app/b.js"),
		];
		assert_eq!(common_prefix(&entries), "/srv/app/");
	}

	#[test]
	fn test_identical_sources_not_shortened() {
		let entries = entries(&["src/a.js", "src/a.js"]);
		assert_eq!(common_prefix(&entries), "");
	}

	#[test]
	fn test_prefix_equal_to_a_source_not_shortened() {
		assert_eq!(common_prefix(&entries(&["src/a", "src/a/b.js"])), "");
		assert_eq!(common_prefix(&entries(&["src/a/b.js", "src/a"])), "");
	}

	#[test]
	fn test_nothing_shared() {
		let entries = entries(&["a/x.js", "b/y.js"]);
		assert_eq!(common_prefix(&entries), "");
	}

	#[test]
	fn test_stops_before_dependency_dir() {
		let entries = entries(&[
			"/app/node_modules/react/index.js",
			"/app/node_modules/react/cjs/react.js",
		]);
		assert_eq!(common_prefix(&entries), "/app/node_module");
	}

	#[test]
	fn test_multibyte_paths() {
		let entries = entries(&["/home/zoë/app/a.js", "/home/zoë/app/b.js"]);
		assert_eq!(common_prefix(&entries), "/home/zoë/app/");
	}

	proptest! {
		#[test]
		fn prefix_never_contains_dependency_dir(
			sources in proptest::collection::vec("(/app|/app/node_modules|/node_modules/x)/[a-z]{1,3}(/node_modules)?/[a-z]{1,3}\\.js", 2..6),
		) {
			let refs: Vec<&str> = sources.iter().map(String::as_str).collect();
			prop_assert!(!common_prefix(&entries(&refs)).contains(DEPENDENCY_DIR));
		}

		#[test]
		fn prefix_is_order_independent(
			sources in proptest::collection::vec("/(app|lib)/[ab]{0,3}/?[a-c]{1,3}\\.js", 2..6),
			rotation in 0usize..6,
		) {
			let refs: Vec<&str> = sources.iter().map(String::as_str).collect();
			let mut rotated = refs.clone();
			rotated.rotate_left(rotation % refs.len());
			let mut reversed = refs.clone();
			reversed.reverse();

			let expected = common_prefix(&entries(&refs));
			prop_assert_eq!(&common_prefix(&entries(&rotated)), &expected);
			prop_assert_eq!(&common_prefix(&entries(&reversed)), &expected);
		}

		#[test]
		fn prefix_is_shared_by_every_source(
			sources in proptest::collection::vec("/srv/[a-c]{1,4}/[a-c]{1,4}\\.js", 2..6),
		) {
			let refs: Vec<&str> = sources.iter().map(String::as_str).collect();
			let prefix = common_prefix(&entries(&refs));
			for source in &refs {
				prop_assert!(source.starts_with(prefix.as_str()));
			}
		}
	}
}
