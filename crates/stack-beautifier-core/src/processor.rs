// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Drives frame matching and resolution over a whole trace.

use tracing::debug;

use crate::error::{BeautifyError, Result};
use crate::frame::ResolvedEntry;
use crate::matcher::match_frame;
use crate::resolver::{resolve_frame, PositionResolver};

/// Match and resolve every line of a trimmed stack trace.
///
/// - The first line may be a free-form message; if it is not a frame it is
///   passed through verbatim.
/// - An empty line after the first ends the trace.
/// - Any other line that is not a frame fails the whole run.
pub fn process_stack<S, R>(lines: &[S], resolver: &R) -> Result<Vec<ResolvedEntry>>
where
	S: AsRef<str>,
	R: PositionResolver + ?Sized,
{
	let mut entries = Vec::with_capacity(lines.len());

	for (i, line) in lines.iter().enumerate() {
		let line = line.as_ref();

		match match_frame(line) {
			Some(frame) => {
				let resolved = resolve_frame(resolver, &frame);
				debug!(line_number = i + 1, source = ?resolved.source(), "resolved stack frame");
				entries.push(ResolvedEntry::Frame(resolved));
			}
			None if i == 0 => entries.push(ResolvedEntry::Passthrough(line.to_string())),
			None if line.is_empty() => {
				debug!(line_number = i + 1, "blank line ends stack trace");
				break;
			}
			None => {
				return Err(BeautifyError::StackParse {
					line_number: i + 1,
					text: line.to_string(),
				})
			}
		}
	}

	Ok(entries)
}
