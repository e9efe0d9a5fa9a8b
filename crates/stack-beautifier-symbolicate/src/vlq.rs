// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Base64 VLQ decoding of the source map `mappings` field.

use tracing::trace;

use crate::error::{Result, SymbolicateError};

const BASE64_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

const VLQ_CONTINUATION: i64 = 0b10_0000;
const VLQ_MASK: i64 = 0b01_1111;

fn decode_char(ch: u8) -> Result<i64> {
	BASE64_CHARS
		.iter()
		.position(|&c| c == ch)
		.map(|pos| pos as i64)
		.ok_or(SymbolicateError::InvalidVlqChar(ch as char))
}

/// Decode one comma-separated segment into its signed values.
///
/// The lowest bit of each decoded value is the sign.
pub fn decode_vlq_segment(segment: &str) -> Result<Vec<i32>> {
	let mut values = Vec::new();
	let mut value = 0i64;
	let mut shift = 0u32;

	for ch in segment.bytes() {
		let digit = decode_char(ch)?;
		value += (digit & VLQ_MASK) << shift;

		if digit & VLQ_CONTINUATION != 0 {
			shift += 5;
			if shift > 31 {
				return Err(SymbolicateError::VlqOverflow(segment.to_string()));
			}
			continue;
		}

		let magnitude = value >> 1;
		let signed = if value & 1 != 0 { -magnitude } else { magnitude };
		let signed =
			i32::try_from(signed).map_err(|_| SymbolicateError::VlqOverflow(segment.to_string()))?;
		values.push(signed);
		value = 0;
		shift = 0;
	}

	Ok(values)
}

/// One generated-to-original mapping. All fields are 0-indexed.
///
/// `original` is `None` for single-value segments, which end the previous
/// mapped range without pointing anywhere in the original sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
	pub generated_line: u32,
	pub generated_column: u32,
	pub original: Option<OriginalMapping>,
}

/// Position in an original source referenced by a [`Mapping`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OriginalMapping {
	pub source_index: u32,
	pub line: u32,
	pub column: u32,
	pub name_index: Option<u32>,
}

/// Mappings sorted by generated position.
#[derive(Debug, Clone, Default)]
pub struct DecodedMappings {
	mappings: Vec<Mapping>,
}

impl DecodedMappings {
	/// Find the mapping at or before `column` on the generated `line`.
	pub fn find(&self, line: u32, column: u32) -> Option<&Mapping> {
		let start = self.mappings.partition_point(|m| m.generated_line < line);
		let end = self.mappings.partition_point(|m| m.generated_line <= line);
		let on_line = &self.mappings[start..end];

		match on_line.partition_point(|m| m.generated_column <= column) {
			0 => None,
			idx => Some(&on_line[idx - 1]),
		}
	}

	pub fn len(&self) -> usize {
		self.mappings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.mappings.is_empty()
	}
}

/// Running absolute values; every field in `mappings` is delta-encoded.
#[derive(Default)]
struct DecodeState {
	source: i64,
	original_line: i64,
	original_column: i64,
	name: i64,
}

impl DecodeState {
	fn original(&self, has_name: bool) -> Option<OriginalMapping> {
		Some(OriginalMapping {
			source_index: u32::try_from(self.source).ok()?,
			line: u32::try_from(self.original_line).ok()?,
			column: u32::try_from(self.original_column).ok()?,
			name_index: if has_name {
				Some(u32::try_from(self.name).ok()?)
			} else {
				None
			},
		})
	}
}

/// Decode a `mappings` string.
///
/// Lines are separated by `;`, segments by `,`. Single-value segments are
/// kept with no original position. Segments whose accumulated values go
/// negative are skipped.
pub fn decode_vlq_mappings(mappings: &str) -> Result<DecodedMappings> {
	let mut decoded = Vec::new();
	let mut state = DecodeState::default();

	for (generated_line, line) in mappings.split(';').enumerate() {
		let mut generated_column = 0i64;

		for segment in line.split(',').filter(|s| !s.is_empty()) {
			let values = decode_vlq_segment(segment)?;
			let Some(&column_delta) = values.first() else {
				continue;
			};
			generated_column += i64::from(column_delta);

			let original = if values.len() >= 4 {
				state.source += i64::from(values[1]);
				state.original_line += i64::from(values[2]);
				state.original_column += i64::from(values[3]);
				if let Some(&delta) = values.get(4) {
					state.name += i64::from(delta);
				}
				match state.original(values.len() >= 5) {
					Some(original) => Some(original),
					None => {
						trace!(generated_line, segment, "skipping out-of-range mapping");
						continue;
					}
				}
			} else {
				None
			};

			let (Ok(generated_line), Ok(generated_column)) =
				(u32::try_from(generated_line), u32::try_from(generated_column))
			else {
				trace!(generated_line, segment, "skipping out-of-range mapping");
				continue;
			};

			decoded.push(Mapping {
				generated_line,
				generated_column,
				original,
			});
		}
	}

	decoded.sort_by_key(|m| (m.generated_line, m.generated_column));
	Ok(DecodedMappings { mappings: decoded })
}
