// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Source map v3 parsing and position lookup.

use std::path::Path;

use serde::Deserialize;
use stack_beautifier_core::{MinifiedPosition, OriginalPosition, PositionResolver};
use tracing::{debug, warn};

use crate::error::{Result, SymbolicateError};
use crate::vlq::{decode_vlq_mappings, DecodedMappings};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSourceMap {
	version: u32,
	#[serde(default)]
	file: Option<String>,
	#[serde(default)]
	source_root: Option<String>,
	sources: Vec<Option<String>>,
	#[serde(default)]
	names: Vec<String>,
	mappings: String,
}

/// Parsed source map ready for lookups.
#[derive(Debug, Clone)]
pub struct ParsedSourceMap {
	/// Generated file name, if the map records it.
	pub file: Option<String>,
	/// Original source paths, already joined with `sourceRoot`.
	pub sources: Vec<String>,
	/// Original identifiers (function/variable names).
	pub names: Vec<String>,
	mappings: DecodedMappings,
}

impl ParsedSourceMap {
	/// Parse a source map from JSON bytes.
	pub fn from_bytes(data: &[u8]) -> Result<Self> {
		let raw: RawSourceMap = serde_json::from_slice(data)?;

		if raw.version != 3 {
			return Err(SymbolicateError::InvalidSourceMapVersion(raw.version));
		}

		let mappings = decode_vlq_mappings(&raw.mappings)?;
		let root = raw.source_root.as_deref().unwrap_or_default();
		let sources = raw
			.sources
			.into_iter()
			.map(|source| join_source_root(root, &source.unwrap_or_default()))
			.collect();

		Ok(Self {
			file: raw.file,
			sources,
			names: raw.names,
			mappings,
		})
	}

	/// Parse a source map from a JSON string.
	pub fn from_str(data: &str) -> Result<Self> {
		Self::from_bytes(data.as_bytes())
	}

	/// Read and parse a source map file.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let data = std::fs::read(path)?;
		let map = Self::from_bytes(&data)?;
		debug!(
			path = %path.display(),
			sources = map.source_count(),
			names = map.name_count(),
			mappings = map.mapping_count(),
			"loaded source map"
		);
		Ok(map)
	}

	/// Lookup the original position for a generated line and column.
	///
	/// Lines are 1-indexed (as printed in stack traces), columns are 0-indexed.
	/// Returns `None` for line 0, when no mapping covers this position, or when
	/// the covering mapping has no original position.
	pub fn lookup(&self, line: u32, column: u32) -> Result<Option<OriginalPosition>> {
		let Some(line) = line.checked_sub(1) else {
			return Ok(None);
		};
		let Some(original) = self.mappings.find(line, column).and_then(|m| m.original) else {
			return Ok(None);
		};

		let source = self
			.sources
			.get(original.source_index as usize)
			.ok_or(SymbolicateError::InvalidSourceIndex(original.source_index))?
			.clone();

		let name = original
			.name_index
			.and_then(|idx| self.names.get(idx as usize).cloned());

		Ok(Some(OriginalPosition {
			source,
			line: original.line + 1,
			column: original.column,
			name,
		}))
	}

	pub fn source_count(&self) -> usize {
		self.sources.len()
	}

	pub fn name_count(&self) -> usize {
		self.names.len()
	}

	pub fn mapping_count(&self) -> usize {
		self.mappings.len()
	}
}

impl PositionResolver for ParsedSourceMap {
	fn original_position_for(&self, position: MinifiedPosition<'_>) -> Option<OriginalPosition> {
		match self.lookup(position.line, position.column) {
			Ok(found) => found,
			Err(e) => {
				warn!(line = position.line, column = position.column, error = %e, "source map lookup failed");
				None
			}
		}
	}
}

fn join_source_root(root: &str, source: &str) -> String {
	if root.is_empty() {
		return source.to_string();
	}
	format!("{}/{}", root.trim_end_matches('/'), source)
}
