// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for source map loading and lookup.

use thiserror::Error;

/// Errors that can occur while loading or querying a source map.
#[derive(Debug, Error)]
pub enum SymbolicateError {
	#[error("Invalid source map JSON: {0}")]
	InvalidSourceMapJson(#[from] serde_json::Error),

	#[error("Invalid source map version: expected 3, got {0}")]
	InvalidSourceMapVersion(u32),

	#[error("Invalid VLQ character: {0}")]
	InvalidVlqChar(char),

	#[error("VLQ value overflows 32 bits in segment: {0}")]
	VlqOverflow(String),

	#[error("Invalid source index: {0}")]
	InvalidSourceIndex(u32),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SymbolicateError>;
