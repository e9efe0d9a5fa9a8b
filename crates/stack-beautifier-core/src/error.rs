// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for stack trace processing.

use thiserror::Error;

/// Errors that can occur while beautifying a stack trace.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BeautifyError {
	/// A non-empty line past the first one matched none of the frame grammars.
	///
	/// `line_number` is 1-based.
	#[error("Stack trace parse error at line {line_number}: {text}")]
	StackParse { line_number: usize, text: String },
}

pub type Result<T> = std::result::Result<T, BeautifyError>;
