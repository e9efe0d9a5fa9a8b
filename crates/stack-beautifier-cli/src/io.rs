// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Trace input and result output.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Read all lines from `reader`, each trimmed of surrounding whitespace.
pub fn read_trimmed_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
	reader
		.lines()
		.map(|line| line.map(|l| l.trim().to_string()))
		.collect()
}

/// Read the trace from `path`, or from stdin when no path is given.
pub fn read_trace(path: Option<&Path>) -> Result<Vec<String>> {
	match path {
		Some(path) => {
			let file = File::open(path)
				.with_context(|| format!("failed to open trace file {}", path.display()))?;
			read_trimmed_lines(BufReader::new(file))
				.with_context(|| format!("failed to read trace file {}", path.display()))
		}
		None => read_trimmed_lines(io::stdin().lock()).context("failed to read trace from stdin"),
	}
}

/// Write the result to `path` as-is, or to stdout followed by a newline.
pub fn write_result(path: Option<&Path>, data: &str) -> Result<()> {
	match path {
		Some(path) => std::fs::write(path, data)
			.with_context(|| format!("failed to write output file {}", path.display())),
		None => {
			let mut stdout = io::stdout().lock();
			stdout
				.write_all(data.as_bytes())
				.and_then(|_| stdout.write_all(b"\n"))
				.and_then(|_| stdout.flush())
				.context("failed to write to stdout")
		}
	}
}
