// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod args;
mod io;

use anyhow::{Context, Result};
use clap::Parser;
use stack_beautifier_core::beautify;
use stack_beautifier_symbolicate::ParsedSourceMap;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::args::Args;

fn main() -> Result<()> {
	// Logs go to stderr so they never mix with the beautified trace on stdout.
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(std::io::stderr)
		.init();

	let args = Args::parse();

	let source_map = ParsedSourceMap::from_path(&args.map_file)
		.with_context(|| format!("failed to load source map {}", args.map_file.display()))?;

	let lines = io::read_trace(args.trace.as_deref())?;
	info!(lines = lines.len(), "read stack trace");

	let data = beautify(&lines, &source_map, args.format_options())?;

	io::write_result(args.output.as_deref(), &data)
}
