// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use clap::Parser;
use stack_beautifier_core::FormatOptions;

const EXAMPLES: &str = "\
Examples:

  $ stack-beautifier app.js.map
  $ stack-beautifier -t trace.txt app.js.map

See more:

  https://github.com/swmansion/stack-beautifier";

/// stack-beautifier is a simple tool for decrypting stack traces coming from the minified JS code.
#[derive(Parser, Debug)]
#[command(
	name = "stack-beautifier",
	version,
	override_usage = "stack-beautifier [options] <app.js.map>",
	after_help = EXAMPLES
)]
pub struct Args {
	/// Source map of the minified bundle
	#[arg(value_name = "MAP_FILE")]
	pub map_file: PathBuf,

	/// Read stack trace from the input file (stdin is used when this option is not set)
	#[arg(short, long, value_name = "INPUT_FILE")]
	pub trace: Option<PathBuf>,

	/// Write result into the given output file (stdout is used when this option is not set)
	#[arg(short, long, value_name = "OUTPUT_FILE")]
	pub output: Option<PathBuf>,

	/// Output complete javascript filenames in the stacktrace (tool will try to shorten file paths by default)
	#[arg(short, long, env = "STACK_BEAUTIFIER_LONG")]
	pub long: bool,
}

impl Args {
	pub fn format_options(&self) -> FormatOptions {
		FormatOptions {
			shorten_paths: !self.long,
		}
	}
}
