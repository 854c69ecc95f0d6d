use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Splice files into markdown documents at placeholder blocks.",
	long_about = "mdsplice regenerates the body of every `<!--file PATTERN-->` ... `<!--file \
	              end-->` region in a markdown document.\n\nEach pattern is resolved relative to \
	              the document's own directory and the matched files are converted to markdown by \
	              extension: CSV becomes a table, JSON is pretty-printed in a fence, code gets a \
	              syntax-tagged fence, markdown passes through, and everything else lands in a \
	              plain fence.\n\nThe run is idempotent: splicing the output again yields the same \
	              document."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct MdspliceCli {
	/// The markdown file to process.
	#[arg(default_value = "README.md")]
	pub file: PathBuf,

	/// Write the result to a file instead of stdout.
	#[arg(long, short)]
	pub output: Option<PathBuf>,

	/// Comma-separated CSV header names to render bold.
	#[arg(long, short)]
	pub bold: Option<String>,

	/// Insert a line break before the last word of multi-word CSV headers
	/// (default).
	#[arg(long, overrides_with = "no_auto_break")]
	pub auto_break: bool,

	/// Keep multi-word CSV headers on one line.
	#[arg(long)]
	pub no_auto_break: bool,

	/// Prefix included markdown files with a date stamp comment (default).
	#[arg(long, overrides_with = "no_date_stamp")]
	pub date_stamp: bool,

	/// Skip the date stamp comment for included markdown files.
	#[arg(long)]
	pub no_date_stamp: bool,

	/// Exit with status 1 if the document is stale. Writes nothing.
	#[arg(long)]
	pub check: bool,

	/// With --check, print a unified diff of the current and regenerated
	/// text.
	#[arg(long)]
	pub diff: bool,

	/// Enable verbose output.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}

impl MdspliceCli {
	/// CLI override for CSV header breaking, when either flag was given.
	pub fn auto_break_override(&self) -> Option<bool> {
		if self.no_auto_break {
			Some(false)
		} else if self.auto_break {
			Some(true)
		} else {
			None
		}
	}

	/// CLI override for the markdown date stamp, when either flag was given.
	pub fn date_stamp_override(&self) -> Option<bool> {
		if self.no_date_stamp {
			Some(false)
		} else if self.date_stamp {
			Some(true)
		} else {
			None
		}
	}
}
