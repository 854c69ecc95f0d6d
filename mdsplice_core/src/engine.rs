use std::path::Path;
use std::path::PathBuf;

use crate::MdspliceError;
use crate::MdspliceResult;
use crate::config::ConversionOptions;
use crate::convert;
use crate::resolver;
use crate::resolver::Resolution;
use crate::rewriter;
use crate::scanner;

/// A Markdown file being processed: its full text and the directory used to
/// resolve relative patterns. Immutable input to a single run.
#[derive(Debug, Clone)]
pub struct HostDocument {
	/// Full text of the document.
	pub text: String,
	/// Directory of the document, the base for pattern resolution.
	pub dir: PathBuf,
}

impl HostDocument {
	/// Read a host document from disk. The document's own directory becomes
	/// the pattern resolution base.
	pub fn load(path: &Path) -> MdspliceResult<Self> {
		let text = std::fs::read_to_string(path).map_err(|e| {
			MdspliceError::HostRead {
				path: path.display().to_string(),
				reason: e.to_string(),
			}
		})?;

		Ok(Self::new(text, host_dir(path)))
	}

	pub fn new(text: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
		Self {
			text: text.into(),
			dir: dir.into(),
		}
	}
}

/// Result of one conversion run over a host document.
#[derive(Debug)]
pub struct UpdateOutcome {
	/// The regenerated document text. A new buffer — the input is untouched.
	pub content: String,
	/// Number of placeholder blocks processed.
	pub block_count: usize,
	/// Patterns that matched no file. These render as comment fragments and
	/// never fail the run.
	pub not_found: Vec<String>,
	/// Whether the regenerated text differs from the input.
	pub changed: bool,
}

/// Regenerate every placeholder block in a document using today's date for
/// Markdown date stamps.
pub fn update_document(
	document: &HostDocument,
	options: &ConversionOptions,
) -> MdspliceResult<UpdateOutcome> {
	update_document_with_date(document, options, &today_stamp())
}

/// Like [`update_document`], with an explicit `YYYY-MM-DD` date stamp so the
/// output is deterministic under test.
pub fn update_document_with_date(
	document: &HostDocument,
	options: &ConversionOptions,
	date: &str,
) -> MdspliceResult<UpdateOutcome> {
	update_str(&document.text, &document.dir, options, date)
}

/// Core pipeline: scan → per block resolve and convert → rewrite.
///
/// Fails fast only on scanner errors. A pattern matching no file or failing
/// to compile as a glob renders an explanatory comment fragment; unreadable
/// or unparseable source files degrade per converter policy. A single broken
/// reference never prevents the rest of the document from regenerating.
pub fn update_str(
	text: &str,
	base_dir: &Path,
	options: &ConversionOptions,
	date: &str,
) -> MdspliceResult<UpdateOutcome> {
	let blocks = scanner::scan(text)?;
	let mut fragments = Vec::with_capacity(blocks.len());
	let mut not_found = Vec::new();

	for block in &blocks {
		let fragment = match resolver::resolve(&block.pattern, base_dir) {
			Ok(Resolution::NotFound) => {
				not_found.push(block.pattern.clone());
				not_found_fragment(&block.pattern)
			}
			Ok(Resolution::Single(path)) => convert_path(&path, options, date),
			Ok(Resolution::Multiple(paths)) => {
				let parts: Vec<String> = paths
					.iter()
					.map(|path| convert_path(path, options, date))
					.collect();
				parts.join("\n\n")
			}
			Err(MdspliceError::InvalidGlob { pattern, reason }) => {
				tracing::warn!(%pattern, %reason, "invalid glob pattern in placeholder block");
				format!("<!-- Invalid glob pattern '{pattern}': {reason} -->")
			}
			Err(error) => return Err(error),
		};

		// Frame the fragment so both markers keep their own lines; reruns
		// reproduce the same body byte-for-byte.
		fragments.push(format!("\n{fragment}\n"));
	}

	let content = rewriter::rewrite(text, &blocks, &fragments);
	let changed = content != text;

	Ok(UpdateOutcome {
		content,
		block_count: blocks.len(),
		not_found,
		changed,
	})
}

/// Write the final document text to a file, surfacing path and cause on
/// failure.
pub fn write_output(path: &Path, content: &str) -> MdspliceResult<()> {
	std::fs::write(path, content).map_err(|e| {
		MdspliceError::OutputWrite {
			path: path.display().to_string(),
			reason: e.to_string(),
		}
	})
}

/// The comment line substituted for a pattern that matched no file.
pub fn not_found_fragment(pattern: &str) -> String {
	format!("<!-- No files found matching pattern '{pattern}' -->")
}

fn convert_path(path: &Path, options: &ConversionOptions, date: &str) -> String {
	match std::fs::read_to_string(path) {
		Ok(content) => {
			convert::convert_content(&content, &convert::extension_of(path), options, date)
		}
		Err(error) => {
			tracing::warn!(path = %path.display(), %error, "could not read matched file");
			format!("<!-- Could not read file '{}': {error} -->", path.display())
		}
	}
}

fn host_dir(path: &Path) -> PathBuf {
	match path.parent() {
		Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
		Some(parent) => parent.to_path_buf(),
		None => PathBuf::from("."),
	}
}

fn today_stamp() -> String {
	chrono::Local::now().format("%Y-%m-%d").to_string()
}
