use std::ops::Range;

use crate::MdspliceError;
use crate::MdspliceResult;

/// Literal token opening a placeholder block. The trailing space is part of
/// the token: `<!--file-->` is not a marker.
pub const START_TOKEN: &str = "<!--file ";
/// Literal token closing a placeholder block. Exact and case-sensitive.
pub const END_TOKEN: &str = "<!--file end-->";

const MARKER_CLOSE: &str = "-->";

/// One `<!--file PATTERN-->...<!--file end-->` region of a host document.
///
/// All spans are byte ranges into the scanned text. The [`body`](Block::body)
/// span covers everything strictly between the two markers — the previously
/// generated content that a rerun replaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
	/// The logical pattern: whitespace-trimmed, one pair of surrounding
	/// quotes stripped.
	pub pattern: String,
	/// Span of the full start marker, `<!--file` through `-->`.
	pub start_marker: Range<usize>,
	/// Half-open span between the markers.
	pub body: Range<usize>,
	/// Span of the `<!--file end-->` marker.
	pub end_marker: Range<usize>,
}

/// Scan a host document for placeholder blocks, in document order.
///
/// A single forward pass. Blocks never nest: after a start marker the scanner
/// looks only for the next [`END_TOKEN`], so a second start marker inside the
/// body stays ordinary text. An unterminated start marker fails the whole
/// run with [`MdspliceError::MalformedBlock`]; a stray end marker with no
/// opening marker fails with [`MdspliceError::UnexpectedEndMarker`].
pub fn scan(text: &str) -> MdspliceResult<Vec<Block>> {
	let mut blocks = Vec::new();
	let mut cursor = 0;

	while let Some(found) = text[cursor..].find(START_TOKEN) {
		let marker_start = cursor + found;
		let pattern_start = marker_start + START_TOKEN.len();

		// A marker without `-->` is an unterminated HTML comment, not a
		// marker. Nothing after it can open a block either.
		let Some(close) = text[pattern_start..].find(MARKER_CLOSE) else {
			break;
		};

		let raw_pattern = &text[pattern_start..pattern_start + close];
		let marker_end = pattern_start + close + MARKER_CLOSE.len();
		let (line, column) = line_column(text, marker_start);

		// The end token also begins with `<!--file `; one reached outside a
		// block has no opening marker.
		if raw_pattern.trim() == "end" {
			return Err(MdspliceError::UnexpectedEndMarker {
				line,
				column,
				offset: marker_start,
			});
		}

		let pattern = unquote(raw_pattern.trim());
		if pattern.is_empty() {
			return Err(MdspliceError::EmptyPattern {
				line,
				column,
				offset: marker_start,
			});
		}

		let Some(end_found) = text[marker_end..].find(END_TOKEN) else {
			return Err(MdspliceError::MalformedBlock {
				pattern,
				line,
				column,
				offset: marker_start,
			});
		};

		let end_start = marker_end + end_found;
		blocks.push(Block {
			pattern,
			start_marker: marker_start..marker_end,
			body: marker_end..end_start,
			end_marker: end_start..end_start + END_TOKEN.len(),
		});

		cursor = end_start + END_TOKEN.len();
	}

	Ok(blocks)
}

/// Strip one matching pair of surrounding quotes (`"` or `'`) if present.
fn unquote(pattern: &str) -> String {
	let bytes = pattern.as_bytes();
	if bytes.len() >= 2 {
		let first = bytes[0];
		if (first == b'"' || first == b'\'') && bytes[bytes.len() - 1] == first {
			return pattern[1..pattern.len() - 1].to_string();
		}
	}

	pattern.to_string()
}

/// 1-indexed line and column of a byte offset, for diagnostics.
pub(crate) fn line_column(text: &str, offset: usize) -> (usize, usize) {
	let before = &text[..offset.min(text.len())];
	let line = before.matches('\n').count() + 1;
	let column = before.rfind('\n').map_or(offset + 1, |nl| offset - nl);
	(line, column)
}
