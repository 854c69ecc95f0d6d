use crate::scanner::Block;

/// Substitute each block's body span with its fragment, producing a new
/// buffer in a single pass.
///
/// `fragments[i]` replaces `blocks[i].body`; blocks must be in document order
/// and non-overlapping, which is what [`crate::scanner::scan`] produces. The
/// original text is never mutated — with zero blocks the output equals the
/// input, and an empty body span (first run) is handled like any other.
pub fn rewrite(text: &str, blocks: &[Block], fragments: &[String]) -> String {
	debug_assert_eq!(blocks.len(), fragments.len());

	let extra: usize = fragments.iter().map(String::len).sum();
	let mut output = String::with_capacity(text.len() + extra);
	let mut cursor = 0;

	for (block, fragment) in blocks.iter().zip(fragments) {
		output.push_str(&text[cursor..block.body.start]);
		output.push_str(fragment);
		cursor = block.body.end;
	}

	output.push_str(&text[cursor..]);
	output
}
