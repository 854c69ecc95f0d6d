use std::path::Path;
use std::path::PathBuf;

use globset::GlobBuilder;
use ignore::WalkBuilder;

use crate::MdspliceError;
use crate::MdspliceResult;

/// Outcome of resolving one placeholder pattern against the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Resolution {
	/// No file matched. Recoverable — rendered as a comment fragment.
	NotFound,
	/// Exactly one match.
	Single(PathBuf),
	/// More than one match, sorted lexicographically by resolved path.
	Multiple(Vec<PathBuf>),
}

/// Resolve a pattern relative to `base_dir` — the host document's own
/// directory, never the process working directory.
///
/// Patterns without glob metacharacters name exactly one file or resolve to
/// [`Resolution::NotFound`]. Glob patterns (`*`, `?`, `[...]` within a path
/// segment, `**` across segments) are matched against every file under
/// `base_dir`. Directories never match.
pub fn resolve(pattern: &str, base_dir: &Path) -> MdspliceResult<Resolution> {
	if !has_glob_meta(pattern) {
		let candidate = base_dir.join(pattern);
		if candidate.is_file() {
			tracing::debug!(pattern, path = %candidate.display(), "resolved literal pattern");
			return Ok(Resolution::Single(candidate));
		}
		tracing::debug!(pattern, "literal pattern matched no file");
		return Ok(Resolution::NotFound);
	}

	let glob = GlobBuilder::new(pattern)
		.literal_separator(true)
		.build()
		.map_err(|e| {
			MdspliceError::InvalidGlob {
				pattern: pattern.to_string(),
				reason: e.to_string(),
			}
		})?;
	let matcher = glob.compile_matcher();

	let mut matches: Vec<PathBuf> = Vec::new();
	let walker = WalkBuilder::new(base_dir)
		.standard_filters(false)
		.follow_links(false)
		.build();

	for entry in walker {
		let Ok(entry) = entry else {
			continue;
		};
		if !entry.file_type().is_some_and(|ft| ft.is_file()) {
			continue;
		}

		let Ok(relative) = entry.path().strip_prefix(base_dir) else {
			continue;
		};
		if matcher.is_match(relative) {
			matches.push(entry.into_path());
		}
	}

	matches.sort();
	tracing::debug!(pattern, count = matches.len(), "resolved glob pattern");

	match matches.len() {
		0 => Ok(Resolution::NotFound),
		1 => Ok(Resolution::Single(matches.remove(0))),
		_ => Ok(Resolution::Multiple(matches)),
	}
}

fn has_glob_meta(pattern: &str) -> bool {
	pattern.contains(['*', '?', '['])
}
