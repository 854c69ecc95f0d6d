use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum MdspliceError {
	#[error(transparent)]
	#[diagnostic(code(mdsplice::io_error))]
	Io(#[from] std::io::Error),

	#[error("unterminated placeholder block `{pattern}` at {line}:{column}")]
	#[diagnostic(
		code(mdsplice::malformed_block),
		help("add `<!--file end-->` after the `<!--file {pattern}-->` marker")
	)]
	MalformedBlock {
		pattern: String,
		line: usize,
		column: usize,
		offset: usize,
	},

	#[error("`<!--file end-->` marker at {line}:{column} has no opening marker")]
	#[diagnostic(
		code(mdsplice::unexpected_end_marker),
		help("remove the stray end marker or add a `<!--file PATTERN-->` marker before it")
	)]
	UnexpectedEndMarker {
		line: usize,
		column: usize,
		offset: usize,
	},

	#[error("placeholder block at {line}:{column} has no pattern")]
	#[diagnostic(
		code(mdsplice::empty_pattern),
		help("write the file pattern between the marker tokens: `<!--file PATTERN-->`")
	)]
	EmptyPattern {
		line: usize,
		column: usize,
		offset: usize,
	},

	#[error("invalid glob pattern `{pattern}`: {reason}")]
	#[diagnostic(
		code(mdsplice::invalid_glob),
		help("patterns use `*`, `?`, and `[...]` within a path segment; `**` crosses segments")
	)]
	InvalidGlob { pattern: String, reason: String },

	#[error("failed to read host document `{path}`: {reason}")]
	#[diagnostic(code(mdsplice::host_read))]
	HostRead { path: String, reason: String },

	#[error("failed to write output `{path}`: {reason}")]
	#[diagnostic(code(mdsplice::output_write))]
	OutputWrite { path: String, reason: String },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(mdsplice::config_parse),
		help("check that mdsplice.toml is valid TOML with an [options] section")
	)]
	ConfigParse(String),
}

pub type MdspliceResult<T> = Result<T, MdspliceError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
