use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::MdspliceError;
use crate::MdspliceResult;

/// Supported config file locations within one directory, in discovery order
/// (highest precedence first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = [
	"mdsplice.toml",
	".mdsplice.toml",
	".config/mdsplice.toml",
];

/// Read-only options for one conversion run. Shared by reference across all
/// blocks; never mutated during the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOptions {
	/// Prefix Markdown pass-through content with a date stamp comment line.
	pub insert_date_stamp: bool,
	/// Insert a line break before the last word of multi-word CSV headers.
	pub auto_break_csv_headers: bool,
	/// CSV header names whose columns are rendered bold. Matched
	/// case-insensitively against header cells.
	pub bold_columns: BTreeSet<String>,
}

impl Default for ConversionOptions {
	fn default() -> Self {
		Self {
			insert_date_stamp: true,
			auto_break_csv_headers: true,
			bold_columns: BTreeSet::new(),
		}
	}
}

impl ConversionOptions {
	/// Whether a CSV header cell should be rendered bold.
	pub fn is_bold(&self, header: &str) -> bool {
		self
			.bold_columns
			.iter()
			.any(|name| name.eq_ignore_ascii_case(header.trim()))
	}

	/// Parse a comma-separated list of header names, as accepted by the CLI's
	/// `--bold` flag. Empty entries are dropped.
	pub fn parse_bold_list(list: &str) -> BTreeSet<String> {
		list
			.split(',')
			.map(str::trim)
			.filter(|name| !name.is_empty())
			.map(ToString::to_string)
			.collect()
	}
}

/// Configuration loaded from an `mdsplice.toml` file.
///
/// ```toml
/// [options]
/// insert_date_stamp = false
/// auto_break_csv_headers = true
/// bold_columns = ["Total", "Critical"]
/// output = "report.md"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct SpliceConfig {
	/// Conversion options applied to every run rooted at this config.
	#[serde(default)]
	pub options: OptionsConfig,
}

/// The `[options]` section of `mdsplice.toml`. CLI flags override these
/// values; these values override built-in defaults.
#[derive(Debug, Deserialize)]
pub struct OptionsConfig {
	#[serde(default = "default_true")]
	pub insert_date_stamp: bool,
	#[serde(default = "default_true")]
	pub auto_break_csv_headers: bool,
	#[serde(default)]
	pub bold_columns: Vec<String>,
	/// Default output path, resolved relative to the host document's
	/// directory. The CLI's `--output` flag takes precedence.
	#[serde(default)]
	pub output: Option<PathBuf>,
}

impl Default for OptionsConfig {
	fn default() -> Self {
		Self {
			insert_date_stamp: true,
			auto_break_csv_headers: true,
			bold_columns: Vec::new(),
			output: None,
		}
	}
}

fn default_true() -> bool {
	true
}

impl SpliceConfig {
	/// Find the nearest config file, searching each candidate name in `start`
	/// and then walking up through its ancestors.
	#[must_use]
	pub fn resolve_path(start: &Path) -> Option<PathBuf> {
		start.ancestors().find_map(|dir| {
			CONFIG_FILE_CANDIDATES
				.iter()
				.map(|candidate| dir.join(candidate))
				.find(|path| path.is_file())
		})
	}

	/// Load the nearest discovered config file. Returns `None` when no config
	/// file exists anywhere above `start`.
	pub fn load(start: &Path) -> MdspliceResult<Option<SpliceConfig>> {
		let Some(config_path) = Self::resolve_path(start) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config: SpliceConfig =
			toml::from_str(&content).map_err(|e| MdspliceError::ConfigParse(e.to_string()))?;

		tracing::debug!(path = %config_path.display(), "loaded config");
		Ok(Some(config))
	}

	/// Build [`ConversionOptions`] from this config.
	pub fn conversion_options(&self) -> ConversionOptions {
		ConversionOptions {
			insert_date_stamp: self.options.insert_date_stamp,
			auto_break_csv_headers: self.options.auto_break_csv_headers,
			bold_columns: self.options.bold_columns.iter().cloned().collect(),
		}
	}
}
