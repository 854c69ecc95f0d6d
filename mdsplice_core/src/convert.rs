use std::path::Path;

use crate::config::ConversionOptions;

/// Category a source file converts through. Dispatch is a closed enum plus a
/// static extension table — unknown extensions fall back to [`FileKind::Text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
	/// Source code, rendered in a fenced block with a language tag.
	Code,
	/// Comma-separated values, rendered as a Markdown table.
	Csv,
	/// JSON, pretty-printed inside a tagged fence.
	Json,
	/// Markdown, passed through unchanged.
	Markdown,
	/// Anything else, rendered in an untagged fence.
	Text,
}

/// Extension → category table. Lookups are case-insensitive.
const EXTENSION_KINDS: &[(&str, FileKind)] = &[
	("c", FileKind::Code),
	("cc", FileKind::Code),
	("cpp", FileKind::Code),
	("cs", FileKind::Code),
	("css", FileKind::Code),
	("csv", FileKind::Csv),
	("go", FileKind::Code),
	("h", FileKind::Code),
	("hpp", FileKind::Code),
	("html", FileKind::Code),
	("ini", FileKind::Code),
	("java", FileKind::Code),
	("js", FileKind::Code),
	("json", FileKind::Json),
	("jsx", FileKind::Code),
	("kt", FileKind::Code),
	("log", FileKind::Text),
	("lua", FileKind::Code),
	("markdown", FileKind::Markdown),
	("md", FileKind::Markdown),
	("php", FileKind::Code),
	("pl", FileKind::Code),
	("py", FileKind::Code),
	("r", FileKind::Code),
	("rb", FileKind::Code),
	("rs", FileKind::Code),
	("sh", FileKind::Code),
	("sql", FileKind::Code),
	("swift", FileKind::Code),
	("toml", FileKind::Code),
	("ts", FileKind::Code),
	("tsx", FileKind::Code),
	("txt", FileKind::Text),
	("xml", FileKind::Code),
	("yaml", FileKind::Code),
	("yml", FileKind::Code),
];

/// Extension → fence language tag. Code extensions missing here render an
/// untagged fence.
const CODE_LANGUAGES: &[(&str, &str)] = &[
	("c", "c"),
	("cc", "cpp"),
	("cpp", "cpp"),
	("cs", "csharp"),
	("css", "css"),
	("go", "go"),
	("h", "c"),
	("hpp", "cpp"),
	("html", "html"),
	("java", "java"),
	("js", "javascript"),
	("jsx", "jsx"),
	("kt", "kotlin"),
	("lua", "lua"),
	("php", "php"),
	("pl", "perl"),
	("py", "python"),
	("r", "r"),
	("rb", "ruby"),
	("rs", "rust"),
	("sh", "bash"),
	("sql", "sql"),
	("swift", "swift"),
	("toml", "toml"),
	("ts", "typescript"),
	("tsx", "tsx"),
	("xml", "xml"),
	("yaml", "yaml"),
	("yml", "yaml"),
];

impl FileKind {
	/// Look up the category for a file extension, case-insensitively.
	pub fn from_extension(extension: &str) -> Self {
		let extension = extension.to_ascii_lowercase();
		EXTENSION_KINDS
			.iter()
			.find(|(ext, _)| *ext == extension)
			.map_or(FileKind::Text, |(_, kind)| *kind)
	}
}

/// Fence language tag for a code file extension, if one is known.
pub fn language_for_extension(extension: &str) -> Option<&'static str> {
	let extension = extension.to_ascii_lowercase();
	CODE_LANGUAGES
		.iter()
		.find(|(ext, _)| *ext == extension)
		.map(|(_, lang)| *lang)
}

/// Lowercased extension of a path, empty when there is none.
pub fn extension_of(path: &Path) -> String {
	path
		.extension()
		.and_then(|ext| ext.to_str())
		.unwrap_or("")
		.to_ascii_lowercase()
}

/// Convert one file's content to a Markdown fragment based on its extension.
///
/// `date` is the pre-rendered date stamp (`YYYY-MM-DD`) used by the Markdown
/// converter when [`ConversionOptions::insert_date_stamp`] is set. Supplying
/// it explicitly keeps conversion deterministic under test.
pub fn convert_content(
	content: &str,
	extension: &str,
	options: &ConversionOptions,
	date: &str,
) -> String {
	match FileKind::from_extension(extension) {
		FileKind::Code => convert_code(content, language_for_extension(extension)),
		FileKind::Csv => convert_csv(content, options),
		FileKind::Json => convert_json(content),
		FileKind::Markdown => convert_markdown(content, options, date),
		FileKind::Text => convert_text(content),
	}
}

/// Wrap code in a fenced block, tagged when the language is known.
pub fn convert_code(content: &str, language: Option<&str>) -> String {
	format!(
		"```{}\n{}\n```",
		language.unwrap_or(""),
		content.trim_end_matches('\n')
	)
}

/// Wrap arbitrary content in an untagged fence.
pub fn convert_text(content: &str) -> String {
	convert_code(content, None)
}

/// Pretty-print JSON (2-space indent) inside a tagged fence. Unparseable
/// input degrades to a plain text fence rather than failing the run.
pub fn convert_json(content: &str) -> String {
	match serde_json::from_str::<serde_json::Value>(content) {
		Ok(value) => {
			let pretty =
				serde_json::to_string_pretty(&value).unwrap_or_else(|_| content.trim_end().to_string());
			format!("```json\n{pretty}\n```")
		}
		Err(error) => {
			tracing::warn!(%error, "invalid JSON, falling back to plain text fence");
			convert_text(content)
		}
	}
}

/// Pass Markdown through unchanged, optionally prefixed with a date stamp
/// comment line. Trailing newlines are normalized so the enclosing block
/// markers keep their own lines.
pub fn convert_markdown(content: &str, options: &ConversionOptions, date: &str) -> String {
	let body = content.trim_end_matches('\n');
	if options.insert_date_stamp {
		format!("<!-- Updated: {date} -->\n\n{body}")
	} else {
		body.to_string()
	}
}

/// Render CSV as a Markdown table. The first row is the header; rows with a
/// different column count are rendered as-is rather than rejected.
pub fn convert_csv(content: &str, options: &ConversionOptions) -> String {
	let rows = parse_csv(content);
	let Some((header, data)) = rows.split_first() else {
		return String::new();
	};

	let bold: Vec<bool> = header.iter().map(|cell| options.is_bold(cell)).collect();

	let mut lines = Vec::with_capacity(rows.len() + 1);
	let header_cells: Vec<String> = header
		.iter()
		.enumerate()
		.map(|(index, cell)| {
			let cell = if options.auto_break_csv_headers {
				break_header(cell)
			} else {
				cell.trim().to_string()
			};
			format_cell(&cell, bold.get(index).copied().unwrap_or(false))
		})
		.collect();
	lines.push(table_row(&header_cells));
	lines.push(table_row(&vec!["---".to_string(); header.len()]));

	for row in data {
		if row.len() != header.len() {
			tracing::warn!(
				expected = header.len(),
				got = row.len(),
				"CSV row column count differs from header"
			);
		}
		let cells: Vec<String> = row
			.iter()
			.enumerate()
			.map(|(index, cell)| {
				format_cell(cell.trim(), bold.get(index).copied().unwrap_or(false))
			})
			.collect();
		lines.push(table_row(&cells));
	}

	lines.join("\n")
}

fn table_row(cells: &[String]) -> String {
	format!("| {} |", cells.join(" | "))
}

fn format_cell(cell: &str, bold: bool) -> String {
	let escaped = cell.replace('|', "\\|");
	if bold && !escaped.is_empty() {
		format!("**{escaped}**")
	} else {
		escaped
	}
}

/// Insert a line break before the last word of a multi-word header cell, to
/// keep generated columns narrow.
fn break_header(cell: &str) -> String {
	let words: Vec<&str> = cell.split_whitespace().collect();
	match words.split_last() {
		Some((last, rest)) if !rest.is_empty() => {
			format!("{}<br>{last}", rest.join(" "))
		}
		_ => cell.trim().to_string(),
	}
}

/// Minimal CSV reader: comma-separated fields, double quotes for fields with
/// embedded commas, quotes (doubled), or newlines. Blank lines are skipped.
fn parse_csv(content: &str) -> Vec<Vec<String>> {
	let mut rows = Vec::new();
	let mut row: Vec<String> = Vec::new();
	let mut field = String::new();
	let mut in_quotes = false;
	let mut chars = content.chars().peekable();

	while let Some(ch) = chars.next() {
		if in_quotes {
			match ch {
				'"' if chars.peek() == Some(&'"') => {
					chars.next();
					field.push('"');
				}
				'"' => in_quotes = false,
				_ => field.push(ch),
			}
			continue;
		}

		match ch {
			'"' if field.is_empty() => in_quotes = true,
			',' => {
				row.push(std::mem::take(&mut field));
			}
			'\r' => {}
			'\n' => {
				row.push(std::mem::take(&mut field));
				if row.len() > 1 || !row[0].is_empty() {
					rows.push(std::mem::take(&mut row));
				} else {
					row.clear();
				}
			}
			_ => field.push(ch),
		}
	}

	if !field.is_empty() || !row.is_empty() {
		row.push(field);
		rows.push(row);
	}

	rows
}
