use std::path::PathBuf;
use std::process;

use clap::Parser;
use mdsplice_cli::MdspliceCli;
use mdsplice_core::AnyEmptyResult;
use mdsplice_core::ConversionOptions;
use mdsplice_core::HostDocument;
use mdsplice_core::MdspliceError;
use mdsplice_core::SpliceConfig;
use mdsplice_core::update_document;
use mdsplice_core::write_output;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = MdspliceCli::parse();

	// Respect NO_COLOR, the --no-color flag, and terminal capability.
	let use_color = !args.no_color
		&& std::env::var_os("NO_COLOR").is_none()
		&& supports_color::on(supports_color::Stream::Stderr).is_some();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	if let Err(e) = run(&args) {
		// Render through miette for rich diagnostics with help text and
		// error codes where possible.
		match e.downcast::<MdspliceError>() {
			Ok(err) => {
				let report: miette::Report = (*err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn run(args: &MdspliceCli) -> AnyEmptyResult {
	let document = HostDocument::load(&args.file)?;
	let config = SpliceConfig::load(&document.dir)?;
	let options = merge_options(args, config.as_ref());
	let output_path = resolve_output_path(args, config.as_ref(), &document);

	let outcome = update_document(&document, &options)?;

	for pattern in &outcome.not_found {
		eprintln!(
			"{} no files matched pattern `{pattern}`",
			colored!("warning:", yellow)
		);
	}

	if args.check {
		if outcome.changed {
			eprintln!(
				"{} `{}` is stale",
				colored!("check failed:", red),
				args.file.display()
			);
			if args.diff {
				print_diff(&document.text, &outcome.content);
			}
			process::exit(1);
		}

		println!("Check passed: `{}` is up to date.", args.file.display());
		return Ok(());
	}

	match output_path {
		Some(path) => {
			write_output(&path, &outcome.content)?;
			eprintln!("Markdown written to {}", path.display());
		}
		None => {
			print!("{}", outcome.content);
		}
	}

	if args.verbose {
		eprintln!(
			"Processed {} block(s), {} pattern(s) without matches.",
			outcome.block_count,
			outcome.not_found.len()
		);
	}

	Ok(())
}

/// Merge built-in defaults, config file values, and CLI flags. CLI flags win.
fn merge_options(args: &MdspliceCli, config: Option<&SpliceConfig>) -> ConversionOptions {
	let mut options = config.map_or_else(ConversionOptions::default, SpliceConfig::conversion_options);

	if let Some(auto_break) = args.auto_break_override() {
		options.auto_break_csv_headers = auto_break;
	}
	if let Some(date_stamp) = args.date_stamp_override() {
		options.insert_date_stamp = date_stamp;
	}
	if let Some(bold) = &args.bold {
		options.bold_columns = ConversionOptions::parse_bold_list(bold);
	}

	options
}

/// The `--output` flag wins over a config-file output path; config paths are
/// resolved relative to the host document's directory.
fn resolve_output_path(
	args: &MdspliceCli,
	config: Option<&SpliceConfig>,
	document: &HostDocument,
) -> Option<PathBuf> {
	if let Some(path) = &args.output {
		return Some(path.clone());
	}

	config
		.and_then(|c| c.options.output.as_ref())
		.map(|path| document.dir.join(path))
}

/// Print a unified diff between two strings, colorized.
fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				eprint!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				eprint!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				eprint!("   {change}");
			}
		}
	}
}
