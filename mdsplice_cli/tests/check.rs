mod common;

use mdsplice_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;

#[test]
fn check_passes_when_up_to_date() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	std::fs::write(tmp.path().join("data.csv"), "Name,Score\nAda,10\n")?;
	std::fs::write(
		tmp.path().join("readme.md"),
		"<!--file data.csv-->\n| Name | Score |\n| --- | --- |\n| Ada | 10 |\n<!--file end-->\n",
	)?;

	let mut cmd = common::mdsplice_cmd();
	cmd.arg(tmp.path().join("readme.md"))
		.arg("--check")
		.assert()
		.success()
		.stdout(predicates::str::contains("up to date"));

	Ok(())
}

#[test]
fn check_fails_when_stale() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	std::fs::write(tmp.path().join("data.csv"), "Name,Score\nAda,10\n")?;
	std::fs::write(
		tmp.path().join("readme.md"),
		"<!--file data.csv-->\nold body\n<!--file end-->\n",
	)?;

	let mut cmd = common::mdsplice_cmd();
	cmd.arg(tmp.path().join("readme.md"))
		.arg("--check")
		.assert()
		.code(1)
		.stderr(predicates::str::contains("is stale"));

	Ok(())
}

#[test]
fn check_never_writes() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	std::fs::write(tmp.path().join("data.csv"), "Name,Score\nAda,10\n")?;
	let host = "<!--file data.csv-->\nold body\n<!--file end-->\n";
	std::fs::write(tmp.path().join("readme.md"), host)?;

	let out_path = tmp.path().join("out.md");
	let mut cmd = common::mdsplice_cmd();
	cmd.arg(tmp.path().join("readme.md"))
		.arg("--check")
		.arg("--output")
		.arg(&out_path)
		.assert()
		.code(1);

	assert!(!out_path.exists());
	assert_eq!(std::fs::read_to_string(tmp.path().join("readme.md"))?, host);

	Ok(())
}

#[test]
fn check_diff_shows_removed_and_added_lines() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	std::fs::write(tmp.path().join("data.csv"), "Name,Score\nAda,10\n")?;
	std::fs::write(
		tmp.path().join("readme.md"),
		"<!--file data.csv-->\nold body\n<!--file end-->\n",
	)?;

	let mut cmd = common::mdsplice_cmd();
	cmd.arg(tmp.path().join("readme.md"))
		.arg("--check")
		.arg("--diff")
		.assert()
		.code(1)
		.stderr(predicates::str::contains("-old body"))
		.stderr(predicates::str::contains("+| Name | Score |"));

	Ok(())
}

#[test]
fn check_without_diff_prints_no_diff_lines() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	std::fs::write(tmp.path().join("data.csv"), "Name,Score\nAda,10\n")?;
	std::fs::write(
		tmp.path().join("readme.md"),
		"<!--file data.csv-->\nold body\n<!--file end-->\n",
	)?;

	let mut cmd = common::mdsplice_cmd();
	cmd.arg(tmp.path().join("readme.md"))
		.arg("--check")
		.assert()
		.code(1)
		.stderr(predicates::str::contains("-old body").not());

	Ok(())
}

#[test]
fn check_with_no_blocks_passes() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	std::fs::write(tmp.path().join("readme.md"), "# Just a readme\n")?;

	let mut cmd = common::mdsplice_cmd();
	cmd.arg(tmp.path().join("readme.md"))
		.arg("--check")
		.assert()
		.success()
		.stdout(predicates::str::contains("up to date"));

	Ok(())
}
