use assert_cmd::Command;

pub fn mdsplice_cmd() -> Command {
	let mut cmd = Command::cargo_bin("mdsplice").expect("mdsplice binary");
	cmd.env("NO_COLOR", "1");
	cmd
}
