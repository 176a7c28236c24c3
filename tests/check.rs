use std::{
    io::Write,
    path::{Path, PathBuf},
    process::Command,
};

use eyre::{Context, bail};
use rvdec::Xlen;
use rvdis::{image, listing};

fn check_dir() -> PathBuf {
    Path::new(&std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is not set"))
        .join("tests")
        .join("check")
}

/// Every `<isa>_<name>.hex` in `tests/check` must produce `<isa>_<name>.expected`.
#[test]
fn check() -> eyre::Result<()> {
    let dir = check_dir();
    let files = std::fs::read_dir(&dir).wrap_err(format!("reading {}", dir.display()))?;

    let mut count = 0;
    for file in files {
        let file = file.wrap_err(format!("reading file in {}", dir.display()))?;

        let name = file.file_name();
        let name = name.to_str().unwrap();
        let Some(stem) = name.strip_suffix(".hex") else {
            continue;
        };

        write!(std::io::stdout(), "test {name} ...")?;
        std::io::stdout().flush()?;

        let (isa, _) = stem.split_once('_').unwrap();
        let xlen = isa.parse::<Xlen>()?;

        let image = image::load(&file.path(), image::InputFormat::Auto)?;
        let lines = rvdis::disassemble(&image, Some(xlen), false, listing::Options::default())?;
        let mut output = Vec::new();
        listing::write_listing(&mut output, &lines)?;
        let output = String::from_utf8(output)?;

        let expected_path = dir.join(format!("{stem}.expected"));
        let expected = std::fs::read_to_string(&expected_path)
            .wrap_err(format!("reading {}", expected_path.display()))?;

        if output == expected {
            writeln!(std::io::stdout(), " ✅")?;
        } else {
            bail!("{name} produced a different listing:\n{output}\nexpected:\n{expected}");
        }
        count += 1;
    }

    assert!(count > 0, "no test files in {}", dir.display());
    Ok(())
}

fn rvdis(args: &[&str]) -> eyre::Result<std::process::Output> {
    Command::new(env!("CARGO_BIN_EXE_rvdis"))
        .args(args)
        .output()
        .wrap_err("failed to spawn rvdis")
}

#[test]
fn cli_lists_from_entry() -> eyre::Result<()> {
    let tmpdir = tempfile::tempdir().wrap_err("failed to create tempdir")?;
    let path = tmpdir.path().join("entry.hex");
    // nop; ret; entry at 0x2 through a start segment address record
    std::fs::write(&path, ":0400000001008280F9\n:0400000300000002F7\n:00000001FF\n")?;

    let output = rvdis(&["--isa", "rv32", "--from-entry", path.to_str().unwrap()])?;
    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "OFFSET\t\tCOMMAND\n0x00000002\tjr\tra\n"
    );

    let output = rvdis(&["--isa", "rv32", path.to_str().unwrap()])?;
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "OFFSET\t\tCOMMAND\n0x00000000\tnop\n0x00000002\tjr\tra\n"
    );
    Ok(())
}

#[test]
fn cli_errors() -> eyre::Result<()> {
    let tmpdir = tempfile::tempdir().wrap_err("failed to create tempdir")?;

    let path = tmpdir.path().join("bad.hex");
    std::fs::write(&path, ":020000000100FD\n:0200020001000B\n")?;
    let output = rvdis(&["--isa", "rv64", path.to_str().unwrap()])?;
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("line 2"), "{stderr}");

    // Intel HEX does not carry the register width
    let path = tmpdir.path().join("no_isa.hex");
    std::fs::write(&path, ":020000000100FD\n:00000001FF\n")?;
    let output = rvdis(&[path.to_str().unwrap()])?;
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("--isa"));

    let output = rvdis(&["--isa", "rv16", path.to_str().unwrap()])?;
    assert!(!output.status.success());

    let output = rvdis(&[tmpdir.path().join("missing.hex").to_str().unwrap()])?;
    assert!(!output.status.success());
    Ok(())
}
