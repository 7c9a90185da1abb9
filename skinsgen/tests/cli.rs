//! Command-line behaviour tests.

use clap::Parser;
use skinsgen::cli::{self, Cli, Outcome, exit};
use std::path::Path;

fn parse(dir: &Path, extra: &[&str]) -> Cli {
    let input = dir.join("builder_data.def");
    let output = dir.join("builder_data.hpp");
    let mut args = vec![
        "skinsgen".to_string(),
        input.display().to_string(),
        output.display().to_string(),
    ];
    args.extend(extra.iter().map(|s| (*s).to_string()));
    Cli::try_parse_from(args).expect("invalid arguments")
}

#[test]
fn writes_header() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("builder_data.def"), "Font id:string size:int\n\n").unwrap();

    let outcome = cli::run(&parse(dir.path(), &[])).expect("run");
    assert!(matches!(outcome, Outcome::Written(ref s) if s.records == 1 && !s.unchanged));
    assert_eq!(outcome.exit_code(), exit::SUCCESS);

    let header = std::fs::read_to_string(dir.path().join("builder_data.hpp")).unwrap();
    assert!(header.contains("std::list<Font> m_listFont;"));
}

#[test]
fn check_reports_stale_then_current() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("builder_data.def"), "Font id:string\n").unwrap();

    let outcome = cli::run(&parse(dir.path(), &["--check"])).expect("check");
    assert_eq!(outcome, Outcome::Stale);
    assert_eq!(outcome.exit_code(), exit::STALE);
    assert!(!dir.path().join("builder_data.hpp").exists());

    cli::run(&parse(dir.path(), &[])).expect("run");
    let outcome = cli::run(&parse(dir.path(), &["--check"])).expect("check");
    assert_eq!(outcome, Outcome::Current);
}

#[test]
fn stdout_does_not_write() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("builder_data.def"), "Font id:string\n").unwrap();

    let outcome = cli::run(&parse(dir.path(), &["--stdout", "--aggregate", "SkinData"])).expect("run");
    match outcome {
        Outcome::Printed(header) => assert!(header.contains("struct SkinData\n{\n")),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(!dir.path().join("builder_data.hpp").exists());
}

#[test]
fn format_error_maps_to_data_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("builder_data.def"), "Bar x\n").unwrap();

    let err = cli::run(&parse(dir.path(), &[])).unwrap_err();
    assert_eq!(cli::error_exit_code(&err), exit::DATA_ERROR);
    let message = err.to_string();
    assert!(message.contains("line 1"));
    assert!(message.contains("'x'"));
}

#[test]
fn missing_input_maps_to_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");

    let err = cli::run(&parse(dir.path(), &[])).unwrap_err();
    assert_eq!(cli::error_exit_code(&err), exit::IO_ERROR);
}

#[test]
fn record_named_like_aggregate_maps_to_data_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("builder_data.def"), "Font id:string\nBuilderData a:int\n").unwrap();

    let err = cli::run(&parse(dir.path(), &[])).unwrap_err();
    assert_eq!(cli::error_exit_code(&err), exit::DATA_ERROR);
    assert!(err.to_string().contains("line 2"));
    assert!(!dir.path().join("builder_data.hpp").exists());

    let outcome = cli::run(&parse(dir.path(), &["--aggregate", "SkinData"])).expect("run");
    assert_eq!(outcome.exit_code(), exit::SUCCESS);
}

#[test]
fn aggregate_override_must_be_identifier() {
    assert!(Cli::try_parse_from(["skinsgen", "--aggregate", "Skin Data"]).is_err());
    assert!(Cli::try_parse_from(["skinsgen", "--guard", "struct"]).is_err());
}
