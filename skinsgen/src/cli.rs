//! Command-line front end.
//!
//! With no arguments the tool reads `builder_data.def` and writes
//! `builder_data.hpp` in the working directory.

use clap::{ArgAction, Parser};
use skinsgen_codegen::{CodegenError, GeneratorConfig, Pipeline, Summary};
use skinsgen_schema::{is_identifier, is_reserved_word};
use std::io::Write;
use std::path::PathBuf;

/// Process exit codes.
pub mod exit {
    /// Run succeeded.
    pub const SUCCESS: u8 = 0;
    /// `--check` found an outdated artifact.
    pub const STALE: u8 = 1;
    /// Malformed or invalid definition source (`EX_DATAERR`).
    pub const DATA_ERROR: u8 = 65;
    /// Source unreadable or destination unwritable (`EX_IOERR`).
    pub const IO_ERROR: u8 = 74;
}

/// Generate C++ builder data headers from record definitions
#[derive(Parser, Debug)]
#[command(name = "skinsgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Record definition file
    #[arg(default_value = "builder_data.def")]
    pub input: PathBuf,

    /// Generated header
    #[arg(default_value = "builder_data.hpp")]
    pub output: PathBuf,

    /// Exit with status 1 if the header is out of date instead of writing it
    #[arg(long, conflicts_with = "stdout")]
    pub check: bool,

    /// Print the header to stdout instead of writing it
    #[arg(long)]
    pub stdout: bool,

    /// Name of the enclosing aggregate struct
    #[arg(long, value_name = "NAME", value_parser = parse_identifier)]
    pub aggregate: Option<String>,

    /// Include guard macro
    #[arg(long, value_name = "NAME", value_parser = parse_identifier)]
    pub guard: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Accepts a C++ identifier that is not a keyword.
fn parse_identifier(s: &str) -> Result<String, String> {
    if !is_identifier(s) {
        return Err(format!("'{s}' is not a valid C++ identifier"));
    }
    if is_reserved_word(s) {
        return Err(format!("'{s}' is a C++ keyword"));
    }
    Ok(s.to_string())
}

/// Result of a successful invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Header written, or left as is because it was already current.
    Written(Summary),
    /// Header rendered for stdout.
    Printed(String),
    /// `--check`: header is current.
    Current,
    /// `--check`: header is out of date.
    Stale,
}

impl Outcome {
    /// Returns the process exit code for this outcome.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Stale => exit::STALE,
            Self::Written(_) | Self::Printed(_) | Self::Current => exit::SUCCESS,
        }
    }
}

impl Cli {
    /// Builds the emitter configuration from the arguments.
    #[must_use]
    pub fn config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::new();
        if let Some(name) = self.output.file_name().and_then(|n| n.to_str()) {
            config = config.with_file_name(name);
        }
        if let Some(aggregate) = &self.aggregate {
            config = config.with_aggregate_name(aggregate);
        }
        if let Some(guard) = &self.guard {
            config = config.with_include_guard(guard);
        }
        config
    }

    /// Returns the default log filter for the verbosity level.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Runs one invocation.
///
/// # Errors
/// Returns `CodegenError` on any read, parse, validation or write failure.
pub fn run(cli: &Cli) -> Result<Outcome, CodegenError> {
    let pipeline = Pipeline::new(cli.config());

    if cli.check {
        let current = pipeline.check(&cli.input, &cli.output)?;
        return Ok(if current {
            Outcome::Current
        } else {
            Outcome::Stale
        });
    }

    if cli.stdout {
        let rendered = pipeline.render_file(&cli.input)?;
        return Ok(Outcome::Printed(rendered.artifact));
    }

    pipeline.run(&cli.input, &cli.output).map(Outcome::Written)
}

/// Writes a rendered artifact to `out` and flushes it.
///
/// # Errors
/// Returns `CodegenError::Io` if the stream is closed or the write fails.
pub fn emit<W: Write>(out: &mut W, artifact: &str) -> Result<(), CodegenError> {
    out.write_all(artifact.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|source| CodegenError::io("<stdout>", source))
}

/// Maps an error to the process exit code.
#[must_use]
pub fn error_exit_code(err: &CodegenError) -> u8 {
    if err.is_definition_error() {
        exit::DATA_ERROR
    } else {
        exit::IO_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["skinsgen"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("builder_data.def"));
        assert_eq!(cli.output, PathBuf::from("builder_data.hpp"));
        assert!(!cli.check);
        assert!(!cli.stdout);
        assert_eq!(cli.log_filter(), "warn");
        assert_eq!(cli.config(), GeneratorConfig::default());
    }

    #[test]
    fn test_config_from_args() {
        let cli = Cli::try_parse_from([
            "skinsgen",
            "skin.def",
            "out/skin_data.h",
            "--aggregate",
            "SkinData",
            "--guard",
            "SKIN_GUARD",
            "-vv",
        ])
        .unwrap();

        let config = cli.config();
        assert_eq!(config.file_name(), "skin_data.h");
        assert_eq!(config.aggregate_name(), "SkinData");
        assert_eq!(config.include_guard(), "SKIN_GUARD");
        assert_eq!(cli.log_filter(), "debug");
    }

    #[test]
    fn test_aggregate_and_guard_must_be_identifiers() {
        for bad in ["a b", "1Data", "Skin-Data", "", "class"] {
            assert!(Cli::try_parse_from(["skinsgen", "--aggregate", bad]).is_err());
            assert!(Cli::try_parse_from(["skinsgen", "--guard", bad]).is_err());
        }
        assert!(Cli::try_parse_from(["skinsgen", "--aggregate", "_Skin2"]).is_ok());
    }

    #[test]
    fn test_emit_reports_closed_stream() {
        struct ClosedPipe;

        impl Write for ClosedPipe {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let err = emit(&mut ClosedPipe, "struct BuilderData\n").unwrap_err();
        assert!(matches!(err, CodegenError::Io { .. }));
        assert_eq!(error_exit_code(&err), exit::IO_ERROR);

        let mut buf = Vec::new();
        emit(&mut buf, "struct BuilderData\n").expect("emit");
        assert_eq!(buf, b"struct BuilderData\n");
    }

    #[test]
    fn test_check_conflicts_with_stdout() {
        assert!(Cli::try_parse_from(["skinsgen", "--check", "--stdout"]).is_err());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Outcome::Stale.exit_code(), exit::STALE);
        assert_eq!(Outcome::Current.exit_code(), exit::SUCCESS);

        let err: CodegenError = skinsgen_schema::ParseError::malformed_field(1, "x").into();
        assert_eq!(error_exit_code(&err), exit::DATA_ERROR);

        let err = CodegenError::io(
            "builder_data.def",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(error_exit_code(&err), exit::IO_ERROR);
    }
}
