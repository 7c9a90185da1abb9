//! # skinsgen Codegen
//!
//! C++ header generation from record definitions.
//!
//! This crate provides:
//! - Data-holder struct generation, one nested struct per record
//! - Emitter configuration (aggregate name, include guard, member prefixes)
//! - Atomic artifact output
//! - A forward-only pipeline tying parsing, validation and emission together

pub mod config;
pub mod cpp;
pub mod error;
pub mod generator;
pub mod pipeline;
pub mod writer;

pub use config::GeneratorConfig;
pub use error::CodegenError;
pub use generator::Generator;
pub use pipeline::{Pipeline, Rendered, Stage, Summary};
pub use writer::{artifact_is_current, write_artifact};

use std::path::Path;

/// Generates a header from definition text.
///
/// # Arguments
/// * `text` - Record definition content
/// * `config` - Emitter configuration
///
/// # Returns
/// Generated header as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing or validation fails.
pub fn generate_from_str(text: &str, config: &GeneratorConfig) -> Result<String, CodegenError> {
    Pipeline::new(config.clone())
        .render(text)
        .map(|rendered| rendered.artifact)
}

/// Generates a header from a definition file.
///
/// # Arguments
/// * `path` - Path to the record definition file
/// * `config` - Emitter configuration
///
/// # Returns
/// Generated header as a string.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or validation fails.
pub fn generate_from_file(path: &Path, config: &GeneratorConfig) -> Result<String, CodegenError> {
    Pipeline::new(config.clone())
        .render_file(path)
        .map(|rendered| rendered.artifact)
}

/// Generates `output` from `input`, replacing it atomically.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, validation, or writing fails.
pub fn generate_to_file(
    input: &Path,
    output: &Path,
    config: &GeneratorConfig,
) -> Result<Summary, CodegenError> {
    Pipeline::new(config.clone()).run(input, output)
}

/// Returns true if `output` is what `input` currently generates.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or validation fails.
pub fn check_file(
    input: &Path,
    output: &Path,
    config: &GeneratorConfig,
) -> Result<bool, CodegenError> {
    Pipeline::new(config.clone()).check(input, output)
}
