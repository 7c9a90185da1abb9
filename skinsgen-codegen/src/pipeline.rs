//! Single-run generation pipeline.
//!
//! A run moves strictly forward through [`Stage`]. An error in any stage
//! ends the run before the next one starts, so nothing is written unless
//! parsing, validation and emission all succeeded.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::generator::Generator;
use crate::writer::{artifact_is_current, write_artifact};
use skinsgen_schema::{TypeMapper, parse_definitions_with, validate_aggregate, validate_schema};
use std::fmt;
use std::path::Path;

/// Pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Reading and parsing the definition source.
    Parsing,
    /// Checking the parsed schema.
    Validating,
    /// Rendering the artifact in memory.
    Emitting,
    /// Replacing the artifact on disk.
    Writing,
    /// Run finished.
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Parsing => "parsing",
            Self::Validating => "validating",
            Self::Emitting => "emitting",
            Self::Writing => "writing",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Artifact rendered from a definition source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Generated artifact text.
    pub artifact: String,
    /// Number of records emitted.
    pub records: usize,
    /// Number of fields emitted.
    pub fields: usize,
}

/// Outcome of a run that targets a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Number of records emitted.
    pub records: usize,
    /// Number of fields emitted.
    pub fields: usize,
    /// Artifact size in bytes.
    pub bytes: usize,
    /// True if the destination already held the same content and was left
    /// untouched.
    pub unchanged: bool,
}

/// One generation run.
#[derive(Debug)]
pub struct Pipeline {
    config: GeneratorConfig,
    mapper: TypeMapper,
    stage: Stage,
}

impl Pipeline {
    /// Creates a pipeline with the given emitter configuration.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            mapper: TypeMapper::default(),
            stage: Stage::Parsing,
        }
    }

    /// Replaces the type mapper used while parsing.
    #[must_use]
    pub fn with_mapper(mut self, mapper: TypeMapper) -> Self {
        self.mapper = mapper;
        self
    }

    /// Returns the current stage.
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    fn advance(&mut self, next: Stage) {
        debug_assert!(next > self.stage, "stage {} after {}", next, self.stage);
        tracing::debug!("Pipeline stage {} -> {}", self.stage, next);
        self.stage = next;
    }

    /// Parses, validates and renders definition text.
    ///
    /// # Errors
    /// Returns `CodegenError` if parsing or validation fails.
    pub fn render(mut self, text: &str) -> Result<Rendered, CodegenError> {
        let rendered = self.render_in_place(text)?;
        self.advance(Stage::Done);
        Ok(rendered)
    }

    /// Reads and renders a definition file.
    ///
    /// # Errors
    /// Returns `CodegenError` if the file cannot be read, parsed or validated.
    pub fn render_file(mut self, input: &Path) -> Result<Rendered, CodegenError> {
        let text = read_source(input)?;
        let rendered = self.render_in_place(&text)?;
        self.advance(Stage::Done);
        Ok(rendered)
    }

    /// Generates `output` from `input`.
    ///
    /// The destination is only rewritten when its content differs.
    ///
    /// # Errors
    /// Returns `CodegenError` on any read, parse, validation or write failure.
    pub fn run(mut self, input: &Path, output: &Path) -> Result<Summary, CodegenError> {
        let text = read_source(input)?;
        let rendered = self.render_in_place(&text)?;

        self.advance(Stage::Writing);
        let unchanged = artifact_is_current(output, &rendered.artifact)?;
        if unchanged {
            tracing::info!("{} is up to date", output.display());
        } else {
            write_artifact(output, &rendered.artifact)?;
        }

        self.advance(Stage::Done);
        Ok(Summary {
            records: rendered.records,
            fields: rendered.fields,
            bytes: rendered.artifact.len(),
            unchanged,
        })
    }

    /// Reports whether `output` matches what `input` would generate.
    ///
    /// # Errors
    /// Returns `CodegenError` on any read, parse or validation failure.
    pub fn check(mut self, input: &Path, output: &Path) -> Result<bool, CodegenError> {
        let text = read_source(input)?;
        let rendered = self.render_in_place(&text)?;
        let current = artifact_is_current(output, &rendered.artifact)?;
        self.advance(Stage::Done);
        Ok(current)
    }

    fn render_in_place(&mut self, text: &str) -> Result<Rendered, CodegenError> {
        let schema = parse_definitions_with(text, &self.mapper)?;

        self.advance(Stage::Validating);
        validate_schema(&schema)?;
        validate_aggregate(&schema, self.config.aggregate_name())?;

        self.advance(Stage::Emitting);
        let artifact = Generator::new(&schema)
            .with_config(self.config.clone())
            .generate();

        Ok(Rendered {
            artifact,
            records: schema.len(),
            fields: schema.field_count(),
        })
    }
}

fn read_source(input: &Path) -> Result<String, CodegenError> {
    std::fs::read_to_string(input).map_err(|source| CodegenError::io(input, source))
}
