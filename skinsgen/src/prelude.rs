//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```
//! use skinsgen::prelude::*;
//! ```

// Schema types
pub use skinsgen_schema::{
    FieldDef, ParseError, RecordDef, Schema, SchemaError, TypeMapper, TypeMapping,
    parse_definitions, parse_definitions_with, validate_schema,
};

// Codegen types
pub use skinsgen_codegen::{
    CodegenError, Generator, GeneratorConfig, Pipeline, Summary, check_file, generate_from_file,
    generate_from_str, generate_to_file,
};
