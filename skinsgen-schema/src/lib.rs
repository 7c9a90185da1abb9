//! # skinsgen Schema
//!
//! Record definition parser and type mapping.
//!
//! This crate provides:
//! - A line-oriented parser for record definition files
//! - The declared type to storage/parameter type mapping table
//! - Schema validation
//! - The record data model consumed by code generation

pub mod error;
pub mod parser;
pub mod records;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use parser::{Line, parse_definitions, parse_definitions_with, tokenize_line};
pub use records::{FieldDef, RecordDef, Schema};
pub use types::{
    DEFAULT_MAPPINGS, ResolvedType, TypeMapper, TypeMapping, is_identifier, is_reserved_word,
};
pub use validation::{validate_aggregate, validate_schema};
