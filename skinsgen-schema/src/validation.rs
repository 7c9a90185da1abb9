//! Schema validation utilities.
//!
//! The parser accepts any well-formed line; these checks reject schemas
//! that would produce an artifact the C++ compiler refuses: duplicate or
//! empty records, duplicate fields, and C++ keywords used as names or types.
//! A record must also not share its name with the enclosing aggregate,
//! which depends on emitter configuration and is checked separately by
//! [`validate_aggregate`].

use crate::error::SchemaError;
use crate::records::{RecordDef, Schema};
use crate::types::{is_builtin_type, is_reserved_word};
use std::collections::{HashMap, HashSet};

/// Validates a parsed schema for correctness.
///
/// # Arguments
/// * `schema` - The schema to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the first issue.
///
/// # Errors
/// Returns `SchemaError` if a record is duplicated, has no fields,
/// declares the same field twice, or uses a C++ keyword as its name, a field
/// name, or a field type.
pub fn validate_schema(schema: &Schema) -> Result<(), SchemaError> {
    let mut seen_records: HashMap<&str, usize> = HashMap::new();

    for record in &schema.records {
        if let Some(&first_line) = seen_records.get(record.name.as_str()) {
            return Err(SchemaError::DuplicateRecord {
                name: record.name.clone(),
                first_line,
                line: record.line,
            });
        }
        seen_records.insert(record.name.as_str(), record.line);

        validate_record(record)?;
    }

    Ok(())
}

/// Checks that no record is named like the aggregate struct enclosing it.
///
/// # Arguments
/// * `schema` - The schema to validate
/// * `aggregate` - Name of the generated outer struct
///
/// # Errors
/// Returns `SchemaError::AggregateCollision` for the first record whose name
/// equals `aggregate`.
pub fn validate_aggregate(schema: &Schema, aggregate: &str) -> Result<(), SchemaError> {
    match schema.records.iter().find(|r| r.name == aggregate) {
        Some(record) => Err(SchemaError::AggregateCollision {
            name: record.name.clone(),
            line: record.line,
        }),
        None => Ok(()),
    }
}

/// Validates a single record definition.
fn validate_record(record: &RecordDef) -> Result<(), SchemaError> {
    if is_reserved_word(&record.name) {
        return Err(reserved(&record.name, "record name", record.line));
    }
    if record.fields.is_empty() {
        return Err(SchemaError::EmptyRecord {
            name: record.name.clone(),
            line: record.line,
        });
    }

    let mut seen_fields = HashSet::new();
    for field in &record.fields {
        if is_reserved_word(&field.name) {
            return Err(reserved(&field.name, "field name", record.line));
        }
        if is_reserved_word(&field.storage_type) && !is_builtin_type(&field.storage_type) {
            return Err(reserved(&field.declared_type, "field type", record.line));
        }
        if !seen_fields.insert(&field.name) {
            return Err(SchemaError::DuplicateField {
                record: record.name.clone(),
                field: field.name.clone(),
                line: record.line,
            });
        }
    }

    Ok(())
}

fn reserved(token: &str, role: &'static str, line: usize) -> SchemaError {
    SchemaError::ReservedWord {
        token: token.to_string(),
        role,
        line,
    }
}
