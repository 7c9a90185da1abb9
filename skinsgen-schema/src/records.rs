//! Record definitions.
//!
//! This module contains the data structures produced by the definition
//! parser: the schema, its records, and their resolved fields.

use crate::types::ResolvedType;

/// Ordered set of record definitions parsed from one definition source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    /// Records in source order.
    pub records: Vec<RecordDef>,
    /// Line of the blank line that ended the schema, if any.
    pub terminated_at: Option<usize>,
    /// Non-blank lines found after the terminating blank line.
    pub ignored_lines: usize,
}

impl Schema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record, keeping source order.
    pub fn add_record(&mut self, record: RecordDef) {
        self.records.push(record);
    }

    /// Looks up a record by name.
    #[must_use]
    pub fn get_record(&self, name: &str) -> Option<&RecordDef> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Returns true if the schema declares no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns the total number of fields across all records.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.records.iter().map(|r| r.fields.len()).sum()
    }
}

/// Record definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDef {
    /// Record name.
    pub name: String,
    /// 1-based source line.
    pub line: usize,
    /// Fields in declaration order.
    pub fields: Vec<FieldDef>,
}

impl RecordDef {
    /// Creates a record with no fields.
    #[must_use]
    pub fn new(name: String, line: usize) -> Self {
        Self {
            name,
            line,
            fields: Vec::new(),
        }
    }

    /// Adds a field to the record.
    pub fn add_field(&mut self, field: FieldDef) {
        self.fields.push(field);
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Field definition within a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Type name as declared in the source.
    pub declared_type: String,
    /// Resolved storage member type.
    pub storage_type: String,
    /// Resolved constructor parameter type.
    pub param_type: String,
}

impl FieldDef {
    /// Creates a field from its declared name and resolved types.
    #[must_use]
    pub fn new(name: String, declared_type: String, resolved: ResolvedType) -> Self {
        Self {
            name,
            declared_type,
            storage_type: resolved.storage,
            param_type: resolved.param,
        }
    }
}
