//! Error types for definition parsing and schema validation.

use thiserror::Error;

/// Error type for definition parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Field token without exactly one `:` separator, or with an empty side.
    #[error("line {line}: malformed field '{token}', expected 'name:type'")]
    MalformedField {
        /// 1-based source line.
        line: usize,
        /// Offending token.
        token: String,
    },

    /// Record or field name that is not a valid identifier.
    #[error("line {line}: invalid identifier '{token}'")]
    InvalidIdentifier {
        /// 1-based source line.
        line: usize,
        /// Offending token.
        token: String,
    },

    /// Declared field type that cannot be emitted as a type name.
    #[error("line {line}: invalid type name '{token}'")]
    InvalidTypeName {
        /// 1-based source line.
        line: usize,
        /// Offending token.
        token: String,
    },
}

impl ParseError {
    /// Creates a malformed field error.
    pub fn malformed_field(line: usize, token: impl Into<String>) -> Self {
        Self::MalformedField {
            line,
            token: token.into(),
        }
    }

    /// Creates an invalid identifier error.
    pub fn invalid_identifier(line: usize, token: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            line,
            token: token.into(),
        }
    }

    /// Creates an invalid type name error.
    pub fn invalid_type(line: usize, token: impl Into<String>) -> Self {
        Self::InvalidTypeName {
            line,
            token: token.into(),
        }
    }

    /// Returns the source line the error refers to.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::MalformedField { line, .. }
            | Self::InvalidIdentifier { line, .. }
            | Self::InvalidTypeName { line, .. } => *line,
        }
    }

    /// Returns the offending token.
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::MalformedField { token, .. }
            | Self::InvalidIdentifier { token, .. }
            | Self::InvalidTypeName { token, .. } => token,
        }
    }
}

/// Error type for schema validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Record declared more than once.
    #[error("line {line}: duplicate record '{name}' (first declared on line {first_line})")]
    DuplicateRecord {
        /// Record name.
        name: String,
        /// Line of the first declaration.
        first_line: usize,
        /// Line of the duplicate.
        line: usize,
    },

    /// Record declared without any field.
    #[error("line {line}: record '{name}' declares no fields")]
    EmptyRecord {
        /// Record name.
        name: String,
        /// Line of the record.
        line: usize,
    },

    /// Field declared more than once in the same record.
    #[error("line {line}: duplicate field '{field}' in record '{record}'")]
    DuplicateField {
        /// Record name.
        record: String,
        /// Field name.
        field: String,
        /// Line of the record.
        line: usize,
    },

    /// C++ keyword used as a record name, field name or field type.
    #[error("line {line}: '{token}' is a reserved word and cannot be used as a {role}")]
    ReservedWord {
        /// Offending word.
        token: String,
        /// What the word was used as.
        role: &'static str,
        /// Line of the record.
        line: usize,
    },

    /// Record named like the enclosing aggregate struct.
    #[error("line {line}: record '{name}' has the same name as the enclosing aggregate")]
    AggregateCollision {
        /// Record name.
        name: String,
        /// Line of the record.
        line: usize,
    },
}

impl SchemaError {
    /// Returns the source line the error refers to.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::DuplicateRecord { line, .. }
            | Self::EmptyRecord { line, .. }
            | Self::DuplicateField { line, .. }
            | Self::ReservedWord { line, .. }
            | Self::AggregateCollision { line, .. } => *line,
        }
    }
}
