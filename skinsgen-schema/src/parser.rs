//! Record definition parser.
//!
//! The definition source is line oriented:
//!
//! ```text
//! schema      := record_line* (blank_line | EOF)
//! record_line := Identifier (SP field)* NEWLINE
//! field       := Identifier ':' TypeName
//! ```
//!
//! The first blank line ends the schema. Anything after it is not parsed;
//! the number of non-blank lines skipped that way is kept on the
//! [`Schema`] and reported through `tracing`.

use crate::error::ParseError;
use crate::records::{FieldDef, RecordDef, Schema};
use crate::types::{TypeMapper, is_identifier};

/// One tokenized source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or whitespace-only line.
    Blank,
    /// Record declaration.
    Record {
        /// Record name.
        name: &'a str,
        /// `(field name, declared type)` pairs in textual order.
        fields: Vec<(&'a str, &'a str)>,
    },
}

/// Tokenizes and validates a single line.
///
/// # Arguments
/// * `line_no` - 1-based line number used in errors
/// * `line` - Line content without the trailing newline
///
/// # Errors
/// Returns `ParseError` if the record name or any field token is malformed.
pub fn tokenize_line(line_no: usize, line: &str) -> Result<Line<'_>, ParseError> {
    let mut tokens = line.split_whitespace();

    let Some(name) = tokens.next() else {
        return Ok(Line::Blank);
    };
    if !is_identifier(name) {
        return Err(ParseError::invalid_identifier(line_no, name));
    }

    let fields = tokens
        .map(|token| split_field(line_no, token))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Line::Record { name, fields })
}

/// Splits a `name:type` token.
fn split_field(line_no: usize, token: &str) -> Result<(&str, &str), ParseError> {
    let mut parts = token.split(':');
    let (Some(name), Some(declared), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ParseError::malformed_field(line_no, token));
    };

    if name.is_empty() || declared.is_empty() {
        return Err(ParseError::malformed_field(line_no, token));
    }
    if !is_identifier(name) {
        return Err(ParseError::invalid_identifier(line_no, token));
    }
    if !is_identifier(declared) {
        return Err(ParseError::invalid_type(line_no, token));
    }

    Ok((name, declared))
}

/// Parses definition text using the default type mapping.
///
/// # Arguments
/// * `text` - Definition source content
///
/// # Returns
/// Parsed schema or parse error.
///
/// # Errors
/// Returns `ParseError` on the first malformed line.
pub fn parse_definitions(text: &str) -> Result<Schema, ParseError> {
    parse_definitions_with(text, &TypeMapper::default())
}

/// Parses definition text, resolving field types with `mapper`.
///
/// # Errors
/// Returns `ParseError` on the first malformed line.
pub fn parse_definitions_with(text: &str, mapper: &TypeMapper) -> Result<Schema, ParseError> {
    let mut schema = Schema::new();
    let mut lines = text.lines().enumerate().map(|(idx, l)| (idx + 1, l));

    for (line_no, line) in lines.by_ref() {
        match tokenize_line(line_no, line)? {
            Line::Blank => {
                schema.terminated_at = Some(line_no);
                break;
            }
            Line::Record { name, fields } => {
                let mut record = RecordDef::new(name.to_string(), line_no);
                for (field_name, declared) in fields {
                    record.add_field(FieldDef::new(
                        field_name.to_string(),
                        declared.to_string(),
                        mapper.resolve(declared),
                    ));
                }
                schema.add_record(record);
            }
        }
    }

    schema.ignored_lines = lines.filter(|(_, l)| !l.trim().is_empty()).count();
    if schema.ignored_lines > 0 {
        tracing::warn!(
            "Ignoring {} line(s) after the blank line at line {}",
            schema.ignored_lines,
            schema.terminated_at.unwrap_or_default()
        );
    }

    tracing::debug!(
        "Parsed {} record(s) with {} field(s)",
        schema.len(),
        schema.field_count()
    );

    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeMapping;

    const THEME_DEFS: &str = "\
Theme tooltipfont:string magnet:int alpha:int moveAlpha:int
Bitmap id:string fileName:string alphaColor:uint32_t nbFrames:int fps:int
Font id:string fontFile:string size:int

This line is past the end marker and is never parsed: a b c
";

    #[test]
    fn test_parse_records_in_order() {
        let schema = parse_definitions(THEME_DEFS).expect("Failed to parse definitions");

        let names: Vec<_> = schema.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Theme", "Bitmap", "Font"]);
        assert_eq!(schema.records[1].line, 2);
        assert_eq!(schema.terminated_at, Some(4));
        assert_eq!(schema.ignored_lines, 1);
    }

    #[test]
    fn test_parse_fields_in_order_with_resolved_types() {
        let schema = parse_definitions(THEME_DEFS).expect("Failed to parse definitions");
        let font = schema.get_record("Font").unwrap();

        let fields: Vec<_> = font
            .fields
            .iter()
            .map(|f| (f.name.as_str(), f.declared_type.as_str()))
            .collect();
        assert_eq!(fields, [("id", "string"), ("fontFile", "string"), ("size", "int")]);

        assert_eq!(font.fields[0].storage_type, "std::string");
        assert_eq!(font.fields[0].param_type, "const std::string &");
        assert_eq!(font.fields[2].storage_type, "int");
        assert_eq!(font.fields[2].param_type, "int");
    }

    #[test]
    fn test_immediate_blank_line_yields_empty_schema() {
        let schema = parse_definitions("\nFoo a:int\n").expect("Failed to parse");
        assert!(schema.is_empty());
        assert_eq!(schema.terminated_at, Some(1));
        assert_eq!(schema.ignored_lines, 1);
    }

    #[test]
    fn test_empty_input() {
        let schema = parse_definitions("").expect("Failed to parse");
        assert!(schema.is_empty());
        assert_eq!(schema.terminated_at, None);
        assert_eq!(schema.ignored_lines, 0);
    }

    #[test]
    fn test_eof_without_blank_line() {
        let schema = parse_definitions("Foo a:int").expect("Failed to parse");
        assert_eq!(schema.len(), 1);
        assert_eq!(schema.terminated_at, None);
    }

    #[test]
    fn test_whitespace_only_line_terminates() {
        let schema = parse_definitions("Foo a:int\n  \t \nBar b:int\n").expect("Failed to parse");
        assert_eq!(schema.len(), 1);
        assert_eq!(schema.terminated_at, Some(2));
    }

    #[test]
    fn test_content_after_blank_line_is_not_validated() {
        let schema = parse_definitions("Foo a:int\n\nBar x\n::: !!\n").expect("Failed to parse");
        assert_eq!(schema.len(), 1);
        assert_eq!(schema.ignored_lines, 2);
    }

    #[test]
    fn test_crlf_line_endings() {
        let schema = parse_definitions("Foo a:int b:string\r\n\r\n").expect("Failed to parse");
        let foo = &schema.records[0];
        assert_eq!(foo.fields[1].declared_type, "string");
        assert_eq!(schema.terminated_at, Some(2));
    }

    #[test]
    fn test_extra_inner_whitespace() {
        let schema = parse_definitions("Foo   a:int\t\tb:bool  \n").expect("Failed to parse");
        assert_eq!(schema.records[0].fields.len(), 2);
    }

    #[test]
    fn test_field_without_colon() {
        let err = parse_definitions("Bar x\n").unwrap_err();
        match err {
            ParseError::MalformedField { line, token } => {
                assert_eq!(line, 1);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_field_with_two_colons() {
        let err = parse_definitions("Foo a:int\nBar x:int:long\n").unwrap_err();
        assert!(matches!(err, ParseError::MalformedField { line: 2, ref token } if token == "x:int:long"));
    }

    #[test]
    fn test_field_with_empty_side() {
        assert!(matches!(
            parse_definitions("Foo :int").unwrap_err(),
            ParseError::MalformedField { line: 1, .. }
        ));
        assert!(matches!(
            parse_definitions("Foo a:").unwrap_err(),
            ParseError::MalformedField { line: 1, .. }
        ));
    }

    #[test]
    fn test_invalid_record_name() {
        let err = parse_definitions(" a:int b:int\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidIdentifier { line: 1, ref token } if token == "a:int"));

        let err = parse_definitions("1Foo a:int\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidIdentifier { line: 1, .. }));
    }

    #[test]
    fn test_invalid_field_name_and_type() {
        let err = parse_definitions("Foo my-field:int\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidIdentifier { line: 1, .. }));

        let err = parse_definitions("Foo a:int*\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidTypeName { line: 1, ref token } if token == "a:int*"));
    }

    #[test]
    fn test_tokenize_line() {
        assert_eq!(tokenize_line(1, "").unwrap(), Line::Blank);
        assert_eq!(tokenize_line(1, "   ").unwrap(), Line::Blank);
        assert_eq!(
            tokenize_line(7, "Anchor priority:int lefttop:string").unwrap(),
            Line::Record {
                name: "Anchor",
                fields: vec![("priority", "int"), ("lefttop", "string")],
            }
        );
        assert_eq!(
            tokenize_line(2, "Empty").unwrap(),
            Line::Record {
                name: "Empty",
                fields: vec![],
            }
        );
    }

    #[test]
    fn test_custom_mapper() {
        let mapper = TypeMapper::empty().with_mapping(TypeMapping {
            declared: "text",
            storage: "std::wstring",
            param: "const std::wstring &",
        });
        let schema = parse_definitions_with("Label caption:text\n", &mapper).expect("Failed to parse");
        let f = &schema.records[0].fields[0];
        assert_eq!(f.storage_type, "std::wstring");
        assert_eq!(f.param_type, "const std::wstring &");
    }
}
