//! Record block code generation.

use crate::config::GeneratorConfig;
use skinsgen_schema::{FieldDef, RecordDef};

/// Generator for the nested struct and list member of one record.
pub struct RecordGenerator<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> RecordGenerator<'a> {
    /// Creates a new record generator.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generates the full block for a record.
    #[must_use]
    pub fn generate(&self, record: &RecordDef) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("    /// Type definition\n");
        output.push_str(&format!("    struct {}\n", record.name));
        output.push_str("    {\n");
        output.push_str(&self.generate_constructor(record));
        output.push('\n');
        for field in &record.fields {
            output.push_str(&self.generate_member(field));
        }
        output.push_str("    };\n");
        output.push_str(&self.generate_list(record));

        output
    }

    /// Generates the constructor and its member-initializer list.
    fn generate_constructor(&self, record: &RecordDef) -> String {
        let params: Vec<String> = record
            .fields
            .iter()
            .map(|f| format!("{} {}", f.param_type, f.name))
            .collect();
        let inits: Vec<String> = record
            .fields
            .iter()
            .map(|f| format!("{}( {} )", self.config.member_name(&f.name), f.name))
            .collect();

        let mut output = String::new();
        output.push_str(&format!("        {}( {} ):\n", record.name, params.join(", ")));
        output.push_str(&format!("            {} {{}}\n", inits.join(", ")));
        output
    }

    /// Generates a storage member declaration.
    fn generate_member(&self, field: &FieldDef) -> String {
        format!(
            "        {} {};\n",
            field.storage_type,
            self.config.member_name(&field.name)
        )
    }

    /// Generates the list member collecting instances of the record.
    fn generate_list(&self, record: &RecordDef) -> String {
        format!(
            "    /// List\n    std::list<{}> {};\n",
            record.name,
            self.config.list_member_name(&record.name)
        )
    }
}
