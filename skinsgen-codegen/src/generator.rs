//! Header artifact generator.
//!
//! Output is a pure function of the schema and configuration: records are
//! emitted in schema order and nothing time- or environment-dependent is
//! written.

use crate::config::GeneratorConfig;
use crate::cpp::RecordGenerator;
use skinsgen_schema::Schema;

/// Generates the complete header for a schema.
pub struct Generator<'a> {
    schema: &'a Schema,
    config: GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            config: GeneratorConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates the artifact text.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = self.generate_preamble();

        let records = RecordGenerator::new(&self.config);
        for record in &self.schema.records {
            output.push_str(&records.generate(record));
        }

        output.push_str(&self.generate_footer());
        output
    }

    /// Generates the banner, include guard, includes and aggregate opening.
    #[must_use]
    pub fn generate_preamble(&self) -> String {
        let mut output = String::new();
        let rule = "*".repeat(77);

        output.push_str(&format!("/*{}\n", rule));
        output.push_str(&format!(" * {}\n", self.config.file_name()));
        output.push_str(&format!(" *{}\n", rule));
        output.push_str(" * Data holders filled by the skin XML builder.\n");
        output.push_str(&format!(" *{}/\n", rule));
        output.push('\n');
        output.push_str("// File generated by skinsgen\n");
        output.push_str("// DO NOT EDIT\n");
        output.push('\n');

        let guard = self.config.include_guard();
        output.push_str(&format!("#ifndef {}\n", guard));
        output.push_str(&format!("#define {}\n", guard));
        output.push('\n');

        for include in self.config.includes() {
            output.push_str(&format!("#include <{}>\n", include));
        }
        output.push('\n');

        output.push_str("/// Structure for mapping data from XML file\n");
        output.push_str(&format!("struct {}\n", self.config.aggregate_name()));
        output.push_str("{\n");

        output
    }

    /// Generates the aggregate closing and include guard end.
    #[must_use]
    pub fn generate_footer(&self) -> String {
        format!("}};\n\n#endif // {}\n", self.config.include_guard())
    }
}
