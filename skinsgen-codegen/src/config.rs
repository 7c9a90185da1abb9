//! Emitter configuration.

/// Default artifact file name.
pub const DEFAULT_FILE_NAME: &str = "builder_data.hpp";
/// Default name of the enclosing aggregate struct.
pub const DEFAULT_AGGREGATE_NAME: &str = "BuilderData";
/// Default prefix of storage members.
pub const DEFAULT_MEMBER_PREFIX: &str = "m_";
/// Default prefix of the per-record list member, after the member prefix.
pub const DEFAULT_LIST_PREFIX: &str = "list";
/// Headers included by the generated artifact.
pub const DEFAULT_INCLUDES: &[&str] = &["vlc_common.h", "list", "map", "string"];

/// Settings controlling the shape of the generated header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    file_name: String,
    aggregate_name: String,
    member_prefix: String,
    list_prefix: String,
    include_guard: Option<String>,
    includes: Vec<String>,
}

impl GeneratorConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.to_string(),
            aggregate_name: DEFAULT_AGGREGATE_NAME.to_string(),
            member_prefix: DEFAULT_MEMBER_PREFIX.to_string(),
            list_prefix: DEFAULT_LIST_PREFIX.to_string(),
            include_guard: None,
            includes: DEFAULT_INCLUDES.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Sets the file name shown in the header banner.
    ///
    /// Unless overridden, the include guard derives from it.
    #[must_use]
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// Sets the name of the enclosing aggregate struct.
    #[must_use]
    pub fn with_aggregate_name(mut self, name: impl Into<String>) -> Self {
        self.aggregate_name = name.into();
        self
    }

    /// Sets the storage member prefix.
    #[must_use]
    pub fn with_member_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.member_prefix = prefix.into();
        self
    }

    /// Sets the list member prefix.
    #[must_use]
    pub fn with_list_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.list_prefix = prefix.into();
        self
    }

    /// Overrides the include guard macro.
    #[must_use]
    pub fn with_include_guard(mut self, guard: impl Into<String>) -> Self {
        self.include_guard = Some(guard.into());
        self
    }

    /// Replaces the list of included headers.
    #[must_use]
    pub fn with_includes<I, S>(mut self, includes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.includes = includes.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the artifact file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the aggregate struct name.
    #[must_use]
    pub fn aggregate_name(&self) -> &str {
        &self.aggregate_name
    }

    /// Returns the included headers.
    #[must_use]
    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    /// Returns the include guard macro.
    #[must_use]
    pub fn include_guard(&self) -> String {
        match &self.include_guard {
            Some(guard) => guard.clone(),
            None => guard_from_file_name(&self.file_name),
        }
    }

    /// Returns the storage member name for a field.
    #[must_use]
    pub fn member_name(&self, field: &str) -> String {
        format!("{}{}", self.member_prefix, field)
    }

    /// Returns the list member name for a record.
    #[must_use]
    pub fn list_member_name(&self, record: &str) -> String {
        format!("{}{}{}", self.member_prefix, self.list_prefix, record)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Derives an include guard macro from a file name.
///
/// `builder_data.hpp` becomes `BUILDER_DATA_HPP`.
#[must_use]
pub fn guard_from_file_name(file_name: &str) -> String {
    let mut guard: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    if guard.is_empty() || guard.starts_with(|c: char| c.is_ascii_digit()) {
        guard.insert(0, '_');
    }
    guard
}
