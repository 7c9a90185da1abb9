//! Declared field type mapping.
//!
//! A declared type name from the definition source is resolved to the two
//! spellings the emitter needs: the type of the storage member and the type
//! of the matching constructor parameter. The policy is an explicit table;
//! any declared type without an entry passes through unchanged for both.

/// Mapping entries installed by [`TypeMapper::default`].
pub const DEFAULT_MAPPINGS: &[TypeMapping] = &[TypeMapping {
    declared: "string",
    storage: "std::string",
    param: "const std::string &",
}];

/// One row of the type mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMapping {
    /// Type name as written in the definition source.
    pub declared: &'static str,
    /// Type of the generated storage member.
    pub storage: &'static str,
    /// Type of the generated constructor parameter.
    pub param: &'static str,
}

/// Storage and parameter spellings for a declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// Type of the storage member.
    pub storage: String,
    /// Type of the constructor parameter.
    pub param: String,
}

impl ResolvedType {
    /// Returns true if storage and parameter use the same spelling.
    #[must_use]
    pub fn is_by_value(&self) -> bool {
        self.storage == self.param
    }
}

/// Declared type to (storage, parameter) policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMapper {
    mappings: Vec<TypeMapping>,
}

impl TypeMapper {
    /// Creates a mapper with no entries; every type passes through.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            mappings: Vec::new(),
        }
    }

    /// Adds or replaces a mapping entry.
    #[must_use]
    pub fn with_mapping(mut self, mapping: TypeMapping) -> Self {
        self.insert(mapping);
        self
    }

    /// Adds or replaces a mapping entry in place.
    pub fn insert(&mut self, mapping: TypeMapping) {
        match self
            .mappings
            .iter_mut()
            .find(|m| m.declared == mapping.declared)
        {
            Some(existing) => *existing = mapping,
            None => self.mappings.push(mapping),
        }
    }

    /// Looks up the table entry for a declared type.
    #[must_use]
    pub fn get(&self, declared: &str) -> Option<&TypeMapping> {
        self.mappings.iter().find(|m| m.declared == declared)
    }

    /// Returns the table entries in insertion order.
    #[must_use]
    pub fn mappings(&self) -> &[TypeMapping] {
        &self.mappings
    }

    /// Resolves a declared type name.
    ///
    /// Types with a table entry use it; anything else is passed by value
    /// and stored under its declared name.
    #[must_use]
    pub fn resolve(&self, declared: &str) -> ResolvedType {
        match self.get(declared) {
            Some(m) => ResolvedType {
                storage: m.storage.to_string(),
                param: m.param.to_string(),
            },
            None => ResolvedType {
                storage: declared.to_string(),
                param: declared.to_string(),
            },
        }
    }
}

impl Default for TypeMapper {
    fn default() -> Self {
        Self {
            mappings: DEFAULT_MAPPINGS.to_vec(),
        }
    }
}

/// Returns true if `s` matches `[A-Za-z_][A-Za-z0-9_]*`.
#[must_use]
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// C++ keywords and alternative operator tokens.
const RESERVED_WORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "compl", "concept",
    "const", "const_cast", "consteval", "constexpr", "constinit", "continue", "co_await",
    "co_return", "co_yield", "decltype", "default", "delete", "do", "double", "dynamic_cast",
    "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
    "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
    "nullptr", "operator", "or", "or_eq", "private", "protected", "public", "register",
    "reinterpret_cast", "requires", "return", "short", "signed", "sizeof", "static",
    "static_assert", "static_cast", "struct", "switch", "template", "this", "thread_local",
    "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
    "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq",
];

/// Keywords that name a complete object type on their own.
const BUILTIN_TYPES: &[&str] = &[
    "bool", "char", "char8_t", "char16_t", "char32_t", "double", "float", "int", "long", "short",
    "signed", "unsigned", "wchar_t",
];

/// Returns true if `s` is a C++ keyword.
#[must_use]
pub fn is_reserved_word(s: &str) -> bool {
    RESERVED_WORDS.contains(&s)
}

/// Returns true if `s` is a keyword usable as a field type by itself.
#[must_use]
pub(crate) fn is_builtin_type(s: &str) -> bool {
    BUILTIN_TYPES.contains(&s)
}
