//! # skinsgen
//!
//! Generates C++ data-holder headers from line-oriented record definitions.
//!
//! Each line of a definition file declares one record and its typed fields:
//!
//! ```text
//! Font id:string fontFile:string size:int
//! ```
//!
//! The generated header nests one struct per record inside a single
//! aggregate, each with a constructor, `m_`-prefixed storage members and a
//! `std::list` collecting instances of the record.
//!
//! ## Quick Start
//!
//! ```
//! use skinsgen::prelude::*;
//!
//! let header = generate_from_str("Font id:string size:int\n", &GeneratorConfig::default())?;
//! assert!(header.contains("Font( const std::string & id, int size ):"));
//! assert!(header.contains("std::list<Font> m_listFont;"));
//! # Ok::<(), CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Definition parsing, type mapping and validation
//! - [`codegen`] - Header generation and atomic output
//! - [`cli`] - Command-line front end used by the `skinsgen` binary

pub mod cli;
pub mod prelude;

/// Definition parsing, type mapping and validation.
pub mod schema {
    pub use skinsgen_schema::*;
}

/// Header generation from parsed schemas.
pub mod codegen {
    pub use skinsgen_codegen::*;
}
