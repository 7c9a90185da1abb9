//! C++ code generation modules.

pub mod records;

pub use records::RecordGenerator;
