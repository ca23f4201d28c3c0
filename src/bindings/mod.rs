//! C header parsing and Jai binding generation.
//!
//! This module provides the declaration-extraction passes and the Jai
//! code generator used to translate a C header into a Jai bindings
//! file.

pub mod jai;
pub mod parser;
pub mod types;

pub use jai::JaiGenerator;
pub use parser::HeaderParser;
pub use types::{
    strip_pointer, AliasTypedef, ColorConstant, EnumDecl, Field, FunctionDecl, OpaqueTypedef,
    Param, ParsedHeader, StructDecl, TypeMap, TypeRef,
};
