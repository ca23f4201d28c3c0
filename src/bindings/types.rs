//! Type definitions for parsed C headers.
//!
//! These types represent the declaration shapes extracted from a header,
//! plus the ordered type-name substitution table and the pointer-arity
//! normalizer shared by every extraction pass.

use std::path::PathBuf;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Ordered C-to-Jai primitive type substitutions.
///
/// Order matters: multi-word tokens must be listed before the shorter
/// tokens they contain, so `const char` resolves in one step instead of
/// being picked apart by the bare `const` and `char` rules.
const TYPE_RULES: &[(&str, &str)] = &[
    ("const char", "u8"),
    ("const ", ""),
    ("unsigned short", "u16"),
    ("unsigned int", "u32"),
    ("unsigned char", "u8"),
    ("char", "s8"),
    ("long", "s32"),
    ("double", "float64"),
    ("int", "s32"),
];

/// The shared type-name substitution table.
///
/// Each rule matches its source token at word boundaries only, so a
/// token never fires inside a longer identifier (`interior` is not an
/// `int`). Unrecognized tokens pass through unchanged.
pub struct TypeMap {
    rules: Vec<(Regex, &'static str)>,
}

impl TypeMap {
    /// Compile the substitution table.
    pub fn new() -> Self {
        let rules = TYPE_RULES
            .iter()
            .map(|(c_type, jai_type)| {
                let re = Regex::new(&format!(r"\b{}\b", c_type)).unwrap();
                (re, *jai_type)
            })
            .collect();

        TypeMap { rules }
    }

    /// Apply every rule, in table order, to a type string.
    pub fn apply(&self, s: &str) -> String {
        let mut out = s.to_string();
        for (re, jai_type) in &self.rules {
            out = re.replace_all(&out, *jai_type).into_owned();
        }
        out
    }
}

impl Default for TypeMap {
    fn default() -> Self {
        TypeMap::new()
    }
}

/// Strip a trailing pointer marker from a trimmed type string.
///
/// Returns the base type (no trailing space) and the pointer arity.
/// The two-star suffix must be checked before the one-star suffix,
/// since `" **"` also ends in `" *"`.
pub fn strip_pointer(s: &str) -> (&str, u8) {
    if let Some(base) = s.strip_suffix(" **") {
        (base, 2)
    } else if let Some(base) = s.strip_suffix(" *") {
        (base, 1)
    } else {
        (s, 0)
    }
}

/// A parsed C header containing every declaration the scans recognized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedHeader {
    /// Source file path
    pub source: PathBuf,

    /// Color constants from `CLITERAL(Color)` macros
    pub colors: Vec<ColorConstant>,

    /// Enum blocks
    pub enums: Vec<EnumDecl>,

    /// Opaque forward typedefs (pointer-only structs)
    pub opaque_typedefs: Vec<OpaqueTypedef>,

    /// Simple single-token aliases
    pub aliases: Vec<AliasTypedef>,

    /// Struct definitions with bodies
    pub structs: Vec<StructDecl>,

    /// Exported function prototypes
    pub functions: Vec<FunctionDecl>,
}

impl ParsedHeader {
    /// Create a new empty parsed header.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        ParsedHeader {
            source: source.into(),
            ..Default::default()
        }
    }
}

/// A color constant extracted from a `#define NAME CLITERAL(Color){...}`
/// macro. The component list is kept verbatim; the values are plain
/// numeric literals and need no translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorConstant {
    /// Constant name
    pub name: String,

    /// Raw component list, exactly as it appeared between the braces
    pub components: String,
}

/// An enum block. The body is kept as raw text; separator and comment
/// rewriting is target-language work and happens at emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDecl {
    /// Enum name
    pub name: String,

    /// Raw body text between the braces
    pub body: String,
}

/// An opaque forward typedef (`typedef struct Tag Name;`). Only the
/// exposed name is material; the tag is discarded at extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpaqueTypedef {
    /// Exposed type name
    pub name: String,
}

/// A simple single-token alias (`typedef Base Name;`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasTypedef {
    /// New type name
    pub name: String,

    /// Underlying single-token base type, emitted as-is
    pub underlying: String,
}

/// A struct definition with a full body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructDecl {
    /// Struct name
    pub name: String,

    /// Fields in declaration order
    pub fields: Vec<Field>,
}

/// A struct field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name; a comma-joined run like `m0, m4, m8, m12` declares
    /// several fields of one type and is kept as a single record
    pub name: String,

    /// Base type with any trailing pointer marker already removed,
    /// not yet mapped
    pub base_type: String,

    /// Pointer arity (0, 1, or 2)
    pub pointer_arity: u8,

    /// Fixed-size array suffix, detected but never emitted
    pub array_suffix: Option<String>,
}

/// An exported function prototype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDecl {
    /// Function name
    pub name: String,

    /// Return type; `None` for void
    pub return_type: Option<TypeRef>,

    /// Parameters in declaration order
    pub params: Vec<Param>,

    /// Whether the prototype ends in an ellipsis. Parameter collection
    /// stops at the ellipsis, so `params` never holds anything past it.
    pub variadic: bool,
}

/// A function parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    /// Parameter name with any leading pointer marker removed
    pub name: String,

    /// Raw type tokens joined by single spaces, not yet mapped
    pub raw_type: String,

    /// Pointer arity taken from the leading marker on the name
    pub pointer_arity: u8,
}

/// A base type plus pointer arity, used for return types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    /// Base type with the trailing marker removed, not yet mapped
    pub base: String,

    /// Pointer arity (0, 1, or 2)
    pub arity: u8,
}
