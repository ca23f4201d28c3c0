//! C header parser for Jai binding generation.
//!
//! Extracts color constants, enums, typedefs, structs, and exported
//! function prototypes from a C header. Each category is recognized by
//! its own independent regex scan over the full header text; the
//! categories do not nest or interact, so there is no shared grammar.
//!
//! This is a best-effort generation tool, not a validating compiler:
//! any text segment a scan's pattern does not match is excluded from
//! that scan's output with no diagnostic.

use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

use super::types::{
    strip_pointer, AliasTypedef, ColorConstant, EnumDecl, Field, FunctionDecl, OpaqueTypedef,
    Param, ParsedHeader, StructDecl, TypeRef,
};

/// Enum identifier reserved for the C99 bool compatibility shim.
/// Recognized by name and never extracted.
const BOOL_COMPAT_ENUM: &str = "bool";

/// Parser for C header files.
#[derive(Default)]
pub struct HeaderParser;

impl HeaderParser {
    /// Create a new header parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a header file.
    pub fn parse_file(&self, path: &Path) -> Result<ParsedHeader> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read header: {}", path.display()))?;

        Ok(self.parse_content(&content, path))
    }

    /// Parse header content.
    ///
    /// Never fails: unrecognized declarations are simply absent from
    /// the result.
    pub fn parse_content(&self, content: &str, path: &Path) -> ParsedHeader {
        let mut header = ParsedHeader::new(path);

        header.colors = self.parse_colors(content);
        header.enums = self.parse_enums(content);
        header.opaque_typedefs = self.parse_opaque_typedefs(content);
        header.aliases = self.parse_aliases(content);
        header.structs = self.parse_structs(content);
        header.functions = self.parse_functions(content);

        tracing::debug!(
            "parsed {}: {} colors, {} enums, {} opaque typedefs, {} aliases, {} structs, {} functions",
            path.display(),
            header.colors.len(),
            header.enums.len(),
            header.opaque_typedefs.len(),
            header.aliases.len(),
            header.structs.len(),
            header.functions.len()
        );

        header
    }

    /// Parse `#define NAME CLITERAL(Color){ r, g, b, a }` constants.
    fn parse_colors(&self, content: &str) -> Vec<ColorConstant> {
        let mut colors = Vec::new();

        let re = Regex::new(r"#define (\w+)\s+CLITERAL\(Color\)\{([^}]+)\}").unwrap();

        for cap in re.captures_iter(content) {
            colors.push(ColorConstant {
                name: cap[1].to_string(),
                components: cap[2].to_string(),
            });
        }

        colors
    }

    /// Parse `typedef enum { ... } Name;` blocks.
    ///
    /// The body runs to the first closing brace, so nested braces are
    /// not supported.
    fn parse_enums(&self, content: &str) -> Vec<EnumDecl> {
        let mut enums = Vec::new();

        let re = Regex::new(r"typedef enum \{([^}]*)\} (\w+);").unwrap();

        for cap in re.captures_iter(content) {
            let name = &cap[2];

            // Skip the C compat bool definition.
            if name == BOOL_COMPAT_ENUM {
                continue;
            }

            enums.push(EnumDecl {
                name: name.to_string(),
                body: cap[1].to_string(),
            });
        }

        enums
    }

    /// Parse `typedef struct Tag Name;` forward declarations.
    ///
    /// These name structs that the header only ever uses behind a
    /// pointer; the tag is discarded.
    fn parse_opaque_typedefs(&self, content: &str) -> Vec<OpaqueTypedef> {
        let mut typedefs = Vec::new();

        let re = Regex::new(r"typedef struct (\w+) (\w+);").unwrap();

        for cap in re.captures_iter(content) {
            typedefs.push(OpaqueTypedef {
                name: cap[2].to_string(),
            });
        }

        typedefs
    }

    /// Parse `typedef Base Name;` single-token aliases.
    fn parse_aliases(&self, content: &str) -> Vec<AliasTypedef> {
        let mut aliases = Vec::new();

        let re = Regex::new(r"typedef (\w+) (\w+);").unwrap();

        for cap in re.captures_iter(content) {
            // Struct forwards are handled by parse_opaque_typedefs.
            if &cap[1] == "struct" {
                continue;
            }

            aliases.push(AliasTypedef {
                name: cap[2].to_string(),
                underlying: cap[1].to_string(),
            });
        }

        aliases
    }

    /// Parse `typedef struct Name { ... }` definitions with bodies.
    fn parse_structs(&self, content: &str) -> Vec<StructDecl> {
        let mut structs = Vec::new();

        let re = Regex::new(r"typedef struct (\w+) \{([^}]*)\}").unwrap();

        for cap in re.captures_iter(content) {
            structs.push(StructDecl {
                name: cap[1].to_string(),
                fields: self.parse_fields(&cap[2]),
            });
        }

        structs
    }

    /// Parse struct fields, one line at a time.
    ///
    /// The last run of word characters (or a comma-joined run, for
    /// lines declaring several fields of one type) before the `;` is
    /// the field name; everything before it is the type. Lines that do
    /// not fit this shape are dropped.
    fn parse_fields(&self, body: &str) -> Vec<Field> {
        let mut fields = Vec::new();

        let re = Regex::new(r"(.*?)((?:\w+|, )+)(\[\d+\])?;").unwrap();

        for line in body.trim().split('\n') {
            let Some(cap) = re.captures(line) else {
                continue;
            };

            let prefix = cap[1].trim().to_string();
            let (base_type, pointer_arity) = strip_pointer(&prefix);

            fields.push(Field {
                name: cap[2].trim().to_string(),
                base_type: base_type.to_string(),
                pointer_arity,
                array_suffix: cap.get(3).map(|m| m.as_str().to_string()),
            });
        }

        fields
    }

    /// Parse `RLAPI <return> <name>(<args>);` prototypes.
    fn parse_functions(&self, content: &str) -> Vec<FunctionDecl> {
        let mut functions = Vec::new();

        let re = Regex::new(r"RLAPI (.*?)(\w+)\(([^)]*)\);").unwrap();

        for cap in re.captures_iter(content) {
            let return_str = cap[1].trim().to_string();
            let name = cap[2].to_string();
            let args = &cap[3];

            let return_type = if return_str == "void" {
                None
            } else {
                let (base, arity) = strip_pointer(&return_str);
                Some(TypeRef {
                    base: base.to_string(),
                    arity,
                })
            };

            let (params, variadic) = self.parse_params(args);

            functions.push(FunctionDecl {
                name,
                return_type,
                params,
                variadic,
            });
        }

        functions
    }

    /// Parse a prototype's argument list.
    ///
    /// Arguments carry their pointer markers on the name (`Color *c`),
    /// unlike struct fields and return types, which carry them on the
    /// type. The marker is stripped from the last whitespace-delimited
    /// token; the remaining tokens are the type. An ellipsis stops
    /// collection, so nothing follows the variadic marker.
    fn parse_params(&self, args: &str) -> (Vec<Param>, bool) {
        let mut params = Vec::new();

        if args == "void" {
            return (params, false);
        }

        for arg in args.split(',') {
            let tokens: Vec<&str> = arg.trim().split(' ').collect();
            let mut name = *tokens.last().unwrap_or(&"");
            let raw_type = tokens[..tokens.len().saturating_sub(1)].join(" ");

            let pointer_arity = if let Some(stripped) = name.strip_prefix("**") {
                name = stripped;
                2
            } else if let Some(stripped) = name.strip_prefix('*') {
                name = stripped;
                1
            } else {
                0
            };

            if name == "..." {
                return (params, true);
            }

            params.push(Param {
                name: name.to_string(),
                raw_type,
                pointer_arity,
            });
        }

        (params, false)
    }
}
