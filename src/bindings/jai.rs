//! Jai binding generation from parsed C headers.
//!
//! Emits one contiguous block of Jai source per declaration category,
//! in a fixed order, and concatenates them into the final file. Blocks
//! never depend on each other's content, so the output is deterministic
//! for a given input.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;
use regex::Regex;

use super::types::{
    ColorConstant, EnumDecl, FunctionDecl, ParsedHeader, StructDecl, TypeMap,
};
use crate::util;

/// Banner marking the output as generated.
const BANNER: &str = "//\n// AUTOGENERATED\n//\n\n";

/// The one declaration that cannot be derived from the header: the
/// trace-log callback is a function-pointer typedef, and function
/// pointers are not parsed. Emitted verbatim.
const TRACE_LOG_CALLBACK: &str =
    "\nTraceLogCallback :: #type (logType: s32, text: *u8, args: ..*u8);\n\n";

/// Generator for Jai bindings.
pub struct JaiGenerator {
    /// Name the foreign declarations bind to
    lib_name: String,
    /// Relative path to the native library, used by the footer
    lib_path: String,
    /// Shared type substitution table
    type_map: TypeMap,
}

impl JaiGenerator {
    /// Create a new generator binding to the given native library name.
    pub fn new(lib_name: impl Into<String>) -> Self {
        JaiGenerator {
            lib_name: lib_name.into(),
            lib_path: "raylib/lib/raylib".to_string(),
            type_map: TypeMap::new(),
        }
    }

    /// Set the relative path to the native library.
    pub fn with_lib_path(mut self, path: impl Into<String>) -> Self {
        self.lib_path = path.into();
        self
    }

    /// Generate the complete Jai source for a parsed header.
    pub fn generate(&self, header: &ParsedHeader) -> String {
        let mut out = String::new();

        out.push_str(BANNER);
        out.push_str(&self.emit_colors(&header.colors));
        out.push_str(TRACE_LOG_CALLBACK);
        out.push_str(&self.emit_enums(&header.enums));

        for opaque in &header.opaque_typedefs {
            let _ = writeln!(
                out,
                "{} :: struct {{ /* only used as a pointer in this header */ }}\n",
                opaque.name
            );
        }

        for alias in &header.aliases {
            let _ = writeln!(out, "{} :: {};\n", alias.name, alias.underlying);
        }

        for decl in &header.structs {
            out.push_str(&self.emit_struct(decl));
        }

        for func in &header.functions {
            out.push_str(&self.emit_function(func));
        }

        out.push_str(&self.emit_footer());

        out
    }

    /// Generate bindings and write them to a file.
    pub fn generate_to_file(&self, header: &ParsedHeader, path: &Path) -> Result<()> {
        let source = self.generate(header);
        util::fs::write_string(path, &source)?;

        tracing::debug!("wrote {} bytes to {}", source.len(), path.display());

        Ok(())
    }

    /// Emit one constant per color macro, component values verbatim.
    fn emit_colors(&self, colors: &[ColorConstant]) -> String {
        let mut out = String::new();

        for color in colors {
            let _ = writeln!(out, "{} :: Color.{{ {} }};", color.name, color.components);
        }

        out
    }

    /// Emit enum blocks, rewriting the body separators for Jai.
    fn emit_enums(&self, enums: &[EnumDecl]) -> String {
        let comment_re = Regex::new(r"//[^\n]*").unwrap();
        let mut out = String::new();

        for decl in enums {
            let mut body = decl
                .body
                .trim()
                .replace('=', "::")
                .replace(',', ";");

            body = comment_re.replace_all(&body, "").into_owned();

            if !body.ends_with(';') {
                body = body.trim_end().to_string();
                body.push(';');
            }

            let _ = writeln!(out, "{} :: enum {{\n    {}\n}}\n", decl.name, body);
        }

        out
    }

    /// Emit a struct block. Fields carry their pointer marker on the
    /// Jai side of the colon; array suffixes from the source are not
    /// reproduced.
    fn emit_struct(&self, decl: &StructDecl) -> String {
        let mut fields = String::new();

        for field in &decl.fields {
            let _ = writeln!(
                fields,
                "    {}: {}{};",
                field.name,
                "*".repeat(field.pointer_arity as usize),
                self.type_map.apply(&field.base_type)
            );
        }

        format!("{} :: struct {{\n{}}}\n\n", decl.name, fields)
    }

    /// Emit one foreign declaration per prototype.
    fn emit_function(&self, func: &FunctionDecl) -> String {
        let mut args = String::new();

        for param in &func.params {
            let _ = write!(
                args,
                "{}: {}{}, ",
                param.name,
                "*".repeat(param.pointer_arity as usize),
                self.type_map.apply(&param.raw_type)
            );
        }

        if func.variadic {
            args.push_str("args: ..*u8");
        }

        if let Some(stripped) = args.strip_suffix(", ") {
            args = stripped.to_string();
        }

        let return_str = match &func.return_type {
            Some(ret) => format!(
                "-> {}{}",
                "*".repeat(ret.arity as usize),
                self.type_map.apply(&ret.base)
            ),
            None => String::new(),
        };

        format!(
            "{} :: ({}) {} #foreign {} \"{}\";\n",
            func.name, args, return_str, self.lib_name, func.name
        )
    }

    /// Emit the native library linkage block. The `#if` is evaluated by
    /// the Jai compiler against its cross-compilation target, not here.
    fn emit_footer(&self) -> String {
        let mut out = String::new();

        out.push_str("\n#scope_file // ---------------\n\n");
        out.push_str("#if OS == .WINDOWS {\n");
        out.push_str("    #foreign_system_library \"user32\";\n");
        out.push_str("    #foreign_system_library \"gdi32\";\n");
        out.push_str("    #foreign_system_library \"shell32\";\n");
        out.push_str("    #foreign_system_library \"winmm\";\n");
        let _ = writeln!(
            out,
            "    {} :: #foreign_library,no_dll \"{}\";",
            self.lib_name, self.lib_path
        );
        out.push_str("}\n");

        out
    }
}
