//! `jaibind generate` command
//!
//! Parses the configured C header and writes the Jai bindings file.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::cli::GenerateArgs;
use jaibind::bindings::{HeaderParser, JaiGenerator};
use jaibind::config::{
    Manifest, DEFAULT_HEADER, DEFAULT_LIB_NAME, DEFAULT_LIB_PATH, DEFAULT_OUTPUT, MANIFEST_FILE,
};

pub fn execute(args: GenerateArgs) -> Result<()> {
    // Load the manifest; an explicit --manifest-path must exist, the
    // default one is optional.
    let manifest = match args.manifest_path {
        Some(ref path) => Manifest::load(path)?,
        None => Manifest::load_or_default(Path::new(MANIFEST_FILE))?,
    };

    // Flag > manifest > default.
    let header_path = args
        .header
        .or(manifest.header)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_HEADER));
    let output_path = args
        .output
        .or(manifest.output)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let lib_name = args
        .lib_name
        .or(manifest.lib_name)
        .unwrap_or_else(|| DEFAULT_LIB_NAME.to_string());
    let lib_path = args
        .lib_path
        .or(manifest.lib_path)
        .unwrap_or_else(|| DEFAULT_LIB_PATH.to_string());

    println!("Generating Jai bindings...");
    println!("  Header: {}", header_path.display());
    println!("  Output: {}", output_path.display());
    println!();

    let parser = HeaderParser::new();
    let parsed = parser.parse_file(&header_path)?;

    println!(
        "Parsed {}: {} colors, {} enums, {} typedefs, {} structs, {} functions",
        header_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy(),
        parsed.colors.len(),
        parsed.enums.len(),
        parsed.opaque_typedefs.len() + parsed.aliases.len(),
        parsed.structs.len(),
        parsed.functions.len()
    );

    if args.dump_decls {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
        return Ok(());
    }

    let generator = JaiGenerator::new(lib_name).with_lib_path(lib_path);
    generator.generate_to_file(&parsed, &output_path)?;

    println!();
    println!("Generated Jai bindings: {}", output_path.display());

    Ok(())
}
