//! The `Jaibind.toml` manifest.
//!
//! An optional on-disk manifest supplies defaults for the generate
//! command; command-line flags override it, and built-in defaults cover
//! anything left unset.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default manifest file name, looked up in the working directory.
pub const MANIFEST_FILE: &str = "Jaibind.toml";

/// Default path to the header to translate.
pub const DEFAULT_HEADER: &str = "raylib/include/raylib.h";

/// Default output path for the generated Jai file.
pub const DEFAULT_OUTPUT: &str = "raylib.jai";

/// Default native library name bound by the foreign declarations.
pub const DEFAULT_LIB_NAME: &str = "raylib_native";

/// Default relative path to the native library.
pub const DEFAULT_LIB_PATH: &str = "raylib/lib/raylib";

/// Generation settings read from `Jaibind.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Path to the header to translate
    #[serde(default)]
    pub header: Option<PathBuf>,

    /// Output path for the generated Jai file
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Native library name bound by the foreign declarations
    #[serde(default)]
    pub lib_name: Option<String>,

    /// Relative path to the native library, used by the linkage footer
    #[serde(default)]
    pub lib_path: Option<String>,
}

impl Manifest {
    /// Load a manifest from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("failed to parse manifest: {}", path.display()))
    }

    /// Load a manifest if the file exists, otherwise return defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Manifest::load(path)
        } else {
            Ok(Manifest::default())
        }
    }
}
