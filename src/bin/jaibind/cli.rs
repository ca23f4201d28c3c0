//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Jaibind - A C header to Jai bindings generator
#[derive(Parser)]
#[command(name = "jaibind")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Translate a C header into a Jai bindings file
    Generate(GenerateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Path to the C header to translate
    #[arg(long)]
    pub header: Option<PathBuf>,

    /// Output path for the generated Jai file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Native library name bound by the foreign declarations
    #[arg(long)]
    pub lib_name: Option<String>,

    /// Relative path to the native library, used by the linkage footer
    #[arg(long)]
    pub lib_path: Option<String>,

    /// Path to the manifest (defaults to Jaibind.toml when present)
    #[arg(long)]
    pub manifest_path: Option<PathBuf>,

    /// Print the parsed declarations as JSON instead of generating
    #[arg(long)]
    pub dump_decls: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
