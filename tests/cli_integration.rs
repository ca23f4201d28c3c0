//! CLI integration tests for jaibind.
//!
//! These tests drive the full pipeline from a header file on disk to a
//! generated Jai file.

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// A small raylib-shaped header exercising every declaration category.
const SAMPLE_HEADER: &str = r#"
#ifndef RAYLIB_H
#define RAYLIB_H

#define LIGHTGRAY  CLITERAL(Color){ 200, 200, 200, 255 }   // Light Gray
#define MAROON     CLITERAL(Color){ 190, 33, 55, 255 }     // Maroon

typedef enum { false, true } bool;

typedef enum {
    LOG_ALL = 0,        // Display all logs
    LOG_TRACE,          // Trace logging
    LOG_DEBUG           // Debug logging
} TraceLogLevel;

typedef struct Vector2 {
    float x;                // Vector x component
    float y;                // Vector y component
} Vector2;

typedef struct Mesh {
    int vertexCount;        // Number of vertices stored in arrays
    float *vertices;        // Vertex position (XYZ - 3 components per vertex)
    unsigned char *colors;  // Vertex colors (RGBA - 4 components per vertex)
} Mesh;

typedef struct rAudioBuffer rAudioBuffer;

typedef Texture TextureCubemap;

RLAPI void InitWindow(int width, int height, const char *title);
RLAPI bool WindowShouldClose(void);
RLAPI const char *GetMonitorName(int monitor);
RLAPI void TraceLog(int logType, const char *text, ...);

#endif // RAYLIB_H
"#;

/// Get the jaibind binary command.
fn jaibind() -> Command {
    Command::cargo_bin("jaibind").unwrap()
}

/// Create a temp dir seeded with the sample header.
fn project_with_header() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("raylib.h"), SAMPLE_HEADER).unwrap();
    tmp
}

// ============================================================================
// jaibind generate
// ============================================================================

#[test]
fn test_generate_writes_bindings_file() {
    let tmp = project_with_header();

    jaibind()
        .args(["generate", "--header", "raylib.h", "--output", "raylib.jai"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated Jai bindings"));

    let out = fs::read_to_string(tmp.path().join("raylib.jai")).unwrap();

    // Banner comes first.
    assert!(out.starts_with("//\n// AUTOGENERATED\n//\n"));

    // One declaration of each category made it through.
    assert!(out.contains("LIGHTGRAY :: Color.{  200, 200, 200, 255  };"));
    assert!(out.contains("TraceLogCallback :: #type (logType: s32, text: *u8, args: ..*u8);"));
    assert!(out.contains("TraceLogLevel :: enum {"));
    assert!(out.contains("LOG_ALL :: 0;"));
    assert!(out.contains(
        "rAudioBuffer :: struct { /* only used as a pointer in this header */ }"
    ));
    assert!(out.contains("TextureCubemap :: Texture;"));
    assert!(out.contains("    vertices: *float;"));
    assert!(out.contains("    colors: *u8;"));
    assert!(out.contains(
        "InitWindow :: (width: s32, height: s32, title: *u8)  #foreign raylib_native \"InitWindow\";"
    ));
    assert!(out.contains(
        "GetMonitorName :: (monitor: s32) -> *u8 #foreign raylib_native \"GetMonitorName\";"
    ));
    assert!(out.contains(
        "TraceLog :: (logType: s32, text: *u8, args: ..*u8)  #foreign raylib_native \"TraceLog\";"
    ));
    assert!(out.contains("raylib_native :: #foreign_library,no_dll \"raylib/lib/raylib\";"));

    // The bool compat enum never appears as an enum block.
    assert!(!out.contains("bool :: enum"));
}

#[test]
fn test_generate_is_deterministic() {
    let tmp = project_with_header();

    for output in ["first.jai", "second.jai"] {
        jaibind()
            .args(["generate", "--header", "raylib.h", "--output", output])
            .current_dir(tmp.path())
            .assert()
            .success();
    }

    let first = fs::read(tmp.path().join("first.jai")).unwrap();
    let second = fs::read(tmp.path().join("second.jai")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_generate_fails_on_missing_header() {
    let tmp = TempDir::new().unwrap();

    jaibind()
        .args(["generate", "--header", "missing.h", "--output", "out.jai"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read header"));
}

#[test]
fn test_generate_dump_decls_prints_json() {
    let tmp = project_with_header();

    jaibind()
        .args(["generate", "--header", "raylib.h", "--output", "out.jai", "--dump-decls"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"functions\""))
        .stdout(predicate::str::contains("\"InitWindow\""));

    // Dumping replaces generation.
    assert!(!tmp.path().join("out.jai").exists());
}

#[test]
fn test_generate_reads_manifest() {
    let tmp = project_with_header();
    fs::write(
        tmp.path().join("Jaibind.toml"),
        "header = \"raylib.h\"\noutput = \"from_manifest.jai\"\nlib_name = \"mylib\"\n",
    )
    .unwrap();

    jaibind()
        .args(["generate"])
        .current_dir(tmp.path())
        .assert()
        .success();

    let out = fs::read_to_string(tmp.path().join("from_manifest.jai")).unwrap();
    assert!(out.contains("#foreign mylib \"InitWindow\";"));
}

#[test]
fn test_generate_flag_overrides_manifest() {
    let tmp = project_with_header();
    fs::write(
        tmp.path().join("Jaibind.toml"),
        "header = \"raylib.h\"\noutput = \"from_manifest.jai\"\n",
    )
    .unwrap();

    jaibind()
        .args(["generate", "--output", "from_flag.jai"])
        .current_dir(tmp.path())
        .assert()
        .success();

    assert!(tmp.path().join("from_flag.jai").exists());
    assert!(!tmp.path().join("from_manifest.jai").exists());
}

#[test]
fn test_generate_fails_on_bad_manifest() {
    let tmp = project_with_header();
    fs::write(tmp.path().join("Jaibind.toml"), "unknown_key = true\n").unwrap();

    jaibind()
        .args(["generate"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse manifest"));
}

// ============================================================================
// jaibind completions
// ============================================================================

#[test]
fn test_completions_bash() {
    jaibind()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jaibind"));
}
