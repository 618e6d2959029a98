#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the shelf-guard binary.
#[macro_export]
macro_rules! shelf_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("shelf-guard"))
    };
}

/// Process exit status for argument, configuration and scan errors (`-1`).
pub const EXIT_FAILURE_CODE: i32 = if cfg!(windows) { -1 } else { 255 };

/// Creates a temporary directory with a media library under `library/`.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        let fixture = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };
        fixture.create_dir("library");
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Creates empty media files below `library/`.
    pub fn create_media(&self, relative_paths: &[&str]) {
        for relative in relative_paths {
            self.create_file(&format!("library/{relative}"), "");
        }
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn library(&self) -> PathBuf {
        self.dir.path().join("library")
    }

    /// Writes `.shelf-guard.toml` next to the library.
    pub fn create_config(&self, content: &str) {
        self.create_file(".shelf-guard.toml", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A small, correctly named movie library.
pub const CLEAN_MOVIES: &[&str] = &[
    "Inception (2010)/Inception (2010).mkv",
    "Inception (2010)/Behind The Scenes/Dreams.mkv",
    "Heat (1995)/Heat (1995) - cd1.mp4",
    "Heat (1995)/Heat (1995) - cd2.mp4",
    "Alien (1979).avi",
];

/// Library with one file per naming problem.
pub const BROKEN_MOVIES: &[&str] = &[
    "Inception (2010)/Inception (2010).mkv",
    "Inception (2010)/Inception (2010) {foo-123}.mkv",
    "Inception (1850)/Inception (1850).mkv",
    "Heat/Heat (1995).mkv",
    "Alien (1979) - cd1.mkv",
    "Zodiac/Zodiac.mkv",
];

/// Config that switches to the embedded grammar and reports every failure.
pub const EMBEDDED_CONFIG: &str = r#"
[naming]
grammar = "embedded"
accumulate = true
"#;
