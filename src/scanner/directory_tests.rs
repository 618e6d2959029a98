use std::fs;
use std::path::Path;

use super::*;
use crate::config::ScannerConfig;
use crate::scanner::MediaFilter;
use tempfile::TempDir;

struct AcceptAllFilter;

impl FileFilter for AcceptAllFilter {
    fn should_include(&self, _path: &Path) -> bool {
        true
    }

    fn should_descend(&self, _dir: &Path) -> bool {
        true
    }
}

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}

fn media_scanner() -> DirectoryScanner<MediaFilter> {
    DirectoryScanner::new(MediaFilter::from_config(&ScannerConfig::default()).unwrap())
}

fn names(files: &[PathBuf], root: &Path) -> Vec<String> {
    let root = dunce::canonicalize(root).unwrap();
    files
        .iter()
        .map(|p| {
            p.strip_prefix(&root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn scanner_finds_files_in_subdirectories() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "Inception (2010)/Inception (2010).mkv");

    let files = DirectoryScanner::new(AcceptAllFilter)
        .scan(temp_dir.path())
        .unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("Inception (2010).mkv"));
    assert!(files[0].is_absolute());
}

#[test]
fn scanner_returns_sorted_traversal_order() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "Zodiac (2007)/Zodiac (2007).mkv");
    touch(temp_dir.path(), "Alien (1979)/Alien (1979).mkv");
    touch(temp_dir.path(), "Heat (1995).mp4");

    let files = media_scanner().scan(temp_dir.path()).unwrap();

    assert_eq!(
        names(&files, temp_dir.path()),
        vec![
            "Alien (1979)/Alien (1979).mkv",
            "Heat (1995).mp4",
            "Zodiac (2007)/Zodiac (2007).mkv",
        ]
    );
}

#[test]
fn scanner_skips_non_media_files() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "Heat (1995)/Heat (1995).mkv");
    touch(temp_dir.path(), "Heat (1995)/poster.jpg");
    touch(temp_dir.path(), "Heat (1995)/Heat (1995).en.srt");

    let files = media_scanner().scan(temp_dir.path()).unwrap();

    assert_eq!(names(&files, temp_dir.path()), vec!["Heat (1995)/Heat (1995).mkv"]);
}

#[test]
fn scanner_skips_plex_versions_subtree() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "Heat (1995)/Heat (1995).mkv");
    touch(temp_dir.path(), "Heat (1995)/Plex Versions/Optimized for TV/Heat (1995).mp4");
    touch(temp_dir.path(), "Alien (1979)/PLEX VERSIONS/Alien (1979).mp4");

    let files = media_scanner().scan(temp_dir.path()).unwrap();

    assert_eq!(names(&files, temp_dir.path()), vec!["Heat (1995)/Heat (1995).mkv"]);
}

#[test]
fn scanner_applies_glob_excludes() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "Heat (1995)/Heat (1995).mkv");
    touch(temp_dir.path(), "@eaDir/Heat (1995).mkv");

    let filter = MediaFilter::new(
        &["mkv".to_string()],
        &[],
        &["**/@eaDir".to_string()],
    )
    .unwrap();
    let files = DirectoryScanner::new(filter).scan(temp_dir.path()).unwrap();

    assert_eq!(names(&files, temp_dir.path()), vec!["Heat (1995)/Heat (1995).mkv"]);
}

#[test]
fn scanner_empty_root_yields_nothing() {
    let temp_dir = TempDir::new().unwrap();
    assert!(media_scanner().scan(temp_dir.path()).unwrap().is_empty());
}

#[test]
fn scanner_missing_root_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope");

    let err = media_scanner().scan(&missing).unwrap_err();
    assert!(matches!(err, ShelfGuardError::RootNotFound(_)));
}

#[test]
fn scanner_file_root_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "Heat (1995).mkv");

    let err = media_scanner()
        .scan(&temp_dir.path().join("Heat (1995).mkv"))
        .unwrap_err();
    assert!(matches!(err, ShelfGuardError::RootNotDirectory(_)));
}
