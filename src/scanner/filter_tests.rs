use std::path::Path;

use super::*;

fn default_filter() -> MediaFilter {
    MediaFilter::from_config(&ScannerConfig::default()).unwrap()
}

#[test]
fn filter_by_default_extensions() {
    let filter = default_filter();

    assert!(filter.should_include(Path::new("Inception (2010)/Inception (2010).mkv")));
    assert!(filter.should_include(Path::new("Heat (1995).mp4")));
    assert!(filter.should_include(Path::new("Alien (1979).avi")));
    assert!(!filter.should_include(Path::new("Inception (2010)/poster.jpg")));
    assert!(!filter.should_include(Path::new("Inception (2010)/Inception (2010).srt")));
}

#[test]
fn filter_extension_is_case_insensitive() {
    let filter = default_filter();

    assert!(filter.should_include(Path::new("Heat (1995).MKV")));
    assert!(filter.should_include(Path::new("Heat (1995).Mp4")));
}

#[test]
fn filter_without_extension_is_rejected() {
    assert!(!default_filter().should_include(Path::new("Inception (2010)/README")));
}

#[test]
fn filter_extensions_with_leading_dot() {
    let filter = MediaFilter::new(&[".m4v".to_string()], &[], &[]).unwrap();

    assert!(filter.should_include(Path::new("Heat (1995).m4v")));
    assert!(!filter.should_include(Path::new("Heat (1995).mkv")));
}

#[test]
fn filter_skips_plex_versions_any_case() {
    let filter = default_filter();

    assert!(!filter.should_descend(Path::new("/lib/Heat (1995)/Plex Versions")));
    assert!(!filter.should_descend(Path::new("/lib/Heat (1995)/plex versions")));
    assert!(filter.should_descend(Path::new("/lib/Heat (1995)")));
}

#[test]
fn filter_exclude_patterns() {
    let filter = MediaFilter::new(
        &["mkv".to_string()],
        &[],
        &["**/Trash/**".to_string(), "**/*.sample.mkv".to_string()],
    )
    .unwrap();

    assert!(filter.should_include(Path::new("/lib/Heat (1995)/Heat (1995).mkv")));
    assert!(!filter.should_include(Path::new("/lib/Trash/Heat (1995).mkv")));
    assert!(!filter.should_include(Path::new("/lib/Heat (1995)/Heat (1995).sample.mkv")));
}

#[test]
fn filter_exclude_pattern_prunes_directory() {
    let filter = MediaFilter::new(&["mkv".to_string()], &[], &["**/Trash".to_string()]).unwrap();

    assert!(!filter.should_descend(Path::new("/lib/Trash")));
    assert!(filter.should_descend(Path::new("/lib/Movies")));
}

#[test]
fn filter_invalid_pattern_returns_error() {
    let result = MediaFilter::new(&[], &[], &["[invalid".to_string()]);
    assert!(matches!(
        result,
        Err(ShelfGuardError::InvalidPattern { .. })
    ));
}
