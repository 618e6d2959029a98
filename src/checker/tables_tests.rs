use super::*;

#[test]
fn extras_folders_are_unique_ignoring_case() {
    for (i, a) in EXTRAS_FOLDERS.iter().enumerate() {
        for b in &EXTRAS_FOLDERS[i + 1..] {
            assert!(!a.eq_ignore_ascii_case(b), "duplicate extras folder: {a}");
        }
    }
}

#[test]
fn inline_suffixes_start_with_dash_and_are_lowercase() {
    for suffix in INLINE_EXTRAS_SUFFIXES {
        assert!(suffix.starts_with('-'), "{suffix}");
        assert_eq!(*suffix, suffix.to_lowercase());
    }
}

#[test]
fn every_extras_folder_has_an_inline_counterpart() {
    // "Deleted Scenes" -> "-deleted", "Behind The Scenes" -> "-behindthescenes", ...
    assert_eq!(EXTRAS_FOLDERS.len(), INLINE_EXTRAS_SUFFIXES.len());
}

#[test]
fn movie_tag_prefixes_include_edition() {
    assert!(MOVIE_TAG_PREFIXES.contains(&EDITION_PREFIX));
    assert_eq!(MOVIE_TAG_PREFIXES.len(), 3);
}

#[test]
fn show_tag_prefixes_exclude_edition() {
    assert!(!SHOW_TAG_PREFIXES.contains(&EDITION_PREFIX));
}

#[test]
fn split_alternation_lists_every_token() {
    let alternation = split_token_alternation();
    assert_eq!(alternation, "cd|disc|disk|dvd|part|pt");
}

#[test]
fn default_extensions_are_lowercase_without_dot() {
    for ext in DEFAULT_EXTENSIONS {
        assert!(!ext.starts_with('.'));
        assert_eq!(*ext, ext.to_lowercase());
    }
}
