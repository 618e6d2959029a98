use std::path::Path;

use super::*;

fn classify_path(path: &str, root: &str) -> Option<ExtrasMatch> {
    let media = MediaPath::new(Path::new(path), Path::new(root)).unwrap();
    classify(&media)
}

#[test]
fn every_extras_folder_matches_case_insensitively() {
    for folder in EXTRAS_FOLDERS {
        assert_eq!(match_extras_folder(folder), Some(*folder));
        assert_eq!(match_extras_folder(&folder.to_uppercase()), Some(*folder));
        assert_eq!(match_extras_folder(&folder.to_lowercase()), Some(*folder));
    }
}

#[test]
fn extras_folder_ignores_bracket_annotation() {
    assert_eq!(match_extras_folder("Trailers [HD]"), Some("Trailers"));
}

#[test]
fn extras_folder_requires_whole_name() {
    assert_eq!(match_extras_folder("Old Trailers"), None);
    assert_eq!(match_extras_folder("Trailers 2"), None);
}

#[test]
fn every_inline_suffix_matches() {
    for suffix in INLINE_EXTRAS_SUFFIXES {
        let stem = format!("Heat (1995){suffix}");
        assert_eq!(match_inline_suffix(&stem), Some(*suffix));
        assert_eq!(match_inline_suffix(&stem.to_uppercase()), Some(*suffix));
    }
}

#[test]
fn inline_suffix_must_be_at_end_of_stem() {
    assert_eq!(match_inline_suffix("Heat-trailer (1995)"), None);
}

#[test]
fn classify_prefers_folder_rule() {
    let matched = classify_path("/m/Heat (1995)/Trailers/Heat-trailer.mkv", "/m").unwrap();
    assert_eq!(matched.rule, ExtrasRule::Folder);
    assert_eq!(matched.entry, "Trailers");
}

#[test]
fn classify_inline_suffix() {
    let matched = classify_path("/m/Heat (1995)/Heat (1995)-deleted.mkv", "/m").unwrap();
    assert_eq!(matched.rule, ExtrasRule::InlineSuffix);
    assert_eq!(matched.entry, "-deleted");
}

#[test]
fn classify_regular_movie_is_not_extra() {
    assert_eq!(classify_path("/m/Heat (1995)/Heat (1995).mkv", "/m"), None);
}

#[test]
fn classify_is_idempotent() {
    let first = classify_path("/m/X/Behind The Scenes/anything.mkv", "/m");
    let second = classify_path("/m/X/Behind The Scenes/anything.mkv", "/m");
    assert_eq!(first, second);
    assert!(first.is_some());
}
