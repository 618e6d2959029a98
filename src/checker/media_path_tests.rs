use std::path::Path;

use super::*;

#[test]
fn decomposes_file_in_movie_folder() {
    let path = Path::new("/media/Movies/Heat (1995)/Heat (1995).mkv");
    let media = MediaPath::new(path, Path::new("/media/Movies")).unwrap();

    assert_eq!(media.file_name, "Heat (1995).mkv");
    assert_eq!(media.stem, "Heat (1995)");
    assert_eq!(media.extension, "mkv");
    assert_eq!(media.parent_folder_name, "Heat (1995)");
    assert!(!media.at_root);
}

#[test]
fn detects_file_at_root_with_trailing_separator() {
    let path = Path::new("/media/Movies/Heat (1995).mkv");
    let media = MediaPath::new(path, Path::new("/media/Movies/")).unwrap();

    assert!(media.at_root);
    assert_eq!(media.parent_folder_name, "Movies");
}

#[test]
fn stem_keeps_inner_dots() {
    let path = Path::new("/m/Mr. Smith (2005)/Mr. Smith (2005).mp4");
    let media = MediaPath::new(path, Path::new("/m")).unwrap();

    assert_eq!(media.stem, "Mr. Smith (2005)");
    assert_eq!(media.extension, "mp4");
}

#[test]
fn file_without_extension_has_empty_extension() {
    let media = MediaPath::new(Path::new("/m/README"), Path::new("/m")).unwrap();
    assert_eq!(media.stem, "README");
    assert_eq!(media.extension, "");
}

#[test]
fn hidden_file_keeps_leading_dot_in_stem() {
    let media = MediaPath::new(Path::new("/m/.hidden"), Path::new("/m")).unwrap();
    assert_eq!(media.stem, ".hidden");
    assert_eq!(media.extension, "");
}

#[test]
fn root_path_is_malformed() {
    let err = MediaPath::new(Path::new("/"), Path::new("/")).unwrap_err();
    assert_eq!(err, MalformedReason::NoFileName);
}

#[test]
fn parent_dir_terminal_is_malformed() {
    let err = MediaPath::new(Path::new("/m/.."), Path::new("/m")).unwrap_err();
    assert_eq!(err, MalformedReason::NoFileName);
}

#[cfg(unix)]
#[test]
fn non_utf8_file_name_is_malformed() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let name = OsStr::from_bytes(b"Heat \xFF (1995).mkv");
    let path = Path::new("/m").join(name);
    let err = MediaPath::new(&path, Path::new("/m")).unwrap_err();
    assert_eq!(err, MalformedReason::NotUtf8);
}
