use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path: drop `.` components and resolve `..` against
/// preceding normal components. Trailing separators disappear as a side effect
/// of component iteration.
#[must_use]
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                ) && normalized.pop();
                if !popped {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Check whether two directory paths name the same folder, ignoring `.`
/// components and trailing separators. Comparison is case-insensitive on
/// Windows and exact elsewhere.
#[must_use]
pub fn same_directory(a: &Path, b: &Path) -> bool {
    let a = normalize_lexically(a);
    let b = normalize_lexically(b);

    #[cfg(windows)]
    {
        a.to_string_lossy()
            .eq_ignore_ascii_case(&b.to_string_lossy())
    }
    #[cfg(not(windows))]
    {
        a == b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_directory_identical() {
        assert!(same_directory(Path::new("/media/Movies"), Path::new("/media/Movies")));
    }

    #[test]
    fn test_same_directory_trailing_separator() {
        assert!(same_directory(Path::new("/media/Movies/"), Path::new("/media/Movies")));
    }

    #[test]
    fn test_same_directory_cur_dir_components() {
        assert!(same_directory(
            Path::new("/media/./Movies"),
            Path::new("/media/Movies")
        ));
    }

    #[test]
    fn test_same_directory_parent_dir_component() {
        assert!(same_directory(
            Path::new("/media/Movies/Inception (2010)/.."),
            Path::new("/media/Movies")
        ));
    }

    #[test]
    fn test_different_directories() {
        assert!(!same_directory(
            Path::new("/media/Movies/Inception (2010)"),
            Path::new("/media/Movies")
        ));
    }

    #[test]
    fn test_normalize_keeps_leading_parent_dirs() {
        assert_eq!(
            normalize_lexically(Path::new("../Movies")),
            PathBuf::from("../Movies")
        );
    }
}
