//! Lexical path resolution against the session cursor

use std::path::{Component, Path, PathBuf};

use crate::error::{CaravelError, CaravelResult};

/// Resolve a user-supplied path token against the current directory.
///
/// Absolute tokens resolve on their own; relative tokens join onto
/// `current_dir`. Resolution is purely lexical: `.` and `..` collapse
/// without touching the filesystem, and `..` above the root stays at
/// the root. An empty token is a missing argument.
pub fn resolve(token: &str, current_dir: &Path) -> CaravelResult<PathBuf> {
    if token.is_empty() {
        return Err(CaravelError::MissingArgument);
    }

    let raw = if Path::new(token).is_absolute() {
        PathBuf::from(token)
    } else {
        current_dir.join(token)
    };

    Ok(normalize(&raw))
}

/// Collapse `.`/`..` components and redundant separators.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
            Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            // pop() refuses to remove the root, which clamps `..` there
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(segment) => out.push(segment),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cwd() -> PathBuf {
        PathBuf::from("/home/user/docs")
    }

    #[test]
    fn test_empty_token_is_missing_argument() {
        let err = resolve("", &cwd()).unwrap_err();
        assert!(matches!(err, CaravelError::MissingArgument));
    }

    #[test]
    fn test_absolute_token_ignores_cwd() {
        let resolved = resolve("/etc/hosts", &cwd()).unwrap();
        assert_eq!(resolved, PathBuf::from("/etc/hosts"));
    }

    #[test]
    fn test_relative_token_joins_cwd() {
        let resolved = resolve("notes.txt", &cwd()).unwrap();
        assert_eq!(resolved, PathBuf::from("/home/user/docs/notes.txt"));
    }

    #[test]
    fn test_dot_components_collapse() {
        let resolved = resolve("./a/./b", &cwd()).unwrap();
        assert_eq!(resolved, PathBuf::from("/home/user/docs/a/b"));
    }

    #[test]
    fn test_dotdot_components_collapse() {
        let resolved = resolve("../pictures", &cwd()).unwrap();
        assert_eq!(resolved, PathBuf::from("/home/user/pictures"));
    }

    #[test]
    fn test_dotdot_clamped_at_root() {
        let resolved = resolve("../../../../..", &cwd()).unwrap();
        assert_eq!(resolved, PathBuf::from("/"));

        let resolved = resolve("/../etc", &cwd()).unwrap();
        assert_eq!(resolved, PathBuf::from("/etc"));
    }

    #[test]
    fn test_redundant_separators_removed() {
        let resolved = resolve("a//b///c", &cwd()).unwrap();
        assert_eq!(resolved, PathBuf::from("/home/user/docs/a/b/c"));
    }

    #[test]
    fn test_mixed_relative_walk() {
        let resolved = resolve("a/../b/./c/..", &cwd()).unwrap();
        assert_eq!(resolved, PathBuf::from("/home/user/docs/b"));
    }
}
