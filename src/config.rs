//! Template search path configuration.
//!
//! Template roots named on the command line or in `TERMSCHEME_TEMPLATES`
//! play the part of system catalogs and are scanned first; the user's
//! template root is scanned last so that user templates extend or shadow
//! them.

use std::path::{Path, PathBuf};

/// Environment variable listing template roots (colon-separated).
pub const TEMPLATES_ENV: &str = "TERMSCHEME_TEMPLATES";

/// The user's template root: `<config dir>/termscheme/templates`.
pub fn user_templates_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("termscheme").join("templates"))
}

/// Build the ordered template search path: `roots` in order, then the user
/// root. Duplicates keep their last position, so the user root always ends
/// the list.
pub fn search_dirs(roots: &[PathBuf], user_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = Vec::with_capacity(roots.len() + 1);
    for dir in roots.iter().map(PathBuf::as_path).chain(user_dir) {
        dirs.retain(|d| d != dir);
        dirs.push(dir.to_path_buf());
    }
    dirs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_dirs_order() {
        let dirs = search_dirs(
            &[PathBuf::from("system"), PathBuf::from("project")],
            Some(Path::new("/home/me/.config/termscheme/templates")),
        );
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("system"),
                PathBuf::from("project"),
                PathBuf::from("/home/me/.config/termscheme/templates"),
            ]
        );
    }

    #[test]
    fn test_search_dirs_without_user_dir() {
        let dirs = search_dirs(&[PathBuf::from("a")], None);
        assert_eq!(dirs, vec![PathBuf::from("a")]);
    }

    #[test]
    fn test_search_dirs_deduplicates() {
        let dirs = search_dirs(
            &[PathBuf::from("a"), PathBuf::from("b"), PathBuf::from("a")],
            None,
        );
        assert_eq!(dirs, vec![PathBuf::from("b"), PathBuf::from("a")]);
    }

    #[test]
    fn test_user_dir_stays_last_when_also_listed() {
        let user = Path::new("/home/me/.config/termscheme/templates");
        let dirs = search_dirs(&[user.to_path_buf(), PathBuf::from("system")], Some(user));
        assert_eq!(dirs, vec![PathBuf::from("system"), user.to_path_buf()]);
    }

    #[test]
    fn test_user_templates_dir_suffix() {
        if let Some(dir) = user_templates_dir() {
            assert!(dir.ends_with("termscheme/templates"));
        }
    }
}
