//! Recursive discovery of candidate game-log files.
//!
//! Any file whose name contains the case-insensitive substring `inning` is a
//! candidate; everything else is traversed but not read. Results are sorted
//! by path so a run's file order (and therefore its diagnostics) is
//! deterministic across platforms.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::AppError;

/// Walk `root` and collect candidate game-log paths.
///
/// Fails with exit code 2 when the root is not a readable directory; per-file
/// problems surface later, at read/parse time, where they can be skipped.
pub fn discover_game_logs(root: &Path) -> Result<Vec<PathBuf>, AppError> {
    if !root.is_dir() {
        return Err(AppError::new(
            2,
            format!("Data directory '{}' does not exist or is not a directory.", root.display()),
        ));
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            AppError::new(2, format!("Failed to walk '{}': {e}", root.display()))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if is_game_log_name(&entry.file_name().to_string_lossy()) {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}

/// Check whether a file name marks a candidate game log.
///
/// Pure function: name in, boolean out.
fn is_game_log_name(name: &str) -> bool {
    name.to_lowercase().contains("inning")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn name_filter_is_case_insensitive() {
        assert!(is_game_log_name("inning_all.xml"));
        assert!(is_game_log_name("Innings_01.xml"));
        assert!(is_game_log_name("GAME_INNING.XML"));
        assert!(!is_game_log_name("boxscore.xml"));
        assert!(!is_game_log_name("players.xml"));
    }

    #[test]
    fn walks_subdirectories_and_filters_names() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("2008/game_01");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("inning_all.xml"), "<game/>").unwrap();
        fs::write(nested.join("boxscore.xml"), "<boxscore/>").unwrap();
        fs::write(dir.path().join("Inning_02.xml"), "<game/>").unwrap();

        let paths = discover_game_logs(dir.path()).unwrap();
        assert_eq!(paths.len(), 2);
        assert!(paths.iter().all(|p| {
            p.file_name()
                .unwrap()
                .to_string_lossy()
                .to_lowercase()
                .contains("inning")
        }));
    }

    #[test]
    fn missing_root_is_an_input_error() {
        let err = discover_game_logs(Path::new("/definitely/not/here")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
