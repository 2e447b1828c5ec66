use std::fs;
use std::path::Path;

use itertools::Itertools;
use log::warn;
use walkdir::WalkDir;

use crate::script::ScriptError;

/// Names of the scripts stored directly in `dir`, sorted. The directory is
/// created when missing.
pub fn list_scripts(dir: &Path) -> Result<Vec<String>, ScriptError> {
    fs::create_dir_all(dir).map_err(ScriptError::io(dir))?;

    let names = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .sorted()
        .collect();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use std::fs::{create_dir, File};

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn lists_files_only() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("mouse.txt")).unwrap();
        File::create(dir.path().join("a.txt")).unwrap();
        create_dir(dir.path().join("nested")).unwrap();
        File::create(dir.path().join("nested").join("deep.txt")).unwrap();

        assert_eq!(
            list_scripts(dir.path()).unwrap(),
            vec!["a.txt".to_string(), "mouse.txt".to_string()]
        );
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tempdir().unwrap();
        let scripts = dir.path().join("config");

        assert!(list_scripts(&scripts).unwrap().is_empty());
        assert!(scripts.is_dir());
    }
}
