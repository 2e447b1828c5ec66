use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::script::{ScriptError, Step};

/// Appends recorded steps to a script file, one flushed line per step.
pub struct ScriptWriter {
    path: PathBuf,
    file: File,
}

impl ScriptWriter {
    /// Creates the script and its directory. An existing script is truncated
    /// when `overwrite` is set and refused otherwise.
    pub fn create(path: &Path, overwrite: bool) -> Result<ScriptWriter, ScriptError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(ScriptError::io(dir))?;
        }
        if path.exists() && !overwrite {
            return Err(ScriptError::AlreadyExists(path.to_path_buf()));
        }
        let file = File::create(path).map_err(ScriptError::io(path))?;
        Ok(ScriptWriter {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&mut self, step: Step) -> Result<(), ScriptError> {
        writeln!(self.file, "{}", step)
            .and_then(|_| self.file.flush())
            .map_err(ScriptError::io(&self.path))
    }
}
