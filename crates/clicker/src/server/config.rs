//! Server configuration, read from `clicker.json` in the working directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::server::Result;

pub const FILE_NAME: &str = "clicker.json";

/// Every key is optional; a missing file means the defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    #[serde(skip)]
    pub(crate) root_path: PathBuf,
    /// Directory holding the scripts, relative to the root path.
    pub scripts_dir: PathBuf,
    /// Script selected when the client starts.
    pub config_name: String,
    /// Default minimum interval between clicks, in milliseconds.
    pub min_interval: i64,
    /// Seconds announced before a run starts.
    pub countdown_secs: u64,
    /// Whether recording may replace an existing script.
    pub overwrite_scripts: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            root_path: PathBuf::new(),
            scripts_dir: PathBuf::from("config"),
            config_name: "mouse.txt".to_string(),
            min_interval: 500,
            countdown_secs: 3,
            overwrite_scripts: true,
        }
    }
}

impl Config {
    pub fn new(root_path: PathBuf) -> Self {
        Config {
            root_path,
            ..Config::default()
        }
    }

    /// Reads `clicker.json` from `root_path`, falling back to the defaults
    /// when there is none.
    pub fn load(root_path: PathBuf) -> Result<Self> {
        let path = root_path.join(FILE_NAME);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("no {} found, using defaults", path.display());
                return Ok(Config::new(root_path));
            }
            Err(e) => return Err(format!("Failed to read {}: {}", path.display(), e).into()),
        };
        let mut config: Config = serde_json::from_str(&text)
            .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;
        config.root_path = root_path;
        Ok(config)
    }

    pub fn root_path(&self) -> &PathBuf {
        &self.root_path
    }

    pub fn scripts_path(&self) -> PathBuf {
        self.root_path.join(&self.scripts_dir)
    }

    pub fn script_path(&self, name: &str) -> PathBuf {
        self.scripts_path().join(name)
    }
}

/// Script names are plain file names inside the scripts directory.
pub(crate) fn is_valid_script_name(name: &str) -> bool {
    let path = Path::new(name);
    !name.is_empty()
        && path.file_name().map(|file| file == path.as_os_str()) == Some(true)
        && !name.contains(['/', '\\'])
}
