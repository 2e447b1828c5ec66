use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ScriptError {
    Io { path: PathBuf, error: io::Error },
    /// A line of a script file is neither a delay nor a position.
    Syntax { line: usize, content: String },
    /// Recording would overwrite an existing script.
    AlreadyExists(PathBuf),
    /// The script has no position to click.
    Empty,
}

impl ScriptError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> ScriptError {
        let path = path.into();
        move |error| ScriptError::Io { path, error }
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Io { path, error } => write!(f, "{}: {}", path.display(), error),
            ScriptError::Syntax { line, content } => write!(
                f,
                "invalid script line {}: {:?}, record the script again",
                line, content
            ),
            ScriptError::AlreadyExists(path) => {
                write!(f, "script {} already exists", path.display())
            }
            ScriptError::Empty => write!(f, "the script has no position to click"),
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScriptError::Io { error, .. } => Some(error),
            _ => None,
        }
    }
}
