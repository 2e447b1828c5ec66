//! Click scripts: the files recorded in gather mode and replayed in exec mode.
//!
//! A script is a text file with one step per line:
//!
//! ```text
//! Position:120:340
//! Delay:850
//! Position:400:60
//! ```
//!
//! The n-th `Delay` is the wait after the n-th `Position`. Files written by
//! older versions use localized markers, which are still read.

use std::fmt;
use std::fs;
use std::path::Path;

pub use error::ScriptError;
pub use library::list_scripts;
pub use writer::ScriptWriter;

mod error;
mod library;
mod writer;

pub const DELAY_MARK: &str = "Delay";
pub const POSITION_MARK: &str = "Position";

const LEGACY_DELAY_MARK: &str = "延迟";
const LEGACY_POSITION_MARK: &str = "坐标";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Wait, in milliseconds.
    Delay(u64),
    /// Move to the point and click the left button.
    Position { x: i32, y: i32 },
}

impl Step {
    fn parse(line: &str) -> Option<Step> {
        let parts: Vec<&str> = line.split(':').map(str::trim).collect();
        match parts.as_slice() {
            [mark, ms] if is_delay_mark(mark) => ms.parse().ok().map(Step::Delay),
            [mark, x, y] if is_position_mark(mark) => Some(Step::Position {
                x: x.parse().ok()?,
                y: y.parse().ok()?,
            }),
            _ => None,
        }
    }
}

fn is_delay_mark(mark: &str) -> bool {
    mark == DELAY_MARK || mark == LEGACY_DELAY_MARK
}

fn is_position_mark(mark: &str) -> bool {
    mark == POSITION_MARK || mark == LEGACY_POSITION_MARK
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Delay(ms) => write!(f, "{}:{}", DELAY_MARK, ms),
            Step::Position { x, y } => write!(f, "{}:{}:{}", POSITION_MARK, x, y),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Script {
    pub positions: Vec<(i32, i32)>,
    pub delays: Vec<u64>,
}

impl Script {
    pub fn parse(text: &str) -> Result<Script, ScriptError> {
        let mut script = Script::default();
        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match Step::parse(line) {
                Some(Step::Delay(ms)) => script.delays.push(ms),
                Some(Step::Position { x, y }) => script.positions.push((x, y)),
                None => {
                    return Err(ScriptError::Syntax {
                        line: index + 1,
                        content: line.to_owned(),
                    })
                }
            }
        }
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Script, ScriptError> {
        let text = fs::read_to_string(path).map_err(ScriptError::io(path))?;
        Script::parse(&text)
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// How long to wait after clicking the `index`-th position: the recorded
    /// delay if there is one, `min_interval` otherwise.
    pub fn wait_after(&self, index: usize, min_interval: u64) -> u64 {
        self.delays.get(index).copied().unwrap_or(min_interval)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn parse_recorded_script() {
        let script = Script::parse("Position:120:340\nDelay:850\nPosition:400:60\n").unwrap();
        assert_eq!(
            script,
            Script {
                positions: vec![(120, 340), (400, 60)],
                delays: vec![850],
            }
        );
    }

    #[test]
    fn parse_legacy_markers() {
        let script = Script::parse("坐标:1:2\n延迟:600\n坐标:3:4\n").unwrap();
        assert_eq!(script.positions, vec![(1, 2), (3, 4)]);
        assert_eq!(script.delays, vec![600]);
    }

    #[test]
    fn blank_lines_are_ignored() {
        let script = Script::parse("\nPosition:1:1\r\n\n  \n").unwrap();
        assert_eq!(script.positions, vec![(1, 1)]);
    }

    #[test_case("Position:1" ; "missing coordinate")]
    #[test_case("Position:a:2" ; "not a number")]
    #[test_case("Delay:-5" ; "negative delay")]
    #[test_case("Click:1:2" ; "unknown mark")]
    #[test_case("Delay:1:2" ; "delay with coordinates")]
    fn malformed_line(line: &str) {
        let text = format!("Position:0:0\n{}\n", line);
        match Script::parse(&text).unwrap_err() {
            ScriptError::Syntax { line: number, content } => {
                assert_eq!(number, 2);
                assert_eq!(content, line);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn wait_falls_back_to_min_interval() {
        let script = Script {
            positions: vec![(0, 0), (1, 1), (2, 2)],
            delays: vec![700],
        };
        assert_eq!(script.wait_after(0, 500), 700);
        assert_eq!(script.wait_after(1, 500), 500);
        assert_eq!(script.wait_after(2, 500), 500);
    }

    #[test]
    fn step_lines() {
        assert_eq!(Step::Delay(30).to_string(), "Delay:30");
        assert_eq!(Step::Position { x: -1, y: 8 }.to_string(), "Position:-1:8");
        assert_eq!(
            Step::parse(&Step::Position { x: 5, y: 6 }.to_string()),
            Some(Step::Position { x: 5, y: 6 })
        );
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Script::load(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, ScriptError::Io { .. }));
    }
}
