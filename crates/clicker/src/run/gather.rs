use std::time::Instant;

use crossbeam_channel::Receiver;
use log::debug;

use clicker_types::{MouseButton, MouseEvent};

use crate::run::{Outcome, RunEvent};
use crate::script::{ScriptError, ScriptWriter, Step};

/// A click written to the script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Recorded {
    pub x: i32,
    pub y: i32,
    /// Milliseconds since the previous click, never below the minimum
    /// interval. `None` for the first click.
    pub interval: Option<u64>,
}

/// Turns left clicks into script steps.
pub struct Recorder {
    writer: ScriptWriter,
    min_interval: u64,
    last_click: Option<Instant>,
}

impl Recorder {
    pub fn new(writer: ScriptWriter, min_interval: u64) -> Recorder {
        Recorder {
            writer,
            min_interval,
            last_click: None,
        }
    }

    /// Records a click that happened at `at`. Clicks of other buttons are
    /// ignored.
    pub fn on_click(
        &mut self,
        event: &MouseEvent,
        at: Instant,
    ) -> Result<Option<Recorded>, ScriptError> {
        if event.button != MouseButton::Left {
            debug!("ignoring {:?} click", event.button);
            return Ok(None);
        }

        let interval = match self.last_click {
            Some(last) => {
                let elapsed = at.saturating_duration_since(last).as_millis();
                let elapsed = u64::try_from(elapsed).unwrap_or(u64::MAX);
                let interval = elapsed.max(self.min_interval);
                self.writer.record(Step::Delay(interval))?;
                Some(interval)
            }
            None => None,
        };
        self.writer.record(Step::Position {
            x: event.x,
            y: event.y,
        })?;
        self.last_click = Some(at);

        Ok(Some(Recorded {
            x: event.x,
            y: event.y,
            interval,
        }))
    }
}

/// Records clicks until the run is cancelled.
pub fn record(
    mut recorder: Recorder,
    events: &Receiver<RunEvent>,
    alert: &mut dyn FnMut(String),
) -> Result<Outcome, ScriptError> {
    alert("Recording: click the left mouse button".to_string());
    debug!("recording into {}", recorder.writer.path().display());

    while let Ok(event) = events.recv() {
        match event {
            RunEvent::Cancel => break,
            RunEvent::Click(click) => {
                if let Some(recorded) = recorder.on_click(&click, Instant::now())? {
                    alert(format!(
                        "Recording: x={}, y={}, interval={} ms",
                        recorded.x,
                        recorded.y,
                        recorded.interval.unwrap_or(0)
                    ));
                }
            }
        }
    }
    Ok(Outcome::Stopped)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::Duration;

    use crossbeam_channel::unbounded;
    use ntest::timeout;
    use tempfile::{tempdir, TempDir};

    use super::*;

    fn click(x: i32, y: i32, button: MouseButton) -> MouseEvent {
        MouseEvent { x, y, button }
    }

    fn recorder(min_interval: u64) -> (TempDir, std::path::PathBuf, Recorder) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mouse.txt");
        let writer = ScriptWriter::create(&path, true).unwrap();
        (dir, path, Recorder::new(writer, min_interval))
    }

    #[test]
    fn delays_are_written_between_clicks() {
        let (_dir, path, mut recorder) = recorder(100);
        let start = Instant::now();

        let first = recorder
            .on_click(&click(1, 2, MouseButton::Left), start)
            .unwrap();
        let second = recorder
            .on_click(
                &click(3, 4, MouseButton::Left),
                start + Duration::from_millis(750),
            )
            .unwrap();

        assert_eq!(
            first,
            Some(Recorded {
                x: 1,
                y: 2,
                interval: None
            })
        );
        assert_eq!(
            second,
            Some(Recorded {
                x: 3,
                y: 4,
                interval: Some(750)
            })
        );
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Position:1:2\nDelay:750\nPosition:3:4\n"
        );
    }

    #[test]
    fn fast_clicks_are_slowed_to_min_interval() {
        let (_dir, path, mut recorder) = recorder(500);
        let start = Instant::now();
        recorder
            .on_click(&click(0, 0, MouseButton::Left), start)
            .unwrap();
        recorder
            .on_click(
                &click(5, 5, MouseButton::Left),
                start + Duration::from_millis(20),
            )
            .unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Position:0:0\nDelay:500\nPosition:5:5\n"
        );
    }

    #[test]
    fn other_buttons_are_ignored() {
        let (_dir, path, mut recorder) = recorder(0);
        let now = Instant::now();
        assert_eq!(
            recorder
                .on_click(&click(1, 1, MouseButton::Right), now)
                .unwrap(),
            None
        );
        assert_eq!(
            recorder
                .on_click(&click(1, 1, MouseButton::Center), now)
                .unwrap(),
            None
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    #[timeout(2000)]
    fn records_until_cancelled() {
        let (_dir, path, recorder) = recorder(0);
        let (sender, events) = unbounded();
        sender
            .send(RunEvent::Click(click(7, 8, MouseButton::Left)))
            .unwrap();
        sender
            .send(RunEvent::Click(click(9, 9, MouseButton::Right)))
            .unwrap();
        sender.send(RunEvent::Cancel).unwrap();
        sender
            .send(RunEvent::Click(click(1, 1, MouseButton::Left)))
            .unwrap();

        let mut alerts = vec![];
        let outcome = record(recorder, &events, &mut |msg| alerts.push(msg)).unwrap();

        assert_eq!(outcome, Outcome::Stopped);
        assert_eq!(
            alerts,
            vec![
                "Recording: click the left mouse button".to_string(),
                "Recording: x=7, y=8, interval=0 ms".to_string(),
            ]
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "Position:7:8\n");
    }

    #[test]
    #[timeout(2000)]
    fn closed_channel_stops_recording() {
        let (_dir, _path, recorder) = recorder(0);
        let (sender, events) = unbounded::<RunEvent>();
        drop(sender);
        assert_eq!(record(recorder, &events, &mut |_| {}).unwrap(), Outcome::Stopped);
    }
}
