//! Mouse output used when replaying a script.

use log::info;

/// Moves the pointer and clicks. Platform back-ends implement this trait;
/// the server ships with [`LoggingDriver`].
#[cfg_attr(test, mockall::automock)]
pub trait MouseDriver {
    /// Moves the pointer to (x, y) in small steps.
    fn move_smooth(&mut self, x: i32, y: i32);
    fn click_left(&mut self);
}

pub type DriverFactory = fn() -> Box<dyn MouseDriver + Send>;

/// Logs the actions instead of performing them.
#[derive(Debug, Default)]
pub struct LoggingDriver {
    clicks: u64,
}

impl LoggingDriver {
    pub fn boxed() -> Box<dyn MouseDriver + Send> {
        Box::<LoggingDriver>::default()
    }
}

impl MouseDriver for LoggingDriver {
    fn move_smooth(&mut self, x: i32, y: i32) {
        info!("move pointer to ({}, {})", x, y);
    }

    fn click_left(&mut self) {
        self.clicks += 1;
        info!("left click #{}", self.clicks);
    }
}
