//! Run settings the client adjusts with each `run` request.

use clicker_types::{Mode, RunParam};

use crate::server::config::Config;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RunSettings {
    pub config_name: String,
    pub min_interval: i64,
    pub cycle: i64,
}

impl RunSettings {
    pub fn new(config: &Config) -> RunSettings {
        RunSettings {
            config_name: config.config_name.clone(),
            min_interval: config.min_interval,
            cycle: 0,
        }
    }

    /// Takes over the fields set in `param` and returns the mode to run.
    ///
    /// The script name and minimum interval stick for later runs, the
    /// cycle count does not.
    pub fn apply(&mut self, param: RunParam) -> Mode {
        if let Some(name) = param.config_name.filter(|name| !name.is_empty()) {
            self.config_name = name;
        }
        if let Some(min_interval) = param.min_interval {
            self.min_interval = min_interval;
        }
        self.cycle = param.cycle.unwrap_or(0);

        match param.mode {
            Some(Mode::Exec) => Mode::Exec,
            _ => Mode::Gather,
        }
    }

    pub fn min_interval_ms(&self) -> u64 {
        u64::try_from(self.min_interval).unwrap_or(0)
    }
}
