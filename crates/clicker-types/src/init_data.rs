use serde::{Deserialize, Serialize};

use crate::Mode;

/// Sent once the backend is ready, so the front-end can fill its form.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitData {
    /// Script selected by default.
    pub config_name: String,
    /// Scripts found in the scripts directory.
    pub config_file_list: Vec<String>,
    /// Modes the front-end offers, with their labels.
    pub mode_enum_list: Vec<ModeEnum>,
    /// Default minimum interval between clicks, in milliseconds.
    pub min_interval: i64,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ModeEnum {
    pub key: Mode,
    pub value: String,
}

impl ModeEnum {
    pub fn new(key: Mode, value: &str) -> Self {
        ModeEnum {
            key,
            value: value.to_owned(),
        }
    }

    /// Modes offered by the front-end, in display order.
    pub fn offered() -> Vec<ModeEnum> {
        vec![
            ModeEnum::new(Mode::Gather, "Gather mode"),
            ModeEnum::new(Mode::Exec, "Exec mode"),
        ]
    }
}
