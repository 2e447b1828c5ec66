use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};

/// Execution mode of a run request.
///
/// The front-end offers `gather` and `exec`, but the field is free-form:
/// any other identifier is kept verbatim in [`Mode::Other`].
#[derive(Clone, Debug, Eq, PartialEq, Hash, Deserialize_enum_str, Serialize_enum_str)]
pub enum Mode {
    /// Replay a recorded script.
    #[serde(rename = "exec")]
    Exec,
    /// Record clicks into a script.
    #[serde(rename = "gather")]
    Gather,
    #[serde(other)]
    Other(String),
}

impl Mode {
    pub fn is_exec(&self) -> bool {
        matches!(self, Mode::Exec)
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_json_snapshot;
    use test_case::test_case;

    use crate::tests::test_deserialization;

    use super::*;

    #[test_case(r#""exec""#, Mode::Exec ; "exec")]
    #[test_case(r#""gather""#, Mode::Gather ; "gather")]
    #[test_case(r#""once""#, Mode::Other("once".into()) ; "free form")]
    #[test_case(r#""""#, Mode::Other("".into()) ; "empty")]
    fn mode_deserialization(json: &str, expected: Mode) {
        test_deserialization(json, &expected);
    }

    #[test]
    fn mode_serialization() {
        assert_json_snapshot!(Mode::Exec, @r#""exec""#);
        assert_json_snapshot!(Mode::Gather, @r#""gather""#);
        assert_json_snapshot!(Mode::Other("daemon".into()), @r#""daemon""#);
    }

    #[test]
    fn only_exec_replays() {
        assert!(Mode::Exec.is_exec());
        assert!(!Mode::Gather.is_exec());
        assert!(!Mode::Other("exec ".into()).is_exec());
    }
}
