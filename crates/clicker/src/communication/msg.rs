use std::fmt;
use std::io::{self, BufRead, Write};

use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use clicker_types::notifications::{Exit, Notification as _};

use crate::communication::error::ExtractError;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Message {
    Request(Request),
    Response(Response),
    Notification(Notification),
}

impl From<Request> for Message {
    fn from(request: Request) -> Message {
        Message::Request(request)
    }
}

impl From<Response> for Message {
    fn from(response: Response) -> Message {
        Message::Response(response)
    }
}

impl From<Notification> for Message {
    fn from(notification: Notification) -> Message {
        Message::Notification(notification)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(IdRepr);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
enum IdRepr {
    I32(i32),
    String(String),
}

impl From<i32> for RequestId {
    fn from(id: i32) -> RequestId {
        RequestId(IdRepr::I32(id))
    }
}

impl From<String> for RequestId {
    fn from(id: String) -> RequestId {
        RequestId(IdRepr::String(id))
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            IdRepr::I32(it) => fmt::Display::fmt(it, f),
            // quoted, so that `7` and `"7"` read differently in the logs
            IdRepr::String(it) => fmt::Debug::fmt(it, f),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Request {
    pub id: RequestId,
    pub method: String,
    #[serde(default = "serde_json::Value::default")]
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub params: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Response {
    // a null id (undecodable request) is not supported
    pub id: RequestId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ResponseError>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ResponseError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub enum ErrorCode {
    MethodNotFound = -32601,
    InvalidParams = -32602,
    InternalError = -32603,
    /// The request was well formed but the server could not carry it out,
    /// e.g. a run was requested while another one is in progress.
    RequestFailed = -32803,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Notification {
    pub method: String,
    #[serde(default = "serde_json::Value::default")]
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub params: serde_json::Value,
}

impl Message {
    /// Reads the next message, one JSON document per line. Blank lines and
    /// lines that are not a valid message are skipped. Returns `None` at the
    /// end of the input.
    pub fn read(r: &mut impl BufRead) -> io::Result<Option<Message>> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if r.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }
            let line = match std::str::from_utf8(&buf) {
                Ok(text) => text.trim(),
                Err(e) => {
                    warn!(
                        "skipping malformed message {:?}: {}",
                        String::from_utf8_lossy(&buf),
                        e
                    );
                    continue;
                }
            };
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str(line) {
                Ok(msg) => return Ok(Some(msg)),
                Err(e) => warn!("skipping malformed message {:?}: {}", line, e),
            }
        }
    }

    pub fn write(self, w: &mut impl Write) -> io::Result<()> {
        #[derive(Serialize)]
        struct JsonRpc {
            jsonrpc: &'static str,
            #[serde(flatten)]
            msg: Message,
        }
        let text = serde_json::to_string(&JsonRpc {
            jsonrpc: "2.0",
            msg: self,
        })?;
        writeln!(w, "{}", text)?;
        w.flush()
    }
}

impl Response {
    pub fn new_ok<R: Serialize>(id: RequestId, result: R) -> Response {
        Response {
            id,
            result: Some(serde_json::to_value(result).unwrap()),
            error: None,
        }
    }

    pub fn new_err(id: RequestId, code: i32, message: String) -> Response {
        let error = ResponseError {
            code,
            message,
            data: None,
        };
        Response {
            id,
            result: None,
            error: Some(error),
        }
    }
}

impl Request {
    pub fn new<P: Serialize>(id: RequestId, method: String, params: P) -> Request {
        Request {
            id,
            method,
            params: serde_json::to_value(params).unwrap(),
        }
    }
}

impl Notification {
    pub fn new(method: String, params: impl Serialize) -> Notification {
        Notification {
            method,
            params: serde_json::to_value(params).unwrap(),
        }
    }

    pub fn extract<P: DeserializeOwned>(self, method: &str) -> Result<P, ExtractError<Notification>> {
        if self.method != method {
            return Err(ExtractError::MethodMismatch(self));
        }
        match serde_json::from_value(self.params.clone()) {
            Ok(params) => Ok(params),
            // `{}` and `[]` stand for "no params" too
            Err(_) if is_empty(&self.params) => {
                serde_json::from_value(serde_json::Value::Null).map_err(|error| {
                    ExtractError::JsonError {
                        method: self.method,
                        error,
                    }
                })
            }
            Err(error) => Err(ExtractError::JsonError {
                method: self.method,
                error,
            }),
        }
    }

    pub(crate) fn is_exit(&self) -> bool {
        self.method == Exit::METHOD
    }
}

fn is_empty(params: &serde_json::Value) -> bool {
    match params {
        serde_json::Value::Object(map) => map.is_empty(),
        serde_json::Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use insta::assert_snapshot;
    use serde_json::json;

    use super::*;

    fn read_all(input: &str) -> Vec<Message> {
        let mut reader = Cursor::new(input.as_bytes());
        let mut messages = vec![];
        while let Some(msg) = Message::read(&mut reader).unwrap() {
            messages.push(msg);
        }
        messages
    }

    fn written(msg: Message) -> String {
        let mut buf = Vec::new();
        msg.write(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with('\n'));
        text.trim_end().to_owned()
    }

    #[test]
    fn reads_each_kind_of_message() {
        let messages = read_all(concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"run","params":{"mode":"exec"}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":"a","result":true}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"stop"}"#,
            "\n",
        ));

        assert_eq!(
            messages,
            vec![
                Request::new(RequestId::from(1), "run".into(), json!({"mode": "exec"})).into(),
                Response::new_ok(RequestId::from("a".to_string()), true).into(),
                Notification {
                    method: "stop".into(),
                    params: serde_json::Value::Null,
                }
                .into(),
            ]
        );
    }

    #[test]
    fn skips_blank_and_malformed_lines() {
        let messages = read_all("\n   \nnot json\n{\"jsonrpc\":\"2.0\",\"method\":\"exit\"}\n");
        assert_eq!(messages.len(), 1);
        assert!(matches!(&messages[0], Message::Notification(n) if n.is_exit()));
    }

    #[test]
    fn skips_invalid_utf8_lines() {
        let mut reader = Cursor::new(&b"\xff\xfe garbage\n{\"jsonrpc\":\"2.0\",\"method\":\"exit\"}\n"[..]);
        let msg = Message::read(&mut reader).unwrap();
        assert!(matches!(msg, Some(Message::Notification(n)) if n.is_exit()));
        assert!(Message::read(&mut reader).unwrap().is_none());
    }

    #[test]
    fn empty_input_has_no_message() {
        assert!(read_all("").is_empty());
    }

    #[test]
    fn writes_one_line_per_message() {
        assert_snapshot!(
            written(Notification::new("alertMsg".into(), "hello").into()),
            @r#"{"jsonrpc":"2.0","method":"alertMsg","params":"hello"}"#
        );
        assert_snapshot!(
            written(Response::new_ok(RequestId::from(7), true).into()),
            @r#"{"jsonrpc":"2.0","id":7,"result":true}"#
        );
        assert_snapshot!(
            written(Response::new_err(RequestId::from(7), ErrorCode::MethodNotFound as i32, "unknown request".into()).into()),
            @r#"{"jsonrpc":"2.0","id":7,"error":{"code":-32601,"message":"unknown request"}}"#
        );
    }

    #[test]
    fn request_id_display() {
        assert_eq!(RequestId::from(92).to_string(), "92");
        assert_eq!(RequestId::from("92".to_string()).to_string(), "\"92\"");
    }

    #[test]
    fn extract_checks_the_method() {
        let not = Notification::new("stop".into(), ());
        match not.clone().extract::<()>("exit") {
            Err(ExtractError::MethodMismatch(back)) => assert_eq!(back, not),
            other => panic!("unexpected result: {:?}", other),
        }
        not.extract::<()>("stop").unwrap();
    }

    #[test]
    fn extract_takes_empty_params_as_none() {
        for params in [json!(null), json!({}), json!([])] {
            let not = Notification {
                method: "stop".into(),
                params,
            };
            not.extract::<()>("stop").unwrap();
        }
        let not = Notification {
            method: "stop".into(),
            params: json!({"now": true}),
        };
        assert!(matches!(
            not.extract::<()>("stop"),
            Err(ExtractError::JsonError { .. })
        ));
    }

    #[test]
    fn extract_reports_bad_params() {
        let not = Notification::new("mouseDown".into(), json!({"x": "left"}));
        let res = not.extract::<clicker_types::MouseEvent>("mouseDown");
        assert!(matches!(res, Err(ExtractError::JsonError { .. })));
    }
}
