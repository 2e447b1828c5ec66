use serde::de::DeserializeOwned;
use serde::Serialize;

pub use run::*;

mod run;

pub trait Request {
    type Params: DeserializeOwned + Serialize;
    type Result: DeserializeOwned + Serialize;
    const METHOD: &'static str;
}
