use crate::requests::Request;
use crate::RunParam;

#[derive(Debug)]
pub enum Run {}

/// Starts recording or replaying a script. The server answers once the run
/// is over, either finished or stopped, with `true`.
impl Request for Run {
    type Params = RunParam;
    type Result = bool;
    const METHOD: &'static str = "run";
}
