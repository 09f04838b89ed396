use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One speaker/text pair of the client-supplied transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: String,
    pub text: String,
}

/// Body shape shared by every outcome of the insurance endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct InsuranceResponse {
    pub response: Value,
}

impl InsuranceResponse {
    pub fn new(response: impl Into<Value>) -> Self {
        Self {
            response: response.into(),
        }
    }
}
