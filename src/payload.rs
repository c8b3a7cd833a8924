//! Request payloads: JSON bodies sent as-is and query maps flattened to strings.

// crates.io
use serde_json::Value;
// self
use crate::_prelude::*;

/// Key/value payload accepted by every verb.
pub type Payload = serde_json::Map<String, Value>;

/// Flattened query parameters, ordered by key.
pub type QueryParams = BTreeMap<String, String>;

/// JSON body of a POST request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Body {
	/// Single JSON object.
	Object(Payload),
	/// Ordered batch of JSON objects, sent as a JSON array.
	Batch(Vec<Payload>),
}
impl From<Payload> for Body {
	fn from(value: Payload) -> Self {
		Self::Object(value)
	}
}
impl From<Vec<Payload>> for Body {
	fn from(value: Vec<Payload>) -> Self {
		Self::Batch(value)
	}
}

/// Flattens a payload into query parameters.
///
/// Strings pass through unchanged, booleans become `true`/`false`, and every other value
/// uses its compact JSON rendering (`42`, `1.5`, `null`, `[1,2]`, `{"k":"v"}`).
pub fn prepare_payload(payload: &Payload) -> QueryParams {
	payload.iter().map(|(key, value)| (key.clone(), stringify(value))).collect()
}

fn stringify(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		Value::Bool(true) => "true".into(),
		Value::Bool(false) => "false".into(),
		other => other.to_string(),
	}
}
