//! Normalized `(status, body)` result of a completed request.

// self
use crate::_prelude::*;

/// Status code and raw body text of a completed request.
///
/// Non-2xx statuses are ordinary responses; interpreting them is left to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
	code: u16,
	raw: String,
}
impl Response {
	/// Creates a response from its parts.
	pub fn new(code: u16, raw: impl Into<String>) -> Self {
		Self { code, raw: raw.into() }
	}

	/// HTTP status code.
	pub fn code(&self) -> u16 {
		self.code
	}

	/// Raw body text.
	pub fn raw(&self) -> &str {
		&self.raw
	}

	/// Consumes the response and returns the body text.
	pub fn into_raw(self) -> String {
		self.raw
	}

	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.code)
	}
}
