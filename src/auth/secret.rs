//! Redacting wrapper for bearer keys.

// self
use crate::_prelude::*;

/// Bearer key that never prints its value through `Debug` or `Display`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps a key verbatim; no format validation happens here.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the raw key. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Returns `true` when no key has been stored.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl From<String> for TokenSecret {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl From<&str> for TokenSecret {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		if self.is_empty() {
			f.debug_tuple("TokenSecret").field(&"").finish()
		} else {
			f.debug_tuple("TokenSecret").field(&"<redacted>").finish()
		}
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
