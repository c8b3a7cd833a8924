//! Client configuration: typed transport options plus a free-form runtime map.
//!
//! Transport options that change how the HTTP stack is built live in [`ClientConfig`].
//! Everything else (endpoint URLs, tenant labels, anything a caller wants to keep next to
//! the client) lives in [`RuntimeConfig`], whose string reads fail loudly on a type
//! mismatch instead of coercing.

// std
use std::time::Duration as StdDuration;
// crates.io
use serde_json::Value;
// self
use crate::{_prelude::*, error::ConfigError};

/// Loose key/value form accepted by [`ClientConfig::from_map`] and kept by [`RuntimeConfig`].
pub type ConfigMap = BTreeMap<String, Value>;

/// Map key that requests certificate-verification bypass.
pub const INSECURE_SKIP_VERIFY: &str = "InsecureSkipVerify";

/// Options applied to the HTTP transport when a client is constructed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
	/// Skips server certificate verification. Explicit insecure mode, never a default.
	pub insecure_skip_verify: bool,
	/// Per-request timeout applied by the transport.
	pub timeout: StdDuration,
	/// Headers attached to every request.
	pub default_headers: BTreeMap<String, String>,
}
impl ClientConfig {
	/// Transport timeout used unless overridden.
	pub const DEFAULT_TIMEOUT: StdDuration = StdDuration::from_secs(60);

	/// Reads the typed options out of a loose map.
	///
	/// Only [`INSECURE_SKIP_VERIFY`] is interpreted; it must hold a boolean when present.
	pub fn from_map(map: &ConfigMap) -> Result<Self> {
		let mut config = Self::default();

		if let Some(value) = map.get(INSECURE_SKIP_VERIFY) {
			config.insecure_skip_verify = value.as_bool().ok_or_else(|| {
				ConfigError::TypeMismatch {
					key: INSECURE_SKIP_VERIFY.into(),
					expected: "boolean",
					found: value_kind(value),
				}
			})?;
		}

		Ok(config)
	}

	/// Enables or disables certificate-verification bypass.
	pub fn with_insecure_skip_verify(mut self, enabled: bool) -> Self {
		self.insecure_skip_verify = enabled;

		self
	}

	/// Overrides the transport timeout.
	pub fn with_timeout(mut self, timeout: StdDuration) -> Self {
		self.timeout = timeout;

		self
	}

	/// Adds or replaces a default header.
	pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.default_headers.insert(name.into(), value.into());

		self
	}
}
impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			insecure_skip_verify: false,
			timeout: Self::DEFAULT_TIMEOUT,
			default_headers: BTreeMap::from([(
				"Content-Type".to_owned(),
				"application/json".to_owned(),
			)]),
		}
	}
}

/// Free-form runtime values stored next to a client.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuntimeConfig(ConfigMap);
impl RuntimeConfig {
	/// Wraps an existing map.
	pub fn new(map: ConfigMap) -> Self {
		Self(map)
	}

	/// Stores `value` under `key`, replacing any previous entry.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
		self.0.insert(key.into(), value.into());
	}

	/// Reads `key` as a string.
	pub fn get_str(&self, key: &str) -> Result<&str> {
		let value = self.0.get(key).ok_or_else(|| ConfigError::MissingKey { key: key.into() })?;

		value.as_str().ok_or_else(|| {
			ConfigError::TypeMismatch { key: key.into(), expected: "string", found: value_kind(value) }
				.into()
		})
	}

	/// Reads `key` as a raw JSON value, if present.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// Exposes the whole map.
	pub fn data(&self) -> &ConfigMap {
		&self.0
	}
}

fn value_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	#[test]
	fn defaults_match_transport_contract() {
		let config = ClientConfig::default();

		assert!(!config.insecure_skip_verify);
		assert_eq!(config.timeout, StdDuration::from_secs(60));
		assert_eq!(
			config.default_headers.get("Content-Type").map(String::as_str),
			Some("application/json")
		);
	}

	#[test]
	fn insecure_flag_is_read_from_map() {
		let enabled = ConfigMap::from([(INSECURE_SKIP_VERIFY.into(), json!(true))]);
		let disabled = ConfigMap::from([(INSECURE_SKIP_VERIFY.into(), json!(false))]);

		assert!(ClientConfig::from_map(&enabled).expect("Boolean flag should parse.").insecure_skip_verify);
		assert!(
			!ClientConfig::from_map(&disabled).expect("Boolean flag should parse.").insecure_skip_verify
		);
		assert!(
			!ClientConfig::from_map(&ConfigMap::new())
				.expect("Empty map should parse.")
				.insecure_skip_verify
		);
	}

	#[test]
	fn non_boolean_insecure_flag_is_rejected() {
		let map = ConfigMap::from([(INSECURE_SKIP_VERIFY.into(), json!("yes"))]);
		let err = ClientConfig::from_map(&map).expect_err("String flag should be rejected.");

		assert!(matches!(
			err,
			Error::Config(ConfigError::TypeMismatch { expected: "boolean", found: "string", .. })
		));
	}

	#[test]
	fn runtime_strings_read_back() {
		let mut runtime = RuntimeConfig::default();

		runtime.set("token_url", "https://auth.example.com/login");

		assert_eq!(
			runtime.get_str("token_url").expect("String entry should read back."),
			"https://auth.example.com/login"
		);
		assert_eq!(runtime.data().len(), 1);
	}

	#[test]
	fn runtime_type_mismatch_is_surfaced() {
		let mut runtime = RuntimeConfig::default();

		runtime.set("retries", 3);
		runtime.set(INSECURE_SKIP_VERIFY, true);

		assert!(matches!(
			runtime.get_str("retries"),
			Err(Error::Config(ConfigError::TypeMismatch { found: "number", .. }))
		));
		assert!(matches!(
			runtime.get_str(INSECURE_SKIP_VERIFY),
			Err(Error::Config(ConfigError::TypeMismatch { found: "boolean", .. }))
		));
		assert!(matches!(
			runtime.get_str("absent"),
			Err(Error::Config(ConfigError::MissingKey { .. }))
		));
	}

	#[test]
	fn config_deserializes_with_defaults() {
		let config: ClientConfig = serde_json::from_value(json!({ "insecure_skip_verify": true }))
			.expect("Partial config should deserialize.");

		assert!(config.insecure_skip_verify);
		assert_eq!(config.timeout, ClientConfig::DEFAULT_TIMEOUT);
	}
}
