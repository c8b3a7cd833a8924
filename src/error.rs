//! Client-level error types shared by the token slot, configuration, and transports.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration or request construction problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, cancellation).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// No token occupies the client's credential slot.
	#[error("Missing authentication token.")]
	MissingToken,
	/// Token is expired, has an empty key, or was rejected at assignment time.
	#[error("Invalid authentication token.")]
	InvalidToken,
	/// Validity string does not match `YYYY-MM-DD HH:MM:SS`.
	#[error("Validity `{value}` is not a `YYYY-MM-DD HH:MM:SS` timestamp.")]
	MalformedTimestamp {
		/// Raw text supplied by the caller.
		value: String,
		/// Underlying parsing failure, absent when the text was rejected before parsing.
		#[source]
		source: Option<time::error::Parse>,
	},
}
impl Error {
	/// Returns `true` for failures raised by token gating, before any transport call.
	pub fn is_gating(&self) -> bool {
		matches!(self, Self::MissingToken | Self::InvalidToken)
	}
}

/// Configuration and request construction failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Configuration value was stored under a different type than the reader expects.
	#[error("Config entry `{key}` holds {found}, expected {expected}.")]
	TypeMismatch {
		/// Configuration key.
		key: String,
		/// Type the reader asked for.
		expected: &'static str,
		/// Type actually stored.
		found: &'static str,
	},
	/// Configuration key is not present.
	#[error("Config entry `{key}` is not set.")]
	MissingKey {
		/// Configuration key.
		key: String,
	},
	/// Request link cannot be parsed as a URL.
	#[error("Link `{link}` is not a valid URL.")]
	InvalidUrl {
		/// Raw link supplied by the caller.
		link: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Header name or value cannot be sent over HTTP.
	#[error("Header `{name}` is not a valid HTTP header.")]
	InvalidHeader {
		/// Offending header name.
		name: String,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}

/// Transport-level failures (network, cancellation, deadline).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while performing the request.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Caller cancelled the request before it completed.
	#[error("Request was cancelled.")]
	Cancelled,
	/// Request did not complete before its deadline.
	#[error("Request timed out.")]
	TimedOut,
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		if e.is_timeout() { Self::TimedOut } else { Self::network(e) }
	}
}
