//! Request description shared by every verb.

// std
use std::time::Duration as StdDuration;
// crates.io
use tokio_util::sync::CancellationToken;
// self
use crate::{
	_prelude::*,
	http::{Headers, Method},
	payload::{Body, Payload},
};

/// Whether a request passes through token gating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AuthMode {
	/// Requires a valid token; its key is sent as a bearer credential.
	#[default]
	Bearer,
	/// Skips gating entirely (login and other pre-authentication endpoints).
	Anonymous,
}
impl AuthMode {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			AuthMode::Bearer => "bearer",
			AuthMode::Anonymous => "anonymous",
		}
	}
}

/// One outbound call, consumed by [`RestClient::send`](crate::client::RestClient::send).
///
/// The query payload is flattened to strings; the body is sent as-is. Cancellation and
/// the per-call deadline apply to every method alike.
#[derive(Clone, Debug)]
pub struct RestRequest {
	/// HTTP method.
	pub method: Method,
	/// Target link, parsed as a URL when the request is sent.
	pub link: String,
	/// Query payload, flattened with [`prepare_payload`](crate::payload::prepare_payload).
	pub query: Payload,
	/// JSON body.
	pub body: Option<Body>,
	/// Custom headers layered over the transport defaults.
	pub headers: Headers,
	/// Gating mode.
	pub auth: AuthMode,
	/// Caller-owned cancellation signal.
	pub cancel: Option<CancellationToken>,
	/// Upper bound on the transport call, on top of the transport timeout.
	pub deadline: Option<StdDuration>,
}
impl RestRequest {
	/// Creates an authenticated request without payload, headers, or cancellation.
	pub fn new(method: Method, link: impl Into<String>) -> Self {
		Self {
			method,
			link: link.into(),
			query: Payload::new(),
			body: None,
			headers: Headers::new(),
			auth: AuthMode::Bearer,
			cancel: None,
			deadline: None,
		}
	}

	/// Shorthand for a `GET` request.
	pub fn get(link: impl Into<String>) -> Self {
		Self::new(Method::Get, link)
	}

	/// Shorthand for a `POST` request.
	pub fn post(link: impl Into<String>) -> Self {
		Self::new(Method::Post, link)
	}

	/// Shorthand for a `DELETE` request.
	pub fn delete(link: impl Into<String>) -> Self {
		Self::new(Method::Delete, link)
	}

	/// Sets the query payload.
	pub fn with_query(mut self, query: Payload) -> Self {
		self.query = query;

		self
	}

	/// Sets the JSON body (single object or batch).
	pub fn with_body(mut self, body: impl Into<Body>) -> Self {
		self.body = Some(body.into());

		self
	}

	/// Replaces the custom headers.
	pub fn with_headers(mut self, headers: Headers) -> Self {
		self.headers = headers;

		self
	}

	/// Adds or replaces one custom header.
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.insert(name.into(), value.into());

		self
	}

	/// Skips token gating and sends no bearer credential.
	pub fn anonymous(mut self) -> Self {
		self.auth = AuthMode::Anonymous;

		self
	}

	/// Binds the request to a cancellation signal.
	pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
		self.cancel = Some(cancel);

		self
	}

	/// Fails the request with a timeout if the transport has not answered within `deadline`.
	pub fn with_deadline(mut self, deadline: StdDuration) -> Self {
		self.deadline = Some(deadline);

		self
	}
}
