//! Transport seam between the gating client and the HTTP stack.
//!
//! The client never talks to an HTTP library directly. It builds a [`TransportRequest`]
//! (method, URL, flattened query, JSON body, headers, optional bearer secret) and hands
//! it to a [`RestTransport`]. Connection pooling, TLS, and body marshaling stay on the
//! transport side. [`ReqwestTransport`] is the default implementation; tests and
//! embedders may plug in their own.

// crates.io
#[cfg(feature = "reqwest")]
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
// self
use crate::{
	_prelude::*,
	auth::TokenSecret,
	payload::{Body, QueryParams},
};
#[cfg(feature = "reqwest")]
use crate::{
	config::ClientConfig,
	error::{ConfigError, TransportError},
};

/// Custom headers attached to a single request.
pub type Headers = BTreeMap<String, String>;

/// Boxed future returned by [`RestTransport::perform`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<TransportResponse>> + 'a + Send>>;

/// HTTP methods issued by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
	/// `GET` with query parameters.
	Get,
	/// `POST` with a JSON body.
	Post,
	/// `DELETE` without a body.
	Delete,
}
impl Method {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Method::Get => "GET",
			Method::Post => "POST",
			Method::Delete => "DELETE",
		}
	}
}
impl Display for Method {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
#[cfg(feature = "reqwest")]
impl From<Method> for reqwest::Method {
	fn from(value: Method) -> Self {
		match value {
			Method::Get => reqwest::Method::GET,
			Method::Post => reqwest::Method::POST,
			Method::Delete => reqwest::Method::DELETE,
		}
	}
}

/// Fully resolved request handed to a transport.
#[derive(Clone, Debug)]
pub struct TransportRequest {
	/// HTTP method.
	pub method: Method,
	/// Target URL, without the flattened query.
	pub url: Url,
	/// Query parameters appended to the URL.
	pub query: QueryParams,
	/// JSON body, sent as-is.
	pub body: Option<Body>,
	/// Custom headers layered over the transport defaults.
	pub headers: Headers,
	/// Bearer credential; `None` for anonymous calls.
	pub bearer: Option<TokenSecret>,
}

/// Status code and body text produced by a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw body text.
	pub body: String,
}

/// HTTP execution capability consumed by the client.
///
/// Implementations must return non-2xx statuses as ordinary [`TransportResponse`]s and
/// reserve errors for failures where no response exists (connection, TLS, IO). Dropping
/// the returned future must abort the in-flight call; cancellation relies on it.
pub trait RestTransport
where
	Self: 'static + Send + Sync,
{
	/// Performs one request.
	fn perform(&self, request: TransportRequest) -> TransportFuture<'_>;
}

/// [`RestTransport`] backed by a shared [`ReqwestClient`].
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a reqwest client with the configured default headers, timeout, and TLS mode.
	pub fn from_config(config: &ClientConfig) -> Result<Self> {
		let mut headers = HeaderMap::new();

		for (name, value) in &config.default_headers {
			headers.insert(header_name(name)?, header_value(name, value)?);
		}

		let client = ReqwestClient::builder()
			.default_headers(headers)
			.timeout(config.timeout)
			.danger_accept_invalid_certs(config.insecure_skip_verify)
			.build()
			.map_err(ConfigError::http_client_build)?;

		Ok(Self(client))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl RestTransport for ReqwestTransport {
	fn perform(&self, request: TransportRequest) -> TransportFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let TransportRequest { method, url, query, body, headers, bearer } = request;
			let mut header_map = HeaderMap::new();

			for (name, value) in &headers {
				header_map.insert(header_name(name)?, header_value(name, value)?);
			}
			// The bearer credential wins over any custom `Authorization` header.
			if let Some(secret) = &bearer {
				let mut value = header_value("Authorization", &format!("Bearer {}", secret.expose()))?;

				value.set_sensitive(true);
				header_map.insert(AUTHORIZATION, value);
			}

			let mut builder = client.request(method.into(), url).headers(header_map);

			if !query.is_empty() {
				builder = builder.query(&query);
			}
			if let Some(body) = &body {
				builder = builder.json(body);
			}

			let response = builder.send().await.map_err(TransportError::from)?;
			let status = response.status().as_u16();
			let body = response.text().await.map_err(TransportError::from)?;

			Ok(TransportResponse { status, body })
		})
	}
}

#[cfg(feature = "reqwest")]
fn header_name(name: &str) -> Result<HeaderName> {
	HeaderName::from_bytes(name.as_bytes())
		.map_err(|_| ConfigError::InvalidHeader { name: name.to_owned() }.into())
}

#[cfg(feature = "reqwest")]
fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
	HeaderValue::from_str(value)
		.map_err(|_| ConfigError::InvalidHeader { name: name.to_owned() }.into())
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
	// self
	use super::*;

	#[test]
	fn method_labels_are_stable() {
		assert_eq!(Method::Get.to_string(), "GET");
		assert_eq!(Method::Delete.as_str(), "DELETE");
		assert_eq!(reqwest::Method::from(Method::Post), reqwest::Method::POST);
	}

	#[test]
	fn transport_builds_from_default_config() {
		assert!(ReqwestTransport::from_config(&ClientConfig::default()).is_ok());
		assert!(
			ReqwestTransport::from_config(&ClientConfig::default().with_insecure_skip_verify(true))
				.is_ok()
		);
	}

	#[test]
	fn invalid_default_header_is_rejected() {
		let config = ClientConfig::default().with_default_header("bad header", "value");
		let err = ReqwestTransport::from_config(&config)
			.expect_err("Header names with spaces should be rejected.");

		assert!(matches!(
			err,
			Error::Config(ConfigError::InvalidHeader { ref name }) if name == "bad header"
		));
	}
}
