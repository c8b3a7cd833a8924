//! Gating client: one credential slot, configuration, and request dispatch.

pub mod request;

mod verbs;

pub use request::*;

// self
use crate::{
	_prelude::*,
	auth::{Token, TokenSlot},
	config::{ClientConfig, ConfigMap, RuntimeConfig},
	error::{ConfigError, TransportError},
	http::{RestTransport, TransportRequest},
	obs::{self, RequestOutcome, RequestSpan},
	payload,
	response::Response,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestRestClient = RestClient<ReqwestTransport>;

/// Bearer-token gated HTTP client.
///
/// Every authenticated call validates the stored token before the transport is touched:
/// a missing token fails with [`Error::MissingToken`], an invalid one is discarded and
/// fails with [`Error::InvalidToken`]. Anonymous calls skip the check entirely. Transport
/// results are normalized into [`Response`] values; non-2xx statuses are not errors.
pub struct RestClient<T>
where
	T: ?Sized + RestTransport,
{
	/// Transport used for every outbound request.
	pub transport: Arc<T>,
	config: ClientConfig,
	runtime: RuntimeConfig,
	slot: TokenSlot,
}
impl<T> RestClient<T>
where
	T: ?Sized + RestTransport,
{
	/// Creates a client over a caller-provided transport.
	///
	/// The slot starts with an empty placeholder token, so authenticated calls fail until
	/// [`RestClient::set_token`] installs a valid one.
	pub fn with_transport(config: ClientConfig, transport: impl Into<Arc<T>>) -> Self {
		Self {
			transport: transport.into(),
			config,
			runtime: RuntimeConfig::default(),
			slot: TokenSlot::with_placeholder(),
		}
	}

	/// Replaces the runtime key/value state.
	pub fn with_runtime_config(mut self, runtime: RuntimeConfig) -> Self {
		self.runtime = runtime;

		self
	}

	/// Returns the stored token after gating it.
	///
	/// An invalid token is cleared from the slot before [`Error::InvalidToken`] is returned.
	pub fn token(&self) -> Result<Token> {
		self.slot.acquire()
	}

	/// Installs `token`, replacing the previous one.
	///
	/// Tokens that are not valid right now are rejected with [`Error::InvalidToken`] and
	/// the previous token stays in place.
	pub fn set_token(&self, token: Token) -> Result<()> {
		self.slot.replace(token)
	}

	/// Stores a runtime value under `key`.
	pub fn set_config(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
		self.runtime.set(key, value);
	}

	/// Reads a runtime value as a string.
	pub fn config(&self, key: &str) -> Result<&str> {
		self.runtime.get_str(key)
	}

	/// Exposes the whole runtime map.
	pub fn config_data(&self) -> &ConfigMap {
		self.runtime.data()
	}

	/// Returns the transport options the client was built with.
	pub fn client_config(&self) -> &ClientConfig {
		&self.config
	}

	/// Sends one request through gating and the transport.
	pub async fn send(&self, request: RestRequest) -> Result<Response> {
		let method = request.method;
		let span = RequestSpan::new(method, request.auth);

		obs::record_request_outcome(method, RequestOutcome::Attempt);

		let result = span.instrument(self.dispatch(request)).await;

		match &result {
			Ok(response) => {
				span.record_code(response.code());
				obs::record_request_outcome(method, RequestOutcome::Success);
			},
			Err(_) => obs::record_request_outcome(method, RequestOutcome::Failure),
		}

		result
	}

	async fn dispatch(&self, request: RestRequest) -> Result<Response> {
		let RestRequest { method, link, query, body, headers, auth, cancel, deadline } = request;
		let bearer = match auth {
			AuthMode::Bearer => Some(self.slot.acquire()?.secret().clone()),
			AuthMode::Anonymous => None,
		};
		let url = Url::parse(&link).map_err(|source| ConfigError::InvalidUrl { link, source })?;

		if cancel.as_ref().is_some_and(|token| token.is_cancelled()) {
			return Err(TransportError::Cancelled.into());
		}

		let call = self.transport.perform(TransportRequest {
			method,
			url,
			query: payload::prepare_payload(&query),
			body,
			headers,
			bearer,
		});
		let call = async move {
			match deadline {
				Some(limit) => match tokio::time::timeout(limit, call).await {
					Ok(reply) => reply,
					Err(_) => Err(TransportError::TimedOut.into()),
				},
				None => call.await,
			}
		};
		let reply = match cancel {
			Some(token) => tokio::select! {
				biased;
				() = token.cancelled() => Err(TransportError::Cancelled.into()),
				reply = call => reply,
			},
			None => call.await,
		}?;

		Ok(Response::new(reply.status, reply.body))
	}
}
#[cfg(feature = "reqwest")]
impl RestClient<ReqwestTransport> {
	/// Creates a client with its own reqwest transport.
	///
	/// The transport sends `Content-Type: application/json` by default, times out after
	/// one minute, and skips certificate verification only when
	/// [`ClientConfig::insecure_skip_verify`] is set.
	pub fn new(config: ClientConfig) -> Result<Self> {
		let transport = ReqwestTransport::from_config(&config)?;

		Ok(Self::with_transport(config, transport))
	}

	/// Creates a client from the loose map form.
	///
	/// `InsecureSkipVerify` configures the transport; the whole map is kept as runtime
	/// state readable through [`RestClient::config`].
	pub fn from_map(map: ConfigMap) -> Result<Self> {
		let config = ClientConfig::from_map(&map)?;

		Ok(Self::new(config)?.with_runtime_config(RuntimeConfig::new(map)))
	}
}
impl<T> Debug for RestClient<T>
where
	T: ?Sized + RestTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RestClient")
			.field("config", &self.config)
			.field("runtime", &self.runtime)
			.field("token_set", &!self.slot.is_empty())
			.finish()
	}
}
