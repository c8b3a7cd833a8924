//! Named request verbs layered over [`RestClient::send`].
//!
//! Each verb is a preset [`RestRequest`]. Anything the presets do not cover (a
//! cancellable `GET`, a `DELETE` with a deadline, ...) goes through `send` directly.

// crates.io
use tokio_util::sync::CancellationToken;
// self
use crate::{
	_prelude::*,
	client::{RestClient, RestRequest},
	http::{Headers, RestTransport},
	payload::Payload,
	response::Response,
};

impl<T> RestClient<T>
where
	T: ?Sized + RestTransport,
{
	/// Authenticated `GET`; `query` is flattened into query parameters.
	pub async fn get(&self, link: &str, query: Payload) -> Result<Response> {
		self.send(RestRequest::get(link).with_query(query)).await
	}

	/// Authenticated `GET` with custom headers.
	pub async fn get_with_headers(
		&self,
		link: &str,
		query: Payload,
		headers: Headers,
	) -> Result<Response> {
		self.send(RestRequest::get(link).with_query(query).with_headers(headers)).await
	}

	/// Anonymous `GET` with custom headers; no token is required or sent.
	pub async fn get_with_headers_no_auth(
		&self,
		link: &str,
		query: Payload,
		headers: Headers,
	) -> Result<Response> {
		self.send(RestRequest::get(link).with_query(query).with_headers(headers).anonymous()).await
	}

	/// Authenticated `POST` with a JSON object body.
	pub async fn post(&self, link: &str, payload: Payload) -> Result<Response> {
		self.send(RestRequest::post(link).with_body(payload)).await
	}

	/// Authenticated `POST` whose body is an ordered JSON array of objects.
	pub async fn post_batch(&self, link: &str, payloads: Vec<Payload>) -> Result<Response> {
		self.send(RestRequest::post(link).with_body(payloads)).await
	}

	/// Authenticated `POST` bound to a cancellation signal.
	///
	/// Cancelling `cancel` aborts the in-flight call and returns
	/// [`TransportError::Cancelled`](crate::error::TransportError::Cancelled).
	pub async fn post_with_cancellation(
		&self,
		link: &str,
		payload: Payload,
		cancel: CancellationToken,
	) -> Result<Response> {
		self.send(RestRequest::post(link).with_body(payload).with_cancellation(cancel)).await
	}

	/// Authenticated `POST` with custom headers.
	pub async fn post_with_headers(
		&self,
		link: &str,
		payload: Payload,
		headers: Headers,
	) -> Result<Response> {
		self.send(RestRequest::post(link).with_body(payload).with_headers(headers)).await
	}

	/// Anonymous `POST` with custom headers, for login and other pre-authentication calls.
	pub async fn post_with_headers_no_auth(
		&self,
		link: &str,
		payload: Payload,
		headers: Headers,
	) -> Result<Response> {
		self.send(RestRequest::post(link).with_body(payload).with_headers(headers).anonymous())
			.await
	}

	/// Authenticated `DELETE` without a body.
	pub async fn delete(&self, link: &str) -> Result<Response> {
		self.send(RestRequest::delete(link)).await
	}
}
