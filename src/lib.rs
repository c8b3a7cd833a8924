//! Bearer-token gated REST client: one credential slot checked before every call, uniform
//! cancellation, and plain `(status, body)` responses.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod obs;
pub mod payload;
pub mod response;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::Token,
		client::ReqwestRestClient,
		config::ClientConfig,
		payload::Payload,
	};

	/// Builds a reqwest-backed client that trusts the mock server's self-signed certificates.
	pub fn reqwest_test_client() -> ReqwestRestClient {
		ReqwestRestClient::new(ClientConfig::default().with_insecure_skip_verify(true))
			.expect("Failed to build reqwest client for tests.")
	}

	/// Builds a token that stays valid for the next hour.
	pub fn live_token(key: &str) -> Token {
		Token::with_expiry(key, OffsetDateTime::now_utc() + Duration::hours(1))
	}

	/// Converts a `serde_json::json!` object literal into a [`Payload`].
	pub fn payload(value: serde_json::Value) -> Payload {
		match value {
			serde_json::Value::Object(map) => map,
			other => panic!("Payload fixture must be a JSON object, got {other}."),
		}
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use parking_lot::Mutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use tokio_util::sync::CancellationToken;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {bearer_rest as _, color_eyre as _, httpmock as _};
