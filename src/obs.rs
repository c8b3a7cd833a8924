//! Optional observability helpers for client requests.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to wrap every request in a span named `bearer_rest.request` with the
//!   `method` and `auth` fields. Credentials are never recorded.
//! - Enable `metrics` to increment the `bearer_rest_request_total` counter for every
//!   attempt/success/failure, labeled by `method` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// Entry to [`RestClient::send`](crate::client::RestClient::send).
	Attempt,
	/// A response was produced (any status code).
	Success,
	/// An error propagated back to the caller.
	Failure,
}
impl RequestOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestOutcome::Attempt => "attempt",
			RequestOutcome::Success => "success",
			RequestOutcome::Failure => "failure",
		}
	}
}
impl Display for RequestOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
