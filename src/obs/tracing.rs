// self
use crate::{_prelude::*, client::AuthMode, http::Method};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedRequest<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedRequest<F> = F;

/// Span wrapping a single client request.
#[derive(Clone, Debug)]
pub struct RequestSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl RequestSpan {
	/// Creates a new span tagged with the request method and auth mode.
	///
	/// The `code` field stays empty until [`RequestSpan::record_code`] fills it in.
	pub fn new(method: Method, auth: AuthMode) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::debug_span!(
				"bearer_rest.request",
				method = method.as_str(),
				auth = auth.as_str(),
				code = tracing::field::Empty,
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (method, auth);

			Self {}
		}
	}

	/// Records the HTTP status of the response, including non-2xx codes.
	pub fn record_code(&self, code: u16) {
		#[cfg(feature = "tracing")]
		self.span.record("code", code);
		#[cfg(not(feature = "tracing"))]
		let _ = code;
	}

	/// Instruments the request future without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedRequest<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[tokio::test]
	async fn instrument_passes_output_through() {
		let span = RequestSpan::new(Method::Get, AuthMode::Anonymous);
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}

	#[tokio::test]
	async fn code_is_recorded_after_the_response() {
		let span = RequestSpan::new(Method::Delete, AuthMode::Bearer);
		let code = span.instrument(async { 404_u16 }).await;

		span.record_code(code);

		assert_eq!(code, 404);
	}
}
