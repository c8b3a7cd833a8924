//! Single credential slot shared by every request verb of a client.

// self
use crate::{_prelude::*, auth::Token};

/// Holds at most one live [`Token`].
///
/// Gating (check, then clear on failure) and assignment run under the same lock, so a
/// concurrent [`TokenSlot::replace`] can never be wiped by a stale gating decision.
#[derive(Debug, Default)]
pub struct TokenSlot(Mutex<Option<Token>>);
impl TokenSlot {
	/// Creates a slot holding an empty placeholder token.
	///
	/// The placeholder fails validation, so the first authenticated call reports
	/// [`Error::InvalidToken`] and leaves the slot empty.
	pub fn with_placeholder() -> Self {
		Self(Mutex::new(Some(Token::new())))
	}

	/// Returns the stored token if it is currently valid.
	pub fn acquire(&self) -> Result<Token> {
		self.acquire_at(OffsetDateTime::now_utc())
	}

	/// Same as [`TokenSlot::acquire`] with an explicit clock.
	///
	/// An invalid token is removed from the slot before the error is returned.
	pub fn acquire_at(&self, instant: OffsetDateTime) -> Result<Token> {
		let mut guard = self.0.lock();

		let Some(token) = guard.as_ref() else {
			return Err(Error::MissingToken);
		};

		if token.is_valid_at(instant) {
			return Ok(token.clone());
		}

		*guard = None;

		Err(Error::InvalidToken)
	}

	/// Stores `token` if it is currently valid, replacing any previous token.
	///
	/// A rejected token leaves the slot untouched.
	pub fn replace(&self, token: Token) -> Result<()> {
		if !token.is_valid() {
			return Err(Error::InvalidToken);
		}

		*self.0.lock() = Some(token);

		Ok(())
	}

	/// Empties the slot and returns whatever it held.
	pub fn take(&self) -> Option<Token> {
		self.0.lock().take()
	}

	/// Returns `true` when no token (not even a placeholder) is stored.
	pub fn is_empty(&self) -> bool {
		self.0.lock().is_none()
	}
}
