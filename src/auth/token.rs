//! Bearer token holding a key and an absolute UTC expiry.
//!
//! Validity travels as text in the fixed `YYYY-MM-DD HH:MM:SS` pattern (UTC, second
//! precision, no offset). [`Token::validity`] re-serializes with the same pattern, so a
//! well-formed string survives a set/get round-trip unchanged.

// crates.io
use time::{
	PrimitiveDateTime, UtcOffset, format_description::BorrowedFormatItem,
	macros::{datetime, format_description},
};
// self
use crate::{_prelude::*, auth::TokenSecret};

const VALIDITY_FORMAT: &[BorrowedFormatItem<'static>] =
	format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
/// Expiry of a token whose validity was never set.
const UNSET_VALIDITY: OffsetDateTime = datetime!(0001-01-01 00:00:00 UTC);

/// Credential attached to authenticated requests.
///
/// `key` and `validity` are set independently. A token is valid only while its key is
/// non-empty and the current UTC instant is strictly before its validity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
	key: TokenSecret,
	validity: OffsetDateTime,
}
impl Token {
	/// Creates an empty token (no key, validity at `0001-01-01 00:00:00`).
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a token from a key and a `YYYY-MM-DD HH:MM:SS` validity string.
	pub fn issue(key: impl Into<TokenSecret>, validity: &str) -> Result<Self> {
		let mut token = Self::new();

		token.set_key(key);
		token.set_validity(validity)?;

		Ok(token)
	}

	/// Builds a token from a key and an absolute expiry instant.
	pub fn with_expiry(key: impl Into<TokenSecret>, validity: OffsetDateTime) -> Self {
		Self { key: key.into(), validity: validity.to_offset(UtcOffset::UTC) }
	}

	/// Stores the key verbatim.
	pub fn set_key(&mut self, key: impl Into<TokenSecret>) {
		self.key = key.into();
	}

	/// Parses and stores the validity instant.
	///
	/// The year is exactly four unsigned digits. On failure the previous validity stays in
	/// place and [`Error::MalformedTimestamp`] is returned.
	pub fn set_validity(&mut self, validity: &str) -> Result<()> {
		let malformed = |source| Error::MalformedTimestamp { value: validity.to_owned(), source };

		// `[year]` would otherwise accept a leading `+` or `-`.
		if !validity.starts_with(|c: char| c.is_ascii_digit()) {
			return Err(malformed(None));
		}

		let parsed =
			PrimitiveDateTime::parse(validity, VALIDITY_FORMAT).map_err(|e| malformed(Some(e)))?;

		self.validity = parsed.assume_utc();

		Ok(())
	}

	/// Stores an absolute expiry instant, normalized to UTC.
	pub fn set_validity_at(&mut self, validity: OffsetDateTime) {
		self.validity = validity.to_offset(UtcOffset::UTC);
	}

	/// Returns the raw key. Callers must avoid logging it.
	pub fn key(&self) -> &str {
		self.key.expose()
	}

	/// Returns the key wrapped in its redacting container.
	pub fn secret(&self) -> &TokenSecret {
		&self.key
	}

	/// Returns the validity formatted as `YYYY-MM-DD HH:MM:SS`.
	pub fn validity(&self) -> String {
		// Every component of the pattern exists on `OffsetDateTime`.
		self.validity.format(VALIDITY_FORMAT).unwrap_or_default()
	}

	/// Returns the stored expiry instant.
	pub fn expires_at(&self) -> OffsetDateTime {
		self.validity
	}

	/// Checks validity against the provided instant (exclusive upper bound).
	pub fn is_valid_at(&self, instant: OffsetDateTime) -> bool {
		if self.key.is_empty() {
			return false;
		}

		instant < self.validity
	}

	/// Checks validity against the current UTC instant.
	pub fn is_valid(&self) -> bool {
		self.is_valid_at(OffsetDateTime::now_utc())
	}
}
impl Default for Token {
	fn default() -> Self {
		Self { key: TokenSecret::default(), validity: UNSET_VALIDITY }
	}
}
