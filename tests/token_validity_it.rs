// crates.io
use time::macros::format_description;
// self
use bearer_rest::{_preludet::*, auth::Token};

fn validity_in(offset: Duration) -> String {
	(OffsetDateTime::now_utc() + offset)
		.format(format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"))
		.expect("Validity fixture should format.")
}

#[test]
fn token_with_future_validity_is_valid() {
	let mut token = Token::new();

	token.set_key("1234567890");
	token.set_validity(&validity_in(Duration::seconds(2))).expect("Validity should parse.");

	assert!(token.is_valid());
}

#[test]
fn token_with_past_validity_is_invalid() {
	let mut token = Token::new();

	token.set_key("1234567890");
	token.set_validity(&validity_in(Duration::seconds(-1))).expect("Validity should parse.");

	assert!(!token.is_valid());
}

#[test]
fn token_without_key_is_invalid() {
	let mut token = Token::new();

	token.set_validity(&validity_in(Duration::days(1))).expect("Validity should parse.");

	assert!(!token.is_valid());
}

#[test]
fn validity_round_trips_exactly() {
	let raw = validity_in(Duration::hours(3));
	let token = Token::issue("k", &raw).expect("Token should issue.");

	assert_eq!(token.validity(), raw);
	assert_eq!(token.key(), "k");
}

#[test]
fn malformed_validity_is_reported_and_ignored() {
	let raw = validity_in(Duration::hours(3));
	let mut token = Token::issue("k", &raw).expect("Token should issue.");
	let err = token.set_validity("tomorrow").expect_err("Free text must be rejected.");

	assert!(matches!(err, Error::MalformedTimestamp { .. }));
	assert_eq!(token.validity(), raw);
}
