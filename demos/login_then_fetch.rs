//! Logs in through an anonymous endpoint, installs the returned token, and fetches a
//! protected resource with it.

// crates.io
use color_eyre::{Result, eyre::eyre};
use httpmock::prelude::*;
use serde_json::{Value, json};
// self
use bearer_rest::{
	auth::Token,
	client::ReqwestRestClient,
	config::{ConfigMap, INSECURE_SKIP_VERIFY},
	http::Headers,
	payload::Payload,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let login_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/login");
			then.status(200).header("content-type", "application/json").body(
				"{\"key\":\"demo-access\",\"validity\":\"2099-12-31 23:59:59\"}",
			);
		})
		.await;
	let items_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/items").header("authorization", "Bearer demo-access");
			then.status(200).body("[\"alpha\",\"beta\"]");
		})
		.await;
	let map = ConfigMap::from([
		// The mock server presents a self-signed certificate.
		(INSECURE_SKIP_VERIFY.into(), json!(true)),
		("login_url".into(), json!(server.url("/login"))),
	]);
	let client = ReqwestRestClient::from_map(map)?;
	let credentials = as_payload(json!({ "user": "demo", "password": "demo" }))?;
	let login = client
		.post_with_headers_no_auth(client.config("login_url")?, credentials, Headers::new())
		.await?;
	let body: Value = serde_json::from_str(login.raw())?;
	let key = body["key"].as_str().ok_or_else(|| eyre!("Login response is missing `key`."))?;
	let validity =
		body["validity"].as_str().ok_or_else(|| eyre!("Login response is missing `validity`."))?;

	client.set_token(Token::issue(key, validity)?)?;

	let items = client.get(&server.url("/items"), Payload::new()).await?;

	println!("GET /items -> {} {}.", items.code(), items.raw());

	login_mock.assert_async().await;
	items_mock.assert_async().await;

	Ok(())
}

fn as_payload(value: Value) -> Result<Payload> {
	match value {
		Value::Object(map) => Ok(map),
		_ => Err(eyre!("Payload must be a JSON object.")),
	}
}
