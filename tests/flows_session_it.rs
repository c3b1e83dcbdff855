// crates.io
use httpmock::prelude::*;
// self
use interview_bridge::{
	_preludet::*,
	engine::CaseId,
	error::MalformedResponseError,
	token::{AccessToken, TokenSecret},
};

const SESSION_PATH: &str = "/engine/token/v1/C1/securitysessiontoken";

fn build_bridge(server: &MockServer) -> ReqwestTestBridge {
	build_reqwest_test_bridge(test_descriptor(&server.base_url()), test_credentials())
}

fn token() -> AccessToken {
	AccessToken { secret: TokenSecret::new("T1"), expires_in: None }
}

fn case() -> CaseId {
	CaseId::new("C1").expect("Case identifier should be valid.")
}

#[tokio::test]
async fn json_response_yields_the_prioritized_field() {
	let server = MockServer::start_async().await;
	let bridge = build_bridge(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(SESSION_PATH).header("authorization", "Bearer T1");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"token\":\"S9\",\"value\":\"ignored\"}");
		})
		.await;
	let session = bridge
		.fetch_session_token(&token(), &case())
		.await
		.expect("Session-token fetch should succeed.");

	assert_eq!(session.expose(), "S9");

	mock.assert_async().await;
}

#[tokio::test]
async fn method_not_allowed_falls_back_to_get_with_identical_headers() {
	let server = MockServer::start_async().await;
	let bridge = build_bridge(&server);
	let post_mock = server
		.mock_async(|when, then| {
			when.method(POST).path(SESSION_PATH);
			then.status(405);
		})
		.await;
	let get_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path(SESSION_PATH)
				.header("authorization", "Bearer T1")
				.header("accept", "application/json");
			then.status(200).header("content-type", "text/plain").body("  raw-token-42  ");
		})
		.await;
	let session = bridge
		.fetch_session_token(&token(), &case())
		.await
		.expect("GET retry should succeed.");

	assert_eq!(session.expose(), "raw-token-42");

	post_mock.assert_async().await;
	get_mock.assert_async().await;
}

#[tokio::test]
async fn server_error_is_terminal_without_a_get_retry() {
	let server = MockServer::start_async().await;
	let bridge = build_bridge(&server);
	let post_mock = server
		.mock_async(|when, then| {
			when.method(POST).path(SESSION_PATH);
			then.status(500).body("engine down");
		})
		.await;
	let get_mock = server
		.mock_async(|when, then| {
			when.method(GET).path(SESSION_PATH);
			then.status(200).body("never");
		})
		.await;
	let err = bridge
		.fetch_session_token(&token(), &case())
		.await
		.expect_err("500 should be terminal.");

	assert!(matches!(err, Error::SessionToken { status: 500, ref body } if body == "engine down"));

	post_mock.assert_async().await;
	get_mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn not_found_then_failing_get_surfaces_the_get_status() {
	let server = MockServer::start_async().await;
	let bridge = build_bridge(&server);
	let post_mock = server
		.mock_async(|when, then| {
			when.method(POST).path(SESSION_PATH);
			then.status(404);
		})
		.await;
	let get_mock = server
		.mock_async(|when, then| {
			when.method(GET).path(SESSION_PATH);
			then.status(500).body("still down");
		})
		.await;
	let err = bridge
		.fetch_session_token(&token(), &case())
		.await
		.expect_err("Failed retry should surface.");

	assert!(matches!(err, Error::SessionToken { status: 500, .. }));

	post_mock.assert_async().await;
	get_mock.assert_async().await;
}

#[tokio::test]
async fn json_without_token_fields_is_malformed() {
	let server = MockServer::start_async().await;
	let bridge = build_bridge(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(SESSION_PATH);
			then.status(200).header("content-type", "application/json").body("{\"expires\":60}");
		})
		.await;
	let err = bridge
		.fetch_session_token(&token(), &case())
		.await
		.expect_err("JSON without token fields should fail.");

	assert!(matches!(err, Error::MalformedResponse(MalformedResponseError::MissingSessionToken)));

	mock.assert_async().await;
}
