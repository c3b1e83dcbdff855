//! Demonstrates the full start-interview handshake against a mocked engine: a client-credentials
//! token grant, case creation with the flat payload shape, and a security-session-token fetch.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use url::Url;
// self
use interview_bridge::{
	engine::{EngineDescriptor, EngineId, RulebaseId, TenantId},
	flows::{ReqwestBridge, StartInterviewRequest},
	token::Credentials,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"demo-access\",\"token_type\":\"bearer\",\"expires_in\":900}",
			);
		})
		.await;
	let case_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/engine/rest/v1/cases")
				.header("authorization", "Bearer demo-access");
			then.status(201)
				.header("content-type", "application/json")
				.body("{\"caseId\":\"demo-case\"}");
		})
		.await;
	let session_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/engine/token/v1/demo-case/securitysessiontoken");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"securitySessionToken\":\"demo-session\"}");
		})
		.await;
	let descriptor = EngineDescriptor::builder(EngineId::new("demo-engine")?)
		.identity_provider_endpoint(Url::parse(&server.url("/oauth/token"))?)
		.service_endpoint(Url::parse(&server.base_url())?)
		.tenant(TenantId::new("tenant-acme")?)
		.default_rulebase(RulebaseId::new("demo-rulebase")?)
		.build()?;
	let bridge = ReqwestBridge::new(descriptor, Credentials::new("demo-client", "demo-secret"));
	let params = bridge.params_from_request(&StartInterviewRequest::default())?;
	let session = bridge.start_interview(&params).await?;

	println!("Started interview: {}.", serde_json::to_string(&session)?);

	token_mock.assert_async().await;
	case_mock.assert_async().await;
	session_mock.assert_async().await;

	Ok(())
}
