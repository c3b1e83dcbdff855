// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use interview_bridge::{
	_preludet::*,
	case::ShapeKind,
	engine::{EngineDescriptor, EngineDescriptorError, EngineId, EngineQuirks, RulebaseId},
	flows::StartInterviewRequest,
};

fn engine_id() -> EngineId {
	EngineId::new("mock-engine").expect("Engine identifier should be valid.")
}

#[test]
fn builder_rejects_missing_endpoints() {
	assert_eq!(
		EngineDescriptor::builder(engine_id()).build().unwrap_err(),
		EngineDescriptorError::MissingIdentityProviderEndpoint,
	);
	assert_eq!(
		EngineDescriptor::builder(engine_id())
			.identity_provider_endpoint(
				Url::parse("https://idp.test/oauth/token").expect("URL should parse."),
			)
			.build()
			.unwrap_err(),
		EngineDescriptorError::MissingServiceEndpoint,
	);
}

#[test]
fn builder_rejects_an_empty_shape_order() {
	let err = EngineDescriptor::builder(engine_id())
		.identity_provider_endpoint(
			Url::parse("https://idp.test/oauth/token").expect("URL should parse."),
		)
		.service_endpoint(Url::parse("https://engine.test").expect("URL should parse."))
		.quirks(EngineQuirks { shape_order: Vec::new(), ..Default::default() })
		.build()
		.unwrap_err();

	assert_eq!(err, EngineDescriptorError::EmptyShapeOrder);
}

#[test]
fn quirks_deserialize_with_defaults_for_omitted_fields() {
	let quirks =
		serde_json::from_value::<EngineQuirks>(json!({ "shape_order": ["bootstrap", "flat"] }))
			.expect("Quirks should deserialize.");

	assert_eq!(quirks.shape_order, [ShapeKind::Bootstrap, ShapeKind::Flat]);
	assert_eq!(quirks.shape_mismatch_statuses, EngineQuirks::default().shape_mismatch_statuses);
	assert_eq!(quirks.verb_fallback_statuses, EngineQuirks::default().verb_fallback_statuses);
}

#[tokio::test]
async fn bootstrap_only_shape_order_sends_the_bootstrap_payload() {
	let server = MockServer::start_async().await;
	let descriptor = EngineDescriptor::builder(engine_id())
		.identity_provider_endpoint(
			Url::parse(&server.url("/oauth/token")).expect("URL should parse."),
		)
		.service_endpoint(Url::parse(&server.base_url()).expect("URL should parse."))
		.default_rulebase(RulebaseId::new("rb-default").expect("Rulebase should be valid."))
		.quirks(EngineQuirks { shape_order: vec![ShapeKind::Bootstrap], ..Default::default() })
		.build()
		.expect("Engine descriptor should build successfully.");
	let bridge = build_reqwest_test_bridge(descriptor, test_credentials());
	let _token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"T1\"}");
		})
		.await;
	let case_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/engine/rest/v1/cases")
				.json_body_includes(r#"{ "bootstrapType": "HOST_APP" }"#)
				.json_body_includes(r#"{ "rulebaseUuid": "rb-default" }"#);
			then.status(201).header("content-type", "application/json").body("{\"caseId\":\"C1\"}");
		})
		.await;
	let _session_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/engine/token/v1/C1/securitysessiontoken");
			then.status(200).header("content-type", "text/plain").body("S1");
		})
		.await;
	let params = bridge
		.params_from_request(&StartInterviewRequest::default())
		.expect("Parameters should validate.");
	let session = bridge.start_interview(&params).await.expect("Pipeline should succeed.");

	assert_eq!(session.case_id.as_ref(), "C1");

	case_mock.assert_async().await;
}
