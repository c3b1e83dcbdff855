//! Scripted transport double for async unit tests of the negotiation logic.

// std
use std::{collections::VecDeque, convert::Infallible, sync::Mutex};
// self
use crate::{
	_prelude::*,
	engine::{EngineDescriptor, EngineId, TenantId},
	flows::Bridge,
	http::{EngineHttpClient, EngineRequest, EngineResponse, TransportFuture},
	token::Credentials,
};

/// Transport that replays canned responses in order and records every request it saw.
pub(crate) struct ScriptedTransport {
	requests: Mutex<Vec<EngineRequest>>,
	responses: Mutex<VecDeque<EngineResponse>>,
}
impl ScriptedTransport {
	pub(crate) fn new(responses: impl IntoIterator<Item = EngineResponse>) -> Arc<Self> {
		Arc::new(Self {
			requests: Mutex::new(Vec::new()),
			responses: Mutex::new(responses.into_iter().collect()),
		})
	}

	pub(crate) fn requests(&self) -> Vec<EngineRequest> {
		self.requests.lock().expect("Request log should not be poisoned.").clone()
	}
}
impl EngineHttpClient for ScriptedTransport {
	type TransportError = Infallible;

	fn send(&self, request: EngineRequest) -> TransportFuture<'_, Self::TransportError> {
		self.requests.lock().expect("Request log should not be poisoned.").push(request);

		let response = self
			.responses
			.lock()
			.expect("Response script should not be poisoned.")
			.pop_front()
			.expect("Scripted transport ran out of responses.");

		Box::pin(async move { Ok(response) })
	}
}

pub(crate) fn json_response(status: u16, body: serde_json::Value) -> EngineResponse {
	EngineResponse {
		status,
		content_type: Some("application/json".into()),
		body: body.to_string().into_bytes(),
	}
}

pub(crate) fn text_response(status: u16, content_type: &str, body: &str) -> EngineResponse {
	EngineResponse {
		status,
		content_type: Some(content_type.to_owned()),
		body: body.as_bytes().to_vec(),
	}
}

pub(crate) fn status_response(status: u16) -> EngineResponse {
	EngineResponse { status, content_type: None, body: Vec::new() }
}

pub(crate) fn scripted_bridge(
	responses: impl IntoIterator<Item = EngineResponse>,
) -> (Bridge<ScriptedTransport>, Arc<ScriptedTransport>) {
	let transport = ScriptedTransport::new(responses);
	let descriptor =
		EngineDescriptor::builder(EngineId::new("scripted").expect("Engine identifier should be valid."))
			.identity_provider_endpoint(
				Url::parse("https://idp.test/oauth/token")
					.expect("Identity provider URL should parse."),
			)
			.service_endpoint(Url::parse("https://engine.test").expect("Service URL should parse."))
			.tenant(TenantId::new("tenant-a").expect("Tenant should be valid."))
			.build()
			.expect("Descriptor should build.");
	let bridge = Bridge::with_http_client(
		descriptor,
		Credentials::new("bridge-client", "bridge-secret"),
		transport.clone(),
	);

	(bridge, transport)
}
