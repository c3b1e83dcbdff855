//! Shared helpers for flow implementations (dispatch, engine headers).

// self
use crate::{
	_prelude::*,
	engine::EngineDescriptor,
	error::TransportError,
	http::{EngineHttpClient, EngineRequest, EngineResponse},
	token::AccessToken,
};

/// Dispatches a request through the transport, wrapping its native error as a network failure.
pub(crate) async fn dispatch<C>(client: &C, request: EngineRequest) -> Result<EngineResponse>
where
	C: ?Sized + EngineHttpClient,
{
	client.send(request).await.map_err(|err| TransportError::network(err).into())
}

/// Builds the auth/tenant header set shared by the case and session-token endpoints.
pub(crate) fn engine_headers(
	descriptor: &EngineDescriptor,
	token: &AccessToken,
) -> Vec<(&'static str, String)> {
	let mut headers = vec![("accept", "application/json".to_owned()), ("authorization", token.bearer())];

	if let Some(tenant) = &descriptor.tenant {
		headers.push(("x-tenant-id", tenant.to_string()));
	}

	headers
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		engine::{EngineDescriptor, EngineId, TenantId},
		token::TokenSecret,
	};

	fn token() -> AccessToken {
		AccessToken { secret: TokenSecret::new("T1"), expires_in: None }
	}

	fn descriptor(tenant: Option<&str>) -> EngineDescriptor {
		let mut builder =
			EngineDescriptor::builder(EngineId::new("unit").expect("Engine identifier should be valid."))
				.identity_provider_endpoint(
					Url::parse("https://idp.test/oauth/token")
						.expect("Identity provider URL should parse."),
				)
				.service_endpoint(
					Url::parse("https://engine.test").expect("Service URL should parse."),
				);

		if let Some(tenant) = tenant {
			builder = builder.tenant(TenantId::new(tenant).expect("Tenant should be valid."));
		}

		builder.build().expect("Descriptor should build.")
	}

	#[test]
	fn headers_carry_accept_and_bearer() {
		let headers = engine_headers(&descriptor(None), &token());

		assert_eq!(headers, [
			("accept", "application/json".to_owned()),
			("authorization", "Bearer T1".to_owned()),
		]);
	}

	#[test]
	fn tenant_header_is_appended_when_configured() {
		let headers = engine_headers(&descriptor(Some("tenant-a")), &token());

		assert!(headers.contains(&("x-tenant-id", "tenant-a".to_owned())));
	}
}
