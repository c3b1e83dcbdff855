//! Token Acquirer step: one client-credentials grant attempt per pipeline run.

// self
use crate::{
	_prelude::*,
	error::MalformedResponseError,
	flows::{Bridge, common},
	http::{EngineHttpClient, EngineRequest, EngineResponse, RequestBody, Verb},
	obs::{self, StepKind, StepOutcome, StepSpan},
	token::{AccessToken, TokenSecret},
};

impl<C> Bridge<C>
where
	C: ?Sized + EngineHttpClient,
{
	/// Exchanges the configured client credentials for a bearer access token.
	///
	/// Exactly one attempt; the token is never cached across invocations.
	pub async fn acquire_token(&self) -> Result<AccessToken> {
		const KIND: StepKind = StepKind::AccessToken;

		let span = StepSpan::new(KIND, "acquire_token");

		obs::record_step_outcome(KIND, StepOutcome::Attempt);

		let result = span
			.instrument(async move {
				let request = EngineRequest::new(
					Verb::Post,
					self.descriptor.endpoints.identity_provider.clone(),
				)
				.body(RequestBody::Form(self.credentials.grant_form()));
				let response = common::dispatch(self.http_client.as_ref(), request).await?;

				if !response.is_success() {
					return Err(Error::UpstreamAuth {
						status: response.status,
						body: response.text(),
					});
				}

				parse_grant(&response)
			})
			.await;

		match &result {
			Ok(_) => obs::record_step_outcome(KIND, StepOutcome::Success),
			Err(_) => obs::record_step_outcome(KIND, StepOutcome::Failure),
		}

		result
	}
}

#[derive(Deserialize)]
struct GrantResponse {
	access_token: Option<String>,
	expires_in: Option<i64>,
}

fn parse_grant(response: &EngineResponse) -> Result<AccessToken> {
	let mut deserializer = serde_json::Deserializer::from_slice(&response.body);
	let grant: GrantResponse = serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| MalformedResponseError::Json { source, status: response.status })?;
	let secret = grant
		.access_token
		.as_deref()
		.map(str::trim)
		.filter(|token| !token.is_empty())
		.ok_or(MalformedResponseError::MissingAccessToken)?;

	Ok(AccessToken {
		secret: TokenSecret::new(secret),
		expires_in: grant.expires_in.map(Duration::seconds),
	})
}
