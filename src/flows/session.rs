//! Session Token Fetcher step: verb fallback plus encoding-agnostic extraction.

// crates.io
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	engine::CaseId,
	error::MalformedResponseError,
	flows::{Bridge, common},
	http::{EngineHttpClient, EngineRequest, EngineResponse, Verb},
	obs::{self, StepKind, StepOutcome, StepSpan},
	session::{SecuritySessionToken, extract_session_token, token_from_text},
	token::AccessToken,
};

impl<C> Bridge<C>
where
	C: ?Sized + EngineHttpClient,
{
	/// Fetches the security session token scoped to `case`.
	///
	/// Attempts `POST` first; a verb-fallback status (see `EngineQuirks::verb_fallback_statuses`)
	/// triggers exactly one `GET` retry against the identical URL and headers. The final
	/// response's declared content type selects JSON field extraction or the trimmed raw body.
	pub async fn fetch_session_token(
		&self,
		token: &AccessToken,
		case: &CaseId,
	) -> Result<SecuritySessionToken> {
		const KIND: StepKind = StepKind::SessionToken;

		let span = StepSpan::new(KIND, "fetch_session_token");

		obs::record_step_outcome(KIND, StepOutcome::Attempt);

		let result = span
			.instrument(async move {
				let url = self.descriptor.session_token_endpoint(case)?;
				let headers = common::engine_headers(&self.descriptor, token);
				let request = EngineRequest::new(Verb::Post, url.clone()).headers(&headers);
				let mut response = common::dispatch(self.http_client.as_ref(), request).await?;

				// Some deployments expose the endpoint as GET only.
				if self.descriptor.quirks.is_verb_fallback(response.status) {
					let retry = EngineRequest::new(Verb::Get, url).headers(&headers);

					response = common::dispatch(self.http_client.as_ref(), retry).await?;
				}

				if !response.is_success() {
					return Err(Error::SessionToken {
						status: response.status,
						body: response.text(),
					});
				}

				finish_fetch(&response)
			})
			.await;

		match &result {
			Ok(_) => obs::record_step_outcome(KIND, StepOutcome::Success),
			Err(_) => obs::record_step_outcome(KIND, StepOutcome::Failure),
		}

		result
	}
}

fn finish_fetch(response: &EngineResponse) -> Result<SecuritySessionToken> {
	if response.is_json() {
		let mut deserializer = serde_json::Deserializer::from_slice(&response.body);
		let value: Value = serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| MalformedResponseError::Json { source, status: response.status })?;
		let token =
			extract_session_token(&value).ok_or(MalformedResponseError::MissingSessionToken)?;

		Ok(token)
	} else {
		let token =
			token_from_text(&response.text()).ok_or(MalformedResponseError::MissingSessionToken)?;

		Ok(token)
	}
}
