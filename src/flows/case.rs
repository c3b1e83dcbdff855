//! Case Creator step: ordered payload-shape negotiation against the cases endpoint.

// crates.io
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	case::{CaseParams, CreatedCase, ShapeKind, extract_case_id},
	engine::CaseId,
	error::MalformedResponseError,
	flows::{Bridge, common},
	http::{EngineHttpClient, EngineRequest, EngineResponse, RequestBody, Verb},
	obs::{self, StepKind, StepOutcome, StepSpan},
	token::AccessToken,
};

impl<C> Bridge<C>
where
	C: ?Sized + EngineHttpClient,
{
	/// Creates a case, trying the descriptor's payload shapes in priority order.
	///
	/// A shape-mismatch status (see `EngineQuirks::shape_mismatch_statuses`) advances to the
	/// next shape; any other non-success status is terminal. Each attempt is a live call, so a
	/// rejected attempt having created a case upstream is a risk owned by the engine.
	pub async fn create_case(
		&self,
		token: &AccessToken,
		params: &CaseParams,
	) -> Result<CreatedCase> {
		const KIND: StepKind = StepKind::CaseCreation;

		let span = StepSpan::new(KIND, "create_case");

		obs::record_step_outcome(KIND, StepOutcome::Attempt);

		let result = span
			.instrument(async move {
				let url = self.descriptor.cases_endpoint()?;
				let headers = common::engine_headers(&self.descriptor, token);
				let mut last_rejection = None;

				for shape in &self.descriptor.quirks.shape_order {
					obs::record_shape_attempt(shape.as_str(), StepOutcome::Attempt);

					let request = EngineRequest::new(Verb::Post, url.clone())
						.headers(&headers)
						.body(RequestBody::Json(shape.render(params)));
					let response = common::dispatch(self.http_client.as_ref(), request).await?;

					if response.is_success() {
						obs::record_shape_attempt(shape.as_str(), StepOutcome::Success);

						return finish_creation(*shape, &response);
					}

					obs::record_shape_attempt(shape.as_str(), StepOutcome::Failure);

					let body = response.text();

					if !self.descriptor.quirks.is_shape_mismatch(response.status) {
						return Err(Error::CaseCreation { status: response.status, body });
					}

					last_rejection = Some((response.status, body));
				}

				// The builder rejects an empty shape order, so at least one attempt ran.
				let (status, body) =
					last_rejection.unwrap_or((0, "No payload shapes configured.".into()));

				Err(Error::CaseCreation { status, body })
			})
			.await;

		match &result {
			Ok(_) => obs::record_step_outcome(KIND, StepOutcome::Success),
			Err(_) => obs::record_step_outcome(KIND, StepOutcome::Failure),
		}

		result
	}
}

fn finish_creation(shape: ShapeKind, response: &EngineResponse) -> Result<CreatedCase> {
	// Response fields differ per deployment; a 2xx body that is not JSON carries no identifier
	// and fails the same way as a JSON body without one.
	let value: Value = serde_json::from_slice(&response.body).unwrap_or(Value::Null);
	let raw = extract_case_id(&value).ok_or(MalformedResponseError::MissingCaseId)?;
	let id = CaseId::new(raw).map_err(|source| MalformedResponseError::InvalidCaseId { source })?;

	Ok(CreatedCase { id, shape })
}
