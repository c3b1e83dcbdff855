//! Full pipeline: token grant, case creation, and session-token fetch in sequence.

// self
use crate::{
	_prelude::*,
	case::CaseParams,
	engine::{CaseId, LanguageCode, RulebaseId},
	error::ValidationError,
	flows::Bridge,
	http::EngineHttpClient,
	obs::{self, StepKind, StepOutcome, StepSpan},
	session::SecuritySessionToken,
};

/// Inbound boundary payload for starting an interview.
///
/// The outer framing (HTTP parsing, error envelope, status mapping) belongs to the caller; this
/// type only captures the fields the pipeline needs.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartInterviewRequest {
	/// Rulebase to create the case for; falls back to the descriptor's default.
	pub rulebase_uuid: Option<String>,
	/// Optional language override.
	pub language_code: Option<String>,
}

/// Normalized success payload returned to the caller.
///
/// Serializes exactly as `{"caseId": ..., "securitySessionToken": ...}`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSession {
	/// Identifier of the created case.
	pub case_id: CaseId,
	/// Session token scoped to that case.
	pub security_session_token: SecuritySessionToken,
}

impl<C> Bridge<C>
where
	C: ?Sized + EngineHttpClient,
{
	/// Resolves validated case parameters from an inbound request, before any network call.
	pub fn params_from_request(&self, request: &StartInterviewRequest) -> Result<CaseParams> {
		let rulebase = match &request.rulebase_uuid {
			Some(raw) => RulebaseId::new(raw).map_err(ValidationError::from)?,
			None => self
				.descriptor
				.default_rulebase
				.clone()
				.ok_or(ValidationError::MissingRulebase)?,
		};
		let mut params = CaseParams::new(rulebase);

		if let Some(raw) = &request.language_code {
			params = params.with_language(LanguageCode::new(raw).map_err(ValidationError::from)?);
		}

		Ok(params)
	}

	/// Runs the three-step handshake end to end.
	///
	/// The pipeline never partially succeeds: a case identifier is only returned together with a
	/// session token obtained for it, and every failure aborts the invocation.
	pub async fn start_interview(&self, params: &CaseParams) -> Result<InterviewSession> {
		const KIND: StepKind = StepKind::Interview;

		let span = StepSpan::new(KIND, "start_interview");

		obs::record_step_outcome(KIND, StepOutcome::Attempt);

		let result = span
			.instrument(async move {
				let token = self.acquire_token().await?;
				let case = self.create_case(&token, params).await?;
				let session = self.fetch_session_token(&token, &case.id).await?;

				Ok(InterviewSession { case_id: case.id, security_session_token: session })
			})
			.await;

		match &result {
			Ok(_) => obs::record_step_outcome(KIND, StepOutcome::Success),
			Err(_) => obs::record_step_outcome(KIND, StepOutcome::Failure),
		}

		result
	}
}
