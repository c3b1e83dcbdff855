//! Optional observability helpers for bridge flows.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `interview_bridge.step` with the `step` and
//!   `stage` (call site) fields.
//! - Enable `metrics` to increment the `interview_bridge_step_total` counter for every
//!   attempt/success/failure, labeled by `step` + `outcome`, and
//!   `interview_bridge_shape_attempt_total` for each case-creation shape attempt, labeled by
//!   `shape` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Pipeline steps observed by the bridge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepKind {
	/// Client-credentials token exchange.
	AccessToken,
	/// Case creation with shape negotiation.
	CaseCreation,
	/// Security-session-token fetch with verb fallback.
	SessionToken,
	/// Full three-step pipeline.
	Interview,
}
impl StepKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			StepKind::AccessToken => "access_token",
			StepKind::CaseCreation => "case_creation",
			StepKind::SessionToken => "session_token",
			StepKind::Interview => "interview",
		}
	}
}
impl Display for StepKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepOutcome {
	/// Entry to a bridge step.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl StepOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			StepOutcome::Attempt => "attempt",
			StepOutcome::Success => "success",
			StepOutcome::Failure => "failure",
		}
	}
}
impl Display for StepOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
