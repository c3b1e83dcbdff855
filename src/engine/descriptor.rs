//! Engine descriptor data structures and helpers shared by all flows.
//!
//! The descriptor is the single injected configuration value: endpoint URLs, the optional
//! tenant, an optional default rulebase, and the negotiation quirks that drive the shape and
//! verb fallbacks. A validating builder keeps malformed descriptors out of the flows.

/// Builder API for assembling engine descriptors.
pub mod builder;
/// Engine-specific negotiation quirks.
pub mod quirks;

pub use builder::*;
pub use quirks::*;

// self
use crate::{
	_prelude::*,
	engine::{CaseId, EngineId, RulebaseId, TenantId},
	error::ConfigError,
};

const CASES_PATH: &str = "engine/rest/v1/cases";

/// Endpoint set declared by an engine descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineEndpoints {
	/// Identity-provider token endpoint used for the client-credentials grant.
	pub identity_provider: Url,
	/// Base URL of the interview engine; REST paths are appended to it.
	pub service: Url,
}

/// Immutable engine descriptor consumed by flows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineDescriptor {
	/// Descriptor identifier.
	pub id: EngineId,
	/// Endpoint definitions exposed by the engine deployment.
	pub endpoints: EngineEndpoints,
	/// Optional tenant forwarded as the `x-tenant-id` header.
	pub tenant: Option<TenantId>,
	/// Rulebase applied when the inbound request names none.
	pub default_rulebase: Option<RulebaseId>,
	/// Negotiation quirks.
	pub quirks: EngineQuirks,
}
impl EngineDescriptor {
	/// Creates a new builder for the provided identifier.
	pub fn builder(id: EngineId) -> EngineDescriptorBuilder {
		EngineDescriptorBuilder::new(id)
	}

	/// Resolves the case-creation endpoint.
	pub fn cases_endpoint(&self) -> Result<Url, ConfigError> {
		self.service_endpoint(CASES_PATH)
	}

	/// Resolves the session-token endpoint for a case.
	///
	/// The case identifier comes back from the engine, so it is appended as a single
	/// percent-encoded path segment rather than spliced into the URL string.
	pub fn session_token_endpoint(&self, case: &CaseId) -> Result<Url, ConfigError> {
		let mut url = self.service_endpoint("engine/token/v1")?;

		url.path_segments_mut()
			.map_err(|()| ConfigError::OpaqueServiceEndpoint)?
			.push(case)
			.push("securitysessiontoken");

		Ok(url)
	}

	// Deployments configure the service base with and without trailing slashes; trim before
	// appending so both resolve to the same endpoint.
	fn service_endpoint(&self, path: &str) -> Result<Url, ConfigError> {
		let base = self.endpoints.service.as_str().trim_end_matches('/');

		Url::parse(&format!("{base}/{path}")).map_err(|source| ConfigError::InvalidEndpoint { source })
	}
}
