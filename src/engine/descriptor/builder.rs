// self
use crate::{
	_prelude::*,
	engine::{EngineDescriptor, EngineEndpoints, EngineId, EngineQuirks, RulebaseId, TenantId},
};

/// Errors raised while constructing or validating descriptors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum EngineDescriptorError {
	/// Identity-provider endpoint is mandatory for the token grant.
	#[error("Missing identity-provider endpoint.")]
	MissingIdentityProviderEndpoint,
	/// Service endpoint is mandatory for case and session-token calls.
	#[error("Missing service endpoint.")]
	MissingServiceEndpoint,
	/// At least one payload shape must be configured.
	#[error("Descriptor must configure at least one payload shape.")]
	EmptyShapeOrder,
}

/// Builder for [`EngineDescriptor`] values.
#[derive(Debug)]
pub struct EngineDescriptorBuilder {
	/// Identifier for the descriptor being constructed.
	pub id: EngineId,
	/// Identity-provider token endpoint.
	pub identity_provider_endpoint: Option<Url>,
	/// Engine service base URL.
	pub service_endpoint: Option<Url>,
	/// Optional tenant forwarded with every engine call.
	pub tenant: Option<TenantId>,
	/// Optional rulebase applied when the inbound request names none.
	pub default_rulebase: Option<RulebaseId>,
	/// Negotiation quirks.
	pub quirks: EngineQuirks,
}
impl EngineDescriptorBuilder {
	/// Creates a new builder seeded with the provided identifier.
	pub fn new(id: EngineId) -> Self {
		Self {
			id,
			identity_provider_endpoint: None,
			service_endpoint: None,
			tenant: None,
			default_rulebase: None,
			quirks: EngineQuirks::default(),
		}
	}

	/// Sets the identity-provider token endpoint.
	pub fn identity_provider_endpoint(mut self, url: Url) -> Self {
		self.identity_provider_endpoint = Some(url);

		self
	}

	/// Sets the engine service base URL.
	pub fn service_endpoint(mut self, url: Url) -> Self {
		self.service_endpoint = Some(url);

		self
	}

	/// Sets the tenant forwarded as `x-tenant-id`.
	pub fn tenant(mut self, tenant: TenantId) -> Self {
		self.tenant = Some(tenant);

		self
	}

	/// Sets the rulebase used when the inbound request names none.
	pub fn default_rulebase(mut self, rulebase: RulebaseId) -> Self {
		self.default_rulebase = Some(rulebase);

		self
	}

	/// Overrides the negotiation quirks.
	pub fn quirks(mut self, quirks: EngineQuirks) -> Self {
		self.quirks = quirks;

		self
	}

	/// Consumes the builder and validates the resulting descriptor.
	pub fn build(self) -> Result<EngineDescriptor, EngineDescriptorError> {
		let identity_provider = self
			.identity_provider_endpoint
			.ok_or(EngineDescriptorError::MissingIdentityProviderEndpoint)?;
		let service = self.service_endpoint.ok_or(EngineDescriptorError::MissingServiceEndpoint)?;

		if self.quirks.shape_order.is_empty() {
			return Err(EngineDescriptorError::EmptyShapeOrder);
		}

		Ok(EngineDescriptor {
			id: self.id,
			endpoints: EngineEndpoints { identity_provider, service },
			tenant: self.tenant,
			default_rulebase: self.default_rulebase,
			quirks: self.quirks,
		})
	}
}
