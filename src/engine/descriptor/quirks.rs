// self
use crate::{_prelude::*, case::ShapeKind};

/// Engine-specific negotiation quirks that influence how flows behave.
///
/// Observed deployments disagree on which statuses mean "wrong request shape" versus
/// "rejected request"; the sets live here as explicit, documented configuration instead of a
/// hard-coded list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineQuirks {
	/// Payload shapes attempted during case creation, in priority order.
	pub shape_order: Vec<ShapeKind>,
	/// Statuses signalling the engine rejected the request shape itself; the next shape is tried.
	pub shape_mismatch_statuses: Vec<u16>,
	/// Statuses on the session-token POST that trigger the single GET retry.
	pub verb_fallback_statuses: Vec<u16>,
}
impl EngineQuirks {
	/// Checks whether a case-creation status should advance to the next shape.
	pub fn is_shape_mismatch(&self, status: u16) -> bool {
		self.shape_mismatch_statuses.contains(&status)
	}

	/// Checks whether a session-token status should fall back to GET.
	pub fn is_verb_fallback(&self, status: u16) -> bool {
		self.verb_fallback_statuses.contains(&status)
	}
}
impl Default for EngineQuirks {
	fn default() -> Self {
		Self {
			shape_order: vec![ShapeKind::Flat, ShapeKind::Nested],
			shape_mismatch_statuses: vec![400, 404, 405, 415],
			verb_fallback_statuses: vec![404, 405],
		}
	}
}
