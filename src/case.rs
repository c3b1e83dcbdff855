//! Case Creator domain: parameters, payload shapes, and identifier extraction.
//!
//! Payload shapes are data, not code: [`ShapeKind`] is an ordered set of pure renderers and the
//! descriptor's quirks carry the priority order, so the negotiation sequence stays a visible,
//! testable artifact. The same goes for [`CASE_ID_FIELDS`], the ordered identifier candidates
//! checked against creation responses.

// crates.io
use rand::RngCore;
use serde_json::{Value, json};
// self
use crate::{
	_prelude::*,
	engine::{CaseId, LanguageCode, RulebaseId},
};

/// Response fields checked for the case identifier, in priority order.
pub const CASE_ID_FIELDS: [&str; 4] = ["caseId", "id", "uuid", "caseUuid"];

const APPLICATION_ID_ATTRIBUTE: &str = "case.ApplicationID";

/// Parameters for one case creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseParams {
	/// Rulebase the case is created for.
	pub rulebase: RulebaseId,
	/// Language the case is conducted in.
	pub language: LanguageCode,
	/// Optional bootstrap attribute block seeded into the case.
	pub bootstrap: Option<BootstrapData>,
}
impl CaseParams {
	/// Creates parameters with the default language and no bootstrap data.
	pub fn new(rulebase: RulebaseId) -> Self {
		Self { rulebase, language: LanguageCode::default(), bootstrap: None }
	}

	/// Overrides the language.
	pub fn with_language(mut self, language: LanguageCode) -> Self {
		self.language = language;

		self
	}

	/// Attaches bootstrap data.
	pub fn with_bootstrap(mut self, bootstrap: BootstrapData) -> Self {
		self.bootstrap = Some(bootstrap);

		self
	}
}

/// Bootstrap attribute block seeded into a new case.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapData {
	/// Ordered attribute entries.
	pub attributes: Vec<BootstrapAttribute>,
}
impl BootstrapData {
	/// Creates a block from the provided attributes.
	pub fn new(attributes: impl IntoIterator<Item = BootstrapAttribute>) -> Self {
		Self { attributes: attributes.into_iter().collect() }
	}
}

/// A single bootstrap attribute, serialized the way the engine expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapAttribute {
	/// Dotted attribute path (e.g. `case.CurrencyCode`).
	pub attribute: String,
	/// Attribute value, always transported as a string.
	#[serde(rename = "valueAsString")]
	pub value: String,
	/// Question definition the attribute answers, when the rulebase requires one.
	#[serde(rename = "questionDefinitionUuid", skip_serializing_if = "Option::is_none")]
	pub question_definition_uuid: Option<String>,
}
impl BootstrapAttribute {
	/// Creates an attribute without a question definition.
	pub fn new(attribute: impl Into<String>, value: impl Into<String>) -> Self {
		Self { attribute: attribute.into(), value: value.into(), question_definition_uuid: None }
	}

	/// Attaches the question definition identifier.
	pub fn with_question_definition(mut self, uuid: impl Into<String>) -> Self {
		self.question_definition_uuid = Some(uuid.into());

		self
	}
}

/// Candidate payload shapes for the case-creation endpoint, tried in the descriptor's order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
	/// `{rulebaseUuid, languageCode}`.
	Flat,
	/// `{rulebase: {uuid}, languageCode}`.
	Nested,
	/// Full `bootstrapType: HOST_APP` payload carrying the bootstrap attribute block.
	Bootstrap,
}
impl ShapeKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ShapeKind::Flat => "flat",
			ShapeKind::Nested => "nested",
			ShapeKind::Bootstrap => "bootstrap",
		}
	}

	/// Renders the request payload for `params`.
	pub fn render(self, params: &CaseParams) -> Value {
		match self {
			ShapeKind::Flat => json!({
				"rulebaseUuid": params.rulebase.as_ref(),
				"languageCode": params.language.as_ref(),
			}),
			ShapeKind::Nested => json!({
				"rulebase": { "uuid": params.rulebase.as_ref() },
				"languageCode": params.language.as_ref(),
			}),
			ShapeKind::Bootstrap => {
				let mut attributes =
					params.bootstrap.as_ref().map(|data| data.attributes.clone()).unwrap_or_default();

				// The engine rejects bootstrap payloads without an application identifier; mint
				// one when the caller did not supply it.
				if !attributes.iter().any(|attr| attr.attribute == APPLICATION_ID_ATTRIBUTE) {
					attributes.insert(
						0,
						BootstrapAttribute::new(APPLICATION_ID_ATTRIBUTE, new_application_id()),
					);
				}

				json!({
					"language": params.language.as_ref(),
					"rulebaseUuid": params.rulebase.as_ref(),
					"bootstrapType": "HOST_APP",
					"mandatoryValidationsSettings": {
						"validateOnNextForm": false,
						"validateOnPreviousForm": false,
						"validateOnSubmit": false,
					},
					"bootstrapData": { "attributes": attributes },
				})
			},
		}
	}
}
impl Display for ShapeKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome of a successful case creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatedCase {
	/// Identifier extracted from the creation response.
	pub id: CaseId,
	/// Shape the engine accepted.
	pub shape: ShapeKind,
}

/// Extracts the case identifier from a creation response, trying [`CASE_ID_FIELDS`] in order.
///
/// Trimmed non-empty strings and bare numbers count as identifiers; anything else is skipped.
pub fn extract_case_id(value: &Value) -> Option<String> {
	CASE_ID_FIELDS.iter().find_map(|field| candidate_id(value.get(*field)?))
}

/// Mints an RFC 4122 version-4 identifier for the bootstrap application-id attribute.
pub fn new_application_id() -> String {
	let mut bytes = [0_u8; 16];

	rand::rng().fill_bytes(&mut bytes);

	bytes[6] = (bytes[6] & 0x0f) | 0x40;
	bytes[8] = (bytes[8] & 0x3f) | 0x80;

	let hex: String = bytes.iter().map(|byte| format!("{byte:02x}")).collect();

	format!("{}-{}-{}-{}-{}", &hex[0..8], &hex[8..12], &hex[12..16], &hex[16..20], &hex[20..32])
}

fn candidate_id(value: &Value) -> Option<String> {
	match value {
		Value::String(text) => {
			let trimmed = text.trim();

			if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
		},
		Value::Number(number) => Some(number.to_string()),
		_ => None,
	}
}
