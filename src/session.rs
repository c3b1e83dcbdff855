//! Session Token Fetcher domain: the scoped token wrapper and encoding-agnostic extraction.

// crates.io
use serde_json::Value;
// self
use crate::{_prelude::*, token::TokenSecret};

/// JSON fields checked for the session token, in priority order.
pub const SESSION_TOKEN_FIELDS: [&str; 3] = ["securitySessionToken", "token", "value"];

/// Short-lived credential scoped to exactly one case.
///
/// Serializes as the raw token string so it can flow straight into the caller's response body;
/// `Debug` and `Display` stay redacted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecuritySessionToken(TokenSecret);
impl SecuritySessionToken {
	/// Wraps a token value.
	pub fn new(value: impl Into<String>) -> Self {
		Self(TokenSecret::new(value))
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		self.0.expose()
	}
}
impl Display for SecuritySessionToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		Display::fmt(&self.0, f)
	}
}

/// Extracts the session token from a parsed JSON body, trying [`SESSION_TOKEN_FIELDS`] in order.
pub fn extract_session_token(value: &Value) -> Option<SecuritySessionToken> {
	SESSION_TOKEN_FIELDS.iter().find_map(|field| candidate_token(value.get(*field)?))
}

/// Interprets a non-JSON response body as the bare token, trimming surrounding whitespace.
pub fn token_from_text(body: &str) -> Option<SecuritySessionToken> {
	let trimmed = body.trim();

	if trimmed.is_empty() { None } else { Some(SecuritySessionToken::new(trimmed)) }
}

fn candidate_token(value: &Value) -> Option<SecuritySessionToken> {
	match value {
		Value::String(text) => token_from_text(text),
		_ => None,
	}
}
