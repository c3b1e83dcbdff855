//! Token Acquirer domain: credentials, the redacted secret wrapper, and the access token.

// crates.io
use url::form_urlencoded;
// self
use crate::_prelude::*;

/// Redacted token secret wrapper keeping sensitive material out of logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner secret value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for TokenSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("TokenSecret").field(&"<redacted>").finish()
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Client credentials injected by configuration; read-only for the lifetime of an invocation.
#[derive(Clone, Debug)]
pub struct Credentials {
	/// OAuth 2.0 client identifier.
	pub client_id: String,
	/// OAuth 2.0 client secret.
	pub client_secret: TokenSecret,
	/// Optional scope requested with the grant.
	pub scope: Option<String>,
}
impl Credentials {
	/// Creates credentials without a scope.
	pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: TokenSecret::new(client_secret.into()),
			scope: None,
		}
	}

	/// Attaches a scope to the grant request.
	pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
		self.scope = Some(scope.into());

		self
	}

	/// Encodes the client-credentials grant as a form body.
	pub fn grant_form(&self) -> String {
		let mut form = form_urlencoded::Serializer::new(String::new());

		form.append_pair("grant_type", "client_credentials");
		form.append_pair("client_id", &self.client_id);
		form.append_pair("client_secret", self.client_secret.expose());

		if let Some(scope) = &self.scope {
			form.append_pair("scope", scope);
		}

		form.finish()
	}
}

/// Bearer access token produced by the Token Acquirer; consumed by the two engine steps and
/// discarded with the invocation. Opaque to the bridge.
#[derive(Clone, Debug)]
pub struct AccessToken {
	/// The bearer secret.
	pub secret: TokenSecret,
	/// Token lifetime advertised by the identity provider, when present.
	pub expires_in: Option<Duration>,
}
impl AccessToken {
	/// Renders the `Authorization` header value.
	pub fn bearer(&self) -> String {
		format!("Bearer {}", self.secret.expose())
	}
}
