//! Bridge-level error types shared across flows, the engine descriptor, and transports.

// self
use crate::_prelude::*;

/// Bridge-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical bridge error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Inbound request parameter problem detected before any network call.
	#[error(transparent)]
	Validation(#[from] ValidationError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Upstream returned a success status but the body lacked an expected field.
	#[error(transparent)]
	MalformedResponse(#[from] MalformedResponseError),

	/// Identity provider rejected or errored on the token request.
	#[error("Identity provider rejected the token request with status {status}: {body}.")]
	UpstreamAuth {
		/// HTTP status returned by the identity provider.
		status: u16,
		/// Raw response body returned by the identity provider.
		body: String,
	},
	/// Every payload shape was exhausted, or the engine returned a terminal status.
	#[error("Case creation failed with status {status}: {body}.")]
	CaseCreation {
		/// HTTP status of the last case-creation attempt.
		status: u16,
		/// Raw response body of the last case-creation attempt.
		body: String,
	},
	/// Session-token endpoint errored on both verb attempts.
	#[error("Session token fetch failed with status {status}: {body}.")]
	SessionToken {
		/// HTTP status of the final session-token attempt.
		status: u16,
		/// Raw response body of the final session-token attempt.
		body: String,
	},
}

/// Inbound parameter validation failures raised before the pipeline touches the network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum ValidationError {
	/// No rulebase identifier was supplied and the descriptor carries no default.
	#[error("A rulebase identifier is required to create a case.")]
	MissingRulebase,
	/// A supplied identifier failed validation.
	#[error("Invalid identifier supplied.")]
	InvalidIdentifier(#[from] crate::engine::IdentifierError),
}

/// Configuration and construction failures raised by the bridge.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// An engine endpoint URL could not be assembled from the descriptor.
	#[error("Engine endpoint URL could not be assembled.")]
	InvalidEndpoint {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// The service endpoint is a cannot-be-a-base URL and cannot carry path segments.
	#[error("Service endpoint cannot carry path segments.")]
	OpaqueServiceEndpoint,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}

/// Success responses whose bodies lacked a usable value.
#[derive(Debug, ThisError)]
pub enum MalformedResponseError {
	/// Token endpoint succeeded without a non-empty `access_token` field.
	#[error("Identity provider response is missing a non-empty access_token field.")]
	MissingAccessToken,
	/// Case creation succeeded without a usable case identifier field.
	#[error("Case creation succeeded but no case identifier was found in the response.")]
	MissingCaseId,
	/// Case creation returned an identifier that failed validation.
	#[error("Case creation returned an unusable case identifier.")]
	InvalidCaseId {
		/// Underlying identifier validation failure.
		#[source]
		source: crate::engine::IdentifierError,
	},
	/// Session-token response lacked a non-empty token value.
	#[error("Session-token response is missing a non-empty token value.")]
	MissingSessionToken,
	/// A body that declared JSON could not be parsed.
	#[error("Upstream returned malformed JSON.")]
	Json {
		/// Structured parsing failure, including the failing path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status of the response, for correlation.
		status: u16,
	},
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the engine.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the engine.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
