//! Transport primitives for engine calls.
//!
//! The module exposes [`EngineHttpClient`], the bridge's only dependency on an HTTP stack,
//! alongside the [`EngineRequest`]/[`EngineResponse`] value types the flows exchange with it.
//! Every outbound call—the token grant, each case-creation shape attempt, and both
//! session-token verb attempts—travels through the same `send` capability, so custom
//! transports slot in by implementing one trait.

// self
use crate::_prelude::*;

/// HTTP verbs the bridge dispatches. Verb fallback treats these as data, not control flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
	/// HTTP POST.
	Post,
	/// HTTP GET.
	Get,
}
impl Verb {
	/// Returns the verb as an HTTP method string.
	pub const fn as_str(self) -> &'static str {
		match self {
			Verb::Post => "POST",
			Verb::Get => "GET",
		}
	}
}
impl Display for Verb {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Request body variants the flows produce.
#[derive(Clone, Debug)]
pub enum RequestBody {
	/// JSON document, serialized on dispatch.
	Json(serde_json::Value),
	/// Pre-encoded `application/x-www-form-urlencoded` payload.
	Form(String),
}
impl RequestBody {
	/// Returns the `Content-Type` header value for the body variant.
	pub const fn content_type(&self) -> &'static str {
		match self {
			RequestBody::Json(_) => "application/json; charset=utf-8",
			RequestBody::Form(_) => "application/x-www-form-urlencoded",
		}
	}

	/// Encodes the body into raw bytes.
	pub fn to_bytes(&self) -> Vec<u8> {
		match self {
			RequestBody::Json(value) => value.to_string().into_bytes(),
			RequestBody::Form(encoded) => encoded.clone().into_bytes(),
		}
	}
}

/// A single outbound engine call.
#[derive(Clone, Debug)]
pub struct EngineRequest {
	/// Verb to dispatch with.
	pub verb: Verb,
	/// Fully resolved endpoint URL.
	pub url: Url,
	/// Header name/value pairs; `Content-Type` is derived from the body instead.
	pub headers: Vec<(&'static str, String)>,
	/// Optional request body.
	pub body: Option<RequestBody>,
}
impl EngineRequest {
	/// Creates a body-less request.
	pub fn new(verb: Verb, url: Url) -> Self {
		Self { verb, url, headers: Vec::new(), body: None }
	}

	/// Appends a header pair.
	pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
		self.headers.push((name, value.into()));

		self
	}

	/// Appends every header pair from `headers`.
	pub fn headers(mut self, headers: &[(&'static str, String)]) -> Self {
		self.headers.extend(headers.iter().cloned());

		self
	}

	/// Attaches a body.
	pub fn body(mut self, body: RequestBody) -> Self {
		self.body = Some(body);

		self
	}
}

/// Raw response handed back by a transport.
#[derive(Clone, Debug, Default)]
pub struct EngineResponse {
	/// HTTP status code.
	pub status: u16,
	/// Declared `Content-Type`, when present.
	pub content_type: Option<String>,
	/// Raw response body bytes.
	pub body: Vec<u8>,
}
impl EngineResponse {
	/// Checks whether the status falls in the 2xx range.
	pub const fn is_success(&self) -> bool {
		self.status >= 200 && self.status < 300
	}

	/// Checks whether the response declared a JSON content type.
	pub fn is_json(&self) -> bool {
		self.content_type.as_deref().is_some_and(|ct| ct.to_ascii_lowercase().contains("json"))
	}

	/// Returns the body decoded as text, replacing invalid UTF-8.
	pub fn text(&self) -> String {
		String::from_utf8_lossy(&self.body).into_owned()
	}
}

/// Boxed future returned by [`EngineHttpClient::send`].
pub type TransportFuture<'a, E> =
	Pin<Box<dyn Future<Output = std::result::Result<EngineResponse, E>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing engine calls.
///
/// Implementations must be `Send + Sync + 'static` so a single transport can be shared
/// across concurrent pipeline invocations without additional wrappers, and the futures they
/// return must be `Send` so the flows can box them freely. The bridge never inspects the
/// transport's error type beyond wrapping it as a network failure.
pub trait EngineHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Dispatches a single request and resolves with the raw response.
	fn send(&self, request: EngineRequest) -> TransportFuture<'_, Self::TransportError>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
/// Engine calls should not follow redirects across hosts; configure any custom
/// [`ReqwestClient`] accordingly, along with per-call timeouts.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl std::ops::Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl EngineHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn send(&self, request: EngineRequest) -> TransportFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let mut builder = match request.verb {
				Verb::Post => client.post(request.url),
				Verb::Get => client.get(request.url),
			};

			for (name, value) in &request.headers {
				builder = builder.header(*name, value);
			}
			if let Some(body) = &request.body {
				builder = builder.header("content-type", body.content_type()).body(body.to_bytes());
			}

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let content_type = response
				.headers()
				.get(reqwest::header::CONTENT_TYPE)
				.and_then(|value| value.to_str().ok())
				.map(ToOwned::to_owned);
			let body = response.bytes().await?.to_vec();

			Ok(EngineResponse { status, content_type, body })
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn response(status: u16, content_type: Option<&str>, body: &str) -> EngineResponse {
		EngineResponse {
			status,
			content_type: content_type.map(ToOwned::to_owned),
			body: body.as_bytes().to_vec(),
		}
	}

	#[test]
	fn success_range_covers_2xx_only() {
		assert!(response(200, None, "").is_success());
		assert!(response(201, None, "").is_success());
		assert!(!response(199, None, "").is_success());
		assert!(!response(301, None, "").is_success());
		assert!(!response(500, None, "").is_success());
	}

	#[test]
	fn json_detection_matches_declared_content_type() {
		assert!(response(200, Some("application/json"), "{}").is_json());
		assert!(response(200, Some("Application/JSON; charset=utf-8"), "{}").is_json());
		assert!(!response(200, Some("text/plain"), "token").is_json());
		assert!(!response(200, None, "token").is_json());
	}

	#[test]
	fn body_content_types_match_variants() {
		assert_eq!(
			RequestBody::Json(serde_json::json!({})).content_type(),
			"application/json; charset=utf-8",
		);
		assert_eq!(
			RequestBody::Form("a=b".into()).content_type(),
			"application/x-www-form-urlencoded",
		);
	}

	#[test]
	fn verbs_render_as_http_methods() {
		assert_eq!(Verb::Post.as_str(), "POST");
		assert_eq!(Verb::Get.to_string(), "GET");
	}
}
