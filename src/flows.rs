//! High-level flow orchestration for the three-step engine handshake.

pub mod common;
pub mod interview;

mod case;
mod session;
mod token;

#[cfg(test)] pub(crate) mod testing;

pub use interview::*;

// self
use crate::{_prelude::*, engine::EngineDescriptor, http::EngineHttpClient, token::Credentials};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Bridge specialized for the crate's default reqwest transport.
pub type ReqwestBridge = Bridge<ReqwestHttpClient>;

/// Coordinates the three-step handshake against a single engine descriptor.
///
/// The bridge owns the HTTP transport, the engine descriptor, and the client credentials so the
/// per-step implementations can focus on their negotiation logic (shape fallback, verb fallback,
/// field-priority extraction). It holds no per-invocation state: every call runs the pipeline
/// from scratch, and one bridge can serve concurrent invocations.
#[derive(Clone)]
pub struct Bridge<C>
where
	C: ?Sized + EngineHttpClient,
{
	/// HTTP transport used for every outbound engine request.
	pub http_client: Arc<C>,
	/// Engine descriptor that defines endpoints and negotiation quirks.
	pub descriptor: EngineDescriptor,
	/// Client credentials for the token grant.
	pub credentials: Credentials,
}
impl<C> Bridge<C>
where
	C: ?Sized + EngineHttpClient,
{
	/// Creates a bridge that reuses the caller-provided transport.
	pub fn with_http_client(
		descriptor: EngineDescriptor,
		credentials: Credentials,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self { http_client: http_client.into(), descriptor, credentials }
	}
}
#[cfg(feature = "reqwest")]
impl Bridge<ReqwestHttpClient> {
	/// Creates a new bridge for the provided descriptor and credentials.
	///
	/// The bridge provisions its own reqwest-backed transport so callers do not need to pass
	/// HTTP handles explicitly. Use [`Bridge::with_http_client`] to supply a preconfigured
	/// [`ReqwestHttpClient`] (timeouts, proxies, custom TLS).
	pub fn new(descriptor: EngineDescriptor, credentials: Credentials) -> Self {
		Self::with_http_client(descriptor, credentials, ReqwestHttpClient::default())
	}
}
impl<C> Debug for Bridge<C>
where
	C: ?Sized + EngineHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Bridge")
			.field("descriptor", &self.descriptor)
			.field("client_id", &self.credentials.client_id)
			.finish()
	}
}
