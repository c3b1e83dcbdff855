//! Interview-engine bridge—negotiate case payload shapes, verb-fallback session tokens, and
//! transport-aware observability for case-management integrations.
//!
//! The bridge runs a three-step handshake against an external interview engine: a
//! client-credentials token exchange, a case creation that tries alternative payload shapes in a
//! fixed priority order, and a security-session-token fetch that falls back between HTTP verbs
//! and response encodings. See [`flows::Bridge`] for the entry point.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod case;
pub mod engine;
pub mod error;
pub mod flows;
pub mod http;
pub mod obs;
pub mod session;
pub mod token;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		engine::{EngineDescriptor, EngineId},
		flows::Bridge,
		http::ReqwestHttpClient,
		token::Credentials,
	};

	/// Bridge type alias used by reqwest-backed integration tests.
	pub type ReqwestTestBridge = Bridge<ReqwestHttpClient>;

	/// Builds a descriptor pointing every endpoint at a mock server base URL.
	///
	/// The identity provider is mounted at `<base>/oauth/token`; the engine endpoints hang off
	/// the base itself.
	pub fn test_descriptor(base: &str) -> EngineDescriptor {
		let id = EngineId::new("mock-engine").expect("Engine identifier should be valid.");

		EngineDescriptor::builder(id)
			.identity_provider_endpoint(
				Url::parse(&format!("{base}/oauth/token"))
					.expect("Mock identity provider URL should parse successfully."),
			)
			.service_endpoint(Url::parse(base).expect("Mock service URL should parse successfully."))
			.build()
			.expect("Engine descriptor should build successfully.")
	}

	/// Credentials used across integration tests.
	pub fn test_credentials() -> Credentials {
		Credentials::new("bridge-client", "bridge-secret")
	}

	/// Constructs a [`Bridge`] backed by the default reqwest transport.
	pub fn build_reqwest_test_bridge(
		descriptor: EngineDescriptor,
		credentials: Credentials,
	) -> ReqwestTestBridge {
		Bridge::new(descriptor, credentials)
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::Duration;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {color_eyre as _, httpmock as _, interview_bridge as _};
