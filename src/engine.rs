//! Engine-facing configuration: typed identifiers and the validated descriptor.
//!
//! `descriptor` exposes validated metadata (`EngineDescriptor`) covering the identity-provider
//! and service endpoints, the optional tenant, and the negotiation quirks (payload shape order,
//! shape-mismatch statuses, verb-fallback statuses). The descriptor is injected data; loading
//! it from the environment is the caller's concern.

pub mod descriptor;
pub mod id;

pub use descriptor::*;
pub use id::*;
