//! reqid core: request identifier resolution, independent of any web framework.
//!
//! This crate owns the decision logic of the request-ID middleware:
//! - the [`RequestId`] value attached to every request,
//! - pluggable identifier generators ([`IdGenerator`], [`UuidV4`], [`Sequential`]),
//! - configuration and its merge with defaults ([`RequestIdConfig`], [`ResolvedConfig`]),
//! - the typed request-scoped accessor ([`RequestIdExt`]).
//!
//! Only the `http` crate types are required. The `axum` feature adds the
//! `RequestId` extractor and the JSON `IntoResponse` for [`ApiError`]; the
//! middleware itself lives in `reqid-http`.

pub mod config;
pub mod error;
#[cfg(feature = "axum")]
mod extract;
pub mod generator;
pub mod id;
pub mod resolve;

pub use config::{RequestIdConfig, ResolvedConfig, SkipFn};
pub use error::{ApiError, ConfigError};
pub use generator::{IdGenerator, Sequential, UuidV4};
pub use id::{IdSource, RequestId};
pub use resolve::RequestIdExt;

/// Header used to read and write the identifier when none is configured.
pub const DEFAULT_HEADER: &str = "X-Request-ID";

/// Name under which the identifier is exposed to log layers.
pub const CONTEXT_KEY: &str = "requestid";
