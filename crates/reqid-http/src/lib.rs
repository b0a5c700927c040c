//! reqid HTTP: axum adapter for the request-ID middleware.
//!
//! ```rust,ignore
//! let app = reqid_http::with_request_id(Router::new().route("/", get(handler)), None)?;
//!
//! async fn handler(id: RequestId) -> String {
//!     id.into_inner()
//! }
//! ```

pub mod middleware;

pub use middleware::{RequestIdState, request_id_middleware, with_request_id};
pub use reqid_core::{
    ApiError, CONTEXT_KEY, ConfigError, DEFAULT_HEADER, IdGenerator, IdSource, RequestId,
    RequestIdConfig, RequestIdExt, ResolvedConfig, Sequential, UuidV4,
};
