//! Request ID middleware: propagates or generates a unique ID per request.

use std::ops::Deref;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use reqid_core::{CONTEXT_KEY, ConfigError, RequestIdConfig, RequestIdExt, ResolvedConfig};
use tracing::Instrument;
use tracing::field;

/// Resolved middleware configuration, shared by every request.
#[derive(Clone, Debug, Default)]
pub struct RequestIdState {
    inner: Arc<ResolvedConfig>,
}

impl Deref for RequestIdState {
    type Target = ResolvedConfig;

    fn deref(&self) -> &ResolvedConfig {
        &self.inner
    }
}

impl RequestIdState {
    pub fn new(config: ResolvedConfig) -> Self {
        Self {
            inner: Arc::new(config),
        }
    }

    /// Merges `config` with the defaults. `None` means all defaults.
    pub fn from_config(config: Option<RequestIdConfig>) -> Result<Self, ConfigError> {
        RequestIdConfig::resolve(config).map(Self::new)
    }
}

/// Ensures every request carries a request ID.
///
/// Unless the skip predicate matches, the ID is taken from the configured
/// header (or generated when that header is missing or empty), then:
/// - stored in the request extensions as a `RequestId`,
/// - attached to a tracing span so downstream logs include `requestid`,
/// - set on the response header, replacing any value set downstream.
///
/// The downstream response is otherwise returned untouched.
pub async fn request_id_middleware(
    State(state): State<RequestIdState>,
    req: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = req.into_parts();
    if state.should_skip(&parts) {
        return next.run(Request::from_parts(parts, body)).await;
    }

    let request_id = state.resolve_id(&parts.headers);
    parts.extensions.insert_request_id(request_id.clone());

    let span = tracing::info_span!("request", requestid = field::Empty, source = %request_id.source());
    span.record(CONTEXT_KEY, request_id.as_str());

    let mut response = next
        .run(Request::from_parts(parts, body))
        .instrument(span)
        .await;

    match HeaderValue::from_str(&request_id) {
        Ok(val) => {
            response.headers_mut().insert(state.header().clone(), val);
        }
        Err(_) => {
            tracing::warn!(
                header = %state.header(),
                requestid = %request_id,
                "request id is not a valid header value, response header left unset",
            );
        }
    }

    response
}

/// Layers the request ID middleware onto `router`.
///
/// Routes added to the router afterwards are not covered.
pub fn with_request_id<S>(
    router: Router<S>,
    config: Option<RequestIdConfig>,
) -> Result<Router<S>, ConfigError>
where
    S: Clone + Send + Sync + 'static,
{
    let state = RequestIdState::from_config(config)?;
    tracing::debug!(header = %state.header(), skip = state.has_skip(), "request id middleware enabled");
    Ok(router.layer(axum::middleware::from_fn_with_state(
        state,
        request_id_middleware,
    )))
}
