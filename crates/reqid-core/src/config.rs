//! Middleware configuration and its merge with defaults.

use std::fmt;
use std::sync::Arc;

use http::HeaderName;
use http::request::Parts;

use crate::DEFAULT_HEADER;
use crate::error::ConfigError;
use crate::generator::{IdGenerator, UuidV4};

/// Predicate deciding whether the middleware leaves a request alone.
pub type SkipFn = Arc<dyn Fn(&Parts) -> bool + Send + Sync>;

/// User-facing configuration. Every field is optional.
///
/// Unset fields (`header` empty, `generator` `None`) are filled from
/// [`RequestIdConfig::default`] by [`RequestIdConfig::resolve`].
#[derive(Clone)]
pub struct RequestIdConfig {
    /// Skips the middleware for a request when it returns `true`.
    /// `None` never skips.
    pub next: Option<SkipFn>,

    /// Header to read the client identifier from and write the resolved one to.
    /// Default: `X-Request-ID`.
    pub header: String,

    /// Produces an identifier when the client did not send one.
    /// Default: [`UuidV4`].
    pub generator: Option<Arc<dyn IdGenerator>>,
}

impl Default for RequestIdConfig {
    fn default() -> Self {
        Self {
            next: None,
            header: DEFAULT_HEADER.to_string(),
            generator: Some(Arc::new(UuidV4)),
        }
    }
}

impl fmt::Debug for RequestIdConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestIdConfig")
            .field("next", &self.next.as_ref().map(|_| "<fn>"))
            .field("header", &self.header)
            .field("generator", &self.generator.as_ref().map(|_| "<generator>"))
            .finish()
    }
}

impl RequestIdConfig {
    /// A configuration with every field unset, to be filled in selectively.
    pub fn empty() -> Self {
        Self {
            next: None,
            header: String::new(),
            generator: None,
        }
    }

    #[must_use]
    pub fn with_skip<F>(mut self, skip: F) -> Self
    where
        F: Fn(&Parts) -> bool + Send + Sync + 'static,
    {
        self.next = Some(Arc::new(skip));
        self
    }

    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    #[must_use]
    pub fn with_generator<G>(mut self, generator: G) -> Self
    where
        G: IdGenerator + 'static,
    {
        self.generator = Some(Arc::new(generator));
        self
    }

    /// Merges an optional configuration with the defaults.
    ///
    /// `None` yields the defaults. Otherwise only the unset fields are
    /// replaced; the skip predicate is kept exactly as supplied.
    pub fn resolve(config: Option<Self>) -> Result<ResolvedConfig, ConfigError> {
        let config = config.unwrap_or_default();

        let header = if config.header.is_empty() {
            DEFAULT_HEADER
        } else {
            config.header.as_str()
        };
        let header = HeaderName::from_bytes(header.as_bytes())
            .map_err(|_| ConfigError::InvalidHeaderName(header.to_string()))?;

        let generator = config
            .generator
            .unwrap_or_else(|| Arc::new(UuidV4) as Arc<dyn IdGenerator>);

        Ok(ResolvedConfig {
            next: config.next,
            header,
            generator,
        })
    }
}

/// Configuration with defaults applied and the header name parsed.
///
/// Built once and shared by every request.
#[derive(Clone)]
pub struct ResolvedConfig {
    pub(crate) next: Option<SkipFn>,
    pub(crate) header: HeaderName,
    pub(crate) generator: Arc<dyn IdGenerator>,
}

impl ResolvedConfig {
    /// Header name, normalized to lower case.
    pub fn header(&self) -> &HeaderName {
        &self.header
    }

    pub fn generator(&self) -> &dyn IdGenerator {
        self.generator.as_ref()
    }

    pub fn has_skip(&self) -> bool {
        self.next.is_some()
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            next: None,
            header: HeaderName::from_static("x-request-id"),
            generator: Arc::new(UuidV4),
        }
    }
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("skip", &self.has_skip())
            .field("header", &self.header)
            .finish_non_exhaustive()
    }
}
