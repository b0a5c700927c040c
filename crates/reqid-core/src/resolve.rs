//! Identifier resolution and the typed request-scoped accessor.

use http::request::Parts;
use http::{Extensions, HeaderMap};

use crate::config::ResolvedConfig;
use crate::id::RequestId;

impl ResolvedConfig {
    /// Returns `true` when the configured predicate asks to skip this request.
    pub fn should_skip(&self, parts: &Parts) -> bool {
        self.next.as_ref().is_some_and(|skip| skip(parts))
    }

    /// Adopts the inbound header value, or generates a new identifier.
    ///
    /// The header value is taken verbatim when it is present, non-empty and
    /// valid UTF-8. Anything else (including non-UTF-8 obs-text) counts as absent.
    pub fn resolve_id(&self, headers: &HeaderMap) -> RequestId {
        let supplied = headers
            .get(&self.header)
            .and_then(|v| std::str::from_utf8(v.as_bytes()).ok())
            .filter(|v| !v.is_empty());

        match supplied {
            Some(value) => RequestId::client_supplied(value),
            None => {
                let id = RequestId::generated(self.generator.generate());
                tracing::trace!(header = %self.header, requestid = %id, "generated request id");
                id
            }
        }
    }
}

/// Typed access to the [`RequestId`] stored with a request.
pub trait RequestIdExt {
    fn request_id(&self) -> Option<&RequestId>;

    /// Stores `id`, returning the identifier it replaced, if any.
    fn insert_request_id(&mut self, id: RequestId) -> Option<RequestId>;
}

impl RequestIdExt for Extensions {
    fn request_id(&self) -> Option<&RequestId> {
        self.get::<RequestId>()
    }

    fn insert_request_id(&mut self, id: RequestId) -> Option<RequestId> {
        self.insert(id)
    }
}

impl<B> RequestIdExt for http::Request<B> {
    fn request_id(&self) -> Option<&RequestId> {
        self.extensions().request_id()
    }

    fn insert_request_id(&mut self, id: RequestId) -> Option<RequestId> {
        self.extensions_mut().insert_request_id(id)
    }
}

impl RequestIdExt for Parts {
    fn request_id(&self) -> Option<&RequestId> {
        self.extensions.request_id()
    }

    fn insert_request_id(&mut self, id: RequestId) -> Option<RequestId> {
        self.extensions.insert_request_id(id)
    }
}

#[cfg(test)]
mod tests {
    use http::{HeaderValue, Request};

    use super::*;
    use crate::config::RequestIdConfig;
    use crate::generator::Sequential;
    use crate::id::IdSource;

    fn config(cfg: RequestIdConfig) -> ResolvedConfig {
        RequestIdConfig::resolve(Some(cfg)).unwrap()
    }

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn adopts_supplied_header() {
        let cfg = ResolvedConfig::default();
        let id = cfg.resolve_id(&headers(&[("x-request-id", "abc-123")]));
        assert_eq!(id.as_str(), "abc-123");
        assert_eq!(id.source(), IdSource::ClientSupplied);
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let cfg = config(RequestIdConfig::default().with_header("X-Trace-Id"));
        let id = cfg.resolve_id(&headers(&[("x-trace-id", "t1")]));
        assert_eq!(id.as_str(), "t1");
    }

    #[test]
    fn generates_when_absent_or_empty() {
        let cfg = config(RequestIdConfig::default().with_generator(Sequential::new("g")));

        let id = cfg.resolve_id(&HeaderMap::new());
        assert_eq!(id.as_str(), "g-1");
        assert_eq!(id.source(), IdSource::Generated);

        let id = cfg.resolve_id(&headers(&[("x-request-id", "")]));
        assert_eq!(id.as_str(), "g-2");
        assert_eq!(id.source(), IdSource::Generated);
    }

    #[test]
    fn ignores_other_headers() {
        let cfg = config(RequestIdConfig::default().with_generator(|| "new".to_string()));
        let id = cfg.resolve_id(&headers(&[("x-correlation-id", "other")]));
        assert_eq!(id.as_str(), "new");
    }

    #[test]
    fn adopts_utf8_header_verbatim() {
        let cfg = config(RequestIdConfig::default().with_generator(|| "fresh".to_string()));
        let mut map = HeaderMap::new();
        map.insert("x-request-id", HeaderValue::from_bytes("req-café".as_bytes()).unwrap());
        let id = cfg.resolve_id(&map);
        assert_eq!(id.as_str(), "req-café");
        assert_eq!(id.source(), IdSource::ClientSupplied);
    }

    #[test]
    fn non_utf8_header_counts_as_absent() {
        let cfg = config(RequestIdConfig::default().with_generator(|| "fresh".to_string()));
        let mut map = HeaderMap::new();
        map.insert("x-request-id", HeaderValue::from_bytes(b"caf\xe9").unwrap());
        assert_eq!(cfg.resolve_id(&map).as_str(), "fresh");
    }

    #[test]
    fn skip_predicate_sees_request_head() {
        let cfg = config(RequestIdConfig::default().with_skip(|parts| parts.uri.path() == "/health"));
        let (health, ()) = Request::get("/health").body(()).unwrap().into_parts();
        let (other, ()) = Request::get("/api").body(()).unwrap().into_parts();
        assert!(cfg.should_skip(&health));
        assert!(!cfg.should_skip(&other));
    }

    #[test]
    fn never_skips_by_default() {
        let cfg = ResolvedConfig::default();
        let (parts, ()) = Request::get("/health").body(()).unwrap().into_parts();
        assert!(!cfg.should_skip(&parts));
    }

    #[test]
    fn extensions_store_round_trip() {
        let mut req = Request::new(());
        assert!(req.request_id().is_none());

        assert!(req.insert_request_id(RequestId::client_supplied("a")).is_none());
        assert_eq!(req.request_id().map(RequestId::as_str), Some("a"));

        let (parts, ()) = req.into_parts();
        assert_eq!(parts.request_id().map(RequestId::as_str), Some("a"));
    }
}
