//! Server configuration via CLI args and environment variables.

use std::collections::HashSet;

use clap::Parser;
use reqid_http::{DEFAULT_HEADER, RequestIdConfig, Sequential};

/// Demo HTTP server for the reqid request ID middleware.
#[derive(Parser, Debug, Clone)]
#[command(name = "reqid-server", version, about)]
pub struct Config {
    /// Bind address.
    #[arg(long, default_value = "0.0.0.0", env = "REQID_HOST")]
    pub host: String,

    /// Bind port.
    #[arg(long, default_value_t = 8080, env = "REQID_PORT")]
    pub port: u16,

    /// Header carrying the request ID, read from requests and written to responses.
    #[arg(long, default_value = DEFAULT_HEADER, env = "REQID_HEADER")]
    pub header: String,

    /// Request paths the middleware leaves untouched (comma-separated, exact match).
    #[arg(long = "skip-path", env = "REQID_SKIP_PATHS", value_delimiter = ',')]
    pub skip_paths: Vec<String>,

    /// Generate sequential `<prefix>-<n>` IDs instead of random UUIDs.
    #[arg(long, env = "REQID_ID_PREFIX")]
    pub id_prefix: Option<String>,

    /// Log level.
    #[arg(long, default_value = "info", env = "REQID_LOG_LEVEL")]
    pub log_level: String,

    /// Log format: "text" or "json".
    #[arg(long, default_value = "text", env = "REQID_LOG_FORMAT")]
    pub log_format: String,
}

impl Config {
    /// Parses configuration from CLI args and env vars.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Builds the middleware configuration. Unset options keep their defaults.
    pub fn request_id_config(&self) -> RequestIdConfig {
        let mut cfg = RequestIdConfig::empty().with_header(self.header.clone());

        let skip: HashSet<String> = self
            .skip_paths
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect();
        if !skip.is_empty() {
            cfg = cfg.with_skip(move |parts| skip.contains(parts.uri.path()));
        }

        if let Some(prefix) = &self.id_prefix {
            cfg = cfg.with_generator(Sequential::new(prefix.clone()));
        }

        cfg
    }
}

#[cfg(test)]
mod tests {
    use reqid_http::IdGenerator;

    use super::*;

    fn parse(args: &[&str]) -> Config {
        <Config as Parser>::parse_from(std::iter::once("reqid-server").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let cfg = parse(&[]);
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.header, "X-Request-ID");
        assert!(cfg.skip_paths.is_empty());
        assert!(cfg.id_prefix.is_none());

        let mw = cfg.request_id_config();
        assert!(mw.next.is_none());
        assert!(mw.generator.is_none());
    }

    #[test]
    fn skip_paths_split_on_commas() {
        let cfg = parse(&["--skip-path", "/health, /metrics"]);
        assert_eq!(cfg.skip_paths, vec!["/health", " /metrics"]);

        let resolved = RequestIdConfig::resolve(Some(cfg.request_id_config())).unwrap();
        assert!(resolved.has_skip());
    }

    #[test]
    fn prefix_selects_sequential_generator() {
        let cfg = parse(&["--id-prefix", "dev", "--header", "X-Trace-Id"]);
        let resolved = RequestIdConfig::resolve(Some(cfg.request_id_config())).unwrap();
        assert_eq!(resolved.header().as_str(), "x-trace-id");
        assert_eq!(resolved.generator().generate(), "dev-1");
    }
}
