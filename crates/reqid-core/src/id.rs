//! The per-request identifier value.

use std::fmt;
use std::ops::Deref;

use serde::{Serialize, Serializer};

/// Where a [`RequestId`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdSource {
    /// Adopted verbatim from the inbound request header.
    ClientSupplied,
    /// Produced by the configured generator.
    Generated,
}

impl IdSource {
    pub fn as_str(self) -> &'static str {
        match self {
            IdSource::ClientSupplied => "client_supplied",
            IdSource::Generated => "generated",
        }
    }
}

impl fmt::Display for IdSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Correlation identifier bound to one in-flight request.
///
/// Immutable once created. Serializes as the bare identifier string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId {
    value: String,
    source: IdSource,
}

impl RequestId {
    /// Wraps a value taken from the inbound header.
    pub fn client_supplied(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source: IdSource::ClientSupplied,
        }
    }

    /// Wraps a value produced by a generator.
    pub fn generated(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source: IdSource::Generated,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn source(&self) -> IdSource {
        self.source
    }

    pub fn into_inner(self) -> String {
        self.value
    }
}

impl Deref for RequestId {
    type Target = str;

    fn deref(&self) -> &str {
        &self.value
    }
}

impl AsRef<str> for RequestId {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl Serialize for RequestId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_record_source() {
        let supplied = RequestId::client_supplied("abc-123");
        assert_eq!(supplied.as_str(), "abc-123");
        assert_eq!(supplied.source(), IdSource::ClientSupplied);

        let generated = RequestId::generated(String::from("gen-1"));
        assert_eq!(&*generated, "gen-1");
        assert_eq!(generated.source(), IdSource::Generated);
    }

    #[test]
    fn displays_and_serializes_as_bare_value() {
        let id = RequestId::generated("xyz");
        assert_eq!(id.to_string(), "xyz");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"xyz\"");
        assert_eq!(
            serde_json::to_string(&IdSource::ClientSupplied).unwrap(),
            "\"client_supplied\""
        );
    }
}
