//! axum extractors for [`RequestId`].
//!
//! `RequestId` rejects with [`ApiError::MissingRequestId`] when the
//! middleware did not attach one; `Option<RequestId>` never rejects.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;

use crate::error::ApiError;
use crate::id::RequestId;
use crate::resolve::RequestIdExt;

impl<S> FromRequestParts<S> for RequestId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.request_id().cloned().ok_or(ApiError::MissingRequestId)
    }
}

impl<S> OptionalFromRequestParts<S> for RequestId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(parts.request_id().cloned())
    }
}
