use http::uri::{PathAndQuery, Uri};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UriError {
    #[error(transparent)]
    InvalidUri(#[from] http::uri::InvalidUri),

    #[error(transparent)]
    InvalidUriParts(#[from] http::uri::InvalidUriParts),
}

/// Replaces the path of `base_uri` with `path`, keeping scheme and
/// authority. The registration authority exposes everything under a
/// single host, so no query handling is needed.
pub fn make_uri(base_uri: Uri, path: &str) -> Result<Uri, UriError> {
    let mut parts = base_uri.into_parts();
    parts.path_and_query = Some(PathAndQuery::from_str(path)?);
    Uri::from_parts(parts).map_err(|err| err.into())
}
