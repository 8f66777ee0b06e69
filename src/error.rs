/// Errors raised while building a [`ResourcePath`](crate::ResourcePath).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourcePathError {
    /// The path component did not contain both a service and an instance segment.
    #[error("Malformed resource path {0:?}: expected \"<service>:<instance>\"")]
    MalformedPath(String),

    /// The input text was not a valid URI.
    #[error("Invalid resource URI: {0}")]
    Uri(String),
}

impl ResourcePathError {
    pub(crate) fn malformed(path: impl Into<String>) -> Self {
        Self::MalformedPath(path.into())
    }
}

#[cfg(feature = "url")]
impl From<url::ParseError> for ResourcePathError {
    fn from(e: url::ParseError) -> Self {
        Self::Uri(e.to_string())
    }
}

pub type ResourcePathResult<T> = Result<T, ResourcePathError>;
