//! The already-parsed URI shape a [`ResourcePath`](crate::ResourcePath) is built from.
//!
//! URI grammar is not handled here. Whoever produced the value has already
//! separated the path component from the fragment.

/// A URI that has been split into its components.
pub trait UriComponents {
    /// The path component, expected as `"<service>:<instance>"`.
    fn path(&self) -> &str;

    /// The fragment component (text after `#`), if the URI had one.
    fn fragment(&self) -> Option<&str>;
}

/// Borrowed path and fragment for callers that split the URI themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UriParts<'a> {
    /// The path component
    pub path: &'a str,
    /// The fragment component, if any
    pub fragment: Option<&'a str>,
}

impl<'a> UriParts<'a> {
    /// Path with no fragment.
    pub fn new(path: &'a str) -> Self {
        Self {
            path,
            fragment: None,
        }
    }

    /// Path with a fragment.
    pub fn with_fragment(path: &'a str, fragment: &'a str) -> Self {
        Self {
            path,
            fragment: Some(fragment),
        }
    }
}

impl UriComponents for UriParts<'_> {
    fn path(&self) -> &str {
        self.path
    }

    fn fragment(&self) -> Option<&str> {
        self.fragment
    }
}

impl<T: UriComponents + ?Sized> UriComponents for &T {
    fn path(&self) -> &str {
        (**self).path()
    }

    fn fragment(&self) -> Option<&str> {
        (**self).fragment()
    }
}

/// The path is taken literally: `svc:network:eth0` has path `network:eth0`,
/// but `svc:/network:eth0` has path `/network:eth0`.
#[cfg(feature = "url")]
impl UriComponents for url::Url {
    fn path(&self) -> &str {
        url::Url::path(self)
    }

    fn fragment(&self) -> Option<&str> {
        url::Url::fragment(self)
    }
}
