#![deny(missing_docs)]
//! A resource path addresses a service instance managed by the service
//! manager, optionally narrowed to one of the instance's properties.
//!
//! Paths are built from a URI whose path component is
//! `"<service>:<instance>"` and whose fragment names the property.
//!
//! # Example
//!
//! ```
//! use resource_path::*;
//!
//! let p = ResourcePath::from_uri(&UriParts::with_fragment("network:eth0", "state")).unwrap();
//!
//! assert_eq!("network", p.service());
//! assert_eq!("eth0", p.instance());
//! assert_eq!(Some("state"), p.property());
//! assert_eq!("svc:/network:eth0#state", p.to_string());
//!
//! assert_eq!(
//!     Err(ResourcePathError::MalformedPath("onlyone".to_string())),
//!     ResourcePath::from_uri(&UriParts::new("onlyone")),
//! );
//! ```

#[allow(missing_docs)]
mod error;
mod path;
pub mod uri;

pub use crate::error::{ResourcePathError, ResourcePathResult};
pub use crate::path::{
    ResourcePath, DEFAULT_INSTANCE, PROPERTY_MARKER, QUALIFIER, SEPARATOR,
};
pub use crate::uri::{UriComponents, UriParts};
