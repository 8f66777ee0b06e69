use std::{convert::TryFrom, fmt, str::FromStr};

use crate::error::{ResourcePathError, ResourcePathResult};
use crate::uri::{UriComponents, UriParts};

/// Separates the service segment from the instance segment of a path.
pub const SEPARATOR: char = ':';

/// Introduces the property of a path.
pub const PROPERTY_MARKER: char = '#';

/// Prefix of the fully qualified textual form, e.g. `svc:/network:eth0`.
pub const QUALIFIER: &str = "svc:/";

/// Instance name used by the service manager's own daemons.
pub const DEFAULT_INSTANCE: &str = "default";

const RESTARTER_SERVICE: &str = "system/svc/restarter";
const REPOSITORY_SERVICE: &str = "system/svc/repository";
const GRAPH_ENGINE_SERVICE: &str = "system/svc/graph-engine";

/// Address of a service instance, optionally narrowed to one of its properties.
///
/// Built from a URI whose path is `"<service>:<instance>"` and whose fragment,
/// if present, names the property. Once built the three components never change.
///
/// `Display` and `Serialize` use the fully qualified form
/// `svc:/<service>:<instance>[#<property>]`; `FromStr` and `Deserialize`
/// accept it with or without the `svc:/` qualifier. A path with an empty
/// instance, or with `#` in its service or instance, has no text form that
/// parses back, so serializing it fails.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourcePath {
    service: String,
    instance: String,
    property: Option<String>,
}

impl ResourcePath {
    /// Build a path from an already-parsed URI.
    ///
    /// The path component is split on `:` after discarding trailing empty
    /// segments. The first segment is the service and the second the instance;
    /// fewer than two is a [`ResourcePathError::MalformedPath`].
    ///
    /// Known ambiguity: segments after the second are dropped, so a service or
    /// instance name containing `:` is silently truncated. A `warn` event is
    /// emitted when that happens.
    pub fn from_uri<U: UriComponents + ?Sized>(uri: &U) -> ResourcePathResult<Self> {
        let path = uri.path();
        let (service, instance) = split_path(path)?;
        Ok(Self {
            service: service.to_string(),
            instance: instance.to_string(),
            property: uri.fragment().map(str::to_string),
        })
    }

    /// Parse arbitrary URI text with [`url::Url`] and build a path from it.
    ///
    /// The URI path is used as-is, so `svc:network:eth0` addresses service
    /// `network` while `svc:/network:eth0` addresses service `/network`.
    /// Use [`FromStr`] for the qualified textual form.
    #[cfg(feature = "url")]
    pub fn parse_uri(text: &str) -> ResourcePathResult<Self> {
        let uri = url::Url::parse(text)?;
        Self::from_uri(&uri)
    }

    /// Build an instance path from its components.
    ///
    /// Neither component may be empty or contain `:` or `#`, since the result
    /// would not read back as the same path.
    pub fn new(service: impl Into<String>, instance: impl Into<String>) -> ResourcePathResult<Self> {
        let service = service.into();
        let instance = instance.into();
        if !is_component(&service) || !is_component(&instance) {
            return Err(ResourcePathError::malformed(format!(
                "{}{}{}",
                service, SEPARATOR, instance
            )));
        }
        Ok(Self {
            service,
            instance,
            property: None,
        })
    }

    /// The same instance, narrowed to `property`.
    pub fn with_property(self, property: impl Into<String>) -> Self {
        Self {
            property: Some(property.into()),
            ..self
        }
    }

    /// The master restarter, `system/svc/restarter:default`.
    pub fn restarter() -> Self {
        Self::of_daemon(RESTARTER_SERVICE)
    }

    /// The service repository, `system/svc/repository:default`.
    pub fn repository() -> Self {
        Self::of_daemon(REPOSITORY_SERVICE)
    }

    /// The graphing service, `system/svc/graph-engine:default`.
    pub fn graph_engine() -> Self {
        Self::of_daemon(GRAPH_ENGINE_SERVICE)
    }

    fn of_daemon(service: &str) -> Self {
        Self {
            service: service.to_string(),
            instance: DEFAULT_INSTANCE.to_string(),
            property: None,
        }
    }

    /// The service segment
    pub fn service(&self) -> &str {
        &self.service
    }

    /// The instance segment
    pub fn instance(&self) -> &str {
        &self.instance
    }

    /// The property (URI fragment), if any
    pub fn property(&self) -> Option<&str> {
        self.property.as_deref()
    }

    /// Whether both paths address the same service instance, ignoring property.
    pub fn same_instance(&self, other: &ResourcePath) -> bool {
        self.service == other.service && self.instance == other.instance
    }

    /// This path with the property removed.
    pub fn instance_path(&self) -> Self {
        Self {
            service: self.service.clone(),
            instance: self.instance.clone(),
            property: None,
        }
    }

    /// Whether the `Display` output parses back to this path.
    fn reads_back(&self) -> bool {
        !self.instance.is_empty()
            && !self.service.contains(PROPERTY_MARKER)
            && !self.instance.contains(PROPERTY_MARKER)
    }
}

fn is_component(s: &str) -> bool {
    !s.is_empty() && !s.contains(SEPARATOR) && !s.contains(PROPERTY_MARKER)
}

fn split_path(path: &str) -> ResourcePathResult<(&str, &str)> {
    let mut segments: Vec<&str> = path.split(SEPARATOR).collect();
    while let Some(&"") = segments.last() {
        segments.pop();
    }
    match segments.as_slice() {
        [service, instance, ignored @ ..] => {
            if !ignored.is_empty() {
                tracing::warn!(
                    path,
                    ?ignored,
                    "resource path has more than two segments, extra segments ignored"
                );
            }
            Ok((*service, *instance))
        }
        _ => {
            tracing::debug!(path, "rejecting resource path without an instance segment");
            Err(ResourcePathError::malformed(path))
        }
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}{}", QUALIFIER, self.service, SEPARATOR, self.instance)?;
        if let Some(property) = &self.property {
            write!(f, "{}{}", PROPERTY_MARKER, property)?;
        }
        Ok(())
    }
}

impl FromStr for ResourcePath {
    type Err = ResourcePathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(QUALIFIER).unwrap_or(s);
        let parts = match s.split_once(PROPERTY_MARKER) {
            Some((path, fragment)) => UriParts::with_fragment(path, fragment),
            None => UriParts::new(s),
        };
        Self::from_uri(&parts)
    }
}

impl TryFrom<String> for ResourcePath {
    type Error = ResourcePathError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        ResourcePath::from_str(s.as_ref())
    }
}

impl TryFrom<&String> for ResourcePath {
    type Error = ResourcePathError;

    fn try_from(s: &String) -> Result<Self, Self::Error> {
        ResourcePath::from_str(s.as_ref())
    }
}

impl TryFrom<&str> for ResourcePath {
    type Error = ResourcePathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        ResourcePath::from_str(s)
    }
}

impl serde::Serialize for ResourcePath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if !self.reads_back() {
            return Err(serde::ser::Error::custom(format!(
                "resource path {} does not parse back from its text form",
                self
            )));
        }
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for ResourcePath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        ResourcePath::from_str(&String::deserialize(deserializer)?)
            .map_err(serde::de::Error::custom)
    }
}
