use std::collections::HashSet;

use pretty_assertions::assert_eq;
use resource_path::*;

/// Show crate logs when RUST_LOG is set.
fn test_run() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn print_queue_instance() {
    test_run();
    let p = ResourcePath::from_uri(&UriParts::new("http:print-queue")).unwrap();
    assert_eq!("http", p.service());
    assert_eq!("print-queue", p.instance());
    assert_eq!(None, p.property());
}

#[test]
fn network_interface_state() {
    test_run();
    let p = ResourcePath::from_uri(&UriParts::with_fragment("network:eth0", "state")).unwrap();
    assert_eq!("network", p.service());
    assert_eq!("eth0", p.instance());
    assert_eq!(Some("state"), p.property());
}

#[test]
fn single_segment_fails() {
    test_run();
    assert_eq!(
        Err(ResourcePathError::MalformedPath("onlyone".to_string())),
        ResourcePath::from_uri(&UriParts::new("onlyone"))
    );
}

#[test]
fn three_segments_keep_first_two() {
    test_run();
    let p: ResourcePath = "svcA:svcB:svcC".parse().unwrap();
    assert_eq!("svcA", p.service());
    assert_eq!("svcB", p.instance());
    assert_eq!(None, p.property());
}

#[cfg(feature = "url")]
#[test]
fn from_parsed_url() {
    test_run();
    let u = url::Url::parse("svc:network:eth0#state").unwrap();
    let p = ResourcePath::from_uri(&u).unwrap();
    assert_eq!(
        ResourcePath::new("network", "eth0").unwrap().with_property("state"),
        p
    );
    assert_eq!(p, ResourcePath::parse_uri("svc:network:eth0#state").unwrap());
}

#[cfg(feature = "url")]
#[test]
fn parse_uri_errors() {
    test_run();
    assert!(matches!(
        ResourcePath::parse_uri("no scheme here"),
        Err(ResourcePathError::Uri(_))
    ));
    assert_eq!(
        Err(ResourcePathError::MalformedPath("onlyone".to_string())),
        ResourcePath::parse_uri("svc:onlyone#state")
    );
}

#[test]
fn serializes_as_qualified_text() {
    test_run();
    let p = ResourcePath::new("dep", "depinst").unwrap();
    let json = serde_json::to_string(&vec![p.clone(), p.clone().with_property("enabled")]).unwrap();
    assert_eq!(r#"["svc:/dep:depinst","svc:/dep:depinst#enabled"]"#, json);

    let back: Vec<ResourcePath> = serde_json::from_str(&json).unwrap();
    assert_eq!(vec![p.clone(), p.with_property("enabled")], back);

    let bare: ResourcePath = serde_json::from_str(r#""dep:depinst""#).unwrap();
    assert_eq!("dep", bare.service());
}

#[test]
fn deserialize_rejects_malformed_text() {
    test_run();
    let err = serde_json::from_str::<ResourcePath>(r#""svc:/onlyone""#).unwrap_err();
    assert!(err.to_string().contains("Malformed resource path"), "{}", err);
}

#[test]
fn usable_as_set_key() {
    test_run();
    let mut set = HashSet::new();
    set.insert(ResourcePath::restarter());
    set.insert("svc:/system/svc/restarter:default".parse().unwrap());
    set.insert(ResourcePath::repository());
    set.insert(ResourcePath::graph_engine());
    assert_eq!(3, set.len());
}
