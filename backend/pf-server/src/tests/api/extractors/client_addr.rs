use crate::api::extractors::client_addr::{UNKNOWN_CLIENT_ADDR, resolve_client_addr};

use std::net::SocketAddr;

use axum::extract::ConnectInfo;
use http::Request;

fn parts_with(forwarded: Option<&str>, peer: Option<&str>) -> http::request::Parts {
    let mut builder = Request::builder().uri("/api/contact");
    if let Some(value) = forwarded {
        builder = builder.header("X-Forwarded-For", value);
    }
    let (mut parts, _) = builder.body(()).unwrap().into_parts();
    if let Some(addr) = peer {
        let addr: SocketAddr = addr.parse().unwrap();
        parts.extensions.insert(ConnectInfo(addr));
    }
    parts
}

#[test]
fn test_forwarded_header_takes_first_entry() {
    let parts = parts_with(Some("203.0.113.7, 10.0.0.1"), Some("127.0.0.1:5555"));

    assert_eq!(resolve_client_addr(&parts, true), "203.0.113.7");
}

#[test]
fn test_peer_ip_used_without_forwarded_header() {
    let parts = parts_with(None, Some("192.0.2.10:40123"));

    assert_eq!(resolve_client_addr(&parts, true), "192.0.2.10");
}

#[test]
fn test_peer_port_is_ignored() {
    let first = parts_with(None, Some("192.0.2.10:40123"));
    let second = parts_with(None, Some("192.0.2.10:40999"));

    assert_eq!(
        resolve_client_addr(&first, true),
        resolve_client_addr(&second, true)
    );
}

#[test]
fn test_blank_forwarded_header_falls_through() {
    let parts = parts_with(Some("  "), None);

    assert_eq!(resolve_client_addr(&parts, true), UNKNOWN_CLIENT_ADDR);
}

#[test]
fn test_untrusted_forwarded_header_is_ignored() {
    let parts = parts_with(Some("203.0.113.7"), Some("192.0.2.10:40123"));

    assert_eq!(resolve_client_addr(&parts, false), "192.0.2.10");
}

#[test]
fn test_untrusted_forwarded_header_without_peer_is_unknown() {
    let parts = parts_with(Some("203.0.113.7"), None);

    assert_eq!(resolve_client_addr(&parts, false), UNKNOWN_CLIENT_ADDR);
}
