//! Axum extractor for the submitting client's address

use crate::AppState;

use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::request::Parts,
};

/// Address used when neither a forwarding header nor connect info is present
pub const UNKNOWN_CLIENT_ADDR: &str = "unknown";

/// The client address a request came from
///
/// When the server trusts its proxy, the first `X-Forwarded-For` entry wins.
/// Otherwise the socket peer IP recorded by the server's connect info is
/// used. Ports are dropped so repeated connections from one host resolve to
/// the same address.
pub struct ClientAddr(pub String);

impl FromRequestParts<AppState> for ClientAddr {
    type Rejection = Infallible;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let addr = resolve_client_addr(parts, state.trust_forwarded_for);
        async move { Ok(ClientAddr(addr)) }
    }
}

/// Resolve the client address from request parts
pub fn resolve_client_addr(parts: &Parts, trust_forwarded_for: bool) -> String {
    if trust_forwarded_for
        && let Some(forwarded) = parts
            .headers
            .get("X-Forwarded-For")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .map(str::trim)
            .filter(|value| !value.is_empty())
    {
        log::debug!("Using client address from X-Forwarded-For: {}", forwarded);
        return forwarded.to_string();
    }

    if let Some(ConnectInfo(peer)) = parts.extensions.get::<ConnectInfo<SocketAddr>>() {
        return peer.ip().to_string();
    }

    UNKNOWN_CLIENT_ADDR.to_string()
}
