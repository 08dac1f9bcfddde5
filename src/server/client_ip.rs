//! Client address extraction
//!
//! Proxy headers are trusted as-is; the service is expected to sit behind
//! a reverse proxy that sets them.

use axum::http::HeaderMap;
use std::net::{IpAddr, SocketAddr};

const X_FORWARDED_FOR: &str = "x-forwarded-for";
const X_REAL_IP: &str = "x-real-ip";

/// Best guess at the originating client address
///
/// Order: first `X-Forwarded-For` entry, `X-Real-IP`, socket peer.
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> Option<IpAddr> {
    forwarded_for(headers)
        .or_else(|| header_ip(headers, X_REAL_IP))
        .or_else(|| peer.map(|addr| addr.ip()))
}

fn forwarded_for(headers: &HeaderMap) -> Option<IpAddr> {
    headers
        .get(X_FORWARDED_FOR)?
        .to_str()
        .ok()?
        .split(',')
        .next()?
        .trim()
        .parse()
        .ok()
}

fn header_ip(headers: &HeaderMap, name: &str) -> Option<IpAddr> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}
