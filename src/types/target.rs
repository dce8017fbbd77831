//! Probe targets and host resolution.
//!
//! A [`Target`] is always a numeric address; hostnames are turned into one
//! by [`resolve_host`] before any scanning starts.

use super::Port;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use tracing::debug;
use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::error::ResolveError;
use trust_dns_resolver::TokioAsyncResolver;

/// A single (IP address, port) pair to probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target {
    ip: IpAddr,
    port: Port,
}

impl Target {
    pub const fn new(ip: IpAddr, port: Port) -> Self {
        Self { ip, port }
    }

    pub const fn port(&self) -> Port {
        self.port
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.ip, self.port.as_u16())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.socket_addr())
    }
}

/// Error type for host resolution.
#[derive(Debug, thiserror::Error)]
pub enum ResolutionError {
    #[error("Unable to resolve host: {host}")]
    LookupFailed {
        host: String,
        #[source]
        source: ResolveError,
    },
    #[error("Unable to resolve host: {0}")]
    NoAddresses(String),
}

/// Resolve a hostname or IP address string to a single IpAddr.
///
/// Numeric addresses are returned as-is without touching the resolver.
/// Names with both address families resolve to their first IPv4 address.
pub async fn resolve_host(host: &str) -> Result<IpAddr, ResolutionError> {
    let host = host.trim();
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(ip);
    }

    let resolver = TokioAsyncResolver::tokio_from_system_conf().unwrap_or_else(|e| {
        debug!(error = %e, "system resolver configuration unavailable, using defaults");
        TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default())
    });

    let response = resolver
        .lookup_ip(host)
        .await
        .map_err(|source| ResolutionError::LookupFailed {
            host: host.to_string(),
            source,
        })?;

    let addrs: Vec<IpAddr> = response.iter().collect();
    debug!(host, ?addrs, "resolved host");

    addrs
        .iter()
        .copied()
        .find(IpAddr::is_ipv4)
        .or_else(|| addrs.first().copied())
        .ok_or_else(|| ResolutionError::NoAddresses(host.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_target_socket_addr() {
        let target = Target::new(IpAddr::V4(Ipv4Addr::LOCALHOST), Port::new(8080).unwrap());
        assert_eq!(target.to_string(), "127.0.0.1:8080");
        assert_eq!(target.socket_addr().port(), 8080);

        let v6 = Target::new(IpAddr::V6(Ipv6Addr::LOCALHOST), Port::new(22).unwrap());
        assert_eq!(v6.to_string(), "[::1]:22");
    }

    #[tokio::test]
    async fn test_resolve_ip_literal() {
        let ip = resolve_host("127.0.0.1").await.unwrap();
        assert_eq!(ip, IpAddr::V4(Ipv4Addr::LOCALHOST));

        let ip = resolve_host("::1").await.unwrap();
        assert_eq!(ip, IpAddr::V6(Ipv6Addr::LOCALHOST));
    }

    #[tokio::test]
    async fn test_resolve_invalid_tld_fails() {
        let err = resolve_host("invalid.invalid").await.unwrap_err();
        assert_eq!(err.to_string(), "Unable to resolve host: invalid.invalid");
    }
}
