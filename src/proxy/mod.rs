//! Reverse proxy and TLS configuration.
//!
//! This module provides:
//! - [`ProxySiteSpec`] — the rendered Nginx site definition
//! - [`ProxyConfigurator`] — placement, enablement, validation, reload
//! - [`AcmeClient`] — non-interactive certificate issuance

pub mod configure;
pub mod site;
pub mod tls;

pub use configure::ProxyConfigurator;
pub use site::ProxySiteSpec;
pub use tls::AcmeClient;
