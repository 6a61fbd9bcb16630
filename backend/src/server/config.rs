//! Application settings loaded via OrthoConfig.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_STRAPI_URL: &str = "http://localhost:1337";
const DEFAULT_STRAPI_TIMEOUT_SECONDS: u64 = 10;

/// Configuration values for the site backend.
///
/// Values merge from CLI flags, `SITE_*` environment variables, and config
/// files, each field falling back to a local-development default.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SITE")]
pub struct SiteSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Base URL of the remote CMS.
    pub strapi_url: Option<String>,
    /// Request timeout for CMS fetches, in seconds.
    pub strapi_timeout_seconds: Option<u64>,
}

impl SiteSettings {
    /// Return the configured bind address, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured value is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
    }

    /// Return the configured CMS base URL, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured value is not a URL.
    pub fn strapi_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(self.strapi_url.as_deref().unwrap_or(DEFAULT_STRAPI_URL))
    }

    /// Return the CMS request timeout, falling back to the default.
    #[must_use]
    pub fn strapi_timeout(&self) -> Duration {
        Duration::from_secs(
            self.strapi_timeout_seconds
                .unwrap_or(DEFAULT_STRAPI_TIMEOUT_SECONDS),
        )
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing and fallbacks.

    use super::*;

    fn empty_settings() -> SiteSettings {
        SiteSettings {
            bind_addr: None,
            strapi_url: None,
            strapi_timeout_seconds: None,
        }
    }

    #[test]
    fn defaults_cover_local_development() {
        let settings = empty_settings();
        assert_eq!(
            settings.bind_addr().expect("default parses").to_string(),
            "0.0.0.0:8080"
        );
        assert_eq!(
            settings.strapi_url().expect("default parses").as_str(),
            "http://localhost:1337/"
        );
        assert_eq!(settings.strapi_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn overrides_take_precedence() {
        let settings = SiteSettings {
            bind_addr: Some("127.0.0.1:9090".to_owned()),
            strapi_url: Some("https://cms.example.com".to_owned()),
            strapi_timeout_seconds: Some(3),
        };
        assert_eq!(
            settings.bind_addr().expect("override parses").to_string(),
            "127.0.0.1:9090"
        );
        assert_eq!(
            settings.strapi_url().expect("override parses").host_str(),
            Some("cms.example.com")
        );
        assert_eq!(settings.strapi_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn malformed_values_surface_errors() {
        let settings = SiteSettings {
            bind_addr: Some("not-an-address".to_owned()),
            strapi_url: Some("::so-bad::".to_owned()),
            strapi_timeout_seconds: None,
        };
        assert!(settings.bind_addr().is_err());
        assert!(settings.strapi_url().is_err());
    }
}
