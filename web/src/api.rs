//! ==============================================================================
//! api.rs - HTTP client for the shortening service
//! ==============================================================================

use gloo_net::http::Request;
use shorturl_shared::{ShortenTransport, TransportError};

// Used when SHORTURL_API_URL is not set at build time
pub const DEFAULT_SHORTEN_ENDPOINT: &str = "http://localhost:8090/api/shorten";

/// Shorten endpoint baked in at compile time
pub fn shorten_endpoint() -> &'static str {
    option_env!("SHORTURL_API_URL").unwrap_or(DEFAULT_SHORTEN_ENDPOINT)
}

// ==============================================================================
// fetch transport
// ==============================================================================

/// Posts the request body with the browser's fetch and returns the reply as text
#[derive(Debug, Clone, Copy)]
pub struct GlooTransport {
    endpoint: &'static str,
}

impl GlooTransport {
    pub fn new(endpoint: &'static str) -> Self {
        Self { endpoint }
    }
}

impl Default for GlooTransport {
    fn default() -> Self {
        Self::new(shorten_endpoint())
    }
}

impl ShortenTransport for GlooTransport {
    async fn post_json(&self, body: String) -> Result<String, TransportError> {
        let response = Request::post(self.endpoint)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| TransportError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        // non-2xx replies are read like any other
        log::debug!("shorten reply status {}", response.status());

        response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transport_uses_configured_endpoint() {
        assert_eq!(GlooTransport::default().endpoint, shorten_endpoint());
    }

    #[test]
    fn test_default_endpoint_points_at_shorten_api() {
        assert!(DEFAULT_SHORTEN_ENDPOINT.ends_with("/api/shorten"));
    }
}
