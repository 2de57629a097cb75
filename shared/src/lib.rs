//! ==============================================================================
//! lib.rs - shared types and submit lifecycle for the short url client
//! ==============================================================================
//!
//! purpose:
//!     defines the wire contract with the shortening service and the
//!     platform-independent part of a form submission: build the request,
//!     hand it to a transport, interpret the raw reply, produce the string
//!     the page shows.
//!
//! relationships:
//!     - used by: web (ShortenerForm component, GlooTransport)
//!     - talks to: the shortening service only through ShortenTransport
//!
//! wire contract:
//!
//! ```text
//!     POST <endpoint>
//!         headers: Content-Type: application/json
//!         body: {"url": "https://example.com/long/path"}
//!         reply (success): {"url": "<short code>"}
//!         reply (failure): any text, json or not
//!
//!     the service serves redirects at <page origin>/x/<short code>
//! ```
//!
//! ==============================================================================

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// path prefix under which the service resolves short codes
pub const REDIRECT_PREFIX: &str = "/x/";

/// prefix put in front of anything that is not a usable short link
pub const ERROR_PREFIX: &str = "Error: ";

// ==============================================================================
// wire types
// ==============================================================================

/// body of the shorten call, built fresh for every submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortenRequest {
    /// the long url exactly as typed, no validation
    pub url: String,
}

impl ShortenRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// serialize to the json body sent on the wire
    pub fn to_json(&self) -> Result<String, TransportError> {
        Ok(serde_json::to_string(self)?)
    }
}

// ==============================================================================
// result interpretation
// ==============================================================================

/// outcome of one submission, derived from the raw reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenResult {
    /// the service answered with a short code
    Success { code: String },
    /// anything else; carries the raw reply text verbatim
    Failure { raw: String },
}

impl ShortenResult {
    /// interpret the raw reply body
    ///
    /// a json object with a `url` key counts as success, whatever scalar
    /// the key holds; duplicate keys resolve to the last one. invalid json,
    /// non-object json, a missing key or an array/object value keep the raw
    /// text as a failure.
    pub fn interpret(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let code = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(mut fields)) => fields.remove("url").and_then(short_code),
            Ok(_) => None,
            Err(e) => {
                log::warn!("shorten reply is not json ({} bytes): {}", raw.len(), e);
                None
            }
        };

        match code {
            Some(code) => ShortenResult::Success { code },
            None => ShortenResult::Failure { raw },
        }
    }

    /// string written into the output element
    pub fn display(&self, origin: &str) -> String {
        match self {
            ShortenResult::Success { code } => short_url(origin, code),
            ShortenResult::Failure { raw } => format!("{}{}", ERROR_PREFIX, raw),
        }
    }
}

impl From<TransportError> for ShortenResult {
    fn from(err: TransportError) -> Self {
        ShortenResult::Failure {
            raw: err.to_string(),
        }
    }
}

// scalars become path segments the way string concatenation renders them
fn short_code(value: Value) -> Option<String> {
    match value {
        Value::String(code) => Some(code),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        Value::Array(_) | Value::Object(_) => {
            log::warn!("shorten reply has a non-scalar url field");
            None
        }
    }
}

/// build the redirect url for a short code served at `origin`
pub fn short_url(origin: &str, code: &str) -> String {
    format!("{}{}{}", origin, REDIRECT_PREFIX, code)
}

// ==============================================================================
// transport
// ==============================================================================

/// failures before a reply body is available
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("could not encode request: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("request failed: {0}")]
    Request(String),

    #[error("could not read response body: {0}")]
    Body(String),
}

/// sends the json body to the shortening endpoint and returns the reply text
///
/// the http status is not inspected: any reply with a readable body is `Ok`.
#[allow(async_fn_in_trait)]
pub trait ShortenTransport {
    async fn post_json(&self, body: String) -> Result<String, TransportError>;
}

// ==============================================================================
// submit lifecycle
// ==============================================================================

/// run one submission and return the string to display
///
/// never fails: transport errors become a failure display so the user
/// always sees an outcome. concurrent calls are independent of each other.
pub async fn submit<T>(transport: &T, origin: &str, long_url: impl Into<String>) -> String
where
    T: ShortenTransport,
{
    let request = ShortenRequest::new(long_url);
    log::debug!("shortening {:?}", request.url);

    let result = match request.to_json() {
        Ok(body) => match transport.post_json(body).await {
            Ok(raw) => ShortenResult::interpret(raw),
            Err(e) => {
                log::warn!("shorten request did not complete: {}", e);
                e.into()
            }
        },
        Err(e) => e.into(),
    };

    result.display(origin)
}

// ==============================================================================
// tests
// ==============================================================================
