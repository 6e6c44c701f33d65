/// Errors talking to an upstream character API.
///
/// Every variant means the upstream is unavailable for the current action.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream answered with a non-2xx status.
    #[error("Upstream returned HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    /// The response body did not match the expected payload.
    #[error("Unexpected upstream response: {0}")]
    UnexpectedShape(String),

    /// A request URL could not be built from the base URL and identifier.
    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(String),
}
