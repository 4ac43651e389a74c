//! # API crate: HTTP transport to the spreadsheet write endpoint
//!
//! [`HttpTransport`] implements [`intake::SheetsTransport`] with `reqwest`.
//! The form fields go out as one `application/x-www-form-urlencoded` POST to
//! the Apps Script web app URL from the configuration.
//!
//! ## Response opacity
//!
//! In the browser the request is sent with `mode: no-cors`, which is what the
//! Apps Script endpoint requires. The browser then hands back an opaque
//! response: no status, no body. Native builds send a normal request, but
//! the response is ignored all the same so every platform reports the same
//! thing: `Ok(())` means the request left without a local error, and nothing
//! more.
//!
//! ## Error mapping
//!
//! | `reqwest` error | [`TransportError`] |
//! |-----------------|--------------------|
//! | builder error (bad URL, unencodable body) | `Failed` |
//! | anything else (DNS, refused, offline, TLS) | `Network` |

use intake::{SheetsTransport, TransportError};
use reqwest::Client;

/// `reqwest`-backed [`SheetsTransport`].
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl SheetsTransport for HttpTransport {
    async fn post_form(&self, url: &str, fields: &[(String, String)]) -> Result<(), TransportError> {
        let request = self.client.post(url).form(fields);
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_mode_no_cors();

        request.send().await.map_err(map_error)?;
        tracing::debug!(url, fields = fields.len(), "form posted");
        Ok(())
    }
}

fn map_error(error: reqwest::Error) -> TransportError {
    if error.is_builder() {
        TransportError::Failed(error.to_string())
    } else {
        TransportError::Network(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_relative_url_is_a_local_failure() {
        let transport = HttpTransport::new();
        let fields = vec![("lastName".to_string(), "DELA CRUZ".to_string())];

        let err = transport.post_form("exec", &fields).await.unwrap_err();
        assert!(matches!(err, TransportError::Failed(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_network_error() {
        let transport = HttpTransport::new();
        let fields = vec![("timestamp".to_string(), "2024-01-31T22:00:00.000Z".to_string())];

        // Port 9 on loopback: nothing listens there, so the connect fails fast.
        let err = transport
            .post_form("http://127.0.0.1:9/exec", &fields)
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Network(_)), "got {err:?}");
        assert!(err.to_string().starts_with("network error"));
    }
}
