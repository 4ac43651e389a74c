//! Seams to the outside world used while a submission is in flight.
//!
//! [`SheetsTransport`] posts the form fields to the write endpoint. The
//! contract is deliberately response-opaque: `Ok(())` only means no local
//! transport error occurred. The endpoint is called in a mode where the
//! response cannot be read, so a server-side rejection still looks like
//! success.
//!
//! [`Timer`] provides the sleep that the submission timeout races against.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

/// Local failure to hand the payload to the endpoint.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("Google Sheets script URL is not configured")]
    NotConfigured,
    /// The request never made it out (DNS, connection refused, offline).
    #[error("network error: {0}")]
    Network(String),
    /// The request could not be built or sent for any other reason.
    #[error("{0}")]
    Failed(String),
}

/// Posts form-urlencoded fields to the spreadsheet endpoint.
pub trait SheetsTransport {
    fn post_form(
        &self,
        url: &str,
        fields: &[(String, String)],
    ) -> impl Future<Output = Result<(), TransportError>>;
}

/// Source of the timeout side of the submission race.
pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}
