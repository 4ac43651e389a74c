//! # Submitter — transmission with a timeout and a local backstop
//!
//! [`Submitter::send`] turns a [`SubmissionRecord`] into form fields, posts
//! them through a [`SheetsTransport`] and races the post against a
//! [`Timer`]. Whichever settles first decides the result; the loser is
//! dropped. There is no retry here. Retrying is up to the user, through the
//! workflow's failed → confirming loop.
//!
//! On any failure (unconfigured URL, transport error, timeout) the record and
//! the failure text are appended to the [`RecoveryLog`]. That write is
//! best-effort: if it fails too, the problem is logged and the original
//! failure is still what the caller sees.

use std::pin::pin;
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::future::{select, Either};
use thiserror::Error;

use crate::config::IntakeConfig;
use crate::logging::{elapsed_since, FormLogger};
use crate::payload::SubmissionRecord;
use crate::recovery::{RecoveryEntry, RecoveryLog, SlotStore, StoreError};
use crate::transport::{SheetsTransport, Timer, TransportError};

/// Why a submission did not go through.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmissionFailure {
    #[error("Submission timeout - please try again")]
    Timeout,
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("could not encode submission: {0}")]
    Encode(String),
}

/// Bucket a failure falls into for user messaging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    Timeout,
    Network,
    Other,
}

pub const TIMEOUT_MESSAGE: &str =
    "Submission took too long. Please check your internet connection and try again.";
pub const NETWORK_MESSAGE: &str =
    "Network error. Please check your internet connection and try again.";
pub const GENERIC_MESSAGE: &str = "Something went wrong during submission. Please try again.";

impl SubmissionFailure {
    pub fn kind(&self) -> FailureKind {
        classify_failure(&self.to_string()).0
    }

    /// Text shown to the user.
    pub fn user_message(&self) -> String {
        classify_failure(&self.to_string()).1
    }
}

/// Pick the user-facing text for a failure reason.
///
/// Anything mentioning a timeout gets the connectivity text, anything
/// mentioning the network or a fetch gets the network text, and everything
/// else is shown as-is (or the generic fallback when empty).
pub fn classify_failure(reason: &str) -> (FailureKind, String) {
    if reason.contains("timeout") {
        (FailureKind::Timeout, TIMEOUT_MESSAGE.to_string())
    } else if reason.contains("network") || reason.contains("fetch") {
        (FailureKind::Network, NETWORK_MESSAGE.to_string())
    } else if reason.trim().is_empty() {
        (FailureKind::Other, GENERIC_MESSAGE.to_string())
    } else {
        (FailureKind::Other, reason.to_string())
    }
}

/// Sends records to the write endpoint and keeps the recovery log.
pub struct Submitter<T, S, C, L>
where
    T: SheetsTransport,
    S: SlotStore,
    C: Timer,
    L: FormLogger,
{
    transport: T,
    recovery: RecoveryLog<S>,
    timer: C,
    logger: L,
    script_url: String,
    timeout: Duration,
    log_payloads: bool,
}

impl<T, S, C, L> Submitter<T, S, C, L>
where
    T: SheetsTransport,
    S: SlotStore,
    C: Timer,
    L: FormLogger,
{
    pub fn new(config: &IntakeConfig, transport: T, store: S, timer: C, logger: L) -> Self {
        Self {
            transport,
            recovery: RecoveryLog::new(store),
            timer,
            logger,
            script_url: config.sheets.script_url.clone(),
            timeout: config.submission.timeout(),
            log_payloads: config.features.debug_tools,
        }
    }

    pub fn recovery(&self) -> &RecoveryLog<S> {
        &self.recovery
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Number of failed submissions kept locally.
    pub async fn saved_count(&self) -> Result<usize, StoreError> {
        let count = self.recovery.count().await?;
        self.logger.debug(&format!("Saved submissions: {count}"));
        Ok(count)
    }

    /// Transmit `record`, falling back to the recovery log on failure.
    pub async fn send(
        &self,
        record: &SubmissionRecord,
        now: DateTime<Utc>,
    ) -> Result<(), SubmissionFailure> {
        let result = self.transmit(record, now).await;
        if let Err(failure) = &result {
            self.logger
                .error(&format!("Google Sheets submission failed: {failure}"));
            self.backup(record, now, failure).await;
        }
        result
    }

    /// Post the fixed debug record.
    pub async fn test_connection(&self, now: DateTime<Utc>) -> Result<(), SubmissionFailure> {
        self.logger.debug("Testing connection to Google Sheets...");
        let result = self.send(&SubmissionRecord::connection_test(), now).await;
        self.logger.debug(&format!("Test result: {result:?}"));
        result
    }

    async fn transmit(
        &self,
        record: &SubmissionRecord,
        now: DateTime<Utc>,
    ) -> Result<(), SubmissionFailure> {
        if self.script_url.trim().is_empty() {
            return Err(TransportError::NotConfigured.into());
        }
        let fields = record
            .form_fields(now)
            .map_err(|e| SubmissionFailure::Encode(e.to_string()))?;
        if self.log_payloads {
            self.logger
                .debug(&format!("Submitting to Google Sheets: {fields:?}"));
        }

        let started = Utc::now();
        let post = pin!(self.transport.post_form(&self.script_url, &fields));
        let deadline = pin!(self.timer.sleep(self.timeout));
        let outcome = match select(post, deadline).await {
            Either::Left((result, _)) => result.map_err(SubmissionFailure::from),
            Either::Right(((), _)) => Err(SubmissionFailure::Timeout),
        };
        self.logger
            .performance("Google Sheets submission", elapsed_since(started));
        outcome
    }

    async fn backup(&self, record: &SubmissionRecord, now: DateTime<Utc>, failure: &SubmissionFailure) {
        let entry = RecoveryEntry::new(record, now, failure.to_string());
        match self.recovery.append(entry).await {
            Ok(count) => self
                .logger
                .info(&format!("Backup saved to local storage ({count} saved)")),
            Err(e) => self.logger.error(&format!("Backup failed: {e}")),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{Behaviour, BrokenStore, ScriptedTransport, TokioTimer};
    use super::*;
    use crate::fixtures::{valid_applicant, valid_member};
    use crate::logging::{NoopLogger, RecordingLogger};
    use crate::MemoryStore;

    fn record() -> SubmissionRecord {
        SubmissionRecord::capture(&valid_applicant(), &[valid_member()])
    }

    fn config() -> IntakeConfig {
        IntakeConfig::new("https://script.example/exec")
    }

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_717_200_000, 0).unwrap()
    }

    #[tokio::test]
    async fn test_success_leaves_recovery_log_empty() {
        let transport = ScriptedTransport::new(Behaviour::Succeed);
        let submitter = Submitter::new(&config(), transport.clone(), MemoryStore::new(), TokioTimer, NoopLogger);

        assert_eq!(submitter.send(&record(), now()).await, Ok(()));
        assert_eq!(transport.calls(), 1);
        assert_eq!(transport.last_field("firstName").as_deref(), Some("JUAN"));
        assert_eq!(submitter.saved_count().await.unwrap(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_wins_the_race_and_is_backed_up() {
        let transport = ScriptedTransport::new(Behaviour::Hang);
        let submitter = Submitter::new(&config(), transport, MemoryStore::new(), TokioTimer, NoopLogger);

        let failure = submitter.send(&record(), now()).await.unwrap_err();
        assert_eq!(failure, SubmissionFailure::Timeout);
        assert_eq!(failure.kind(), FailureKind::Timeout);
        assert_eq!(failure.user_message(), TIMEOUT_MESSAGE);

        let entries = submitter.recovery().entries().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].error, "Submission timeout - please try again");
        assert_eq!(entries[0].data.last_name, "DELA CRUZ");
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_uses_configured_duration() {
        let transport = ScriptedTransport::new(Behaviour::Hang);
        let config = config().with_timeout_secs(5);
        let submitter = Submitter::new(&config, transport, MemoryStore::new(), TokioTimer, NoopLogger);

        let started = tokio::time::Instant::now();
        assert!(submitter.send(&record(), now()).await.is_err());
        assert!(started.elapsed() >= Duration::from_secs(5));
        assert!(started.elapsed() < Duration::from_secs(30));
    }

    #[tokio::test]
    async fn test_network_error_is_classified() {
        let transport = ScriptedTransport::new(Behaviour::Fail(TransportError::Network(
            "connection refused".to_string(),
        )));
        let submitter = Submitter::new(&config(), transport, MemoryStore::new(), TokioTimer, NoopLogger);

        let failure = submitter.send(&record(), now()).await.unwrap_err();
        assert_eq!(failure.kind(), FailureKind::Network);
        assert_eq!(failure.user_message(), NETWORK_MESSAGE);
        assert_eq!(submitter.saved_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_other_failures_show_raw_reason() {
        let transport = ScriptedTransport::new(Behaviour::Fail(TransportError::Failed(
            "builder error".to_string(),
        )));
        let submitter = Submitter::new(&config(), transport, MemoryStore::new(), TokioTimer, NoopLogger);

        let failure = submitter.send(&record(), now()).await.unwrap_err();
        assert_eq!(failure.user_message(), "builder error");

        let empty = SubmissionFailure::Transport(TransportError::Failed(String::new()));
        assert_eq!(empty.user_message(), GENERIC_MESSAGE);
    }

    #[test]
    fn test_classify_failure_matches_on_reason_text() {
        assert_eq!(classify_failure("request timeout").0, FailureKind::Timeout);
        assert_eq!(classify_failure("failed to fetch").0, FailureKind::Network);
        assert_eq!(
            classify_failure("Sheet is full"),
            (FailureKind::Other, "Sheet is full".to_string())
        );
        assert_eq!(classify_failure("  ").1, GENERIC_MESSAGE);
    }

    #[tokio::test]
    async fn test_missing_url_fails_without_calling_transport() {
        let transport = ScriptedTransport::new(Behaviour::Succeed);
        let submitter = Submitter::new(
            &IntakeConfig::default(),
            transport.clone(),
            MemoryStore::new(),
            TokioTimer,
            NoopLogger,
        );

        let failure = submitter.send(&record(), now()).await.unwrap_err();
        assert_eq!(failure.user_message(), "Google Sheets script URL is not configured");
        assert_eq!(transport.calls(), 0);
        assert_eq!(submitter.saved_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_failed_backup_is_only_logged() {
        let transport = ScriptedTransport::new(Behaviour::Fail(TransportError::Network(
            "offline".to_string(),
        )));
        let logger = RecordingLogger::default();
        let submitter = Submitter::new(&config(), transport, BrokenStore, TokioTimer, logger.clone());

        let failure = submitter.send(&record(), now()).await.unwrap_err();
        assert_eq!(failure.kind(), FailureKind::Network);
        assert!(logger.has("error: Backup failed"));
    }

    #[tokio::test]
    async fn test_payload_logged_only_with_debug_tools() {
        let logger = RecordingLogger::default();
        let quiet = Submitter::new(
            &config(),
            ScriptedTransport::new(Behaviour::Succeed),
            MemoryStore::new(),
            TokioTimer,
            logger.clone(),
        );
        quiet.send(&record(), now()).await.unwrap();
        assert!(!logger.has("debug: Submitting to Google Sheets"));

        let chatty = Submitter::new(
            &config().with_debug_tools(true),
            ScriptedTransport::new(Behaviour::Succeed),
            MemoryStore::new(),
            TokioTimer,
            logger.clone(),
        );
        chatty.send(&record(), now()).await.unwrap();
        assert!(logger.has("debug: Submitting to Google Sheets"));
        assert!(logger.has("perf: Google Sheets submission"));
    }

    #[tokio::test]
    async fn test_connection_posts_fixed_record() {
        let transport = ScriptedTransport::new(Behaviour::Succeed);
        let submitter = Submitter::new(&config(), transport.clone(), MemoryStore::new(), TokioTimer, NoopLogger);

        submitter.test_connection(now()).await.unwrap();
        assert_eq!(transport.last_field("lastName").as_deref(), Some("TESTLAST"));
        assert_eq!(transport.last_field("familyMembers").as_deref(), Some("[]"));
    }
}
