//! # Submission workflow
//!
//! [`SubmissionWorkflow`] owns the [`IntakeForm`] and walks it through the
//! submission states:
//!
//! ```text
//! Editing ──request_review──▶ ReviewPending ──confirm_review──▶ Confirming
//!    ▲                              │                              │
//!    └────────────cancel────────────┴──────────────────────────────┤
//!                                                          begin_submission
//!                                                                  ▼
//!              Confirming ◀── Failed ◀──complete(Err)── Submitting
//!                                                                  │
//!    Editing ◀──start_over── Succeeded ◀──────complete(Ok)─────────┘
//! ```
//!
//! Two confirmations stand between the review and the network call.
//! `Failed` is only passed through: [`complete`](SubmissionWorkflow::complete)
//! lands in `Confirming` with the user-facing message in
//! [`submit_error`](SubmissionWorkflow::submit_error), so a retry does not
//! require another review.
//!
//! While `Submitting`, every transition except `complete` is refused with
//! [`WorkflowError::SubmissionInFlight`] and nothing changes.
//!
//! All time-dependent checks take `now` from the caller.

use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::config::IntakeConfig;
use crate::form::IntakeForm;
use crate::locations::LocationCatalog;
use crate::logging::{elapsed_since, FormLogger};
use crate::payload::SubmissionRecord;
use crate::recovery::SlotStore;
use crate::submit::{FailureKind, SubmissionFailure, Submitter};
use crate::transport::{SheetsTransport, Timer};
use crate::validation::ErrorMap;

pub const MAINTENANCE_BLOCKED_MESSAGE: &str = "System is under maintenance. Submission blocked.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WorkflowState {
    Editing,
    ReviewPending,
    Confirming,
    Submitting,
    Succeeded,
    Failed,
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WorkflowState::Editing => "editing",
            WorkflowState::ReviewPending => "review pending",
            WorkflowState::Confirming => "confirming",
            WorkflowState::Submitting => "submitting",
            WorkflowState::Succeeded => "succeeded",
            WorkflowState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// A transition that was refused. The workflow state is unchanged.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum WorkflowError {
    #[error("System is currently under maintenance. Please try again later.")]
    Maintenance,
    #[error("The application period has ended.")]
    ApplicationEnded,
    #[error("Please read and accept the data privacy notice first.")]
    PrivacyNoticePending,
    #[error("Please fix the following errors before submitting your application:")]
    Invalid(ErrorMap),
    #[error("A submission is already in progress.")]
    SubmissionInFlight,
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        state: WorkflowState,
        action: &'static str,
    },
}

impl WorkflowError {
    /// Heading for the error modal.
    pub fn title(&self) -> &'static str {
        match self {
            WorkflowError::Maintenance => "System Maintenance",
            WorkflowError::ApplicationEnded => "Application Closed",
            WorkflowError::PrivacyNoticePending => "Data Privacy Notice",
            WorkflowError::Invalid(_) => "Form Validation Error",
            WorkflowError::SubmissionInFlight => "Submission In Progress",
            WorkflowError::InvalidTransition { .. } => "Unexpected Error",
        }
    }

    /// Bullet points under the message.
    pub fn details(&self) -> Vec<String> {
        match self {
            WorkflowError::Invalid(errors) if errors.is_empty() => {
                vec!["Please check all required fields and try again.".to_string()]
            }
            WorkflowError::Invalid(errors) => errors.messages(),
            _ => Vec::new(),
        }
    }
}

/// How a submission ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    Succeeded(SubmissionRecord),
    Failed { kind: FailureKind, message: String },
}

type SuccessCallback = Box<dyn FnMut(&SubmissionRecord)>;

pub struct SubmissionWorkflow<L: FormLogger> {
    config: IntakeConfig,
    catalog: LocationCatalog,
    logger: L,
    form: IntakeForm,
    state: WorkflowState,
    privacy_accepted: bool,
    submit_error: Option<String>,
    in_flight: Option<SubmissionRecord>,
    started_at: Option<DateTime<Utc>>,
    on_success: Option<SuccessCallback>,
}

impl<L: FormLogger> SubmissionWorkflow<L> {
    pub fn new(config: IntakeConfig, logger: L) -> Self {
        let privacy_accepted = !config.features.privacy_notice;
        Self {
            config,
            catalog: LocationCatalog::default(),
            logger,
            form: IntakeForm::new(),
            state: WorkflowState::Editing,
            privacy_accepted,
            submit_error: None,
            in_flight: None,
            started_at: None,
            on_success: None,
        }
    }

    pub fn with_catalog(mut self, catalog: LocationCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Called once per successful submission with the record that was sent.
    pub fn on_success(mut self, callback: impl FnMut(&SubmissionRecord) + 'static) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }

    pub fn catalog(&self) -> &LocationCatalog {
        &self.catalog
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn form(&self) -> &IntakeForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut IntakeForm {
        &mut self.form
    }

    pub fn is_submitting(&self) -> bool {
        self.state == WorkflowState::Submitting
    }

    /// Message from the last failed attempt, cleared when the next one starts.
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn application_ended(&self) -> bool {
        self.config.application.ended
    }

    pub fn maintenance_active(&self, now: DateTime<Utc>) -> bool {
        let active = self.config.maintenance.is_active(now);
        self.logger.debug(&format!(
            "Maintenance check: {}",
            if active { "ACTIVE" } else { "INACTIVE" }
        ));
        active
    }

    /// Whether the privacy notice still has to be shown.
    pub fn privacy_notice_pending(&self) -> bool {
        !self.privacy_accepted
    }

    pub fn privacy_accepted(&self) -> bool {
        self.privacy_accepted
    }

    pub fn accept_privacy_notice(&mut self) {
        self.privacy_accepted = true;
        self.logger.info("Data privacy policy accepted");
    }

    /// Whether the inputs should accept edits right now.
    pub fn form_enabled(&self, now: DateTime<Utc>) -> bool {
        self.state == WorkflowState::Editing
            && self.privacy_accepted
            && !self.application_ended()
            && !self.config.maintenance.is_active(now)
    }

    /// Submit intent: check the gates, validate, and open the review.
    pub fn request_review(&mut self, now: DateTime<Utc>) -> Result<(), WorkflowError> {
        self.expect_state(WorkflowState::Editing, "review the application")?;
        if self.application_ended() {
            return Err(WorkflowError::ApplicationEnded);
        }
        if self.maintenance_active(now) {
            self.logger.warn("Submission blocked - maintenance mode active");
            return Err(WorkflowError::Maintenance);
        }
        if !self.privacy_accepted {
            return Err(WorkflowError::PrivacyNoticePending);
        }

        let report = self.form.check(&self.catalog);
        self.logger.performance("Form validation", report.elapsed);
        if !report.is_valid() {
            self.logger.warn("Form validation failed - showing errors");
            return Err(WorkflowError::Invalid(report.errors));
        }

        self.logger
            .info("Form validation passed - showing review modal");
        self.state = WorkflowState::ReviewPending;
        Ok(())
    }

    /// First confirmation: the review looks right.
    pub fn confirm_review(&mut self) -> Result<(), WorkflowError> {
        self.expect_state(WorkflowState::ReviewPending, "confirm the review")?;
        self.state = WorkflowState::Confirming;
        Ok(())
    }

    /// Back out of the review or the confirmation.
    pub fn cancel(&mut self) -> Result<(), WorkflowError> {
        match self.state {
            WorkflowState::ReviewPending | WorkflowState::Confirming => {
                self.state = WorkflowState::Editing;
                Ok(())
            }
            WorkflowState::Submitting => Err(WorkflowError::SubmissionInFlight),
            state => Err(WorkflowError::InvalidTransition {
                state,
                action: "cancel",
            }),
        }
    }

    /// Second confirmation. Freezes the record and enters `Submitting`.
    ///
    /// Maintenance is checked again here; if it has started in the meantime
    /// the attempt is refused, the message is kept in
    /// [`submit_error`](Self::submit_error) and the workflow stays in
    /// `Confirming`.
    pub fn begin_submission(
        &mut self,
        now: DateTime<Utc>,
    ) -> Result<SubmissionRecord, WorkflowError> {
        self.expect_state(WorkflowState::Confirming, "submit")?;
        if self.maintenance_active(now) {
            self.logger.warn("Submission blocked - maintenance mode active");
            self.submit_error = Some(MAINTENANCE_BLOCKED_MESSAGE.to_string());
            return Err(WorkflowError::Maintenance);
        }

        let record = self.form.snapshot();
        self.submit_error = None;
        self.in_flight = Some(record.clone());
        self.started_at = Some(Utc::now());
        self.state = WorkflowState::Submitting;
        self.logger.info("Initiating Google Sheets submission");
        Ok(record)
    }

    /// Settle the in-flight submission with the outcome of the race.
    pub fn complete(
        &mut self,
        outcome: Result<(), SubmissionFailure>,
    ) -> Result<Completion, WorkflowError> {
        self.expect_state(WorkflowState::Submitting, "complete a submission")?;
        let record = self.in_flight.take().unwrap_or_else(|| self.form.snapshot());

        let completion = match outcome {
            Ok(()) => {
                self.logger.info("Form submitted successfully");
                self.form.reset();
                self.state = WorkflowState::Succeeded;
                if let Some(callback) = self.on_success.as_mut() {
                    callback(&record);
                }
                Completion::Succeeded(record)
            }
            Err(failure) => {
                self.logger
                    .error(&format!("Form submission failed: {failure}"));
                self.state = WorkflowState::Failed;
                let message = failure.user_message();
                self.submit_error = Some(message.clone());
                self.state = WorkflowState::Confirming;
                Completion::Failed {
                    kind: failure.kind(),
                    message,
                }
            }
        };

        if let Some(started) = self.started_at.take() {
            self.logger
                .performance("Total submission process", elapsed_since(started));
        }
        Ok(completion)
    }

    /// From the success screen back to a blank form.
    pub fn start_over(&mut self) -> Result<(), WorkflowError> {
        self.expect_state(WorkflowState::Succeeded, "start over")?;
        self.form.reset();
        self.state = WorkflowState::Editing;
        Ok(())
    }

    /// Second confirmation plus transmission in one call.
    pub async fn submit<T, S, C, SL>(
        &mut self,
        submitter: &Submitter<T, S, C, SL>,
        now: DateTime<Utc>,
    ) -> Result<Completion, WorkflowError>
    where
        T: SheetsTransport,
        S: SlotStore,
        C: Timer,
        SL: FormLogger,
    {
        let record = self.begin_submission(now)?;
        let outcome = submitter.send(&record, now).await;
        self.complete(outcome)
    }

    fn expect_state(
        &self,
        expected: WorkflowState,
        action: &'static str,
    ) -> Result<(), WorkflowError> {
        if self.state == expected {
            Ok(())
        } else if self.state == WorkflowState::Submitting {
            Err(WorkflowError::SubmissionInFlight)
        } else {
            Err(WorkflowError::InvalidTransition {
                state: self.state,
                action,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::fixtures::{valid_applicant, valid_member};
    use crate::logging::{NoopLogger, RecordingLogger};
    use crate::submit::testing::{Behaviour, BrokenStore, ScriptedTransport, TokioTimer};
    use crate::submit::{NETWORK_MESSAGE, TIMEOUT_MESSAGE};
    use crate::transport::TransportError;
    use crate::validation::ApplicantField;
    use crate::MemoryStore;

    const URL: &str = "https://script.example/exec";

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_717_200_000, 0).unwrap()
    }

    fn config() -> IntakeConfig {
        IntakeConfig::new(URL).with_privacy_notice(false)
    }

    /// Workflow whose form already holds a valid record.
    fn filled(config: IntakeConfig) -> SubmissionWorkflow<NoopLogger> {
        let mut workflow = SubmissionWorkflow::new(config, NoopLogger);
        fill(&mut workflow);
        workflow
    }

    fn fill<L: FormLogger>(workflow: &mut SubmissionWorkflow<L>) {
        let applicant = valid_applicant();
        let member = valid_member();
        let form = workflow.form_mut();
        form.set_applicant(ApplicantField::LastName, &applicant.last_name);
        form.set_applicant(ApplicantField::FirstName, &applicant.first_name);
        form.set_applicant(ApplicantField::MiddleName, &applicant.middle_name);
        form.set_applicant(ApplicantField::Municipality, &applicant.municipality);
        form.set_applicant(ApplicantField::Barangay, &applicant.barangay);
        form.set_applicant(ApplicantField::Street, &applicant.street);
        form.set_applicant(ApplicantField::BirthMonth, &applicant.birth.month);
        form.set_applicant(ApplicantField::BirthDay, &applicant.birth.day);
        form.set_applicant(ApplicantField::BirthYear, &applicant.birth.year);
        form.set_applicant(ApplicantField::ContactNumber, &applicant.contact_number);
        form.set_applicant(ApplicantField::NationalId, &applicant.national_id);
        form.set_applicant(ApplicantField::Gender, "MALE");
        form.set_applicant(ApplicantField::CivilStatus, "MARRIED");
        form.set_applicant(ApplicantField::Occupation, &applicant.occupation);
        form.set_applicant(ApplicantField::MonthlySalary, &applicant.monthly_salary);
        form.set_applicant(ApplicantField::Email, &applicant.email);

        use crate::validation::MemberField as M;
        form.set_member(0, M::LastName, &member.last_name);
        form.set_member(0, M::FirstName, &member.first_name);
        form.set_member(0, M::MiddleName, &member.middle_name);
        form.set_member(0, M::Gender, "FEMALE");
        form.set_member(0, M::CivilStatus, "SINGLE");
        form.set_member(0, M::BirthMonth, &member.birth.month);
        form.set_member(0, M::BirthDay, &member.birth.day);
        form.set_member(0, M::BirthYear, &member.birth.year);
        form.set_member(0, M::Relationship, "CHILD");
    }

    fn to_confirming<L: FormLogger>(workflow: &mut SubmissionWorkflow<L>) {
        workflow.request_review(now()).unwrap();
        workflow.confirm_review().unwrap();
        assert_eq!(workflow.state(), WorkflowState::Confirming);
    }

    fn submitter(
        transport: &ScriptedTransport,
        store: &MemoryStore,
    ) -> Submitter<ScriptedTransport, MemoryStore, TokioTimer, NoopLogger> {
        Submitter::new(&config(), transport.clone(), store.clone(), TokioTimer, NoopLogger)
    }

    #[tokio::test]
    async fn test_happy_path_resets_and_calls_back_once() {
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        let mut workflow = filled(config()).on_success(move |record| {
            assert_eq!(record.applicant().first_name, "JUAN");
            seen.set(seen.get() + 1);
        });

        workflow.request_review(now()).unwrap();
        assert_eq!(workflow.state(), WorkflowState::ReviewPending);
        workflow.confirm_review().unwrap();
        assert_eq!(workflow.state(), WorkflowState::Confirming);

        let transport = ScriptedTransport::new(Behaviour::Succeed);
        let store = MemoryStore::new();
        let completion = workflow.submit(&submitter(&transport, &store), now()).await.unwrap();

        assert!(matches!(completion, Completion::Succeeded(_)));
        assert_eq!(workflow.state(), WorkflowState::Succeeded);
        assert_eq!(calls.get(), 1);
        assert_eq!(transport.calls(), 1);
        assert_eq!(workflow.form(), &IntakeForm::default());
        assert!(workflow.submit_error().is_none());

        workflow.start_over().unwrap();
        assert_eq!(workflow.state(), WorkflowState::Editing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_returns_to_confirming_with_one_backup() {
        let mut workflow = filled(config());
        to_confirming(&mut workflow);

        let transport = ScriptedTransport::new(Behaviour::Hang);
        let store = MemoryStore::new();
        let submitter = submitter(&transport, &store);
        let completion = workflow.submit(&submitter, now()).await.unwrap();

        assert_eq!(
            completion,
            Completion::Failed {
                kind: FailureKind::Timeout,
                message: TIMEOUT_MESSAGE.to_string(),
            }
        );
        assert_eq!(workflow.state(), WorkflowState::Confirming);
        assert_eq!(workflow.submit_error(), Some(TIMEOUT_MESSAGE));
        assert_eq!(workflow.form().applicant().first_name, "JUAN");

        let entries = submitter.recovery().entries().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].data.first_name, "JUAN");
        assert_eq!(entries[0].family_members[0].first_name, "MARIA");
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_ignored() {
        let mut workflow = filled(config());
        to_confirming(&mut workflow);
        workflow.begin_submission(now()).unwrap();
        assert!(workflow.is_submitting());

        let transport = ScriptedTransport::new(Behaviour::Succeed);
        let store = MemoryStore::new();
        let err = workflow.submit(&submitter(&transport, &store), now()).await.unwrap_err();
        assert_eq!(err, WorkflowError::SubmissionInFlight);
        assert_eq!(transport.calls(), 0);

        assert_eq!(workflow.request_review(now()), Err(WorkflowError::SubmissionInFlight));
        assert_eq!(workflow.cancel(), Err(WorkflowError::SubmissionInFlight));
        assert_eq!(workflow.state(), WorkflowState::Submitting);

        workflow.complete(Ok(())).unwrap();
        assert_eq!(workflow.state(), WorkflowState::Succeeded);
    }

    #[tokio::test]
    async fn test_network_failure_then_retry_succeeds() {
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        let mut workflow = filled(config()).on_success(move |_| seen.set(seen.get() + 1));
        to_confirming(&mut workflow);

        let transport = ScriptedTransport::new(Behaviour::Fail(TransportError::Network(
            "connection reset".to_string(),
        )));
        let store = MemoryStore::new();
        let submitter = submitter(&transport, &store);

        let completion = workflow.submit(&submitter, now()).await.unwrap();
        assert!(matches!(completion, Completion::Failed { kind: FailureKind::Network, .. }));
        assert_eq!(workflow.submit_error(), Some(NETWORK_MESSAGE));
        assert_eq!(calls.get(), 0);

        transport.set(Behaviour::Succeed);
        workflow.submit(&submitter, now()).await.unwrap();
        assert_eq!(workflow.state(), WorkflowState::Succeeded);
        assert!(workflow.submit_error().is_none());
        assert_eq!(calls.get(), 1);
        assert_eq!(transport.calls(), 2);
        assert_eq!(submitter.recovery().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_missing_script_url_is_a_transmission_failure() {
        let mut workflow = filled(config());
        to_confirming(&mut workflow);

        let transport = ScriptedTransport::new(Behaviour::Succeed);
        let store = MemoryStore::new();
        let submitter = Submitter::new(
            &config().with_script_url(""),
            transport.clone(),
            store,
            TokioTimer,
            NoopLogger,
        );
        let completion = workflow.submit(&submitter, now()).await.unwrap();
        assert_eq!(
            completion,
            Completion::Failed {
                kind: FailureKind::Other,
                message: "Google Sheets script URL is not configured".to_string(),
            }
        );
        assert_eq!(transport.calls(), 0);
        assert_eq!(submitter.recovery().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_lost_backup_does_not_change_the_outcome() {
        let mut workflow = filled(config());
        to_confirming(&mut workflow);

        let transport =
            ScriptedTransport::new(Behaviour::Fail(TransportError::Failed("rejected".to_string())));
        let submitter = Submitter::new(&config(), transport, BrokenStore, TokioTimer, NoopLogger);
        let completion = workflow.submit(&submitter, now()).await.unwrap();
        assert_eq!(
            completion,
            Completion::Failed {
                kind: FailureKind::Other,
                message: "rejected".to_string(),
            }
        );
        assert_eq!(workflow.state(), WorkflowState::Confirming);
    }

    #[test]
    fn test_invalid_record_stays_in_editing() {
        let mut workflow = SubmissionWorkflow::new(config(), NoopLogger);
        let err = workflow.request_review(now()).unwrap_err();
        let WorkflowError::Invalid(errors) = &err else {
            panic!("expected validation failure, got {err:?}");
        };
        assert!(errors.contains(ApplicantField::FirstName));
        assert_eq!(err.title(), "Form Validation Error");
        assert_eq!(err.details(), errors.messages());
        assert_eq!(workflow.state(), WorkflowState::Editing);
        assert_eq!(workflow.form().errors(), errors);
    }

    #[test]
    fn test_maintenance_blocks_before_validation() {
        let end = now() + chrono::TimeDelta::hours(1);
        let mut workflow = SubmissionWorkflow::new(config().with_maintenance(true, end), NoopLogger);
        assert_eq!(workflow.request_review(now()), Err(WorkflowError::Maintenance));
        assert!(workflow.form().errors().is_empty());
        assert!(!workflow.form_enabled(now()));

        let later = end + chrono::TimeDelta::seconds(1);
        assert!(workflow.form_enabled(later));
    }

    #[test]
    fn test_maintenance_rechecked_at_final_confirmation() {
        let end = now() + chrono::TimeDelta::hours(1);
        let mut workflow = filled(config().with_maintenance(true, end));
        let after_window = end + chrono::TimeDelta::seconds(1);
        workflow.request_review(after_window).unwrap();
        workflow.confirm_review().unwrap();

        assert_eq!(workflow.begin_submission(now()), Err(WorkflowError::Maintenance));
        assert_eq!(workflow.state(), WorkflowState::Confirming);
        assert_eq!(workflow.submit_error(), Some(MAINTENANCE_BLOCKED_MESSAGE));
    }

    #[test]
    fn test_application_ended_blocks_everything() {
        let mut workflow = filled(config().with_application_ended(true));
        assert_eq!(workflow.request_review(now()), Err(WorkflowError::ApplicationEnded));
        assert!(!workflow.form_enabled(now()));
        assert_eq!(workflow.state(), WorkflowState::Editing);
    }

    #[test]
    fn test_privacy_notice_must_be_accepted() {
        let logger = RecordingLogger::default();
        let mut workflow = SubmissionWorkflow::new(
            IntakeConfig::new(URL).with_privacy_notice(true),
            logger.clone(),
        );
        fill(&mut workflow);
        assert!(workflow.privacy_notice_pending());
        assert!(!workflow.form_enabled(now()));
        assert_eq!(workflow.request_review(now()), Err(WorkflowError::PrivacyNoticePending));

        workflow.accept_privacy_notice();
        assert!(workflow.form_enabled(now()));
        workflow.request_review(now()).unwrap();
        assert!(logger.has("info: Data privacy policy accepted"));
        assert!(logger.has("perf: Form validation"));
    }

    #[test]
    fn test_cancel_returns_to_editing() {
        let mut workflow = filled(config());
        workflow.request_review(now()).unwrap();
        workflow.cancel().unwrap();
        assert_eq!(workflow.state(), WorkflowState::Editing);

        to_confirming(&mut workflow);
        workflow.cancel().unwrap();
        assert_eq!(workflow.state(), WorkflowState::Editing);

        assert_eq!(
            workflow.cancel(),
            Err(WorkflowError::InvalidTransition {
                state: WorkflowState::Editing,
                action: "cancel",
            })
        );
    }

    #[test]
    fn test_out_of_order_transitions_are_refused() {
        let mut workflow = filled(config());
        assert!(matches!(
            workflow.confirm_review(),
            Err(WorkflowError::InvalidTransition { .. })
        ));
        assert!(matches!(
            workflow.begin_submission(now()),
            Err(WorkflowError::InvalidTransition { .. })
        ));
        assert!(matches!(
            workflow.complete(Ok(())),
            Err(WorkflowError::InvalidTransition { .. })
        ));
        assert!(workflow.start_over().is_err());
        assert_eq!(workflow.state(), WorkflowState::Editing);
    }

    #[test]
    fn test_total_duration_is_logged() {
        let logger = RecordingLogger::default();
        let mut workflow = SubmissionWorkflow::new(config(), logger.clone());
        fill(&mut workflow);
        to_confirming(&mut workflow);
        workflow.begin_submission(now()).unwrap();
        workflow.complete(Err(SubmissionFailure::Timeout)).unwrap();
        assert!(logger.has("perf: Total submission process"));
        assert!(logger.has("error: Form submission failed"));
    }
}
