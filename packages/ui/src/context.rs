//! Intake context and hooks for the UI.
//!
//! [`IntakeProvider`] owns the [`SubmissionWorkflow`] in a signal and shares it,
//! together with the platform submitter, through [`IntakeContext`]. Components
//! read the workflow for rendering and go through the context's action methods
//! for every transition, so the state machine stays the single source of
//! truth for which dialog is open.

use std::rc::Rc;

use chrono::Utc;
use dioxus::prelude::*;
use intake::{
    Completion, IntakeConfig, MemberLimitError, SubmissionRecord, SubmissionWorkflow,
    TracingLogger, WorkflowError,
};

use crate::platform::{make_submitter, PlatformSubmitter};

pub type Workflow = SubmissionWorkflow<TracingLogger>;

/// Content of the error modal.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub details: Vec<String>,
}

impl From<&WorkflowError> for Notice {
    fn from(error: &WorkflowError) -> Self {
        Self {
            title: error.title().to_string(),
            message: error.to_string(),
            details: error.details(),
        }
    }
}

impl From<&MemberLimitError> for Notice {
    fn from(error: &MemberLimitError) -> Self {
        Self {
            title: error.title().to_string(),
            message: error.to_string(),
            details: Vec::new(),
        }
    }
}

/// Handles shared by every intake component.
#[derive(Clone)]
pub struct IntakeContext {
    pub workflow: Signal<Workflow>,
    pub notice: Signal<Option<Notice>>,
    /// Record from the most recent successful submission.
    pub last_success: Signal<Option<SubmissionRecord>>,
    submitter: Rc<PlatformSubmitter>,
}

impl IntakeContext {
    pub fn submitter(&self) -> Rc<PlatformSubmitter> {
        self.submitter.clone()
    }

    pub fn show(&self, notice: Notice) {
        let mut slot = self.notice;
        slot.set(Some(notice));
    }

    pub fn dismiss_notice(&self) {
        let mut slot = self.notice;
        slot.set(None);
    }

    /// "Review & Submit" pressed.
    pub fn request_review(&self) {
        let mut workflow = self.workflow;
        let result = workflow.write().request_review(Utc::now());
        if let Err(e) = result {
            self.show(Notice::from(&e));
        }
    }

    pub fn confirm_review(&self) {
        self.transition(|workflow| workflow.confirm_review());
    }

    pub fn cancel(&self) {
        self.transition(|workflow| workflow.cancel());
    }

    pub fn start_over(&self) {
        let mut last_success = self.last_success;
        last_success.set(None);
        self.transition(|workflow| workflow.start_over());
    }

    pub fn accept_privacy_notice(&self) {
        let mut workflow = self.workflow;
        workflow.write().accept_privacy_notice();
    }

    pub fn add_member(&self) {
        let mut workflow = self.workflow;
        let result = workflow.write().form_mut().add_member();
        if let Err(e) = result {
            self.show(Notice::from(&e));
        }
    }

    pub fn remove_member(&self, index: usize) {
        let mut workflow = self.workflow;
        let result = workflow.write().form_mut().remove_member(index);
        if let Err(e) = result {
            self.show(Notice::from(&e));
        }
    }

    /// Second confirmation: start the race between the post and the timeout.
    pub fn submit(&self) {
        let mut workflow = self.workflow;
        let now = Utc::now();
        let begun = workflow.write().begin_submission(now);
        match begun {
            Ok(record) => {
                let submitter = self.submitter.clone();
                let context = self.clone();
                spawn(async move {
                    let outcome = submitter.send(&record, now).await;
                    let completion = workflow.write().complete(outcome);
                    match completion {
                        Ok(Completion::Failed { message, .. }) => {
                            tracing::warn!("submission failed: {message}");
                        }
                        Ok(Completion::Succeeded(_)) => {}
                        Err(e) => context.show(Notice::from(&e)),
                    }
                });
            }
            // Shown inside the confirmation dialog through `submit_error`.
            Err(WorkflowError::Maintenance) => {}
            Err(e) => self.show(Notice::from(&e)),
        }
    }

    fn transition(&self, step: impl FnOnce(&mut Workflow) -> Result<(), WorkflowError>) {
        let mut workflow = self.workflow;
        let result = step(&mut workflow.write());
        if let Err(e) = result {
            self.show(Notice::from(&e));
        }
    }
}

/// Get the shared intake context.
pub fn use_intake() -> IntakeContext {
    use_context::<IntakeContext>()
}

/// Provider component that owns the workflow for one form session.
#[component]
pub fn IntakeProvider(config: IntakeConfig, children: Element) -> Element {
    let mut last_success = use_signal(|| None::<SubmissionRecord>);
    let notice = use_signal(|| None::<Notice>);

    let workflow = use_signal(|| {
        let logger = TracingLogger::new(config.logging.level);
        SubmissionWorkflow::new(config.clone(), logger).on_success(move |record| {
            tracing::info!(applicant = %record.applicant().full_name(), "application submitted");
            last_success.set(Some(record.clone()));
        })
    });
    let submitter = use_hook(|| Rc::new(make_submitter(&config)));

    use_context_provider(|| IntakeContext {
        workflow,
        notice,
        last_success,
        submitter,
    });

    rsx! {
        {children}
    }
}
