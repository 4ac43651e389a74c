//! The single intake page: gates, form sections and whichever dialog the
//! workflow state calls for.

use chrono::Utc;
use dioxus::prelude::*;
use intake::WorkflowState;

use crate::applicant_section::ApplicantSection;
use crate::context::use_intake;
use crate::debug_tools::DebugTools;
use crate::family_members::FamilyMembersSection;
use crate::icons::FaPaperPlane;
use crate::views::{
    ApplicationEnded, ConfirmationModal, DataPrivacyModal, ErrorModal, MaintenanceNotice,
    ProgressOverlay, ReviewModal, SuccessPanel,
};
use crate::Icon;

#[component]
pub fn IntakePage() -> Element {
    let ctx = use_intake();
    let now = Utc::now();

    let wf = ctx.workflow.read();
    if wf.application_ended() {
        return rsx! { ApplicationEnded {} };
    }
    if wf.maintenance_active(now) {
        return rsx! { MaintenanceNotice {} };
    }

    let state = wf.state();
    let draft = wf.form().clone();
    let form_enabled = wf.form_enabled(now);
    let privacy_pending = wf.privacy_notice_pending();
    let submit_error = wf.submit_error().map(str::to_string);
    let debug_tools = wf.config().features.debug_tools;
    drop(wf);

    let notice = ctx.notice.read().clone();
    let submitted_name = ctx
        .last_success
        .read()
        .as_ref()
        .map(|record| record.applicant().full_name());

    if state == WorkflowState::Succeeded {
        return rsx! {
            div { class: "intake-page",
                SuccessPanel { applicant: submitted_name }
            }
        };
    }

    let disabled = !form_enabled;
    let review_ctx = ctx.clone();

    rsx! {
        div { class: "intake-page",
            h1 { class: "intake-title", "AICS Application Form" }

            if debug_tools {
                DebugTools {}
            }

            form {
                class: if disabled { "form-disabled" } else { "" },
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    review_ctx.request_review();
                },
                ApplicantSection { disabled }
                FamilyMembersSection { disabled }
                div { class: "status-row",
                    button {
                        class: "btn btn-primary btn-lg",
                        r#type: "submit",
                        disabled,
                        Icon { icon: FaPaperPlane, width: 14, height: 14 }
                        "Review & Submit My Application"
                    }
                }
            }

            match state {
                WorkflowState::ReviewPending => rsx! { ReviewModal { form: draft } },
                WorkflowState::Confirming | WorkflowState::Failed => rsx! { ConfirmationModal { submit_error } },
                WorkflowState::Submitting => rsx! { ProgressOverlay {} },
                WorkflowState::Editing | WorkflowState::Succeeded => rsx! {},
            }

            if privacy_pending {
                DataPrivacyModal {}
            }
            if let Some(notice) = notice {
                ErrorModal { notice }
            }
        }
    }
}
