//! Full-page notices and the privacy consent dialog.

use dioxus::prelude::*;

use crate::context::use_intake;
use crate::icons::{FaCalendarXmark, FaCircleCheck, FaScrewdriverWrench};
use crate::views::{ModalOverlay, ModalSize};
use crate::Icon;

#[component]
pub fn ApplicationEnded() -> Element {
    rsx! {
        div { class: "notice-screen card",
            Icon { icon: FaCalendarXmark, width: 48, height: 48 }
            h2 { "Application Period Has Ended" }
            p { "Thank you for your interest. The scholarship application period has officially ended." }
            p { class: "muted", "Please check back for future scholarship opportunities." }
        }
    }
}

#[component]
pub fn MaintenanceNotice() -> Element {
    rsx! {
        div { class: "notice-screen card",
            Icon { icon: FaScrewdriverWrench, width: 48, height: 48 }
            h2 { "System Under Maintenance" }
            p { "We are currently performing scheduled maintenance to improve our services. Please check back later." }
            p { class: "muted", "Expected completion: Within the next few hours" }
        }
    }
}

/// Shown in place of the form after a successful submission.
#[component]
pub fn SuccessPanel(applicant: Option<String>) -> Element {
    let ctx = use_intake();

    rsx! {
        div { class: "notice-screen card",
            Icon { icon: FaCircleCheck, width: 48, height: 48 }
            h2 { "Application Submitted" }
            if let Some(name) = applicant {
                p { "Thank you, {name}. Your application has been received." }
            } else {
                p { "Your application has been received." }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| ctx.start_over(),
                "Submit Another Application"
            }
        }
    }
}

/// Consent dialog. There is no way out other than accepting.
#[component]
pub fn DataPrivacyModal() -> Element {
    let ctx = use_intake();

    rsx! {
        ModalOverlay {
            size: ModalSize::Wide,
            div { class: "modal-header",
                h4 { "Data Privacy Notice" }
            }
            div { class: "modal-body",
                h5 { "Republic Act No. 10173 (Data Privacy Act of 2012)" }
                p {
                    "We value your privacy and are committed to protecting your personal information. "
                    "By proceeding with this application, you acknowledge and agree to the following:"
                }
                h6 { "Collection of Information" }
                p {
                    "We collect personal information including but not limited to your name, contact details, "
                    "address, and other relevant information for the purpose of processing your scholarship application."
                }
                h6 { "Use of Information" }
                p {
                    "Your information will be used solely for evaluation, processing, and administration of "
                    "the scholarship program. We may also use your contact details to communicate with you "
                    "regarding your application status."
                }
                h6 { "Data Protection" }
                p {
                    "We implement appropriate technical and organizational security measures to protect your "
                    "personal information against unauthorized access, alteration, disclosure, or destruction."
                }
                h6 { "Your Rights" }
                p {
                    "You have the right to access, correct, and request deletion of your personal information "
                    "in accordance with the Data Privacy Act."
                }
                div { class: "alert alert-info",
                    "By clicking \"Accept and Continue\", you consent to the collection, use, and storage of "
                    "your personal information as described in this notice."
                }
            }
            div { class: "modal-footer",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| ctx.accept_privacy_notice(),
                    "Accept and Continue"
                }
            }
        }
    }
}
