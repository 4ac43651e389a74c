//! Confirmation, progress and error dialogs around the submission itself.

use dioxus::prelude::*;

use crate::context::{use_intake, Notice};
use crate::icons::{FaPaperPlane, FaTriangleExclamation, FaXmark};
use crate::views::{ModalOverlay, ModalSize};
use crate::Icon;

/// Last chance to back out. Also where a failed attempt's message lands.
#[component]
pub fn ConfirmationModal(submit_error: Option<String>) -> Element {
    let ctx = use_intake();
    let cancel_ctx = ctx.clone();

    rsx! {
        ModalOverlay {
            size: ModalSize::Narrow,
            div { class: "modal-header",
                h4 { "Confirm Submission" }
            }
            div { class: "modal-body",
                p { "Are you sure you want to submit your application data now? This action cannot be undone." }
                if let Some(message) = submit_error {
                    div { class: "alert alert-danger",
                        strong { "Submission Error" }
                        p { "{message}" }
                    }
                }
            }
            div { class: "modal-footer",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| cancel_ctx.cancel(),
                    "No, Go Back"
                }
                button {
                    class: "btn btn-success",
                    r#type: "button",
                    onclick: move |_| ctx.submit(),
                    Icon { icon: FaPaperPlane, width: 12, height: 12 }
                    "Yes, Submit Now"
                }
            }
        }
    }
}

#[component]
pub fn ProgressOverlay() -> Element {
    rsx! {
        ModalOverlay {
            size: ModalSize::Narrow,
            div { class: "modal-body notice-screen",
                div { class: "spinner" }
                h5 { "Submitting..." }
                p { "Processing your application" }
                small { class: "muted", "This may take a few moments..." }
            }
        }
    }
}

#[component]
pub fn ErrorModal(notice: Notice) -> Element {
    let ctx = use_intake();
    let close_ctx = ctx.clone();
    let Notice { title, message, details } = notice;

    rsx! {
        ModalOverlay {
            on_close: move |_| close_ctx.dismiss_notice(),
            div { class: "modal-header",
                h4 {
                    Icon { icon: FaTriangleExclamation, width: 18, height: 18 }
                    "{title}"
                }
            }
            div { class: "modal-body",
                p { "{message}" }
                if !details.is_empty() {
                    ul {
                        for (i, detail) in details.iter().enumerate() {
                            li { key: "{i}", "{detail}" }
                        }
                    }
                }
            }
            div { class: "modal-footer",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| ctx.dismiss_notice(),
                    Icon { icon: FaXmark, width: 12, height: 12 }
                    "Close"
                }
            }
        }
    }
}
