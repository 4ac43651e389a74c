//! Development card: recovery-log count, a connection test and gate status.

use chrono::Utc;
use dioxus::prelude::*;

use crate::context::use_intake;
use crate::icons::{FaDatabase, FaPlug, FaScrewdriverWrench};
use crate::Icon;

#[component]
pub fn DebugTools() -> Element {
    let ctx = use_intake();
    let mut refresh = use_signal(|| 0u32);
    let mut status = use_signal(|| None::<String>);
    let mut testing = use_signal(|| false);

    let count_ctx = ctx.clone();
    let saved = use_resource(move || {
        refresh();
        let submitter = count_ctx.submitter();
        async move { submitter.saved_count().await }
    });

    let (maintenance, privacy_accepted, form_enabled) = {
        let wf = ctx.workflow.read();
        let now = Utc::now();
        (wf.maintenance_active(now), wf.privacy_accepted(), wf.form_enabled(now))
    };

    let test_ctx = ctx.clone();
    let test_connection = move |_| {
        let submitter = test_ctx.submitter();
        testing.set(true);
        spawn(async move {
            let outcome = submitter.test_connection(Utc::now()).await;
            status.set(Some(match outcome {
                Ok(()) => "Test submission sent.".to_string(),
                Err(e) => format!("Test failed: {}", e.user_message()),
            }));
            testing.set(false);
            refresh += 1;
        });
    };

    let saved_text = match &*saved.read() {
        Some(Ok(count)) => format!("You have {count} saved submissions."),
        Some(Err(e)) => format!("Saved submissions unavailable: {e}"),
        None => "Loading saved submissions...".to_string(),
    };

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h5 {
                    Icon { icon: FaScrewdriverWrench, width: 16, height: 16 }
                    "🛠️ Development Tools"
                }
            }
            div { class: "card-body",
                p { "{saved_text}" }
                div { class: "status-row",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| refresh += 1,
                        Icon { icon: FaDatabase, width: 12, height: 12 }
                        "View Saved Data"
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: testing(),
                        onclick: test_connection,
                        Icon { icon: FaPlug, width: 12, height: 12 }
                        "Test Connection"
                    }
                }
                if let Some(message) = status() {
                    div { class: "alert alert-info", "{message}" }
                }
                h6 { "System Status" }
                div { class: "status-row",
                    StatusItem { label: "Maintenance", value: if maintenance { "Active" } else { "Inactive" } }
                    StatusItem { label: "Data Privacy", value: if privacy_accepted { "Accepted" } else { "Pending" } }
                    StatusItem { label: "Form Access", value: if form_enabled { "Enabled" } else { "Disabled" } }
                }
            }
        }
    }
}

#[component]
fn StatusItem(label: String, value: String) -> Element {
    rsx! {
        small { class: "muted", "{label}: " strong { "{value}" } }
    }
}
