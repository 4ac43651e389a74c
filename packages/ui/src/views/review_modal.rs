//! Read-only summary of the record before the final confirmation.

use dioxus::prelude::*;
use intake::locations::display_name;
use intake::{Applicant, FamilyMember, IntakeForm};

use crate::context::use_intake;
use crate::icons::{FaArrowLeft, FaCircleCheck};
use crate::views::{ModalOverlay, ModalSize};
use crate::Icon;

const NOT_PROVIDED: &str = "Not provided";

fn or_not_provided(value: &str) -> String {
    if value.trim().is_empty() {
        NOT_PROVIDED.to_string()
    } else {
        value.to_string()
    }
}

fn choice<T: Copy>(value: Option<T>, label: fn(T) -> &'static str) -> String {
    value.map(label).unwrap_or(NOT_PROVIDED).to_string()
}

/// `"12500.5"` as `"₱12,500.50"`.
pub(crate) fn peso(amount: &str) -> String {
    let Ok(value) = amount.trim().parse::<f64>() else {
        return NOT_PROVIDED.to_string();
    };
    let cents = (value.abs() * 100.0).round() as u64;
    let (whole, fraction) = (cents / 100, cents % 100);

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    if fraction == 0 {
        format!("₱{sign}{grouped}")
    } else {
        format!("₱{sign}{grouped}.{fraction:02}")
    }
}

/// Street, barangay, municipality and province, skipping blanks.
pub(crate) fn full_address(applicant: &Applicant) -> String {
    [
        applicant.street.as_str(),
        display_name(&applicant.barangay),
        display_name(&applicant.municipality),
        display_name(&applicant.province),
    ]
    .into_iter()
    .map(str::trim)
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(", ")
}

#[component]
pub fn ReviewModal(form: IntakeForm) -> Element {
    let ctx = use_intake();
    let cancel_ctx = ctx.clone();
    let applicant = form.applicant().clone();
    let members = form.members().to_vec();
    let count = members.len();

    rsx! {
        ModalOverlay {
            size: ModalSize::Wide,
            div { class: "modal-header",
                h4 { "Review Your Information" }
                p { class: "muted", "Please review all details before submitting." }
            }
            div { class: "modal-body",
                div { class: "review-section",
                    h6 { "Applicant" }
                    ReviewRow { label: "Full Name", value: applicant.full_name() }
                    ReviewRow { label: "Birthdate", value: applicant.birth.display() }
                    ReviewRow { label: "Gender", value: choice(applicant.gender, |g| g.label()) }
                    ReviewRow { label: "Civil Status", value: choice(applicant.civil_status, |c| c.label()) }
                    ReviewRow { label: "Occupation", value: or_not_provided(&applicant.occupation) }
                    ReviewRow { label: "Monthly Salary", value: peso(&applicant.monthly_salary) }
                }
                div { class: "review-section",
                    h6 { "Contact" }
                    ReviewRow { label: "Contact Number", value: or_not_provided(&applicant.contact_number) }
                    ReviewRow { label: "Email", value: or_not_provided(&applicant.email) }
                    ReviewRow { label: "PSA National ID", value: or_not_provided(&applicant.national_id) }
                }
                div { class: "review-section",
                    h6 { "Address" }
                    ReviewRow { label: "Complete Address", value: full_address(&applicant) }
                }
                div { class: "review-section",
                    h6 { "Family Members ({count})" }
                    for (index, member) in members.into_iter().enumerate() {
                        MemberSummary { key: "{index}", index, member }
                    }
                }
            }
            div { class: "modal-footer",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| cancel_ctx.cancel(),
                    Icon { icon: FaArrowLeft, width: 12, height: 12 }
                    "Go Back and Edit"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| ctx.confirm_review(),
                    Icon { icon: FaCircleCheck, width: 12, height: 12 }
                    "Proceed to Submit"
                }
            }
        }
    }
}

#[component]
fn ReviewRow(label: String, value: String) -> Element {
    rsx! {
        div { class: "review-row",
            span { class: "muted", "{label}" }
            strong { "{value}" }
        }
    }
}

#[component]
fn MemberSummary(index: usize, member: FamilyMember) -> Element {
    let number = index + 1;
    let name = member.full_name();
    rsx! {
        div { class: "review-item",
            strong { "{number}. {name}" }
            ReviewRow { label: "Relationship", value: choice(member.relationship, |r| r.label()) }
            ReviewRow { label: "Birthdate", value: member.birth.display() }
            ReviewRow { label: "Gender", value: choice(member.gender, |g| g.label()) }
            ReviewRow { label: "Civil Status", value: choice(member.civil_status, |c| c.label()) }
            ReviewRow { label: "Contact Number", value: or_not_provided(&member.contact_number) }
            ReviewRow { label: "Occupation", value: or_not_provided(&member.occupation) }
            ReviewRow { label: "Monthly Salary", value: peso(&member.salary) }
        }
    }
}
