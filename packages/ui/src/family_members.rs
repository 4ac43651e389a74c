//! Family member cards: one to three members, added and removed in place.

use dioxus::prelude::*;
use intake::models::MAX_FAMILY_MEMBERS;
use intake::{CivilStatus, FamilyMember, Gender, IntakeForm, MemberField as F, Relationship, Suffix};

use crate::context::{use_intake, Workflow};
use crate::fields::{
    choice_options, day_options, month_options, year_options, SelectField, TextField,
};
use crate::icons::{FaPlus, FaTrash, FaUsers};
use crate::Icon;

fn edit(workflow: Signal<Workflow>, index: usize, field: F) -> impl FnMut(String) + 'static {
    let mut workflow = workflow;
    move |value: String| {
        workflow.write().form_mut().set_member(index, field, &value);
    }
}

#[component]
pub fn FamilyMembersSection(disabled: bool) -> Element {
    let ctx = use_intake();
    let form = ctx.workflow.read().form().clone();
    let count = form.members().len();
    let can_add = form.can_add_member();
    let add_ctx = ctx.clone();

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h5 {
                    Icon { icon: FaUsers, width: 18, height: 18 }
                    "Family Members"
                    span { class: "badge", "{count}/{MAX_FAMILY_MEMBERS}" }
                }
                button {
                    class: "btn btn-success",
                    r#type: "button",
                    disabled: disabled || !can_add,
                    onclick: move |_| add_ctx.add_member(),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    "Add Member"
                }
            }
            div { class: "card-body",
                for (index, member) in form.members().iter().enumerate() {
                    MemberCard {
                        key: "{index}",
                        index,
                        member: member.clone(),
                        form: form.clone(),
                        removable: count > 1,
                        disabled,
                    }
                }
                if !can_add {
                    div { class: "alert alert-info",
                        small { "Maximum of {MAX_FAMILY_MEMBERS} family members allowed." }
                    }
                }
            }
        }
    }
}

#[component]
fn MemberCard(
    index: usize,
    member: FamilyMember,
    form: IntakeForm,
    removable: bool,
    disabled: bool,
) -> Element {
    let ctx = use_intake();
    let workflow = ctx.workflow;
    let number = index + 1;
    let id = move |field: F| format!("familyMember_{index}_{}", field.key());
    let value = |field: F| form.member_value(index, field);
    let error = |field: F| {
        form.errors()
            .get(intake::FieldKey::member(index, field))
            .map(str::to_string)
    };
    let title = match member.full_name() {
        name if name.is_empty() => format!("Family Member {number}"),
        name => format!("{number}. {name}"),
    };

    rsx! {
        div { class: "member-card",
            div { class: "member-card-header",
                span { "{title}" }
                if removable {
                    button {
                        class: "btn btn-danger-outline",
                        r#type: "button",
                        title: "Remove family member",
                        disabled,
                        onclick: move |_| ctx.remove_member(index),
                        Icon { icon: FaTrash, width: 12, height: 12 }
                    }
                }
            }
            div { class: "field-grid",
                TextField {
                    id: id(F::LastName), label: "Last Name", required: true, uppercase: true, disabled,
                    value: value(F::LastName), error: error(F::LastName),
                    oninput: edit(workflow, index, F::LastName),
                }
                TextField {
                    id: id(F::FirstName), label: "First Name", required: true, uppercase: true, disabled,
                    value: value(F::FirstName), error: error(F::FirstName),
                    oninput: edit(workflow, index, F::FirstName),
                }
                TextField {
                    id: id(F::MiddleName), label: "Middle Name", uppercase: true, disabled,
                    value: value(F::MiddleName), error: error(F::MiddleName),
                    oninput: edit(workflow, index, F::MiddleName),
                }
                SelectField {
                    id: id(F::Suffix), label: "Extension Name", disabled, placeholder: "None",
                    value: value(F::Suffix), error: error(F::Suffix),
                    options: choice_options(Suffix::ALL, Suffix::as_str, Suffix::label),
                    onchange: edit(workflow, index, F::Suffix),
                }
                SelectField {
                    id: id(F::Relationship), label: "Relationship", required: true, disabled,
                    value: value(F::Relationship), error: error(F::Relationship),
                    options: choice_options(Relationship::ALL, Relationship::as_str, Relationship::label),
                    onchange: edit(workflow, index, F::Relationship),
                }
                SelectField {
                    id: id(F::Gender), label: "Gender", required: true, disabled,
                    value: value(F::Gender), error: error(F::Gender),
                    options: choice_options(Gender::ALL, Gender::as_str, Gender::label),
                    onchange: edit(workflow, index, F::Gender),
                }
                SelectField {
                    id: id(F::CivilStatus), label: "Civil Status", required: true, disabled,
                    value: value(F::CivilStatus), error: error(F::CivilStatus),
                    options: choice_options(CivilStatus::ALL, CivilStatus::as_str, CivilStatus::label),
                    onchange: edit(workflow, index, F::CivilStatus),
                }
                SelectField {
                    id: id(F::BirthMonth), label: "Birth Month", required: true, disabled, placeholder: "Month",
                    value: value(F::BirthMonth), error: error(F::BirthMonth),
                    options: month_options(),
                    onchange: edit(workflow, index, F::BirthMonth),
                }
                SelectField {
                    id: id(F::BirthDay), label: "Birth Day", required: true, disabled, placeholder: "Day",
                    value: value(F::BirthDay), error: error(F::BirthDay),
                    options: day_options(),
                    onchange: edit(workflow, index, F::BirthDay),
                }
                SelectField {
                    id: id(F::BirthYear), label: "Birth Year", required: true, disabled, placeholder: "Year",
                    value: value(F::BirthYear), error: error(F::BirthYear),
                    options: year_options(),
                    onchange: edit(workflow, index, F::BirthYear),
                }
                TextField {
                    id: id(F::Occupation), label: "Occupation", uppercase: true, disabled,
                    value: value(F::Occupation), error: error(F::Occupation),
                    oninput: edit(workflow, index, F::Occupation),
                }
                TextField {
                    id: id(F::Salary), label: "Monthly Salary", disabled,
                    input_type: "number", placeholder: "0.00",
                    value: value(F::Salary), error: error(F::Salary),
                    oninput: edit(workflow, index, F::Salary),
                }
                TextField {
                    id: id(F::ContactNumber), label: "Contact Number", disabled,
                    input_type: "tel", placeholder: "09...", max_length: Some(11),
                    value: value(F::ContactNumber), error: error(F::ContactNumber),
                    oninput: edit(workflow, index, F::ContactNumber),
                }
            }
        }
    }
}
