//! Applicant, address and contact cards of the intake form.

use dioxus::prelude::*;
use intake::locations::display_name;
use intake::{ApplicantField as F, CivilStatus, Gender, Suffix};

use crate::context::{use_intake, Workflow};
use crate::fields::{
    choice_options, day_options, month_options, year_options, Options, SelectField, TextField,
};
use crate::icons::{FaHouse, FaPhone, FaUser};
use crate::Icon;

/// Writes one applicant field back into the workflow's form.
fn edit(workflow: Signal<Workflow>, field: F) -> impl FnMut(String) + 'static {
    let mut workflow = workflow;
    move |value: String| workflow.write().form_mut().set_applicant(field, &value)
}

#[component]
pub fn ApplicantSection(disabled: bool) -> Element {
    let ctx = use_intake();
    let workflow = ctx.workflow;
    let (form, catalog) = {
        let wf = workflow.read();
        (wf.form().clone(), *wf.catalog())
    };
    let value = |field: F| form.applicant_value(field);
    let error = |field: F| form.errors().get(field).map(str::to_string);

    let municipality = value(F::Municipality);
    let municipalities: Options = catalog
        .municipalities()
        .map(|m| (m.to_string(), display_name(m).to_string()))
        .collect();
    let barangays: Options = catalog
        .barangays_of(&municipality)
        .iter()
        .map(|b| (b.to_string(), display_name(b).to_string()))
        .collect();

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h5 { Icon { icon: FaUser, width: 16, height: 16 } "Applicant Information" }
            }
            div { class: "card-body field-grid",
                TextField {
                    id: "lastName", label: "Last Name", required: true, uppercase: true, disabled,
                    value: value(F::LastName), error: error(F::LastName),
                    oninput: edit(workflow, F::LastName),
                }
                TextField {
                    id: "firstName", label: "First Name", required: true, uppercase: true, disabled,
                    value: value(F::FirstName), error: error(F::FirstName),
                    oninput: edit(workflow, F::FirstName),
                }
                TextField {
                    id: "middleName", label: "Middle Name", uppercase: true, disabled,
                    value: value(F::MiddleName), error: error(F::MiddleName),
                    oninput: edit(workflow, F::MiddleName),
                }
                SelectField {
                    id: "extensionName", label: "Extension Name", disabled, placeholder: "None",
                    value: value(F::Suffix), error: error(F::Suffix),
                    options: choice_options(Suffix::ALL, Suffix::as_str, Suffix::label),
                    onchange: edit(workflow, F::Suffix),
                }
                SelectField {
                    id: "gender", label: "Gender", required: true, disabled,
                    value: value(F::Gender), error: error(F::Gender),
                    options: choice_options(Gender::ALL, Gender::as_str, Gender::label),
                    onchange: edit(workflow, F::Gender),
                }
                SelectField {
                    id: "civilStatus", label: "Civil Status", required: true, disabled,
                    value: value(F::CivilStatus), error: error(F::CivilStatus),
                    options: choice_options(CivilStatus::ALL, CivilStatus::as_str, CivilStatus::label),
                    onchange: edit(workflow, F::CivilStatus),
                }
                SelectField {
                    id: "birthMonth", label: "Birth Month", required: true, disabled, placeholder: "Month",
                    value: value(F::BirthMonth), error: error(F::BirthMonth),
                    options: month_options(),
                    onchange: edit(workflow, F::BirthMonth),
                }
                SelectField {
                    id: "birthDay", label: "Birth Day", required: true, disabled, placeholder: "Day",
                    value: value(F::BirthDay), error: error(F::BirthDay),
                    options: day_options(),
                    onchange: edit(workflow, F::BirthDay),
                }
                SelectField {
                    id: "birthYear", label: "Birth Year", required: true, disabled, placeholder: "Year",
                    value: value(F::BirthYear), error: error(F::BirthYear),
                    options: year_options(),
                    onchange: edit(workflow, F::BirthYear),
                }
                TextField {
                    id: "occupation", label: "Occupation", required: true, uppercase: true, disabled,
                    value: value(F::Occupation), error: error(F::Occupation),
                    oninput: edit(workflow, F::Occupation),
                }
                TextField {
                    id: "monthlySalary", label: "Monthly Salary", required: true, disabled,
                    input_type: "number", placeholder: "0.00",
                    value: value(F::MonthlySalary), error: error(F::MonthlySalary),
                    oninput: edit(workflow, F::MonthlySalary),
                }
            }
        }

        div { class: "card",
            div { class: "card-header",
                h5 { Icon { icon: FaHouse, width: 16, height: 16 } "Address Information" }
            }
            div { class: "card-body field-grid",
                TextField {
                    id: "province", label: "Province", disabled: true,
                    value: display_name(&form.applicant().province).to_string(),
                    oninput: move |_: String| {},
                }
                SelectField {
                    id: "municipality", label: "Municipality", required: true, disabled,
                    value: municipality.clone(), error: error(F::Municipality),
                    options: municipalities,
                    onchange: edit(workflow, F::Municipality),
                }
                SelectField {
                    id: "barangay", label: "Barangay", required: true,
                    disabled: disabled || municipality.is_empty(),
                    placeholder: if municipality.is_empty() { "Select a municipality first" } else { "Select..." },
                    value: value(F::Barangay), error: error(F::Barangay),
                    options: barangays,
                    onchange: edit(workflow, F::Barangay),
                }
                TextField {
                    id: "street", label: "Street / Purok", uppercase: true, disabled,
                    value: value(F::Street), error: error(F::Street),
                    oninput: edit(workflow, F::Street),
                }
            }
        }

        div { class: "card",
            div { class: "card-header",
                h5 { Icon { icon: FaPhone, width: 16, height: 16 } "Contact Information" }
            }
            div { class: "card-body field-grid",
                TextField {
                    id: "contactNumber", label: "Contact Number", required: true, disabled,
                    input_type: "tel", placeholder: "09XXXXXXXXX", max_length: Some(11),
                    value: value(F::ContactNumber), error: error(F::ContactNumber),
                    oninput: edit(workflow, F::ContactNumber),
                }
                TextField {
                    id: "psaNationalId", label: "PSA National ID", disabled,
                    placeholder: "12 digits", max_length: Some(12),
                    value: value(F::NationalId), error: error(F::NationalId),
                    oninput: edit(workflow, F::NationalId),
                }
                TextField {
                    id: "email", label: "Email", uppercase: true, disabled,
                    input_type: "email",
                    value: value(F::Email), error: error(F::Email),
                    oninput: edit(workflow, F::Email),
                }
            }
        }
    }
}
