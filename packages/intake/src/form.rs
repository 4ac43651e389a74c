//! # Form editing state
//!
//! [`IntakeForm`] owns the record being filled in and its current [`ErrorMap`].
//! Edits go through [`set_applicant`](IntakeForm::set_applicant) and
//! [`set_member`](IntakeForm::set_member), which apply the same normalisation
//! the paper form asks for:
//!
//! - names, street, email and occupation are upper-cased as they are typed
//! - every `.` is dropped from middle names
//! - picking a municipality clears the barangay
//! - an edited field loses its error message right away, without
//!   re-validating anything else
//!
//! The error map is otherwise only ever replaced wholesale by
//! [`validate`](IntakeForm::validate), except that removing a family member
//! renumbers the errors of the members after it.

use thiserror::Error;

use crate::locations::LocationCatalog;
use crate::models::{
    parse_choice, Applicant, FamilyMember, MAX_FAMILY_MEMBERS, MIN_FAMILY_MEMBERS,
};
use crate::payload::SubmissionRecord;
use crate::validation::{ApplicantField, ErrorMap, FieldKey, MemberField, ValidationReport};

/// Rejected change to the family member list.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MemberLimitError {
    #[error("You can only add up to 3 family members.")]
    TooMany,
    #[error("At least one family member is required.")]
    TooFew,
    #[error("There is no family member at index {0}.")]
    NoSuchMember(usize),
}

impl MemberLimitError {
    /// Heading for the notice shown to the user.
    pub fn title(&self) -> &'static str {
        match self {
            Self::TooMany => "Maximum Limit Reached",
            Self::TooFew => "Minimum Requirement",
            Self::NoSuchMember(_) => "Family Member Not Found",
        }
    }
}

/// Record under edit plus its validation state.
#[derive(Clone, Debug, PartialEq)]
pub struct IntakeForm {
    applicant: Applicant,
    members: Vec<FamilyMember>,
    errors: ErrorMap,
}

impl Default for IntakeForm {
    fn default() -> Self {
        Self {
            applicant: Applicant::default(),
            members: vec![FamilyMember::default()],
            errors: ErrorMap::new(),
        }
    }
}

impl IntakeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applicant(&self) -> &Applicant {
        &self.applicant
    }

    pub fn members(&self) -> &[FamilyMember] {
        &self.members
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn can_add_member(&self) -> bool {
        self.members.len() < MAX_FAMILY_MEMBERS
    }

    /// Update one applicant field from its raw input value.
    pub fn set_applicant(&mut self, field: ApplicantField, value: &str) {
        use ApplicantField as F;

        let applicant = &mut self.applicant;
        match field {
            F::LastName => applicant.last_name = value.to_uppercase(),
            F::FirstName => applicant.first_name = value.to_uppercase(),
            F::MiddleName => applicant.middle_name = strip_periods(value).to_uppercase(),
            F::Suffix => applicant.suffix = parse_choice(value),
            F::Municipality => {
                applicant.municipality = value.to_string();
                applicant.barangay.clear();
            }
            F::Barangay => applicant.barangay = value.to_string(),
            F::Street => applicant.street = value.to_uppercase(),
            F::BirthMonth => applicant.birth.month = value.to_string(),
            F::BirthDay => applicant.birth.day = value.to_string(),
            F::BirthYear => applicant.birth.year = value.to_string(),
            F::ContactNumber => applicant.contact_number = value.to_string(),
            F::NationalId => applicant.national_id = value.to_string(),
            F::Gender => applicant.gender = parse_choice(value),
            F::CivilStatus => applicant.civil_status = parse_choice(value),
            F::Occupation => applicant.occupation = value.to_uppercase(),
            F::MonthlySalary => applicant.monthly_salary = value.to_string(),
            F::Email => applicant.email = value.to_uppercase(),
        }
        self.errors.clear_field(field);
    }

    /// Update one field of the member at `index`. Returns `false` when there
    /// is no such member.
    pub fn set_member(&mut self, index: usize, field: MemberField, value: &str) -> bool {
        use MemberField as F;

        let Some(member) = self.members.get_mut(index) else {
            return false;
        };
        match field {
            F::LastName => member.last_name = value.to_uppercase(),
            F::FirstName => member.first_name = value.to_uppercase(),
            F::MiddleName => member.middle_name = strip_periods(value).to_uppercase(),
            F::Suffix => member.suffix = parse_choice(value),
            F::Gender => member.gender = parse_choice(value),
            F::CivilStatus => member.civil_status = parse_choice(value),
            F::BirthMonth => member.birth.month = value.to_string(),
            F::BirthDay => member.birth.day = value.to_string(),
            F::BirthYear => member.birth.year = value.to_string(),
            F::Relationship => member.relationship = parse_choice(value),
            F::Occupation => member.occupation = value.to_uppercase(),
            F::Salary => member.salary = value.to_string(),
            F::ContactNumber => member.contact_number = value.to_string(),
        }
        self.errors.clear_field(FieldKey::member(index, field));
        true
    }

    /// Current input value of an applicant field, as the form displays it.
    pub fn applicant_value(&self, field: ApplicantField) -> String {
        use ApplicantField as F;

        let applicant = &self.applicant;
        match field {
            F::LastName => applicant.last_name.clone(),
            F::FirstName => applicant.first_name.clone(),
            F::MiddleName => applicant.middle_name.clone(),
            F::Suffix => choice_value(applicant.suffix.map(|s| s.as_str())),
            F::Municipality => applicant.municipality.clone(),
            F::Barangay => applicant.barangay.clone(),
            F::Street => applicant.street.clone(),
            F::BirthMonth => applicant.birth.month.clone(),
            F::BirthDay => applicant.birth.day.clone(),
            F::BirthYear => applicant.birth.year.clone(),
            F::ContactNumber => applicant.contact_number.clone(),
            F::NationalId => applicant.national_id.clone(),
            F::Gender => choice_value(applicant.gender.map(|g| g.as_str())),
            F::CivilStatus => choice_value(applicant.civil_status.map(|c| c.as_str())),
            F::Occupation => applicant.occupation.clone(),
            F::MonthlySalary => applicant.monthly_salary.clone(),
            F::Email => applicant.email.clone(),
        }
    }

    /// Current input value of a member field; empty for a missing member.
    pub fn member_value(&self, index: usize, field: MemberField) -> String {
        use MemberField as F;

        let Some(member) = self.members.get(index) else {
            return String::new();
        };
        match field {
            F::LastName => member.last_name.clone(),
            F::FirstName => member.first_name.clone(),
            F::MiddleName => member.middle_name.clone(),
            F::Suffix => choice_value(member.suffix.map(|s| s.as_str())),
            F::Gender => choice_value(member.gender.map(|g| g.as_str())),
            F::CivilStatus => choice_value(member.civil_status.map(|c| c.as_str())),
            F::BirthMonth => member.birth.month.clone(),
            F::BirthDay => member.birth.day.clone(),
            F::BirthYear => member.birth.year.clone(),
            F::Relationship => choice_value(member.relationship.map(|r| r.as_str())),
            F::Occupation => member.occupation.clone(),
            F::Salary => member.salary.clone(),
            F::ContactNumber => member.contact_number.clone(),
        }
    }

    /// Append an empty member. Returns the new member's index.
    pub fn add_member(&mut self) -> Result<usize, MemberLimitError> {
        if !self.can_add_member() {
            return Err(MemberLimitError::TooMany);
        }
        self.members.push(FamilyMember::default());
        Ok(self.members.len() - 1)
    }

    pub fn remove_member(&mut self, index: usize) -> Result<FamilyMember, MemberLimitError> {
        if self.members.len() <= MIN_FAMILY_MEMBERS {
            return Err(MemberLimitError::TooFew);
        }
        if index >= self.members.len() {
            return Err(MemberLimitError::NoSuchMember(index));
        }
        self.errors.shift_members_after(index);
        Ok(self.members.remove(index))
    }

    /// Recompute the whole error map. Returns whether the record is valid.
    pub fn validate(&mut self, catalog: &LocationCatalog) -> bool {
        self.check(catalog).is_valid()
    }

    /// Like [`validate`](Self::validate), but hands back the timed report.
    pub fn check(&mut self, catalog: &LocationCatalog) -> ValidationReport {
        let report = ValidationReport::run(&self.applicant, &self.members, catalog);
        self.errors = report.errors.clone();
        report
    }

    /// Immutable copy of the record for transmission.
    pub fn snapshot(&self) -> SubmissionRecord {
        SubmissionRecord::capture(&self.applicant, &self.members)
    }

    /// Back to empty defaults: blank applicant, one blank member, no errors.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn strip_periods(value: &str) -> String {
    value.chars().filter(|c| *c != '.').collect()
}

fn choice_value(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}
