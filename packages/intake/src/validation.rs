//! # Validation engine
//!
//! [`validate`] maps an applicant and their family members to an [`ErrorMap`]:
//! one human-readable message per invalid field, keyed by [`FieldKey`]. It is
//! pure and total. Invalid input is the output, never a panic or an `Err`.
//!
//! Every rule runs independently, so a record with five problems reports all
//! five. When two rules hit the same field the later, more specific message
//! wins (for instance "Contact number must be exactly 11 digits" replaces the
//! generic pattern message).
//!
//! ## Keys
//!
//! | Key | Rendered as |
//! |-----|-------------|
//! | `FieldKey::Applicant(ApplicantField::FirstName)` | `firstName` |
//! | `FieldKey::Member { index: 1, field: MemberField::LastName }` | `familyMember_1_lastName` |
//!
//! Member keys carry the 0-based index; member messages use the 1-based
//! position ("Family member 2 last name is required").
//!
//! ## Ordering
//!
//! [`ErrorMap`] is a `BTreeMap`, and both field enums are declared in form
//! order, so iterating the map lists applicant errors top to bottom followed
//! by each family member in turn.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

use chrono::Utc;
use regex::Regex;

use crate::locations::LocationCatalog;
use crate::logging::elapsed_since;
use crate::models::{Applicant, BirthDate, FamilyMember};

/// Earliest birth year the form accepts.
pub const MIN_BIRTH_YEAR: u16 = 1940;
/// Latest birth year the form accepts.
pub const MAX_BIRTH_YEAR: u16 = 2024;

static CONTACT_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^09[0-9]{9}$").expect("static regex"));
static NATIONAL_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{12}$").expect("static regex"));
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex"));

/// Applicant fields, in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ApplicantField {
    LastName,
    FirstName,
    MiddleName,
    Suffix,
    Municipality,
    Barangay,
    Street,
    BirthMonth,
    BirthDay,
    BirthYear,
    ContactNumber,
    NationalId,
    Gender,
    CivilStatus,
    Occupation,
    MonthlySalary,
    Email,
}

impl ApplicantField {
    pub fn key(self) -> &'static str {
        match self {
            Self::LastName => "lastName",
            Self::FirstName => "firstName",
            Self::MiddleName => "middleName",
            Self::Suffix => "extensionName",
            Self::Municipality => "municipality",
            Self::Barangay => "barangay",
            Self::Street => "street",
            Self::BirthMonth => "birthMonth",
            Self::BirthDay => "birthDay",
            Self::BirthYear => "birthYear",
            Self::ContactNumber => "contactNumber",
            Self::NationalId => "psaNationalId",
            Self::Gender => "gender",
            Self::CivilStatus => "civilStatus",
            Self::Occupation => "occupation",
            Self::MonthlySalary => "monthlySalary",
            Self::Email => "email",
        }
    }
}

/// Family member fields, in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MemberField {
    LastName,
    FirstName,
    MiddleName,
    Suffix,
    Gender,
    CivilStatus,
    BirthMonth,
    BirthDay,
    BirthYear,
    Relationship,
    Occupation,
    Salary,
    ContactNumber,
}

impl MemberField {
    pub fn key(self) -> &'static str {
        match self {
            Self::LastName => "lastName",
            Self::FirstName => "firstName",
            Self::MiddleName => "middleName",
            Self::Suffix => "extensionName",
            Self::Gender => "gender",
            Self::CivilStatus => "civilStatus",
            Self::BirthMonth => "birthMonth",
            Self::BirthDay => "birthDay",
            Self::BirthYear => "birthYear",
            Self::Relationship => "relationship",
            Self::Occupation => "occupation",
            Self::Salary => "salary",
            Self::ContactNumber => "contactNumber",
        }
    }
}

/// Identifies one field of the record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKey {
    Applicant(ApplicantField),
    Member { index: usize, field: MemberField },
}

impl FieldKey {
    pub fn member(index: usize, field: MemberField) -> Self {
        Self::Member { index, field }
    }
}

impl From<ApplicantField> for FieldKey {
    fn from(field: ApplicantField) -> Self {
        Self::Applicant(field)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applicant(field) => f.write_str(field.key()),
            Self::Member { index, field } => write!(f, "familyMember_{}_{}", index, field.key()),
        }
    }
}

/// Field → message. A missing key means the field is currently valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorMap {
    errors: BTreeMap<FieldKey, String>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, key: impl Into<FieldKey>) -> Option<&str> {
        self.errors.get(&key.into()).map(String::as_str)
    }

    pub fn contains(&self, key: impl Into<FieldKey>) -> bool {
        self.errors.contains_key(&key.into())
    }

    /// Set the message for `key`, replacing any earlier one.
    pub fn insert(&mut self, key: impl Into<FieldKey>, message: impl Into<String>) {
        self.errors.insert(key.into(), message.into());
    }

    /// Drop the message for a single field. Returns whether one was present.
    pub fn clear_field(&mut self, key: impl Into<FieldKey>) -> bool {
        self.errors.remove(&key.into()).is_some()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Follow the removal of family member `removed`: its messages go, and
    /// every later member's keys and "Family member N" numbers move up one.
    pub fn shift_members_after(&mut self, removed: usize) {
        let errors = std::mem::take(&mut self.errors);
        for (key, message) in errors {
            match key {
                FieldKey::Member { index, .. } if index == removed => {}
                FieldKey::Member { index, field } if index > removed => {
                    let old = format!("Family member {} ", index + 1);
                    let message = match message.strip_prefix(&old) {
                        Some(rest) => format!("Family member {index} {rest}"),
                        None => message,
                    };
                    self.errors.insert(FieldKey::member(index - 1, field), message);
                }
                key => {
                    self.errors.insert(key, message);
                }
            }
        }
    }

    pub fn iter(&self) -> btree_map::Iter<'_, FieldKey, String> {
        self.errors.iter()
    }

    /// Messages in form order, for the aggregate error listing.
    pub fn messages(&self) -> Vec<String> {
        self.errors.values().cloned().collect()
    }
}

impl<'a> IntoIterator for &'a ErrorMap {
    type Item = (&'a FieldKey, &'a String);
    type IntoIter = btree_map::Iter<'a, FieldKey, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Which part of the record a rule is looking at. Decides both the error key
/// and the wording of the message.
#[derive(Clone, Copy)]
enum Subject {
    Applicant,
    Member(usize),
}

impl Subject {
    fn key(self, applicant: ApplicantField, member: MemberField) -> FieldKey {
        match self {
            Subject::Applicant => FieldKey::Applicant(applicant),
            Subject::Member(index) => FieldKey::member(index, member),
        }
    }

    /// `applicant` is the full message; `member` is the tail appended after
    /// "Family member N ".
    fn message(self, applicant: &str, member: &str) -> String {
        match self {
            Subject::Applicant => applicant.to_string(),
            Subject::Member(index) => format!("Family member {} {}", index + 1, member),
        }
    }
}

/// Result of a timed validation run.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationReport {
    pub errors: ErrorMap,
    pub elapsed: Duration,
}

impl ValidationReport {
    pub fn run(applicant: &Applicant, members: &[FamilyMember], catalog: &LocationCatalog) -> Self {
        let started = Utc::now();
        let errors = validate(applicant, members, catalog);
        Self {
            errors,
            elapsed: elapsed_since(started),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_valid()
    }
}

/// Run every rule over the record and collect the failures.
pub fn validate(
    applicant: &Applicant,
    members: &[FamilyMember],
    catalog: &LocationCatalog,
) -> ErrorMap {
    let mut errors = ErrorMap::new();
    validate_applicant(applicant, catalog, &mut errors);
    for (index, member) in members.iter().enumerate() {
        validate_member(index, member, &mut errors);
    }
    errors
}

fn validate_applicant(applicant: &Applicant, catalog: &LocationCatalog, errors: &mut ErrorMap) {
    use ApplicantField as F;

    if is_blank(&applicant.first_name) {
        errors.insert(F::FirstName, "First Name is required");
    }
    if is_blank(&applicant.last_name) {
        errors.insert(F::LastName, "Last Name is required");
    }
    check_middle_name(Subject::Applicant, &applicant.middle_name, errors);

    if is_blank(&applicant.municipality) {
        errors.insert(F::Municipality, "Municipality/City is required");
    } else if !catalog.has_municipality(&applicant.municipality) {
        errors.insert(F::Municipality, "Please select a Municipality/City from the list");
    }
    if is_blank(&applicant.barangay) {
        errors.insert(F::Barangay, "Barangay is required");
    } else if !catalog.contains(&applicant.municipality, &applicant.barangay) {
        errors.insert(F::Barangay, "Barangay does not belong to the selected Municipality/City");
    }

    check_birth_date(Subject::Applicant, &applicant.birth, errors);

    if is_blank(&applicant.contact_number) {
        errors.insert(F::ContactNumber, "Contact Number is required");
    } else {
        check_contact_number(Subject::Applicant, &applicant.contact_number, errors);
    }

    if applicant.gender.is_none() {
        errors.insert(F::Gender, "Gender is required");
    }
    if applicant.civil_status.is_none() {
        errors.insert(F::CivilStatus, "Civil Status is required");
    }
    if is_blank(&applicant.occupation) {
        errors.insert(F::Occupation, "Occupation is required");
    }
    if is_blank(&applicant.monthly_salary) {
        errors.insert(F::MonthlySalary, "Monthly Salary is required");
    } else if !is_amount(&applicant.monthly_salary) {
        errors.insert(F::MonthlySalary, "Monthly Salary must be a number");
    }

    if !is_blank(&applicant.national_id) && !NATIONAL_ID.is_match(&applicant.national_id) {
        errors.insert(
            F::NationalId,
            "PSA National ID must be exactly 12 digits (numbers only)",
        );
    }

    if !is_blank(&applicant.email) && !EMAIL.is_match(&applicant.email) {
        errors.insert(F::Email, "Please enter a valid email address");
    }
}

fn validate_member(index: usize, member: &FamilyMember, errors: &mut ErrorMap) {
    use MemberField as F;

    let number = index + 1;
    let key = |field| FieldKey::member(index, field);

    if is_blank(&member.last_name) {
        errors.insert(key(F::LastName), format!("Family member {number} last name is required"));
    }
    if is_blank(&member.first_name) {
        errors.insert(key(F::FirstName), format!("Family member {number} first name is required"));
    }
    if member.gender.is_none() {
        errors.insert(key(F::Gender), format!("Family member {number} gender is required"));
    }
    if member.civil_status.is_none() {
        errors.insert(
            key(F::CivilStatus),
            format!("Family member {number} civil status is required"),
        );
    }
    if member.relationship.is_none() {
        errors.insert(
            key(F::Relationship),
            format!("Family member {number} relationship is required"),
        );
    }

    let subject = Subject::Member(index);
    check_birth_date(subject, &member.birth, errors);
    check_middle_name(subject, &member.middle_name, errors);

    if !is_blank(&member.contact_number) {
        check_contact_number(subject, &member.contact_number, errors);
    }
    if !is_blank(&member.salary) && !is_amount(&member.salary) {
        errors.insert(key(F::Salary), format!("Family member {number} salary must be a number"));
    }
}

fn check_middle_name(subject: Subject, raw: &str, errors: &mut ErrorMap) {
    if is_blank(raw) {
        return;
    }
    let clean: String = raw.chars().filter(|c| *c != '.').collect();
    if is_blank(&clean) {
        return;
    }

    let key = subject.key(ApplicantField::MiddleName, MemberField::MiddleName);
    if !clean.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace()) {
        errors.insert(
            key,
            subject.message(
                "Middle name can only contain letters and spaces",
                "middle name can only contain letters and spaces",
            ),
        );
    } else if clean.chars().filter(char::is_ascii_alphabetic).count() < 2 {
        errors.insert(
            key,
            subject.message(
                "Middle name must be at least 2 letters",
                "middle name must be at least 2 letters",
            ),
        );
    }
}

fn check_birth_date(subject: Subject, birth: &BirthDate, errors: &mut ErrorMap) {
    let month_key = subject.key(ApplicantField::BirthMonth, MemberField::BirthMonth);
    let day_key = subject.key(ApplicantField::BirthDay, MemberField::BirthDay);
    let year_key = subject.key(ApplicantField::BirthYear, MemberField::BirthYear);

    if is_blank(&birth.month) || is_blank(&birth.day) || is_blank(&birth.year) {
        if is_blank(&birth.month) {
            errors.insert(
                month_key,
                subject.message("Birth month is required", "birth month is required"),
            );
        }
        if is_blank(&birth.day) {
            errors.insert(
                day_key,
                subject.message("Birth day is required", "birth day is required"),
            );
        }
        if is_blank(&birth.year) {
            errors.insert(
                year_key,
                subject.message("Birth year is required", "birth year is required"),
            );
        }
        return;
    }

    let year_ok = birth
        .year
        .trim()
        .parse::<u16>()
        .is_ok_and(|year| (MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR).contains(&year));
    if !year_ok {
        errors.insert(
            year_key,
            subject.message(
                "Birth year must be between 1940 and 2024",
                "birth year must be between 1940 and 2024",
            ),
        );
    }

    let month = birth.month.trim().parse::<u8>().ok().filter(|m| (1..=12).contains(m));
    let day = birth.day.trim().parse::<u8>().ok().filter(|d| (1..=31).contains(d));
    let Some(month) = month else {
        errors.insert(
            month_key,
            subject.message("Birth month is invalid", "birth month is invalid"),
        );
        return;
    };
    let Some(day) = day else {
        errors.insert(
            day_key,
            subject.message("Birth day is invalid", "birth day is invalid"),
        );
        return;
    };

    if day > max_day(month) {
        let message = if month == 2 {
            subject.message(
                "February has maximum 29 days",
                "birth day is invalid: February has maximum 29 days",
            )
        } else {
            subject.message(
                "This month has maximum 30 days",
                "birth day is invalid: this month has maximum 30 days",
            )
        };
        errors.insert(day_key, message);
    }
}

/// Longest day the form allows for `month`. February is capped at 29 with no
/// leap-year check.
fn max_day(month: u8) -> u8 {
    match month {
        2 => 29,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn check_contact_number(subject: Subject, raw: &str, errors: &mut ErrorMap) {
    let clean: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let key = subject.key(ApplicantField::ContactNumber, MemberField::ContactNumber);

    if clean.chars().count() > 11 {
        errors.insert(
            key,
            subject.message(
                "Contact number must be exactly 11 digits",
                "contact number must be exactly 11 digits",
            ),
        );
    } else if !CONTACT_NUMBER.is_match(&clean) {
        errors.insert(
            key,
            subject.message(
                "Please enter a valid 11-digit Philippine number starting with 09",
                "please enter a valid 11-digit Philippine number starting with 09",
            ),
        );
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn is_amount(value: &str) -> bool {
    value
        .trim()
        .parse::<f64>()
        .is_ok_and(|amount| amount.is_finite() && amount >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{valid_applicant, valid_member};

    fn check(applicant: &Applicant, members: &[FamilyMember]) -> ErrorMap {
        validate(applicant, members, &LocationCatalog::default())
    }

    #[test]
    fn test_valid_record_has_no_errors() {
        let errors = check(&valid_applicant(), &[valid_member()]);
        assert!(errors.is_valid(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn test_empty_applicant_reports_each_required_field_once() {
        let errors = check(&Applicant::default(), &[valid_member()]);
        let keys: Vec<String> = errors.iter().map(|(key, _)| key.to_string()).collect();
        assert_eq!(
            keys,
            vec![
                "lastName",
                "firstName",
                "municipality",
                "barangay",
                "birthMonth",
                "birthDay",
                "birthYear",
                "contactNumber",
                "gender",
                "civilStatus",
                "occupation",
                "monthlySalary",
            ]
        );
        assert!(!errors.is_valid());
        assert_eq!(errors.get(ApplicantField::FirstName), Some("First Name is required"));
    }

    #[test]
    fn test_contact_number_rules() {
        let mut applicant = valid_applicant();

        applicant.contact_number = "0912345678".into();
        assert!(check(&applicant, &[valid_member()]).contains(ApplicantField::ContactNumber));

        applicant.contact_number = "19123456789".into();
        assert!(check(&applicant, &[valid_member()]).contains(ApplicantField::ContactNumber));

        applicant.contact_number = "0912 345 6789".into();
        assert!(check(&applicant, &[valid_member()]).is_valid());

        applicant.contact_number = "091234567890".into();
        let errors = check(&applicant, &[valid_member()]);
        assert_eq!(
            errors.get(ApplicantField::ContactNumber),
            Some("Contact number must be exactly 11 digits")
        );
    }

    #[test]
    fn test_member_contact_number_is_optional_but_checked() {
        let mut member = valid_member();
        assert!(check(&valid_applicant(), &[member.clone()]).is_valid());

        member.contact_number = "12345".into();
        let errors = check(&valid_applicant(), &[member]);
        assert_eq!(
            errors.get(FieldKey::member(0, MemberField::ContactNumber)),
            Some("Family member 1 please enter a valid 11-digit Philippine number starting with 09")
        );
    }

    #[test]
    fn test_birth_day_caps_per_month() {
        let mut applicant = valid_applicant();
        for year in ["1940", "2000", "2024"] {
            applicant.birth = BirthDate::new("02", "30", year);
            let errors = check(&applicant, &[valid_member()]);
            assert_eq!(errors.get(ApplicantField::BirthDay), Some("February has maximum 29 days"));
        }

        applicant.birth = BirthDate::new("02", "29", "2023");
        assert!(check(&applicant, &[valid_member()]).is_valid());

        applicant.birth = BirthDate::new("04", "31", "1990");
        let errors = check(&applicant, &[valid_member()]);
        assert_eq!(errors.get(ApplicantField::BirthDay), Some("This month has maximum 30 days"));

        applicant.birth = BirthDate::new("01", "31", "1990");
        assert!(check(&applicant, &[valid_member()]).is_valid());
    }

    #[test]
    fn test_birth_year_range() {
        let mut applicant = valid_applicant();
        applicant.birth.year = "1939".into();
        assert!(check(&applicant, &[valid_member()]).contains(ApplicantField::BirthYear));
        applicant.birth.year = "2025".into();
        assert!(check(&applicant, &[valid_member()]).contains(ApplicantField::BirthYear));
        applicant.birth.year = "1940".into();
        assert!(check(&applicant, &[valid_member()]).is_valid());
    }

    #[test]
    fn test_partial_birth_date_reports_missing_parts_only() {
        let mut member = valid_member();
        member.birth = BirthDate::new("03", "", "");
        let errors = check(&valid_applicant(), &[member]);
        assert!(!errors.contains(FieldKey::member(0, MemberField::BirthMonth)));
        assert_eq!(
            errors.get(FieldKey::member(0, MemberField::BirthDay)),
            Some("Family member 1 birth day is required")
        );
        assert!(errors.contains(FieldKey::member(0, MemberField::BirthYear)));
    }

    #[test]
    fn test_middle_name_rules() {
        let mut applicant = valid_applicant();

        applicant.middle_name = "S.".into();
        assert_eq!(
            check(&applicant, &[valid_member()]).get(ApplicantField::MiddleName),
            Some("Middle name must be at least 2 letters")
        );

        applicant.middle_name = "DE LA".into();
        assert!(check(&applicant, &[valid_member()]).is_valid());

        applicant.middle_name = "SANTOS2".into();
        assert_eq!(
            check(&applicant, &[valid_member()]).get(ApplicantField::MiddleName),
            Some("Middle name can only contain letters and spaces")
        );

        applicant.middle_name = ".".into();
        assert!(check(&applicant, &[valid_member()]).is_valid());
    }

    #[test]
    fn test_optional_national_id_and_email() {
        let mut applicant = valid_applicant();
        applicant.national_id = "123456789012".into();
        applicant.email = "JUAN@EXAMPLE.COM".into();
        assert!(check(&applicant, &[valid_member()]).is_valid());

        applicant.national_id = "12345678901A".into();
        applicant.email = "juan@example".into();
        let errors = check(&applicant, &[valid_member()]);
        assert!(errors.contains(ApplicantField::NationalId));
        assert_eq!(errors.get(ApplicantField::Email), Some("Please enter a valid email address"));
    }

    #[test]
    fn test_barangay_must_belong_to_municipality() {
        let mut applicant = valid_applicant();
        applicant.municipality = "BASUD/051601000".into();
        let errors = check(&applicant, &[valid_member()]);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(ApplicantField::Barangay));
    }

    #[test]
    fn test_member_birth_day_caps_per_month() {
        let day = FieldKey::member(0, MemberField::BirthDay);
        let mut member = valid_member();

        member.birth = BirthDate::new("02", "30", "2010");
        let errors = check(&valid_applicant(), &[member.clone()]);
        assert_eq!(day.to_string(), "familyMember_0_birthDay");
        assert_eq!(
            errors.get(day),
            Some("Family member 1 birth day is invalid: February has maximum 29 days")
        );

        member.birth = BirthDate::new("04", "31", "2010");
        let errors = check(&valid_applicant(), &[member.clone()]);
        assert_eq!(
            errors.get(day),
            Some("Family member 1 birth day is invalid: this month has maximum 30 days")
        );
        assert_eq!(errors.len(), 1);

        member.birth = BirthDate::new("04", "30", "2010");
        assert!(check(&valid_applicant(), &[member]).is_valid());
    }

    #[test]
    fn test_shifting_errors_after_member_removal() {
        let mut errors = check(
            &valid_applicant(),
            &[FamilyMember::default(), valid_member(), FamilyMember::default()],
        );
        errors.shift_members_after(0);
        assert!(!errors.contains(FieldKey::member(0, MemberField::LastName)));
        assert_eq!(
            errors.get(FieldKey::member(1, MemberField::Relationship)),
            Some("Family member 2 relationship is required")
        );
        assert!(!errors.contains(FieldKey::member(2, MemberField::Relationship)));
    }

    #[test]
    fn test_member_messages_use_one_based_position() {
        let errors = check(&valid_applicant(), &[valid_member(), FamilyMember::default()]);
        assert_eq!(
            errors.get(FieldKey::member(1, MemberField::LastName)),
            Some("Family member 2 last name is required")
        );
        assert_eq!(
            errors.get(FieldKey::member(1, MemberField::Relationship)),
            Some("Family member 2 relationship is required")
        );
        assert!(!errors.contains(FieldKey::member(0, MemberField::LastName)));
    }

    #[test]
    fn test_error_keys_render_like_form_names() {
        assert_eq!(FieldKey::from(ApplicantField::NationalId).to_string(), "psaNationalId");
        assert_eq!(
            FieldKey::member(2, MemberField::CivilStatus).to_string(),
            "familyMember_2_civilStatus"
        );
    }

    #[test]
    fn test_messages_are_in_form_order() {
        let mut applicant = valid_applicant();
        applicant.email = "nope".into();
        applicant.first_name.clear();
        let errors = check(&applicant, &[valid_member()]);
        assert_eq!(
            errors.messages(),
            vec!["First Name is required", "Please enter a valid email address"]
        );
    }
}
