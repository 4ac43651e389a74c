//! # Submission snapshot and wire payload
//!
//! [`SubmissionRecord`] is the frozen copy of the form taken at final
//! confirmation. It feeds two consumers:
//!
//! - the write endpoint, which wants a flat list of form-urlencoded fields:
//!   every applicant field by its sheet column name, then `familyMembers`
//!   holding a JSON array of [`MemberRow`]s, then an ISO-8601 `timestamp`
//! - the recovery log, which stores the same rows as a
//!   [`RecoveryEntry`](crate::recovery::RecoveryEntry)
//!
//! Rows flatten every typed choice to its wire string, and an unselected
//! choice becomes `""`, which is what the sheet columns expect.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Applicant, BirthDate, FamilyMember, PROVINCE};

/// Applicant as one spreadsheet row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantRow {
    pub province: String,
    pub municipality: String,
    pub barangay: String,
    pub street: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub extension_name: String,
    pub gender: String,
    pub civil_status: String,
    pub birth_month: String,
    pub birth_day: String,
    pub birth_year: String,
    pub contact_number: String,
    pub occupation: String,
    pub monthly_salary: String,
    pub psa_national_id: String,
    pub email: String,
}

impl ApplicantRow {
    /// Column name/value pairs in sheet order.
    pub fn fields(&self) -> [(&'static str, &str); 18] {
        [
            ("province", self.province.as_str()),
            ("municipality", self.municipality.as_str()),
            ("barangay", self.barangay.as_str()),
            ("street", self.street.as_str()),
            ("lastName", self.last_name.as_str()),
            ("firstName", self.first_name.as_str()),
            ("middleName", self.middle_name.as_str()),
            ("extensionName", self.extension_name.as_str()),
            ("gender", self.gender.as_str()),
            ("civilStatus", self.civil_status.as_str()),
            ("birthMonth", self.birth_month.as_str()),
            ("birthDay", self.birth_day.as_str()),
            ("birthYear", self.birth_year.as_str()),
            ("contactNumber", self.contact_number.as_str()),
            ("occupation", self.occupation.as_str()),
            ("monthlySalary", self.monthly_salary.as_str()),
            ("psaNationalId", self.psa_national_id.as_str()),
            ("email", self.email.as_str()),
        ]
    }
}

impl From<&Applicant> for ApplicantRow {
    fn from(applicant: &Applicant) -> Self {
        Self {
            province: applicant.province.clone(),
            municipality: applicant.municipality.clone(),
            barangay: applicant.barangay.clone(),
            street: applicant.street.clone(),
            last_name: applicant.last_name.clone(),
            first_name: applicant.first_name.clone(),
            middle_name: applicant.middle_name.clone(),
            extension_name: wire(applicant.suffix.map(|s| s.as_str())),
            gender: wire(applicant.gender.map(|g| g.as_str())),
            civil_status: wire(applicant.civil_status.map(|c| c.as_str())),
            birth_month: applicant.birth.month.clone(),
            birth_day: applicant.birth.day.clone(),
            birth_year: applicant.birth.year.clone(),
            contact_number: applicant.contact_number.clone(),
            occupation: applicant.occupation.clone(),
            monthly_salary: applicant.monthly_salary.clone(),
            psa_national_id: applicant.national_id.clone(),
            email: applicant.email.clone(),
        }
    }
}

/// Family member as it appears inside the `familyMembers` JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRow {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub extension_name: String,
    pub gender: String,
    pub civil_status: String,
    pub birth_month: String,
    pub birth_day: String,
    pub birth_year: String,
    pub contact_number: String,
    pub occupation: String,
    pub salary: String,
    pub relationship: String,
}

impl From<&FamilyMember> for MemberRow {
    fn from(member: &FamilyMember) -> Self {
        Self {
            last_name: member.last_name.clone(),
            first_name: member.first_name.clone(),
            middle_name: member.middle_name.clone(),
            extension_name: wire(member.suffix.map(|s| s.as_str())),
            gender: wire(member.gender.map(|g| g.as_str())),
            civil_status: wire(member.civil_status.map(|c| c.as_str())),
            birth_month: member.birth.month.clone(),
            birth_day: member.birth.day.clone(),
            birth_year: member.birth.year.clone(),
            contact_number: member.contact_number.clone(),
            occupation: member.occupation.clone(),
            salary: member.salary.clone(),
            relationship: wire(member.relationship.map(|r| r.as_str())),
        }
    }
}

/// Snapshot of the record at the moment of final confirmation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    applicant: Applicant,
    members: Vec<FamilyMember>,
}

impl SubmissionRecord {
    pub fn capture(applicant: &Applicant, members: &[FamilyMember]) -> Self {
        Self {
            applicant: applicant.clone(),
            members: members.to_vec(),
        }
    }

    /// Fixed record posted by the debug "test connection" action.
    pub fn connection_test() -> Self {
        let applicant = Applicant {
            province: PROVINCE.to_string(),
            municipality: "DAET (Capital)/051603000".to_string(),
            barangay: "BAGASBAS/051603003".to_string(),
            street: "TEST STREET".to_string(),
            last_name: "TESTLAST".to_string(),
            first_name: "TESTFIRST".to_string(),
            middle_name: "TESTMIDDLE".to_string(),
            birth: BirthDate::new("01", "01", "2000"),
            contact_number: "09123456789".to_string(),
            national_id: "123456789012".to_string(),
            email: "TEST@EXAMPLE.COM".to_string(),
            ..Applicant::default()
        };
        Self {
            applicant,
            members: Vec::new(),
        }
    }

    pub fn applicant(&self) -> &Applicant {
        &self.applicant
    }

    pub fn members(&self) -> &[FamilyMember] {
        &self.members
    }

    pub fn applicant_row(&self) -> ApplicantRow {
        ApplicantRow::from(&self.applicant)
    }

    pub fn member_rows(&self) -> Vec<MemberRow> {
        self.members.iter().map(MemberRow::from).collect()
    }

    /// Flat form fields for the write endpoint.
    pub fn form_fields(&self, now: DateTime<Utc>) -> Result<Vec<(String, String)>, serde_json::Error> {
        let applicant = self.applicant_row();
        let family_members = serde_json::to_string(&self.member_rows())?;

        let mut fields: Vec<(String, String)> = applicant
            .fields()
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        fields.push(("familyMembers".to_string(), family_members));
        fields.push(("timestamp".to_string(), iso_timestamp(now)));
        Ok(fields)
    }
}

/// `2024-01-31T22:00:00.000Z`, the shape `Date.toISOString()` produces.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn wire(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}
