//! Records shared by the unit tests.

use crate::models::{Applicant, BirthDate, CivilStatus, FamilyMember, Gender, Relationship};

pub(crate) fn valid_applicant() -> Applicant {
    Applicant {
        last_name: "DELA CRUZ".into(),
        first_name: "JUAN".into(),
        middle_name: "SANTOS".into(),
        municipality: "DAET (Capital)/051603000".into(),
        barangay: "BAGASBAS/051603003".into(),
        street: "PUROK 3".into(),
        birth: BirthDate::new("01", "31", "1985"),
        contact_number: "09123456789".into(),
        gender: Some(Gender::Male),
        civil_status: Some(CivilStatus::Married),
        occupation: "FISHERMAN".into(),
        monthly_salary: "8000".into(),
        ..Applicant::default()
    }
}

pub(crate) fn valid_member() -> FamilyMember {
    FamilyMember {
        last_name: "DELA CRUZ".into(),
        first_name: "MARIA".into(),
        gender: Some(Gender::Female),
        civil_status: Some(CivilStatus::Single),
        birth: BirthDate::new("06", "15", "2010"),
        relationship: Some(Relationship::Child),
        ..FamilyMember::default()
    }
}
