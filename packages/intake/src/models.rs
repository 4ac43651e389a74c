//! # Applicant and family member records
//!
//! The in-memory shape of one intake session: a single [`Applicant`] plus one to
//! three [`FamilyMember`]s. Free-text fields are plain `String`s holding exactly
//! what the user typed (after edit-time normalisation, see [`crate::form`]); the
//! closed choice lists are typed enums wrapped in `Option`, where `None` means
//! "nothing selected yet".
//!
//! Birth dates are kept as the raw selector values (`"02"`, `"29"`, `"1990"`)
//! because the validation engine has to report on partially filled or
//! out-of-range dates rather than reject them at the type level.
//!
//! ## Choice lists
//!
//! | Enum | Wire values |
//! |------|-------------|
//! | [`Suffix`] | `Jr.`, `Sr.`, `II`, `III`, `IV`, `V`, `VI` |
//! | [`Gender`] | `MALE`, `FEMALE` |
//! | [`CivilStatus`] | `SINGLE`, `MARRIED`, `SEPARATED`, `WIDOW/WIDOWER`, `COMMON-LAW` |
//! | [`Relationship`] | `SPOUSE`, `CHILD`, `PARENT`, `SIBLING`, `GRANDPARENT`, `GRANDCHILD`, `RELATIVE`, `OTHER` |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Province every applicant belongs to. Not editable.
pub const PROVINCE: &str = "CAMARINES NORTE/051600000";

/// Lower bound on the number of family members in a submission.
pub const MIN_FAMILY_MEMBERS: usize = 1;

/// Upper bound on the number of family members in a submission.
pub const MAX_FAMILY_MEMBERS: usize = 3;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returned by `FromStr` when a value is not one of the choices.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown choice: {0:?}")]
pub struct UnknownChoice(pub String);

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $wire:literal, $label:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every choice, in the order the form lists them.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Value sent to the spreadsheet.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            /// Text shown in the select box.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownChoice;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(UnknownChoice(other.to_string())),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

choice_enum! {
    /// Name extension.
    pub enum Suffix {
        Jr => "Jr.", "JR.";
        Sr => "Sr.", "SR.";
        Second => "II", "II";
        Third => "III", "III";
        Fourth => "IV", "IV";
        Fifth => "V", "V";
        Sixth => "VI", "VI";
    }
}

choice_enum! {
    pub enum Gender {
        Male => "MALE", "MALE";
        Female => "FEMALE", "FEMALE";
    }
}

choice_enum! {
    pub enum CivilStatus {
        Single => "SINGLE", "SINGLE";
        Married => "MARRIED", "MARRIED";
        Separated => "SEPARATED", "SEPARATED";
        Widowed => "WIDOW/WIDOWER", "WIDOW/WIDOWER";
        CommonLaw => "COMMON-LAW", "COMMON-LAW";
    }
}

choice_enum! {
    /// How a family member is related to the applicant.
    pub enum Relationship {
        Spouse => "SPOUSE", "SPOUSE";
        Child => "CHILD", "CHILD";
        Parent => "PARENT", "PARENT";
        Sibling => "SIBLING", "SIBLING";
        Grandparent => "GRANDPARENT", "GRANDPARENT";
        Grandchild => "GRANDCHILD", "GRANDCHILD";
        Relative => "RELATIVE", "RELATIVE";
        Other => "OTHER", "OTHER";
    }
}

/// Parse a select box value, treating blank and unknown values as "not selected".
pub fn parse_choice<T: FromStr>(value: &str) -> Option<T> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    value.parse().ok()
}

/// Birth date as three independent selector values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDate {
    /// Two-digit month, `"01"`..`"12"`.
    pub month: String,
    /// Two-digit day, `"01"`..`"31"`.
    pub day: String,
    /// Four-digit year.
    pub year: String,
}

impl BirthDate {
    pub fn new(month: &str, day: &str, year: &str) -> Self {
        Self {
            month: month.to_string(),
            day: day.to_string(),
            year: year.to_string(),
        }
    }

    /// "January 5, 1990", or "Not provided" unless all three parts parse.
    pub fn display(&self) -> String {
        let month = self.month.trim().parse::<usize>().ok();
        let day = self.day.trim().parse::<u32>().ok();
        let year = self.year.trim();
        match (month, day) {
            (Some(m @ 1..=12), Some(d)) if !year.is_empty() => {
                format!("{} {}, {}", MONTH_NAMES[m - 1], d, year)
            }
            _ => "Not provided".to_string(),
        }
    }
}

/// The primary individual completing the form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub suffix: Option<Suffix>,
    pub street: String,
    /// `NAME/PSGC` value from the location catalog.
    pub municipality: String,
    /// `NAME/PSGC` value, constrained to the selected municipality.
    pub barangay: String,
    pub province: String,
    pub birth: BirthDate,
    pub contact_number: String,
    /// PSA national ID number, optional.
    pub national_id: String,
    pub gender: Option<Gender>,
    pub civil_status: Option<CivilStatus>,
    pub occupation: String,
    pub monthly_salary: String,
    pub email: String,
}

impl Default for Applicant {
    fn default() -> Self {
        Self {
            last_name: String::new(),
            first_name: String::new(),
            middle_name: String::new(),
            suffix: None,
            street: String::new(),
            municipality: String::new(),
            barangay: String::new(),
            province: PROVINCE.to_string(),
            birth: BirthDate::default(),
            contact_number: String::new(),
            national_id: String::new(),
            gender: None,
            civil_status: None,
            occupation: String::new(),
            monthly_salary: String::new(),
            email: String::new(),
        }
    }
}

impl Applicant {
    /// Last, first, middle and suffix joined with spaces, upper-cased.
    pub fn full_name(&self) -> String {
        full_name(
            &self.last_name,
            &self.first_name,
            &self.middle_name,
            self.suffix,
        )
    }
}

/// A dependent or relative attached to the applicant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub suffix: Option<Suffix>,
    pub gender: Option<Gender>,
    pub civil_status: Option<CivilStatus>,
    pub birth: BirthDate,
    pub occupation: String,
    pub salary: String,
    pub contact_number: String,
    pub relationship: Option<Relationship>,
}

impl FamilyMember {
    pub fn full_name(&self) -> String {
        full_name(
            &self.last_name,
            &self.first_name,
            &self.middle_name,
            self.suffix,
        )
    }
}

fn full_name(last: &str, first: &str, middle: &str, suffix: Option<Suffix>) -> String {
    [last, first, middle, suffix.map(Suffix::as_str).unwrap_or("")]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}
