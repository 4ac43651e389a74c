//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod platform;
pub use platform::{make_store, make_submitter, PlatformStore, PlatformSubmitter, PlatformTimer};

pub mod views;

pub const INTAKE_CSS: Asset = asset!("/assets/intake.css");

mod context;
pub use context::{use_intake, IntakeContext, IntakeProvider, Notice, Workflow};

mod fields;
pub use fields::{SelectField, TextField};

mod applicant_section;
pub use applicant_section::ApplicantSection;

mod family_members;
pub use family_members::FamilyMembersSection;

mod debug_tools;
pub use debug_tools::DebugTools;
