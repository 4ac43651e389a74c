pub mod config;
pub mod form;
pub mod locations;
pub mod logging;
pub mod models;
pub mod payload;
pub mod recovery;
pub mod submit;
pub mod transport;
pub mod validation;
pub mod workflow;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web_storage::WebStorage;

#[cfg(test)]
mod fixtures;

pub use config::{IntakeConfig, LogLevel};
pub use form::{IntakeForm, MemberLimitError};
pub use locations::LocationCatalog;
pub use logging::{FormLogger, NoopLogger, TracingLogger};
pub use models::{Applicant, CivilStatus, FamilyMember, Gender, Relationship, Suffix};
pub use payload::SubmissionRecord;
pub use recovery::{RecoveryEntry, RecoveryLog, SlotStore, StoreError};
pub use submit::{classify_failure, FailureKind, SubmissionFailure, Submitter};
pub use transport::{SheetsTransport, Timer, TransportError};
pub use validation::{ApplicantField, ErrorMap, FieldKey, MemberField};
pub use workflow::{Completion, SubmissionWorkflow, WorkflowError, WorkflowState};
