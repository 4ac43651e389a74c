mod modal_overlay;
pub use modal_overlay::{ModalOverlay, ModalSize};

mod dialogs;
pub use dialogs::{ConfirmationModal, ErrorModal, ProgressOverlay};

mod notices;
pub use notices::{ApplicationEnded, DataPrivacyModal, MaintenanceNotice, SuccessPanel};

mod review_modal;
pub use review_modal::ReviewModal;

mod intake_page;
pub use intake_page::IntakePage;
