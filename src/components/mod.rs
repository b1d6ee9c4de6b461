//! UI Components
//!
//! The page itself (`home`, laid out by `page`), the overlay panels that
//! float above it (`project_modal`, `lightbox`, `skill_detail`, sharing
//! `overlay`) and the app-level dialogs.

pub mod alert_dialog;
pub mod help_dialog;
pub mod home;
pub mod layout;
pub mod lightbox;
pub mod overlay;
pub mod page;
pub mod project_modal;
pub mod quit_dialog;
pub mod skill_detail;

pub use alert_dialog::AlertDialog;
pub use help_dialog::HelpDialog;
pub use home::{draw_home_screen, target_action, HomeComponent};
pub use layout::centered_popup;
pub use lightbox::Lightbox;
pub use overlay::PanelRegion;
pub use project_modal::ProjectModal;
pub use quit_dialog::QuitDialog;
pub use skill_detail::SkillDetailPanel;
