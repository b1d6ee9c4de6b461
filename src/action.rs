//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::components::page::Target;
use crate::model::panel::{DismissEvent, PanelRef};
use crate::model::ui::Section;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for animations/updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Dialogs
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the top dialog
    CloseDialog,

    // ─────────────────────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────────────────────
    /// Scroll the page up one line
    ScrollUp,
    /// Scroll the page down one line
    ScrollDown,
    /// Scroll the page up one screen
    PageUp,
    /// Scroll the page down one screen
    PageDown,
    /// Jump to the top of the page
    ScrollTop,
    /// Jump to the bottom of the page
    ScrollBottom,
    /// Bring a section's heading to the top
    JumpTo(Section),

    // ─────────────────────────────────────────────────────────────────────────
    // Focus & Pointer
    // ─────────────────────────────────────────────────────────────────────────
    /// Focus the next interactive element
    FocusNext,
    /// Focus the previous interactive element
    FocusPrev,
    /// Drop keyboard focus
    Blur,
    /// Activate the focused element
    Activate,
    /// Focus an element directly (mouse click)
    Focus(Target),
    /// Pointer moved to a terminal cell
    PointerMove(u16, u16),

    // ─────────────────────────────────────────────────────────────────────────
    // Panels
    // ─────────────────────────────────────────────────────────────────────────
    /// Open a project's modal by id
    OpenProject(String),
    /// Open a project's screenshot in the lightbox
    OpenScreenshot(String),
    /// Close one panel
    ClosePanel(PanelRef),
    /// Backdrop click or Escape
    Dismiss(DismissEvent),

    // ─────────────────────────────────────────────────────────────────────────
    // Theme & Skills
    // ─────────────────────────────────────────────────────────────────────────
    /// Flip light/dark and persist it
    ToggleTheme,
    /// Set the skills category filter
    SetSkillFilter(String),
    /// Show a skill in the detail panel
    RevealSkill(usize),

    // ─────────────────────────────────────────────────────────────────────────
    // Contact Form
    // ─────────────────────────────────────────────────────────────────────────
    /// Add character to the focused field
    FormInput(char),
    /// Remove last character from the focused field
    FormBackspace,
    /// Submit the contact form
    SubmitForm,
    /// Empty the contact form
    ClearForm,
    /// Copy the contact email to the clipboard
    CopyEmail,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseDialog => write!(f, "CloseDialog"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::PageDown => write!(f, "PageDown"),
            Action::ScrollTop => write!(f, "ScrollTop"),
            Action::ScrollBottom => write!(f, "ScrollBottom"),
            Action::JumpTo(section) => write!(f, "JumpTo({})", section.title()),
            Action::FocusNext => write!(f, "FocusNext"),
            Action::FocusPrev => write!(f, "FocusPrev"),
            Action::Blur => write!(f, "Blur"),
            Action::Activate => write!(f, "Activate"),
            Action::Focus(target) => write!(f, "Focus({:?})", target),
            Action::PointerMove(col, row) => write!(f, "PointerMove({}, {})", col, row),
            Action::OpenProject(id) => write!(f, "OpenProject({})", id),
            Action::OpenScreenshot(id) => write!(f, "OpenScreenshot({})", id),
            Action::ClosePanel(panel) => write!(f, "ClosePanel({})", panel),
            Action::Dismiss(DismissEvent::Escape) => write!(f, "Dismiss(Escape)"),
            Action::Dismiss(DismissEvent::Backdrop(panel)) => {
                write!(f, "Dismiss(Backdrop {})", panel)
            }
            Action::ToggleTheme => write!(f, "ToggleTheme"),
            Action::SetSkillFilter(tag) => write!(f, "SetSkillFilter({})", tag),
            Action::RevealSkill(index) => write!(f, "RevealSkill({})", index),
            Action::FormInput(c) => write!(f, "FormInput('{}')", c),
            Action::FormBackspace => write!(f, "FormBackspace"),
            Action::SubmitForm => write!(f, "SubmitForm"),
            Action::ClearForm => write!(f, "ClearForm"),
            Action::CopyEmail => write!(f, "CopyEmail"),
        }
    }
}
