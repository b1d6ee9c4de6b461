//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! App is intentionally lean - it coordinates between components and the
//! view state controller but does not contain page logic itself.

use crate::action::Action;
use crate::component::Component;
use crate::components::page::Target;
use crate::components::{
    draw_home_screen, target_action, AlertDialog, HelpDialog, HomeComponent, Lightbox,
    PanelRegion, ProjectModal, QuitDialog, SkillDetailPanel,
};
use crate::controller::{FieldEdit, ViewStateController};
use crate::model::modal::{Dialog, DialogStack};
use crate::model::panel::{DismissEvent, PanelRef};
use crate::services::{Clipboard, Preferences};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Page state
    pub controller: ViewStateController<Preferences>,

    /// App-level dialogs over everything else
    pub dialogs: DialogStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    clipboard: Box<dyn Clipboard>,

    /// Where each visible panel was drawn, bottom first
    regions: Vec<PanelRegion>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub home: HomeComponent,
    pub project_modal: ProjectModal,
    pub lightbox: Lightbox,
    pub skill_detail: SkillDetailPanel,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
    pub alert_dialog: AlertDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App around a ready controller
    pub fn new(controller: ViewStateController<Preferences>, clipboard: Box<dyn Clipboard>) -> App {
        App {
            controller,
            dialogs: DialogStack::new(),
            should_quit: false,
            clipboard,
            regions: Vec::new(),
            home: HomeComponent::new(),
            project_modal: ProjectModal::default(),
            lightbox: Lightbox,
            skill_detail: SkillDetailPanel,
            quit_dialog: QuitDialog::default(),
            help_dialog: HelpDialog::default(),
            alert_dialog: AlertDialog,
        }
    }

    /// Stop background animation before the terminal is released
    pub fn shutdown(&mut self) {
        self.controller.stop_animations();
        tracing::info!("Shutting down");
    }

    /// Show any alert the controller raised
    fn drain_alerts(&mut self) {
        if let Some(message) = self.controller.take_alert() {
            self.dialogs.push(Dialog::Alert(message));
        }
    }

    /// Scroll actions do nothing while the page is locked behind the lightbox
    fn scroll(&mut self, action: Action) -> Result<()> {
        if self.controller.scroll_locked() {
            tracing::debug!("Ignoring {} while scroll is locked", action);
            return Ok(());
        }
        self.home.update(action)?;
        Ok(())
    }

    fn edit_focused_field(&mut self, edit: FieldEdit) {
        if let Some(Target::Field(field)) = self.home.focus {
            self.controller.edit_field(field, edit);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        tracing::info!(
            "Showing portfolio of {} ({} projects, {} skills)",
            self.controller.portfolio().owner,
            self.controller.portfolio().projects.len(),
            self.controller.portfolio().skills.len()
        );
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        if let Some(dialog) = self.dialogs.top().cloned() {
            return self.handle_dialog_key_event(&dialog, key);
        }

        if key.code == KeyCode::Esc && self.controller.is_visible(&PanelRef::Lightbox) {
            return Ok(Some(Action::Dismiss(DismissEvent::Escape)));
        }

        if !self.home.editing_field() {
            if let Some(panel) = self.controller.panels().top().cloned() {
                if let Some(action) = self.handle_panel_key_event(&panel, key)? {
                    return Ok(Some(action));
                }
            }
        }

        self.home.handle_key_event(key)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if !self.dialogs.is_empty() {
            return Ok(None);
        }

        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if let Some(region) = self.regions.last() {
                return Ok(region.click(mouse.column, mouse.row));
            }
        }

        self.home.handle_mouse_event(mouse)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let mut follow_up = None;

        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                self.controller.tick();
            }
            Action::Resize(w, h) => {
                self.home.resize(Rect::new(0, 0, w, h));
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Dialogs
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.dialogs.push(Dialog::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.update(Action::OpenHelp)?;
                self.dialogs.push(Dialog::Help);
            }
            Action::CloseDialog => {
                self.dialogs.pop();
            }

            // ─────────────────────────────────────────────────────────────────
            // Scrolling
            // ─────────────────────────────────────────────────────────────────
            Action::ScrollUp
            | Action::ScrollDown
            | Action::PageUp
            | Action::PageDown
            | Action::ScrollTop
            | Action::ScrollBottom
            | Action::JumpTo(_) => {
                self.scroll(action)?;
            }

            // ─────────────────────────────────────────────────────────────────
            // Focus & Pointer
            // ─────────────────────────────────────────────────────────────────
            Action::FocusNext | Action::FocusPrev | Action::Blur | Action::PointerMove(..) => {
                self.home.update(action)?;
            }
            Action::Focus(target) => {
                follow_up = target_action(&target, self.controller.portfolio());
                self.home.set_focus(Some(target));
            }
            Action::Activate => {
                follow_up = self
                    .home
                    .focus
                    .as_ref()
                    .and_then(|t| target_action(t, self.controller.portfolio()));
            }

            // ─────────────────────────────────────────────────────────────────
            // Panels
            // ─────────────────────────────────────────────────────────────────
            Action::OpenProject(id) => {
                self.controller.open_panel(&PanelRef::Modal(id));
            }
            Action::OpenScreenshot(id) => {
                self.controller.open_project_screenshot(&id);
            }
            Action::ClosePanel(panel) => {
                self.controller.close_panel(&panel);
            }
            Action::Dismiss(event) => {
                self.controller.close_via_backdrop_or_escape(event);
            }

            // ─────────────────────────────────────────────────────────────────
            // Theme & Skills
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleTheme => {
                self.controller.toggle_theme();
            }
            Action::SetSkillFilter(tag) => {
                self.controller.set_filter(&tag);
            }
            Action::RevealSkill(index) => {
                self.controller.reveal_skill_detail(index);
            }

            // ─────────────────────────────────────────────────────────────────
            // Contact Form
            // ─────────────────────────────────────────────────────────────────
            Action::FormInput(c) => self.edit_focused_field(FieldEdit::Insert(c)),
            Action::FormBackspace => self.edit_focused_field(FieldEdit::Backspace),
            Action::SubmitForm => {
                let state = self.controller.submit_contact_form();
                tracing::debug!("Contact form is {}", state);
            }
            Action::ClearForm => {
                self.controller.clear_contact_form();
            }
            Action::CopyEmail => {
                self.controller.copy_contact_email(self.clipboard.as_mut());
            }
        }

        self.drain_alerts();
        self.home.sync(&mut self.controller);
        Ok(follow_up)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        draw_home_screen(frame, area, &mut self.home, &self.controller)?;
        self.draw_panels(frame, area);

        if let Some(dialog) = self.dialogs.top().cloned() {
            self.draw_dialog(frame, area, &dialog)?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_dialog_key_event(&mut self, dialog: &Dialog, key: KeyEvent) -> Result<Option<Action>> {
        match dialog {
            Dialog::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Dialog::Help => self.help_dialog.handle_key_event(key),
            Dialog::Alert(_) => self.alert_dialog.handle_key_event(key),
        }
    }

    fn handle_panel_key_event(&mut self, panel: &PanelRef, key: KeyEvent) -> Result<Option<Action>> {
        match panel {
            PanelRef::Modal(id) => {
                self.project_modal.set_project(id);
                self.project_modal.handle_key_event(key)
            }
            PanelRef::Lightbox => self.lightbox.handle_key_event(key),
            PanelRef::SkillDetail => self.skill_detail.handle_key_event(key),
        }
    }

    /// Draw visible panels bottom first, recording where each landed
    fn draw_panels(&mut self, frame: &mut Frame, area: Rect) {
        let palette = self.controller.theme().palette();
        self.regions.clear();

        let panels: Vec<PanelRef> = self.controller.panels().iter().cloned().collect();
        for (layer, panel) in panels.iter().enumerate() {
            let region = match panel {
                PanelRef::Modal(id) => self.controller.portfolio().project(id).map(|project| {
                    self.project_modal
                        .draw_with_project(frame, area, project, palette, layer)
                }),
                PanelRef::Lightbox => self
                    .controller
                    .lightbox_media()
                    .map(|media| self.lightbox.draw_with_media(frame, area, media, palette)),
                PanelRef::SkillDetail => Some(self.skill_detail.draw_with_detail(
                    frame,
                    area,
                    self.controller.skill_detail(),
                    palette,
                    layer,
                )),
            };
            if let Some(region) = region {
                self.regions.push(region);
            }
        }
    }

    fn draw_dialog(&mut self, frame: &mut Frame, area: Rect, dialog: &Dialog) -> Result<()> {
        let palette = self.controller.theme().palette();
        match dialog {
            Dialog::QuitConfirm => {
                self.quit_dialog.set_palette(palette);
                self.quit_dialog.draw(frame, area)?;
            }
            Dialog::Help => {
                self.help_dialog.set_palette(palette);
                self.help_dialog.draw(frame, area)?;
            }
            Dialog::Alert(message) => {
                self.alert_dialog.draw_with_message(frame, area, message, palette);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::form::{FormField, FormSubmissionState};
    use crate::model::theme::ThemePreference;
    use crate::model::ui::Section;
    use crate::services::content::sample_portfolio;
    use crate::services::delivery::DeliveryRunner;
    use crate::services::preferences::MemoryStore;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    struct NoClipboard;

    impl Clipboard for NoClipboard {
        fn copy(&mut self, _text: &str) -> Result<(), String> {
            Err("no copy helper found".to_string())
        }
    }

    fn app() -> App {
        let controller = ViewStateController::new(
            sample_portfolio().unwrap(),
            Preferences::Memory(MemoryStore::new()),
            DeliveryRunner::simulated(Duration::ZERO),
        );
        let mut app = App::new(controller, Box::new(NoClipboard));
        app.update(Action::Resize(80, 24)).unwrap();
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        let mut action = app
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
        while let Some(a) = action {
            action = app.update(a).unwrap();
        }
    }

    fn click(app: &mut App, column: u16, row: u16) {
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        let mut action = app.handle_mouse_event(mouse).unwrap();
        while let Some(a) = action {
            action = app.update(a).unwrap();
        }
    }

    fn render(app: &mut App) {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| app.draw(frame, frame.area()).unwrap())
            .unwrap();
    }

    #[test]
    fn test_enter_on_focused_card_opens_modal() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);

        let id = app.controller.portfolio().projects[0].id.clone();
        assert!(app.controller.is_visible(&PanelRef::Modal(id)));
    }

    #[test]
    fn test_escape_closes_lightbox_then_blurs() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('o'));
        assert!(app.controller.is_visible(&PanelRef::Lightbox));
        assert!(app.controller.scroll_locked());

        press(&mut app, KeyCode::Esc);
        assert!(!app.controller.is_visible(&PanelRef::Lightbox));
        assert!(!app.controller.panels().is_empty());

        // The modal stays; Escape only drops focus now
        press(&mut app, KeyCode::Esc);
        assert!(!app.controller.panels().is_empty());
        assert!(app.home.focus.is_none());

        press(&mut app, KeyCode::Char('x'));
        assert!(app.controller.panels().is_empty());
    }

    #[test]
    fn test_scroll_ignored_while_lightbox_open() {
        let mut app = app();
        let id = app.controller.portfolio().projects[0].id.clone();
        app.controller.open_project_screenshot(&id);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.home.scroll, 0);

        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.home.scroll, 1);
    }

    #[test]
    fn test_click_outside_panel_is_backdrop() {
        let mut app = app();
        let id = app.controller.portfolio().projects[0].id.clone();
        app.update(Action::OpenProject(id.clone())).unwrap();
        render(&mut app);
        assert!(app.controller.is_visible(&PanelRef::Modal(id.clone())));

        click(&mut app, 0, 23);
        assert!(!app.controller.is_visible(&PanelRef::Modal(id)));
    }

    #[test]
    fn test_click_outside_skill_detail_keeps_it_open() {
        let mut app = app();
        app.update(Action::RevealSkill(0)).unwrap();
        render(&mut app);

        click(&mut app, 0, 23);
        assert!(app.controller.is_visible(&PanelRef::SkillDetail));
    }

    #[test]
    fn test_click_close_control() {
        let mut app = app();
        app.update(Action::RevealSkill(1)).unwrap();
        render(&mut app);

        let close = app.regions.last().unwrap().close;
        click(&mut app, close.x + 1, close.y);
        assert!(app.controller.panels().is_empty());
    }

    #[test]
    fn test_typing_into_form_and_sending() {
        let mut app = app();
        app.update(Action::Focus(Target::Field(FormField::Name))).unwrap();
        for c in "Ada".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        app.update(Action::Focus(Target::Field(FormField::Email))).unwrap();
        for c in "ada@example.com".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        app.update(Action::Focus(Target::Field(FormField::Message))).unwrap();
        for c in "thanks".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.controller.form().name, "Ada");
        // Theme key went into the field, not the theme
        assert_eq!(app.controller.theme(), ThemePreference::Dark);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller.form().state, FormSubmissionState::Sending);

        for _ in 0..200 {
            app.update(Action::Tick).unwrap();
            if app.controller.form().state != FormSubmissionState::Sending {
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(app.controller.form().state, FormSubmissionState::Sent);
    }

    #[test]
    fn test_copy_failure_shows_alert() {
        let mut app = app();
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(
            app.dialogs.top(),
            Some(&Dialog::Alert("Could not copy".to_string()))
        );

        press(&mut app, KeyCode::Enter);
        assert!(app.dialogs.is_empty());
    }

    #[test]
    fn test_theme_toggle_redraws_light() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.controller.theme(), ThemePreference::Light);
        render(&mut app);
    }

    #[test]
    fn test_jump_to_section() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        assert!(app.home.scroll > 0);
        assert!(app.controller.is_revealed(Section::Contact));
    }

    #[test]
    fn test_quit_flow() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.dialogs.top(), Some(&Dialog::QuitConfirm));
        press(&mut app, KeyCode::Char('n'));
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_full_render_with_everything_open() {
        let mut app = app();
        let id = app.controller.portfolio().projects[0].id.clone();
        app.update(Action::OpenProject(id.clone())).unwrap();
        app.update(Action::RevealSkill(0)).unwrap();
        app.update(Action::OpenScreenshot(id)).unwrap();
        app.update(Action::OpenHelp).unwrap();
        render(&mut app);
        assert_eq!(app.regions.len(), 3);
        assert_eq!(app.regions.last().map(|r| r.panel.clone()), Some(PanelRef::Lightbox));
    }
}
