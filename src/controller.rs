//! View state controller
//!
//! Single owner of everything the page toggles: overlay panels, the theme,
//! the skills filter and detail panel, skill fills, section reveals and the
//! contact form. Components read from it when drawing; `App` calls its
//! handler methods in response to Actions, so every input path (key, click,
//! backdrop, Escape) ends up in the same place.

use crate::model::content::Portfolio;
use crate::model::form::{
    ContactForm, FormField, FormStatus, FormSubmissionState, StatusTone, Verdict,
    STATUS_COPIED, STATUS_INCOMPLETE, STATUS_SENDING, STATUS_SENT, STATUS_SPAM,
};
use crate::model::motion::BlobLoop;
use crate::model::panel::{DismissEvent, MediaRef, PanelRef, PanelSet};
use crate::model::reveal::OneShotObserver;
use crate::model::skills::{SkillDetail, SkillFill, SkillFilterState, FILTER_ALL};
use crate::model::theme::{ThemePreference, THEME_KEY};
use crate::model::ui::Section;
use crate::services::clipboard::Clipboard;
use crate::services::delivery::{DeliveryOutcome, DeliveryRunner};
use crate::services::preferences::PreferenceStore;
use chrono::{DateTime, Local};
use std::collections::HashSet;

/// Visible fraction of a skill row before its fill animates
const FILL_THRESHOLD: f32 = 0.2;
/// Visible fraction of a section before it is revealed
const REVEAL_THRESHOLD: f32 = 0.12;
/// Blobs drawn behind the header
const BLOB_COUNT: usize = 3;

/// A single edit to a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEdit {
    Insert(char),
    Backspace,
}

pub struct ViewStateController<S: PreferenceStore> {
    store: S,
    portfolio: Portfolio,

    theme: ThemePreference,

    panels: PanelSet,
    scroll_locked: bool,
    lightbox_media: Option<MediaRef>,

    skill_filter: SkillFilterState,
    skill_detail: SkillDetail,
    skill_fills: Vec<SkillFill>,
    fill_observer: OneShotObserver<usize>,

    section_observer: OneShotObserver<Section>,
    revealed: HashSet<Section>,

    form: ContactForm,
    delivery: DeliveryRunner,
    last_sent_at: Option<DateTime<Local>>,

    alert: Option<String>,
    blobs: BlobLoop,
}

impl<S: PreferenceStore> ViewStateController<S> {
    pub fn new(portfolio: Portfolio, store: S, delivery: DeliveryRunner) -> Self {
        let skill_filter = SkillFilterState::new(&portfolio.skills);
        let skill_fills = vec![SkillFill::default(); portfolio.skills.len()];

        let mut fill_observer = OneShotObserver::new(FILL_THRESHOLD);
        for index in 0..portfolio.skills.len() {
            fill_observer.observe(index);
        }
        let mut section_observer = OneShotObserver::new(REVEAL_THRESHOLD);
        for section in Section::all() {
            section_observer.observe(section);
        }

        let mut controller = Self {
            store,
            portfolio,
            theme: ThemePreference::default(),
            panels: PanelSet::new(),
            scroll_locked: false,
            lightbox_media: None,
            skill_filter,
            skill_detail: SkillDetail::default(),
            skill_fills,
            fill_observer,
            section_observer,
            revealed: HashSet::new(),
            form: ContactForm::new(),
            delivery,
            last_sent_at: None,
            alert: None,
            blobs: BlobLoop::new(BLOB_COUNT),
        };
        controller.set_filter(FILTER_ALL);
        controller
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Read access
    // ─────────────────────────────────────────────────────────────────────────

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    pub fn panels(&self) -> &PanelSet {
        &self.panels
    }

    pub fn is_visible(&self, panel: &PanelRef) -> bool {
        self.panels.is_visible(panel)
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn lightbox_media(&self) -> Option<&MediaRef> {
        self.lightbox_media.as_ref()
    }

    pub fn skill_filter(&self) -> &SkillFilterState {
        &self.skill_filter
    }

    pub fn skill_detail(&self) -> &SkillDetail {
        &self.skill_detail
    }

    pub fn skill_fill(&self, index: usize) -> SkillFill {
        self.skill_fills.get(index).copied().unwrap_or_default()
    }

    /// Indices of skill entries passing the active filter
    pub fn visible_skills(&self) -> Vec<usize> {
        self.skill_filter.visible_indices(&self.portfolio.skills)
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed.contains(&section)
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn last_sent_at(&self) -> Option<DateTime<Local>> {
        self.last_sent_at
    }

    pub fn blobs(&self) -> &BlobLoop {
        &self.blobs
    }

    /// Take a pending user-facing alert, if any
    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Panels
    // ─────────────────────────────────────────────────────────────────────────

    /// Whether the panel's content exists on this page
    fn panel_present(&self, panel: &PanelRef) -> bool {
        match panel {
            PanelRef::Modal(id) => self.portfolio.project(id).is_some(),
            PanelRef::Lightbox => self.lightbox_media.is_some(),
            PanelRef::SkillDetail => true,
        }
    }

    /// Make a panel visible. Returns false when nothing changed.
    pub fn open_panel(&mut self, panel: &PanelRef) -> bool {
        if !self.panel_present(panel) {
            tracing::debug!("Ignoring open of absent panel {}", panel);
            return false;
        }
        if !self.panels.show(panel.clone()) {
            return false;
        }
        if *panel == PanelRef::Lightbox {
            self.scroll_locked = true;
        }
        tracing::debug!("Opened {}", panel);
        true
    }

    /// Hide a panel. Idempotent; returns false when it was already hidden.
    pub fn close_panel(&mut self, panel: &PanelRef) -> bool {
        if *panel == PanelRef::Lightbox {
            self.scroll_locked = false;
            self.lightbox_media = None;
        }
        let closed = self.panels.hide(panel);
        if closed {
            tracing::debug!("Closed {}", panel);
        }
        closed
    }

    /// Close the panel a backdrop click landed on, or the lightbox on Escape.
    /// Modals and the skill detail panel ignore Escape, and the skill detail
    /// panel has no backdrop. At most one panel closes.
    pub fn close_via_backdrop_or_escape(&mut self, event: DismissEvent) -> Option<PanelRef> {
        let target = match event {
            DismissEvent::Backdrop(panel) if panel.has_backdrop() => panel,
            DismissEvent::Backdrop(panel) => {
                tracing::debug!("{} has no backdrop", panel);
                return None;
            }
            DismissEvent::Escape => PanelRef::Lightbox,
        };
        if self.close_panel(&target) {
            Some(target)
        } else {
            None
        }
    }

    /// Load media into the lightbox and open it
    pub fn open_lightbox(&mut self, media: MediaRef) -> bool {
        self.lightbox_media = Some(media);
        self.open_panel(&PanelRef::Lightbox)
    }

    /// Open the lightbox on a project's screenshot, if it has one
    pub fn open_project_screenshot(&mut self, project_id: &str) -> bool {
        let Some(project) = self.portfolio.project(project_id) else {
            return false;
        };
        let Some(source) = project.screenshot.clone() else {
            tracing::debug!("Project {} has no screenshot", project_id);
            return false;
        };
        let alt = project.title.clone();
        self.open_lightbox(MediaRef::new(source, alt))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Theme
    // ─────────────────────────────────────────────────────────────────────────

    /// Flip the theme, persist it and return the new value
    pub fn toggle_theme(&mut self) -> ThemePreference {
        self.theme = self.theme.toggled();
        if let Err(e) = self.store.set(THEME_KEY, self.theme.as_str()) {
            tracing::warn!("Failed to persist theme preference: {:#}", e);
        }
        tracing::info!("Theme switched to {}", self.theme.as_str());
        self.theme
    }

    /// Apply the persisted theme. Only an exact "light" changes the default.
    pub fn load_persisted_theme(&mut self) {
        let saved = self.store.get(THEME_KEY);
        if saved.as_deref().and_then(ThemePreference::parse) == Some(ThemePreference::Light) {
            self.theme = ThemePreference::Light;
        }
        tracing::debug!("Persisted theme {:?}, using {}", saved, self.theme.as_str());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Skills
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_filter(&mut self, tag: &str) {
        self.skill_filter.set(tag);
        tracing::debug!(
            "Skill filter '{}' shows {} of {}",
            tag,
            self.visible_skills().len(),
            self.portfolio.skills.len()
        );
    }

    /// Copy a skill's name and description into the detail panel and open it
    pub fn reveal_skill_detail(&mut self, index: usize) -> bool {
        let Some(entry) = self.portfolio.skills.get(index) else {
            return false;
        };
        self.skill_detail = SkillDetail {
            title: entry.name.trim().to_string(),
            description: entry.description.clone(),
        };
        self.open_panel(&PanelRef::SkillDetail);
        true
    }

    /// Report a skill row's visibility; the first sufficient report sets its
    /// fill target. Returns true when this call fired.
    pub fn animate_skill_fill(&mut self, index: usize, visible_rows: usize, total_rows: usize) -> bool {
        if !self.fill_observer.report(&index, visible_rows, total_rows) {
            return false;
        }
        let Some(entry) = self.portfolio.skills.get(index) else {
            return false;
        };
        if let Some(fill) = self.skill_fills.get_mut(index) {
            fill.target = Some(entry.level());
        }
        true
    }

    /// Report a section's visibility; reveals it permanently once enough
    /// of it has been on screen.
    pub fn reveal_section(&mut self, section: Section, visible_rows: usize, total_rows: usize) -> bool {
        if self.section_observer.report(&section, visible_rows, total_rows) {
            self.revealed.insert(section);
            true
        } else {
            false
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Contact form
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply an edit to a field. Sent/Rejected fall back to Idle.
    pub fn edit_field(&mut self, field: FormField, edit: FieldEdit) {
        let value = self.form.field_mut(field);
        match edit {
            FieldEdit::Insert(c) => value.push(c),
            FieldEdit::Backspace => {
                value.pop();
            }
        }
        if matches!(
            self.form.state,
            FormSubmissionState::Sent | FormSubmissionState::Rejected
        ) {
            self.form.state = FormSubmissionState::Idle;
        }
    }

    /// Set a field's value directly
    pub fn set_field(&mut self, field: FormField, value: &str) {
        self.form.set(field, value);
        if matches!(
            self.form.state,
            FormSubmissionState::Sent | FormSubmissionState::Rejected
        ) {
            self.form.state = FormSubmissionState::Idle;
        }
    }

    /// Validate and hand the message to the delivery runner
    pub fn submit_contact_form(&mut self) -> FormSubmissionState {
        if !self.form.submit_enabled {
            tracing::debug!("Submit ignored while {}", self.form.state);
            return self.form.state;
        }

        self.form.state = FormSubmissionState::Validating;
        match self.form.validate() {
            Verdict::Spam => {
                tracing::info!("Contact form blocked by honeypot");
                self.form.state = FormSubmissionState::Rejected;
                self.form.status = Some(FormStatus::new(STATUS_SPAM, StatusTone::Warning));
            }
            Verdict::Incomplete => {
                self.form.state = FormSubmissionState::Rejected;
                self.form.status = Some(FormStatus::new(STATUS_INCOMPLETE, StatusTone::Warning));
            }
            Verdict::Valid(message) => {
                self.form.state = FormSubmissionState::Sending;
                self.form.status = Some(FormStatus::new(STATUS_SENDING, StatusTone::Info));
                self.form.submit_enabled = false;
                self.delivery.spawn(message);
            }
        }
        self.form.state
    }

    /// Apply a finished delivery
    pub fn complete_delivery(&mut self, outcome: DeliveryOutcome) {
        match outcome {
            DeliveryOutcome::Delivered => {
                self.form.state = FormSubmissionState::Sent;
                self.form.status = Some(FormStatus::new(STATUS_SENT, StatusTone::Success));
                self.form.reset_fields();
                self.last_sent_at = Some(Local::now());
            }
            DeliveryOutcome::Failed(reason) => {
                tracing::warn!("Contact message delivery failed: {}", reason);
                self.form.state = FormSubmissionState::Rejected;
                self.form.status = Some(FormStatus::new(
                    format!("Message could not be sent: {}", reason),
                    StatusTone::Warning,
                ));
            }
        }
        self.form.submit_enabled = true;
    }

    /// Empty the fields and the status line. An in-flight delivery still
    /// completes.
    pub fn clear_contact_form(&mut self) {
        self.form.reset_fields();
        self.form.status = None;
        if self.form.state != FormSubmissionState::Sending {
            self.form.state = FormSubmissionState::Idle;
        }
    }

    /// Copy the owner's email, reporting in the form status or as an alert
    pub fn copy_contact_email(&mut self, clipboard: &mut dyn Clipboard) {
        match clipboard.copy(&self.portfolio.email) {
            Ok(()) => {
                self.form.status = Some(FormStatus::new(STATUS_COPIED, StatusTone::Success));
            }
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {}", e);
                self.alert = Some("Could not copy".to_string());
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Time
    // ─────────────────────────────────────────────────────────────────────────

    /// Per-frame work: finished deliveries, fill bars, blobs
    pub fn tick(&mut self) {
        if let Some(outcome) = self.delivery.poll() {
            self.complete_delivery(outcome);
        }
        for fill in &mut self.skill_fills {
            fill.advance();
        }
        self.blobs.frame();
    }

    /// End the perpetual blob animation
    pub fn stop_animations(&self) {
        self.blobs.stop_handle().stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::content::{Project, SkillEntry};
    use crate::services::preferences::MemoryStore;
    use anyhow::Result;
    use proptest::prelude::*;
    use std::thread;
    use std::time::Duration;

    fn portfolio() -> Portfolio {
        Portfolio {
            owner: "Test Owner".to_string(),
            role: "Engineer".to_string(),
            email: "hello@example.com".to_string(),
            about: "About me".to_string(),
            projects: vec![
                Project {
                    id: "alpha".to_string(),
                    title: "Alpha".to_string(),
                    summary: "First".to_string(),
                    details: String::new(),
                    screenshot: Some("alpha.png".to_string()),
                    tags: vec![],
                },
                Project {
                    id: "beta".to_string(),
                    title: "Beta".to_string(),
                    summary: "Second".to_string(),
                    details: String::new(),
                    screenshot: None,
                    tags: vec![],
                },
            ],
            skills: vec![
                SkillEntry {
                    name: "Rust".to_string(),
                    category: "language".to_string(),
                    description: "Systems".to_string(),
                    level: 90,
                },
                SkillEntry {
                    name: "Postgres".to_string(),
                    category: "data".to_string(),
                    description: "Storage".to_string(),
                    level: 70,
                },
                SkillEntry {
                    name: "Go".to_string(),
                    category: "language".to_string(),
                    description: String::new(),
                    level: 60,
                },
            ],
        }
    }

    fn controller_with(store: MemoryStore) -> ViewStateController<MemoryStore> {
        ViewStateController::new(portfolio(), store, DeliveryRunner::simulated(Duration::ZERO))
    }

    fn controller() -> ViewStateController<MemoryStore> {
        controller_with(MemoryStore::new())
    }

    fn fill_form(c: &mut ViewStateController<MemoryStore>, name: &str, email: &str, message: &str, company: &str) {
        c.set_field(FormField::Name, name);
        c.set_field(FormField::Email, email);
        c.set_field(FormField::Message, message);
        c.set_field(FormField::Company, company);
    }

    fn tick_until_settled(c: &mut ViewStateController<MemoryStore>) {
        for _ in 0..200 {
            c.tick();
            if c.form().state != FormSubmissionState::Sending {
                return;
            }
            thread::sleep(Duration::from_millis(5));
        }
        panic!("delivery never completed");
    }

    struct FakeClipboard {
        fail: bool,
        copied: Vec<String>,
    }

    impl Clipboard for FakeClipboard {
        fn copy(&mut self, text: &str) -> Result<(), String> {
            if self.fail {
                return Err("no helper".to_string());
            }
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    /// Store whose writes always fail
    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            anyhow::bail!("disk full")
        }
    }

    // ── Panels ──────────────────────────────────────────────────────────────

    #[test]
    fn test_open_then_close_hides_panel() {
        let mut c = controller();
        for panel in [PanelRef::Modal("alpha".into()), PanelRef::SkillDetail] {
            assert!(c.open_panel(&panel));
            assert!(c.is_visible(&panel));
            assert!(c.close_panel(&panel));
            assert!(!c.is_visible(&panel));
            // Second close is a no-op
            assert!(!c.close_panel(&panel));
            assert!(!c.is_visible(&panel));
        }
    }

    #[test]
    fn test_open_absent_modal_is_noop() {
        let mut c = controller();
        assert!(!c.open_panel(&PanelRef::Modal("missing".into())));
        assert!(c.panels().is_empty());
    }

    #[test]
    fn test_lightbox_without_media_is_noop() {
        let mut c = controller();
        assert!(!c.open_panel(&PanelRef::Lightbox));
        assert!(!c.scroll_locked());
    }

    #[test]
    fn test_lightbox_locks_scroll_and_clears_media() {
        let mut c = controller();
        assert!(c.open_lightbox(MediaRef::new("shot.png", "")));
        assert!(c.scroll_locked());
        assert_eq!(c.lightbox_media().map(|m| m.alt.as_str()), Some("Preview"));

        assert!(c.close_panel(&PanelRef::Lightbox));
        assert!(!c.scroll_locked());
        assert!(c.lightbox_media().is_none());
        assert!(!c.close_panel(&PanelRef::Lightbox));
    }

    #[test]
    fn test_project_screenshot_opens_lightbox() {
        let mut c = controller();
        assert!(c.open_project_screenshot("alpha"));
        assert_eq!(c.lightbox_media().map(|m| m.source.as_str()), Some("alpha.png"));
        assert_eq!(c.lightbox_media().map(|m| m.alt.as_str()), Some("Alpha"));

        // Project without a screenshot leaves the lightbox alone
        c.close_panel(&PanelRef::Lightbox);
        assert!(!c.open_project_screenshot("beta"));
        assert!(!c.is_visible(&PanelRef::Lightbox));
    }

    #[test]
    fn test_opening_one_panel_keeps_others() {
        let mut c = controller();
        c.open_panel(&PanelRef::Modal("alpha".into()));
        c.open_panel(&PanelRef::Modal("beta".into()));
        c.reveal_skill_detail(0);

        assert!(c.is_visible(&PanelRef::Modal("alpha".into())));
        assert!(c.is_visible(&PanelRef::Modal("beta".into())));
        assert!(c.is_visible(&PanelRef::SkillDetail));
    }

    #[test]
    fn test_escape_closes_only_the_lightbox() {
        let mut c = controller();
        c.open_panel(&PanelRef::Modal("alpha".into()));
        c.open_project_screenshot("alpha");

        assert_eq!(
            c.close_via_backdrop_or_escape(DismissEvent::Escape),
            Some(PanelRef::Lightbox)
        );
        assert!(!c.scroll_locked());
        assert!(c.is_visible(&PanelRef::Modal("alpha".into())));

        // Nothing else listens for Escape
        assert_eq!(c.close_via_backdrop_or_escape(DismissEvent::Escape), None);
        assert!(c.is_visible(&PanelRef::Modal("alpha".into())));
    }

    #[test]
    fn test_escape_leaves_skill_detail_over_modal() {
        let mut c = controller();
        c.open_panel(&PanelRef::Modal("alpha".into()));
        c.reveal_skill_detail(0);

        assert_eq!(c.close_via_backdrop_or_escape(DismissEvent::Escape), None);
        assert!(c.is_visible(&PanelRef::SkillDetail));
        assert!(c.is_visible(&PanelRef::Modal("alpha".into())));
    }

    #[test]
    fn test_skill_detail_ignores_backdrop() {
        let mut c = controller();
        c.reveal_skill_detail(0);

        let closed = c.close_via_backdrop_or_escape(DismissEvent::Backdrop(PanelRef::SkillDetail));
        assert_eq!(closed, None);
        assert!(c.is_visible(&PanelRef::SkillDetail));
    }

    #[test]
    fn test_backdrop_closes_its_own_panel() {
        let mut c = controller();
        c.open_panel(&PanelRef::Modal("alpha".into()));
        c.open_panel(&PanelRef::Modal("beta".into()));

        let closed = c.close_via_backdrop_or_escape(DismissEvent::Backdrop(PanelRef::Modal("alpha".into())));
        assert_eq!(closed, Some(PanelRef::Modal("alpha".into())));
        assert!(c.is_visible(&PanelRef::Modal("beta".into())));

        // Backdrop of a hidden panel closes nothing
        let closed = c.close_via_backdrop_or_escape(DismissEvent::Backdrop(PanelRef::Modal("alpha".into())));
        assert_eq!(closed, None);
    }

    // ── Theme ───────────────────────────────────────────────────────────────

    #[test]
    fn test_toggle_theme_persists_and_round_trips() {
        let mut c = controller_with(MemoryStore::with(THEME_KEY, "dark"));
        c.load_persisted_theme();
        assert_eq!(c.theme(), ThemePreference::Dark);

        assert_eq!(c.toggle_theme(), ThemePreference::Light);
        assert_eq!(c.store.get(THEME_KEY).as_deref(), Some("light"));

        assert_eq!(c.toggle_theme(), ThemePreference::Dark);
        assert_eq!(c.store.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_load_persisted_light() {
        let mut c = controller_with(MemoryStore::with(THEME_KEY, "light"));
        c.load_persisted_theme();
        assert_eq!(c.theme(), ThemePreference::Light);
    }

    #[test]
    fn test_load_persisted_missing_or_unknown_keeps_dark() {
        let mut c = controller();
        c.load_persisted_theme();
        assert_eq!(c.theme(), ThemePreference::Dark);

        let mut c = controller_with(MemoryStore::with(THEME_KEY, "solarized"));
        c.load_persisted_theme();
        assert_eq!(c.theme(), ThemePreference::Dark);
    }

    #[test]
    fn test_toggle_theme_survives_store_failure() {
        let mut c = ViewStateController::new(portfolio(), BrokenStore, DeliveryRunner::simulated(Duration::ZERO));
        assert_eq!(c.toggle_theme(), ThemePreference::Light);
        assert_eq!(c.theme(), ThemePreference::Light);
    }

    // ── Skills ──────────────────────────────────────────────────────────────

    #[test]
    fn test_default_filter_is_all() {
        let c = controller();
        assert_eq!(c.skill_filter().active_filter(), "all");
        assert_eq!(c.visible_skills(), vec![0, 1, 2]);
    }

    #[test]
    fn test_set_filter_by_category() {
        let mut c = controller();
        c.set_filter("language");
        assert_eq!(c.visible_skills(), vec![0, 2]);

        let active: Vec<_> = c
            .skill_filter()
            .controls()
            .iter()
            .filter(|ctl| c.skill_filter().is_active_control(ctl))
            .collect();
        assert_eq!(active, vec!["language"]);
    }

    #[test]
    fn test_set_filter_unknown_hides_everything() {
        let mut c = controller();
        c.set_filter("cooking");
        assert!(c.visible_skills().is_empty());
    }

    #[test]
    fn test_reveal_skill_detail_fills_slots() {
        let mut c = controller();
        assert!(c.reveal_skill_detail(1));
        assert_eq!(c.skill_detail().title, "Postgres");
        assert_eq!(c.skill_detail().description, "Storage");
        assert!(c.is_visible(&PanelRef::SkillDetail));

        assert!(!c.reveal_skill_detail(99));
    }

    #[test]
    fn test_skill_fill_fires_once() {
        let mut c = controller();
        assert!(c.animate_skill_fill(0, 1, 1));
        assert_eq!(c.skill_fill(0).target, Some(90));
        assert!(!c.animate_skill_fill(0, 1, 1));

        for _ in 0..50 {
            c.tick();
        }
        assert_eq!(c.skill_fill(0).shown, 90);
        // Entries never seen stay empty
        assert_eq!(c.skill_fill(1), SkillFill::default());
    }

    #[test]
    fn test_section_reveal_is_one_shot() {
        let mut c = controller();
        assert!(!c.is_revealed(Section::Skills));
        assert!(!c.reveal_section(Section::Skills, 1, 20));
        assert!(c.reveal_section(Section::Skills, 3, 20));
        assert!(c.is_revealed(Section::Skills));
        assert!(!c.reveal_section(Section::Skills, 20, 20));
    }

    // ── Contact form ────────────────────────────────────────────────────────

    #[test]
    fn test_submit_missing_name_is_rejected_without_clearing() {
        let mut c = controller();
        fill_form(&mut c, "", "a@b.com", "hi", "");

        assert_eq!(c.submit_contact_form(), FormSubmissionState::Rejected);
        let status = c.form().status.clone().unwrap();
        assert!(status.text.contains("required fields"));
        assert_eq!(c.form().email, "a@b.com");
        assert_eq!(c.form().message, "hi");
        assert!(c.form().submit_enabled);
    }

    #[test]
    fn test_submit_with_honeypot_is_blocked_immediately() {
        let mut c = controller();
        fill_form(&mut c, "A", "a@b.com", "hi", "spam");

        assert_eq!(c.submit_contact_form(), FormSubmissionState::Rejected);
        assert!(c.form().status.clone().unwrap().text.contains("blocked"));
        assert!(!c.delivery.is_pending());
        assert!(c.form().submit_enabled);
    }

    #[test]
    fn test_submit_valid_sends_then_clears() {
        let mut c = controller();
        fill_form(&mut c, "A", "a@b.com", "hi", "");

        assert_eq!(c.submit_contact_form(), FormSubmissionState::Sending);
        assert!(!c.form().submit_enabled);
        assert_eq!(c.form().status.clone().unwrap().text, STATUS_SENDING);

        tick_until_settled(&mut c);

        assert_eq!(c.form().state, FormSubmissionState::Sent);
        assert!(c.form().is_blank());
        assert!(c.form().submit_enabled);
        assert_eq!(c.form().status.clone().unwrap().tone, StatusTone::Success);
        assert!(c.last_sent_at().is_some());
    }

    #[test]
    fn test_submit_ignored_while_sending() {
        let mut c = ViewStateController::new(
            portfolio(),
            MemoryStore::new(),
            DeliveryRunner::simulated(Duration::from_secs(5)),
        );
        fill_form(&mut c, "A", "a@b.com", "hi", "");
        assert_eq!(c.submit_contact_form(), FormSubmissionState::Sending);
        assert_eq!(c.submit_contact_form(), FormSubmissionState::Sending);
    }

    #[test]
    fn test_failed_delivery_keeps_fields() {
        let mut c = controller();
        fill_form(&mut c, "A", "a@b.com", "hi", "");
        c.form.state = FormSubmissionState::Sending;
        c.form.submit_enabled = false;

        c.complete_delivery(DeliveryOutcome::Failed("timeout".to_string()));
        assert_eq!(c.form().state, FormSubmissionState::Rejected);
        assert_eq!(c.form().name, "A");
        assert!(c.form().submit_enabled);
        assert!(c.form().status.clone().unwrap().text.contains("timeout"));
    }

    #[test]
    fn test_edit_after_rejection_returns_to_idle() {
        let mut c = controller();
        c.submit_contact_form();
        assert_eq!(c.form().state, FormSubmissionState::Rejected);

        c.edit_field(FormField::Name, FieldEdit::Insert('A'));
        assert_eq!(c.form().state, FormSubmissionState::Idle);
        assert_eq!(c.form().name, "A");

        c.edit_field(FormField::Name, FieldEdit::Backspace);
        assert_eq!(c.form().name, "");
    }

    #[test]
    fn test_clear_during_sending_still_completes() {
        let mut c = controller();
        fill_form(&mut c, "A", "a@b.com", "hi", "");
        c.submit_contact_form();
        c.clear_contact_form();
        assert!(c.form().status.is_none());
        assert_eq!(c.form().state, FormSubmissionState::Sending);

        tick_until_settled(&mut c);
        assert_eq!(c.form().state, FormSubmissionState::Sent);
    }

    #[test]
    fn test_copy_email_success_and_failure() {
        let mut c = controller();
        let mut clipboard = FakeClipboard {
            fail: false,
            copied: vec![],
        };
        c.copy_contact_email(&mut clipboard);
        assert_eq!(clipboard.copied, vec!["hello@example.com".to_string()]);
        assert_eq!(c.form().status.clone().unwrap().text, STATUS_COPIED);
        assert!(c.take_alert().is_none());

        clipboard.fail = true;
        c.copy_contact_email(&mut clipboard);
        assert_eq!(c.take_alert().as_deref(), Some("Could not copy"));
        assert!(c.take_alert().is_none());
    }

    #[test]
    fn test_stop_animations_freezes_blobs() {
        let mut c = controller();
        c.tick();
        let phase = c.blobs().phase();
        c.stop_animations();
        c.tick();
        assert_eq!(c.blobs().phase(), phase);
    }

    // ── Properties ──────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_double_toggle_restores_theme(start_light in any::<bool>()) {
            let stored = if start_light { "light" } else { "dark" };
            let mut c = controller_with(MemoryStore::with(THEME_KEY, stored));
            c.load_persisted_theme();
            let before = c.theme();

            c.toggle_theme();
            c.toggle_theme();

            prop_assert_eq!(c.theme(), before);
            let saved = c.store.get(THEME_KEY);
            prop_assert_eq!(saved.as_deref(), Some(stored));
        }

        #[test]
        fn prop_filter_visibility_is_equality(tag in "[a-z]{0,8}") {
            let mut c = controller();
            c.set_filter(&tag);
            let visible = c.visible_skills();
            for (i, entry) in c.portfolio().skills.iter().enumerate() {
                let expected = tag == "all" || entry.category == tag;
                prop_assert_eq!(visible.contains(&i), expected);
            }
        }
    }
}
