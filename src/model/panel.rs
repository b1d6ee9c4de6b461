//! Overlay panels: project modals, the lightbox and the skill detail panel
//!
//! Unlike the app-level dialogs in [`super::modal`], panels are not exclusive:
//! any number may be visible at once. The set remembers the order in which
//! visible panels were opened so the most recent one is drawn on top and
//! receives clicks. Escape only ever dismisses the lightbox.

use std::fmt;

/// Identifies one overlay panel
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PanelRef {
    /// Project detail modal keyed by project id
    Modal(String),
    /// Screenshot preview; there is only ever one
    Lightbox,
    /// Skill chip detail panel
    SkillDetail,
}

impl PanelRef {
    /// Whether a click outside the panel dismisses it. The skill detail
    /// panel only closes through its own control.
    pub fn has_backdrop(&self) -> bool {
        !matches!(self, PanelRef::SkillDetail)
    }
}

impl fmt::Display for PanelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelRef::Modal(id) => write!(f, "modal-{}", id),
            PanelRef::Lightbox => write!(f, "lightbox"),
            PanelRef::SkillDetail => write!(f, "skill-detail"),
        }
    }
}

/// What caused a dismissal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DismissEvent {
    /// Click landed on the backdrop of this panel
    Backdrop(PanelRef),
    /// Escape key, not scoped to any panel. Only the lightbox listens.
    Escape,
}

/// Media loaded into the lightbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRef {
    pub source: String,
    pub alt: String,
}

impl MediaRef {
    pub fn new(source: impl Into<String>, alt: impl Into<String>) -> Self {
        let alt = alt.into();
        Self {
            source: source.into(),
            alt: if alt.trim().is_empty() {
                "Preview".to_string()
            } else {
                alt
            },
        }
    }
}

/// Visible panels in the order they were opened
#[derive(Debug, Default)]
pub struct PanelSet {
    open: Vec<PanelRef>,
}

impl PanelSet {
    pub fn new() -> Self {
        Self { open: Vec::new() }
    }

    /// Mark a panel visible. Returns false if it already was.
    pub fn show(&mut self, panel: PanelRef) -> bool {
        if self.is_visible(&panel) {
            return false;
        }
        self.open.push(panel);
        true
    }

    /// Mark a panel hidden. Returns false if it already was.
    pub fn hide(&mut self, panel: &PanelRef) -> bool {
        let before = self.open.len();
        self.open.retain(|p| p != panel);
        self.open.len() != before
    }

    pub fn is_visible(&self, panel: &PanelRef) -> bool {
        self.open.contains(panel)
    }

    /// Most recently opened visible panel
    pub fn top(&self) -> Option<&PanelRef> {
        self.open.last()
    }

    /// Visible panels, bottom first
    pub fn iter(&self) -> impl Iterator<Item = &PanelRef> {
        self.open.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_is_not_exclusive() {
        let mut panels = PanelSet::new();
        assert!(panels.show(PanelRef::Modal("alpha".into())));
        assert!(panels.show(PanelRef::Modal("beta".into())));
        assert!(panels.show(PanelRef::Lightbox));

        assert!(panels.is_visible(&PanelRef::Modal("alpha".into())));
        assert!(panels.is_visible(&PanelRef::Modal("beta".into())));
        assert_eq!(panels.top(), Some(&PanelRef::Lightbox));
    }

    #[test]
    fn test_show_twice_keeps_single_entry() {
        let mut panels = PanelSet::new();
        assert!(panels.show(PanelRef::Lightbox));
        assert!(!panels.show(PanelRef::Lightbox));
        assert_eq!(panels.iter().count(), 1);
    }

    #[test]
    fn test_hide_middle_panel_preserves_order() {
        let mut panels = PanelSet::new();
        panels.show(PanelRef::Modal("a".into()));
        panels.show(PanelRef::SkillDetail);
        panels.show(PanelRef::Lightbox);

        assert!(panels.hide(&PanelRef::SkillDetail));
        assert!(!panels.hide(&PanelRef::SkillDetail));

        let order: Vec<_> = panels.iter().cloned().collect();
        assert_eq!(order, vec![PanelRef::Modal("a".into()), PanelRef::Lightbox]);
    }

    #[test]
    fn test_skill_detail_has_no_backdrop() {
        assert!(PanelRef::Modal("a".into()).has_backdrop());
        assert!(PanelRef::Lightbox.has_backdrop());
        assert!(!PanelRef::SkillDetail.has_backdrop());
    }

    #[test]
    fn test_media_alt_defaults_to_preview() {
        assert_eq!(MediaRef::new("shot.png", "").alt, "Preview");
        assert_eq!(MediaRef::new("shot.png", "Dashboard").alt, "Dashboard");
    }
}
