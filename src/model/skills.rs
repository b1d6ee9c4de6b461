//! Skills panel state: category filter, detail slots and fill bars

use super::content::SkillEntry;

/// Filter tag matching every entry
pub const FILTER_ALL: &str = "all";

/// Active category filter and the controls that select it
#[derive(Debug, Clone)]
pub struct SkillFilterState {
    active_filter: String,
    controls: Vec<String>,
}

impl SkillFilterState {
    /// Build the filter controls: "all" first, then each category in
    /// first-appearance order.
    pub fn new(entries: &[SkillEntry]) -> Self {
        let mut controls = vec![FILTER_ALL.to_string()];
        for entry in entries {
            if !controls.iter().any(|c| *c == entry.category) {
                controls.push(entry.category.clone());
            }
        }
        Self {
            active_filter: FILTER_ALL.to_string(),
            controls,
        }
    }

    pub fn set(&mut self, tag: &str) {
        self.active_filter = tag.to_string();
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    pub fn controls(&self) -> &[String] {
        &self.controls
    }

    /// Whether the given control is the highlighted one
    pub fn is_active_control(&self, control: &str) -> bool {
        control == self.active_filter
    }

    /// Visibility of an entry under the current filter
    pub fn matches(&self, entry: &SkillEntry) -> bool {
        self.active_filter == FILTER_ALL || entry.category == self.active_filter
    }

    /// Indices of visible entries
    pub fn visible_indices(&self, entries: &[SkillEntry]) -> Vec<usize> {
        entries
            .iter()
            .enumerate()
            .filter(|(_, e)| self.matches(e))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Text slots of the skill detail panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillDetail {
    pub title: String,
    pub description: String,
}

/// Fill bar progress for one entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkillFill {
    /// Set once, when the entry first becomes visible
    pub target: Option<u8>,
    /// Rendered proportion
    pub shown: u8,
}

/// Percentage points the rendered fill climbs per tick
const FILL_STEP: u8 = 4;

impl SkillFill {
    /// Move `shown` toward the target. Returns true while still moving.
    pub fn advance(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        if self.shown >= target {
            self.shown = target;
            return false;
        }
        self.shown = self.shown.saturating_add(FILL_STEP).min(target);
        true
    }
}
