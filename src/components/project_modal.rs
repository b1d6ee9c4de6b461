//! Project modal component
//!
//! Shows a project's details. Any number of project modals may be open; each
//! is drawn one cascade step below the panel opened after it.

use crate::action::Action;
use crate::component::Component;
use crate::components::overlay::{cascade, draw_panel_box, PanelRegion};
use crate::model::content::Project;
use crate::model::panel::PanelRef;
use crate::model::theme::Palette;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

const MODAL_WIDTH: u16 = 64;
const MODAL_HEIGHT: u16 = 16;

/// Project detail modal; keys apply to the project set by `set_project`
#[derive(Default)]
pub struct ProjectModal {
    project_id: String,
}

impl ProjectModal {
    /// Point key handling at the modal currently on top
    pub fn set_project(&mut self, id: &str) {
        self.project_id = id.to_string();
    }

    /// Draw one project's modal at its stacking layer
    pub fn draw_with_project(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        project: &Project,
        palette: Palette,
        layer: usize,
    ) -> PanelRegion {
        let modal_area = cascade(area, MODAL_WIDTH, MODAL_HEIGHT, layer);
        let (inner, close) = draw_panel_box(frame, modal_area, &project.title, palette);

        let mut lines = vec![
            Line::from(Span::styled(
                project.summary.clone(),
                Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for line in project.details.trim_end().lines() {
            lines.push(Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(palette.fg),
            )));
        }
        if !project.tags.is_empty() {
            lines.push(Line::from(""));
            let tags: Vec<String> = project.tags.iter().map(|t| format!("#{}", t)).collect();
            lines.push(Line::from(Span::styled(
                tags.join(" "),
                Style::default().fg(palette.muted),
            )));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);

        // Bottom row: screenshot link and key hints
        let mut links = Vec::new();
        if inner.height > 0 {
            let footer = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
            let mut spans = Vec::new();
            if project.screenshot.is_some() {
                let label = "[o] View screenshot";
                spans.push(Span::styled(
                    label,
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw("  "));
                links.push((
                    Rect::new(footer.x, footer.y, label.len() as u16, 1).intersection(footer),
                    Action::OpenScreenshot(project.id.clone()),
                ));
            }
            spans.push(Span::styled(
                "[x] Close",
                Style::default().fg(palette.muted),
            ));
            frame.render_widget(Paragraph::new(Line::from(spans)), footer);
        }

        PanelRegion {
            panel: PanelRef::Modal(project.id.clone()),
            area: modal_area,
            close,
            links,
        }
    }
}

impl Component for ProjectModal {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('o') => Some(Action::OpenScreenshot(self.project_id.clone())),
            KeyCode::Char('x') => Some(Action::ClosePanel(PanelRef::Modal(self.project_id.clone()))),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawn through draw_with_project, which needs the project
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_keys_target_current_project() {
        let mut modal = ProjectModal::default();
        modal.set_project("ledger");

        let open = modal
            .handle_key_event(KeyEvent::new(KeyCode::Char('o'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(open, Some(Action::OpenScreenshot("ledger".into())));

        let close = modal
            .handle_key_event(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(close, Some(Action::ClosePanel(PanelRef::Modal("ledger".into()))));
    }
}
