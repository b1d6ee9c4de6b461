//! Skill detail panel component

use crate::action::Action;
use crate::component::Component;
use crate::components::overlay::{cascade, draw_panel_box, PanelRegion};
use crate::model::panel::PanelRef;
use crate::model::skills::SkillDetail;
use crate::model::theme::Palette;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

#[derive(Default)]
pub struct SkillDetailPanel;

impl SkillDetailPanel {
    pub fn draw_with_detail(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        detail: &SkillDetail,
        palette: Palette,
        layer: usize,
    ) -> PanelRegion {
        let panel_area = cascade(area, 48, 8, layer);
        let (inner, close) = draw_panel_box(frame, panel_area, &detail.title, palette);

        let description = if detail.description.is_empty() {
            Span::styled("No description", Style::default().fg(palette.muted))
        } else {
            Span::styled(detail.description.clone(), Style::default().fg(palette.fg))
        };
        frame.render_widget(
            Paragraph::new(vec![Line::from(description)]).wrap(Wrap { trim: true }),
            inner,
        );

        PanelRegion {
            panel: PanelRef::SkillDetail,
            area: panel_area,
            close,
            links: Vec::new(),
        }
    }
}

impl Component for SkillDetailPanel {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('x') => Some(Action::ClosePanel(PanelRef::SkillDetail)),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        Ok(())
    }
}
