//! Lightbox component
//!
//! Large overlay for a screenshot. The terminal cannot show the image, so it
//! frames the media path and its caption; the page underneath stops
//! scrolling while it is open.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::truncate;
use crate::components::overlay::{draw_panel_box, PanelRegion};
use crate::model::panel::{MediaRef, PanelRef};
use crate::model::theme::Palette;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Cells kept clear around the lightbox
const MARGIN: u16 = 3;

#[derive(Default)]
pub struct Lightbox;

impl Lightbox {
    pub fn draw_with_media(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        media: &MediaRef,
        palette: Palette,
    ) -> PanelRegion {
        let box_area = Rect::new(
            area.x + MARGIN,
            area.y + MARGIN / 2,
            area.width.saturating_sub(MARGIN * 2),
            area.height.saturating_sub(MARGIN),
        );
        let (inner, close) = draw_panel_box(frame, box_area, &media.alt, palette);
        let width = inner.width as usize;

        let mut lines = Vec::new();
        let top_pad = inner.height.saturating_sub(5) / 2;
        for _ in 0..top_pad {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            "▣",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            truncate(&media.source, width),
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            truncate(&media.alt, width),
            Style::default().fg(palette.muted),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Esc/x close",
            Style::default().fg(palette.muted),
        )));

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);

        PanelRegion {
            panel: PanelRef::Lightbox,
            area: box_area,
            close,
            links: Vec::new(),
        }
    }
}

impl Component for Lightbox {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('x') => Some(Action::ClosePanel(PanelRef::Lightbox)),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        Ok(())
    }
}
