//! Shared drawing and hit-testing for overlay panels

use crate::action::Action;
use crate::components::layout::{centered_popup, contains};
use crate::model::panel::{DismissEvent, PanelRef};
use crate::model::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Cells each stacked panel is nudged by, so lower ones peek out
const CASCADE: (u16, u16) = (2, 1);

/// Where a panel landed on screen during the last draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRegion {
    pub panel: PanelRef,
    /// Whole panel box including borders
    pub area: Rect,
    /// The `[x]` control
    pub close: Rect,
    /// Clickable spots inside the panel
    pub links: Vec<(Rect, Action)>,
}

impl PanelRegion {
    /// What a left click at a cell means for this panel. Outside the box
    /// is a backdrop click for panels that have one and is swallowed
    /// otherwise.
    pub fn click(&self, column: u16, row: u16) -> Option<Action> {
        if contains(self.close, column, row) {
            return Some(Action::ClosePanel(self.panel.clone()));
        }
        if !contains(self.area, column, row) {
            return self
                .panel
                .has_backdrop()
                .then(|| Action::Dismiss(DismissEvent::Backdrop(self.panel.clone())));
        }
        self.links
            .iter()
            .find(|(rect, _)| contains(*rect, column, row))
            .map(|(_, action)| action.clone())
    }
}

/// Centered box shifted down-right by its stacking layer
pub fn cascade(area: Rect, width: u16, height: u16, layer: usize) -> Rect {
    let base = centered_popup(area, width, height);
    let layer = layer.min(8) as u16;
    let x = (base.x + CASCADE.0 * layer).min(area.right().saturating_sub(base.width));
    let y = (base.y + CASCADE.1 * layer).min(area.bottom().saturating_sub(base.height));
    Rect::new(x, y, base.width, base.height)
}

/// Clear the box, draw its border and title, and place the close control.
/// Returns the inner content area and the close control's cell span.
pub fn draw_panel_box(frame: &mut Frame, area: Rect, title: &str, palette: Palette) -> (Rect, Rect) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(palette.bg).fg(palette.fg))
        .border_style(Style::default().fg(palette.accent))
        .title(format!(" {} ", title))
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let close = Rect::new(area.right().saturating_sub(5), area.y, 3, 1).intersection(area);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "[x]",
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        )),
        close,
    );

    (inner, close)
}
