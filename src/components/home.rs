//! Home component - the scrolling portfolio page
//!
//! Owns scroll position, keyboard focus and card tilt. The page content
//! itself comes from the controller on every build; this component only
//! decides which part of it is on screen and what input means.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{calculate_main_layout, contains};
use crate::components::page::{build_page, Page, PageMap, PageView, Target};
use crate::controller::ViewStateController;
use crate::model::content::Portfolio;
use crate::model::motion::Tilt;
use crate::model::ui::Section;
use crate::services::preferences::PreferenceStore;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use std::collections::HashMap;

// ═══════════════════════════════════════════════════════════════════════════════
// Home Component
// ═══════════════════════════════════════════════════════════════════════════════

/// Home component for the page view
pub struct HomeComponent {
    /// First page row on screen
    pub scroll: usize,

    /// Keyboard focus, if any
    pub focus: Option<Target>,

    /// Card tilt by project index
    pub tilts: HashMap<usize, Tilt>,

    /// Screen area of the page viewport
    page_area: Rect,

    /// Map of the last build
    map: PageMap,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        Self {
            scroll: 0,
            focus: None,
            tilts: HashMap::new(),
            page_area: Rect::default(),
            map: PageMap::default(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Page & Viewport
    // ─────────────────────────────────────────────────────────────────────────

    /// Recompute the viewport for a new terminal size
    pub fn resize(&mut self, area: Rect) {
        self.page_area = calculate_main_layout(area).page;
    }

    pub fn page_area(&self) -> Rect {
        self.page_area
    }

    pub fn viewport_height(&self) -> usize {
        self.page_area.height as usize
    }

    pub fn map(&self) -> &PageMap {
        &self.map
    }

    /// Build the page as it currently looks
    pub fn build<S: PreferenceStore>(&self, controller: &ViewStateController<S>) -> Page {
        let view = PageView::new(controller, self.focus.as_ref(), &self.tilts, self.page_area.width);
        build_page(&view)
    }

    /// Rebuild the page map, keep scroll and focus valid, and report what
    /// is on screen to the visibility observers
    pub fn sync<S: PreferenceStore>(&mut self, controller: &mut ViewStateController<S>) {
        self.map = self.build(controller).map;

        self.scroll = self.scroll.min(self.max_scroll());
        if let Some(focus) = &self.focus {
            if !self.map.focus_order().contains(focus) {
                self.set_focus(None);
            }
        }

        let top = self.scroll;
        let bottom = self.scroll + self.viewport_height();
        let on_screen = |start: usize, end: usize| end.min(bottom).saturating_sub(start.max(top));

        for (section, rows) in self.map.sections() {
            controller.reveal_section(*section, on_screen(rows.start, rows.end), rows.len());
        }
        for &(index, row) in self.map.skill_rows() {
            controller.animate_skill_fill(index, on_screen(row, row + 1), 1);
        }
    }

    pub fn max_scroll(&self) -> usize {
        self.map.row_count().saturating_sub(self.viewport_height())
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = (self.scroll + lines).min(self.max_scroll());
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    /// Bring a section heading to the top of the viewport
    pub fn jump_to(&mut self, section: Section) {
        if let Some(rows) = self.map.section_range(section) {
            self.scroll = rows.start.min(self.max_scroll());
        }
    }

    /// Scroll the least amount that puts a page row on screen
    fn ensure_visible(&mut self, row: usize) {
        let height = self.viewport_height().max(1);
        if row < self.scroll {
            self.scroll = row;
        } else if row >= self.scroll + height {
            self.scroll = row + 1 - height;
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────────────────────

    /// Move focus, keeping the focused row in view. Cards get a focus pop.
    pub fn set_focus(&mut self, target: Option<Target>) {
        if let Some(Target::Project(index)) = &self.focus {
            if self.tilts.get(index) == Some(&Tilt::focused()) {
                self.tilts.remove(index);
            }
        }
        if let Some(Target::Project(index)) = &target {
            self.tilts.entry(*index).or_insert_with(Tilt::focused);
        }
        if let Some(row) = target.as_ref().and_then(|t| self.map.row_of(t)) {
            self.ensure_visible(row);
        }
        self.focus = target;
    }

    pub fn focus_next(&mut self) {
        let next = step_focus(self.map.focus_order(), self.focus.as_ref(), true);
        self.set_focus(next);
    }

    pub fn focus_prev(&mut self) {
        let prev = step_focus(self.map.focus_order(), self.focus.as_ref(), false);
        self.set_focus(prev);
    }

    pub fn editing_field(&self) -> bool {
        self.focus.as_ref().is_some_and(Target::is_text_field)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Pointer
    // ─────────────────────────────────────────────────────────────────────────

    /// Page row and column under a terminal cell
    fn page_cell(&self, column: u16, row: u16) -> Option<(usize, u16)> {
        if !contains(self.page_area, column, row) {
            return None;
        }
        let page_row = self.scroll + (row - self.page_area.y) as usize;
        Some((page_row, column - self.page_area.x))
    }

    /// Interactive element under a terminal cell
    pub fn hit(&self, column: u16, row: u16) -> Option<Target> {
        let (page_row, page_col) = self.page_cell(column, row)?;
        self.map.hit(page_row, page_col).cloned()
    }

    /// Tilt the card under the pointer; cards the pointer left go flat
    pub fn pointer_move(&mut self, column: u16, row: u16) {
        let hovered = self
            .page_cell(column, row)
            .and_then(|(page_row, page_col)| {
                let card = self.map.card_at(page_row, page_col)?;
                let (px, py) = card.relative(page_row, page_col);
                Some((card.index, Tilt::from_pointer(px, py)))
            });

        let focused_card = match &self.focus {
            Some(Target::Project(index)) => Some(*index),
            _ => None,
        };
        self.tilts.clear();
        if let Some(index) = focused_card {
            self.tilts.insert(index, Tilt::focused());
        }
        if let Some((index, tilt)) = hovered {
            self.tilts.insert(index, tilt);
        }
    }
}

/// Next (or previous) target in tab order, wrapping around
fn step_focus(order: &[Target], current: Option<&Target>, forward: bool) -> Option<Target> {
    if order.is_empty() {
        return None;
    }
    let position = current.and_then(|c| order.iter().position(|t| t == c));
    let index = match (position, forward) {
        (None, true) => 0,
        (None, false) => order.len() - 1,
        (Some(i), true) => (i + 1) % order.len(),
        (Some(i), false) => (i + order.len() - 1) % order.len(),
    };
    order.get(index).cloned()
}

/// What activating a target does
pub fn target_action(target: &Target, portfolio: &Portfolio) -> Option<Action> {
    match target {
        Target::Project(index) => portfolio
            .projects
            .get(*index)
            .map(|p| Action::OpenProject(p.id.clone())),
        Target::Screenshot(index) => portfolio
            .projects
            .get(*index)
            .map(|p| Action::OpenScreenshot(p.id.clone())),
        Target::Filter(tag) => Some(Action::SetSkillFilter(tag.clone())),
        Target::Skill(index) => Some(Action::RevealSkill(*index)),
        Target::Field(_) => None,
        Target::Send => Some(Action::SubmitForm),
        Target::Clear => Some(Action::ClearForm),
        Target::CopyEmail => Some(Action::CopyEmail),
    }
}

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.editing_field() {
            let action = match key.code {
                KeyCode::Tab => Some(Action::FocusNext),
                KeyCode::BackTab => Some(Action::FocusPrev),
                KeyCode::Esc => Some(Action::Blur),
                KeyCode::Enter => Some(Action::SubmitForm),
                KeyCode::Backspace => Some(Action::FormBackspace),
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Action::FormInput(c))
                }
                _ => None,
            };
            return Ok(action);
        }

        let action = match key.code {
            // Focus
            KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::BackTab => Some(Action::FocusPrev),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
            KeyCode::Esc if self.focus.is_some() => Some(Action::Blur),

            // Scrolling
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::ScrollTop),
            KeyCode::Char('G') | KeyCode::End => Some(Action::ScrollBottom),
            KeyCode::Char(c @ '1'..='4') => Section::from_shortcut(c).map(Action::JumpTo),

            // Page
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            KeyCode::Char('y') => Some(Action::CopyEmail),

            // Dialogs
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),

            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.hit(mouse.column, mouse.row).map(Action::Focus)
            }
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            MouseEventKind::Moved => Some(Action::PointerMove(mouse.column, mouse.row)),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ScrollUp => self.scroll_up(1),
            Action::ScrollDown => self.scroll_down(1),
            Action::PageUp => self.scroll_up(self.viewport_height().max(1)),
            Action::PageDown => self.scroll_down(self.viewport_height().max(1)),
            Action::ScrollTop => self.scroll_to_top(),
            Action::ScrollBottom => self.scroll_to_bottom(),
            Action::JumpTo(section) => self.jump_to(section),
            Action::FocusNext => self.focus_next(),
            Action::FocusPrev => self.focus_prev(),
            Action::Blur => self.set_focus(None),
            Action::PointerMove(column, row) => self.pointer_move(column, row),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_home_screen which takes the controller
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Draw the home screen
pub fn draw_home_screen<S: PreferenceStore>(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    controller: &ViewStateController<S>,
) -> Result<()> {
    let layout = calculate_main_layout(area);
    let palette = controller.theme().palette();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
        area,
    );

    render_header(frame, layout.header, controller);

    home.page_area = layout.page;
    let page = home.build(controller);
    let total = page.lines.len();
    let visible = layout.page.height as usize;
    home.scroll = home.scroll.min(total.saturating_sub(visible));

    let paragraph = Paragraph::new(page.lines).scroll((home.scroll as u16, 0));
    frame.render_widget(paragraph, layout.page);

    if total > visible {
        let mut scrollbar_state =
            ScrollbarState::new(total.saturating_sub(visible)).position(home.scroll);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .style(Style::default().fg(palette.muted))
                .begin_symbol(None)
                .end_symbol(None),
            layout.page,
            &mut scrollbar_state,
        );
    }
    home.map = page.map;

    render_help_bar(frame, layout.help, home, controller);
    Ok(())
}

fn render_header<S: PreferenceStore>(frame: &mut Frame, area: Rect, controller: &ViewStateController<S>) {
    let theme = controller.theme();
    let palette = theme.palette();
    let portfolio = controller.portfolio();

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", portfolio.owner),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("· {}", portfolio.role), Style::default().fg(palette.muted)),
    ]);
    let toggle = Line::from(Span::styled(
        format!("{} ", theme.label()),
        Style::default().fg(palette.highlight),
    ))
    .alignment(Alignment::Right);

    let blobs = blob_line(controller, inner.width as usize);

    frame.render_widget(Paragraph::new(vec![title, Line::from(""), blobs]), inner);
    frame.render_widget(Paragraph::new(toggle), inner);
}

/// The drifting blobs, spread across the header width
fn blob_line<S: PreferenceStore>(controller: &ViewStateController<S>, width: usize) -> Line<'static> {
    let palette = controller.theme().palette();
    let offsets = controller.blobs().offsets();
    let mut cells = vec![' '; width];
    let slot = width / (offsets.len() + 1).max(1);

    for (i, offset) in offsets.iter().enumerate() {
        let anchor = slot * (i + 1);
        let column = anchor as f64 + offset.dx / 2.0;
        let glyph = if offset.dy > 3.0 {
            '●'
        } else if offset.dy < -3.0 {
            '·'
        } else {
            '•'
        };
        if column >= 0.0 && (column as usize) < width {
            cells[column as usize] = glyph;
        }
    }

    Line::from(Span::styled(
        cells.into_iter().collect::<String>(),
        Style::default().fg(palette.blob),
    ))
}

fn render_help_bar<S: PreferenceStore>(
    frame: &mut Frame,
    area: Rect,
    home: &HomeComponent,
    controller: &ViewStateController<S>,
) {
    let palette = controller.theme().palette();
    let key = Style::default()
        .fg(palette.warning)
        .add_modifier(Modifier::BOLD);

    let help_spans = if home.editing_field() {
        vec![
            Span::styled(" Esc ", key),
            Span::raw("Stop editing  "),
            Span::styled(" Tab ", key),
            Span::raw("Next field  "),
            Span::styled(" Enter ", key),
            Span::raw("Send  "),
        ]
    } else if !controller.panels().is_empty() {
        vec![
            Span::styled(" x ", key),
            Span::raw("Close  "),
            Span::styled(" o ", key),
            Span::raw("Screenshot  "),
            Span::styled(" ? ", key),
            Span::raw("Help "),
        ]
    } else {
        vec![
            Span::styled(" q ", key),
            Span::raw("Quit "),
            Span::styled(" Tab ", key),
            Span::raw("Focus "),
            Span::styled(" Enter ", key),
            Span::raw("Open "),
            Span::styled(" 1-4 ", key),
            Span::raw("Sections "),
            Span::styled(" t ", key),
            Span::raw("Theme "),
            Span::styled(" y ", key),
            Span::raw("Copy email "),
            Span::styled(" ? ", key),
            Span::raw("Help "),
        ]
    };

    let help = Paragraph::new(Line::from(help_spans)).style(Style::default().fg(palette.muted));
    frame.render_widget(help, area);
}
