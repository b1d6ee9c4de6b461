//! Scrolling page content
//!
//! The page is built as one list of lines plus a map of which rows (and
//! column spans) belong to which interactive element. The same build feeds
//! rendering, mouse hit-testing, focus scrolling and the visibility
//! observers, so they always agree on where things are.

use crate::components::layout::{pad, tail, truncate};
use crate::controller::ViewStateController;
use crate::model::content::Portfolio;
use crate::model::form::{ContactForm, FormField, StatusTone};
use crate::model::motion::Tilt;
use crate::model::skills::{SkillFill, SkillFilterState};
use crate::model::theme::Palette;
use crate::model::ui::Section;
use crate::services::preferences::PreferenceStore;
use chrono::{DateTime, Datelike, Local};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use std::collections::HashMap;
use std::ops::Range;
use unicode_width::UnicodeWidthStr;

/// Rows taken by one project card including its trailing gap
pub const CARD_HEIGHT: usize = 5;
/// Widest a project card grows
const MAX_CARD_WIDTH: usize = 72;
/// Cells in a skill fill bar
const BAR_WIDTH: usize = 20;
/// Left margin for page content
const INDENT: usize = 2;

// ═══════════════════════════════════════════════════════════════════════════════
// Targets & Page Map
// ═══════════════════════════════════════════════════════════════════════════════

/// An interactive element on the page; also what keyboard focus points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Project card, opens its modal
    Project(usize),
    /// Screenshot link on a project card, opens the lightbox
    Screenshot(usize),
    /// Skill filter control carrying its tag
    Filter(String),
    /// Skill chip by index into the portfolio's skills
    Skill(usize),
    Field(FormField),
    Send,
    Clear,
    CopyEmail,
}

impl Target {
    pub fn is_text_field(&self) -> bool {
        matches!(self, Target::Field(_))
    }
}

/// A clickable span within a row
#[derive(Debug, Clone)]
pub struct Hotspot {
    pub cols: Range<u16>,
    pub target: Target,
}

impl Hotspot {
    fn row(target: Target) -> Self {
        Self {
            cols: 0..u16::MAX,
            target,
        }
    }

    fn span(start: usize, width: usize, target: Target) -> Self {
        Self {
            cols: start as u16..(start + width) as u16,
            target,
        }
    }
}

/// Where everything sits on the page, in page rows
#[derive(Debug, Default)]
pub struct PageMap {
    rows: Vec<Vec<Hotspot>>,
    sections: Vec<(Section, Range<usize>)>,
    skill_rows: Vec<(usize, usize)>,
    cards: Vec<CardBox>,
    focus_order: Vec<Target>,
}

impl PageMap {
    /// Rows on the page, one per rendered line
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Target under a page cell. Narrow spans win over whole-row targets.
    pub fn hit(&self, row: usize, col: u16) -> Option<&Target> {
        self.rows
            .get(row)?
            .iter()
            .rev()
            .find(|h| h.cols.contains(&col))
            .map(|h| &h.target)
    }

    /// First row holding a target
    pub fn row_of(&self, target: &Target) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.iter().any(|h| h.target == *target))
    }

    pub fn section_range(&self, section: Section) -> Option<Range<usize>> {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, r)| r.clone())
    }

    pub fn sections(&self) -> &[(Section, Range<usize>)] {
        &self.sections
    }

    /// (skill index, row) for every rendered skill chip
    pub fn skill_rows(&self) -> &[(usize, usize)] {
        &self.skill_rows
    }

    /// Project card covering a page cell
    pub fn card_at(&self, row: usize, col: u16) -> Option<&CardBox> {
        self.cards
            .iter()
            .find(|card| card.rows.contains(&row) && card.cols.contains(&col))
    }

    /// Focusable targets in tab order
    pub fn focus_order(&self) -> &[Target] {
        &self.focus_order
    }
}

/// Untilted box of one project card, in page rows and columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardBox {
    pub index: usize,
    pub rows: Range<usize>,
    pub cols: Range<u16>,
}

impl CardBox {
    /// Pointer position relative to the card, each axis in 0.0..=1.0
    pub fn relative(&self, row: usize, col: u16) -> (f32, f32) {
        let width = self.cols.len().saturating_sub(1).max(1) as f32;
        let height = self.rows.len().saturating_sub(1).max(1) as f32;
        let px = col.saturating_sub(self.cols.start) as f32 / width;
        let py = row.saturating_sub(self.rows.start) as f32 / height;
        (px.clamp(0.0, 1.0), py.clamp(0.0, 1.0))
    }
}

/// Built page: lines to render and the map describing them
pub struct Page {
    pub lines: Vec<Line<'static>>,
    pub map: PageMap,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Page View
// ═══════════════════════════════════════════════════════════════════════════════

/// Everything the page build reads
pub struct PageView<'a> {
    pub portfolio: &'a Portfolio,
    pub palette: Palette,
    pub filter: &'a SkillFilterState,
    pub visible_skills: Vec<usize>,
    pub fills: Vec<SkillFill>,
    pub form: &'a ContactForm,
    pub last_sent_at: Option<DateTime<Local>>,
    pub revealed: Vec<Section>,
    pub focus: Option<&'a Target>,
    pub tilts: &'a HashMap<usize, Tilt>,
    pub width: u16,
}

impl<'a> PageView<'a> {
    pub fn new<S: PreferenceStore>(
        controller: &'a ViewStateController<S>,
        focus: Option<&'a Target>,
        tilts: &'a HashMap<usize, Tilt>,
        width: u16,
    ) -> Self {
        let portfolio = controller.portfolio();
        Self {
            portfolio,
            palette: controller.theme().palette(),
            filter: controller.skill_filter(),
            visible_skills: controller.visible_skills(),
            fills: (0..portfolio.skills.len())
                .map(|i| controller.skill_fill(i))
                .collect(),
            form: controller.form(),
            last_sent_at: controller.last_sent_at(),
            revealed: Section::all()
                .into_iter()
                .filter(|s| controller.is_revealed(*s))
                .collect(),
            focus,
            tilts,
            width,
        }
    }

    fn is_focused(&self, target: &Target) -> bool {
        self.focus == Some(target)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Builder
// ═══════════════════════════════════════════════════════════════════════════════

struct PageBuilder {
    lines: Vec<Line<'static>>,
    map: PageMap,
}

impl PageBuilder {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            map: PageMap::default(),
        }
    }

    fn row(&self) -> usize {
        self.lines.len()
    }

    fn push(&mut self, line: Line<'static>, hotspots: Vec<Hotspot>) {
        self.lines.push(line);
        self.map.rows.push(hotspots);
    }

    fn blank(&mut self) {
        self.push(Line::from(""), Vec::new());
    }

    fn finish(self) -> Page {
        Page {
            lines: self.lines,
            map: self.map,
        }
    }
}

/// Build the whole page
pub fn build_page(view: &PageView) -> Page {
    let mut page = PageBuilder::new();
    let width = view.width.max(20) as usize;

    for section in Section::all() {
        let start = page.row();
        let revealed = view.revealed.contains(&section);
        let style = SectionStyle::new(view.palette, revealed);

        section_heading(&mut page, section, width, &style);
        match section {
            Section::About => about_section(&mut page, view, width, &style),
            Section::Projects => projects_section(&mut page, view, width, &style),
            Section::Skills => skills_section(&mut page, view, width, &style),
            Section::Contact => contact_section(&mut page, view, width, &style),
        }
        page.blank();
        page.map.sections.push((section, start..page.row()));
    }

    let footer = format!("© {} {}", Local::now().year(), view.portfolio.owner);
    page.push(
        Line::from(Span::styled(
            format!("{}{}", " ".repeat(INDENT), footer),
            Style::default().fg(view.palette.muted),
        )),
        Vec::new(),
    );

    page.finish()
}

/// Colors for one section; unrevealed sections are drawn muted
struct SectionStyle {
    palette: Palette,
    revealed: bool,
}

impl SectionStyle {
    fn new(palette: Palette, revealed: bool) -> Self {
        Self { palette, revealed }
    }

    fn text(&self) -> Style {
        if self.revealed {
            Style::default().fg(self.palette.fg)
        } else {
            Style::default().fg(self.palette.muted)
        }
    }

    fn accent(&self) -> Style {
        if self.revealed {
            Style::default().fg(self.palette.accent)
        } else {
            Style::default().fg(self.palette.muted)
        }
    }

    fn muted(&self) -> Style {
        Style::default().fg(self.palette.muted)
    }

    fn focused(&self) -> Style {
        Style::default()
            .fg(self.palette.highlight)
            .add_modifier(Modifier::BOLD)
    }
}

fn section_heading(page: &mut PageBuilder, section: Section, width: usize, style: &SectionStyle) {
    let title = format!("── {} {} ", section.shortcut(), section.title());
    let rule = "─".repeat(width.saturating_sub(title.width() + INDENT));
    page.push(
        Line::from(vec![
            Span::raw(" ".repeat(INDENT)),
            Span::styled(title, style.accent().add_modifier(Modifier::BOLD)),
            Span::styled(rule, style.muted()),
        ]),
        Vec::new(),
    );
    page.blank();
}

fn about_section(page: &mut PageBuilder, view: &PageView, width: usize, style: &SectionStyle) {
    let text_width = width.saturating_sub(INDENT * 2);
    let about = view.portfolio.about.trim_end();
    if about.is_empty() {
        page.push(
            Line::from(Span::styled(
                format!("{}{}", " ".repeat(INDENT), view.portfolio.role),
                style.text(),
            )),
            Vec::new(),
        );
        return;
    }
    for line in about.lines() {
        page.push(
            Line::from(Span::styled(
                format!("{}{}", " ".repeat(INDENT), truncate(line, text_width)),
                style.text(),
            )),
            Vec::new(),
        );
    }
}

fn projects_section(page: &mut PageBuilder, view: &PageView, width: usize, style: &SectionStyle) {
    if view.portfolio.projects.is_empty() {
        page.push(
            Line::from(Span::styled(
                format!("{}No projects yet", " ".repeat(INDENT)),
                style.muted(),
            )),
            Vec::new(),
        );
        return;
    }

    let card_width = width.saturating_sub(INDENT * 2).min(MAX_CARD_WIDTH).max(16);
    let inner = card_width - 4;

    for (index, project) in view.portfolio.projects.iter().enumerate() {
        let start = page.row();
        let card = Target::Project(index);
        let tilt = view.tilts.get(&index).copied().unwrap_or_default();
        let focused = view.is_focused(&card);
        let indent = (INDENT as i16 + tilt.shift()).max(0) as usize;
        let margin = " ".repeat(indent);

        let border = if focused || !tilt.is_flat() {
            let s = Style::default().fg(view.palette.highlight);
            if tilt.lifted {
                s.add_modifier(Modifier::BOLD)
            } else {
                s
            }
        } else if style.revealed {
            Style::default().fg(view.palette.border)
        } else {
            style.muted()
        };

        // ╭─ Title ────╮
        let title = truncate(&project.title, inner.saturating_sub(2));
        let top_fill = card_width.saturating_sub(title.width() + 5);
        page.push(
            Line::from(vec![
                Span::raw(margin.clone()),
                Span::styled("╭─ ", border),
                Span::styled(title, style.accent().add_modifier(Modifier::BOLD)),
                Span::styled(format!(" {}╮", "─".repeat(top_fill)), border),
            ]),
            vec![Hotspot::row(card.clone())],
        );

        // │ summary │
        page.push(
            Line::from(vec![
                Span::raw(margin.clone()),
                Span::styled("│ ", border),
                Span::styled(pad(&project.summary, inner), style.text()),
                Span::styled(" │", border),
            ]),
            vec![Hotspot::row(card.clone())],
        );

        // │ #tags      [open] [screenshot] │
        let screenshot_link = project.screenshot.as_ref().map(|_| "[screenshot]");
        let open_link = "[open]";
        let links_width = open_link.width() + screenshot_link.map(|s| s.width() + 1).unwrap_or(0);
        let tags: Vec<String> = project.tags.iter().map(|t| format!("#{}", t)).collect();
        let tags_text = pad(&tags.join(" "), inner.saturating_sub(links_width));

        let shot = Target::Screenshot(index);
        let shot_style = if view.is_focused(&shot) {
            style.focused()
        } else {
            style.accent()
        };
        let mut spans = vec![
            Span::raw(margin.clone()),
            Span::styled("│ ", border),
            Span::styled(tags_text, style.muted()),
            Span::styled(open_link, style.accent()),
        ];
        let mut hotspots = vec![Hotspot::row(card.clone())];
        if let Some(link) = screenshot_link {
            let col = indent + 2 + inner.saturating_sub(links_width) + open_link.width() + 1;
            spans.push(Span::raw(" "));
            spans.push(Span::styled(link, shot_style));
            hotspots.push(Hotspot::span(col, link.width(), shot.clone()));
        }
        spans.push(Span::styled(" │", border));
        page.push(Line::from(spans), hotspots);

        // ╰────╯
        page.push(
            Line::from(vec![
                Span::raw(margin),
                Span::styled(format!("╰{}╯", "─".repeat(card_width - 2)), border),
            ]),
            vec![Hotspot::row(card.clone())],
        );
        page.blank();

        page.map.cards.push(CardBox {
            index,
            rows: start..start + CARD_HEIGHT - 1,
            cols: INDENT as u16..(INDENT + card_width) as u16,
        });
        page.map.focus_order.push(card);
        if project.screenshot.is_some() {
            page.map.focus_order.push(shot);
        }
    }
}

fn skills_section(page: &mut PageBuilder, view: &PageView, width: usize, style: &SectionStyle) {
    // Filter controls on one row
    let mut spans = vec![Span::raw(" ".repeat(INDENT))];
    let mut hotspots = Vec::new();
    let mut col = INDENT;
    for control in view.filter.controls() {
        let target = Target::Filter(control.clone());
        let label = format!("[{}]", control);
        let label_style = if view.is_focused(&target) {
            style.focused()
        } else if view.filter.is_active_control(control) {
            Style::default()
                .fg(view.palette.bg)
                .bg(view.palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            style.text()
        };
        let label_width = label.width();
        hotspots.push(Hotspot::span(col, label_width, target.clone()));
        spans.push(Span::styled(label, label_style));
        spans.push(Span::raw(" "));
        col += label_width + 1;
        page.map.focus_order.push(target);
    }
    page.push(Line::from(spans), hotspots);
    page.blank();

    if view.visible_skills.is_empty() {
        page.push(
            Line::from(Span::styled(
                format!("{}No skills match '{}'", " ".repeat(INDENT), view.filter.active_filter()),
                style.muted(),
            )),
            Vec::new(),
        );
        return;
    }

    let name_width = view
        .visible_skills
        .iter()
        .filter_map(|&i| view.portfolio.skills.get(i))
        .map(|s| s.name.width())
        .max()
        .unwrap_or(0)
        .min(width / 3);

    for &index in &view.visible_skills {
        let Some(entry) = view.portfolio.skills.get(index) else {
            continue;
        };
        let target = Target::Skill(index);
        let focused = view.is_focused(&target);
        let fill = view.fills.get(index).copied().unwrap_or_default();
        let filled = fill.shown as usize * BAR_WIDTH / 100;

        let marker = if focused { "▶ " } else { "● " };
        let name_style = if focused { style.focused() } else { style.text() };

        page.push(
            Line::from(vec![
                Span::raw(" ".repeat(INDENT)),
                Span::styled(marker, style.accent()),
                Span::styled(pad(&entry.name, name_width), name_style),
                Span::raw("  "),
                Span::styled("█".repeat(filled), style.accent()),
                Span::styled("░".repeat(BAR_WIDTH - filled), style.muted()),
                Span::styled(format!(" {:>3}%  ", fill.shown), style.text()),
                Span::styled(entry.category.clone(), style.muted()),
            ]),
            vec![Hotspot::row(target.clone())],
        );
        page.map.skill_rows.push((index, page.row() - 1));
        page.map.focus_order.push(target);
    }
}

fn contact_section(page: &mut PageBuilder, view: &PageView, width: usize, style: &SectionStyle) {
    const LABEL_WIDTH: usize = 9;
    let value_width = width.saturating_sub(INDENT + LABEL_WIDTH + 4).max(8);

    for field in FormField::visible() {
        let target = Target::Field(field);
        let focused = view.is_focused(&target);
        let value = view.form.field(field);
        let shown = if focused {
            format!("{}_", tail(value, value_width.saturating_sub(1)))
        } else {
            truncate(value, value_width)
        };
        let value_style = if focused {
            style.focused()
        } else {
            style.text()
        };
        page.push(
            Line::from(vec![
                Span::raw(" ".repeat(INDENT)),
                Span::styled(pad(field.label(), LABEL_WIDTH), style.accent()),
                Span::styled("[", style.muted()),
                Span::styled(pad(&shown, value_width), value_style),
                Span::styled("]", style.muted()),
            ]),
            vec![Hotspot::row(target.clone())],
        );
        page.map.focus_order.push(target);
    }
    page.blank();

    // Buttons
    let send_label = if view.form.submit_enabled {
        "[ Send ]"
    } else {
        "[ Sending… ]"
    };
    let buttons = [
        (Target::Send, send_label),
        (Target::Clear, "[ Clear ]"),
        (Target::CopyEmail, "[ Copy email ]"),
    ];
    let mut spans = vec![Span::raw(" ".repeat(INDENT))];
    let mut hotspots = Vec::new();
    let mut col = INDENT;
    for (target, label) in buttons {
        let disabled = target == Target::Send && !view.form.submit_enabled;
        let label_style = if disabled {
            style.muted()
        } else if view.is_focused(&target) {
            style.focused()
        } else {
            style.accent()
        };
        hotspots.push(Hotspot::span(col, label.width(), target.clone()));
        spans.push(Span::styled(label, label_style));
        spans.push(Span::raw("  "));
        col += label.width() + 2;
        page.map.focus_order.push(target);
    }
    page.push(Line::from(spans), hotspots);

    // Status
    let status_line = match &view.form.status {
        Some(status) => {
            let color = match status.tone {
                StatusTone::Info => view.palette.fg,
                StatusTone::Success => view.palette.success,
                StatusTone::Warning => view.palette.warning,
            };
            Line::from(Span::styled(
                format!("{}{}", " ".repeat(INDENT), status.text),
                Style::default().fg(color),
            ))
        }
        None => Line::from(""),
    };
    page.push(status_line, Vec::new());

    let sent_line = match view.last_sent_at {
        Some(at) => Line::from(Span::styled(
            format!("{}Last message sent at {}", " ".repeat(INDENT), at.format("%H:%M:%S")),
            style.muted(),
        )),
        None => Line::from(Span::styled(
            format!("{}Or write to {}", " ".repeat(INDENT), view.portfolio.email),
            style.muted(),
        )),
    };
    page.push(sent_line, Vec::new());
}
