//! Model layer - page state without rendering concerns
//!
//! - `panel` - Non-exclusive overlay panels (project modals, lightbox, skill detail)
//! - `modal` - App-level dialog stack (help, quit, alerts)
//! - `theme` - Light/dark preference and palettes
//! - `skills` / `form` - Skills filter and contact form state
//! - `reveal` / `motion` - One-shot observers and decorative animation

pub mod content;
pub mod form;
pub mod modal;
pub mod motion;
pub mod panel;
pub mod reveal;
pub mod skills;
pub mod theme;
pub mod ui;

