//! External service interactions
//!
//! This module contains services for interacting with external systems:
//! - Preference storage (JSON file or memory)
//! - Portfolio content loading
//! - Background delivery of contact messages
//! - The system clipboard

pub mod clipboard;
pub mod content;
pub mod delivery;
pub mod preferences;

pub use clipboard::{Clipboard, SystemClipboard};
pub use content::{load_portfolio, sample_portfolio};
pub use delivery::DeliveryRunner;
pub use preferences::{JsonFileStore, MemoryStore, Preferences};
