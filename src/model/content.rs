//! Portfolio content shown on the page

use serde::{Deserialize, Serialize};

/// Everything the page displays
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub owner: String,
    #[serde(default)]
    pub role: String,
    pub email: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
}

/// A project card and its modal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Identifier shared by the card and its modal
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub details: String,
    /// Screenshot path, opened in the lightbox
    #[serde(default)]
    pub screenshot: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A skill chip with its category and fill level
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Target fill proportion, 0-100
    #[serde(default)]
    pub level: u8,
}

impl SkillEntry {
    pub fn level(&self) -> u8 {
        self.level.min(100)
    }
}

impl Portfolio {
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}
