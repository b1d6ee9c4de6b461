//! Page structure shared by layout, rendering and the reveal observer

/// Top-level page sections, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub fn all() -> [Section; 4] {
        [
            Section::About,
            Section::Projects,
            Section::Skills,
            Section::Contact,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    /// Number key that jumps to this section
    pub fn shortcut(&self) -> char {
        match self {
            Section::About => '1',
            Section::Projects => '2',
            Section::Skills => '3',
            Section::Contact => '4',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Section> {
        Section::all().into_iter().find(|s| s.shortcut() == c)
    }
}
