//! App-level dialogs
//!
//! Help and quit confirmation sit above every page panel and take input
//! exclusively while shown, so they live on a stack rather than in the
//! non-exclusive [`super::panel::PanelSet`].

/// A dialog drawn over the whole page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// Quit confirmation
    QuitConfirm,
    /// Keyboard shortcut reference
    Help,
    /// Generic user-facing alert, dismissed with Enter/Esc
    Alert(String),
}

/// A stack of dialogs; only the top one receives input
#[derive(Debug, Default)]
pub struct DialogStack {
    stack: Vec<Dialog>,
}

impl DialogStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, dialog: Dialog) {
        self.stack.push(dialog);
    }

    pub fn pop(&mut self) -> Option<Dialog> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Dialog> {
        self.stack.last()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_stack_push_pop() {
        let mut stack = DialogStack::new();
        assert!(stack.top().is_none());

        stack.push(Dialog::Help);
        stack.push(Dialog::QuitConfirm);
        assert_eq!(stack.top(), Some(&Dialog::QuitConfirm));

        assert_eq!(stack.pop(), Some(Dialog::QuitConfirm));
        assert_eq!(stack.pop(), Some(Dialog::Help));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_alert_carries_message() {
        let mut stack = DialogStack::new();
        stack.push(Dialog::Alert("Could not copy".to_string()));
        assert_eq!(stack.top(), Some(&Dialog::Alert("Could not copy".to_string())));
    }
}
