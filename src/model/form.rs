//! Contact form fields and submission state

use std::fmt;

pub const STATUS_SPAM: &str = "Spam detected, message blocked.";
pub const STATUS_INCOMPLETE: &str = "Please complete required fields.";
pub const STATUS_SENDING: &str = "Sending...";
pub const STATUS_SENT: &str = "Message sent, I will reply within 48 hours.";
pub const STATUS_COPIED: &str = "Email copied to clipboard";

/// Named form fields. `Company` is the honeypot and is never rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
    Company,
}

impl FormField {
    /// Fields a visitor can focus and type into
    pub fn visible() -> [FormField; 3] {
        [FormField::Name, FormField::Email, FormField::Message]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
            FormField::Company => "Company",
        }
    }
}

/// Submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormSubmissionState {
    #[default]
    Idle,
    Validating,
    Sending,
    Sent,
    Rejected,
}

impl fmt::Display for FormSubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormSubmissionState::Idle => "idle",
            FormSubmissionState::Validating => "validating",
            FormSubmissionState::Sending => "sending",
            FormSubmissionState::Sent => "sent",
            FormSubmissionState::Rejected => "rejected",
        };
        write!(f, "{}", name)
    }
}

/// How a status line is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormStatus {
    pub text: String,
    pub tone: StatusTone,
}

impl FormStatus {
    pub fn new(text: impl Into<String>, tone: StatusTone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// Result of validating the current field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Honeypot was filled in
    Spam,
    /// A required field is empty after trimming
    Incomplete,
    Valid(ContactMessage),
}

/// A validated message ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Field values plus submit-control and status state
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub company: String,
    pub state: FormSubmissionState,
    pub submit_enabled: bool,
    pub status: Option<FormStatus>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            company: String::new(),
            state: FormSubmissionState::Idle,
            submit_enabled: true,
            status: None,
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
            FormField::Company => &self.company,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
            FormField::Company => &mut self.company,
        }
    }

    /// Replace a field's value
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Honeypot first, then required fields
    pub fn validate(&self) -> Verdict {
        if !self.company.is_empty() {
            return Verdict::Spam;
        }
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Verdict::Incomplete;
        }
        Verdict::Valid(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    /// Empty every field, honeypot included
    pub fn reset_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.company.clear();
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.message.is_empty()
            && self.company.is_empty()
    }
}
