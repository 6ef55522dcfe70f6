//! Application state definitions

use super::forms::ContactForm;
use super::submission::{Notice, SubmissionState};
use std::collections::VecDeque;

/// Menu section currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Contact,
    Whitepaper,
    DevDocs,
    Policy,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Contact,
        Section::Whitepaper,
        Section::DevDocs,
        Section::Policy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Contact => "Contact",
            Self::Whitepaper => "Whitepaper",
            Self::DevDocs => "Dev Docs",
            Self::Policy => "Policy",
        }
    }

    /// Function key that selects this section
    pub fn key_hint(&self) -> &'static str {
        match self {
            Self::Contact => "F1",
            Self::Whitepaper => "F2",
            Self::DevDocs => "F3",
            Self::Policy => "F4",
        }
    }

    /// Document opened in a popup when the section is selected
    pub fn link(&self) -> Option<&'static str> {
        match self {
            Self::Contact => None,
            Self::Whitepaper => Some("./static/whitepaper.html"),
            Self::DevDocs => Some("https://github.com/DegenVets/f2t/blob/gh-pages/docs/README.md"),
            Self::Policy => Some("./static/policy.html"),
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    pub section: Section,
    pub form: ContactForm,
    pub submission: SubmissionState,
    /// Modal notices, oldest first
    notices: VecDeque<Notice>,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(default_country_code: &str) -> Self {
        Self {
            section: Section::default(),
            form: ContactForm::new(default_country_code),
            submission: SubmissionState::default(),
            notices: VecDeque::new(),
            status_message: None,
        }
    }

    /// Queue a modal notice
    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    pub fn has_notice(&self) -> bool {
        !self.notices.is_empty()
    }

    /// The notice currently on screen
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }
}
