//! Button descriptors, row-grouped keyboards, and outbound message bodies.

/// What pressing a button does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    /// Opens an external link.
    ExternalLink(String),
    /// Launches the embedded mini-application at this URL.
    EmbeddedApp(String),
    /// Produces a callback trigger carrying this id.
    Callback(String),
    /// Shown but does nothing useful; rendered by transports as a callback no route answers.
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub action: ButtonAction,
}

impl Button {
    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::ExternalLink(url.into()),
        }
    }

    pub fn app(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::EmbeddedApp(url.into()),
        }
    }

    pub fn callback(label: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Callback(id.into()),
        }
    }

    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Placeholder,
        }
    }
}

/// Ordered rows of buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row; empty rows are dropped.
    pub fn add_row(&mut self, row: Vec<Button>) -> &mut Self {
        if !row.is_empty() {
            self.rows.push(row);
        }
        self
    }
}

/// Text (HTML subset) plus optional keyboard, ready to hand to a [`crate::Bot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub text: String,
    pub keyboard: Option<Keyboard>,
    pub disable_link_preview: bool,
}

impl OutboundMessage {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
            disable_link_preview: false,
        }
    }

    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }

    pub fn without_link_preview(mut self) -> Self {
        self.disable_link_preview = true;
        self
    }
}
