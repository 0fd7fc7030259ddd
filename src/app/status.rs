#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

pub const READY_STATUS: &str = "Ready. Ctrl+N adds a field, Ctrl+S submits.";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_raw(&mut self, msg: impl Into<String>) {
        self.message = msg.into();
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn editing(&mut self, label: &str) {
        self.message = format!("Editing {label}");
    }

    pub fn field_added(&mut self, count: usize) {
        self.message = format!("Field added ({count} total)");
    }

    pub fn field_removed(&mut self, count: usize) {
        self.message = format!("Field removed ({count} left)");
    }

    pub fn issues_remaining(&mut self, count: usize) {
        self.message = format!("{count} issue(s) remaining");
    }

    pub fn pending_exit(&mut self) {
        self.message = "Unsubmitted changes. Press Ctrl+Q again to quit.".to_string();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
