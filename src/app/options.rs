use std::time::Duration;

use crate::domain::FieldAttr;

/// User-facing strings: labels, error messages, the submit notification.
///
/// Ships English defaults plus the Kazakh set the editor originally used.
/// Error messages are looked up by offending attribute since each attribute
/// carries exactly one rule.
#[derive(Debug, Clone)]
pub struct Messages {
    pub form_title: String,
    pub name_placeholder: String,
    pub value_placeholder: String,
    pub required_field: String,
    pub enter_value: String,
    pub choose_type: String,
    pub submitted: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            form_title: "Dynamic Form".to_string(),
            name_placeholder: "Name".to_string(),
            value_placeholder: "Value".to_string(),
            required_field: "this field is required".to_string(),
            enter_value: "enter a value".to_string(),
            choose_type: "choose one of text, number or email".to_string(),
            submitted: "Form submitted!".to_string(),
        }
    }
}

impl Messages {
    /// The strings of the original editor.
    pub fn kazakh() -> Self {
        Self {
            form_title: "Динамикалық форма".to_string(),
            name_placeholder: "Атау".to_string(),
            value_placeholder: "Мән".to_string(),
            required_field: "Бұл өріс міндетті".to_string(),
            enter_value: "Мәнді енгізіңіз".to_string(),
            submitted: "Форма жіберілді!".to_string(),
            ..Self::default()
        }
    }

    pub fn for_attr(&self, attr: FieldAttr) -> &str {
        match attr {
            FieldAttr::Name => &self.required_field,
            FieldAttr::Type => &self.choose_type,
            FieldAttr::Value => &self.enter_value,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiOptions {
    pub tick_rate: Duration,
    pub confirm_exit: bool,
    pub show_help: bool,
    pub messages: Messages,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            confirm_exit: true,
            show_help: true,
            messages: Messages::default(),
        }
    }
}

impl UiOptions {
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_confirm_exit(mut self, confirm: bool) -> Self {
        self.confirm_exit = confirm;
        self
    }

    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }
}
