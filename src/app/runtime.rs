use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;

use crate::domain::FormDocument;
use crate::form::{FormSession, FormValidator, ValidationErrors};
use crate::store::KeyValueStore;
use crate::ui::{self, UiContext};

use super::input::{KeyCommand, classify};
use super::options::UiOptions;
use super::status::StatusLine;
use super::terminal::TerminalGuard;

pub type SubmitHook = Box<dyn FnMut(&FormDocument)>;

pub(crate) struct App<S> {
    session: FormSession<S>,
    validator: FormValidator,
    options: UiOptions,
    status: StatusLine,
    errors: Option<ValidationErrors>,
    last_submitted: Option<FormDocument>,
    on_submit: Option<SubmitHook>,
    exit_armed: bool,
    should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(
        session: FormSession<S>,
        validator: FormValidator,
        options: UiOptions,
        on_submit: Option<SubmitHook>,
    ) -> Self {
        Self {
            session,
            validator,
            options,
            status: StatusLine::new(),
            errors: None,
            last_submitted: None,
            on_submit,
            exit_armed: false,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = TerminalGuard::new()?;
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(width, height) => {
                    terminal.resize(Rect::new(0, 0, width, height))?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn into_submitted(self) -> Option<FormDocument> {
        self.last_submitted
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let help = self.options.show_help.then_some(ui::HELP_TEXT);
        let dirty = self.session.state().is_dirty();
        ui::draw(
            frame,
            self.session.state_mut(),
            UiContext {
                messages: &self.options.messages,
                status: self.status.message(),
                help,
                dirty,
                errors: self.errors.as_ref(),
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match classify(&key) {
            KeyCommand::Submit => self.handle_submit(),
            KeyCommand::Quit => self.handle_exit(),
            KeyCommand::AddField => {
                self.session.add_field();
                self.errors = None;
                self.exit_armed = false;
                self.status.field_added(self.session.state().len());
            }
            KeyCommand::RemoveField => {
                let row = self.session.state().row;
                if self.session.remove_field(row) {
                    self.errors = None;
                    self.exit_armed = false;
                    self.status.field_removed(self.session.state().len());
                }
            }
            KeyCommand::NextCell => {
                self.session.state_mut().focus_next_cell();
                self.exit_armed = false;
            }
            KeyCommand::PrevCell => {
                self.session.state_mut().focus_prev_cell();
                self.exit_armed = false;
            }
            KeyCommand::NextRow => {
                self.session.state_mut().focus_next_row();
                self.exit_armed = false;
            }
            KeyCommand::PrevRow => {
                self.session.state_mut().focus_prev_row();
                self.exit_armed = false;
            }
            KeyCommand::ResetStatus => {
                self.exit_armed = false;
                self.status.ready();
            }
            KeyCommand::Edit(key) => self.handle_edit(&key),
            KeyCommand::None => {}
        }
    }

    fn handle_edit(&mut self, key: &KeyEvent) {
        if self.session.handle_edit_key(key) {
            // A stale issue snapshot would point at shifted content.
            self.errors = None;
            self.exit_armed = false;
            let state = self.session.state();
            let label = format!("{} (row {})", state.column.key(), state.row + 1);
            self.status.editing(&label);
        }
    }

    fn handle_submit(&mut self) {
        match self.session.submit(&self.validator) {
            Ok(doc) => {
                self.errors = None;
                self.exit_armed = false;
                self.status.set_raw(self.options.messages.submitted.clone());
                if let Some(hook) = &mut self.on_submit {
                    hook(&doc);
                }
                self.last_submitted = Some(doc);
            }
            Err(errors) => {
                self.status.issues_remaining(errors.issue_count());
                self.errors = Some(errors);
            }
        }
    }

    fn handle_exit(&mut self) {
        if self.options.confirm_exit && self.session.state().is_dirty() && !self.exit_armed {
            self.exit_armed = true;
            self.status.pending_exit();
            return;
        }
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldAttr, STORAGE_KEY};
    use crate::store::MemoryStore;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn app() -> App<MemoryStore> {
        let session = FormSession::load(MemoryStore::new(), STORAGE_KEY);
        let validator = FormValidator::new().expect("validator");
        App::new(session, validator, UiOptions::default(), None)
    }

    fn fill_valid(app: &mut App<MemoryStore>) {
        app.session.edit_field(0, FieldAttr::Name, "Age");
        app.session.edit_field(0, FieldAttr::Type, "number");
        app.session.edit_field(0, FieldAttr::Value, "30");
    }

    #[test]
    fn successful_submit_notifies_and_keeps_the_document() {
        let mut app = app();
        fill_valid(&mut app);
        app.handle_submit();
        assert!(app.errors.is_none());
        assert_eq!(app.status.message(), "Form submitted!");
        assert_eq!(
            app.last_submitted.as_ref().map(|doc| doc.fields.len()),
            Some(1)
        );
        assert!(!app.session.state().is_dirty());
    }

    #[test]
    fn failed_submit_collects_issues_and_skips_the_hook() {
        let seen = Rc::new(RefCell::new(0usize));
        let counter = Rc::clone(&seen);
        let session = FormSession::load(MemoryStore::new(), STORAGE_KEY);
        let validator = FormValidator::new().expect("validator");
        let mut app = App::new(
            session,
            validator,
            UiOptions::default(),
            Some(Box::new(move |_| *counter.borrow_mut() += 1)),
        );

        app.handle_submit();
        let errors = app.errors.as_ref().expect("blank row must fail");
        assert_eq!(errors.issue_count(), 2);
        assert_eq!(app.status.message(), "2 issue(s) remaining");
        assert_eq!(*seen.borrow(), 0);
        assert!(app.last_submitted.is_none());
    }

    #[test]
    fn submit_hook_sees_the_validated_document() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let session = FormSession::load(MemoryStore::new(), STORAGE_KEY);
        let validator = FormValidator::new().expect("validator");
        let mut app = App::new(
            session,
            validator,
            UiOptions::default(),
            Some(Box::new(move |doc: &FormDocument| {
                sink.borrow_mut().push(doc.clone())
            })),
        );
        fill_valid(&mut app);
        app.handle_submit();
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(seen.borrow()[0].fields[0].name, "Age");
    }

    #[test]
    fn editing_clears_a_stale_issue_snapshot() {
        let mut app = app();
        app.handle_submit();
        assert!(app.errors.is_some());
        let key = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::NONE);
        app.handle_edit(&key);
        assert!(app.errors.is_none());
    }

    #[test]
    fn quit_with_unsubmitted_changes_needs_confirmation() {
        let mut app = app();
        app.session.add_field();
        app.handle_exit();
        assert!(!app.should_quit, "first quit only arms the confirmation");
        assert_eq!(
            app.status.message(),
            "Unsubmitted changes. Press Ctrl+Q again to quit."
        );
        app.handle_exit();
        assert!(app.should_quit);
    }

    #[test]
    fn quit_on_a_clean_form_is_immediate() {
        let mut app = app();
        app.handle_exit();
        assert!(app.should_quit);
    }

    #[test]
    fn key_commands_drive_the_session() {
        let mut app = app();
        let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        app.handle_key(ctrl_n);
        assert_eq!(app.session.state().len(), 2);
        let ctrl_d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        app.handle_key(ctrl_d);
        assert_eq!(app.session.state().len(), 1);
    }
}
