use anyhow::Result;

use crate::domain::{FormDocument, STORAGE_KEY};
use crate::form::{FormSession, FormValidator};
use crate::store::{KeyValueStore, MemoryStore};

use super::options::UiOptions;
use super::runtime::{App, SubmitHook};

/// Entry point for embedding the editor.
///
/// ```no_run
/// use dynform::{FileStore, FormEditor};
///
/// # fn main() -> anyhow::Result<()> {
/// let submitted = FormEditor::new()
///     .with_store(FileStore::open("/tmp/dynform.json"))
///     .on_submit(|doc| println!("{} field(s) submitted", doc.fields.len()))
///     .run()?;
/// # let _ = submitted;
/// # Ok(())
/// # }
/// ```
pub struct FormEditor<S = MemoryStore> {
    store: S,
    key: String,
    options: UiOptions,
    on_submit: Option<SubmitHook>,
}

impl FormEditor<MemoryStore> {
    /// An editor over a fresh in-memory store. Swap the store with
    /// [`FormEditor::with_store`] for anything persistent.
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(),
            key: STORAGE_KEY.to_string(),
            options: UiOptions::default(),
            on_submit: None,
        }
    }
}

impl Default for FormEditor<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: KeyValueStore> FormEditor<S> {
    pub fn with_store<T: KeyValueStore>(self, store: T) -> FormEditor<T> {
        FormEditor {
            store,
            key: self.key,
            options: self.options,
            on_submit: self.on_submit,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    /// Called with the validated document after every successful submission.
    pub fn on_submit(mut self, hook: impl FnMut(&FormDocument) + 'static) -> Self {
        self.on_submit = Some(Box::new(hook));
        self
    }

    /// Run the editor until the user quits. Returns the last successfully
    /// submitted document, if any.
    pub fn run(self) -> Result<Option<FormDocument>> {
        let validator = FormValidator::new()?;
        let session = FormSession::load(self.store, self.key);
        let mut app = App::new(session, validator, self.options, self.on_submit);
        app.run()?;
        Ok(app.into_submitted())
    }
}
