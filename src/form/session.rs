use crossterm::event::KeyEvent;

use crate::domain::{FieldAttr, FormDocument};
use crate::store::KeyValueStore;

use super::state::FormState;
use super::validation::FormValidator;
use super::ValidationErrors;

/// An editing session: the form state wired to its store.
///
/// Every mutating operation writes the whole serialized document through the
/// store before returning, valid or not — live edits persist, only submission
/// additionally requires validity. Store failures are logged and do not
/// interrupt editing.
#[derive(Debug)]
pub struct FormSession<S> {
    store: S,
    key: String,
    state: FormState,
}

impl<S: KeyValueStore> FormSession<S> {
    /// Hydrate from the store, silently falling back to the default document
    /// when the key is absent or holds something unparsable.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let doc = match store.get(&key) {
            Some(raw) => match FormDocument::parse(&raw) {
                Ok(doc) => doc,
                Err(err) => {
                    tracing::debug!(%err, key = %key, "discarding unparsable persisted form");
                    FormDocument::default()
                }
            },
            None => {
                tracing::debug!(key = %key, "no persisted form, starting from the default");
                FormDocument::default()
            }
        };
        Self {
            store,
            key,
            state: FormState::from_document(doc),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Mutable access for focus and scroll only; entry mutations must go
    /// through the session so they persist.
    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn add_field(&mut self) {
        self.state.add_field();
        self.persist();
    }

    pub fn remove_field(&mut self, index: usize) -> bool {
        let removed = self.state.remove_field(index);
        if removed {
            self.persist();
        }
        removed
    }

    pub fn edit_field(&mut self, index: usize, attr: FieldAttr, new_value: &str) -> bool {
        let changed = self.state.edit_field(index, attr, new_value);
        if changed {
            self.persist();
        }
        changed
    }

    pub fn handle_edit_key(&mut self, key: &KeyEvent) -> bool {
        let changed = self.state.handle_edit_key(key);
        if changed {
            self.persist();
        }
        changed
    }

    /// Validate and, on success, persist and hand back the validated
    /// document. A failed submit adds no write beyond the live ones already
    /// performed.
    pub fn submit(&mut self, validator: &FormValidator) -> Result<FormDocument, ValidationErrors> {
        let doc = self.state.to_document();
        validator.validate(&doc)?;
        self.persist();
        self.state.mark_clean();
        tracing::info!(rows = doc.fields.len(), "form submitted");
        Ok(doc)
    }

    fn persist(&mut self) {
        let doc = self.state.to_document();
        match doc.to_json_string() {
            Ok(raw) => match self.store.set(&self.key, &raw) {
                Ok(()) => tracing::debug!(key = %self.key, bytes = raw.len(), "persisted form"),
                Err(err) => tracing::warn!(%err, key = %self.key, "failed to persist form"),
            },
            Err(err) => tracing::warn!(%err, "failed to serialize form"),
        }
    }
}
