use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::{FieldAttr, FieldEntry, FieldType, FormDocument};

/// The editable form: ordered rows plus the focus the UI moves around.
///
/// All mutations here are pure in-memory operations; persistence is layered
/// on top by the session so the state stays testable without a store or a
/// terminal.
#[derive(Debug, Clone)]
pub struct FormState {
    pub entries: Vec<FieldEntry>,
    pub row: usize,
    pub column: FieldAttr,
    pub scroll_offset: usize,
    dirty: bool,
}

impl FormState {
    pub fn from_document(doc: FormDocument) -> Self {
        let mut state = Self {
            entries: doc.fields,
            row: 0,
            column: FieldAttr::Name,
            scroll_offset: 0,
            dirty: false,
        };
        state.normalize_focus();
        state
    }

    pub fn to_document(&self) -> FormDocument {
        FormDocument {
            fields: self.entries.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn focused_entry(&self) -> Option<&FieldEntry> {
        self.entries.get(self.row)
    }

    /// Append a blank row and move focus onto it.
    pub fn add_field(&mut self) {
        self.entries.push(FieldEntry::blank());
        self.row = self.entries.len() - 1;
        self.column = FieldAttr::Name;
        self.dirty = true;
    }

    /// Remove the row at `index`. Out-of-range indices are a no-op.
    pub fn remove_field(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        self.entries.remove(index);
        self.dirty = true;
        self.normalize_focus();
        true
    }

    /// Replace one attribute of the row at `index` verbatim. Nothing is
    /// validated here; that happens at submit time.
    pub fn edit_field(&mut self, index: usize, attr: FieldAttr, new_value: &str) -> bool {
        let Some(entry) = self.entries.get_mut(index) else {
            return false;
        };
        *entry.attr_mut(attr) = new_value.to_string();
        self.dirty = true;
        true
    }

    /// Route a key into the focused cell. Text cells take typed characters,
    /// the type cell cycles through the enum with Left/Right.
    pub fn handle_edit_key(&mut self, key: &KeyEvent) -> bool {
        match self.column {
            FieldAttr::Type => match key.code {
                KeyCode::Left => self.cycle_type(-1),
                KeyCode::Right => self.cycle_type(1),
                _ => false,
            },
            FieldAttr::Name | FieldAttr::Value => self.handle_text_key(key),
        }
    }

    fn handle_text_key(&mut self, key: &KeyEvent) -> bool {
        let column = self.column;
        let Some(entry) = self.entries.get_mut(self.row) else {
            return false;
        };
        let buffer = entry.attr_mut(column);
        let changed = match key.code {
            KeyCode::Char(ch) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return false;
                }
                buffer.push(ch);
                true
            }
            KeyCode::Backspace => buffer.pop().is_some(),
            KeyCode::Delete => {
                if buffer.is_empty() {
                    false
                } else {
                    buffer.clear();
                    true
                }
            }
            _ => false,
        };
        if changed {
            self.dirty = true;
        }
        changed
    }

    fn cycle_type(&mut self, delta: i32) -> bool {
        let Some(entry) = self.entries.get_mut(self.row) else {
            return false;
        };
        let len = FieldType::ALL.len() as i32;
        let current = FieldType::ALL
            .iter()
            .position(|kind| kind.as_str() == entry.kind)
            .unwrap_or(0) as i32;
        let next = ((current + delta) % len + len) % len;
        let selected = FieldType::ALL[next as usize];
        if entry.kind == selected.as_str() {
            return false;
        }
        entry.kind = selected.as_str().to_string();
        self.dirty = true;
        true
    }

    pub fn focus_next_cell(&mut self) {
        match self.column {
            FieldAttr::Name => self.column = FieldAttr::Type,
            FieldAttr::Type => self.column = FieldAttr::Value,
            FieldAttr::Value => {
                self.column = FieldAttr::Name;
                self.focus_next_row();
            }
        }
    }

    pub fn focus_prev_cell(&mut self) {
        match self.column {
            FieldAttr::Value => self.column = FieldAttr::Type,
            FieldAttr::Type => self.column = FieldAttr::Name,
            FieldAttr::Name => {
                self.column = FieldAttr::Value;
                self.focus_prev_row();
            }
        }
    }

    pub fn focus_next_row(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.row = (self.row + 1) % self.entries.len();
    }

    pub fn focus_prev_row(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.row = self
            .row
            .checked_sub(1)
            .unwrap_or(self.entries.len().saturating_sub(1));
    }

    fn normalize_focus(&mut self) {
        if self.entries.is_empty() {
            self.row = 0;
            self.scroll_offset = 0;
            return;
        }
        if self.row >= self.entries.len() {
            self.row = self.entries.len() - 1;
        }
    }
}
