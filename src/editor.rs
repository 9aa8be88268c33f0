use crate::models::{Draft, Note};
use crate::store::{SettingsStore, THEME_KEY};

/// Owns the note collection, the draft, and the theme flag. Every state
/// change goes through one of the transition methods below; rendering
/// reads the fields and never mutates them.
pub struct NoteEditor<S: SettingsStore> {
    store: S,
    pub notes: Vec<Note>,
    pub draft: Draft,
    pub dark_mode: bool,
}

impl<S: SettingsStore> NoteEditor<S> {
    /// Reads the theme flag once. Anything but the literal `"true"` means
    /// light mode; the normalized value is written straight back so a
    /// missing or garbled entry becomes a clean `"false"`.
    pub fn new(store: S) -> NoteEditor<S> {
        let dark_mode = matches!(store.get(THEME_KEY).ok().flatten().as_deref(), Some("true"));
        let editor = NoteEditor {
            store,
            notes: Vec::new(),
            draft: Draft::default(),
            dark_mode,
        };
        editor.persist_theme();
        editor
    }

    /// Commits the draft: appends when composing, overwrites in place when
    /// editing. A draft whose trimmed title or content is empty is
    /// rejected without touching any state. Returns whether the draft was
    /// taken so the shell knows to leave the form.
    pub fn submit_draft(&mut self) -> bool {
        let title = self.draft.title.value();
        let content = self.draft.content.value();
        if title.trim().is_empty() || content.trim().is_empty() {
            return false;
        }

        let note = Note {
            title: title.to_string(),
            content: content.to_string(),
        };
        match self.draft.editing {
            Some(i) if i < self.notes.len() => self.notes[i] = note,
            _ => self.notes.push(note),
        }
        self.draft.reset();
        true
    }

    pub fn delete_note(&mut self, index: usize) {
        if index >= self.notes.len() {
            return;
        }
        self.notes.remove(index);

        // Keep the edit marker on the note it was set on; the typed draft
        // text survives as a composing-mode draft when that note is gone.
        match self.draft.editing {
            Some(i) if i == index => self.draft.editing = None,
            Some(i) if i > index => self.draft.editing = Some(i - 1),
            _ => {}
        }
    }

    pub fn begin_edit(&mut self, index: usize) {
        let Some(note) = self.notes.get(index) else {
            return;
        };
        self.draft.title = self.draft.title.clone().with_value(note.title.clone());
        self.draft.content = self.draft.content.clone().with_value(note.content.clone());
        self.draft.editing = Some(index);
    }

    /// Clears the draft back to composing mode for a fresh note.
    pub fn start_draft(&mut self) {
        self.draft.reset();
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.persist_theme();
    }

    /// The preference write has no user-visible acknowledgment; a storage
    /// failure is dropped rather than surfaced.
    fn persist_theme(&self) {
        let _ = self
            .store
            .set(THEME_KEY, if self.dark_mode { "true" } else { "false" });
    }
}
