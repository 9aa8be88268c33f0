use tui_input::Input;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Note {
    pub title: String,
    pub content: String,
}

/// The in-progress title/content pair. `editing` marks the position the
/// draft was copied from; `None` means submitting will append.
#[derive(Default)]
pub struct Draft {
    pub title: Input,
    pub content: Input,
    pub editing: Option<usize>,
}

impl Draft {
    pub fn reset(&mut self) {
        self.title.reset();
        self.content.reset();
        self.editing = None;
    }
}
