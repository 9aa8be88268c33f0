use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::DefaultTerminal;
use tui_input::backend::crossterm::EventHandler;

use crate::editor::NoteEditor;
use crate::store::Database;
use crate::ui;

pub enum Screen {
    List,
    Form,
}

pub enum FocusedInput {
    Title,
    Content,
}

/// The interactive shell: screen and focus state plus the key map. All
/// note and theme state lives in the editor.
pub struct App {
    pub editor: NoteEditor<Database>,
    pub screen: Screen,
    pub list_index: usize,
    pub focused_input: FocusedInput,
}

impl App {
    pub fn new(editor: NoteEditor<Database>) -> App {
        App {
            editor,
            screen: Screen::List,
            list_index: 0,
            focused_input: FocusedInput::Title,
        }
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> std::io::Result<()> {
        loop {
            terminal.draw(|f| ui::draw(f, self))?;
            let event = crossterm::event::read()?;

            if let crossterm::event::Event::Key(key) = event {
                match self.screen {
                    Screen::List => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => {
                            return Ok(());
                        }
                        KeyCode::Char('j') | KeyCode::Down => self.select_next(),
                        KeyCode::Char('k') | KeyCode::Up => self.select_previous(),
                        KeyCode::Enter | KeyCode::Char('e') => self.edit_selected(),
                        KeyCode::Char('a') => {
                            self.editor.start_draft();
                            self.focused_input = FocusedInput::Title;
                            self.screen = Screen::Form;
                        }
                        KeyCode::Char('d') => self.delete_selected(),
                        KeyCode::Char('t') => self.editor.toggle_theme(),
                        _ => {}
                    },
                    Screen::Form => match (key.modifiers, key.code) {
                        (KeyModifiers::CONTROL, KeyCode::Char('s')) => self.submit(),
                        (_, KeyCode::Tab) => self.toggle_input(),
                        (_, KeyCode::Esc) => self.screen = Screen::List,
                        _ => {
                            match self.focused_input {
                                FocusedInput::Title => {
                                    self.editor.draft.title.handle_event(&event);
                                }
                                FocusedInput::Content => {
                                    self.editor.draft.content.handle_event(&event);
                                }
                            };
                        }
                    },
                }
            }
        }
    }

    /// A rejected draft keeps the form open with nothing to announce; an
    /// accepted one lands the selection on the note that was written.
    fn submit(&mut self) {
        let target = self.editor.draft.editing;
        if self.editor.submit_draft() {
            self.list_index = target.unwrap_or(self.editor.notes.len() - 1);
            self.screen = Screen::List;
        }
    }

    fn select_next(&mut self) {
        if self.editor.notes.is_empty() {
            return;
        }
        if self.list_index == self.editor.notes.len() - 1 {
            self.list_index = 0;
        } else {
            self.list_index += 1;
        }
    }

    fn select_previous(&mut self) {
        if self.editor.notes.is_empty() {
            return;
        }
        if self.list_index == 0 {
            self.list_index = self.editor.notes.len() - 1;
        } else {
            self.list_index -= 1;
        }
    }

    fn edit_selected(&mut self) {
        if self.editor.notes.is_empty() {
            return;
        }
        self.editor.begin_edit(self.list_index);
        self.focused_input = FocusedInput::Title;
        self.screen = Screen::Form;
    }

    fn delete_selected(&mut self) {
        self.editor.delete_note(self.list_index);
        if self.list_index >= self.editor.notes.len() {
            self.list_index = self.editor.notes.len().saturating_sub(1);
        }
    }

    fn toggle_input(&mut self) {
        self.focused_input = match self.focused_input {
            FocusedInput::Title => FocusedInput::Content,
            FocusedInput::Content => FocusedInput::Title,
        };
    }
}
