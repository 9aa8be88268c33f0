mod app;
mod editor;
mod models;
mod store;
mod theme;
mod ui;

use crate::{app::App, editor::NoteEditor, store::Database};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let store = Database::new("jotter.db")?;
    let mut app = App::new(NoteEditor::new(store));
    ratatui::run(|t| app.run(t))?;

    Ok(())
}
