use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, List, ListItem, Paragraph},
};

use crate::app::{App, FocusedInput, Screen};
use crate::theme::Theme;

pub fn draw(frame: &mut Frame, app: &App) {
    let theme = Theme::of(app.editor.dark_mode);

    // Backdrop first; everything else patches over it.
    frame.render_widget(
        Block::new().style(Style::new().bg(theme.bg).fg(theme.fg)),
        frame.area(),
    );

    match app.screen {
        Screen::List => render_list(frame, app, &theme),
        Screen::Form => render_form(frame, app, &theme),
    }
}

fn render_list(frame: &mut Frame, app: &App, theme: &Theme) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Percentage(30), Constraint::Min(1)])
        .split(frame.area());

    let inner_list_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Min(1), Constraint::Length(1)])
        .split(layout[0]);

    let block = Block::bordered().title("Notes").border_set(border::THICK);

    let notes_list_items = app.editor.notes.iter().enumerate().map(|(i, note)| {
        let style = if i == app.list_index {
            Style::new()
                .fg(theme.selection_fg)
                .bg(theme.selection_bg)
                .bold()
        } else {
            Style::new().bold()
        };

        ListItem::new(Line::from(note.title.as_str())).style(style)
    });
    let note_details = app
        .editor
        .notes
        .get(app.list_index)
        .map(|n| Paragraph::new(n.content.as_str()).block(Block::bordered()));

    let theme_icon = if app.editor.dark_mode { "☀" } else { "☾" };
    let help_message = Line::from_iter([
        key_hint("Esc/q", theme),
        filler(" exit, ", theme),
        key_hint("e", theme),
        filler(" edit, ", theme),
        key_hint("a", theme),
        filler(" add, ", theme),
        Span::styled("d", Style::new().fg(theme.danger).bold()),
        filler(" delete, ", theme),
        key_hint("t", theme),
        Span::styled(format!(" theme {theme_icon}"), Style::new().fg(theme.muted)),
    ])
    .centered();

    frame.render_widget(help_message, inner_list_layout[1]);
    frame.render_widget(
        List::new(notes_list_items).block(block),
        inner_list_layout[0],
    );
    frame.render_widget(note_details, layout[1]);
}

fn render_form(frame: &mut Frame, app: &App, theme: &Theme) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Max(4), Constraint::Min(1)])
        .split(frame.area());

    let inner_content_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Min(1), Constraint::Max(1)])
        .split(layout[1]);

    let mode_label = if app.editor.draft.editing.is_some() {
        "Update Note"
    } else {
        "Add Note"
    };
    let help_message = Line::from_iter([
        key_hint("Ctrl+S", theme),
        filler(" save, ", theme),
        key_hint("Tab", theme),
        filler(" switch input focus, ", theme),
        key_hint("Esc", theme),
        filler(" back.", theme),
    ])
    .centered();

    let mut title_input =
        Paragraph::new(app.editor.draft.title.value()).style(Style::new().bold());

    let mut content_input = Paragraph::new(app.editor.draft.content.value());
    let mut input_block = Block::bordered()
        .title("Title")
        .title_top(Line::from(mode_label).right_aligned());
    let mut content_block = Block::bordered().title("Content");

    match app.focused_input {
        FocusedInput::Title => {
            input_block = input_block.border_style(Style::new().fg(theme.accent));
            let width = layout[0].width.max(3) - 3;
            let scroll = app.editor.draft.title.visual_scroll(width as usize);
            title_input = title_input.scroll((0, scroll as u16));

            let x = app.editor.draft.title.visual_cursor().max(scroll) - scroll + 1;
            frame.set_cursor_position((layout[0].x + x as u16, layout[0].y + 1));
        }
        FocusedInput::Content => {
            content_block = content_block.border_style(Style::new().fg(theme.accent));
            let width = layout[1].width.max(3) - 3;
            let scroll = app.editor.draft.content.visual_scroll(width as usize);
            content_input = content_input.scroll((0, scroll as u16));

            let x = app.editor.draft.content.visual_cursor().max(scroll) - scroll + 1;
            frame.set_cursor_position((layout[1].x + x as u16, layout[1].y + 1));
        }
    }

    frame.render_widget(title_input.block(input_block), layout[0]);
    frame.render_widget(content_input.block(content_block), inner_content_layout[0]);
    frame.render_widget(help_message, inner_content_layout[1]);
}

fn key_hint<'a>(key: &'a str, theme: &Theme) -> Span<'a> {
    Span::styled(key, Style::new().fg(theme.accent).bold())
}

fn filler<'a>(text: &'a str, theme: &Theme) -> Span<'a> {
    Span::styled(text, Style::new().fg(theme.muted))
}
