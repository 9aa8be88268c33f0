use ratatui::style::Color;

/// Render-time palette selected by the persisted dark mode flag. Applying
/// it to the whole drawing surface is what makes the flag visible.
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub danger: Color,
    pub selection_fg: Color,
    pub selection_bg: Color,
}

impl Theme {
    pub fn of(dark_mode: bool) -> Theme {
        if dark_mode {
            Theme::dark()
        } else {
            Theme::light()
        }
    }

    pub fn dark() -> Theme {
        Theme {
            bg: Color::Black,
            fg: Color::White,
            muted: Color::DarkGray,
            accent: Color::Yellow,
            danger: Color::Red,
            selection_fg: Color::Black,
            selection_bg: Color::White,
        }
    }

    pub fn light() -> Theme {
        Theme {
            bg: Color::White,
            fg: Color::Black,
            muted: Color::Gray,
            accent: Color::Blue,
            danger: Color::Red,
            selection_fg: Color::White,
            selection_bg: Color::Black,
        }
    }
}
