use ratatui::prelude::Color;
use ratatui::style::Style;

/// Fixed visual theme for the chart: light background, dark text, dim grid
/// and axis lines. Not user adjustable.
#[derive(Clone)]
pub struct Theme {
    pub text: Color,
    pub bg: Color,
    pub grid: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Color::Black,
            bg: Color::White,
            grid: Color::Rgb(0xee, 0xee, 0xee),
        }
    }
}

impl From<&Theme> for Style {
    fn from(theme: &Theme) -> Self {
        Style::default().bg(theme.bg).fg(theme.text)
    }
}

impl Theme {
    pub fn grid_style(&self) -> Style {
        Style::default().bg(self.bg).fg(self.grid)
    }
}
