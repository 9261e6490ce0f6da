//! Test utilities for TUI component testing.
//!
//! Provides a test terminal with fixed dimensions to render widgets and
//! compare the actual rendered text output.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
};

/// A fixed-size test terminal for rendering widgets and comparing output.
pub struct TestTerminal {
    pub buffer: Buffer,
    pub area: Rect,
}

impl TestTerminal {
    /// Create a test terminal with fixed width and height.
    pub fn new(width: u16, height: u16) -> Self {
        let area = Rect::new(0, 0, width, height);
        let buffer = Buffer::empty(area);
        Self { buffer, area }
    }

    /// Reset the buffer to empty state.
    pub fn clear(&mut self) {
        self.buffer = Buffer::empty(self.area);
    }

    /// Get the rendered terminal output as a string.
    /// Returns exactly what would appear on screen - each row is a line.
    pub fn render_to_string(&self) -> String {
        let mut lines = Vec::new();
        for y in 0..self.area.height {
            let mut line = String::new();
            for x in 0..self.area.width {
                let cell = self.buffer.cell(Position::new(x, y)).unwrap();
                let symbol = cell.symbol();
                // Empty cells are represented as space
                if symbol.is_empty() {
                    line.push(' ');
                } else {
                    line.push_str(symbol);
                }
            }
            // Trim trailing spaces for cleaner comparison
            lines.push(line.trim_end().to_string());
        }
        // Remove trailing empty lines
        while lines.last().map(|l| l.is_empty()).unwrap_or(false) {
            lines.pop();
        }
        lines.join("\n")
    }
}
