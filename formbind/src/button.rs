//! Push button widget.

use termcell::text::display_width;
use termcell::{Buffer, Event, Key, Pen, Rect};

use crate::theme::Theme;

/// A bordered push button. Activated by Enter or Space while focused, or by
/// a click anywhere on it.
#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    rect: Option<Rect>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            rect: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Columns needed to draw the whole label with its border and padding.
    pub fn width(&self) -> u16 {
        display_width(&self.label) as u16 + 4
    }

    /// Where the button was last drawn.
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.rect.is_some_and(|r| r.contains(x, y))
    }

    /// Returns true if the event activates the button.
    pub fn handle(&self, event: &Event, focused: bool) -> bool {
        match *event {
            Event::Key { key, modifiers } => {
                focused && modifiers.none() && matches!(key, Key::Enter | Key::Char(' '))
            }
            Event::Click { x, y, .. } => self.contains(x, y),
            _ => false,
        }
    }

    /// Draw at the top-left of `area`, three rows high.
    pub fn render(&mut self, buf: &mut Buffer, area: Rect, theme: &Theme, focused: bool) {
        let rect = Rect::new(area.x, area.y, self.width().min(area.width), area.height.min(3));
        self.rect = Some(rect);

        let border = if focused { theme.accent } else { theme.muted };
        buf.draw_box(rect, border, theme.surface);

        let inner = rect.inner();
        let pen = if focused {
            Pen::new(theme.accent, theme.surface).bold()
        } else {
            Pen::new(theme.text, theme.surface)
        };
        buf.put_str(inner.x + 1, inner.y, &self.label, pen, inner.right());
    }
}
