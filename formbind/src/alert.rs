//! Blocking alert dialog.

use log::debug;
use termcell::text::{display_width, truncate};
use termcell::{Buffer, Event, Key, Pen, Rect};

use crate::button::Button;
use crate::theme::Theme;

/// Result of routing an event to an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertOutcome {
    /// Still showing; the event was swallowed.
    Open,
    /// The user acknowledged the alert.
    Dismissed,
}

/// A modal message with a single OK button.
///
/// While an alert is up its host sends every event here and nowhere else.
#[derive(Debug, Clone)]
pub struct Alert {
    message: String,
    ok: Button,
}

impl Alert {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ok: Button::new("OK"),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn handle(&self, event: &Event) -> AlertOutcome {
        let dismissed = match *event {
            Event::Key { key, .. } => matches!(key, Key::Enter | Key::Escape | Key::Char(' ')),
            Event::Click { .. } => self.ok.handle(event, true),
            _ => false,
        };
        if dismissed {
            debug!("Alert dismissed");
            AlertOutcome::Dismissed
        } else {
            AlertOutcome::Open
        }
    }

    /// Dim everything already drawn and draw the dialog centered on top.
    pub fn render(&mut self, buf: &mut Buffer, theme: &Theme) {
        buf.dim(theme.backdrop_dim);

        let lines: Vec<&str> = self.message.lines().collect();
        let text_width = lines.iter().map(|l| display_width(l)).max().unwrap_or(0) as u16;
        // Border and two columns of padding on each side.
        let width = text_width.max(self.ok.width()).max(16) + 6;
        // Border, blank, text, blank, button.
        let height = lines.len() as u16 + 7;
        let dialog = buf.area().centered(width, height);
        buf.draw_box(dialog, theme.ring, theme.surface);

        let inner = dialog.shrink(3, 2);
        let pen = Pen::new(theme.text, theme.surface);
        for (i, line) in lines.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.bottom() {
                break;
            }
            let line = truncate(line, inner.width as usize);
            buf.put_str(inner.x, y, &line, pen, inner.right());
        }

        let ok_x = dialog.right().saturating_sub(self.ok.width() + 3);
        let ok_y = dialog.bottom().saturating_sub(4);
        let ok_area = Rect::new(ok_x, ok_y, self.ok.width(), 3).intersect(dialog);
        self.ok.render(buf, ok_area, theme, true);
    }
}
