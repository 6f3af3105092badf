//! Double-buffered terminal output with diff flushing.

use std::io::{self, Write};
use std::panic;

use crossterm::{
    cursor, event, queue,
    style::{Attribute, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::{Buffer, Cell};
use crate::color::Rgb;
use crate::text::char_width;

/// Owns the terminal while the UI runs. Raw mode, the alternate screen and
/// mouse capture are undone on drop and from a panic hook.
pub struct Terminal {
    stdout: io::Stdout,
    current: Buffer,
    previous: Buffer,
    /// Forces a full repaint on the next draw (after resize).
    invalidated: bool,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = restore();
            original_hook(info);
        }));

        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        crossterm::execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        log::debug!("terminal opened at {}x{}", width, height);

        Ok(Self {
            stdout,
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
            invalidated: true,
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current.width(), self.current.height())
    }

    /// Clear the back buffer to `bg`, let `paint` fill it, and write the
    /// cells that changed since the last frame.
    pub fn draw<F>(&mut self, bg: Rgb, paint: F) -> io::Result<()>
    where
        F: FnOnce(&mut Buffer),
    {
        let (width, height) = terminal::size()?;
        if (width, height) != self.size() {
            log::debug!("terminal resized to {}x{}", width, height);
            self.current = Buffer::new(width, height);
            self.previous = Buffer::new(width, height);
            self.invalidated = true;
        }

        self.current.clear(bg);
        paint(&mut self.current);

        let full = std::mem::take(&mut self.invalidated);
        if full {
            queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        self.flush(full)?;
        std::mem::swap(&mut self.current, &mut self.previous);
        Ok(())
    }

    /// Write changed cells, or every cell when `full`.
    fn flush(&mut self, full: bool) -> io::Result<()> {
        let changes: Vec<(u16, u16, Cell)> = if full {
            self.current.iter().map(|(x, y, c)| (x, y, *c)).collect()
        } else {
            self.current
                .diff(&self.previous)
                .map(|(x, y, c)| (x, y, *c))
                .collect()
        };

        let mut last: Option<(u16, u16)> = None;
        let mut last_width: u16 = 1;
        let mut pen: Option<Cell> = None;

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in &changes {
            let (x, y) = (*x, *y);
            if cell.wide_continuation {
                continue;
            }

            let sequential = matches!(last, Some((lx, ly)) if ly == y && lx + last_width == x);
            if !sequential {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if pen.is_none_or(|p| p.fg != cell.fg) {
                queue!(self.stdout, SetForegroundColor(cell.fg.into()))?;
            }
            if pen.is_none_or(|p| p.bg != cell.bg) {
                queue!(self.stdout, SetBackgroundColor(cell.bg.into()))?;
            }
            if pen.is_none_or(|p| p.bold != cell.bold || p.dim != cell.dim) {
                // Bold and dim share NormalIntensity as their reset.
                queue!(self.stdout, SetAttribute(Attribute::NormalIntensity))?;
                if cell.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                if cell.dim {
                    queue!(self.stdout, SetAttribute(Attribute::Dim))?;
                }
            }
            pen = Some(*cell);

            write!(self.stdout, "{}", cell.char)?;

            last = Some((x, y));
            last_width = char_width(cell.char).max(1) as u16;
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = restore();
        log::debug!("terminal restored");
    }
}

fn restore() -> io::Result<()> {
    crossterm::execute!(
        io::stdout(),
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()
}
