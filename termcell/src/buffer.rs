use crate::color::Rgb;
use crate::rect::Rect;
use crate::text::char_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
    /// Second column of a wide character; never written to the terminal.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: Rgb::WHITE,
            bg: Rgb::BLACK,
            bold: false,
            dim: false,
            wide_continuation: false,
        }
    }
}

/// Colors and weight used when writing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pen {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Pen {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| (y as usize) * (self.width as usize) + (x as usize))
    }

    /// Reset every cell to a blank with the given background.
    pub fn clear(&mut self, bg: Rgb) {
        self.cells.fill(Cell {
            bg,
            ..Cell::default()
        });
    }

    /// Blank out `rect` with the given background.
    pub fn fill(&mut self, rect: Rect, bg: Rgb) {
        let rect = rect.intersect(self.area());
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.set(
                    x,
                    y,
                    Cell {
                        bg,
                        ..Cell::default()
                    },
                );
            }
        }
    }

    /// Write `text` starting at `(x, y)`, stopping at `max_x` or the buffer
    /// edge. Returns the number of columns written.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, pen: Pen, max_x: u16) -> u16 {
        let limit = max_x.min(self.width);
        let mut col = x;
        for ch in text.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if col + w > limit {
                break;
            }
            self.set(
                col,
                y,
                Cell {
                    char: ch,
                    fg: pen.fg,
                    bg: pen.bg,
                    bold: pen.bold,
                    dim: false,
                    wide_continuation: false,
                },
            );
            for extra in 1..w {
                self.set(
                    col + extra,
                    y,
                    Cell {
                        char: ' ',
                        fg: pen.fg,
                        bg: pen.bg,
                        bold: pen.bold,
                        dim: false,
                        wide_continuation: true,
                    },
                );
            }
            col += w;
        }
        col - x
    }

    /// Fill `rect` with `bg` and draw a rounded border around its edge.
    pub fn draw_box(&mut self, rect: Rect, border: Rgb, bg: Rgb) {
        if rect.width < 2 || rect.height < 2 {
            self.fill(rect, bg);
            return;
        }
        self.fill(rect, bg);

        let pen = Pen::new(border, bg);
        let right = rect.right() - 1;
        let bottom = rect.bottom() - 1;
        let horizontal = "─".repeat(rect.width as usize - 2);

        self.put_str(rect.x, rect.y, "╭", pen, rect.right());
        self.put_str(rect.x + 1, rect.y, &horizontal, pen, right);
        self.put_str(right, rect.y, "╮", pen, rect.right());
        for y in rect.y + 1..bottom {
            self.put_str(rect.x, y, "│", pen, rect.right());
            self.put_str(right, y, "│", pen, rect.right());
        }
        self.put_str(rect.x, bottom, "╰", pen, rect.right());
        self.put_str(rect.x + 1, bottom, &horizontal, pen, right);
        self.put_str(right, bottom, "╯", pen, rect.right());
    }

    /// Darken every cell, as a backdrop behind a modal.
    pub fn dim(&mut self, amount: f32) {
        for cell in &mut self.cells {
            cell.fg = cell.fg.dim(amount);
            cell.bg = cell.bg.dim(amount);
        }
    }

    /// Copy the cells of `rect`, row by row.
    pub fn snapshot(&self, rect: Rect) -> Vec<Cell> {
        let rect = rect.intersect(self.area());
        let mut out = Vec::with_capacity(rect.width as usize * rect.height as usize);
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                if let Some(cell) = self.get(x, y) {
                    out.push(*cell);
                }
            }
        }
        out
    }

    /// Blend what is currently drawn in `rect` over `under` (a snapshot of
    /// the same rect taken before drawing). At `opacity` 0.0 the snapshot is
    /// restored; at 1.0 the drawn cells are left untouched.
    pub fn fade_over(&mut self, rect: Rect, under: &[Cell], opacity: f32) {
        let rect = rect.intersect(self.area());
        if opacity >= 1.0 {
            return;
        }
        let mut below = under.iter();
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                let (Some(base), Some(cell)) = (below.next(), self.get_mut(x, y)) else {
                    return;
                };
                if opacity <= 0.0 {
                    *cell = *base;
                    continue;
                }
                cell.fg = base.bg.lerp(cell.fg, opacity);
                cell.bg = base.bg.lerp(cell.bg, opacity);
            }
        }
    }

    /// Text of row `y` with wide-character continuations skipped.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect()
    }

    /// Every cell with its coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16, &Cell)> {
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let x = (i % self.width as usize) as u16;
            let y = (i / self.width as usize) as u16;
            (x, y, cell)
        })
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }
}
