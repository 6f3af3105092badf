//! Listbox widget - a controlled dropdown over a fixed option list.
//!
//! The widget never owns the selected value. It receives a [`Field`] (value
//! plus `on_change`) on every call and keeps only what is purely visual in
//! [`ListboxState`]: whether the list is shown, which row is highlighted,
//! the scroll offset and the rects it was last drawn at.
//!
//! ```text
//!            activate                 select (on_change) / dismiss
//!   Closed ───────────▶ Open ────────────────────────────────────▶ Closing
//!     ▲                   ▲                                          │
//!     │                   └──────────── activate ────────────────────┤
//!     └───────────────────────────── fade done ──────────────────────┘
//! ```

use std::ptr;
use std::time::{Duration, Instant};

use log::debug;
use termcell::text::truncate;
use termcell::{Buffer, Easing, Event, Fade, Key, Pen, Rect};

use crate::controller::Field;
use crate::theme::Theme;

/// Type-ahead input older than this starts a new search.
const SEARCH_TIMEOUT: Duration = Duration::from_millis(350);

/// Something a listbox can show as a row.
pub trait Choice {
    fn label(&self) -> &str;
}

/// Visibility of the option list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Closed,
    Open,
    /// Fading out; still drawn, no longer selectable.
    Closing(Fade),
}

/// Listbox behavior and sizing.
#[derive(Debug, Clone)]
pub struct ListboxConfig {
    /// Exit fade length. Zero closes immediately.
    pub fade: Duration,
    pub easing: Easing,
    /// Skip the exit fade entirely.
    pub reduced_motion: bool,
    /// Option rows shown before the panel scrolls.
    pub max_visible: u16,
    /// Button text when nothing is selected.
    pub placeholder: String,
}

impl Default for ListboxConfig {
    fn default() -> Self {
        Self {
            fade: Duration::from_millis(100),
            easing: Easing::EaseIn,
            reduced_motion: false,
            max_visible: 8,
            placeholder: "Select...".into(),
        }
    }
}

impl ListboxConfig {
    pub fn fade(mut self, duration: Duration, easing: Easing) -> Self {
        self.fade = duration;
        self.easing = easing;
        self
    }

    pub fn reduced_motion(mut self, enabled: bool) -> Self {
        self.reduced_motion = enabled;
        self
    }

    pub fn max_visible(mut self, rows: u16) -> Self {
        self.max_visible = rows.max(1);
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }
}

/// Which row to highlight when opening with nothing selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenFrom {
    First,
    Last,
}

/// The visual state of one listbox.
#[derive(Debug, Clone, Default)]
pub struct ListboxState {
    config: ListboxConfig,
    phase: Phase,
    active: Option<usize>,
    scroll: usize,
    /// Option rows that fit on screen at the last render.
    fitted_rows: Option<usize>,
    search: String,
    last_search: Option<Instant>,
    button_rect: Option<Rect>,
    panel_rect: Option<Rect>,
}

impl ListboxState {
    pub fn new(config: ListboxConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &ListboxConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True only while options can be picked.
    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    /// True while the option list is drawn (open or fading out).
    pub fn is_visible(&self) -> bool {
        self.phase != Phase::Closed
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Closing(_))
    }

    /// Highlighted row, if any.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// First option row currently scrolled into view.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Where the button was last drawn.
    pub fn button_rect(&self) -> Option<Rect> {
        self.button_rect
    }

    /// Where the option panel was last drawn, border included.
    pub fn panel_rect(&self) -> Option<Rect> {
        self.panel_rect
    }

    fn open(&mut self, selected: Option<usize>, from: OpenFrom, len: usize) {
        self.phase = Phase::Open;
        self.search.clear();
        self.last_search = None;
        self.active = selected.or(match from {
            _ if len == 0 => None,
            OpenFrom::First => Some(0),
            OpenFrom::Last => Some(len - 1),
        });
        self.scroll = 0;
        self.reveal_active();
        debug!("Listbox open active={:?}", self.active);
    }

    fn close(&mut self, now: Instant) {
        self.search.clear();
        if self.config.reduced_motion || self.config.fade.is_zero() {
            self.finish_close();
            return;
        }
        self.phase = Phase::Closing(Fade::out(now, self.config.fade, self.config.easing));
        debug!("Listbox closing over {:?}", self.config.fade);
    }

    fn finish_close(&mut self) {
        self.phase = Phase::Closed;
        self.active = None;
        self.panel_rect = None;
        debug!("Listbox closed");
    }

    /// Advance the exit fade. Returns true if anything needs redrawing.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Closing(fade) if fade.is_done(now) => {
                self.finish_close();
                true
            }
            Phase::Closing(_) => true,
            _ => false,
        }
    }

    /// When the running fade completes.
    pub fn deadline(&self) -> Option<Instant> {
        match self.phase {
            Phase::Closing(fade) => Some(fade.deadline()),
            _ => None,
        }
    }

    fn set_active(&mut self, index: usize, len: usize) {
        if len == 0 {
            return;
        }
        self.active = Some(index.min(len - 1));
        self.reveal_active();
    }

    fn step(&mut self, delta: isize, len: usize) {
        if len == 0 {
            return;
        }
        let next = match self.active {
            Some(i) => i.saturating_add_signed(delta),
            None if delta < 0 => len - 1,
            None => 0,
        };
        self.set_active(next, len);
    }

    /// Rows the panel shows at once: `max_visible`, or fewer when the
    /// screen clipped the panel last frame.
    fn visible_rows(&self) -> usize {
        let rows = self.config.max_visible.max(1) as usize;
        self.fitted_rows.map_or(rows, |fitted| fitted.clamp(1, rows))
    }

    /// Scroll so the highlighted row is in view.
    fn reveal_active(&mut self) {
        let Some(active) = self.active else { return };
        let rows = self.visible_rows();
        if active < self.scroll {
            self.scroll = active;
        } else if active >= self.scroll + rows {
            self.scroll = active + 1 - rows;
        }
    }

    fn scroll_by(&mut self, delta: i16, len: usize) {
        let max = len.saturating_sub(self.visible_rows());
        self.scroll = self
            .scroll
            .saturating_add_signed(delta as isize)
            .min(max);
    }

    /// Option index under a screen cell, if the panel is shown there.
    fn row_at(&self, x: u16, y: u16, len: usize) -> Option<usize> {
        let inner = self.panel_rect?.inner();
        if !inner.contains(x, y) {
            return None;
        }
        let index = self.scroll + (y - inner.y) as usize;
        (index < len).then_some(index)
    }

    fn over_button(&self, x: u16, y: u16) -> bool {
        self.button_rect.is_some_and(|r| r.contains(x, y))
    }

    fn over_panel(&self, x: u16, y: u16) -> bool {
        self.panel_rect.is_some_and(|r| r.contains(x, y))
    }
}

/// Per-row flags, derived from the highlight and the held value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionFlags {
    /// Row under keyboard or pointer focus.
    pub active: bool,
    /// Row is the held value (compared by identity).
    pub selected: bool,
}

impl OptionFlags {
    pub fn of<T>(index: usize, option: &T, active: Option<usize>, value: Option<&T>) -> Self {
        Self {
            active: active == Some(index),
            selected: value.is_some_and(|v| ptr::eq(v, option)),
        }
    }

    /// Row text style: accent background when active, bold when selected.
    pub fn row_pen(self, theme: &Theme) -> Pen {
        let pen = if self.active {
            Pen::new(theme.on_accent, theme.accent)
        } else {
            Pen::new(theme.text, theme.surface)
        };
        if self.selected { pen.bold() } else { pen }
    }

    /// Check mark style for selected rows.
    pub fn check_pen(self, theme: &Theme) -> Pen {
        let bg = self.row_pen(theme).bg;
        if self.active {
            Pen::new(theme.on_accent, bg)
        } else {
            Pen::new(theme.accent, bg)
        }
    }
}

/// What handling an event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Not for this listbox; the caller should keep routing it.
    Ignored,
    /// Handled; only visual state changed.
    Consumed,
    /// An option was picked and `on_change` was called once.
    Changed,
}

/// A listbox bound to its state, options and field for one call.
///
/// Built fresh for every event and every frame, the same way the page
/// rebuilds its widgets.
pub struct Listbox<'s, T: 'static> {
    state: &'s mut ListboxState,
    options: &'static [T],
    field: &'s Field<T>,
}

impl<'s, T: Choice + 'static> Listbox<'s, T> {
    pub fn new(state: &'s mut ListboxState, options: &'static [T], field: &'s Field<T>) -> Self {
        Self {
            state,
            options,
            field,
        }
    }

    /// Index of the held value in the option list.
    pub fn selected_index(&self) -> Option<usize> {
        let value = self.field.value?;
        self.options.iter().position(|o| ptr::eq(o, value))
    }

    pub fn flags(&self, index: usize) -> OptionFlags {
        match self.options.get(index) {
            Some(option) => OptionFlags::of(index, option, self.state.active, self.field.value),
            None => OptionFlags::default(),
        }
    }

    fn config_rows(&self) -> usize {
        self.state.config.max_visible.max(1) as usize
    }

    fn activate(&mut self, from: OpenFrom) -> Outcome {
        let selected = self.selected_index();
        self.state.open(selected, from, self.options.len());
        Outcome::Consumed
    }

    /// Pick an option: report it, then start closing.
    fn select(&mut self, index: usize, now: Instant) -> Outcome {
        if !self.state.is_open() {
            return Outcome::Ignored;
        }
        let Some(option) = self.options.get(index) else {
            return Outcome::Ignored;
        };
        debug!("Listbox[{}] select index={}", self.field.name, index);
        (self.field.on_change)(option);
        self.state.close(now);
        Outcome::Changed
    }

    /// Route an event. `focused` says whether the button has keyboard focus.
    pub fn handle(&mut self, event: &Event, focused: bool, now: Instant) -> Outcome {
        match self.state.phase {
            Phase::Open => self.handle_open(event, now),
            // A closing list takes no selections, but the button still works.
            Phase::Closed | Phase::Closing(_) => self.handle_closed(event, focused),
        }
    }

    fn handle_closed(&mut self, event: &Event, focused: bool) -> Outcome {
        match *event {
            Event::Key { key, modifiers } if focused && modifiers.none() => match key {
                Key::Enter | Key::Char(' ') | Key::Down => self.activate(OpenFrom::First),
                Key::Up => self.activate(OpenFrom::Last),
                _ => Outcome::Ignored,
            },
            Event::Click { x, y, .. } if self.state.over_button(x, y) => {
                self.activate(OpenFrom::First)
            }
            _ => Outcome::Ignored,
        }
    }

    fn handle_open(&mut self, event: &Event, now: Instant) -> Outcome {
        let len = self.options.len();
        match *event {
            Event::Key { key, modifiers } => {
                if modifiers.ctrl || modifiers.alt {
                    return Outcome::Ignored;
                }
                match key {
                    Key::Escape => {
                        self.state.close(now);
                        Outcome::Consumed
                    }
                    // Close, and let the caller move focus.
                    Key::Tab | Key::BackTab => {
                        self.state.close(now);
                        Outcome::Ignored
                    }
                    Key::Up => self.step(-1),
                    Key::Down => self.step(1),
                    Key::Home => self.jump(0),
                    Key::End => self.jump(len.saturating_sub(1)),
                    Key::PageUp => self.step(-(self.state.visible_rows() as isize)),
                    Key::PageDown => self.step(self.state.visible_rows() as isize),
                    Key::Char(' ') if !self.state.search.is_empty() => {
                        self.type_ahead(' ', now)
                    }
                    Key::Enter | Key::Char(' ') => match self.state.active {
                        Some(i) => self.select(i, now),
                        None => {
                            self.state.close(now);
                            Outcome::Consumed
                        }
                    },
                    Key::Char(c) => self.type_ahead(c, now),
                    _ => Outcome::Consumed,
                }
            }
            Event::Click { x, y, .. } => {
                if let Some(index) = self.state.row_at(x, y, len) {
                    return self.select(index, now);
                }
                if self.state.over_panel(x, y) {
                    return Outcome::Consumed;
                }
                self.state.close(now);
                if self.state.over_button(x, y) {
                    Outcome::Consumed
                } else {
                    // Outside: close and let the click reach its target.
                    Outcome::Ignored
                }
            }
            Event::MouseMove { x, y } => match self.state.row_at(x, y, len) {
                Some(index) => {
                    self.state.active = Some(index);
                    Outcome::Consumed
                }
                None => Outcome::Ignored,
            },
            Event::Scroll { x, y, delta } if self.state.over_panel(x, y) => {
                self.state.scroll_by(delta, len);
                Outcome::Consumed
            }
            _ => Outcome::Ignored,
        }
    }

    fn step(&mut self, delta: isize) -> Outcome {
        self.state.step(delta, self.options.len());
        Outcome::Consumed
    }

    fn jump(&mut self, index: usize) -> Outcome {
        self.state.set_active(index, self.options.len());
        Outcome::Consumed
    }

    /// Highlight the next option whose label starts with what was typed.
    fn type_ahead(&mut self, c: char, now: Instant) -> Outcome {
        let state = &mut *self.state;
        if state
            .last_search
            .is_none_or(|at| now.saturating_duration_since(at) > SEARCH_TIMEOUT)
        {
            state.search.clear();
        }
        state.search.extend(c.to_lowercase());
        state.last_search = Some(now);

        let len = self.options.len();
        if len == 0 {
            return Outcome::Consumed;
        }
        // A fresh search starts after the current row; a longer one may stay on it.
        let start = match state.active {
            Some(i) if state.search.chars().count() == 1 => i + 1,
            Some(i) => i,
            None => 0,
        };
        let query = state.search.as_str();
        let found = (0..len)
            .map(|offset| (start + offset) % len)
            .find(|&i| self.options[i].label().to_lowercase().starts_with(query));

        if let Some(index) = found {
            state.set_active(index, len);
        }
        Outcome::Consumed
    }

    /// Draw the button into `area` (three rows: border, text, border).
    pub fn render_button(&mut self, buf: &mut Buffer, area: Rect, theme: &Theme, focused: bool) {
        let area = Rect {
            height: area.height.min(3),
            ..area
        };
        self.state.button_rect = Some(area);

        let border = if focused || self.state.is_open() {
            theme.accent
        } else {
            theme.ring
        };
        buf.draw_box(area, border, theme.surface);

        let inner = area.inner();
        if inner.is_empty() {
            return;
        }
        let (text, pen) = match self.field.value {
            Some(value) => (value.label(), Pen::new(theme.text, theme.surface)),
            None => (
                self.state.config.placeholder.as_str(),
                Pen::new(theme.muted, theme.surface),
            ),
        };
        // One column of padding each side, two for the chevron.
        let room = (inner.width as usize).saturating_sub(4);
        buf.put_str(inner.x + 1, inner.y, &truncate(text, room), pen, inner.right());
        let chevron_x = inner.right().saturating_sub(2);
        buf.put_str(
            chevron_x,
            inner.y,
            "↕",
            Pen::new(theme.muted, theme.surface),
            inner.right(),
        );
    }

    /// Draw the option panel below the button, if it is visible. Call after
    /// everything it may overlap has been drawn.
    pub fn render_options(&mut self, buf: &mut Buffer, theme: &Theme, now: Instant) {
        if !self.state.is_visible() {
            return;
        }
        let Some(button) = self.state.button_rect else {
            return;
        };

        let len = self.options.len();
        let rows = len.min(self.config_rows()) as u16;
        let panel = Rect::new(button.x, button.bottom(), button.width, rows + 2)
            .intersect(buf.area());
        self.state.panel_rect = Some(panel);
        if panel.height < 3 {
            return;
        }

        // The screen may have cut the panel short; keep the highlight in view.
        let fitted = panel.inner().height as usize;
        if self.state.fitted_rows != Some(fitted) {
            self.state.fitted_rows = Some(fitted);
            self.state.scroll = self.state.scroll.min(len.saturating_sub(fitted));
            self.state.reveal_active();
        }

        let under = buf.snapshot(panel);
        buf.draw_box(panel, theme.ring, theme.surface);

        let inner = panel.inner();
        for row in 0..inner.height {
            let index = self.state.scroll + row as usize;
            let Some(option) = self.options.get(index) else {
                break;
            };
            let flags = self.flags(index);
            let row_rect = inner.row(row);
            let pen = flags.row_pen(theme);
            buf.fill(row_rect, pen.bg);

            // Left padding of one, three columns kept free for the check mark.
            let room = (row_rect.width as usize).saturating_sub(4);
            let label = truncate(option.label(), room);
            buf.put_str(row_rect.x + 1, row_rect.y, &label, pen, row_rect.right());

            if flags.selected && room > 0 {
                let x = row_rect.right().saturating_sub(2);
                buf.put_str(x, row_rect.y, "✓", flags.check_pen(theme), row_rect.right());
            }
        }

        if let Phase::Closing(fade) = self.state.phase {
            buf.fade_over(panel, &under, fade.opacity(now));
        }
    }
}
