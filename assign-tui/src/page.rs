//! The "Assigned to" form page.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use formbind::prelude::*;
use log::{debug, info, warn};
use serde::Serialize;
use termcell::Pen;
use termcell::text::display_width;

use crate::config::PageConfig;
use crate::people::{PEOPLE, Person};

/// The form's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Inputs {
    /// `None` serializes as `null`.
    pub person: Option<&'static Person>,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            person: Some(&PEOPLE[0]),
        }
    }
}

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Person,
    Submit,
}

/// Whether the runtime should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

const LABEL: &str = "Assigned to";
const HELP: &str = "Tab focus · Enter/Space open · ↑↓ move · Esc close · Ctrl+C quit";
const CONTENT_WIDTH: u16 = 40;

pub struct Page {
    config: PageConfig,
    form: Form<Inputs>,
    person: Controller<Inputs, Person>,
    listbox: ListboxState,
    submit: Button,
    focus: FocusRing<Focus>,
    alert: Option<Alert>,
    /// Set by the form subscription and by any visual change.
    needs_render: Arc<AtomicBool>,
}

impl Page {
    pub fn new(config: PageConfig) -> Self {
        let form = Form::new(Inputs::default());
        // Validating the person is possible; none is enforced.
        let person = Controller::new(
            &form,
            "person",
            |v: &Inputs| v.person,
            |v: &mut Inputs, p| v.person = p,
        )
        .rules(Rules::new());

        let needs_render = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&needs_render);
        form.subscribe(move |v: &Inputs| {
            debug!("person -> {:?}", v.person.map(|p| p.id));
            flag.store(true, Ordering::SeqCst);
        });

        Self {
            listbox: ListboxState::new(config.listbox.clone()),
            config,
            form,
            person,
            submit: Button::new("Submit"),
            focus: FocusRing::new([Focus::Person, Focus::Submit]),
            alert: None,
            needs_render,
        }
    }

    pub fn form(&self) -> &Form<Inputs> {
        &self.form
    }

    pub fn listbox(&self) -> &ListboxState {
        &self.listbox
    }

    pub fn focused(&self) -> Focus {
        self.focus.focused()
    }

    /// Text of the alert currently shown, if any.
    pub fn alert_message(&self) -> Option<&str> {
        self.alert.as_ref().map(Alert::message)
    }

    fn mark(&self) {
        self.needs_render.store(true, Ordering::SeqCst);
    }

    /// Returns true once per change that should be drawn.
    pub fn take_needs_render(&self) -> bool {
        self.needs_render.swap(false, Ordering::SeqCst)
    }

    /// When the runtime should wake up for the next animation frame.
    pub fn next_frame(&self, now: Instant) -> Option<Instant> {
        self.listbox
            .deadline()
            .map(|deadline| deadline.min(now + self.config.frame_interval))
    }

    /// Advance animations.
    pub fn tick(&mut self, now: Instant) {
        if self.listbox.tick(now) {
            self.mark();
        }
    }

    pub fn handle(&mut self, event: Event, now: Instant) -> Flow {
        if let Event::Key { key: Key::Char('c' | 'q'), modifiers } = event
            && modifiers.ctrl
        {
            info!("quit requested");
            return Flow::Quit;
        }
        if let Event::Resize { .. } = event {
            self.mark();
            return Flow::Continue;
        }

        // The alert blocks everything else until dismissed.
        if let Some(alert) = &self.alert {
            if alert.handle(&event) == AlertOutcome::Dismissed {
                self.alert = None;
                self.mark();
            }
            return Flow::Continue;
        }

        let field = self.person.field();
        let focused = self.focus.is_focused(Focus::Person);
        let was_visible = self.listbox.is_visible();
        let outcome = Listbox::new(&mut self.listbox, &PEOPLE, &field).handle(&event, focused, now);
        if outcome != Outcome::Ignored {
            if let Event::Click { .. } = event {
                self.focus.focus(Focus::Person);
            }
            self.mark();
            return Flow::Continue;
        }
        if was_visible != self.listbox.is_visible() || self.listbox.is_animating() {
            // Dismissed by Tab or an outside click; keep routing the event.
            self.mark();
        }

        match event {
            Event::Key { key: Key::Tab, .. } => {
                self.focus.next();
                self.mark();
            }
            Event::Key { key: Key::BackTab, .. } => {
                self.focus.prev();
                self.mark();
            }
            Event::Key { .. } | Event::Click { .. } => {
                let focused = self.focus.is_focused(Focus::Submit);
                if self.submit.handle(&event, focused) {
                    self.focus.focus(Focus::Submit);
                    self.submit();
                }
            }
            _ => {}
        }
        Flow::Continue
    }

    /// Submit the form and show the result in an alert.
    pub fn submit(&mut self) {
        let message = match self.form.submit(|values| to_pretty_json(values)) {
            Ok(json) => {
                info!("submitted: {}", json.replace('\n', " "));
                json
            }
            Err(FormError::Invalid(errors)) => errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
            Err(err) => {
                warn!("submit failed: {}", err);
                err.to_string()
            }
        };
        self.alert = Some(Alert::new(message));
        self.mark();
    }

    pub fn render(&mut self, buf: &mut Buffer, now: Instant) {
        let theme = self.config.theme;
        let area = buf.area();
        let width = CONTENT_WIDTH.min(area.width.saturating_sub(4));
        let x = area.x + (area.width - width) / 2;
        let top = (area.height / 4).min(4);

        buf.put_str(
            x,
            top,
            LABEL,
            Pen::new(theme.text, theme.background).bold(),
            x + width,
        );

        let field = self.person.field();
        let person_focused = self.focus.is_focused(Focus::Person);
        let submit_focused = self.focus.is_focused(Focus::Submit);

        self.submit.render(
            buf,
            Rect::new(x, top + 6, width, 3),
            &theme,
            submit_focused,
        );

        // The option panel overlaps the Submit button, so it goes last.
        let mut listbox = Listbox::new(&mut self.listbox, &PEOPLE, &field);
        listbox.render_button(buf, Rect::new(x, top + 2, width, 3), &theme, person_focused);
        listbox.render_options(buf, &theme, now);

        // On short screens the panel reaches the help row; leave it out then.
        let help_y = area.bottom().saturating_sub(2);
        let covered = self.listbox.is_visible()
            && self
                .listbox
                .panel_rect()
                .is_some_and(|panel| help_y >= panel.y && help_y < panel.bottom());
        if !covered {
            let help_x = area.x + area.width.saturating_sub(display_width(HELP) as u16) / 2;
            buf.put_str(
                help_x,
                help_y,
                HELP,
                Pen::new(theme.muted, theme.background),
                area.right(),
            );
        }

        if let Some(alert) = &mut self.alert {
            alert.render(buf, &theme);
        }
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("focus", &self.focus.focused())
            .field("phase", &self.listbox.phase())
            .field("alert", &self.alert.is_some())
            .finish_non_exhaustive()
    }
}
