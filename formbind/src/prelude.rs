//! Common imports for building a form page.

pub use crate::{
    Alert, AlertOutcome, Button, Choice, Controller, Field, FocusRing, Form, FormError, Listbox,
    ListboxConfig, ListboxState, Outcome, Phase, Rules, Theme, to_pretty_json,
};
pub use termcell::{Buffer, Event, Key, Modifiers, Rect};
