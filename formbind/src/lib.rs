//! Form state and controlled widgets for terminal forms.
//!
//! A [`Form`] owns the values. A [`Controller`] binds one field of it to a
//! `(value, on_change)` pair, and widgets such as [`Listbox`] only ever see
//! that pair: they render the value they are given and report changes
//! through the callback.

pub mod alert;
pub mod button;
pub mod controller;
pub mod error;
pub mod focus;
pub mod form;
pub mod listbox;
pub mod prelude;
pub mod rules;
pub mod theme;

pub use alert::{Alert, AlertOutcome};
pub use button::Button;
pub use controller::{Controller, Field, OnChange};
pub use error::{FieldError, FormError};
pub use focus::FocusRing;
pub use form::{Form, SubscriptionId, to_pretty_json};
pub use listbox::{Choice, Listbox, ListboxConfig, ListboxState, OptionFlags, Outcome, Phase};
pub use rules::Rules;
pub use theme::Theme;
