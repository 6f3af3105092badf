//! Binds one form field to a controlled widget.

use std::sync::Arc;

use log::debug;

use crate::form::Form;
use crate::rules::Rules;

/// Callback a controlled widget calls with the newly chosen option.
pub type OnChange<T> = Arc<dyn Fn(&'static T) + Send + Sync>;

/// What a controlled widget receives: the current value and the only way
/// to change it.
pub struct Field<T: 'static> {
    pub name: &'static str,
    pub value: Option<&'static T>,
    pub on_change: OnChange<T>,
}

impl<T: 'static> Clone for Field<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            value: self.value,
            on_change: Arc::clone(&self.on_change),
        }
    }
}

impl<T: std::fmt::Debug + 'static> std::fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// Connects a field of `V` holding `Option<&'static T>` to a widget.
///
/// Values are static references into a fixed option list, so the form
/// never holds a copy of an option.
///
/// # Example
///
/// ```ignore
/// let person = Controller::new(&form, "person", |v: &Inputs| v.person, |v, p| v.person = p)
///     .rules(Rules::new());
/// let field = person.field();
/// Listbox::new(&mut state, &PEOPLE, &field).handle(event, true, now);
/// ```
pub struct Controller<V, T: 'static> {
    form: Form<V>,
    name: &'static str,
    get: fn(&V) -> Option<&'static T>,
    set: fn(&mut V, Option<&'static T>),
}

impl<V, T> Controller<V, T>
where
    V: Clone + Send + Sync + 'static,
    T: 'static,
{
    pub fn new(
        form: &Form<V>,
        name: &'static str,
        get: fn(&V) -> Option<&'static T>,
        set: fn(&mut V, Option<&'static T>),
    ) -> Self {
        Self {
            form: form.clone(),
            name,
            get,
            set,
        }
    }

    /// Register validation rules for this field with the form.
    pub fn rules(self, rules: Rules<T>) -> Self {
        let get = self.get;
        self.form
            .register(self.name, move |values| rules.validate(get(values)));
        self
    }

    /// Current value of the field.
    pub fn value(&self) -> Option<&'static T> {
        self.form.with_values(|v| (self.get)(v))
    }

    /// Write a value through the form, notifying its subscribers.
    pub fn set(&self, value: Option<&'static T>) {
        let set = self.set;
        self.form.update(|v| set(v, value));
    }

    /// The `(value, on_change)` pair for a widget.
    pub fn field(&self) -> Field<T> {
        let this = self.clone();
        Field {
            name: self.name,
            value: self.value(),
            on_change: Arc::new(move |choice| {
                debug!("Controller[{}] on_change", this.name);
                this.set(Some(choice));
            }),
        }
    }
}

impl<V, T: 'static> Clone for Controller<V, T> {
    fn clone(&self) -> Self {
        Self {
            form: self.form.clone(),
            name: self.name,
            get: self.get,
            set: self.set,
        }
    }
}

impl<V, T: 'static> std::fmt::Debug for Controller<V, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
