//! The form state holder.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, info, warn};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{FieldError, FormError};

/// Identifies a subscription so it can be removed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<V> = Arc<dyn Fn(&V) + Send + Sync>;
type Check<V> = Box<dyn Fn(&V) -> Result<(), String> + Send + Sync>;

/// A named validation check over the whole value.
struct FieldCheck<V> {
    field: &'static str,
    check: Check<V>,
}

struct FormInner<V> {
    values: V,
    defaults: V,
    subscribers: Vec<(SubscriptionId, Subscriber<V>)>,
    checks: Vec<FieldCheck<V>>,
    next_subscription: u64,
    submit_count: usize,
}

/// Owns a form's values and mediates every read and write.
///
/// `Form` is a cheap handle: clones share the same values, so a clone can be
/// moved into a field's change callback. Writes mark the form dirty and call
/// every subscriber with the new values.
///
/// # Example
///
/// ```ignore
/// let form = Form::new(Inputs { person: Some(&PEOPLE[0]) });
/// form.subscribe(|v: &Inputs| log::debug!("now {:?}", v.person));
/// form.update(|v| v.person = Some(&PEOPLE[2]));
/// let json = form.submit(|v| to_pretty_json(v))?;
/// ```
pub struct Form<V> {
    inner: Arc<RwLock<FormInner<V>>>,
    dirty: Arc<AtomicBool>,
}

impl<V: Clone + Send + Sync + 'static> Form<V> {
    /// Create a form whose initial and reset values are `defaults`.
    pub fn new(defaults: V) -> Self {
        Self {
            inner: Arc::new(RwLock::new(FormInner {
                values: defaults.clone(),
                defaults,
                subscribers: Vec::new(),
                checks: Vec::new(),
                next_subscription: 0,
                submit_count: 0,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, FormInner<V>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FormInner<V>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// A snapshot of the current values.
    pub fn get_values(&self) -> V {
        self.read().values.clone()
    }

    /// Read the current values without cloning them.
    pub fn with_values<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&self.read().values)
    }

    /// Replace the current values.
    pub fn set_values(&self, values: V) {
        self.update(|v| *v = values);
    }

    /// Modify the current values in place, then notify subscribers.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut V),
    {
        let (values, subscribers) = {
            let mut inner = self.write();
            f(&mut inner.values);
            let subscribers: Vec<_> = inner.subscribers.iter().map(|(_, s)| s.clone()).collect();
            (inner.values.clone(), subscribers)
        };
        self.dirty.store(true, Ordering::SeqCst);

        // Called without the lock held so subscribers may read the form.
        for subscriber in subscribers {
            subscriber(&values);
        }
    }

    /// Restore the values the form was created with.
    pub fn reset(&self) {
        let defaults = self.read().defaults.clone();
        debug!("Form::reset");
        self.set_values(defaults);
    }

    /// Call `f` with the new values after every write.
    pub fn subscribe<F>(&self, f: F) -> SubscriptionId
    where
        F: Fn(&V) + Send + Sync + 'static,
    {
        let mut inner = self.write();
        let id = SubscriptionId(inner.next_subscription);
        inner.next_subscription += 1;
        inner.subscribers.push((id, Arc::new(f)));
        id
    }

    /// Remove a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.write();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sid, _)| *sid != id);
        inner.subscribers.len() != before
    }

    /// Register the validation check for `field`, replacing any earlier one.
    pub fn register<F>(&self, field: &'static str, check: F)
    where
        F: Fn(&V) -> Result<(), String> + Send + Sync + 'static,
    {
        let mut inner = self.write();
        inner.checks.retain(|c| c.field != field);
        inner.checks.push(FieldCheck {
            field,
            check: Box::new(check),
        });
    }

    /// Run every registered check against the current values.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let inner = self.read();
        let errors: Vec<FieldError> = inner
            .checks
            .iter()
            .filter_map(|c| {
                (c.check)(&inner.values).err().map(|message| FieldError {
                    field: c.field.to_string(),
                    message,
                })
            })
            .collect();

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Validate, then hand a snapshot of the values to `handler`.
    ///
    /// The handler is not called when a check fails.
    pub fn submit<R, F>(&self, handler: F) -> Result<R, FormError>
    where
        F: FnOnce(&V) -> Result<R, FormError>,
    {
        if let Err(errors) = self.validate() {
            warn!("Form::submit rejected: {} invalid field(s)", errors.len());
            return Err(FormError::Invalid(errors));
        }

        let values = self.get_values();
        let out = handler(&values)?;

        let count = {
            let mut inner = self.write();
            inner.submit_count += 1;
            inner.submit_count
        };
        info!("Form::submit #{}", count);
        Ok(out)
    }

    /// Number of submissions that reached the handler and succeeded.
    pub fn submit_count(&self) -> usize {
        self.read().submit_count
    }

    /// Check if the values changed since the last [`clear_dirty`](Self::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<V> Clone for Form<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<V> std::fmt::Debug for Form<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form")
            .field("dirty", &self.dirty.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

/// Serialize `value` as JSON indented by four spaces.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, FormError> {
    let mut out = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    // serde_json only ever writes valid UTF-8.
    Ok(String::from_utf8_lossy(&out).into_owned())
}
