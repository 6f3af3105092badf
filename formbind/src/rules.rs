//! Validation rules for a single controlled field.

type Check<T> = Box<dyn Fn(Option<&T>) -> Result<(), String> + Send + Sync>;

/// Ordered validation rules for one field. An empty set accepts anything.
///
/// # Example
///
/// ```ignore
/// let rules = Rules::new()
///     .required("Pick someone")
///     .check(|p: Option<&Person>| match p {
///         Some(p) if p.id == 4 => Err("Tom is on leave".into()),
///         _ => Ok(()),
///     });
/// ```
pub struct Rules<T> {
    checks: Vec<Check<T>>,
}

impl<T> Rules<T> {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Reject an empty value.
    pub fn required(self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.check(move |value| match value {
            Some(_) => Ok(()),
            None => Err(message.clone()),
        })
    }

    /// Add a custom check.
    pub fn check<F>(mut self, f: F) -> Self
    where
        F: Fn(Option<&T>) -> Result<(), String> + Send + Sync + 'static,
    {
        self.checks.push(Box::new(f));
        self
    }

    /// Run the checks in order and return the first failure.
    pub fn validate(&self, value: Option<&T>) -> Result<(), String> {
        self.checks.iter().try_for_each(|check| check(value))
    }
}

impl<T> Default for Rules<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Rules<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rules")
            .field("checks", &self.checks.len())
            .finish()
    }
}
