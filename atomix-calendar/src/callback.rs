//! Comparable callback handles for picker change notifications.
use std::{fmt, sync::Arc};

/// Shared handler for `Fn(T)`.
///
/// Handles compare by identity (`Arc::ptr_eq`), so argument structs holding
/// them can still derive or implement equality cheaply.
pub struct ChangeHandler<T> {
    inner: Arc<dyn Fn(T) + Send + Sync>,
}

impl<T> ChangeHandler<T> {
    /// Create a handler from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(handler),
        }
    }

    /// Invoke the handler.
    pub fn call(&self, value: T) {
        (self.inner)(value)
    }
}

impl<T, F> From<F> for ChangeHandler<T>
where
    F: Fn(T) + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T> Clone for ChangeHandler<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> PartialEq for ChangeHandler<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Eq for ChangeHandler<T> {}

impl<T> fmt::Debug for ChangeHandler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ChangeHandler")
    }
}
