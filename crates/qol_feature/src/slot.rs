//! Deferred, construct-once storage for a single feature.

/// Holds a value that is built on first access and reused afterwards.
///
/// Access requires `&mut self`, so there is no synchronisation; a slot lives
/// inside a context object driven from the host's tick thread.
#[derive(Debug)]
pub struct LazySlot<T> {
    value: Option<T>,
}

impl<T> LazySlot<T> {
    /// Create an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: None }
    }

    /// Returns the stored value, running `init` only if the slot is empty.
    pub fn get_or_init(&mut self, init: impl FnOnce() -> T) -> &mut T {
        self.value.get_or_insert_with(init)
    }

    /// Returns the stored value without constructing it.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Whether the value has been constructed.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.value.is_some()
    }
}

impl<T> Default for LazySlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
