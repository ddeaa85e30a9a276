#[cfg(feature = "std")]
pub struct OnceCell<T>(std::sync::OnceLock<T>);

#[cfg(feature = "std")]
impl<T> OnceCell<T> {
    pub const fn new() -> Self {
        Self(std::sync::OnceLock::new())
    }

    pub fn get(&self) -> Option<&T> {
        self.0.get()
    }

    /// Resolves the value unless it is already set.
    ///
    /// Concurrent first callers may each run `init`; the first to finish wins
    /// and the others drop their value.
    pub fn get_or_try_init<E>(&self, init: impl FnOnce() -> Result<T, E>) -> Result<&T, E> {
        if let Some(value) = self.0.get() {
            return Ok(value);
        }
        let value = init()?;
        Ok(self.0.get_or_init(|| value))
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub struct OnceCell<T>(spin::Once<T>);

#[cfg(all(not(feature = "std"), feature = "alloc"))]
impl<T> OnceCell<T> {
    pub const fn new() -> Self {
        Self(spin::Once::new())
    }

    pub fn get(&self) -> Option<&T> {
        self.0.get()
    }

    pub fn get_or_try_init<E>(&self, init: impl FnOnce() -> Result<T, E>) -> Result<&T, E> {
        self.0.try_call_once(init)
    }
}
