use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::User;

/// Shared, mutable handle to a stored [`User`].
///
/// The registry hands out clones of the handle it keeps, so a change made
/// through any clone is visible through every other clone (and through the
/// registry). Cloning never copies the user.
#[derive(Clone)]
pub struct SharedUser(Arc<Mutex<User>>);

impl SharedUser {
    pub fn new(user: User) -> Self {
        Self(Arc::new(Mutex::new(user)))
    }

    // A panic while holding the lock cannot leave a User half-updated
    // (every mutator is a single assignment), so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, User> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with read access to the user.
    pub fn with<R>(&self, f: impl FnOnce(&User) -> R) -> R {
        f(&self.lock())
    }

    /// Runs `f` with write access to the user.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut User) -> R) -> R {
        f(&mut self.lock())
    }

    /// Returns a point-in-time copy of the user.
    pub fn snapshot(&self) -> User {
        self.lock().clone()
    }

    /// Returns `true` if both handles point at the same stored user.
    pub fn same_user(&self, other: &SharedUser) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn id(&self) -> String {
        self.with(|u| u.id().to_string())
    }

    pub fn is_active(&self) -> bool {
        self.with(User::is_active)
    }
}

impl fmt::Debug for SharedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedUser").field(&*self.lock()).finish()
    }
}

impl fmt::Display for SharedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.lock(), f)
    }
}
