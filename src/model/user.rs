use serde::{Deserialize, Serialize};
use std::fmt;

use crate::service::UserError;
use crate::text::is_blank;

/// Login count at which a user counts as a frequent user.
pub const FREQUENT_LOGIN_THRESHOLD: u32 = 10;

/// Represents a registered user in the system.
///
/// `name` and `email` are validated on every assignment through
/// [`set_name`](User::set_name) and [`set_email`](User::set_email).
/// Construction itself performs no validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: String,
    name: String,
    email: String,
    active: bool,
    login_count: u32,
}

impl User {
    /// Creates a new, active User with no recorded logins.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (checked by the registry, not here)
    /// * `name` - User's display name
    /// * `email` - User's email address
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            active: true,
            login_count: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn login_count(&self) -> u32 {
        self.login_count
    }

    /// Replaces the display name.
    ///
    /// # Errors
    /// [`UserError::InvalidArgument`] if `name` is blank. The previous name is kept.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), UserError> {
        let name = name.into();
        if is_blank(&name) {
            return Err(UserError::InvalidArgument("Name cannot be empty".to_string()));
        }
        self.name = name;
        Ok(())
    }

    /// Replaces the email address.
    ///
    /// # Errors
    /// [`UserError::InvalidArgument`] if `email` has no `@`. The previous email is kept.
    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), UserError> {
        let email = email.into();
        if !email.contains('@') {
            return Err(UserError::InvalidArgument(format!("Invalid email format: {email}")));
        }
        self.email = email;
        Ok(())
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Adds one login. Saturates at `u32::MAX`.
    pub fn increment_login_count(&mut self) {
        self.login_count = self.login_count.saturating_add(1);
    }

    pub fn reset_login_count(&mut self) {
        self.login_count = 0;
    }

    pub fn is_frequent_user(&self) -> bool {
        self.login_count >= FREQUENT_LOGIN_THRESHOLD
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User(id={}, name={}, email={}, active={}, login_count={})",
            self.id, self.name, self.email, self.active, self.login_count
        )
    }
}
